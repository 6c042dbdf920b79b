//! Item - Trait and implementations for usable inventory items

mod armor;
mod consumable;
mod weapon;

pub use armor::Armor;
pub use consumable::Consumable;
pub use weapon::Weapon;

use crate::character::Character;
use crate::types::ItemKind;
use serde::{Deserialize, Serialize};

/// Trait for anything the player can pick from the inventory and use
///
/// Items are immutable after creation and are never consumed: using one
/// applies its effect and leaves it in place, so repeat uses stack.
pub trait Item: Send + Sync {
    /// Display name shown in the inventory table
    fn name(&self) -> &str;

    /// The item's listed value (damage, defense or healing)
    fn value(&self) -> i32;

    /// Which variant this item is
    fn kind(&self) -> ItemKind;

    /// Apply the item's effect to the character
    fn apply(&self, character: &mut Character) -> UseEffect;
}

/// Stat change applied by a single item use
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UseEffect {
    /// Name of the item that was used
    pub item_name: String,
    /// Variant of the item that was used
    pub kind: ItemKind,
    /// Size of the stat change
    pub amount: i32,
}
