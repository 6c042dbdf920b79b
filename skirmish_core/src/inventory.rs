//! Inventory - Ordered item storage and the fixed-width table view

use crate::item::Item;

/// Width of the dashed separator rule
const RULE_WIDTH: usize = 56;
/// Width of the right-aligned table header
const HEADER_WIDTH: usize = 30;
/// Column widths: item number, name, type, value
const NUMBER_WIDTH: usize = 11;
const NAME_WIDTH: usize = 15;
const TYPE_WIDTH: usize = 15;
const VALUE_WIDTH: usize = 12;

/// Ordered collection of the player's items
///
/// Insertion order is display order is selection order. Indices shown to
/// the player are 1-based and stay stable for the whole run; nothing is
/// added or removed after setup.
#[derive(Default)]
pub struct Inventory {
    items: Vec<Box<dyn Item>>,
}

impl Inventory {
    /// Create an empty inventory
    pub fn new() -> Self {
        Inventory { items: Vec::new() }
    }

    /// Append an item; it keeps this slot for the whole run
    pub fn add(&mut self, item: Box<dyn Item>) {
        self.items.push(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up an item by 0-based index
    pub fn get(&self, index: usize) -> Option<&dyn Item> {
        self.items.get(index).map(|item| item.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Item> {
        self.items.iter().map(|item| item.as_ref())
    }

    /// Render the inventory as a fixed-width table
    ///
    /// Header, rule, column headers, one row per item with its 1-based
    /// index, closing rule. Names longer than their column are not
    /// truncated; the row just runs wide.
    pub fn render_table(&self) -> String {
        let mut lines = Vec::new();
        lines.push(format!("{:>width$} ", "Inventory", width = HEADER_WIDTH));
        lines.push(rule());
        lines.push(format_row("Item No.", "Item", "Type", "Value"));
        for (i, item) in self.items.iter().enumerate() {
            lines.push(format_row(
                &(i + 1).to_string(),
                item.name(),
                item.kind().label(),
                &item.value().to_string(),
            ));
        }
        lines.push(rule());
        lines.join("\n")
    }
}

/// The 56-character dashed separator used between display blocks
pub fn rule() -> String {
    format!("{:->width$}", " ", width = RULE_WIDTH)
}

fn format_row(number: &str, name: &str, kind: &str, value: &str) -> String {
    format!(
        "{:<num$}{:<name$}{:<kind$}{:<val$}",
        number,
        name,
        kind,
        value,
        num = NUMBER_WIDTH,
        name = NAME_WIDTH,
        kind = TYPE_WIDTH,
        val = VALUE_WIDTH,
    )
}
