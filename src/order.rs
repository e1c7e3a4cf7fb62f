//! The order model: the session's selected items and derived totals.
//!
//! An [`OrderModel`] is the single source of truth for what the user has
//! selected. It holds one entry per item name, insertion-ordered so that
//! rendered summaries are deterministic within a session. All money is in
//! integer cents.
//!
//! The model is UI-free: the presentation layer forwards quantity gestures
//! into [`OrderModel::adjust_quantity`] and re-renders from
//! [`OrderModel::summary`] after each change.

use serde::Serialize;

/// One selected item. Quantity is always ≥ 1; an entry whose quantity would
/// drop to zero is removed instead of stored.
#[derive(Debug, Clone)]
struct Entry {
    name: String,
    unit_price: u64,
    quantity: u32,
}

/// Derived descriptor for one order line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineItem {
    pub name: String,
    /// Unit price in cents, as captured at selection time.
    pub unit_price: u64,
    pub quantity: u32,
    /// `unit_price * quantity`, in cents.
    pub line_total: u64,
}

/// Itemized view of the whole order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderSummary {
    pub lines: Vec<LineItem>,
    /// Sum of all line totals, in cents.
    pub grand_total: u64,
}

/// Mutable selection state for one ordering session.
///
/// Created empty, mutated only through [`adjust_quantity`](Self::adjust_quantity),
/// and discarded with the session. Placing an order does not clear it, so the
/// user can re-place or keep editing afterwards.
#[derive(Debug, Default)]
pub struct OrderModel {
    entries: Vec<Entry>,
}

impl OrderModel {
    /// Create an empty order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a signed quantity change for `name`.
    ///
    /// Clamp-at-zero semantics: if the new quantity would be negative the
    /// call is a no-op (repeatedly pressing "decrease" on an absent item is
    /// harmless), if it reaches exactly zero the entry is removed, otherwise
    /// the entry is set to `(unit_price, new quantity)`.
    ///
    /// The model does not validate `unit_price` against the catalog; the
    /// caller passes the price alongside the name, and the stored price is
    /// refreshed on every positive adjustment.
    pub fn adjust_quantity(&mut self, name: &str, unit_price: u64, delta: i32) {
        let current = self.quantity(name);
        let new = i64::from(current) + i64::from(delta);
        if new < 0 {
            return;
        }
        if new == 0 {
            self.entries.retain(|e| e.name != name);
            return;
        }
        let new = new as u32;
        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(entry) => {
                entry.unit_price = unit_price;
                entry.quantity = new;
            }
            None => self.entries.push(Entry {
                name: name.to_string(),
                unit_price,
                quantity: new,
            }),
        }
    }

    /// Current quantity for `name`, or 0 if not selected.
    pub fn quantity(&self, name: &str) -> u32 {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.quantity)
            .unwrap_or(0)
    }

    /// True iff no items are selected.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Itemized lines plus grand total, in first-added order.
    ///
    /// Pure read; calling it twice with no intervening mutation yields
    /// identical results.
    pub fn summary(&self) -> OrderSummary {
        let lines: Vec<LineItem> = self
            .entries
            .iter()
            .map(|e| LineItem {
                name: e.name.clone(),
                unit_price: e.unit_price,
                quantity: e.quantity,
                line_total: e.unit_price * u64::from(e.quantity),
            })
            .collect();
        let grand_total = lines.iter().map(|l| l.line_total).sum();
        OrderSummary { lines, grand_total }
    }

    /// Produce the order as placed.
    ///
    /// Same data as [`summary`](Self::summary); the model is left populated
    /// so the order can be edited and re-placed. Callers exposing a "place
    /// order" affordance must check [`is_empty`](Self::is_empty) first and
    /// show an informational notice instead of placing an empty order.
    pub fn place_order(&self) -> OrderSummary {
        self.summary()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_item_summary() {
        let mut order = OrderModel::new();
        order.adjust_quantity("Samosa", 200, 1);

        let summary = order.summary();
        assert_eq!(summary.lines.len(), 1);
        assert_eq!(
            summary.lines[0],
            LineItem {
                name: "Samosa".to_string(),
                unit_price: 200,
                quantity: 1,
                line_total: 200,
            }
        );
        assert_eq!(summary.grand_total, 200);
    }

    #[test]
    fn test_add_then_remove_empties_order() {
        let mut order = OrderModel::new();
        order.adjust_quantity("Samosa", 200, 1);
        order.adjust_quantity("Samosa", 200, -1);
        assert!(order.is_empty());
        assert!(order.summary().lines.is_empty());
    }

    #[test]
    fn test_decrease_on_empty_is_noop() {
        let mut order = OrderModel::new();
        order.adjust_quantity("Samosa", 200, -1);
        assert!(order.is_empty());
        assert_eq!(order.quantity("Samosa"), 0);
    }

    #[test]
    fn test_quantity_never_negative() {
        let mut order = OrderModel::new();
        order.adjust_quantity("Samosa", 200, 2);
        order.adjust_quantity("Samosa", 200, -5);
        // Would go to -3: clamped, entry untouched.
        assert_eq!(order.quantity("Samosa"), 2);
    }

    #[test]
    fn test_grand_total_over_multiple_items() {
        let mut order = OrderModel::new();
        order.adjust_quantity("Samosa", 200, 3);
        order.adjust_quantity("Paneer Tikka", 500, 2);
        assert_eq!(order.summary().grand_total, 1600);
    }

    #[test]
    fn test_summary_insertion_order_is_stable() {
        let mut order = OrderModel::new();
        order.adjust_quantity("Pudding", 400, 1);
        order.adjust_quantity("Samosa", 200, 1);
        order.adjust_quantity("Pudding", 400, 1);

        let summary = order.summary();
        let names: Vec<&str> = summary
            .lines
            .iter()
            .map(|l| l.name.as_str())
            .collect();
        assert_eq!(names, vec!["Pudding", "Samosa"]);
    }

    #[test]
    fn test_summary_is_idempotent() {
        let mut order = OrderModel::new();
        order.adjust_quantity("Ice Cream", 500, 2);
        assert_eq!(order.summary(), order.summary());
    }

    #[test]
    fn test_is_empty_matches_summary() {
        let mut order = OrderModel::new();
        assert!(order.is_empty());
        assert!(order.summary().lines.is_empty());

        order.adjust_quantity("Samosa", 200, 1);
        assert!(!order.is_empty());
        assert!(!order.summary().lines.is_empty());
    }

    #[test]
    fn test_net_delta_zero_or_less_means_absent() {
        let mut order = OrderModel::new();
        order.adjust_quantity("Fish Fry", 700, 1);
        order.adjust_quantity("Fish Fry", 700, 1);
        order.adjust_quantity("Fish Fry", 700, -1);
        order.adjust_quantity("Fish Fry", 700, -1);
        order.adjust_quantity("Fish Fry", 700, -1);
        assert!(order.summary().lines.iter().all(|l| l.name != "Fish Fry"));
    }

    #[test]
    fn test_place_order_does_not_clear_state() {
        let mut order = OrderModel::new();
        order.adjust_quantity("Samosa", 200, 1);

        let placed = order.place_order();
        assert_eq!(placed.grand_total, 200);

        // Reference behavior: state survives a placed order, so placing
        // again without edits resubmits the same order.
        assert!(!order.is_empty());
        assert_eq!(order.place_order(), placed);
    }

    #[test]
    fn test_positive_adjust_refreshes_stored_price() {
        let mut order = OrderModel::new();
        order.adjust_quantity("Samosa", 200, 1);
        order.adjust_quantity("Samosa", 250, 1);

        let summary = order.summary();
        assert_eq!(summary.lines[0].unit_price, 250);
        assert_eq!(summary.lines[0].quantity, 2);
        assert_eq!(summary.grand_total, 500);
    }
}
