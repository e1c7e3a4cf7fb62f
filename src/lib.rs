//! # Tiffin - Single-Session Order Entry
//!
//! Tiffin is a small restaurant order-entry tool: browse a fixed menu,
//! adjust per-item quantities, watch the running total, place the order.
//!
//! ## Core Concepts
//!
//! - **Catalog**: static, immutable menu data grouped into sections
//!   (Veg, Non-Veg, Desserts) of categorized, priced items
//! - **Order model**: the session's mutable item → quantity mapping and the
//!   logic that derives itemized summaries and grand totals from it
//! - **Session**: one run of the program; the order model is created empty
//!   at launch and discarded at exit, never persisted
//!
//! The order model is UI-free and owns no rendering; the CLI layer forwards
//! user gestures into it and re-renders from [`order::OrderModel::summary`]
//! after every change.
//!
//! ## Modules
//!
//! - [`catalog`] - Static menu sections, categories, and priced items
//! - [`order`] - Order state: quantity adjustment, summaries, totals
//! - [`formatters`] - Data-to-text rendering of menus, summaries, receipts
//! - [`ui`] - Color scheme and formatting helpers
//! - [`cli`] - clap argument definitions
//!
//! ## Example
//!
//! ```
//! use tiffin::order::OrderModel;
//!
//! let mut order = OrderModel::new();
//! order.adjust_quantity("Samosa", 200, 1);
//! order.adjust_quantity("Paneer Tikka", 500, 2);
//!
//! let summary = order.summary();
//! assert_eq!(summary.lines.len(), 2);
//! assert_eq!(summary.grand_total, 1200);
//! ```

// Re-export all public modules
pub mod catalog;
pub mod cli;
pub mod formatters;
pub mod order;
pub mod ui;

/// Generate a UTC timestamp in ISO 8601 format: `YYYY-MM-DDTHH:MM:SSZ`
///
/// This function uses `chrono::Utc::now()` to ensure the timestamp is truly in UTC,
/// not local time with a misleading `Z` suffix.
pub fn utc_now_iso() -> String {
    chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string()
}
