//! Output formatters for catalog and order data
//!
//! Provides formatters that transform catalog pages and order summaries into
//! display text. Pure data-to-string; printing is the caller's job.

use colored::Colorize;

use crate::catalog::{Category, Section};
use crate::order::OrderSummary;
use crate::ui;

/// Format one section's menu page: title, then each category with its items
/// and prices.
pub fn format_menu_page(section: Section, categories: &[Category]) -> String {
    let mut output = vec![
        section.title().bold().to_string(),
        ui::format::separator(section.title().len()),
    ];

    for category in categories {
        output.push(String::new());
        output.push(category.title.bold().to_string());
        for item in &category.items {
            output.push(format!(
                "  {:<25} {}",
                item.name,
                ui::format::money(item.price).dimmed()
            ));
        }
    }

    output.join("\n")
}

/// Format the current order as itemized lines plus a grand total.
///
/// Line shape matches the reference display: `2x Samosa @ $2.00 = $4.00`.
pub fn format_order_summary(summary: &OrderSummary) -> String {
    let mut output = vec!["Current Order".bold().to_string()];

    if summary.lines.is_empty() {
        output.push("  (no items)".dimmed().to_string());
    } else {
        for line in &summary.lines {
            output.push(format!(
                "  {}x {} @ {} = {}",
                line.quantity,
                line.name.cyan(),
                ui::format::money(line.unit_price),
                ui::format::money(line.line_total)
            ));
        }
    }

    output.push(format!(
        "Total: {}",
        ui::format::money(summary.grand_total).bold()
    ));
    output.join("\n")
}

/// Format a placed-order receipt with a timestamp and thank-you note.
pub fn format_receipt(summary: &OrderSummary, placed_at: &str) -> String {
    let mut output = vec![
        "Order Placed".bold().to_string(),
        ui::format::separator(12),
        format!("placed: {}", placed_at.dimmed()),
        String::new(),
    ];

    for line in &summary.lines {
        output.push(format!(
            "  {}x {} @ {} = {}",
            line.quantity,
            line.name.cyan(),
            ui::format::money(line.unit_price),
            ui::format::money(line.line_total)
        ));
    }

    output.push(String::new());
    output.push(format!(
        "Total: {}",
        ui::format::money(summary.grand_total).bold()
    ));
    output.push(String::new());
    output.push("Thank you. Order placed. Go back to the menu to update the order.".to_string());
    output.join("\n")
}
