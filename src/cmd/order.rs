//! Interactive order session.
//!
//! Drives one [`OrderModel`] through terminal prompts: browse a section,
//! pick an item, add or remove one, review the running total, place the
//! order. The model is the single source of truth; the session re-renders
//! the summary from it after every adjustment.

use anyhow::Result;
use colored::Colorize;
use dialoguer::Select;

use tiffin::catalog::{self, MenuItem, Section};
use tiffin::formatters;
use tiffin::order::OrderModel;
use tiffin::ui;

/// Run the interactive session until the user quits.
pub fn cmd_order() -> Result<()> {
    if !atty::is(atty::Stream::Stdin) {
        anyhow::bail!("`tiffin order` requires an interactive terminal");
    }

    let mut order = OrderModel::new();

    if !ui::is_quiet() {
        println!("{}", "Welcome to tiffin. Build your order below.".bold());
    }

    loop {
        let choices = vec![
            "Browse Veg",
            "Browse Non-Veg",
            "Browse Desserts",
            "Review order",
            "Place order",
            "Quit",
        ];

        let selection = Select::new()
            .with_prompt("? What next")
            .items(&choices)
            .default(0)
            .interact()?;

        match selection {
            0 => browse_section(&mut order, Section::Veg)?,
            1 => browse_section(&mut order, Section::NonVeg)?,
            2 => browse_section(&mut order, Section::Desserts)?,
            3 => println!("{}", formatters::format_order_summary(&order.summary())),
            4 => place_order(&order),
            _ => break,
        }
    }

    Ok(())
}

/// Browse one section: show its page, then loop item selection until "Back".
fn browse_section(order: &mut OrderModel, section: Section) -> Result<()> {
    let categories = catalog::categories_for(section);
    println!("{}", formatters::format_menu_page(section, &categories));

    let items: Vec<MenuItem> = categories.into_iter().flat_map(|c| c.items).collect();

    loop {
        let mut labels: Vec<String> = items
            .iter()
            .map(|item| {
                let mut label =
                    format!("{:<25} {}", item.name, ui::format::money(item.price));
                let qty = order.quantity(item.name);
                if qty > 0 {
                    label.push_str(&format!("  [x{}]", qty));
                }
                label
            })
            .collect();
        labels.push("Back".to_string());

        let pick = Select::new()
            .with_prompt(format!("? {} item", section.title()))
            .items(&labels)
            .default(0)
            .interact()?;

        if pick == items.len() {
            return Ok(());
        }
        let item = &items[pick];

        let actions = vec!["Add one", "Remove one", "Back"];
        let action = Select::new()
            .with_prompt(format!("? {}", item.name))
            .items(&actions)
            .default(0)
            .interact()?;

        match action {
            // The item's identity and price travel with the gesture; the
            // model never looks anything up itself.
            0 => order.adjust_quantity(item.name, item.price, 1),
            1 => order.adjust_quantity(item.name, item.price, -1),
            _ => continue,
        }

        if !ui::is_quiet() {
            println!("{}", formatters::format_order_summary(&order.summary()));
        }
    }
}

/// Place the current order. Empty orders are caught here, not in the model.
fn place_order(order: &OrderModel) {
    if order.is_empty() {
        println!(
            "{}",
            ui::colors::warning("Your order is empty! Please add items to your order.")
        );
        return;
    }

    let placed = order.place_order();
    println!(
        "{}",
        formatters::format_receipt(&placed, &tiffin::utc_now_iso())
    );
    // The model is intentionally left populated: the user can keep editing
    // and place an updated order in the same session.
}
