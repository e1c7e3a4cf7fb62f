//! Menu printing command.

use anyhow::Result;

use tiffin::catalog::{self, Section};
use tiffin::formatters;

/// Print one menu section, or every section when none is given.
///
/// An unknown section identifier is a fatal error: the section set is fixed
/// at build time, so there is nothing to recover.
pub fn cmd_menu(section: Option<&str>, json: bool) -> Result<()> {
    let sections: Vec<Section> = match section {
        Some(id) => vec![id.parse()?],
        None => Section::ALL.to_vec(),
    };

    if json {
        let pages: Vec<serde_json::Value> = sections
            .iter()
            .map(|&section| {
                serde_json::json!({
                    "section": section,
                    "categories": catalog::categories_for(section),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&pages)?);
        return Ok(());
    }

    for (i, &section) in sections.iter().enumerate() {
        if i > 0 {
            println!();
        }
        let categories = catalog::categories_for(section);
        println!("{}", formatters::format_menu_page(section, &categories));
    }

    Ok(())
}
