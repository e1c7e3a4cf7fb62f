//! Static menu catalog: sections, categories, and priced items.
//!
//! The catalog is fixed reference data. Prices are integer cents so that
//! totals never accumulate floating-point drift.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Top-level menu sections. The set is closed and known at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    Veg,
    NonVeg,
    Desserts,
}

impl Section {
    /// All sections, in display order.
    pub const ALL: [Section; 3] = [Section::Veg, Section::NonVeg, Section::Desserts];

    /// Human-readable page title for this section.
    pub fn title(&self) -> &'static str {
        match self {
            Section::Veg => "Veg",
            Section::NonVeg => "Non-Veg",
            Section::Desserts => "Desserts",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Error returned when a section identifier is not one of the predefined set.
///
/// The caller should treat this as a programming error: the section set is
/// fixed, so an unknown identifier means a bad argument, not a user typo
/// worth recovering from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSectionError(pub String);

impl fmt::Display for UnknownSectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown menu section '{}' (expected one of: veg, non-veg, desserts)",
            self.0
        )
    }
}

impl std::error::Error for UnknownSectionError {}

impl FromStr for Section {
    type Err = UnknownSectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "veg" => Ok(Section::Veg),
            "non-veg" | "nonveg" | "non_veg" => Ok(Section::NonVeg),
            "desserts" | "dessert" => Ok(Section::Desserts),
            _ => Err(UnknownSectionError(s.to_string())),
        }
    }
}

/// A single purchasable item. `price` is in cents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub name: &'static str,
    pub price: u64,
}

/// A titled grouping of items within a section's page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub title: &'static str,
    pub items: Vec<MenuItem>,
}

fn item(name: &'static str, price: u64) -> MenuItem {
    MenuItem { name, price }
}

/// Returns the categories shown on the given section's page, in display order.
///
/// Total over [`Section`]; the fallible edge is [`Section::from_str`], which
/// rejects identifiers outside the predefined set.
pub fn categories_for(section: Section) -> Vec<Category> {
    match section {
        Section::Veg => vec![
            Category {
                title: "Starters",
                items: vec![
                    item("Paneer Tikka", 500),
                    item("Veg Pakora", 400),
                    item("Samosa", 200),
                ],
            },
            Category {
                title: "Chinese",
                items: vec![
                    item("Veg Noodles", 700),
                    item("Manchurian", 600),
                    item("Spring Rolls", 300),
                ],
            },
        ],
        Section::NonVeg => vec![
            Category {
                title: "Starters",
                items: vec![
                    item("Chicken Wings", 800),
                    item("Fish Fry", 700),
                    item("Seekh Kebab", 900),
                ],
            },
            Category {
                title: "Main Dishes",
                items: vec![
                    item("Chicken Curry", 1200),
                    item("Mutton Biryani", 1500),
                    item("Grilled Fish", 1400),
                ],
            },
        ],
        Section::Desserts => vec![Category {
            title: "Desserts",
            items: vec![
                item("Chocolate Cake", 700),
                item("Ice Cream", 500),
                item("Pudding", 400),
            ],
        }],
    }
}
