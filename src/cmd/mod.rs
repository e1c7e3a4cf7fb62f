//! Command module structure for tiffin CLI

pub mod menu;
pub mod order;
pub mod util;
