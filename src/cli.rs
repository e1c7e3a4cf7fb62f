//! CLI argument definitions for tiffin.

use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "tiffin")]
#[command(version)]
#[command(about = "Single-session restaurant order entry", long_about = None)]
#[command(
    after_help = "GETTING STARTED:\n    tiffin menu                Print the full menu\n    tiffin order               Start an interactive order session\n\n    The session keeps a running total; place the order when you are done."
)]
pub struct Cli {
    /// Suppress all non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print a menu section
    Menu {
        /// Section to print (veg, non-veg, desserts); all sections when omitted
        section: Option<String>,
        /// Emit the section data as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },
    /// Start an interactive order session
    Order,
    /// Show version information
    Version,
    /// Generate shell completion script
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
