//! CLI entry point and command dispatch for tiffin.

mod cmd;

use anyhow::Result;
use clap::Parser;

use tiffin::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.quiet {
        std::env::set_var("TIFFIN_QUIET", "1");
    }

    match cli.command {
        Commands::Menu { section, json } => cmd::menu::cmd_menu(section.as_deref(), json),
        Commands::Order => cmd::order::cmd_order(),
        Commands::Version => cmd::util::cmd_version(),
        Commands::Completion { shell } => cmd::util::cmd_completion(shell),
    }
}
