//! Utility commands (version, completion).

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io;

use tiffin::cli::Cli;

/// Show version information
pub fn cmd_version() -> Result<()> {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    println!("tiffin {}", VERSION);
    Ok(())
}

/// Generate shell completion script
pub fn cmd_completion(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "tiffin", &mut io::stdout());
    Ok(())
}
