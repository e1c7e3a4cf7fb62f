//! Centralized UI formatting and color utilities
//!
//! This module provides a unified interface for colors and formatting
//! patterns used throughout the tiffin CLI.

/// Check if quiet mode is enabled via environment variable or --quiet flag
pub fn is_quiet() -> bool {
    std::env::var("TIFFIN_QUIET")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// Color scheme for text output
pub mod colors {
    use colored::{ColoredString, Colorize};

    /// Green for success/confirmation
    pub fn success(text: &str) -> ColoredString {
        text.green()
    }

    /// Yellow for notices/warnings
    pub fn warning(text: &str) -> ColoredString {
        text.yellow()
    }

    /// Red for errors
    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    /// Cyan for identifiers (item names, sections)
    pub fn identifier(text: &str) -> ColoredString {
        text.cyan()
    }

    /// Dimmed for secondary text
    pub fn secondary(text: &str) -> ColoredString {
        text.dimmed()
    }

    /// Bold for headings
    pub fn heading(text: &str) -> ColoredString {
        text.bold()
    }
}

/// Common text formatting patterns
pub mod format {
    /// Format an amount of cents as dollars, e.g. `1600` -> `"$16.00"`
    pub fn money(cents: u64) -> String {
        format!("${}.{:02}", cents / 100, cents % 100)
    }

    /// Format a separator line for sections
    pub fn separator(width: usize) -> String {
        "─".repeat(width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money() {
        assert_eq!(format::money(0), "$0.00");
        assert_eq!(format::money(5), "$0.05");
        assert_eq!(format::money(200), "$2.00");
        assert_eq!(format::money(1600), "$16.00");
        assert_eq!(format::money(1234), "$12.34");
    }

    #[test]
    fn test_separator() {
        assert_eq!(format::separator(5), "─────");
        assert_eq!(format::separator(10), "──────────");
    }

    #[test]
    #[serial_test::serial]
    fn test_is_quiet_env_variants() {
        std::env::remove_var("TIFFIN_QUIET");
        assert!(!is_quiet());

        std::env::set_var("TIFFIN_QUIET", "1");
        assert!(is_quiet());

        std::env::set_var("TIFFIN_QUIET", "true");
        assert!(is_quiet());

        std::env::set_var("TIFFIN_QUIET", "0");
        assert!(!is_quiet());

        std::env::remove_var("TIFFIN_QUIET");
    }
}
