//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use colored::Colorize;

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print completed action (green label) to stderr
pub fn action(label: &str, msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", label.green(), msg);
}

/// Format the standup order, one name per line, optionally numbered.
pub fn format_order(names: &[String], numbered: bool) -> String {
    if !numbered {
        return names.join("\n");
    }
    let width = names.len().to_string().len();
    names
        .iter()
        .enumerate()
        .map(|(i, name)| format!("{:>width$}. {}", i + 1, name))
        .collect::<Vec<_>>()
        .join("\n")
}
