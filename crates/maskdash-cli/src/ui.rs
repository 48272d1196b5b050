//! Styled status lines for CLI output.

use console::style;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// Styled section header.
#[must_use]
pub fn header_line(text: &str) -> String {
    let line = format!("=== {text} ===");
    if is_color_disabled() {
        line
    } else {
        style(line).bold().cyan().to_string()
    }
}

/// Dimmed caption line.
#[must_use]
pub fn caption_line(text: &str) -> String {
    if is_color_disabled() {
        text.to_string()
    } else {
        style(text).dim().to_string()
    }
}

/// Print a success message.
pub fn print_success(text: &str) {
    if is_color_disabled() {
        println!("[OK] {text}");
    } else {
        println!("{} {text}", style("[OK]").green().bold());
    }
}

/// Print a warning message.
pub fn print_warning(text: &str) {
    if is_color_disabled() {
        println!("[MISSING] {text}");
    } else {
        println!("{} {text}", style("[MISSING]").yellow().bold());
    }
}

/// Print an error message.
pub fn print_error(text: &str) {
    if is_color_disabled() {
        eprintln!("[ERROR] {text}");
    } else {
        eprintln!("{} {text}", style("[ERROR]").red().bold());
    }
}
