//! UI helpers for CLI display.

use std::io::{self, Write};

use console::style;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var_os("NO_COLOR").is_some()
}

/// Whether orbit lines should carry color, given the `--no-color` flag.
#[must_use]
pub fn use_color(no_color_flag: bool) -> bool {
    color_allowed(no_color_flag, is_color_disabled(), console::colors_enabled())
}

/// Color needs the flag and `NO_COLOR` both absent and a terminal that takes it.
fn color_allowed(no_color_flag: bool, no_color_env: bool, terminal_colors: bool) -> bool {
    !no_color_flag && !no_color_env && terminal_colors
}

/// Write a header line to `out`, styled when `colored`.
pub fn write_header(out: &mut dyn Write, text: &str, colored: bool) -> io::Result<()> {
    let line = format!("=== {text} ===");
    if colored {
        writeln!(out, "{}", style(line).bold().cyan().force_styling(true))
    } else {
        writeln!(out, "{line}")
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
