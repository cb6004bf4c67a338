//! Application configuration from CLI flags and environment.

use clap::Parser;

use modfib_core::DEFAULT_BASE;

/// modfib — Fibonacci orbits modulo a base.
///
/// Lists every cycle of the Fibonacci recurrence taken modulo BASE, longest
/// first, followed by a histogram of cycle lengths.
#[derive(Parser, Debug)]
#[command(name = "modfib", version, about)]
pub struct AppConfig {
    /// Modulus to enumerate (falls back to 10 if not an integer).
    #[arg(value_name = "BASE", env = "MODFIB_BASE", allow_negative_numbers = true)]
    pub base: Option<String>,

    /// Disable colored output.
    #[arg(long)]
    pub no_color: bool,

    /// Print only the summary, not the orbits.
    #[arg(short, long)]
    pub stats_only: bool,

    /// Print the summary as JSON.
    #[arg(long)]
    pub json: bool,

    /// Memory limit (e.g., "8G", "512M").
    #[arg(long, default_value = "")]
    pub memory_limit: String,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// The requested base, or the default when absent or unparseable.
    #[must_use]
    pub fn base(&self) -> i64 {
        self.base.as_deref().map_or(DEFAULT_BASE, parse_base)
    }
}

/// Parse a base argument leniently.
fn parse_base(s: &str) -> i64 {
    s.trim().parse().unwrap_or(DEFAULT_BASE)
}
