//! CLI presenter for grouped orbits.

use std::io::{self, Write};

use tracing::debug;

use modfib_core::GroupedOrbits;

use crate::output::{format_histogram, format_json, format_total};
use crate::render::OrbitRenderer;

/// Writes orbit lines and the summary for one run.
pub struct CLIPresenter {
    renderer: OrbitRenderer,
    stats_only: bool,
    json: bool,
    verbose: bool,
}

impl CLIPresenter {
    #[must_use]
    pub fn new(renderer: OrbitRenderer, stats_only: bool, json: bool, verbose: bool) -> Self {
        Self {
            renderer,
            stats_only,
            json,
            verbose,
        }
    }

    /// Write the orbits (unless suppressed) followed by the summary.
    ///
    /// JSON mode prints only the summary object.
    pub fn present(&self, grouped: &GroupedOrbits, out: &mut dyn Write) -> io::Result<()> {
        let hist = grouped.histogram();
        if self.json {
            let json = format_json(&hist).map_err(io::Error::other)?;
            return writeln!(out, "{json}");
        }

        if self.verbose {
            let alphabet = self.renderer.alphabet();
            writeln!(
                out,
                "Symbols: {} per residue over {} characters",
                alphabet.width(),
                alphabet.radix()
            )?;
            if alphabet.base() <= 36 {
                writeln!(out, "Alphabet: {}", alphabet.legend())?;
            }
        }

        if !self.stats_only {
            self.renderer.dump(grouped, out)?;
        }
        debug!(
            orbits = hist.total_orbits,
            elements = hist.total_elements,
            "presenting summary"
        );
        writeln!(out, "{}", format_total(&hist))?;
        writeln!(out, "{}", format_histogram(&hist))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::Alphabet;
    use modfib_core::grouped_orbits;

    fn presenter(base: u32, stats_only: bool, json: bool, verbose: bool) -> CLIPresenter {
        let renderer = OrbitRenderer::new(Alphabet::new(base).unwrap(), false);
        CLIPresenter::new(renderer, stats_only, json, verbose)
    }

    fn capture(p: &CLIPresenter, base: i64) -> String {
        let grouped = grouped_orbits(base).unwrap();
        let mut buf = Vec::new();
        p.present(&grouped, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn base_two_full_output() {
        let out = capture(&presenter(2, false, false, false), 2);
        assert_eq!(out, "110\n0\n2 sequences.\n1 of 3; 1 of 1\n");
    }

    #[test]
    fn stats_only_skips_orbits() {
        let out = capture(&presenter(10, true, false, false), 10);
        assert_eq!(
            out,
            "6 sequences.\n1 of 60; 1 of 20; 1 of 12; 1 of 4; 1 of 3; 1 of 1\n"
        );
    }

    #[test]
    fn json_mode_prints_only_summary() {
        let out = capture(&presenter(10, false, true, false), 10);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["total_orbits"], 6);
        assert_eq!(value["total_elements"], 100);
        assert_eq!(value["buckets"][0]["length"], 60);
    }

    #[test]
    fn verbose_lists_alphabet() {
        let out = capture(&presenter(3, true, false, true), 3);
        assert!(out.starts_with("Symbols: 1 per residue over 3 characters\n"));
        assert!(out.contains("Alphabet: 0 1 2\n"));
    }

    #[test]
    fn base_one_output() {
        let out = capture(&presenter(1, false, false, false), 1);
        assert_eq!(out, "0\n1 sequences.\n1 of 1\n");
    }
}
