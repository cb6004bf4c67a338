//! Colored orbit lines.

use std::io::{self, Write};

use console::{Color, Style};

use modfib_core::GroupedOrbits;

use crate::alphabet::Alphabet;

/// Renders orbits as symbol strings.
///
/// The last residue of an orbit leads the line in magenta, followed by the
/// rest of the orbit in order. Single-character symbols are green; wider
/// symbols alternate green and yellow so adjacent values stay readable.
#[derive(Debug, Clone)]
pub struct OrbitRenderer {
    alphabet: Alphabet,
    colored: bool,
    lead: Style,
    even: Style,
    odd: Style,
}

impl OrbitRenderer {
    #[must_use]
    pub fn new(alphabet: Alphabet, colored: bool) -> Self {
        let paint = |color| Style::new().fg(color).bold().force_styling(true);
        Self {
            alphabet,
            colored,
            lead: paint(Color::Magenta),
            even: paint(Color::Green),
            odd: paint(Color::Yellow),
        }
    }

    #[must_use]
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// One display line for `orbit`. An empty orbit renders as an empty line.
    #[must_use]
    pub fn render(&self, orbit: &[u32]) -> String {
        let Some((&last, rest)) = orbit.split_last() else {
            return String::new();
        };
        if !self.colored {
            let mut line = self.alphabet.symbol(last);
            line.push_str(&self.alphabet.encode(rest));
            return line;
        }

        let mut line = self.lead.apply_to(self.alphabet.symbol(last)).to_string();
        if rest.is_empty() {
            return line;
        }
        if self.alphabet.width() == 1 {
            let body = self.alphabet.encode(rest);
            line.push_str(&self.even.apply_to(body).to_string());
        } else {
            for (i, &value) in rest.iter().enumerate() {
                let style = if i % 2 == 0 { &self.even } else { &self.odd };
                line.push_str(&style.apply_to(self.alphabet.symbol(value)).to_string());
            }
        }
        line
    }

    /// Write every orbit of `grouped`, longest first, one per line.
    pub fn dump(&self, grouped: &GroupedOrbits, out: &mut dyn Write) -> io::Result<()> {
        for orbit in grouped.orbits() {
            writeln!(out, "{}", self.render(orbit))?;
        }
        Ok(())
    }
}
