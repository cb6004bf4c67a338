//! Fixed-width symbol encoding for residues.
//!
//! Residues are written with the digits `0-9a-z`. When a base needs more than
//! 36 values, each residue becomes a fixed-width string over the smallest
//! sub-alphabet that still covers the base.

use modfib_core::OrbitError;

/// Digits available to a symbol position.
pub const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Symbol table for one base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    base: u32,
    width: u32,
    radix: u32,
}

impl Alphabet {
    /// Build the alphabet for `base`.
    ///
    /// # Errors
    ///
    /// Returns [`OrbitError::InvalidBase`] for `base == 0`.
    pub fn new(base: u32) -> Result<Self, OrbitError> {
        if base == 0 {
            return Err(OrbitError::InvalidBase(0));
        }
        let target = u64::from(base);
        let full = DIGITS.len() as u64;

        // Characters per symbol: smallest width with 36^width >= base.
        let mut width = 1;
        let mut reach = full;
        while reach < target {
            width += 1;
            reach *= full;
        }

        // Distinct characters per position: smallest radix with radix^width >= base.
        let mut radix = 1;
        while u64::from(radix).pow(width) < target {
            radix += 1;
        }

        Ok(Self { base, width, radix })
    }

    #[must_use]
    pub fn base(&self) -> u32 {
        self.base
    }

    /// Characters per symbol.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Distinct characters used at each position.
    #[must_use]
    pub fn radix(&self) -> u32 {
        self.radix
    }

    /// Append the symbol for `value` to `out`.
    pub fn write_symbol(&self, value: u32, out: &mut String) {
        debug_assert!(value < self.base, "residue out of range");
        let mut place = self.radix.pow(self.width - 1);
        let mut rest = value;
        for _ in 0..self.width {
            let digit = rest / place;
            rest %= place;
            out.push(char::from(DIGITS[digit as usize]));
            place = (place / self.radix).max(1);
        }
    }

    /// The symbol for `value`.
    #[must_use]
    pub fn symbol(&self, value: u32) -> String {
        let mut s = String::with_capacity(self.width as usize);
        self.write_symbol(value, &mut s);
        s
    }

    /// Plain, uncolored rendering of a whole sequence.
    #[must_use]
    pub fn encode(&self, values: &[u32]) -> String {
        values.iter().fold(String::new(), |mut s, &v| {
            self.write_symbol(v, &mut s);
            s
        })
    }

    /// Every symbol in residue order, separated by spaces.
    #[must_use]
    pub fn legend(&self) -> String {
        let mut s = String::new();
        for v in 0..self.base {
            if v > 0 {
                s.push(' ');
            }
            self.write_symbol(v, &mut s);
        }
        s
    }
}
