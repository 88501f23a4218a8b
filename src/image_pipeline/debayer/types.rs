//! Types for debayering operations

use std::fmt;

/// Repeating 2x2 color filter layout, named by its first two rows read left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BayerPattern {
    Bggr,
    Rgbg,
    Grbg,
    Rggb,
}

/// Color sensed by a single photosite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BayerColor {
    Red,
    Green,
    Blue,
}

impl BayerPattern {
    /// Filter color at `(x, y)`. Only coordinate parity matters.
    pub fn color_at(self, x: usize, y: usize) -> BayerColor {
        let even_row = y % 2 == 0;
        let even_col = x % 2 == 0;

        use BayerColor::*;
        match (self, even_row, even_col) {
            (Self::Bggr, true, true) => Blue,
            (Self::Bggr, false, false) => Red,
            (Self::Bggr, _, _) => Green,

            (Self::Rgbg, true, true) => Red,
            (Self::Rgbg, false, true) => Blue,
            (Self::Rgbg, _, false) => Green,

            (Self::Grbg, true, false) => Red,
            (Self::Grbg, false, true) => Blue,
            (Self::Grbg, _, _) => Green,

            (Self::Rggb, true, true) => Red,
            (Self::Rggb, false, false) => Blue,
            (Self::Rggb, _, _) => Green,
        }
    }

    /// Row-major color lookup for a `width` x `height` sensor.
    pub fn color_map(self, width: usize, height: usize) -> Vec<BayerColor> {
        (0..height)
            .flat_map(|y| (0..width).map(move |x| self.color_at(x, y)))
            .collect()
    }
}

impl fmt::Display for BayerPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bggr => "BGGR",
            Self::Rgbg => "RGBG",
            Self::Grbg => "GRBG",
            Self::Rggb => "RGGB",
        };
        f.write_str(name)
    }
}

/// Demosaicing algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DebayerMode {
    /// Fixed-template neighbor averaging
    #[default]
    Vng,
}

impl fmt::Display for DebayerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vng => f.write_str("VNG"),
        }
    }
}
