use std::fmt;

use rayon::prelude::*;
use tracing::debug;

use crate::image_pipeline::buffer::PixelBuffer;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::stages::{Stage, require_normalized};

/// Tone curves for normalized data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StretchAlgorithm {
    /// `ln(1 + n*v) / ln(1 + n)`
    Log(f64),
    /// `asinh(n*v) / asinh(n)`
    Arcsinh(f64),
    /// `1 / (1 + exp(-slope * (v - midpoint)))`
    Sigmoid(f64, f64),
}

impl StretchAlgorithm {
    fn curve(self) -> impl Fn(f64) -> f64 + Sync {
        move |v| match self {
            Self::Log(n) => (n * v).ln_1p() / n.ln_1p(),
            Self::Arcsinh(n) => (n * v).asinh() / n.asinh(),
            Self::Sigmoid(slope, midpoint) => 1.0 / (1.0 + (-slope * (v - midpoint)).exp()),
        }
    }
}

impl fmt::Display for StretchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Log(n) => write!(f, "Logarithmic {:.2}", n),
            Self::Arcsinh(n) => write!(f, "Hyperbolic {:.2}", n),
            Self::Sigmoid(slope, midpoint) => write!(f, "Sigmoid {:.2} {:.2}", slope, midpoint),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stretch {
    pub algorithm: StretchAlgorithm,
}

impl Stretch {
    pub fn new(algorithm: StretchAlgorithm) -> Self {
        Self { algorithm }
    }
}

impl Stage for Stretch {
    fn name(&self) -> String {
        format!("Stretch ({})", self.algorithm)
    }

    fn process(&self, buffer: &mut PixelBuffer) -> Result<()> {
        require_normalized(buffer)?;
        debug!("Applying {} stretch", self.algorithm);

        let curve = self.algorithm.curve();
        buffer.samples.par_iter_mut().for_each(|v| *v = curve(*v));
        Ok(())
    }
}
