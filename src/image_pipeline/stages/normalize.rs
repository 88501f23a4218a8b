use std::fmt;

use rayon::prelude::*;
use tracing::debug;

use crate::image_pipeline::buffer::PixelBuffer;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::stages::Stage;
use crate::image_pipeline::statistics::percentile_bounds;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NormalizeMode {
    /// Global minimum and maximum map to 0 and 1
    MinMax,
    /// Samples are clipped to the (lower, upper) percentiles, then mapped to `[0, 1]`
    Percentile(f64, f64),
}

impl fmt::Display for NormalizeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MinMax => f.write_str("Min/Max"),
            Self::Percentile(lower, upper) => write!(f, "Percentile - {:.2} {:.2}", lower, upper),
        }
    }
}

/// Maps samples into `[0, 1]` and marks the buffer normalized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalize {
    pub mode: NormalizeMode,
}

impl Normalize {
    pub fn new(mode: NormalizeMode) -> Self {
        Self { mode }
    }
}

impl Stage for Normalize {
    fn name(&self) -> String {
        format!("Normalize ({})", self.mode)
    }

    fn process(&self, buffer: &mut PixelBuffer) -> Result<()> {
        if buffer.samples.is_empty() {
            buffer.is_normalized = true;
            return Ok(());
        }

        let (a, b) = match self.mode {
            NormalizeMode::MinMax => min_max(&buffer.samples),
            NormalizeMode::Percentile(p1, p2) => {
                // NaN marks blank pixels; they do not take part in the bounds.
                let valid: Vec<f64> = buffer.samples.par_iter().copied().filter(|v| !v.is_nan()).collect();
                percentile_bounds(&valid, p1, p2)
            }
        };
        let (lower, upper) = (a.min(b), a.max(b));
        debug!(lower, upper, "Normalization bounds ({})", self.mode);

        // Constant image: nothing to stretch.
        if lower != upper {
            let range = upper - lower;

            // max/min rather than clamp: a NaN sample lands on `lower`.
            buffer.samples.par_iter_mut().for_each(|v| {
                let value = v.max(lower).min(upper);
                *v = ((value - lower) / range).max(0.0).min(1.0);
            });
        }

        buffer.is_normalized = true;
        Ok(())
    }
}

fn min_max(samples: &[f64]) -> (f64, f64) {
    samples
        .par_iter()
        .map(|&v| (v, v))
        .reduce(
            || (f64::INFINITY, f64::NEG_INFINITY),
            |a, b| (a.0.min(b.0), a.1.max(b.1)),
        )
}
