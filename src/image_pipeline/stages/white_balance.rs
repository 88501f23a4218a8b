use std::fmt;

use rayon::prelude::*;
use tracing::debug;

use crate::image_pipeline::buffer::PixelBuffer;
use crate::image_pipeline::common::error::{ProcessingError, Result};
use crate::image_pipeline::stages::{Stage, require_normalized};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WhiteBalanceMode {
    /// Gray-world gains derived from the channel means
    Auto,
    Manual { red: f64, green: f64, blue: f64 },
}

impl fmt::Display for WhiteBalanceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => f.write_str("Auto"),
            Self::Manual { red, green, blue } => {
                write!(f, "Manual - R: {:.2}, G: {:.2}, B: {:.2}", red, green, blue)
            }
        }
    }
}

/// Per-channel gains over a normalized RGB buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WhiteBalance {
    pub mode: WhiteBalanceMode,
}

impl WhiteBalance {
    pub fn new(mode: WhiteBalanceMode) -> Self {
        Self { mode }
    }

    /// Gray-world gains: each channel is pulled toward the mean of the three
    /// channel means. A non-positive gray level yields unit gains.
    pub fn compute_gains(buffer: &PixelBuffer) -> [f64; 3] {
        let sums = buffer
            .samples
            .par_chunks_exact(3)
            .map(|pixel| [pixel[0], pixel[1], pixel[2]])
            .reduce(|| [0.0; 3], |a, b| [a[0] + b[0], a[1] + b[1], a[2] + b[2]]);

        let count = buffer.pixel_count() as f64;
        let means = sums.map(|sum| sum / count);
        let gray = means.iter().sum::<f64>() / 3.0;

        if gray > 0.0 {
            means.map(|mean| gray / mean)
        } else {
            [1.0; 3]
        }
    }
}

impl Stage for WhiteBalance {
    fn name(&self) -> String {
        format!("White Balance ({})", self.mode)
    }

    fn process(&self, buffer: &mut PixelBuffer) -> Result<()> {
        require_normalized(buffer)?;

        if buffer.channels != 3 {
            return Err(ProcessingError::PreconditionViolation(format!(
                "Unsupported channel count: {}",
                buffer.channels
            )));
        }

        let expected = buffer.pixel_count() * 3;
        if buffer.samples.len() != expected {
            return Err(ProcessingError::SizeMismatch {
                expected,
                actual: buffer.samples.len(),
            });
        }

        let gains = match self.mode {
            WhiteBalanceMode::Auto => Self::compute_gains(buffer),
            WhiteBalanceMode::Manual { red, green, blue } => [red, green, blue],
        };
        debug!(red = gains[0], green = gains[1], blue = gains[2], "White balance gains");

        buffer.samples.par_chunks_exact_mut(3).for_each(|pixel| {
            for (value, gain) in pixel.iter_mut().zip(gains) {
                *value *= gain;
            }
        });

        Ok(())
    }
}
