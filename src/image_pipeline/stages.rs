//! Pipeline stages
//!
//! A stage validates its preconditions against a [`PixelBuffer`] and then
//! transforms it in place or swaps in new sample data. Validation always
//! happens before the first write, so a failing stage leaves the buffer as
//! it found it.

mod scale;
mod mono_to_rgb;
mod normalize;
mod stretch;
mod gamma;
mod white_balance;

pub use scale::Scale;
pub use mono_to_rgb::MonoToRgb;
pub use normalize::{Normalize, NormalizeMode};
pub use stretch::{Stretch, StretchAlgorithm};
pub use gamma::CorrectGamma;
pub use white_balance::{WhiteBalance, WhiteBalanceMode};

use crate::image_pipeline::buffer::PixelBuffer;
use crate::image_pipeline::common::error::{ProcessingError, Result};

pub trait Stage: Send + Sync {
    /// Diagnostic name, parameters included.
    fn name(&self) -> String;

    fn process(&self, buffer: &mut PixelBuffer) -> Result<()>;
}

/// Guards shared by the stages that consume raw, single-channel data.
pub(crate) fn require_raw_mono(buffer: &PixelBuffer) -> Result<()> {
    let expected = buffer.pixel_count();
    if buffer.samples.len() != expected {
        return Err(ProcessingError::SizeMismatch {
            expected,
            actual: buffer.samples.len(),
        });
    }

    if buffer.channels != 1 {
        return Err(ProcessingError::UnsupportedChannelCount(buffer.channels));
    }

    if buffer.is_normalized {
        return Err(ProcessingError::PreconditionViolation(
            "Input buffer must not be normalized".to_string(),
        ));
    }

    Ok(())
}

pub(crate) fn require_normalized(buffer: &PixelBuffer) -> Result<()> {
    if !buffer.is_normalized {
        return Err(ProcessingError::PreconditionViolation(
            "Buffer needs to be normalized".to_string(),
        ));
    }
    Ok(())
}
