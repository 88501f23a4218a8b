//! In-flight image representation shared by every pipeline stage.

use std::fmt;

use rayon::prelude::*;

use crate::image_pipeline::common::error::{ProcessingError, Result};

/// Interleaved `f64` samples plus the normalization state stages check.
///
/// While non-empty, `samples.len() == width * height * channels`.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
    /// Samples per pixel (1, 3 or 4 once populated)
    pub channels: usize,
    /// Interleaved samples, row-major
    pub samples: Vec<f64>,
    /// Whether samples have been mapped into `[0, 1]`
    pub is_normalized: bool,
}

impl PixelBuffer {
    pub fn new(width: usize, height: usize, channels: usize, samples: Vec<f64>, is_normalized: bool) -> Self {
        Self {
            width,
            height,
            channels,
            samples,
            is_normalized,
        }
    }

    /// Single-channel, unnormalized buffer as produced by the RAW decoder.
    pub fn from_raw(width: usize, height: usize, samples: Vec<f64>) -> Self {
        Self::new(width, height, 1, samples, false)
    }

    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Quantizes every sample to 8 bits: `round(clamp(v * 255, 0, 255))`.
    pub fn to_8bit(&self) -> Result<Vec<u8>> {
        if !self.is_normalized {
            return Err(ProcessingError::PreconditionViolation(
                "Buffer needs to be normalized".to_string(),
            ));
        }

        Ok(self
            .samples
            .par_iter()
            .map(|&v| (v * 255.0).clamp(0.0, 255.0).round() as u8)
            .collect())
    }

    /// Packed 8-bit bytes for display or export. Accepts 1 (gray), 3 (RGB)
    /// and 4 (RGBA) channels.
    pub fn to_display_bytes(&self) -> Result<Vec<u8>> {
        if !matches!(self.channels, 1 | 3 | 4) {
            return Err(ProcessingError::UnsupportedChannelCount(self.channels));
        }

        let expected = self.pixel_count() * self.channels;
        if self.samples.len() < expected {
            return Err(ProcessingError::SizeMismatch {
                expected,
                actual: self.samples.len(),
            });
        }

        self.to_8bit()
    }
}

impl fmt::Display for PixelBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PixelBuffer( width: {}, height: {}, channels: {}, pixels: {}, isNormalized: {} )",
            self.width,
            self.height,
            self.channels,
            self.samples.len(),
            self.is_normalized
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let buffer = PixelBuffer::new(10, 20, 1, vec![0.0, 0.5, 1.0, 0.75], true);
        assert_eq!(
            buffer.to_string(),
            "PixelBuffer( width: 10, height: 20, channels: 1, pixels: 4, isNormalized: true )"
        );
    }

    #[test]
    fn test_to_8bit() {
        let buffer = PixelBuffer::new(2, 2, 1, vec![0.0, 0.5, 1.0, 0.25], true);
        assert_eq!(buffer.to_8bit().unwrap(), vec![0, 128, 255, 64]);
    }

    #[test]
    fn test_to_8bit_clamps() {
        let buffer = PixelBuffer::new(2, 2, 1, vec![-0.1, 0.0, 1.0, 1.1], true);
        assert_eq!(buffer.to_8bit().unwrap(), vec![0, 0, 255, 255]);
    }

    #[test]
    fn test_to_8bit_requires_normalized() {
        let buffer = PixelBuffer::new(2, 2, 1, vec![0.0, 0.5, 1.0, 0.25], false);
        assert!(matches!(
            buffer.to_8bit(),
            Err(ProcessingError::PreconditionViolation(_))
        ));
    }

    #[test]
    fn test_to_8bit_empty() {
        let buffer = PixelBuffer::new(0, 0, 0, Vec::new(), true);
        assert!(buffer.to_8bit().unwrap().is_empty());
    }

    #[test]
    fn test_display_bytes_channel_counts() {
        let gray = PixelBuffer::new(2, 2, 1, vec![0.0, 0.5, 0.5, 1.0], true);
        assert_eq!(gray.to_display_bytes().unwrap().len(), 4);

        let rgb = PixelBuffer::new(1, 1, 3, vec![1.0, 0.0, 0.5], true);
        assert_eq!(rgb.to_display_bytes().unwrap(), vec![255, 0, 128]);

        let rgba = PixelBuffer::new(1, 1, 4, vec![1.0, 0.0, 0.5, 1.0], true);
        assert_eq!(rgba.to_display_bytes().unwrap().len(), 4);
    }

    #[test]
    fn test_display_bytes_rejects_bad_buffers() {
        let two_channels = PixelBuffer::new(1, 1, 2, vec![0.0, 1.0], true);
        assert!(matches!(
            two_channels.to_display_bytes(),
            Err(ProcessingError::UnsupportedChannelCount(2))
        ));

        let short = PixelBuffer::new(2, 2, 3, vec![1.0, 0.0, 0.5], true);
        assert!(matches!(
            short.to_display_bytes(),
            Err(ProcessingError::SizeMismatch { expected: 12, actual: 3 })
        ));

        let raw = PixelBuffer::new(1, 1, 3, vec![1.0, 0.0, 0.5], false);
        assert!(matches!(
            raw.to_display_bytes(),
            Err(ProcessingError::PreconditionViolation(_))
        ));
    }
}
