//! RAW sample reader for big-endian sensor dumps.
//!
//! Sensor payloads (FITS data units, camera SDK buffers) arrive as a flat run of
//! big-endian samples. This reader validates the payload length against the image
//! dimensions and widens every sample to `f64`.

use rayon::prelude::*;
use tracing::debug;

use crate::image_pipeline::buffer::PixelBuffer;
use crate::image_pipeline::common::error::{ProcessingError, Result};
use crate::image_pipeline::raw::reader::RawImageReader;
use crate::image_pipeline::raw::types::SampleFormat;

/// Default RAW reader: one big-endian sample per pixel, no header.
#[derive(Debug, Default, Clone, Copy)]
pub struct BigEndianReader;

impl RawImageReader for BigEndianReader {
    /// Decodes `width * height` samples of `format` from `data`.
    ///
    /// Samples are independent of each other, so the payload is split into
    /// per-sample chunks and decoded in parallel; the indexed collect keeps
    /// pixel order.
    ///
    /// # Returns
    ///
    /// * `Ok(PixelBuffer)` - single channel, not normalized
    /// * `Err(ProcessingError::SizeMismatch)` - payload length differs from
    ///   `width * height * format.bytes_per_sample()`
    fn read_raw(&self, data: &[u8], width: usize, height: usize, format: SampleFormat) -> Result<PixelBuffer> {
        debug!("Decoding {}x{} {} samples, {} bytes", width, height, format, data.len());

        let expected = width
            .checked_mul(height)
            .and_then(|count| format.byte_size(count))
            .unwrap_or(usize::MAX);

        if data.len() != expected {
            return Err(ProcessingError::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }

        let samples: Vec<f64> = data
            .par_chunks_exact(format.bytes_per_sample())
            .map(|bytes| format.decode_sample(bytes))
            .collect();

        Ok(PixelBuffer::from_raw(width, height, samples))
    }
}

/// Decodes a raw payload with the default [`BigEndianReader`].
pub fn decode(data: &[u8], width: usize, height: usize, format: SampleFormat) -> Result<PixelBuffer> {
    BigEndianReader.read_raw(data, width, height, format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_u8() {
        let buffer = decode(&[0, 1, 128, 255], 2, 2, SampleFormat::U8).unwrap();
        assert_eq!(buffer.samples, vec![0.0, 1.0, 128.0, 255.0]);
        assert_eq!(buffer.channels, 1);
        assert!(!buffer.is_normalized);
    }

    #[test]
    fn test_decode_i16_big_endian() {
        let values: [i16; 4] = [0, -1, i16::MAX, i16::MIN];
        let data: Vec<u8> = values.iter().flat_map(|v| v.to_be_bytes()).collect();

        let buffer = decode(&data, 4, 1, SampleFormat::I16).unwrap();
        let expected: Vec<f64> = values.iter().map(|&v| f64::from(v)).collect();
        assert_eq!(buffer.samples, expected);
    }

    #[test]
    fn test_decode_i32_big_endian() {
        let values: [i32; 3] = [123_456, -987_654, i32::MIN];
        let data: Vec<u8> = values.iter().flat_map(|v| v.to_be_bytes()).collect();

        let buffer = decode(&data, 1, 3, SampleFormat::I32).unwrap();
        let expected: Vec<f64> = values.iter().map(|&v| f64::from(v)).collect();
        assert_eq!(buffer.samples, expected);
    }

    #[test]
    fn test_decode_floats_bit_exact() {
        let values32: [f32; 3] = [0.5, -1.25e-7, f32::MAX];
        let data: Vec<u8> = values32.iter().flat_map(|v| v.to_be_bytes()).collect();
        let buffer = decode(&data, 3, 1, SampleFormat::F32).unwrap();
        for (decoded, original) in buffer.samples.iter().zip(values32) {
            assert_eq!((*decoded as f32).to_bits(), original.to_bits());
        }

        let values64: [f64; 2] = [std::f64::consts::PI, -0.0];
        let data: Vec<u8> = values64.iter().flat_map(|v| v.to_be_bytes()).collect();
        let buffer = decode(&data, 2, 1, SampleFormat::F64).unwrap();
        for (decoded, original) in buffer.samples.iter().zip(values64) {
            assert_eq!(decoded.to_bits(), original.to_bits());
        }
    }

    #[test]
    fn test_size_mismatch() {
        let result = decode(&[0u8; 7], 2, 2, SampleFormat::I16);
        assert!(matches!(
            result,
            Err(ProcessingError::SizeMismatch { expected: 8, actual: 7 })
        ));

        let result = decode(&[0u8; 9], 2, 2, SampleFormat::I16);
        assert!(matches!(result, Err(ProcessingError::SizeMismatch { .. })));
    }

    #[test]
    fn test_empty_image() {
        let buffer = decode(&[], 0, 0, SampleFormat::F64).unwrap();
        assert!(buffer.samples.is_empty());
    }
}
