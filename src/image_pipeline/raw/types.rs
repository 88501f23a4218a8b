//! RAW sample format types

use std::fmt;

use crate::image_pipeline::common::error::{ProcessingError, Result};

/// Encoding of a single raw sample. Multi-byte formats are big-endian.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleFormat {
    U8,
    I16,
    I32,
    F32,
    F64,
}

impl SampleFormat {
    /// Maps a FITS `BITPIX` code to a sample format.
    pub fn from_bitpix(bitpix: i32) -> Result<Self> {
        match bitpix {
            8 => Ok(Self::U8),
            16 => Ok(Self::I16),
            32 => Ok(Self::I32),
            -32 => Ok(Self::F32),
            -64 => Ok(Self::F64),
            other => Err(ProcessingError::UnsupportedFormat(format!("BITPIX {}", other))),
        }
    }

    pub fn bytes_per_sample(self) -> usize {
        match self {
            Self::U8 => 1,
            Self::I16 => 2,
            Self::I32 | Self::F32 => 4,
            Self::F64 => 8,
        }
    }

    /// Byte footprint of `pixel_count` samples, `None` on overflow.
    pub fn byte_size(self, pixel_count: usize) -> Option<usize> {
        pixel_count.checked_mul(self.bytes_per_sample())
    }

    /// Decodes one sample. `bytes` must hold exactly `bytes_per_sample()` bytes.
    pub(crate) fn decode_sample(self, bytes: &[u8]) -> f64 {
        match self {
            Self::U8 => f64::from(bytes[0]),
            Self::I16 => f64::from(i16::from_be_bytes([bytes[0], bytes[1]])),
            Self::I32 => f64::from(i32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])),
            Self::F32 => f64::from(f32::from_bits(u32::from_be_bytes([
                bytes[0], bytes[1], bytes[2], bytes[3],
            ]))),
            Self::F64 => f64::from_bits(u64::from_be_bytes([
                bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
            ])),
        }
    }
}

impl fmt::Display for SampleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::U8 => "UInt8",
            Self::I16 => "Int16",
            Self::I32 => "Int32",
            Self::F32 => "Float32",
            Self::F64 => "Float64",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bitpix_codes() {
        assert_eq!(SampleFormat::from_bitpix(8).unwrap(), SampleFormat::U8);
        assert_eq!(SampleFormat::from_bitpix(16).unwrap(), SampleFormat::I16);
        assert_eq!(SampleFormat::from_bitpix(32).unwrap(), SampleFormat::I32);
        assert_eq!(SampleFormat::from_bitpix(-32).unwrap(), SampleFormat::F32);
        assert_eq!(SampleFormat::from_bitpix(-64).unwrap(), SampleFormat::F64);
        assert!(matches!(
            SampleFormat::from_bitpix(64),
            Err(ProcessingError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_byte_size() {
        assert_eq!(SampleFormat::U8.byte_size(10), Some(10));
        assert_eq!(SampleFormat::I16.byte_size(10), Some(20));
        assert_eq!(SampleFormat::I32.byte_size(10), Some(40));
        assert_eq!(SampleFormat::F32.byte_size(10), Some(40));
        assert_eq!(SampleFormat::F64.byte_size(10), Some(80));
        assert_eq!(SampleFormat::F64.byte_size(usize::MAX), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(SampleFormat::U8.to_string(), "UInt8");
        assert_eq!(SampleFormat::F64.to_string(), "Float64");
    }
}
