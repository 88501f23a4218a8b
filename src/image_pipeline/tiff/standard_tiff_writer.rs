use std::io::Write;

use ::tiff::encoder::colortype::{Gray8, RGB8, RGBA8};
use ::tiff::encoder::compression::DeflateLevel;
use ::tiff::encoder::{Compression, TiffEncoder};
use tracing::debug;

use crate::image_pipeline::buffer::PixelBuffer;
use crate::image_pipeline::common::error::{ProcessingError, Result};
use crate::image_pipeline::tiff::types::{ExportConfig, TiffCompression};
use crate::image_pipeline::tiff::writer::TiffWriter;

/// Encodes normalized buffers as Gray8, RGB8 or RGBA8 depending on channel count.
pub struct StandardTiffWriter;

impl TiffWriter for StandardTiffWriter {
    fn write_tiff(&self, buffer: &PixelBuffer, output: &mut dyn Write, config: &ExportConfig) -> Result<()> {
        debug!("Encoding TIFF image: {}x{}x{}", buffer.width, buffer.height, buffer.channels);

        let bytes = buffer.to_display_bytes()?;
        let pixels = &bytes[..buffer.pixel_count() * buffer.channels];
        let width = buffer.width as u32;
        let height = buffer.height as u32;

        let compression = match config.compression {
            TiffCompression::None => Compression::Uncompressed,
            TiffCompression::Lzw => Compression::Lzw,
            TiffCompression::DeflateFast => Compression::Deflate(DeflateLevel::Fast),
            TiffCompression::DeflateBalanced => Compression::Deflate(DeflateLevel::Balanced),
            TiffCompression::DeflateBest => Compression::Deflate(DeflateLevel::Best),
        };

        let mut encoded = Vec::new();
        let mut encoder = TiffEncoder::new(std::io::Cursor::new(&mut encoded))
            .map_err(|e| ProcessingError::EncodeError(e.to_string()))?
            .with_compression(compression);

        if let Some(predictor_val) = config.predictor {
            let predictor = match predictor_val {
                2 => ::tiff::tags::Predictor::Horizontal,
                _ => ::tiff::tags::Predictor::None,
            };
            encoder = encoder.with_predictor(predictor);
        }

        let written = match buffer.channels {
            1 => encoder.write_image::<Gray8>(width, height, pixels),
            3 => encoder.write_image::<RGB8>(width, height, pixels),
            4 => encoder.write_image::<RGBA8>(width, height, pixels),
            other => return Err(ProcessingError::UnsupportedChannelCount(other)),
        };
        written.map_err(|e| ProcessingError::EncodeError(e.to_string()))?;

        output.write_all(&encoded)?;

        debug!("TIFF encoding complete, {} bytes", encoded.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_pipeline::tiff::export_file;

    fn rgb_buffer() -> PixelBuffer {
        PixelBuffer::new(2, 2, 3, vec![0.0, 0.5, 1.0, 0.25, 0.25, 0.25, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0], true)
    }

    #[test]
    fn test_writes_tiff_header() {
        let mut output = Vec::new();
        StandardTiffWriter
            .write_tiff(&rgb_buffer(), &mut output, &ExportConfig::default())
            .unwrap();

        assert!(output.starts_with(b"II*\0") || output.starts_with(b"MM\0*"));
    }

    #[test]
    fn test_every_compression() {
        for compression in [
            TiffCompression::None,
            TiffCompression::Lzw,
            TiffCompression::DeflateFast,
            TiffCompression::DeflateBalanced,
            TiffCompression::DeflateBest,
        ] {
            let config = ExportConfig::builder().compression(compression).predictor(Some(2)).build();
            let mut output = Vec::new();
            StandardTiffWriter.write_tiff(&rgb_buffer(), &mut output, &config).unwrap();
            assert!(!output.is_empty());
        }
    }

    #[test]
    fn test_gray_and_rgba() {
        let gray = PixelBuffer::new(2, 1, 1, vec![0.0, 1.0], true);
        let rgba = PixelBuffer::new(1, 1, 4, vec![1.0, 0.5, 0.0, 1.0], true);
        let config = ExportConfig::default();

        let mut output = Vec::new();
        StandardTiffWriter.write_tiff(&gray, &mut output, &config).unwrap();
        assert!(!output.is_empty());

        let mut output = Vec::new();
        StandardTiffWriter.write_tiff(&rgba, &mut output, &config).unwrap();
        assert!(!output.is_empty());
    }

    #[test]
    fn test_rejects_raw_buffer() {
        let raw = PixelBuffer::from_raw(1, 1, vec![1000.0]);
        let mut output = Vec::new();
        let result = StandardTiffWriter.write_tiff(&raw, &mut output, &ExportConfig::default());
        assert!(matches!(result, Err(ProcessingError::PreconditionViolation(_))));
        assert!(output.is_empty());
    }

    #[test]
    fn test_export_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.tiff");

        export_file(&rgb_buffer(), &path, &ExportConfig::default()).unwrap();

        let written = std::fs::read(&path).unwrap();
        assert!(written.len() > 12);
    }

    #[test]
    fn test_config_builder() {
        let config = ExportConfig::builder()
            .compression(TiffCompression::Lzw)
            .predictor(Some(2))
            .build();
        assert_eq!(config.compression, TiffCompression::Lzw);
        assert_eq!(config.predictor, Some(2));

        let config = ExportConfig::builder().build();
        assert_eq!(config.compression, TiffCompression::DeflateBalanced);
        assert_eq!(config.predictor, None);
    }
}
