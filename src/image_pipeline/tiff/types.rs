//! Settings for writing processed buffers to TIFF

/// Strip compression for exported images.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TiffCompression {
    /// Raw strips
    None,
    Lzw,
    /// Deflate at its lowest effort
    DeflateFast,
    /// Deflate at its highest effort
    DeflateBest,
    /// Deflate at the default effort; used unless overridden
    DeflateBalanced,
}

/// How [`StandardTiffWriter`](crate::image_pipeline::tiff::StandardTiffWriter) encodes a buffer.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    pub compression: TiffCompression,
    /// TIFF `Predictor` tag value. `Some(2)` enables horizontal differencing,
    /// any other value writes no predictor.
    pub predictor: Option<u16>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            compression: TiffCompression::DeflateBalanced,
            predictor: None,
        }
    }
}

impl ExportConfig {
    pub fn builder() -> ExportConfigBuilder {
        ExportConfigBuilder::default()
    }
}

/// Step-by-step [`ExportConfig`] construction; unset fields keep their defaults.
#[derive(Default)]
pub struct ExportConfigBuilder {
    compression: Option<TiffCompression>,
    predictor: Option<Option<u16>>,
}

impl ExportConfigBuilder {
    pub fn compression(mut self, compression: TiffCompression) -> Self {
        self.compression = Some(compression);
        self
    }

    pub fn predictor(mut self, predictor: Option<u16>) -> Self {
        self.predictor = Some(predictor);
        self
    }

    pub fn build(self) -> ExportConfig {
        let default = ExportConfig::default();
        ExportConfig {
            compression: self.compression.unwrap_or(default.compression),
            predictor: self.predictor.unwrap_or(default.predictor),
        }
    }
}
