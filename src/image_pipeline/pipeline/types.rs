//! Pipeline configuration types

use crate::image_pipeline::debayer::BayerPattern;
use crate::image_pipeline::stages::{NormalizeMode, StretchAlgorithm, WhiteBalanceMode};

/// Affine rescale applied to raw samples before demosaicing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleConfig {
    pub scale: f64,
    pub offset: f64,
}

/// Stages to run, one optional entry per stage. An absent entry removes the
/// stage from the sequence.
///
/// Without a Bayer pattern the raw data is treated as monochrome and promoted
/// to RGB instead of demosaiced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PipelineConfig {
    pub scale: Option<ScaleConfig>,
    pub bayer_pattern: Option<BayerPattern>,
    pub normalize: Option<NormalizeMode>,
    pub stretch: Option<StretchAlgorithm>,
    pub gamma: Option<f64>,
    pub white_balance: Option<WhiteBalanceMode>,
}

impl PipelineConfig {
    pub fn builder() -> PipelineConfigBuilder {
        PipelineConfigBuilder::default()
    }
}

/// Builder for PipelineConfig
#[derive(Default)]
pub struct PipelineConfigBuilder {
    config: PipelineConfig,
}

impl PipelineConfigBuilder {
    pub fn scale(mut self, scale: f64, offset: f64) -> Self {
        self.config.scale = Some(ScaleConfig { scale, offset });
        self
    }

    pub fn bayer_pattern(mut self, pattern: BayerPattern) -> Self {
        self.config.bayer_pattern = Some(pattern);
        self
    }

    pub fn normalize(mut self, mode: NormalizeMode) -> Self {
        self.config.normalize = Some(mode);
        self
    }

    pub fn stretch(mut self, algorithm: StretchAlgorithm) -> Self {
        self.config.stretch = Some(algorithm);
        self
    }

    pub fn gamma(mut self, gamma: f64) -> Self {
        self.config.gamma = Some(gamma);
        self
    }

    pub fn white_balance(mut self, mode: WhiteBalanceMode) -> Self {
        self.config.white_balance = Some(mode);
        self
    }

    pub fn build(self) -> PipelineConfig {
        self.config
    }
}
