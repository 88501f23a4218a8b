//! Pipeline orchestration module
//!
//! Decodes a raw payload and runs the configured stages over it, in a fixed
//! order, stopping at the first failure.

mod types;


pub use types::{PipelineConfig, PipelineConfigBuilder, ScaleConfig};

use tracing::{debug, info, instrument};

use crate::image_pipeline::buffer::PixelBuffer;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::debayer::Debayer;
use crate::image_pipeline::raw::{BigEndianReader, RawImageReader, SampleFormat};
use crate::image_pipeline::stages::{
    CorrectGamma, MonoToRgb, Normalize, Scale, Stage, Stretch, WhiteBalance,
};

pub struct PixelPipeline<R: RawImageReader> {
    reader: R,
    config: PipelineConfig,
}

impl PixelPipeline<BigEndianReader> {
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            reader: BigEndianReader,
            config,
        }
    }
}

impl<R: RawImageReader> PixelPipeline<R> {
    pub fn with_custom(reader: R, config: PipelineConfig) -> Self {
        Self { reader, config }
    }

    /// Stages for the current configuration, in execution order.
    pub fn stages(&self) -> Vec<Box<dyn Stage>> {
        build_stages(&self.config)
    }

    #[instrument(skip(self, data), fields(input_size = data.len()))]
    pub fn run(&self, data: &[u8], width: usize, height: usize, format: SampleFormat) -> Result<PixelBuffer> {
        let buffer = {
            let _span = tracing::info_span!("decode_raw").entered();
            self.reader.read_raw(data, width, height, format)?
        };

        let buffer = self.process(buffer)?;

        info!(
            width = buffer.width,
            height = buffer.height,
            channels = buffer.channels,
            "Pipeline complete"
        );
        Ok(buffer)
    }

    /// Runs the configured stages over an already decoded buffer.
    pub fn process(&self, mut buffer: PixelBuffer) -> Result<PixelBuffer> {
        execute(&self.stages(), &mut buffer)?;
        Ok(buffer)
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: PipelineConfig) {
        self.config = config;
    }
}

/// Scale, Debayer or MonoToRGB, Normalize, Stretch, CorrectGamma, WhiteBalance.
/// Stages without configuration are left out.
pub fn build_stages(config: &PipelineConfig) -> Vec<Box<dyn Stage>> {
    let mut stages: Vec<Box<dyn Stage>> = Vec::new();

    if let Some(scale) = config.scale {
        stages.push(Box::new(Scale::new(scale.scale, scale.offset)));
    }

    match config.bayer_pattern {
        Some(pattern) => stages.push(Box::new(Debayer::new(pattern))),
        None => stages.push(Box::new(MonoToRgb)),
    }

    if let Some(mode) = config.normalize {
        stages.push(Box::new(Normalize::new(mode)));
    }

    if let Some(algorithm) = config.stretch {
        stages.push(Box::new(Stretch::new(algorithm)));
    }

    if let Some(gamma) = config.gamma {
        stages.push(Box::new(CorrectGamma::new(gamma)));
    }

    if let Some(mode) = config.white_balance {
        stages.push(Box::new(WhiteBalance::new(mode)));
    }

    stages
}

/// Applies `stages` in order. The first error is returned as is and the
/// remaining stages are skipped.
pub fn execute(stages: &[Box<dyn Stage>], buffer: &mut PixelBuffer) -> Result<()> {
    for stage in stages {
        let name = stage.name();
        let _span = tracing::info_span!("stage", name = %name).entered();
        debug!("Running stage {}", name);
        stage.process(buffer)?;
    }
    Ok(())
}

/// Decodes `data` and runs the stages described by `config`.
pub fn run(
    data: &[u8],
    width: usize,
    height: usize,
    format: SampleFormat,
    config: &PipelineConfig,
) -> Result<PixelBuffer> {
    PixelPipeline::new(config.clone()).run(data, width, height, format)
}
