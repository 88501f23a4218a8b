//! Debayering module for converting Bayer mosaic samples to RGB

pub mod cpu_debayer;
pub mod types;

pub use cpu_debayer::CpuDebayer;
pub use types::{BayerColor, BayerPattern, DebayerMode};

use tracing::debug;

use crate::image_pipeline::buffer::PixelBuffer;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::stages::{Stage, require_raw_mono};

/// Pipeline stage turning a raw single-channel mosaic into interleaved RGB.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Debayer {
    pub mode: DebayerMode,
    pub pattern: BayerPattern,
}

impl Debayer {
    pub fn new(pattern: BayerPattern) -> Self {
        Self {
            mode: DebayerMode::Vng,
            pattern,
        }
    }
}

impl Stage for Debayer {
    fn name(&self) -> String {
        format!("Debayer ({} {})", self.mode, self.pattern)
    }

    fn process(&self, buffer: &mut PixelBuffer) -> Result<()> {
        require_raw_mono(buffer)?;
        debug!(mode = %self.mode, pattern = %self.pattern, "Debayering");

        let rgb = match self.mode {
            DebayerMode::Vng => CpuDebayer::new(self.pattern).process(&buffer.samples, buffer.width, buffer.height),
        };

        buffer.samples = rgb;
        buffer.channels = 3;
        Ok(())
    }
}
