use rayon::prelude::*;
use tracing::debug;

use crate::image_pipeline::buffer::PixelBuffer;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::stages::{Stage, require_raw_mono};

/// Replicates a single-channel image into three identical channels.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonoToRgb;

impl Stage for MonoToRgb {
    fn name(&self) -> String {
        "Mono to RGB".to_string()
    }

    fn process(&self, buffer: &mut PixelBuffer) -> Result<()> {
        require_raw_mono(buffer)?;
        debug!("Expanding {}x{} mono buffer to RGB", buffer.width, buffer.height);

        let mut rgb = vec![0.0; buffer.samples.len() * 3];
        rgb.par_chunks_exact_mut(3)
            .zip(buffer.samples.par_iter())
            .for_each(|(pixel, &value)| pixel.fill(value));

        buffer.samples = rgb;
        buffer.channels = 3;
        Ok(())
    }
}
