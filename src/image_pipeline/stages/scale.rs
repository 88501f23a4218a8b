use rayon::prelude::*;
use tracing::debug;

use crate::image_pipeline::buffer::PixelBuffer;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::stages::Stage;

/// `v * scale + offset` over every sample, whatever the buffer state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    pub scale: f64,
    pub offset: f64,
}

impl Scale {
    pub fn new(scale: f64, offset: f64) -> Self {
        Self { scale, offset }
    }
}

impl Stage for Scale {
    fn name(&self) -> String {
        format!("Scale ({:.2} {:.2})", self.scale, self.offset)
    }

    fn process(&self, buffer: &mut PixelBuffer) -> Result<()> {
        debug!(scale = self.scale, offset = self.offset, "Scaling {} samples", buffer.samples.len());

        let (scale, offset) = (self.scale, self.offset);
        buffer
            .samples
            .par_iter_mut()
            .for_each(|v| *v = *v * scale + offset);

        Ok(())
    }
}
