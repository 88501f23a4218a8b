use rayon::prelude::*;
use tracing::debug;

use crate::image_pipeline::buffer::PixelBuffer;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::stages::{Stage, require_normalized};

/// Power-law correction, `v^(1/gamma)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorrectGamma {
    pub gamma: f64,
}

impl CorrectGamma {
    pub fn new(gamma: f64) -> Self {
        Self { gamma }
    }
}

impl Stage for CorrectGamma {
    fn name(&self) -> String {
        format!("Gamma Correction ({:.2})", self.gamma)
    }

    fn process(&self, buffer: &mut PixelBuffer) -> Result<()> {
        require_normalized(buffer)?;
        debug!(gamma = self.gamma, "Correcting gamma");

        let exponent = 1.0 / self.gamma;
        buffer.samples.par_iter_mut().for_each(|v| *v = v.powf(exponent));
        Ok(())
    }
}
