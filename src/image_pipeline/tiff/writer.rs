use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::image_pipeline::buffer::PixelBuffer;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::tiff::standard_tiff_writer::StandardTiffWriter;
use crate::image_pipeline::tiff::types::ExportConfig;

pub trait TiffWriter {
    fn write_tiff(&self, buffer: &PixelBuffer, output: &mut dyn Write, config: &ExportConfig) -> Result<()>;
}

/// Writes `buffer` to `path` with the standard writer.
pub fn export_file<P: AsRef<Path>>(buffer: &PixelBuffer, path: P, config: &ExportConfig) -> Result<()> {
    let path = path.as_ref();
    info!(output = %path.display(), "Exporting TIFF");

    let mut file = std::fs::File::create(path)?;
    StandardTiffWriter.write_tiff(buffer, &mut file, config)
}
