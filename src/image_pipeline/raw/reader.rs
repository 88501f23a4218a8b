use crate::image_pipeline::buffer::PixelBuffer;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::raw::types::SampleFormat;

pub trait RawImageReader {
    fn read_raw(&self, data: &[u8], width: usize, height: usize, format: SampleFormat) -> Result<PixelBuffer>;
}
