//! TIFF export module
//!
//! Writes processed buffers as 8-bit TIFF images with various compression options.

mod writer;
mod standard_tiff_writer;
pub mod types;

pub use writer::{TiffWriter, export_file};
pub use standard_tiff_writer::StandardTiffWriter;
pub use types::{TiffCompression, ExportConfig, ExportConfigBuilder};
