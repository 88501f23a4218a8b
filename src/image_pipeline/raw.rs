//! RAW sample decoding module
//!
//! This module turns big-endian sensor dumps of any supported sample
//! format into single-channel `f64` pixel buffers.

mod reader;
mod big_endian_reader;
pub mod types;

pub use reader::RawImageReader;
pub use big_endian_reader::{BigEndianReader, decode};
pub use types::SampleFormat;
