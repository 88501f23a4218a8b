//! Image processing pipeline module
//!
//! Raw sensor payloads are decoded into a [`PixelBuffer`], then pushed through
//! an ordered list of stages (scale, demosaic, normalization, tone and color
//! correction). Statistics and TIFF export consume the processed buffer.

pub mod buffer;
pub mod common;
pub mod raw;
pub mod statistics;
pub mod stages;
pub mod debayer;
pub mod pipeline;
pub mod tiff;

pub use buffer::PixelBuffer;

pub use common::{
    ProcessingError,
    Result,
};

pub use raw::{
    BigEndianReader,
    RawImageReader,
    SampleFormat,
    decode,
};

pub use statistics::{
    Histogram,
    HistogramMode,
    HistogramStatistics,
    percentile_bounds,
};

pub use stages::{
    CorrectGamma,
    MonoToRgb,
    Normalize,
    NormalizeMode,
    Scale,
    Stage,
    Stretch,
    StretchAlgorithm,
    WhiteBalance,
    WhiteBalanceMode,
};

pub use debayer::{
    BayerPattern,
    Debayer,
    DebayerMode,
};

pub use pipeline::{
    PipelineConfig,
    PipelineConfigBuilder,
    PixelPipeline,
    run,
};

pub use self::tiff::{
    ExportConfig,
    ExportConfigBuilder,
    StandardTiffWriter,
    TiffCompression,
    TiffWriter,
    export_file,
};
