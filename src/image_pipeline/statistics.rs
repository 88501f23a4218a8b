//! Image statistics module
//!
//! Percentile bounds over raw samples (used by percentile normalization) and
//! 8-bit histograms with their summary statistics.

mod percentile;
mod histogram;
mod histogram_statistics;

pub use percentile::percentile_bounds;
pub use histogram::{Histogram, HistogramMode, HISTOGRAM_BINS};
pub use histogram_statistics::HistogramStatistics;
