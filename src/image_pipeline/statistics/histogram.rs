use rayon::prelude::*;

use crate::image_pipeline::statistics::HistogramStatistics;

pub const HISTOGRAM_BINS: usize = 256;

/// Rec.709 luma weights, scaled by 10000.
const LUMA_WEIGHTS: [u32; 3] = [2126, 7152, 722];
const LUMA_SCALE: u32 = 10000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistogramMode {
    /// One table per channel
    Rgb,
    /// One table of integer Rec.709 luma
    Luminance,
}

/// Bucket counts over interleaved 8-bit RGB data.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub mode: HistogramMode,
    pub data: Vec<[u64; HISTOGRAM_BINS]>,
}

impl Histogram {
    /// Counts every complete RGB triple in `bytes`; trailing bytes that do not
    /// form a full pixel are ignored.
    pub fn from_bytes(bytes: &[u8], mode: HistogramMode) -> Self {
        let tables = match mode {
            HistogramMode::Rgb => 3,
            HistogramMode::Luminance => 1,
        };

        let data = bytes
            .par_chunks_exact(3)
            .fold(
                || vec![[0u64; HISTOGRAM_BINS]; tables],
                |mut acc, pixel| {
                    match mode {
                        HistogramMode::Rgb => {
                            for (table, &value) in acc.iter_mut().zip(pixel) {
                                table[value as usize] += 1;
                            }
                        }
                        HistogramMode::Luminance => {
                            acc[0][luma(pixel)] += 1;
                        }
                    }
                    acc
                },
            )
            .reduce(
                || vec![[0u64; HISTOGRAM_BINS]; tables],
                |mut left, right| {
                    for (l, r) in left.iter_mut().zip(&right) {
                        for (a, b) in l.iter_mut().zip(r) {
                            *a += b;
                        }
                    }
                    left
                },
            );

        Self { mode, data }
    }

    pub fn statistics(&self) -> Vec<HistogramStatistics> {
        self.data
            .iter()
            .map(|table| HistogramStatistics::from_histogram(table))
            .collect()
    }
}

fn luma(pixel: &[u8]) -> usize {
    let weighted: u32 = pixel
        .iter()
        .zip(LUMA_WEIGHTS)
        .map(|(&value, weight)| u32::from(value) * weight)
        .sum();
    (weighted / LUMA_SCALE) as usize
}
