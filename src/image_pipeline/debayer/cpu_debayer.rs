use rayon::prelude::*;
use tracing::info;

use crate::image_pipeline::debayer::types::{BayerColor, BayerPattern};

/// Fixed-template neighbor interpolation on the CPU.
///
/// Every output pixel keeps its sensed channel and averages the same-color
/// neighbors for the two missing ones. Reads past the border are clamped to
/// the nearest edge pixel.
pub struct CpuDebayer {
    pattern: BayerPattern,
}

/// Axis-aligned neighbors.
const CROSS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const DIAGONAL: [(isize, isize); 4] = [(-1, -1), (1, -1), (-1, 1), (1, 1)];
const HORIZONTAL: [(isize, isize); 2] = [(-1, 0), (1, 0)];
const VERTICAL: [(isize, isize); 2] = [(0, -1), (0, 1)];

impl CpuDebayer {
    pub fn new(pattern: BayerPattern) -> Self {
        Self { pattern }
    }

    /// Interpolates a `width * height` mosaic into interleaved RGB.
    ///
    /// `samples.len()` must equal `width * height`.
    pub fn process(&self, samples: &[f64], width: usize, height: usize) -> Vec<f64> {
        info!("Starting CPU debayering for image {}x{} ({})", width, height, self.pattern);

        let mut output = vec![0.0; width * height * 3];
        if output.is_empty() {
            return output;
        }

        let colors = self.pattern.color_map(width, height);
        let mosaic = Mosaic { samples, width, height };

        // One task per row; each writes only its own `width * 3` slice.
        output
            .par_chunks_mut(width * 3)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, pixel) in row.chunks_exact_mut(3).enumerate() {
                    let value = samples[y * width + x];
                    let rgb = match colors[y * width + x] {
                        BayerColor::Red => [
                            value,
                            mosaic.average(x, y, &CROSS),
                            mosaic.average(x, y, &DIAGONAL),
                        ],
                        BayerColor::Blue => [
                            mosaic.average(x, y, &DIAGONAL),
                            mosaic.average(x, y, &CROSS),
                            value,
                        ],
                        BayerColor::Green => {
                            // x - 1 and x + 1 share parity, so one lookup covers both sides.
                            let (red, blue) = if self.pattern.color_at(x + 1, y) == BayerColor::Red {
                                (&HORIZONTAL, &VERTICAL)
                            } else {
                                (&VERTICAL, &HORIZONTAL)
                            };
                            [mosaic.average(x, y, red), value, mosaic.average(x, y, blue)]
                        }
                    };
                    pixel.copy_from_slice(&rgb);
                }
            });

        output
    }
}

struct Mosaic<'a> {
    samples: &'a [f64],
    width: usize,
    height: usize,
}

impl Mosaic<'_> {
    fn read_clamped(&self, x: isize, y: isize) -> f64 {
        let cx = x.clamp(0, self.width as isize - 1) as usize;
        let cy = y.clamp(0, self.height as isize - 1) as usize;
        self.samples[cy * self.width + cx]
    }

    fn average(&self, x: usize, y: usize, offsets: &[(isize, isize)]) -> f64 {
        let sum: f64 = offsets
            .iter()
            .map(|&(dx, dy)| self.read_clamped(x as isize + dx, y as isize + dy))
            .sum();
        sum / offsets.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bggr_2x2() {
        let output = CpuDebayer::new(BayerPattern::Bggr).process(&[10.0, 20.0, 30.0, 40.0], 2, 2);
        assert_eq!(
            output,
            vec![
                25.0, 17.5, 10.0, // B
                30.0, 20.0, 15.0, // G, blue neighbors left/right
                35.0, 30.0, 20.0, // G, red neighbors left/right
                40.0, 32.5, 25.0, // R
            ]
        );
    }

    #[test]
    fn test_known_sample_preserved() {
        let width = 6;
        let height = 5;
        let samples: Vec<f64> = (0..width * height).map(|i| (i * 7 % 31) as f64).collect();

        for pattern in [BayerPattern::Bggr, BayerPattern::Rgbg, BayerPattern::Grbg, BayerPattern::Rggb] {
            let output = CpuDebayer::new(pattern).process(&samples, width, height);
            assert_eq!(output.len(), width * height * 3);

            for y in 0..height {
                for x in 0..width {
                    let channel = match pattern.color_at(x, y) {
                        BayerColor::Red => 0,
                        BayerColor::Green => 1,
                        BayerColor::Blue => 2,
                    };
                    assert_eq!(output[(y * width + x) * 3 + channel], samples[y * width + x]);
                }
            }
        }
    }

    #[test]
    fn test_flat_field_stays_flat() {
        let output = CpuDebayer::new(BayerPattern::Rggb).process(&[5.0; 12], 4, 3);
        assert!(output.iter().all(|&v| v == 5.0));
    }

    #[test]
    fn test_single_pixel_clamps_to_itself() {
        let output = CpuDebayer::new(BayerPattern::Grbg).process(&[8.0], 1, 1);
        assert_eq!(output, vec![8.0, 8.0, 8.0]);
    }

    #[test]
    fn test_empty_mosaic() {
        assert!(CpuDebayer::new(BayerPattern::Rggb).process(&[], 0, 0).is_empty());
    }
}
