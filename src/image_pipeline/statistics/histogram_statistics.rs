/// Summary of a 256-bucket histogram, in bucket units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramStatistics {
    pub count: u64,
    pub mean: f64,
    pub median: usize,
    pub std_dev: f64,
    pub min: usize,
    pub max: usize,
    pub percentile1: usize,
    pub percentile99: usize,
}

impl HistogramStatistics {
    pub fn from_histogram(data: &[u64]) -> Self {
        let total: u64 = data.iter().sum();

        if total == 0 {
            return Self {
                count: 0,
                mean: 0.0,
                median: 0,
                std_dev: 0.0,
                min: 0,
                max: 0,
                percentile1: 0,
                percentile99: 0,
            };
        }

        let mut sum = 0.0;
        let mut sum_sq = 0.0;
        let mut cumulative = 0u64;
        let mut median = None;
        let mut min = None;
        let mut max = None;

        // Median threshold is the truncated half count.
        let half = total / 2;

        for (index, &freq) in data.iter().enumerate() {
            if freq > 0 {
                if min.is_none() {
                    min = Some(index);
                }
                max = Some(index);
            }

            let weight = freq as f64;
            let bucket = index as f64;
            sum += bucket * weight;
            sum_sq += bucket * bucket * weight;

            if median.is_none() {
                cumulative += freq;
                if cumulative >= half {
                    median = Some(index);
                }
            }
        }

        let mean = sum / total as f64;
        let variance = sum_sq / total as f64 - mean * mean;
        let (percentile1, percentile99) = Self::percentiles(data, total, 0.01, 0.99);

        Self {
            count: total,
            mean,
            median: median.unwrap_or(0),
            std_dev: variance.max(0.0).sqrt(),
            min: min.unwrap_or(0),
            max: max.unwrap_or(255),
            percentile1,
            percentile99,
        }
    }

    /// First buckets whose cumulative count reaches `floor(total * p1)` and
    /// `floor(total * p2)`. A threshold that is never reached maps to 255.
    pub fn percentiles(data: &[u64], total: u64, p1: f64, p2: f64) -> (usize, usize) {
        let t1 = (total as f64 * p1) as u64;
        let t2 = (total as f64 * p2) as u64;
        let mut cumulative = 0u64;
        let mut r1 = None;
        let mut r2 = None;

        for (index, &freq) in data.iter().enumerate() {
            cumulative += freq;
            if r1.is_none() && cumulative >= t1 {
                r1 = Some(index);
            }
            if r2.is_none() && cumulative >= t2 {
                r2 = Some(index);
            }
            if r1.is_some() && r2.is_some() {
                break;
            }
        }

        (r1.unwrap_or(255), r2.unwrap_or(255))
    }
}
