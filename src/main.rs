use anyhow::Context;
use skypixel_rs::image_pipeline::{
    BayerPattern, ExportConfig, Histogram, HistogramMode, NormalizeMode, PipelineConfig,
    PixelPipeline, SampleFormat, StretchAlgorithm, TiffCompression, WhiteBalanceMode, export_file,
};
use skypixel_rs::logger;

use tracing::info;

const WIDTH: usize = 640;
const HEIGHT: usize = 480;

/// Synthetic 16-bit RGGB frame: a faint gradient with a bright star in the middle.
fn synthetic_frame() -> Vec<u8> {
    let (cx, cy) = (WIDTH as f64 / 2.0, HEIGHT as f64 / 2.0);
    (0..HEIGHT)
        .flat_map(|y| (0..WIDTH).map(move |x| (x, y)))
        .flat_map(|(x, y)| {
            let gradient = 200.0 + (x + y) as f64 * 0.5;
            let distance = ((x as f64 - cx).powi(2) + (y as f64 - cy).powi(2)).sqrt();
            let star = 20_000.0 * (-distance / 6.0).exp();
            let value = (gradient + star).min(i16::MAX as f64) as i16;
            value.to_be_bytes()
        })
        .collect()
}

fn main() -> anyhow::Result<()> {
    logger::init();

    info!("Starting skypixel...");

    let config = PipelineConfig::builder()
        .bayer_pattern(BayerPattern::Rggb)
        .normalize(NormalizeMode::Percentile(0.5, 99.9))
        .stretch(StretchAlgorithm::Arcsinh(10.0))
        .gamma(2.2)
        .white_balance(WhiteBalanceMode::Auto)
        .build();
    let pipeline = PixelPipeline::new(config);

    for stage in pipeline.stages() {
        info!("Stage: {}", stage.name());
    }

    let buffer = pipeline
        .run(&synthetic_frame(), WIDTH, HEIGHT, SampleFormat::I16)
        .context("pipeline run failed")?;
    info!("Result: {}", buffer);

    let bytes = buffer.to_display_bytes().context("display conversion failed")?;
    let histogram = Histogram::from_bytes(&bytes, HistogramMode::Luminance);
    if let Some(stats) = histogram.statistics().first() {
        info!(
            mean = stats.mean,
            median = stats.median,
            std_dev = stats.std_dev,
            p1 = stats.percentile1,
            p99 = stats.percentile99,
            "Luminance statistics"
        );
    }

    let export = ExportConfig::builder()
        .compression(TiffCompression::DeflateBalanced)
        .build();
    export_file(&buffer, "output.tiff", &export).context("TIFF export failed")?;
    info!("Wrote output.tiff");

    Ok(())
}
