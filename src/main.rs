use anyhow::{Context, Result};
use lambert_sampling::{run, Config};
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod plot;

const OUT_PATH: &str = "cosine_distribution.png";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::default();
    info!(
        samples = config.sample_count,
        bins = config.bin_count,
        "Sampling cosine distribution"
    );

    let report = run(&config)?;

    plot::render(&report, Path::new(OUT_PATH))
        .with_context(|| format!("failed to render {}", OUT_PATH))?;
    info!(path = OUT_PATH, "Plot written");

    Ok(())
}
