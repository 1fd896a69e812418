//! Draws the configured amount of samples and turns them into the two
//! datasets that get plotted: a thinned point cloud and the angular density
//! next to the cosine law.

use crate::config::Config;
use crate::cosine_weighted::Sample;
use crate::error::Result;
use crate::histogram::AngleHistogram;
use crate::normalize::{normalize, reference_curve};
use crate::sequence::CosineSamples;
use crate::Vec3;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use tracing::{debug, info};

/// Iterations handled by one task of `run_parallel`.
pub const CHUNK_SIZE: usize = 1 << 16;

/// Coordinates of the directions kept for visualization, one entry per
/// retained sample in every sequence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scatter {
    pub u: Vec<f64>,
    pub v: Vec<f64>,
    pub w: Vec<f64>,
}

impl Scatter {
    pub fn push(&mut self, direction: Vec3) {
        self.u.push(direction.x);
        self.v.push(direction.y);
        self.w.push(direction.z);
    }

    pub fn len(&self) -> usize {
        self.u.len()
    }

    pub fn is_empty(&self) -> bool {
        self.u.is_empty()
    }

    pub fn points<'a>(&'a self) -> impl Iterator<Item = (f64, f64, f64)> + 'a {
        self.u
            .iter()
            .zip(self.v.iter())
            .zip(self.w.iter())
            .map(|((&u, &v), &w)| (u, v, w))
    }

    fn append(&mut self, other: &mut Scatter) {
        self.u.append(&mut other.u);
        self.v.append(&mut other.v);
        self.w.append(&mut other.w);
    }
}

/// Normalized histogram density and the analytic cosine law over the
/// same x-axis.
///
/// The x-axis holds the lower edge of each bin, not its centre, and the
/// reference is evaluated there too. Towards 90° the reference therefore
/// lies above the measured density by about half a bin.
#[derive(Debug, Clone, PartialEq)]
pub struct DensityCurve {
    pub angles_deg: Vec<f64>,
    pub density: Vec<f64>,
    pub reference: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// Raw counts, before any normalization
    pub histogram: AngleHistogram,
    pub scatter: Scatter,
    pub curve: DensityCurve,
}

/// Accumulator threaded through the sampling loop.
#[derive(Debug, Clone)]
struct Tally {
    histogram: AngleHistogram,
    scatter: Scatter,
}

impl Tally {
    fn new(histogram: AngleHistogram) -> Self {
        Tally {
            histogram,
            scatter: Scatter::default(),
        }
    }

    /// Records the sample drawn in the given iteration, counted from 1.
    fn record(&mut self, iteration: usize, sample: &Sample, visualization_stride: usize) {
        self.histogram.accumulate(sample.theta_deg);
        if iteration % visualization_stride == 0 {
            self.scatter.push(sample.direction);
        }
    }

    /// Combines with the tally of later iterations.
    fn merged(mut self, mut later: Tally) -> Self {
        self.histogram.merge(&later.histogram);
        self.scatter.append(&mut later.scatter);
        self
    }
}

/// Samples on the calling thread from a single random source.
pub fn run(config: &Config) -> Result<Report> {
    config.validate()?;

    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let samples = CosineSamples::new(config.basis_frame, rng);
    let stride = config.visualization_stride;

    let tally = (1..=config.sample_count).zip(samples).fold(
        Tally::new(AngleHistogram::new(config.bin_count)?),
        |mut tally, (iteration, sample)| {
            tally.record(iteration, &sample, stride);
            tally
        },
    );

    finish(tally)
}

/// Samples in chunks of `CHUNK_SIZE` iterations on the rayon thread pool.
///
/// Every chunk draws from its own source, seeded from the configured seed
/// and the chunk index, so the result only depends on the configuration
/// and not on the amount of threads. It does differ from the result of
/// `run` with the same seed.
pub fn run_parallel(config: &Config) -> Result<Report> {
    config.validate()?;

    let base_seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
    let empty = AngleHistogram::new(config.bin_count)?;
    let chunk_count = (config.sample_count + CHUNK_SIZE - 1) / CHUNK_SIZE;
    let stride = config.visualization_stride;

    debug!(chunk_count, chunk_size = CHUNK_SIZE, "Sampling in parallel");

    let tally = (0..chunk_count)
        .into_par_iter()
        .map(|chunk| {
            let first = chunk * CHUNK_SIZE + 1;
            let last = ((chunk + 1) * CHUNK_SIZE).min(config.sample_count);
            let samples = CosineSamples::seeded(config.basis_frame, chunk_seed(base_seed, chunk));

            let mut tally = Tally::new(empty.clone());
            for (iteration, sample) in (first..=last).zip(samples) {
                tally.record(iteration, &sample, stride);
            }
            tally
        })
        .reduce(|| Tally::new(empty.clone()), Tally::merged);

    finish(tally)
}

fn chunk_seed(base_seed: u64, chunk: usize) -> u64 {
    base_seed ^ (chunk as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

fn finish(tally: Tally) -> Result<Report> {
    let Tally { histogram, scatter } = tally;

    let density = normalize(&histogram)?;
    let angles_deg = histogram.lower_edges();
    let reference = reference_curve(&angles_deg);

    info!(
        samples = histogram.total(),
        retained = scatter.len(),
        bins = histogram.bin_count(),
        "Sampling finished"
    );

    Ok(Report {
        histogram,
        scatter,
        curve: DensityCurve {
            angles_deg,
            density,
            reference,
        },
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::Error;
    use crate::frame::UnitHemisphere;
    use cgmath::prelude::*;

    fn seeded(sample_count: usize, seed: u64) -> Config {
        Config::default().with_sample_count(sample_count).with_seed(seed)
    }

    #[test]
    fn test_counts_and_thinning() {
        let report = run(&seeded(10_000, 1)).unwrap();

        assert_eq!(10_000, report.histogram.total());
        assert_eq!(10, report.scatter.len());
        assert_eq!(report.scatter.len(), report.scatter.v.len());
        assert_eq!(report.scatter.len(), report.scatter.w.len());

        for (u, v, w) in report.scatter.points() {
            assert_abs_diff_eq!(1.0, Vec3::new(u, v, w).magnitude(), epsilon = 1e-9);
            assert!(w >= 0.0);
        }
    }

    #[test]
    fn test_first_iteration_not_retained() {
        let report = run(&seeded(999, 4).with_visualization_stride(1000)).unwrap();
        assert!(report.scatter.is_empty());
        assert_eq!(999, report.histogram.total());

        let every = run(&seeded(999, 4).with_visualization_stride(1)).unwrap();
        assert_eq!(999, every.scatter.len());
    }

    #[test]
    fn test_curve_alignment() {
        let report = run(&seeded(50_000, 2)).unwrap();
        let curve = &report.curve;

        assert_eq!(45, curve.angles_deg.len());
        assert_eq!(45, curve.density.len());
        assert_eq!(45, curve.reference.len());

        // Both curves sit on the lower bin edges
        for (angle, reference) in curve.angles_deg.iter().zip(curve.reference.iter()) {
            assert_eq!(angle.to_radians().cos(), *reference);
        }
        assert_eq!(0.0, curve.angles_deg[0]);
        assert_eq!(88.0, curve.angles_deg[44]);
    }

    #[test]
    fn test_converges_to_cosine_law() {
        let report = run(&seeded(1_000_000, 2015)).unwrap();
        let density = &report.curve.density;

        assert_eq!(1_000_000, report.histogram.total());
        assert_abs_diff_eq!(1.0, density[0], epsilon = 0.05);
        // Compared against the bin centre, the plotted reference uses cos(88°)
        assert_abs_diff_eq!(89.0f64.to_radians().cos(), density[44], epsilon = 0.01);

        for (bin, d) in density.iter().enumerate() {
            let centre = (2.0 * bin as f64 + 1.0).to_radians();
            assert_abs_diff_eq!(centre.cos(), *d, epsilon = 0.08);
        }
    }

    #[test]
    fn test_default_run_sample_count() {
        let report = run(&Config::default().with_seed(0)).unwrap();
        assert_eq!(999_999, report.histogram.total());
        assert_eq!(999, report.scatter.len());
    }

    #[test]
    fn test_deterministic_with_seed() {
        let a = run(&seeded(20_000, 77).with_visualization_stride(100)).unwrap();
        let b = run(&seeded(20_000, 77).with_visualization_stride(100)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_other_frame() {
        let config = seeded(20_000, 5)
            .with_basis_frame(UnitHemisphere::NegZ.frame())
            .with_visualization_stride(10);
        let report = run(&config).unwrap();

        assert_eq!(2000, report.scatter.len());
        assert!(report.scatter.w.iter().all(|&w| w <= 0.0));
    }

    #[test]
    fn test_invalid_config() {
        assert_eq!(Err(Error::ZeroSampleCount), run(&seeded(0, 1)));
        assert_eq!(
            Err(Error::ZeroVisualizationStride),
            run_parallel(&seeded(10, 1).with_visualization_stride(0))
        );
    }

    #[test]
    fn test_parallel_counts_and_thinning() {
        let sample_count = 3 * CHUNK_SIZE + 17;
        let report = run_parallel(&seeded(sample_count, 9)).unwrap();

        assert_eq!(sample_count as u64, report.histogram.total());
        assert_eq!(sample_count / 1000, report.scatter.len());
    }

    #[test]
    fn test_parallel_deterministic_with_seed() {
        let config = seeded(2 * CHUNK_SIZE + 5, 13).with_visualization_stride(97);
        let a = run_parallel(&config).unwrap();
        let b = run_parallel(&config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_parallel_converges_to_cosine_law() {
        let report = run_parallel(&seeded(1_000_000, 2015)).unwrap();
        let density = &report.curve.density;

        assert_abs_diff_eq!(1.0, density[0], epsilon = 0.05);
        assert_abs_diff_eq!(89.0f64.to_radians().cos(), density[44], epsilon = 0.01);
    }
}
