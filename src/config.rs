use crate::error::{Error, Result};
use crate::frame::BasisFrame;
use crate::histogram::{bin_bounds, HEMISPHERE_DEG};
use crate::normalize::solid_angle;
use tracing::debug;

/// Amount of sampled directions in a default run.
///
/// One less than a million, iterations are numbered from 1.
pub const DEFAULT_SAMPLE_COUNT: usize = 999_999;
pub const DEFAULT_BIN_COUNT: usize = crate::histogram::DEFAULT_BIN_COUNT;
/// Every this many iterations a sample is kept for the scatter plot.
pub const DEFAULT_VISUALIZATION_STRIDE: usize = 1000;

/// Everything a sampling run can be configured with.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub sample_count: usize,
    pub bin_count: usize,
    pub basis_frame: BasisFrame,
    pub visualization_stride: usize,
    /// Seed for the random source, drawn from entropy if `None`
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            sample_count: DEFAULT_SAMPLE_COUNT,
            bin_count: DEFAULT_BIN_COUNT,
            basis_frame: BasisFrame::standard(),
            visualization_stride: DEFAULT_VISUALIZATION_STRIDE,
            seed: None,
        }
    }
}

impl Config {
    pub fn with_sample_count(mut self, sample_count: usize) -> Self {
        self.sample_count = sample_count;
        self
    }

    pub fn with_bin_count(mut self, bin_count: usize) -> Self {
        self.bin_count = bin_count;
        self
    }

    pub fn with_basis_frame(mut self, basis_frame: BasisFrame) -> Self {
        self.basis_frame = basis_frame;
        self
    }

    pub fn with_visualization_stride(mut self, visualization_stride: usize) -> Self {
        self.visualization_stride = visualization_stride;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Width of a histogram bin in degrees.
    pub fn delta_bin(&self) -> f64 {
        HEMISPHERE_DEG / self.bin_count as f64
    }

    /// Checks the configuration before any sample is drawn.
    pub fn validate(&self) -> Result<()> {
        if self.sample_count == 0 {
            return Err(Error::ZeroSampleCount);
        }

        if self.bin_count == 0 || !(self.delta_bin() > 0.0) {
            return Err(Error::InvalidBinWidth {
                bin_count: self.bin_count,
            });
        }

        if self.bin_count < 2 {
            return Err(Error::TooFewBins {
                bin_count: self.bin_count,
            });
        }

        if self.visualization_stride == 0 {
            return Err(Error::ZeroVisualizationStride);
        }

        // Huge bin counts make neighbouring edges round to the same cosine
        for bin in 0..self.bin_count {
            let (lower, upper) = bin_bounds(self.bin_count, bin);
            if !(solid_angle(lower, upper) > 0.0) {
                return Err(Error::DegenerateSolidAngle { bin });
            }
        }

        debug!(
            sample_count = self.sample_count,
            bin_count = self.bin_count,
            delta_bin = self.delta_bin(),
            visualization_stride = self.visualization_stride,
            seed = ?self.seed,
            "Configuration validated"
        );

        Ok(())
    }
}
