use crate::error::{Error, Result};
use std::iter::FromIterator;

/// The polar angle range covered by a histogram, in degrees.
pub const HEMISPHERE_DEG: f64 = 90.0;

/// Bin count used when collecting a histogram from an iterator.
pub const DEFAULT_BIN_COUNT: usize = 45;

/// Lower and upper edge in degrees of a bin, when splitting the hemisphere into `bin_count` bins.
///
/// Edges are computed from the index instead of being summed up, so
/// neighbouring bins share an edge and the last upper edge is exactly 90°.
pub fn bin_bounds(bin_count: usize, bin_idx: usize) -> (f64, f64) {
    let delta_bin = HEMISPHERE_DEG / bin_count as f64;
    let lower = bin_idx as f64 * delta_bin;
    let upper = if bin_idx + 1 == bin_count {
        HEMISPHERE_DEG
    } else {
        (bin_idx + 1) as f64 * delta_bin
    };
    (lower, upper)
}

/// Counts polar angles in equally wide bins over `[0°, 90°]`.
#[derive(Debug, Clone, PartialEq)]
pub struct AngleHistogram {
    counts: Vec<u64>,
    /// Width of every bin in degrees, `90 / bin_count`
    delta_bin: f64,
}

/// Read-only view of one bin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleBin {
    pub lower_deg: f64,
    pub upper_deg: f64,
    pub count: u64,
}

impl AngleHistogram {
    pub fn new(bin_count: usize) -> Result<Self> {
        if bin_count == 0 {
            return Err(Error::InvalidBinWidth { bin_count });
        }

        Ok(AngleHistogram {
            counts: vec![0; bin_count],
            delta_bin: HEMISPHERE_DEG / bin_count as f64,
        })
    }

    pub fn bin_count(&self) -> usize {
        self.counts.len()
    }

    pub fn delta_bin(&self) -> f64 {
        self.delta_bin
    }

    /// Lower edge of the bin with the given index, in degrees.
    pub fn lower_deg(&self, bin_idx: usize) -> f64 {
        bin_bounds(self.counts.len(), bin_idx).0
    }

    pub fn upper_deg(&self, bin_idx: usize) -> f64 {
        bin_bounds(self.counts.len(), bin_idx).1
    }

    pub fn bin(&self, bin_idx: usize) -> AngleBin {
        AngleBin {
            lower_deg: self.lower_deg(bin_idx),
            upper_deg: self.upper_deg(bin_idx),
            count: self.counts[bin_idx],
        }
    }

    pub fn bins<'a>(&'a self) -> impl Iterator<Item = AngleBin> + 'a {
        (0..self.counts.len()).map(move |idx| self.bin(idx))
    }

    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Lower bin edges in degrees, the x-axis of the density plot.
    pub fn lower_edges(&self) -> Vec<f64> {
        (0..self.counts.len()).map(|idx| self.lower_deg(idx)).collect()
    }

    /// Index of the bin an angle falls into.
    ///
    /// Angles of exactly 90° (or above) go into the last bin, negative
    /// angles into the first.
    pub fn bin_idx(&self, theta_deg: f64) -> usize {
        let idx = (theta_deg / self.delta_bin).floor();
        if idx <= 0.0 {
            0
        } else {
            (idx as usize).min(self.counts.len() - 1)
        }
    }

    pub fn accumulate(&mut self, theta_deg: f64) {
        let idx = self.bin_idx(theta_deg);
        self.counts[idx] += 1;
    }

    /// Adds the counts of a histogram with the same bin layout.
    ///
    /// Used to combine partial histograms of independent workers; the
    /// result does not depend on the order of merging.
    pub fn merge(&mut self, other: &AngleHistogram) {
        assert_eq!(
            self.counts.len(),
            other.counts.len(),
            "Can only merge histograms with equal bin count"
        );

        for (own, theirs) in self.counts.iter_mut().zip(other.counts.iter()) {
            *own += *theirs;
        }
    }

    /// Total amount of accumulated angles.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }
}

impl FromIterator<f64> for AngleHistogram {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let mut histogram = AngleHistogram {
            counts: vec![0; DEFAULT_BIN_COUNT],
            delta_bin: HEMISPHERE_DEG / DEFAULT_BIN_COUNT as f64,
        };

        for theta_deg in iter {
            histogram.accumulate(theta_deg);
        }

        histogram
    }
}
