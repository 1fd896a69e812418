//! Turns raw angle counts into density estimates comparable to the cosine law.

use crate::error::{Error, Result};
use crate::histogram::AngleHistogram;
use std::f64::consts::PI;

/// Solid angle of the spherical annulus between two polar angles, in steradians.
///
/// This is `2π((1 - cos θ2) - (1 - cos θ1))`, written as `2π(cos θ1 - cos θ2)`.
pub fn solid_angle(lower_deg: f64, upper_deg: f64) -> f64 {
    2.0 * PI * (lower_deg.to_radians().cos() - upper_deg.to_radians().cos())
}

/// Solid angle of every bin of the histogram.
pub fn bin_solid_angles(histogram: &AngleHistogram) -> Vec<f64> {
    histogram
        .bins()
        .map(|bin| solid_angle(bin.lower_deg, bin.upper_deg))
        .collect()
}

/// Estimates the angular density per bin, relative to the density at the normal.
///
/// Counts are first divided by the solid angle of their bin, then by the
/// mean of the first two area normalized values. For a cosine weighted
/// source the result approaches `cos θ` as the sample count grows.
pub fn normalize(histogram: &AngleHistogram) -> Result<Vec<f64>> {
    if histogram.bin_count() < 2 {
        return Err(Error::TooFewBins {
            bin_count: histogram.bin_count(),
        });
    }

    let mut densities = Vec::with_capacity(histogram.bin_count());
    for (bin_idx, (count, area)) in histogram
        .counts()
        .iter()
        .zip(bin_solid_angles(histogram))
        .enumerate()
    {
        if !(area > 0.0) {
            return Err(Error::DegenerateSolidAngle { bin: bin_idx });
        }
        densities.push(*count as f64 / area);
    }

    let reference = 0.5 * (densities[0] + densities[1]);
    if reference == 0.0 {
        return Err(Error::EmptyReference);
    }

    for density in densities.iter_mut() {
        *density /= reference;
    }

    Ok(densities)
}

/// The analytic cosine law evaluated at each angle given in degrees.
pub fn reference_curve(angles_deg: &[f64]) -> Vec<f64> {
    angles_deg.iter().map(|a| a.to_radians().cos()).collect()
}
