use crate::frame::{BasisFrame, UnitHemisphere};
use crate::Vec3;
use rand::Rng;
use std::f64::consts::PI;

/// Performs cosine weighted sampling, e.g. for monte carlo estimators.
pub trait CosineWeighted {
    fn cosine_weighted<R: Rng + ?Sized>(&self, rng: &mut R) -> Sample;
}

/// A direction drawn from the cosine weighted hemisphere, together with
/// the angles it was built from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Unit vector in the coordinates the frame is expressed in
    pub direction: Vec3,
    /// Angle between `direction` and the frame normal, in degrees
    pub theta_deg: f64,
    /// In-plane angle around the normal, in radians
    pub azimuth: f64,
}

/// Draws one direction with density proportional to the cosine of its
/// angle to the frame normal.
///
/// Consumes exactly two uniform draws from `rng`, the first for the polar
/// angle and the second for the azimuth. The polar angle is obtained by
/// inverting the CDF `sin²θ` of the marginal density `2 sinθ cosθ`.
pub fn sample_direction<R: Rng + ?Sized>(frame: &BasisFrame, rng: &mut R) -> Sample {
    let r1: f64 = rng.gen();
    let cos_theta = (1.0 - r1).sqrt();
    let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();

    let r2: f64 = rng.gen();
    let psi = r2 * 2.0 * PI;

    let direction = frame.to_world(
        sin_theta * psi.cos(),
        sin_theta * psi.sin(),
        cos_theta,
    );

    Sample {
        direction,
        theta_deg: cos_theta.acos().to_degrees(),
        azimuth: psi,
    }
}

impl CosineWeighted for BasisFrame {
    fn cosine_weighted<R: Rng + ?Sized>(&self, rng: &mut R) -> Sample {
        sample_direction(self, rng)
    }
}

impl CosineWeighted for UnitHemisphere {
    fn cosine_weighted<R: Rng + ?Sized>(&self, rng: &mut R) -> Sample {
        sample_direction(&self.frame(), rng)
    }
}
