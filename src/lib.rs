//! Samples directions from a cosine weighted (lambertian) hemisphere and checks
//! the result against the cosine law:
//! * drawing single directions relative to a [`BasisFrame`](struct.BasisFrame.html) or
//!   [`UnitHemisphere`](enum.UnitHemisphere.html) with the [`CosineWeighted`](trait.CosineWeighted.html) trait,
//!   or as an endless [`CosineSamples`](sequence/struct.CosineSamples.html) sequence,
//! * binning polar angles with [`AngleHistogram`](struct.AngleHistogram.html) and turning the counts into
//!   densities relative to the normal with [`normalize`](fn.normalize.html),
//! * running a whole configured experiment with [`run`](fn.run.html) or [`run_parallel`](fn.run_parallel.html).

#[cfg(test)]
#[macro_use]
extern crate approx;

mod config;
mod cosine_weighted;
mod error;
mod experiment;
mod frame;
mod histogram;
mod normalize;
pub mod sequence;

/// Direction vector type used throughout the crate.
pub type Vec3 = cgmath::Vector3<f64>;

pub use self::config::Config;
pub use self::cosine_weighted::{sample_direction, CosineWeighted, Sample};
pub use self::error::{Error, Result};
pub use self::experiment::{run, run_parallel, DensityCurve, Report, Scatter};
pub use self::frame::{BasisFrame, UnitHemisphere};
pub use self::histogram::{AngleBin, AngleHistogram};
pub use self::normalize::{bin_solid_angles, normalize, reference_curve, solid_angle};
pub use self::sequence::CosineSamples;
