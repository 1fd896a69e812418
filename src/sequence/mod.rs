//! Sequences of sampled directions.

mod cosine;

pub use self::cosine::CosineSamples;
