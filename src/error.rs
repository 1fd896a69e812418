use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("sample count must be at least one")]
    ZeroSampleCount,
    #[error("invalid bin width: cannot divide 90 degrees into {bin_count} bins")]
    InvalidBinWidth { bin_count: usize },
    #[error("normalization averages the first two bins, got only {bin_count}")]
    TooFewBins { bin_count: usize },
    #[error("visualization stride must be at least one")]
    ZeroVisualizationStride,
    #[error("basis frame is not orthonormal")]
    NonOrthonormalBasis,
    #[error("degenerate solid angle for bin {bin}")]
    DegenerateSolidAngle { bin: usize },
    #[error("no samples in the first two bins, cannot establish the reference density")]
    EmptyReference,
}

pub type Result<T> = ::std::result::Result<T, Error>;
