//! Error types for the core crate.
//!
//! Only caller mistakes are errors here: options that cannot describe a
//! sampling window, or geometry rejected by the checked constructors.
//! Gaps, empty input and degenerate-but-finite geometry are handled by
//! fallbacks and never surface as errors.

use thiserror::Error;

/// Errors raised by the checked geometry constructors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Arc radius is zero or negative.
    #[error("Arc radius must be positive, got {0}")]
    InvalidRadius(f64),

    /// Ellipse minor/major ratio is outside (0, 1].
    #[error("Ellipse axis ratio must be in (0, 1], got {0}")]
    InvalidRatio(f64),

    /// Ellipse major axis vector has zero length.
    #[error("Ellipse major axis has zero length")]
    DegenerateMajorAxis,

    /// A coordinate, angle or parameter is NaN or infinite.
    #[error("Non-finite value for '{0}'")]
    NonFinite(&'static str),
}

/// Errors raised when conversion options are unusable.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The waveform must contain at least one sample.
    #[error("Sample count must be at least 1")]
    ZeroSamples,

    /// Tolerance is negative or not finite.
    #[error("Tolerance must be a finite, non-negative number, got {0}")]
    InvalidTolerance(f64),

    /// Scale factor is not finite.
    #[error("Scale factor must be finite, got {0}")]
    InvalidScale(f64),

    /// A target point or the fallback level is not finite.
    #[error("Non-finite value for '{0}'")]
    NonFiniteTarget(&'static str),

    /// Start and end share an x coordinate, so the grid has no width.
    #[error("Sampling window is empty: start and end x are both {0}")]
    DegenerateWindow(f64),
}

/// Top-level error for core operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WaveformError {
    /// Invalid geometry.
    #[error("Geometry error: {0}")]
    Geometry(#[from] GeometryError),

    /// Invalid conversion options.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type alias for core operations.
pub type WaveformResult<T> = Result<T, WaveformError>;
