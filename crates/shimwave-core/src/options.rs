//! Conversion options.

use serde::{Deserialize, Serialize};

use crate::assembler::AssemblyOptions;
use crate::error::ConfigError;
use crate::geometry::Point;
use crate::resample::SampleGrid;

/// Default x extent of the coil drawings, in drawing units.
pub const DEFAULT_HALF_WIDTH: f64 = 7.413;
pub const DEFAULT_TOLERANCE: f64 = 0.05;
pub const DEFAULT_NUM_SAMPLES: usize = 1000;
pub const DEFAULT_Y_SCALE: f64 = 0.34;

/// Everything a single conversion needs besides the geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionOptions {
    /// Point the path starts from; its x is the first grid position.
    pub target_start: Point,
    /// Point the path must end at; its x is the last grid position.
    pub target_end: Point,
    /// Largest endpoint distance still treated as connected.
    pub tolerance: f64,
    /// Number of waveform samples.
    pub num_samples: usize,
    /// Factor applied to every sampled y value.
    pub y_scale: f64,
    /// Unscaled level of the flat waveform used when there is no geometry.
    pub fallback_level: f64,
    /// Suppress gap diagnostics.
    pub quiet: bool,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            target_start: Point::new(-DEFAULT_HALF_WIDTH, 0.0),
            target_end: Point::new(DEFAULT_HALF_WIDTH, 0.0),
            tolerance: DEFAULT_TOLERANCE,
            num_samples: DEFAULT_NUM_SAMPLES,
            y_scale: DEFAULT_Y_SCALE,
            fallback_level: 0.0,
            quiet: false,
        }
    }
}

impl ConversionOptions {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_samples == 0 {
            return Err(ConfigError::ZeroSamples);
        }
        if !(self.tolerance.is_finite() && self.tolerance >= 0.0) {
            return Err(ConfigError::InvalidTolerance(self.tolerance));
        }
        if !self.y_scale.is_finite() {
            return Err(ConfigError::InvalidScale(self.y_scale));
        }
        if !self.target_start.is_finite() {
            return Err(ConfigError::NonFiniteTarget("target_start"));
        }
        if !self.target_end.is_finite() {
            return Err(ConfigError::NonFiniteTarget("target_end"));
        }
        if !self.fallback_level.is_finite() {
            return Err(ConfigError::NonFiniteTarget("fallback_level"));
        }
        if self.num_samples > 1 && self.target_start.x == self.target_end.x {
            return Err(ConfigError::DegenerateWindow(self.target_start.x));
        }
        Ok(())
    }

    pub fn assembly(&self) -> AssemblyOptions {
        AssemblyOptions {
            target_start: self.target_start,
            target_end: self.target_end,
            tolerance: self.tolerance,
            quiet: self.quiet,
        }
    }

    pub fn grid(&self) -> SampleGrid {
        SampleGrid::new(self.target_start.x, self.target_end.x, self.num_samples)
    }
}
