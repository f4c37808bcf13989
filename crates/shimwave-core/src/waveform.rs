//! Scaled waveform output.

use serde::{Deserialize, Serialize};

/// Ordered, scaled samples of one conversion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Waveform {
    samples: Vec<f64>,
}

impl Waveform {
    pub fn new(samples: Vec<f64>) -> Self {
        Self { samples }
    }

    /// Unscaled samples multiplied by `scale`.
    pub fn scaled(samples: impl IntoIterator<Item = f64>, scale: f64) -> Self {
        Self {
            samples: samples.into_iter().map(|y| y * scale).collect(),
        }
    }

    /// `count` copies of `level * scale`.
    pub fn flat(count: usize, level: f64, scale: f64) -> Self {
        Self {
            samples: vec![level * scale; count],
        }
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn into_samples(self) -> Vec<f64> {
        self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn min(&self) -> Option<f64> {
        self.samples.iter().copied().reduce(f64::min)
    }

    pub fn max(&self) -> Option<f64> {
        self.samples.iter().copied().reduce(f64::max)
    }

    /// First `n` samples (fewer if the waveform is shorter).
    pub fn head(&self, n: usize) -> &[f64] {
        &self.samples[..n.min(self.samples.len())]
    }

    /// Last `n` samples (fewer if the waveform is shorter).
    pub fn tail(&self, n: usize) -> &[f64] {
        &self.samples[self.samples.len().saturating_sub(n)..]
    }
}

impl From<Vec<f64>> for Waveform {
    fn from(samples: Vec<f64>) -> Self {
        Self::new(samples)
    }
}
