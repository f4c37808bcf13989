//! End-to-end conversion: segments in, waveform out.

use tracing::debug;

use crate::assembler::{GreedyAssembler, Path, PathAssembler};
use crate::error::WaveformResult;
use crate::geometry::Segment;
use crate::options::ConversionOptions;
use crate::resample::sample_path;
use crate::waveform::Waveform;

/// Result of one conversion.
#[derive(Debug, Clone)]
pub struct Conversion {
    pub waveform: Waveform,
    /// The assembled path; empty when the flat fallback was used.
    pub path: Path,
}

impl Conversion {
    /// Whether the waveform is the flat fallback rather than a sampled path.
    pub fn is_fallback(&self) -> bool {
        self.path.is_empty()
    }
}

/// Converts `segments` with the greedy assembler.
pub fn convert(segments: Vec<Segment>, options: &ConversionOptions) -> WaveformResult<Conversion> {
    convert_with(&GreedyAssembler, segments, options)
}

/// Converts `segments` with a caller-chosen assembler.
///
/// Fails only when `options` are invalid. Empty input, or an assembler that
/// produces an empty path, yields a flat waveform at
/// `fallback_level * y_scale`.
pub fn convert_with<A: PathAssembler + ?Sized>(
    assembler: &A,
    segments: Vec<Segment>,
    options: &ConversionOptions,
) -> WaveformResult<Conversion> {
    options.validate()?;

    let flat = || Conversion {
        waveform: Waveform::flat(options.num_samples, options.fallback_level, options.y_scale),
        path: Path::default(),
    };

    if segments.is_empty() {
        debug!("No segments, using flat waveform");
        return Ok(flat());
    }

    let path = assembler.assemble(segments, &options.assembly());
    if path.is_empty() {
        debug!("Assembler produced an empty path, using flat waveform");
        return Ok(flat());
    }

    let samples = sample_path(&path, &options.grid());
    let waveform = Waveform::scaled(samples, options.y_scale);
    debug!(
        "Sampled {} points from {} path segments",
        waveform.len(),
        path.len()
    );

    Ok(Conversion { waveform, path })
}
