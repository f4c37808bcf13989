//! # Shimwave Core
//!
//! Turns an unordered set of 2D curve fragments into a uniformly sampled
//! waveform.
//!
//! ## Pipeline
//!
//! ```text
//! Segments (lines, arcs, ellipses)
//!   └── Assembler (greedy nearest-endpoint stitching)
//!         └── Path (ordered, oriented, optional closing line)
//!               └── Resampler (x-range index + gap interpolation)
//!                     └── Waveform (scaled samples)
//! ```
//!
//! Every stage is a pure function of its inputs. Data-quality problems
//! (gaps, degenerate geometry, empty input) degrade to defined fallbacks;
//! only invalid options are reported as errors.
//!
//! ## Usage
//!
//! ```rust
//! use shimwave_core::{convert, ConversionOptions, Line, Point, Segment};
//!
//! let options = ConversionOptions {
//!     num_samples: 5,
//!     ..ConversionOptions::default()
//! };
//! let segments = vec![Segment::Line(Line::new(
//!     Point::new(-7.413, 0.0),
//!     Point::new(7.413, 1.0),
//! ))];
//!
//! let conversion = convert(segments, &options)?;
//! assert_eq!(conversion.waveform.len(), 5);
//! # Ok::<(), shimwave_core::WaveformError>(())
//! ```

pub mod assembler;
pub mod convert;
pub mod error;
pub mod evaluate;
pub mod geometry;
pub mod options;
pub mod resample;
pub mod waveform;

pub use assembler::{ConnectionGap, GreedyAssembler, Path, PathAssembler};
pub use convert::{convert, convert_with, Conversion};
pub use error::{ConfigError, GeometryError, WaveformError, WaveformResult};
pub use evaluate::evaluate_at_x;
pub use geometry::{Arc, Direction, Ellipse, Line, Point, Segment, SegmentKind, Vector};
pub use options::ConversionOptions;
pub use resample::{sample_path, SampleGrid, SegmentSpan, XRangeIndex};
pub use waveform::Waveform;
