//! # Shimwave DXF
//!
//! Reads LINE, ARC and ELLIPSE entities from the model space of a DXF
//! drawing and converts them into [`shimwave_core::Segment`]s.
//!
//! Extraction is typed: a file that cannot be opened or parsed is an
//! [`ExtractionError`], while a drawing without usable geometry is an empty
//! [`ExtractedGeometry`]. Callers decide how to fall back.

pub mod error;
pub mod extract;

pub use error::{ExtractionError, ExtractionResult};
pub use extract::{extract_drawing, extract_file, ExtractedGeometry};
