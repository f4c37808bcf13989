//! Model-space entity extraction.

use std::fs::File;
use std::path::Path;

use dxf::entities::{Entity, EntityType};
use dxf::Drawing;
use shimwave_core::{Arc, Ellipse, Line, Point, Segment, Vector};
use tracing::{debug, warn};

use crate::error::{ExtractionError, ExtractionResult};

/// Curve entities found in one drawing, grouped by type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractedGeometry {
    pub lines: Vec<Line>,
    /// Angles already converted to radians.
    pub arcs: Vec<Arc>,
    pub ellipses: Vec<Ellipse>,
    /// Model-space entities of any other type.
    pub ignored: usize,
}

impl ExtractedGeometry {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.arcs.is_empty() && self.ellipses.is_empty()
    }

    pub fn segment_count(&self) -> usize {
        self.lines.len() + self.arcs.len() + self.ellipses.len()
    }

    /// All segments: lines first, then arcs, then ellipses.
    pub fn into_segments(self) -> Vec<Segment> {
        let mut segments = Vec::with_capacity(self.segment_count());
        segments.extend(self.lines.into_iter().map(Segment::Line));
        segments.extend(self.arcs.into_iter().map(Segment::Arc));
        segments.extend(self.ellipses.into_iter().map(Segment::Ellipse));
        segments
    }

    fn push_entity(&mut self, entity: &Entity) {
        match &entity.specific {
            EntityType::Line(line) => {
                let line = Line::new(
                    Point::new(line.p1.x, line.p1.y),
                    Point::new(line.p2.x, line.p2.y),
                );
                if let Err(e) = line.validate() {
                    warn!("Keeping malformed LINE {}: {}", self.lines.len(), e);
                }
                self.lines.push(line);
            }
            EntityType::Arc(arc) => {
                let arc = Arc::new(
                    Point::new(arc.center.x, arc.center.y),
                    arc.radius,
                    arc.start_angle.to_radians(),
                    arc.end_angle.to_radians(),
                );
                if let Err(e) = arc.validate() {
                    warn!("Keeping malformed ARC {}: {}", self.arcs.len(), e);
                }
                self.arcs.push(arc);
            }
            EntityType::Ellipse(ellipse) => {
                let ellipse = Ellipse::new(
                    Point::new(ellipse.center.x, ellipse.center.y),
                    Vector::new(ellipse.major_axis.x, ellipse.major_axis.y),
                    ellipse.minor_axis_ratio,
                    ellipse.start_parameter,
                    ellipse.end_parameter,
                );
                if let Err(e) = ellipse.validate() {
                    warn!("Keeping malformed ELLIPSE {}: {}", self.ellipses.len(), e);
                }
                self.ellipses.push(ellipse);
            }
            _ => self.ignored += 1,
        }
    }
}

/// Collects model-space lines, arcs and ellipses from `drawing`.
pub fn extract_drawing(drawing: &Drawing) -> ExtractedGeometry {
    let mut geometry = ExtractedGeometry::default();
    let mut paper_space = 0usize;

    for entity in drawing.entities() {
        if entity.common.is_in_paper_space {
            paper_space += 1;
            continue;
        }
        geometry.push_entity(entity);
    }

    debug!(
        "Extracted {} lines, {} arcs, {} ellipses ({} ignored, {} in paper space)",
        geometry.lines.len(),
        geometry.arcs.len(),
        geometry.ellipses.len(),
        geometry.ignored,
        paper_space
    );
    geometry
}

/// Opens and parses the DXF file at `path`, then extracts its geometry.
pub fn extract_file(path: impl AsRef<Path>) -> ExtractionResult<ExtractedGeometry> {
    let path = path.as_ref();
    let mut file = File::open(path).map_err(|source| ExtractionError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let drawing = Drawing::load(&mut file).map_err(|e| ExtractionError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    Ok(extract_drawing(&drawing))
}
