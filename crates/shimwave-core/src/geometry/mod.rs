//! Segment geometry.
//!
//! A [`Segment`] is a tagged variant over the three supported shapes. Lines
//! carry their orientation in the order of their points; arcs and ellipses
//! carry it in an explicit [`Direction`] so their angles and parameters are
//! never rewritten after extraction.

use serde::{Deserialize, Serialize};

mod arc;
mod ellipse;
mod line;
mod point;

pub use arc::Arc;
pub use ellipse::Ellipse;
pub use line::Line;
pub use point::{Point, Vector};

/// Traversal direction of an arc or ellipse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Start at the start angle/parameter.
    #[default]
    Forward,
    /// Start at the end angle/parameter.
    Reversed,
}

impl Direction {
    pub fn flipped(self) -> Self {
        match self {
            Self::Forward => Self::Reversed,
            Self::Reversed => Self::Forward,
        }
    }

    pub fn is_reversed(self) -> bool {
        self == Self::Reversed
    }

    /// Applies this direction to a naturally ordered endpoint pair.
    pub(crate) fn orient(self, start: Point, end: Point) -> (Point, Point) {
        match self {
            Self::Forward => (start, end),
            Self::Reversed => (end, start),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    Line,
    Arc,
    Ellipse,
}

impl std::fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Line => write!(f, "line"),
            Self::Arc => write!(f, "arc"),
            Self::Ellipse => write!(f, "ellipse"),
        }
    }
}

/// One fragment of a path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Segment {
    Line(Line),
    Arc(Arc),
    Ellipse(Ellipse),
}

impl Segment {
    pub fn kind(&self) -> SegmentKind {
        match self {
            Self::Line(_) => SegmentKind::Line,
            Self::Arc(_) => SegmentKind::Arc,
            Self::Ellipse(_) => SegmentKind::Ellipse,
        }
    }

    /// Start and end point in traversal order.
    pub fn endpoints(&self) -> (Point, Point) {
        match self {
            Self::Line(line) => (line.start, line.end),
            Self::Arc(arc) => arc.endpoints(),
            Self::Ellipse(ellipse) => ellipse.endpoints(),
        }
    }

    pub fn start(&self) -> Point {
        self.endpoints().0
    }

    pub fn end(&self) -> Point {
        self.endpoints().1
    }

    /// Returns the segment traversed in the opposite direction.
    ///
    /// Lines swap their points. Arcs and ellipses only flip their
    /// [`Direction`]; the stored angles and parameters are untouched.
    pub fn reversed(&self) -> Self {
        match self {
            Self::Line(line) => Self::Line(line.reversed()),
            Self::Arc(arc) => Self::Arc(Arc {
                direction: arc.direction.flipped(),
                ..*arc
            }),
            Self::Ellipse(ellipse) => Self::Ellipse(Ellipse {
                direction: ellipse.direction.flipped(),
                ..*ellipse
            }),
        }
    }

    /// Orients the segment so that it runs left to right.
    pub fn normalize_orientation(&self) -> Self {
        let (start, end) = self.endpoints();
        if start.x > end.x {
            self.reversed()
        } else {
            self.clone()
        }
    }

    /// Whether an arc or ellipse is traversed against its stored direction.
    /// Lines are never reported as reversed.
    pub fn is_reversed(&self) -> bool {
        match self {
            Self::Line(_) => false,
            Self::Arc(arc) => arc.direction.is_reversed(),
            Self::Ellipse(ellipse) => ellipse.direction.is_reversed(),
        }
    }

    /// Checks the raw geometry without modifying it.
    pub fn validate(&self) -> Result<(), crate::GeometryError> {
        match self {
            Self::Line(line) => line.validate(),
            Self::Arc(arc) => arc.validate(),
            Self::Ellipse(ellipse) => ellipse.validate(),
        }
    }
}

impl From<Line> for Segment {
    fn from(line: Line) -> Self {
        Self::Line(line)
    }
}

impl From<Arc> for Segment {
    fn from(arc: Arc) -> Self {
        Self::Arc(arc)
    }
}

impl From<Ellipse> for Segment {
    fn from(ellipse: Ellipse) -> Self {
        Self::Ellipse(ellipse)
    }
}
