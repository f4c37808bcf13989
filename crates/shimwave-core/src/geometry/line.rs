use serde::{Deserialize, Serialize};

use super::Point;
use crate::GeometryError;

/// Straight segment. Orientation is the order of the two points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub start: Point,
    pub end: Point,
}

impl Line {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn reversed(&self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }

    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }

    pub fn validate(&self) -> Result<(), GeometryError> {
        if !self.start.is_finite() {
            return Err(GeometryError::NonFinite("start"));
        }
        if !self.end.is_finite() {
            return Err(GeometryError::NonFinite("end"));
        }
        Ok(())
    }
}
