use serde::{Deserialize, Serialize};

use super::{Direction, Point, Vector};
use crate::GeometryError;

/// Elliptical arc in DXF form.
///
/// `major_axis` points from the center to the end of the major axis; its
/// length is the semi-major length and its angle is the ellipse rotation.
/// The curve is `center + R(rotation) * (a cos t, b sin t)` for `t` from
/// `start_param` to `end_param`, with `b = a * ratio`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ellipse {
    pub center: Point,
    pub major_axis: Vector,
    pub ratio: f64,
    pub start_param: f64,
    pub end_param: f64,
    #[serde(default)]
    pub direction: Direction,
}

impl Ellipse {
    pub fn new(
        center: Point,
        major_axis: Vector,
        ratio: f64,
        start_param: f64,
        end_param: f64,
    ) -> Self {
        Self {
            center,
            major_axis,
            ratio,
            start_param,
            end_param,
            direction: Direction::Forward,
        }
    }

    /// Like [`Ellipse::new`], but rejects geometry that cannot describe an
    /// ellipse.
    pub fn try_new(
        center: Point,
        major_axis: Vector,
        ratio: f64,
        start_param: f64,
        end_param: f64,
    ) -> Result<Self, GeometryError> {
        let ellipse = Self::new(center, major_axis, ratio, start_param, end_param);
        ellipse.validate()?;
        Ok(ellipse)
    }

    pub fn semi_major(&self) -> f64 {
        self.major_axis.length()
    }

    pub fn semi_minor(&self) -> f64 {
        self.semi_major() * self.ratio
    }

    pub fn rotation(&self) -> f64 {
        self.major_axis.angle()
    }

    pub fn point_at_param(&self, t: f64) -> Point {
        let (sin_rot, cos_rot) = self.rotation().sin_cos();
        self.point_at_param_rotated(t, cos_rot, sin_rot)
    }

    /// Same as [`Ellipse::point_at_param`] with the rotation precomputed,
    /// for tight sampling loops.
    pub(crate) fn point_at_param_rotated(&self, t: f64, cos_rot: f64, sin_rot: f64) -> Point {
        let x_local = self.semi_major() * t.cos();
        let y_local = self.semi_minor() * t.sin();
        Point::new(
            x_local * cos_rot - y_local * sin_rot + self.center.x,
            x_local * sin_rot + y_local * cos_rot + self.center.y,
        )
    }

    /// Endpoints at the stored parameters, ignoring direction.
    pub fn natural_endpoints(&self) -> (Point, Point) {
        (
            self.point_at_param(self.start_param),
            self.point_at_param(self.end_param),
        )
    }

    pub fn endpoints(&self) -> (Point, Point) {
        let (start, end) = self.natural_endpoints();
        self.direction.orient(start, end)
    }

    pub fn validate(&self) -> Result<(), GeometryError> {
        if !self.center.is_finite() {
            return Err(GeometryError::NonFinite("center"));
        }
        if !self.major_axis.is_finite() {
            return Err(GeometryError::NonFinite("major_axis"));
        }
        if !self.start_param.is_finite() {
            return Err(GeometryError::NonFinite("start_param"));
        }
        if !self.end_param.is_finite() {
            return Err(GeometryError::NonFinite("end_param"));
        }
        if self.semi_major() == 0.0 {
            return Err(GeometryError::DegenerateMajorAxis);
        }
        if !(self.ratio > 0.0 && self.ratio <= 1.0) {
            return Err(GeometryError::InvalidRatio(self.ratio));
        }
        Ok(())
    }
}
