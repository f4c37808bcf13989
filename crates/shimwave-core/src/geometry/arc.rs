use serde::{Deserialize, Serialize};

use super::{Direction, Point};
use crate::GeometryError;

/// Circular arc, drawn counter-clockwise from `start_angle` to `end_angle`
/// (radians).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arc {
    pub center: Point,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    #[serde(default)]
    pub direction: Direction,
}

impl Arc {
    pub fn new(center: Point, radius: f64, start_angle: f64, end_angle: f64) -> Self {
        Self {
            center,
            radius,
            start_angle,
            end_angle,
            direction: Direction::Forward,
        }
    }

    /// Like [`Arc::new`], but rejects geometry that cannot describe an arc.
    pub fn try_new(
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    ) -> Result<Self, GeometryError> {
        let arc = Self::new(center, radius, start_angle, end_angle);
        arc.validate()?;
        Ok(arc)
    }

    pub fn point_at_angle(&self, angle: f64) -> Point {
        Point::new(
            self.center.x + self.radius * angle.cos(),
            self.center.y + self.radius * angle.sin(),
        )
    }

    /// Endpoints at the stored start and end angle, ignoring direction.
    pub fn natural_endpoints(&self) -> (Point, Point) {
        (
            self.point_at_angle(self.start_angle),
            self.point_at_angle(self.end_angle),
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
        if !self.radius.is_finite() {
            return Err(GeometryError::NonFinite("radius"));
        }
        if !self.start_angle.is_finite() {
            return Err(GeometryError::NonFinite("start_angle"));
        }
        if !self.end_angle.is_finite() {
            return Err(GeometryError::NonFinite("end_angle"));
        }
        if self.radius <= 0.0 {
            return Err(GeometryError::InvalidRadius(self.radius));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_try_new_rejects_bad_radius() {
        let err = Arc::try_new(Point::new(0.0, 0.0), 0.0, 0.0, 1.0).unwrap_err();
        assert_eq!(err, GeometryError::InvalidRadius(0.0));

        let err = Arc::try_new(Point::new(0.0, 0.0), 1.0, f64::NAN, 1.0).unwrap_err();
        assert_eq!(err, GeometryError::NonFinite("start_angle"));
    }

    #[test]
    fn test_reversed_endpoints_swap() {
        let mut arc = Arc::new(Point::new(1.0, 1.0), 2.0, 0.0, FRAC_PI_2);
        let (s, e) = arc.endpoints();
        assert!(s.distance_to(&Point::new(3.0, 1.0)) < 1e-12);
        assert!(e.distance_to(&Point::new(1.0, 3.0)) < 1e-12);

        arc.direction = Direction::Reversed;
        assert_eq!(arc.endpoints(), (e, s));
    }
}
