//! Height of a segment at a given x.
//!
//! All evaluators are pure and total: geometry that cannot be evaluated at
//! the requested x falls back to a defined value instead of failing.

use std::f64::consts::TAU;

use crate::geometry::{Arc, Ellipse, Line, Point, Segment};

/// Below this x extent a line is treated as vertical.
pub const VERTICAL_EPSILON: f64 = 1e-10;

/// Parameter samples used to approximate an ellipse as a function of x.
pub const ELLIPSE_RESOLUTION: usize = 1000;

/// Evaluates `segment` at `x`.
pub fn evaluate_at_x(x: f64, segment: &Segment) -> f64 {
    match segment {
        Segment::Line(line) => line_y_at(x, line),
        Segment::Arc(arc) => arc_y_at(x, arc),
        Segment::Ellipse(ellipse) => ellipse_y_at(x, ellipse),
    }
}

/// Linear interpolation through both endpoints; vertical lines give their
/// midpoint height.
pub fn line_y_at(x: f64, line: &Line) -> f64 {
    let Point { x: x1, y: y1 } = line.start;
    let Point { x: x2, y: y2 } = line.end;

    if (x2 - x1).abs() < VERTICAL_EPSILON {
        return (y1 + y2) / 2.0;
    }

    let t = (x - x1) / (x2 - x1);
    y1 + t * (y2 - y1)
}

/// Picks the circle root at `x` that lies on the drawn arc.
///
/// A vertical line through the circle meets it twice. The root whose angle
/// falls inside the arc's angular window wins; when neither or both do, the
/// root nearer the arc's angular midpoint height is used. Outside the circle
/// the center height is returned.
pub fn arc_y_at(x: f64, arc: &Arc) -> f64 {
    let cx = arc.center.x;
    let cy = arc.center.y;
    let dx = x - cx;

    if arc.radius.is_nan() || arc.radius <= 0.0 {
        return cy;
    }

    let discriminant = arc.radius * arc.radius - dx * dx;
    if discriminant.is_nan() || discriminant < 0.0 {
        return cy;
    }

    let offset = discriminant.sqrt();
    let y_upper = cy + offset;
    let y_lower = cy - offset;

    let start = arc.start_angle.rem_euclid(TAU);
    let mut end = arc.end_angle.rem_euclid(TAU);
    if start > end {
        end += TAU;
    }

    let in_window = |angle: f64| {
        let mut angle = angle.rem_euclid(TAU);
        if angle < start {
            angle += TAU;
        }
        start <= angle && angle <= end
    };

    let upper_on_arc = in_window(offset.atan2(dx));
    let lower_on_arc = in_window((-offset).atan2(dx));

    match (upper_on_arc, lower_on_arc) {
        (true, false) => y_upper,
        (false, true) => y_lower,
        _ => {
            let mid_y = cy + arc.radius * ((start + end) / 2.0).sin();
            if (y_upper - mid_y).abs() <= (y_lower - mid_y).abs() {
                y_upper
            } else {
                y_lower
            }
        }
    }
}

/// Approximates the ellipse as y(x) by dense parameter sampling.
///
/// The parameter range is sampled at [`ELLIPSE_RESOLUTION`] points, sorted
/// by x and linearly interpolated. Queries outside the sampled x range clamp
/// to the nearest end sample.
pub fn ellipse_y_at(x: f64, ellipse: &Ellipse) -> f64 {
    let samples = sample_ellipse(ellipse, ELLIPSE_RESOLUTION);
    interpolate_sorted(x, &samples).unwrap_or(ellipse.center.y)
}

fn sample_ellipse(ellipse: &Ellipse, count: usize) -> Vec<Point> {
    let start = ellipse.start_param;
    let mut end = ellipse.end_param;
    if end < start {
        end += TAU;
    }

    let (sin_rot, cos_rot) = ellipse.rotation().sin_cos();
    let step = if count > 1 {
        (end - start) / (count - 1) as f64
    } else {
        0.0
    };

    let mut points: Vec<Point> = (0..count)
        .map(|i| ellipse.point_at_param_rotated(start + step * i as f64, cos_rot, sin_rot))
        .filter(Point::is_finite)
        .collect();
    points.sort_by(|a, b| a.x.total_cmp(&b.x));
    points
}

/// Linear interpolation over points sorted by x, clamped at both ends.
fn interpolate_sorted(x: f64, points: &[Point]) -> Option<f64> {
    let first = points.first()?;
    let last = points.last()?;

    if x <= first.x {
        return Some(first.y);
    }
    if x >= last.x {
        return Some(last.y);
    }

    // First sample strictly right of x; x > first.x guarantees idx >= 1.
    let idx = points.partition_point(|p| p.x <= x);
    let left = points[idx - 1];
    let right = points[idx];
    let span = right.x - left.x;
    if span <= 0.0 {
        return Some(left.y);
    }
    Some(left.y + (x - left.x) / span * (right.y - left.y))
}
