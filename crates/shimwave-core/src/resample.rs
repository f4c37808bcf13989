//! Resampling an assembled path onto an equidistant x grid.

use crate::assembler::Path;
use crate::evaluate::{evaluate_at_x, VERTICAL_EPSILON};
use crate::geometry::Segment;

/// Half width given to spans of (near) vertical segments so they can still
/// contain a query.
pub const VERTICAL_HALF_SPAN: f64 = 1e-6;

/// N equidistant x positions from `x_start` to `x_end`, both included.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleGrid {
    pub x_start: f64,
    pub x_end: f64,
    pub count: usize,
}

impl SampleGrid {
    pub fn new(x_start: f64, x_end: f64, count: usize) -> Self {
        Self {
            x_start,
            x_end,
            count,
        }
    }

    pub fn step(&self) -> f64 {
        if self.count > 1 {
            (self.x_end - self.x_start) / (self.count - 1) as f64
        } else {
            0.0
        }
    }

    /// The i-th grid position. The last position is exactly `x_end`.
    pub fn x_at(&self, i: usize) -> f64 {
        if self.count > 1 && i == self.count - 1 {
            self.x_end
        } else {
            self.x_start + self.step() * i as f64
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.count).map(move |i| self.x_at(i))
    }
}

/// X extent of one path segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentSpan<'a> {
    pub min_x: f64,
    pub max_x: f64,
    pub segment: &'a Segment,
}

impl SegmentSpan<'_> {
    pub fn contains(&self, x: f64) -> bool {
        self.min_x <= x && x <= self.max_x
    }

    pub fn midpoint(&self) -> f64 {
        (self.min_x + self.max_x) / 2.0
    }

    /// Segment height at the middle of its span.
    fn midpoint_value(&self) -> (f64, f64) {
        let mid = self.midpoint();
        (mid, evaluate_at_x(mid, self.segment))
    }
}

/// Segment spans sorted by their left edge.
#[derive(Debug, Clone)]
pub struct XRangeIndex<'a> {
    spans: Vec<SegmentSpan<'a>>,
}

impl<'a> XRangeIndex<'a> {
    pub fn build(segments: &'a [Segment]) -> Self {
        let mut spans: Vec<SegmentSpan<'a>> = segments
            .iter()
            .map(|segment| {
                let (start, end) = segment.endpoints();
                let mut min_x = start.x.min(end.x);
                let mut max_x = start.x.max(end.x);
                if max_x - min_x < VERTICAL_EPSILON {
                    let mid = (min_x + max_x) / 2.0;
                    min_x = mid - VERTICAL_HALF_SPAN;
                    max_x = mid + VERTICAL_HALF_SPAN;
                }
                SegmentSpan {
                    min_x,
                    max_x,
                    segment,
                }
            })
            .collect();
        // Stable, so spans starting at the same x keep path order.
        spans.sort_by(|a, b| a.min_x.total_cmp(&b.min_x));
        Self { spans }
    }

    pub fn spans(&self) -> &[SegmentSpan<'a>] {
        &self.spans
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// First span (by left edge) containing `x`.
    pub fn covering(&self, x: f64) -> Option<&SegmentSpan<'a>> {
        self.spans.iter().find(|span| span.contains(x))
    }

    /// Unscaled path height at `x`.
    ///
    /// Inside a span the covering segment is evaluated directly. In a gap the
    /// nearest spans whose midpoints lie left and right of `x` are each
    /// evaluated at their midpoint and linearly interpolated; with only one
    /// side available its value is held. Returns 0 for an empty index.
    pub fn value_at(&self, x: f64) -> f64 {
        if let Some(span) = self.covering(x) {
            return evaluate_at_x(x, span.segment);
        }

        let mut left: Option<&SegmentSpan<'a>> = None;
        let mut right: Option<&SegmentSpan<'a>> = None;
        for span in &self.spans {
            let mid = span.midpoint();
            if mid <= x {
                if left.is_none_or(|l| mid > l.midpoint()) {
                    left = Some(span);
                }
            } else if right.is_none_or(|r| mid < r.midpoint()) {
                right = Some(span);
            }
        }

        match (left, right) {
            (Some(left), Some(right)) => {
                let (left_x, left_y) = left.midpoint_value();
                let (right_x, right_y) = right.midpoint_value();
                let t = if right_x != left_x {
                    (x - left_x) / (right_x - left_x)
                } else {
                    0.0
                };
                left_y + t * (right_y - left_y)
            }
            (Some(only), None) | (None, Some(only)) => only.midpoint_value().1,
            (None, None) => 0.0,
        }
    }
}

/// Unscaled path heights at every grid position.
pub fn sample_path(path: &Path, grid: &SampleGrid) -> Vec<f64> {
    let index = XRangeIndex::build(path.segments());
    grid.iter().map(|x| index.value_at(x)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Line, Point};

    fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> Segment {
        Segment::Line(Line::new(Point::new(x1, y1), Point::new(x2, y2)))
    }

    #[test]
    fn test_grid_positions() {
        let grid = SampleGrid::new(-1.0, 1.0, 5);
        let xs: Vec<f64> = grid.iter().collect();
        assert_eq!(xs, vec![-1.0, -0.5, 0.0, 0.5, 1.0]);

        let single = SampleGrid::new(-1.0, 1.0, 1);
        assert_eq!(single.iter().collect::<Vec<_>>(), vec![-1.0]);
    }

    #[test]
    fn test_vertical_segment_gets_tiny_span() {
        let segments = vec![line(0.5, -1.0, 0.5, 1.0)];
        let index = XRangeIndex::build(&segments);
        let span = index.spans()[0];
        assert!((span.max_x - span.min_x - 2.0 * VERTICAL_HALF_SPAN).abs() < 1e-12);
        assert!(span.contains(0.5));
        assert_eq!(index.value_at(0.5), 0.0);
    }

    #[test]
    fn test_index_sorted_by_left_edge() {
        let segments = vec![line(2.0, 0.0, 3.0, 0.0), line(-1.0, 0.0, 0.0, 0.0)];
        let index = XRangeIndex::build(&segments);
        assert_eq!(index.spans()[0].min_x, -1.0);
        assert_eq!(index.spans()[1].min_x, 2.0);
    }

    #[test]
    fn test_gap_interpolates_midpoint_values() {
        // Left segment is flat at 1, right segment flat at 3. Midpoints are at
        // x = -1.5 and x = 1.5, so x = 0 lands halfway.
        let segments = vec![line(-2.0, 1.0, -1.0, 1.0), line(1.0, 3.0, 2.0, 3.0)];
        let index = XRangeIndex::build(&segments);
        assert!((index.value_at(0.0) - 2.0).abs() < 1e-12);
        assert!((index.value_at(0.75) - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_one_sided_gap_holds_value() {
        let segments = vec![line(-2.0, 4.0, -1.0, 4.0)];
        let index = XRangeIndex::build(&segments);
        assert_eq!(index.value_at(5.0), 4.0);
        assert_eq!(index.value_at(-5.0), 4.0);
    }

    #[test]
    fn test_empty_index_yields_zero() {
        let index = XRangeIndex::build(&[]);
        assert!(index.is_empty());
        assert_eq!(index.value_at(1.0), 0.0);
    }
}
