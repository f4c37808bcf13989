//! Path assembly.
//!
//! Stitches an unordered set of segments into one oriented path running from
//! a target start point to a target end point. Assembly is best effort: gaps
//! larger than the tolerance are reported but never abort the path.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::geometry::{Line, Point, Segment};

/// Inputs to a [`PathAssembler`] besides the segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AssemblyOptions {
    pub target_start: Point,
    pub target_end: Point,
    pub tolerance: f64,
    pub quiet: bool,
}

/// A connection made across more than the tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConnectionGap {
    /// Index in the path of the segment appended across the gap.
    pub segment_index: usize,
    pub distance: f64,
}

/// Ordered, oriented sequence of segments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    segments: Vec<Segment>,
    gaps: Vec<ConnectionGap>,
    closing_gap: Option<f64>,
}

impl Path {
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn into_segments(self) -> Vec<Segment> {
        self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Connections between input segments that exceeded the tolerance.
    pub fn gaps(&self) -> &[ConnectionGap] {
        &self.gaps
    }

    /// Distance bridged by the synthetic closing line, if one was appended.
    pub fn closing_gap(&self) -> Option<f64> {
        self.closing_gap
    }

    pub fn has_closing_segment(&self) -> bool {
        self.closing_gap.is_some()
    }

    /// Largest endpoint mismatch between consecutive segments.
    pub fn max_joint_error(&self) -> f64 {
        self.segments
            .windows(2)
            .map(|pair| pair[0].end().distance_to(&pair[1].start()))
            .fold(0.0, f64::max)
    }
}

/// Strategy that orders and orients segments into a [`Path`].
pub trait PathAssembler {
    fn assemble(&self, segments: Vec<Segment>, options: &AssemblyOptions) -> Path;
}

/// Greedy nearest-endpoint stitching.
///
/// Starts from the segment end closest to the target start, then repeatedly
/// appends the unused segment whose start (in either orientation) is closest
/// to the current end. Each step rescans the remaining segments, which is
/// fine for the handful of entities a coil drawing contains.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyAssembler;

/// Best candidate found by a nearest-endpoint scan.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    index: usize,
    flip: bool,
    distance: f64,
}

impl GreedyAssembler {
    pub fn new() -> Self {
        Self
    }

    /// Finds the unused segment whose start, in either orientation, lies
    /// closest to `from`. Ties keep the earliest segment and prefer the
    /// orientation it already has.
    fn nearest(from: Point, segments: &[Segment], used: &[bool]) -> Option<Candidate> {
        let mut best: Option<Candidate> = None;

        for (index, segment) in segments.iter().enumerate() {
            if used[index] {
                continue;
            }
            let (start, end) = segment.endpoints();
            for (flip, point) in [(false, start), (true, end)] {
                let distance = from.distance_to(&point);
                if best.is_none_or(|b| distance < b.distance) {
                    best = Some(Candidate {
                        index,
                        flip,
                        distance,
                    });
                }
            }
        }

        best
    }

    fn oriented(segment: &Segment, flip: bool) -> Segment {
        if flip {
            segment.reversed()
        } else {
            segment.clone()
        }
    }
}

impl PathAssembler for GreedyAssembler {
    fn assemble(&self, segments: Vec<Segment>, options: &AssemblyOptions) -> Path {
        let available: Vec<Segment> = segments
            .iter()
            .map(Segment::normalize_orientation)
            .collect();

        let mut path = Path {
            segments: Vec::with_capacity(available.len() + 1),
            ..Path::default()
        };
        let mut used = vec![false; available.len()];

        let Some(first) = Self::nearest(options.target_start, &available, &used) else {
            return path;
        };
        debug!(
            "Starting path with {} segment {} ({:.3} from target start)",
            available[first.index].kind(),
            first.index,
            first.distance
        );
        used[first.index] = true;
        path.segments
            .push(Self::oriented(&available[first.index], first.flip));
        let mut current_end = path.segments[0].end();

        while let Some(next) = Self::nearest(current_end, &available, &used) {
            if next.distance > options.tolerance {
                if !options.quiet {
                    warn!("Gap ({:.3}) between segments", next.distance);
                }
                path.gaps.push(ConnectionGap {
                    segment_index: path.segments.len(),
                    distance: next.distance,
                });
            }

            used[next.index] = true;
            let segment = Self::oriented(&available[next.index], next.flip);
            current_end = segment.end();
            path.segments.push(segment);
        }

        let final_distance = current_end.distance_to(&options.target_end);
        if final_distance > options.tolerance {
            if !options.quiet {
                warn!(
                    "Adding closing segment: gap of {:.3} to target end",
                    final_distance
                );
            }
            path.segments
                .push(Segment::Line(Line::new(current_end, options.target_end)));
            path.closing_gap = Some(final_distance);
        }

        debug!(
            "Assembled path of {} segments with {} gaps",
            path.segments.len(),
            path.gaps.len()
        );
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Arc;
    use std::f64::consts::PI;

    fn options() -> AssemblyOptions {
        AssemblyOptions {
            target_start: Point::new(-2.0, 0.0),
            target_end: Point::new(2.0, 0.0),
            tolerance: 0.05,
            quiet: true,
        }
    }

    fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> Segment {
        Segment::Line(Line::new(Point::new(x1, y1), Point::new(x2, y2)))
    }

    #[test]
    fn test_empty_input_gives_empty_path() {
        let path = GreedyAssembler.assemble(Vec::new(), &options());
        assert!(path.is_empty());
        assert!(!path.has_closing_segment());
    }

    #[test]
    fn test_orders_shuffled_lines() {
        let segments = vec![
            line(1.0, 1.0, 2.0, 0.0),
            line(-2.0, 0.0, -1.0, 1.0),
            line(1.0, 1.0, -1.0, 1.0),
        ];
        let path = GreedyAssembler.assemble(segments, &options());

        assert_eq!(path.len(), 3);
        assert_eq!(path.segments()[0].start(), Point::new(-2.0, 0.0));
        assert_eq!(path.segments()[1].start(), Point::new(-1.0, 1.0));
        assert_eq!(path.segments()[2].end(), Point::new(2.0, 0.0));
        assert!(path.gaps().is_empty());
        assert_eq!(path.max_joint_error(), 0.0);
    }

    #[test]
    fn test_closing_segment_appended_past_tolerance() {
        let path = GreedyAssembler.assemble(vec![line(-2.0, 0.0, 1.0, 0.0)], &options());
        assert_eq!(path.len(), 2);
        assert_eq!(path.closing_gap(), Some(1.0));
        assert_eq!(path.segments()[1].start(), Point::new(1.0, 0.0));
        assert_eq!(path.segments()[1].end(), Point::new(2.0, 0.0));
    }

    #[test]
    fn test_no_closing_segment_within_tolerance() {
        let path = GreedyAssembler.assemble(vec![line(-2.0, 0.0, 1.98, 0.0)], &options());
        assert_eq!(path.len(), 1);
        assert!(!path.has_closing_segment());
    }

    #[test]
    fn test_gap_is_recorded_and_bridged() {
        let segments = vec![line(-2.0, 0.0, -1.0, 0.0), line(1.0, 0.0, 2.0, 0.0)];
        let path = GreedyAssembler.assemble(segments, &options());
        assert_eq!(path.len(), 2);
        assert_eq!(path.gaps().len(), 1);
        assert_eq!(path.gaps()[0].segment_index, 1);
        assert!((path.gaps()[0].distance - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_arc_is_flipped_to_continue_path() {
        // Lower half circle from (-1,0) around to (1,0); the left line ends
        // at (-1,0) so the arc has to start there.
        let arc = Segment::Arc(Arc::new(Point::new(0.0, 0.0), 1.0, PI, 2.0 * PI));
        let segments = vec![line(-2.0, 0.0, -1.0, 0.0), arc, line(1.0, 0.0, 2.0, 0.0)];
        let path = GreedyAssembler.assemble(segments, &options());

        assert_eq!(path.len(), 3);
        let Segment::Arc(placed) = &path.segments()[1] else {
            panic!("expected the arc in the middle");
        };
        assert_eq!(placed.start_angle, PI);
        assert_eq!(placed.end_angle, 2.0 * PI);
        assert!(path.segments()[1].start().distance_to(&Point::new(-1.0, 0.0)) < 1e-9);
        assert!(path.max_joint_error() < 1e-9);
    }
}
