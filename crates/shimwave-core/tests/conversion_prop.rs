use std::f64::consts::TAU;

use proptest::prelude::*;
use shimwave_core::{
    convert, Arc, ConversionOptions, Ellipse, GreedyAssembler, Line, PathAssembler, Point,
    Segment, SegmentKind, Vector,
};

fn point() -> impl Strategy<Value = Point> {
    (-10.0f64..10.0, -5.0f64..5.0).prop_map(|(x, y)| Point::new(x, y))
}

fn segment() -> impl Strategy<Value = Segment> {
    prop_oneof![
        (point(), point()).prop_map(|(a, b)| Segment::Line(Line::new(a, b))),
        (point(), 0.1f64..5.0, 0.0f64..TAU, 0.0f64..TAU)
            .prop_map(|(c, r, s, e)| Segment::Arc(Arc::new(c, r, s, e))),
        (point(), 0.1f64..4.0, 0.0f64..TAU, 0.05f64..1.0, 0.0f64..TAU, 0.0f64..TAU).prop_map(
            |(c, len, angle, ratio, s, e)| {
                let axis = Vector::new(len * angle.cos(), len * angle.sin());
                Segment::Ellipse(Ellipse::new(c, axis, ratio, s, e))
            }
        ),
    ]
}

fn kind_counts(segments: &[Segment]) -> [usize; 3] {
    let mut counts = [0; 3];
    for segment in segments {
        let slot = match segment.kind() {
            SegmentKind::Line => 0,
            SegmentKind::Arc => 1,
            SegmentKind::Ellipse => 2,
        };
        counts[slot] += 1;
    }
    counts
}

proptest! {
    #[test]
    fn waveform_length_matches_requested_samples(
        segments in prop::collection::vec(segment(), 0..12),
        num_samples in 1usize..400,
    ) {
        let options = ConversionOptions {
            num_samples,
            quiet: true,
            ..ConversionOptions::default()
        };
        let conversion = convert(segments, &options).unwrap();
        prop_assert_eq!(conversion.waveform.len(), num_samples);
        prop_assert!(conversion.waveform.samples().iter().all(|y| y.is_finite()));
    }

    #[test]
    fn every_segment_is_used_exactly_once(
        segments in prop::collection::vec(segment(), 1..12),
    ) {
        let options = ConversionOptions {
            quiet: true,
            ..ConversionOptions::default()
        };
        let expected = kind_counts(&segments);
        let path = GreedyAssembler.assemble(segments.clone(), &options.assembly());

        let closing = usize::from(path.has_closing_segment());
        prop_assert_eq!(path.len(), segments.len() + closing);

        let mut got = kind_counts(path.segments());
        got[0] -= closing;
        prop_assert_eq!(got, expected);

        if let Some(last) = path.segments().last() {
            if path.has_closing_segment() {
                prop_assert_eq!(last.end(), options.target_end);
            }
        }
    }
}
