// Property tests for the coil generator.

use coilgen_designer::{generate, CoilParameters, CoilShape, SPIRAL_SUBDIVISIONS};
use proptest::prelude::*;

fn spiral_strategy() -> impl Strategy<Value = CoilParameters> {
    (
        1i32..30,
        0.05f64..5.0,
        0.0f64..2.0,
        0.1f64..5.0,
        0.1f64..50.0,
    )
        .prop_map(|(turns, trace_width, spacing, inner, growth)| CoilParameters {
            turns,
            trace_width,
            spacing,
            inner_diameter: inner,
            outer_diameter: inner + growth,
            shape: CoilShape::Spiral,
            close_path: false,
        })
}

proptest! {
    #[test]
    fn spiral_sample_count_law(params in spiral_strategy()) {
        let coil = generate(&params).unwrap();
        prop_assert_eq!(coil.len(), params.turns as usize * SPIRAL_SUBDIVISIONS);
    }

    #[test]
    fn spiral_radius_is_monotonic_and_finite(params in spiral_strategy()) {
        let coil = generate(&params).unwrap();
        let mut previous = 0.0f64;
        for p in coil.iter() {
            prop_assert!(p.x.is_finite() && p.y.is_finite());
            let r = p.radius();
            prop_assert!(r >= previous - 1e-9);
            previous = r;
        }
    }

    #[test]
    fn spiral_radius_spans_the_diameters(params in spiral_strategy()) {
        let coil = generate(&params).unwrap();
        let first = coil.first().unwrap().radius();
        let last = coil.last().unwrap().radius();
        prop_assert!((first - params.inner_diameter / 2.0).abs() < 1e-6);
        prop_assert!((last - params.outer_diameter / 2.0).abs() < 1e-6);
    }

    #[test]
    fn square_corner_count_and_growth(
        turns in 1i32..30,
        trace_width in 0.05f64..5.0,
        spacing in 0.0f64..2.0,
        close_path in proptest::bool::ANY,
    ) {
        let params = CoilParameters {
            turns,
            trace_width,
            spacing,
            shape: CoilShape::Square,
            close_path,
            ..CoilParameters::default()
        };
        let coil = generate(&params).unwrap();

        let expected = 4 * turns as usize + usize::from(close_path);
        prop_assert_eq!(coil.len(), expected);

        let corners = &coil.points()[..4 * turns as usize];
        let mut previous = 0.0f64;
        for quad in corners.chunks(4) {
            let half = quad[0].x;
            prop_assert!(half > previous);
            previous = half;
        }
    }

    #[test]
    fn generation_is_idempotent(params in spiral_strategy()) {
        let a = generate(&params).unwrap();
        let b = generate(&params).unwrap();
        prop_assert_eq!(a, b);
    }
}
