//! Known ball configurations with hand-checked complexes.
//!
//! Every configuration is run through both construction strategies; the
//! expected f-vectors and simplices below were derived by hand.

use approx::assert_relative_eq;
use gcech::prelude::*;

fn init_tracing() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

fn build(
    positions: &[[f64; 2]],
    radii: &[f64],
    strategy: StrategyKind,
    max_dimension: Option<usize>,
) -> CechComplex<f64> {
    init_tracing();
    let options = ConstructionOptions::new()
        .with_strategy(strategy)
        .with_max_dimension(max_dimension);
    construct_with_options(positions, radii, options)
        .unwrap_or_else(|err| panic!("{strategy} construction failed: {err}"))
}

/// Generates one test per strategy for a configuration and its expected f-vector.
macro_rules! test_known_config {
    ($name:ident, $positions:expr, $radii:expr, $max_dim:expr, $f_vector:expr $(, |$c:ident| $extra:block)?) => {
        pastey::paste! {
            #[test]
            fn [<test_ $name _baseline>]() {
                let complex = build(&$positions, &$radii, StrategyKind::Baseline, $max_dim);
                assert_eq!(complex.f_vector(), $f_vector);
                assert!(complex.is_closed_under_faces());
                $( let $c = &complex; $extra )?
            }

            #[test]
            fn [<test_ $name _witness_caching>]() {
                let complex = build(&$positions, &$radii, StrategyKind::WitnessCaching, $max_dim);
                assert_eq!(complex.f_vector(), $f_vector);
                assert!(complex.is_closed_under_faces());
                $( let $c = &complex; $extra )?
            }
        }
    };
}

// =============================================================================
// DEGENERATE INPUTS
// =============================================================================

test_known_config!(no_balls, ([] as [[f64; 2]; 0]), ([] as [f64; 0]), None, Vec::<usize>::new(), |c| {
    assert_eq!(c.number_of_simplices(), 0);
    assert_eq!(c.dimension(), None);
});

test_known_config!(single_ball, [[3.0, -1.0]], [0.0], None, vec![1], |c| {
    assert_eq!(c.levels()[0].simplices(), &[Simplex::vertex(0)]);
    assert!(c.level(1).is_some_and(Level::is_empty));
});

test_known_config!(
    pairwise_disjoint,
    [[0.0, 0.0], [5.0, 0.0], [0.0, 5.0], [5.0, 5.0]],
    [1.0, 1.0, 1.0, 1.0],
    None,
    vec![4],
    |c| {
        assert_eq!(c.level(1).map(Level::len), Some(0));
        assert_eq!(c.euler_characteristic(), 4);
    }
);

// =============================================================================
// SCENARIOS
// =============================================================================

// Equilateral triangle of side 1.8: circumradius 1.8/√3 > 1, so no common point.
test_known_config!(
    equilateral_hole,
    [[0.0, 0.0], [1.8, 0.0], [0.9, 1.8 * 3.0_f64.sqrt() / 2.0]],
    [1.0, 1.0, 1.0],
    None,
    vec![3, 3],
    |c| {
        assert!(!c.contains(&Simplex::new([0, 1, 2])));
        assert_eq!(c.euler_characteristic(), 0);
        assert_eq!(c.stop_reason(), StopReason::EmptyLevel);
    }
);

test_known_config!(
    concentric_nested,
    [[0.0, 0.0], [0.0, 0.0], [0.0, 0.0]],
    [1.0, 2.0, 3.0],
    None,
    vec![3, 3, 1],
    |c| {
        let witness = c.witness(&Simplex::new([0, 1, 2])).unwrap();
        assert_relative_eq!(witness.x(), 0.0);
        assert_relative_eq!(witness.y(), 0.0);
        assert_eq!(c.statistics().verified_by_containment, 1);
        assert_eq!(c.statistics().rejected, 0);
    }
);

test_known_config!(
    two_far_balls,
    [[0.0, 0.0], [3.0, 0.0]],
    [1.0, 1.0],
    None,
    vec![2],
    |c| {
        assert_eq!(c.levels().len(), 2);
        assert!(!c.contains(&Simplex::new([0, 1])));
    }
);

// Tangent discs share exactly one boundary point.
test_known_config!(
    tangent_pair,
    [[0.0, 0.0], [2.0, 0.0]],
    [1.0, 1.0],
    None,
    vec![2, 1]
);

// Zero-radius ball sitting inside two overlapping discs.
test_known_config!(
    point_ball_inside_lens,
    [[0.0, 0.0], [1.0, 0.0], [0.5, 0.0]],
    [1.0, 1.0, 0.0],
    None,
    vec![3, 3, 1],
    |c| {
        let witness = c.witness(&Simplex::new([0, 1, 2])).unwrap();
        assert_relative_eq!(witness.x(), 0.5);
        assert_relative_eq!(witness.y(), 0.0);
    }
);

// Four unit discs on a unit square: all share the center.
test_known_config!(
    unit_square,
    [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [1.0, 1.0]],
    [1.0, 1.0, 1.0, 1.0],
    None,
    vec![4, 6, 4, 1],
    |c| {
        assert_eq!(c.dimension(), Some(3));
        assert_eq!(c.euler_characteristic(), 1);
    }
);

// Same square, capped at triangles.
test_known_config!(
    unit_square_capped,
    [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [1.0, 1.0]],
    [1.0, 1.0, 1.0, 1.0],
    Some(2),
    vec![4, 6, 4],
    |c| {
        assert_eq!(c.stop_reason(), StopReason::MaxDimension);
        assert_eq!(c.max_dimension(), Some(2));
        assert!(!c.contains(&Simplex::new([0, 1, 2, 3])));
    }
);

test_known_config!(
    unit_square_vertices_only,
    [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [1.0, 1.0]],
    [1.0, 1.0, 1.0, 1.0],
    Some(0),
    vec![4],
    |c| {
        assert_eq!(c.levels().len(), 1);
        assert_eq!(c.stop_reason(), StopReason::MaxDimension);
    }
);

// Disc 3 misses the witness of {0, 1, 2} found at the top of the 0-1 lens, so
// the tetrahedron needs a crossing of the apex circle with a base circle.
test_known_config!(
    apex_disc_cuts_common_region,
    [[0.0, 0.0], [1.0, 0.0], [0.5, 0.6], [-1.0, 0.3]],
    [1.0, 1.0, 1.0, 1.1],
    None,
    vec![4, 6, 4, 1],
    |c| {
        assert!(c.statistics().verified_by_pairwise_intersection >= 1);
        let witness = c.witness(&Simplex::new([0, 1, 2, 3])).unwrap();
        for ball in c.balls() {
            assert!(disc_contains(ball, &witness));
        }
    }
);

// =============================================================================
// EXTREME SCALES
// =============================================================================

// The equilateral hole shrunk far below unit size: squared lengths would
// underflow to zero and make every disc contain every point.
test_known_config!(
    equilateral_hole_tiny,
    [
        [0.0, 0.0],
        [1.8e-170, 0.0],
        [0.9e-170, 1.8e-170 * 3.0_f64.sqrt() / 2.0]
    ],
    [1e-170; 3],
    None,
    vec![3, 3],
    |c| {
        assert!(!c.contains(&Simplex::new([0, 1, 2])));
    }
);

// The unit square blown up far above unit size: squared lengths would
// overflow to infinity and turn every crossing into NaN.
test_known_config!(
    unit_square_huge,
    [[0.0, 0.0], [1e160, 0.0], [0.0, 1e160], [1e160, 1e160]],
    [1e160; 4],
    None,
    vec![4, 6, 4, 1],
    |c| {
        for simplex in c.simplices() {
            let witness = c.witness(simplex).expect("every simplex has a witness");
            assert!(witness.is_finite());
            for &v in simplex.vertices() {
                assert!(disc_contains(&c.balls()[v], &witness));
            }
        }
    }
);

// =============================================================================
// INPUT ERRORS
// =============================================================================

#[test]
fn test_length_mismatch_reported_before_geometry() {
    let err = construct::<f64>(&[[0.0, 0.0], [1.0, 1.0]], &[1.0], None).unwrap_err();
    assert_eq!(
        err,
        InputError::LengthMismatch {
            positions: 2,
            radii: 1
        }
    );
}

#[test]
fn test_invalid_balls_rejected() {
    let err = construct(&[[0.0, 0.0], [1.0, 0.0]], &[1.0, f64::INFINITY], None).unwrap_err();
    assert!(matches!(err, InputError::InvalidBall { index: 1, .. }));

    let err = construct(&[[0.0, f64::NAN]], &[1.0], None).unwrap_err();
    assert!(matches!(err, InputError::InvalidBall { index: 0, .. }));

    let err = construct(&[[0.0, 0.0]], &[-1.0e-9], None).unwrap_err();
    assert!(err.to_string().contains("negative"));
}

// =============================================================================
// STATISTICS
// =============================================================================

#[test]
fn test_witness_caching_reports_duplicates_and_reuse() {
    let positions = [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [1.0, 1.0]];
    let radii = [1.0; 4];
    let caching = build(&positions, &radii, StrategyKind::WitnessCaching, None);
    let baseline = build(&positions, &radii, StrategyKind::Baseline, None);

    let stats = caching.statistics();
    assert_eq!(stats.candidates, 5);
    assert_eq!(stats.verified(), 5);
    assert_eq!(stats.duplicates, 8 + 3);
    assert!(stats.verified_by_witness_reuse > 0);

    let stats = baseline.statistics();
    assert_eq!(stats.duplicates, 0);
    assert_eq!(stats.verified_by_witness_reuse, 0);
    assert_eq!(stats.verified(), 5);
}
