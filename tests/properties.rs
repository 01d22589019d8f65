//! Property-based checks for the clustering and rolling-average helpers.

use hoops_dash::rolling::rolling_average;
use hoops_dash::shot_cluster::{DEFAULT_MIN_RADIUS, ShotSample, cluster};
use proptest::prelude::*;

fn sample_strategy() -> impl Strategy<Value = ShotSample> {
    (0.0f64..500.0, 0.0f64..470.0, 0.0f64..=1.0, 1u32..120).prop_map(
        |(x, y, made_fraction, attempts)| ShotSample {
            x,
            y,
            made_fraction,
            attempts,
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_clusters_partition_input(
        samples in prop::collection::vec(sample_strategy(), 0..40),
        radius in 1.0f64..200.0,
    ) {
        let clusters = cluster(&samples, radius).unwrap();
        let total: usize = clusters.iter().map(|c| c.len()).sum();
        prop_assert_eq!(total, samples.len());
        prop_assert!(clusters.iter().all(|c| !c.is_empty()));

        for s in &samples {
            let expected = samples.iter().filter(|t| *t == s).count();
            let seen = clusters
                .iter()
                .flat_map(|c| c.members.iter())
                .filter(|t| *t == s)
                .count();
            prop_assert_eq!(seen, expected);
        }
    }

    #[test]
    fn prop_efficiency_within_member_bounds(
        samples in prop::collection::vec(sample_strategy(), 1..40),
        radius in 1.0f64..200.0,
    ) {
        for c in cluster(&samples, radius).unwrap() {
            let lo = c.members.iter().map(|s| s.made_fraction).fold(f64::INFINITY, f64::min);
            let hi = c.members.iter().map(|s| s.made_fraction).fold(f64::NEG_INFINITY, f64::max);
            prop_assert!(c.efficiency >= lo - 1e-9);
            prop_assert!(c.efficiency <= hi + 1e-9);
        }
    }

    #[test]
    fn prop_members_within_radius_of_seed(
        samples in prop::collection::vec(sample_strategy(), 1..40),
        radius in 1.0f64..200.0,
    ) {
        for c in cluster(&samples, radius).unwrap() {
            let seed = c.members[0];
            for m in &c.members {
                prop_assert!(m.distance_to(seed.x, seed.y) <= radius);
            }
            prop_assert!(c.radius >= DEFAULT_MIN_RADIUS);
            for m in &c.members {
                prop_assert!(m.distance_to(c.center_x, c.center_y) <= c.radius + 1e-9);
            }
        }
    }

    #[test]
    fn prop_rolling_output_length(
        values in prop::collection::vec(-100.0f64..100.0, 0..30),
        window in 1usize..10,
    ) {
        let out: Vec<f64> = rolling_average(&values, window).unwrap().collect();
        let expected = (values.len() + 1).saturating_sub(window);
        prop_assert_eq!(out.len(), expected);
    }
}
