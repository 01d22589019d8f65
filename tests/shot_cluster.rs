use std::fs;
use std::path::PathBuf;

use hoops_dash::MetricsError;
use hoops_dash::sample_data;
use hoops_dash::shot_cluster::{
    ClusterConfig, EfficiencyTier, ShotSample, cluster, cluster_with_floor,
};

fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

fn shot(x: f64, y: f64, made: f64, attempts: u32) -> ShotSample {
    ShotSample::new(x, y, made, attempts).expect("valid sample")
}

#[test]
fn empty_input_gives_no_clusters() {
    assert!(cluster(&[], 40.0).unwrap().is_empty());
}

#[test]
fn single_sample_uses_floor_radius() {
    let out = cluster(&[shot(120.0, 80.0, 0.5, 10)], 40.0).unwrap();
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].len(), 1);
    assert_eq!(out[0].radius, 20.0);
    assert_eq!(out[0].efficiency, 0.5);
    assert_eq!(out[0].center_x, 120.0);
    assert_eq!(out[0].center_y, 80.0);
}

#[test]
fn far_apart_samples_stay_separate() {
    let out = cluster(&[shot(0.0, 0.0, 0.4, 5), shot(100.0, 0.0, 0.6, 5)], 40.0).unwrap();
    assert_eq!(out.len(), 2);
    assert!(out.iter().all(|c| c.len() == 1));
}

#[test]
fn boundary_distance_is_inclusive() {
    let out = cluster(&[shot(0.0, 0.0, 0.4, 5), shot(40.0, 0.0, 0.6, 5)], 40.0).unwrap();
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].len(), 2);
    assert_eq!(out[0].center_x, 20.0);
    // Spread is 20, which equals the floor.
    assert_eq!(out[0].radius, 20.0);
}

#[test]
fn just_past_boundary_splits() {
    let out = cluster(
        &[shot(0.0, 0.0, 0.4, 5), shot(40.0 + 1e-9, 0.0, 0.6, 5)],
        40.0,
    )
    .unwrap();
    assert_eq!(out.len(), 2);
}

#[test]
fn identical_coordinates_collapse() {
    let samples = [
        shot(10.0, 10.0, 0.2, 4),
        shot(10.0, 10.0, 0.8, 4),
        shot(10.0, 10.0, 0.5, 2),
    ];
    let out = cluster(&samples, 40.0).unwrap();
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].len(), 3);
    assert_eq!(out[0].radius, 20.0);
    assert!((out[0].efficiency - 0.5).abs() < 1e-12);
}

#[test]
fn efficiency_is_attempt_weighted() {
    let out = cluster(&[shot(0.0, 0.0, 1.0, 3), shot(10.0, 0.0, 0.0, 1)], 40.0).unwrap();
    assert_eq!(out.len(), 1);
    assert!((out[0].efficiency - 0.75).abs() < 1e-12);
    assert_eq!(out[0].total_attempts(), 4);
    assert_eq!(out[0].center_x, 5.0);
}

#[test]
fn spread_beyond_floor_sets_radius() {
    let out = cluster(&[shot(0.0, 0.0, 0.5, 1), shot(0.0, 60.0, 0.5, 1)], 80.0).unwrap();
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].radius, 30.0);
}

#[test]
fn distance_is_measured_from_seed_only() {
    // c is 30 from b but 70 from the seed a, so it is left for a later seed.
    let a = shot(0.0, 0.0, 0.5, 1);
    let b = shot(40.0, 0.0, 0.5, 1);
    let c = shot(70.0, 0.0, 0.5, 1);
    let out = cluster(&[a, b, c], 40.0).unwrap();
    assert_eq!(out.len(), 2);
    assert_eq!(out[0].members, vec![a, b]);
    assert_eq!(out[1].members, vec![c]);
}

#[test]
fn grouping_depends_on_input_order() {
    let a = shot(0.0, 0.0, 0.5, 1);
    let b = shot(30.0, 0.0, 0.5, 1);
    let c = shot(60.0, 0.0, 0.5, 1);

    let forward = cluster(&[a, b, c], 40.0).unwrap();
    assert_eq!(forward[0].members, vec![a, b]);
    assert_eq!(forward[1].members, vec![c]);

    let reversed = cluster(&[c, b, a], 40.0).unwrap();
    assert_eq!(reversed[0].members, vec![c, b]);
    assert_eq!(reversed[1].members, vec![a]);
}

#[test]
fn clusters_come_out_in_seed_order() {
    let samples = [
        shot(500.0, 0.0, 0.1, 1),
        shot(0.0, 0.0, 0.2, 1),
        shot(505.0, 0.0, 0.3, 1),
        shot(250.0, 0.0, 0.4, 1),
    ];
    let out = cluster(&samples, 40.0).unwrap();
    let seeds: Vec<f64> = out.iter().map(|c| c.members[0].x).collect();
    assert_eq!(seeds, vec![500.0, 0.0, 250.0]);
}

#[test]
fn custom_floor_is_honored() {
    let out = cluster_with_floor(&[shot(5.0, 5.0, 0.3, 2)], 40.0, 0.0).unwrap();
    assert_eq!(out[0].radius, 0.0);
    assert!(cluster_with_floor(&[shot(5.0, 5.0, 0.3, 2)], 40.0, -1.0).is_err());
}

#[test]
fn fixture_shots_parse_legacy_value_field() {
    let shots: Vec<ShotSample> =
        serde_json::from_str(&read_fixture("shots.json")).expect("fixture should parse");
    assert_eq!(shots, sample_data::shot_locations());
    assert!(shots.iter().all(|s| s.validate().is_ok()));
}

#[test]
fn default_config_keeps_sample_shots_apart() {
    let shots = sample_data::shot_locations();
    let out = ClusterConfig::default().cluster(&shots).unwrap();
    assert_eq!(out.len(), shots.len());
    for (c, s) in out.iter().zip(&shots) {
        assert_eq!(c.members, vec![*s]);
        assert_eq!(c.efficiency, s.made_fraction);
    }
    assert_eq!(out[3].tier(), EfficiencyTier::Hot);
    assert_eq!(out[4].tier(), EfficiencyTier::Average);
}

#[test]
fn wider_radius_merges_mid_range_with_wings() {
    let shots = sample_data::shot_locations();
    let out = cluster(&shots, 110.0).unwrap();
    assert_eq!(out.len(), 6);
    // Left wing three seeds the left mid-range sample.
    assert_eq!(out[1].members, vec![shots[1], shots[6]]);
    assert_eq!(out[2].members, vec![shots[2], shots[7]]);
    let expected = (0.65 * 32.0 + 0.52 * 30.0) / 62.0;
    assert!((out[1].efficiency - expected).abs() < 1e-12);
    assert_eq!(out[1].total_attempts(), 62);
}

#[test]
fn markers_serialize_for_renderer() {
    let out = cluster(&[shot(1.0, 2.0, 0.3, 7)], 40.0).unwrap();
    let json = serde_json::to_value(out[0].marker()).unwrap();
    assert_eq!(json["x"], 1.0);
    assert_eq!(json["y"], 2.0);
    assert_eq!(json["radius"], 20.0);
    assert_eq!(json["attemptCount"], 7);
    assert_eq!(json["tier"], "cold");
}

#[test]
fn non_finite_coordinates_are_rejected() {
    let bad = ShotSample {
        x: f64::NAN,
        y: 0.0,
        made_fraction: 0.5,
        attempts: 3,
    };
    let good = shot(1.0, 1.0, 0.5, 3);
    let err = cluster(&[bad, good], 40.0).unwrap_err();
    assert!(matches!(err, MetricsError::InvalidSample(msg) if msg.contains("#0")));

    let inf = ShotSample {
        y: f64::INFINITY,
        ..good
    };
    assert!(cluster(&[good, inf], 40.0).is_err());
}

#[test]
fn unvalidated_samples_still_partition() {
    // Zero attempts and out-of-range fractions skip validation but are still grouped.
    let raw = [
        ShotSample {
            x: 0.0,
            y: 0.0,
            made_fraction: 1.5,
            attempts: 0,
        },
        ShotSample {
            x: 10.0,
            y: 0.0,
            made_fraction: 0.5,
            attempts: 0,
        },
        ShotSample {
            x: 300.0,
            y: 0.0,
            made_fraction: 0.5,
            attempts: 0,
        },
    ];
    let out = cluster(&raw, 40.0).unwrap();
    assert_eq!(out.len(), 2);
    assert!(out.iter().all(|c| !c.is_empty()));
    assert_eq!(out.iter().map(|c| c.len()).sum::<usize>(), raw.len());
    assert!(out.iter().all(|c| c.efficiency == 0.0));
}
