//! Built-in example datasets used when no input files are given.

use chrono::NaiveDate;

use crate::game_log::GameLogEntry;
use crate::radar::RadarDatum;
use crate::shooting::ShotZoneStats;
use crate::shot_cluster::ShotSample;
use crate::team::{ClutchMetric, PlayTypeMetrics, QuarterTrend, TeamMetrics};

pub fn shot_locations() -> Vec<ShotSample> {
    // (x, y, made fraction, attempts) on a 500x470 half court.
    const SHOTS: [(f64, f64, f64, u32); 8] = [
        (250.0, 60.0, 0.85, 45),
        (150.0, 120.0, 0.65, 32),
        (350.0, 120.0, 0.72, 38),
        (250.0, 400.0, 0.92, 65),
        (100.0, 250.0, 0.45, 25),
        (400.0, 250.0, 0.48, 28),
        (200.0, 200.0, 0.52, 30),
        (300.0, 200.0, 0.54, 33),
    ];
    SHOTS
        .iter()
        .map(|&(x, y, made_fraction, attempts)| ShotSample {
            x,
            y,
            made_fraction,
            attempts,
        })
        .collect()
}

pub fn shot_zones() -> Vec<ShotZoneStats> {
    [
        ("Restricted Area", 124, 82, 64.2),
        ("Paint (Non-RA)", 86, 42, 42.1),
        ("Mid-Range", 98, 44, 41.5),
        ("Corner 3", 64, 28, 38.2),
        ("Above Break 3", 182, 72, 35.8),
    ]
    .into_iter()
    .map(|(zone, attempts, made, league_avg)| ShotZoneStats {
        zone: zone.to_string(),
        attempts,
        made,
        league_avg,
    })
    .collect()
}

pub fn game_log() -> Vec<GameLogEntry> {
    // date, opp, min, pts, reb, ast, stl, blk, fgm, fga, 3pm, 3pa, ftm, fta, +/-
    #[rustfmt::skip]
    let rows: [(u32, &str, [u32; 12], i32); 6] = [
        (10, "SAC", [34, 24, 4, 7, 1, 0, 8, 17, 4, 9, 4, 4], 3),
        (12, "POR", [31, 27, 6, 9, 2, 1, 9, 19, 5, 11, 4, 5], -2),
        (14, "UTA", [33, 22, 3, 11, 0, 0, 7, 18, 3, 10, 5, 5], 9),
        (16, "DEN", [36, 35, 6, 6, 3, 0, 12, 22, 6, 11, 5, 5], 15),
        (18, "PHX", [32, 28, 4, 10, 1, 1, 9, 18, 4, 9, 6, 6], 8),
        (20, "LAL", [35, 30, 5, 8, 2, 0, 10, 20, 5, 10, 5, 6], 12),
    ];
    rows.iter()
        .filter_map(|(day, opponent, s, plus_minus)| {
            Some(GameLogEntry {
                date: NaiveDate::from_ymd_opt(2024, 2, *day)?,
                opponent: opponent.to_string(),
                minutes: s[0],
                points: s[1],
                rebounds: s[2],
                assists: s[3],
                steals: s[4],
                blocks: s[5],
                fgm: s[6],
                fga: s[7],
                three_pm: s[8],
                three_pa: s[9],
                ftm: s[10],
                fta: s[11],
                plus_minus: *plus_minus,
            })
        })
        .collect()
}

pub fn team_radar() -> (Vec<String>, Vec<RadarDatum>) {
    let series = vec!["Warriors".to_string(), "Lakers".to_string()];
    let data = [
        ("Offense", 85.0, 78.0),
        ("Defense", 72.0, 80.0),
        ("Rebounding", 65.0, 82.0),
        ("Passing", 90.0, 70.0),
        ("Shooting", 88.0, 75.0),
        ("Pace", 78.0, 72.0),
    ]
    .into_iter()
    .map(|(category, a, b)| RadarDatum {
        category: category.to_string(),
        values: vec![a, b],
    })
    .collect();
    (series, data)
}

pub fn team_metrics() -> (TeamMetrics, TeamMetrics) {
    let row = |team: &str, r: [f64; 8]| TeamMetrics {
        team: team.to_string(),
        offensive_rating: r[0],
        defensive_rating: r[1],
        efg: r[2],
        true_shooting_pct: r[3],
        pace: r[4],
        assist_rate: r[5],
        rebound_rate: r[6],
        turnover_rate: r[7],
    };
    (
        row("Warriors", [112.5, 108.2, 54.3, 58.1, 98.7, 62.4, 51.2, 13.8]),
        row("Lakers", [110.8, 109.5, 52.8, 56.9, 97.2, 60.1, 49.8, 14.2]),
    )
}

pub fn play_types() -> Vec<PlayTypeMetrics> {
    [
        ("Pick & Roll", 1.05, 25.0),
        ("Isolation", 0.92, 15.0),
        ("Spot Up", 1.12, 30.0),
        ("Post Up", 0.98, 10.0),
        ("Transition", 1.25, 20.0),
    ]
    .into_iter()
    .map(|(play_type, efficiency, frequency)| PlayTypeMetrics {
        play_type: play_type.to_string(),
        efficiency,
        frequency,
    })
    .collect()
}

pub fn clutch_metrics() -> Vec<ClutchMetric> {
    [
        ("Points in Paint", 48.0, 42.0),
        ("Second Chance", 14.0, 12.0),
        ("Fast Break", 18.0, 15.0),
        ("Bench Points", 38.0, 32.0),
    ]
    .into_iter()
    .map(|(metric, value, comparison)| ClutchMetric {
        metric: metric.to_string(),
        value,
        comparison,
    })
    .collect()
}

pub fn quarter_trends() -> Vec<QuarterTrend> {
    [(1, 28.0, 24.0), (2, 26.0, 30.0), (3, 32.0, 28.0), (4, 30.0, 31.0)]
        .into_iter()
        .map(|(quarter, team_a, team_b)| QuarterTrend {
            quarter,
            team_a,
            team_b,
        })
        .collect()
}
