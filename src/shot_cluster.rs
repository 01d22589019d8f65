use serde::{Deserialize, Serialize};

use crate::error::{MetricsError, MetricsResult};

pub const DEFAULT_CLUSTER_RADIUS: f64 = 40.0;
pub const DEFAULT_MIN_RADIUS: f64 = 20.0;

const HOT_THRESHOLD: f64 = 0.60;
const AVERAGE_THRESHOLD: f64 = 0.45;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShotSample {
    pub x: f64,
    pub y: f64,
    #[serde(alias = "value")]
    pub made_fraction: f64,
    pub attempts: u32,
}

impl ShotSample {
    pub fn new(x: f64, y: f64, made_fraction: f64, attempts: u32) -> MetricsResult<Self> {
        let sample = Self {
            x,
            y,
            made_fraction,
            attempts,
        };
        sample.validate()?;
        Ok(sample)
    }

    pub fn validate(&self) -> MetricsResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(MetricsError::InvalidSample(format!(
                "non-finite coordinates ({}, {})",
                self.x, self.y
            )));
        }
        if self.attempts == 0 {
            return Err(MetricsError::InvalidSample(
                "attempts must be positive".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.made_fraction) {
            return Err(MetricsError::InvalidSample(format!(
                "made fraction {} outside [0, 1]",
                self.made_fraction
            )));
        }
        Ok(())
    }

    pub fn distance_to(&self, x: f64, y: f64) -> f64 {
        distance(self.x, self.y, x, y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EfficiencyTier {
    Hot,
    Average,
    Cold,
}

impl EfficiencyTier {
    pub fn from_efficiency(efficiency: f64) -> Self {
        if efficiency >= HOT_THRESHOLD {
            EfficiencyTier::Hot
        } else if efficiency >= AVERAGE_THRESHOLD {
            EfficiencyTier::Average
        } else {
            EfficiencyTier::Cold
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EfficiencyTier::Hot => "hot",
            EfficiencyTier::Average => "avg",
            EfficiencyTier::Cold => "cold",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShotCluster {
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
    pub members: Vec<ShotSample>,
    pub efficiency: f64,
}

impl ShotCluster {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn total_attempts(&self) -> u64 {
        self.members.iter().map(|s| s.attempts as u64).sum()
    }

    pub fn tier(&self) -> EfficiencyTier {
        EfficiencyTier::from_efficiency(self.efficiency)
    }

    pub fn marker(&self) -> ClusterMarker {
        ClusterMarker {
            x: self.center_x,
            y: self.center_y,
            radius: self.radius,
            efficiency: self.efficiency,
            attempt_count: self.total_attempts(),
            tier: self.tier(),
        }
    }
}

/// Flat record handed to the heat-map renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterMarker {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub efficiency: f64,
    pub attempt_count: u64,
    pub tier: EfficiencyTier,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClusterConfig {
    pub radius: f64,
    pub min_radius: f64,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            radius: DEFAULT_CLUSTER_RADIUS,
            min_radius: DEFAULT_MIN_RADIUS,
        }
    }
}

impl ClusterConfig {
    pub fn cluster(&self, samples: &[ShotSample]) -> MetricsResult<Vec<ShotCluster>> {
        cluster_with_floor(samples, self.radius, self.min_radius)
    }
}

pub fn cluster(samples: &[ShotSample], radius: f64) -> MetricsResult<Vec<ShotCluster>> {
    cluster_with_floor(samples, radius, DEFAULT_MIN_RADIUS)
}

/// Greedy seed-based grouping.
///
/// The first unassigned sample (in input order) seeds a group that takes every
/// other unassigned sample within `radius` of the seed, boundary inclusive.
/// Distances are measured from the seed only; the group is never re-centered
/// while it is being formed, so the result depends on input order. Clusters
/// come out in seed order.
pub fn cluster_with_floor(
    samples: &[ShotSample],
    radius: f64,
    min_radius: f64,
) -> MetricsResult<Vec<ShotCluster>> {
    if !radius.is_finite() || radius <= 0.0 {
        return Err(MetricsError::InvalidRadius(radius));
    }
    if !min_radius.is_finite() || min_radius < 0.0 {
        return Err(MetricsError::InvalidRadius(min_radius));
    }
    // Attempts and made fraction are not checked here; only coordinates decide grouping.
    if let Some((idx, bad)) = samples
        .iter()
        .enumerate()
        .find(|(_, s)| !s.x.is_finite() || !s.y.is_finite())
    {
        return Err(MetricsError::InvalidSample(format!(
            "sample #{idx} has non-finite coordinates ({}, {})",
            bad.x, bad.y
        )));
    }

    let mut assigned = vec![false; samples.len()];
    let mut clusters = Vec::new();

    for (seed_idx, seed) in samples.iter().enumerate() {
        if assigned[seed_idx] {
            continue;
        }

        assigned[seed_idx] = true;
        let mut members = vec![*seed];
        for (idx, candidate) in samples.iter().enumerate().skip(seed_idx + 1) {
            if assigned[idx] {
                continue;
            }
            if candidate.distance_to(seed.x, seed.y) <= radius {
                assigned[idx] = true;
                members.push(*candidate);
            }
        }

        clusters.push(summarize_group(members, min_radius));
    }

    tracing::debug!(
        samples = samples.len(),
        clusters = clusters.len(),
        radius,
        "clustered shot samples"
    );
    Ok(clusters)
}

fn summarize_group(members: Vec<ShotSample>, min_radius: f64) -> ShotCluster {
    let n = members.len() as f64;
    let center_x = members.iter().map(|s| s.x).sum::<f64>() / n;
    let center_y = members.iter().map(|s| s.y).sum::<f64>() / n;

    let spread = members
        .iter()
        .map(|s| s.distance_to(center_x, center_y))
        .fold(0.0_f64, f64::max);

    let total_attempts: f64 = members.iter().map(|s| s.attempts as f64).sum();
    // Zero attempts can only come from unvalidated samples; report 0 rather than NaN.
    let efficiency = if total_attempts > 0.0 {
        members
            .iter()
            .map(|s| s.made_fraction * s.attempts as f64)
            .sum::<f64>()
            / total_attempts
    } else {
        0.0
    };

    ShotCluster {
        center_x,
        center_y,
        radius: spread.max(min_radius),
        members,
        efficiency,
    }
}

fn distance(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    (x2 - x1).hypot(y2 - y1)
}
