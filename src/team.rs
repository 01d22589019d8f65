//! Team-level dashboard numbers: ratings, play-type efficiency, clutch splits
//! and per-quarter scoring.

use serde::{Deserialize, Serialize};

use crate::comparison::{Comparison, Direction, Trend, compare};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMetrics {
    pub team: String,
    pub offensive_rating: f64,
    pub defensive_rating: f64,
    pub efg: f64,
    pub true_shooting_pct: f64,
    pub pace: f64,
    pub assist_rate: f64,
    pub rebound_rate: f64,
    pub turnover_rate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TeamMetric {
    OffensiveRating,
    DefensiveRating,
    EffectiveFgPct,
    TrueShootingPct,
    Pace,
    AssistRate,
    ReboundRate,
    TurnoverRate,
}

impl TeamMetric {
    pub const ALL: [TeamMetric; 8] = [
        TeamMetric::OffensiveRating,
        TeamMetric::DefensiveRating,
        TeamMetric::EffectiveFgPct,
        TeamMetric::TrueShootingPct,
        TeamMetric::Pace,
        TeamMetric::AssistRate,
        TeamMetric::ReboundRate,
        TeamMetric::TurnoverRate,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TeamMetric::OffensiveRating => "Off Rtg",
            TeamMetric::DefensiveRating => "Def Rtg",
            TeamMetric::EffectiveFgPct => "eFG%",
            TeamMetric::TrueShootingPct => "TS%",
            TeamMetric::Pace => "Pace",
            TeamMetric::AssistRate => "AST%",
            TeamMetric::ReboundRate => "REB%",
            TeamMetric::TurnoverRate => "TOV%",
        }
    }

    /// Points allowed and turnovers are better when lower.
    pub fn direction(self) -> Direction {
        match self {
            TeamMetric::DefensiveRating | TeamMetric::TurnoverRate => Direction::LowerBetter,
            _ => Direction::HigherBetter,
        }
    }

    pub fn is_percent(self) -> bool {
        matches!(
            self,
            TeamMetric::EffectiveFgPct
                | TeamMetric::TrueShootingPct
                | TeamMetric::AssistRate
                | TeamMetric::ReboundRate
                | TeamMetric::TurnoverRate
        )
    }

    pub fn value(self, m: &TeamMetrics) -> f64 {
        match self {
            TeamMetric::OffensiveRating => m.offensive_rating,
            TeamMetric::DefensiveRating => m.defensive_rating,
            TeamMetric::EffectiveFgPct => m.efg,
            TeamMetric::TrueShootingPct => m.true_shooting_pct,
            TeamMetric::Pace => m.pace,
            TeamMetric::AssistRate => m.assist_rate,
            TeamMetric::ReboundRate => m.rebound_rate,
            TeamMetric::TurnoverRate => m.turnover_rate,
        }
    }

    pub fn format(self, value: f64) -> String {
        if self.is_percent() {
            format!("{value:.1}%")
        } else {
            format!("{value:.1}")
        }
    }
}

impl TeamMetrics {
    pub fn net_rating(&self) -> f64 {
        self.offensive_rating - self.defensive_rating
    }

    /// Every metric of `self` measured against `other`, in [`TeamMetric::ALL`] order.
    pub fn compare_with(&self, other: &TeamMetrics) -> Vec<(TeamMetric, Comparison)> {
        TeamMetric::ALL
            .into_iter()
            .map(|metric| {
                let cmp = compare(metric.value(self), metric.value(other), metric.direction());
                (metric, cmp)
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayTypeMetrics {
    pub play_type: String,
    /// Points per possession.
    pub efficiency: f64,
    /// Share of possessions, in percent.
    pub frequency: f64,
}

impl PlayTypeMetrics {
    pub fn ppp_label(&self) -> String {
        format!("{:.2} PPP", self.efficiency)
    }
}

/// Each play type's frequency as a share of the summed frequencies.
/// All zero when the frequencies sum to zero or less.
pub fn frequency_share(plays: &[PlayTypeMetrics]) -> Vec<(String, f64)> {
    let total: f64 = plays.iter().map(|p| p.frequency).sum();
    plays
        .iter()
        .map(|p| {
            let share = if total > 0.0 {
                p.frequency / total * 100.0
            } else {
                0.0
            };
            (p.play_type.clone(), share)
        })
        .collect()
}

/// Frequency-weighted points per possession across play types.
pub fn weighted_ppp(plays: &[PlayTypeMetrics]) -> Option<f64> {
    let total: f64 = plays.iter().map(|p| p.frequency).sum();
    if total <= 0.0 {
        return None;
    }
    let points: f64 = plays.iter().map(|p| p.efficiency * p.frequency).sum();
    Some(points / total)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClutchMetric {
    pub metric: String,
    pub value: f64,
    pub comparison: f64,
}

impl ClutchMetric {
    pub fn comparison(&self) -> Comparison {
        compare(self.value, self.comparison, Direction::HigherBetter)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuarterTrend {
    pub quarter: u8,
    pub team_a: f64,
    pub team_b: f64,
}

impl QuarterTrend {
    pub fn margin(&self) -> f64 {
        self.team_a - self.team_b
    }

    pub fn trend(&self) -> Trend {
        Trend::between(self.team_a, self.team_b)
    }
}

/// Running score margin for team A after each quarter.
pub fn cumulative_margin(quarters: &[QuarterTrend]) -> Vec<f64> {
    quarters
        .iter()
        .scan(0.0, |acc, q| {
            *acc += q.margin();
            Some(*acc)
        })
        .collect()
}
