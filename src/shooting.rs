use serde::{Deserialize, Serialize};

use crate::comparison::{Comparison, Direction, compare};
use crate::game_log::GameLogEntry;

/// Free throw attempts per possession-ending shot, the usual TS% constant.
const FTA_WEIGHT: f64 = 0.44;

/// Season totals; fields are wider than the per-game counts so long logs cannot overflow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ShootingLine {
    pub points: u64,
    pub fgm: u64,
    pub fga: u64,
    pub three_pm: u64,
    pub three_pa: u64,
    pub ftm: u64,
    pub fta: u64,
}

impl ShootingLine {
    pub fn from_games(games: &[GameLogEntry]) -> Self {
        games.iter().fold(Self::default(), |mut acc, g| {
            acc.points += u64::from(g.points);
            acc.fgm += u64::from(g.fgm);
            acc.fga += u64::from(g.fga);
            acc.three_pm += u64::from(g.three_pm);
            acc.three_pa += u64::from(g.three_pa);
            acc.ftm += u64::from(g.ftm);
            acc.fta += u64::from(g.fta);
            acc
        })
    }

    pub fn fg_pct(&self) -> Option<f64> {
        ratio_pct(self.fgm as f64, self.fga as f64)
    }

    pub fn three_pct(&self) -> Option<f64> {
        ratio_pct(self.three_pm as f64, self.three_pa as f64)
    }

    pub fn ft_pct(&self) -> Option<f64> {
        ratio_pct(self.ftm as f64, self.fta as f64)
    }

    pub fn effective_fg_pct(&self) -> Option<f64> {
        ratio_pct(
            self.fgm as f64 + 0.5 * self.three_pm as f64,
            self.fga as f64,
        )
    }

    pub fn true_shooting_pct(&self) -> Option<f64> {
        let shots = 2.0 * (self.fga as f64 + FTA_WEIGHT * self.fta as f64);
        ratio_pct(self.points as f64, shots)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShotZoneStats {
    pub zone: String,
    pub attempts: u32,
    pub made: u32,
    pub league_avg: f64,
}

impl ShotZoneStats {
    pub fn percentage(&self) -> Option<f64> {
        ratio_pct(self.made as f64, self.attempts as f64)
    }

    pub fn vs_league(&self) -> Option<Comparison> {
        self.percentage()
            .map(|pct| compare(pct, self.league_avg, Direction::HigherBetter))
    }
}

/// Share of total attempts taken from each zone, in input order.
pub fn attempt_distribution(zones: &[ShotZoneStats]) -> Vec<(String, f64)> {
    let total: u64 = zones.iter().map(|z| u64::from(z.attempts)).sum();
    zones
        .iter()
        .map(|z| {
            let share = ratio_pct(z.attempts as f64, total as f64).unwrap_or(0.0);
            (z.zone.clone(), share)
        })
        .collect()
}

fn ratio_pct(num: f64, den: f64) -> Option<f64> {
    if den <= 0.0 {
        None
    } else {
        Some(num / den * 100.0)
    }
}
