use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    HigherBetter,
    LowerBetter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    pub fn between(current: f64, previous: f64) -> Self {
        if current > previous {
            Trend::Up
        } else if current < previous {
            Trend::Down
        } else {
            Trend::Stable
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            Trend::Up => "↑",
            Trend::Down => "↓",
            Trend::Stable => "",
        }
    }
}

/// A value measured against a reference (league average, opponent, last game).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Comparison {
    pub value: f64,
    pub comparison_value: f64,
    pub difference: f64,
    pub is_favorable: bool,
    pub percent_change: Option<f64>,
}

impl Comparison {
    pub fn display(&self) -> String {
        let pct = match self.percent_change {
            Some(p) => format!("{:.1}%", p.abs()),
            None => "N/A".to_string(),
        };
        format!("{:.1} ({})", self.difference.abs(), pct)
    }

    pub fn signed_difference(&self) -> String {
        if self.difference > 0.0 {
            format!("+{:.1}", self.difference)
        } else {
            format!("{:.1}", self.difference)
        }
    }
}

pub fn compare(value: f64, comparison_value: f64, direction: Direction) -> Comparison {
    let difference = value - comparison_value;
    let is_favorable = match direction {
        Direction::HigherBetter => difference > 0.0,
        Direction::LowerBetter => difference < 0.0,
    };
    Comparison {
        value,
        comparison_value,
        difference,
        is_favorable,
        percent_change: percent_change_checked(value, comparison_value),
    }
}

/// Raw percent change. Non-finite when `previous` is zero; use
/// [`percent_change_checked`] at display boundaries.
pub fn percent_change(current: f64, previous: f64) -> f64 {
    ((current - previous) / previous) * 100.0
}

pub fn percent_change_checked(current: f64, previous: f64) -> Option<f64> {
    let pct = percent_change(current, previous);
    pct.is_finite().then_some(pct)
}

pub fn format_percent_change(pct: Option<f64>) -> String {
    match pct {
        Some(p) if p > 0.0 => format!("+{p:.1}%"),
        Some(p) => format!("{p:.1}%"),
        None => "N/A".to_string(),
    }
}
