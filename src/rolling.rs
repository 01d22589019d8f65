use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{MetricsError, MetricsResult};
use crate::game_log::GameLogEntry;

pub const DEFAULT_ROLLING_WINDOW: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RollingAverage {
    pub date: NaiveDate,
    pub points: f64,
    pub assists: f64,
    pub rebounds: f64,
}

/// Moving-window mean. The first value corresponds to index `window - 1`;
/// earlier positions are omitted, not padded.
pub fn rolling_average(
    values: &[f64],
    window: usize,
) -> MetricsResult<impl Iterator<Item = f64> + '_> {
    if window == 0 {
        return Err(MetricsError::InvalidWindow);
    }
    Ok(values.windows(window).map(mean))
}

pub fn rolling_game_averages(
    games: &[GameLogEntry],
    window: usize,
) -> MetricsResult<impl Iterator<Item = RollingAverage> + '_> {
    if window == 0 {
        return Err(MetricsError::InvalidWindow);
    }
    Ok(games.windows(window).filter_map(move |slice| {
        let last = slice.last()?;
        let n = window as f64;
        Some(RollingAverage {
            date: last.date,
            points: slice.iter().map(|g| g.points as f64).sum::<f64>() / n,
            assists: slice.iter().map(|g| g.assists as f64).sum::<f64>() / n,
            rebounds: slice.iter().map(|g| g.rebounds as f64).sum::<f64>() / n,
        })
    }))
}

fn mean(slice: &[f64]) -> f64 {
    slice.iter().sum::<f64>() / slice.len() as f64
}
