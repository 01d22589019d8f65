use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameLogEntry {
    pub date: NaiveDate,
    pub opponent: String,
    pub minutes: u32,
    pub points: u32,
    pub rebounds: u32,
    pub assists: u32,
    #[serde(default)]
    pub steals: u32,
    #[serde(default)]
    pub blocks: u32,
    pub fgm: u32,
    pub fga: u32,
    pub three_pm: u32,
    pub three_pa: u32,
    pub ftm: u32,
    pub fta: u32,
    #[serde(default)]
    pub plus_minus: i32,
}

pub fn parse_game_log_json(raw: &str) -> Result<Vec<GameLogEntry>> {
    let mut games: Vec<GameLogEntry> =
        serde_json::from_str(raw).context("invalid game log json")?;
    // Logs are usually published newest first; rolling windows need oldest first.
    games.sort_by(|a, b| a.date.cmp(&b.date));
    Ok(games)
}

pub fn load_game_log(path: &Path) -> Result<Vec<GameLogEntry>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("read game log {}", path.display()))?;
    parse_game_log_json(&raw)
}
