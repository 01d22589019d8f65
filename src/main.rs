use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use tracing_subscriber::EnvFilter;

use hoops_dash::config::DashConfig;
use hoops_dash::game_log::load_game_log;
use hoops_dash::radar::{RadarGeometry, build_radar};
use hoops_dash::report::{ReportInput, render_report};
use hoops_dash::rolling::rolling_game_averages;
use hoops_dash::sample_data;
use hoops_dash::shot_cluster::{ClusterMarker, ShotSample};
use hoops_dash::theme::{Theme, ThemeStore, system_prefers_dark};

#[derive(Debug, Default)]
struct Args {
    shots: Option<PathBuf>,
    games: Option<PathBuf>,
    radius: Option<f64>,
    window: Option<usize>,
    json: bool,
    radar_svg: bool,
    toggle_theme: bool,
}

fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args(std::env::args().skip(1))?;
    let output = run(&args, DashConfig::from_env())?;
    print!("{output}");
    Ok(())
}

fn run(args: &Args, mut cfg: DashConfig) -> Result<String> {
    if let Some(radius) = args.radius {
        cfg.cluster.radius = radius;
    }
    if let Some(window) = args.window {
        cfg.rolling_window = window;
    }

    // Theme is settled before any output mode so --toggle-theme always persists.
    let theme = resolve_theme(&cfg, args.toggle_theme);

    let shots = match &args.shots {
        Some(path) => load_shots(path)?,
        None => sample_data::shot_locations(),
    };
    let games = match &args.games {
        Some(path) => load_game_log(path)?,
        None => sample_data::game_log(),
    };

    let clusters = cfg.cluster.cluster(&shots)?;

    if args.json {
        let markers: Vec<ClusterMarker> = clusters.iter().map(|c| c.marker()).collect();
        return Ok(format!("{}\n", serde_json::to_string_pretty(&markers)?));
    }

    let (radar_series, radar) = sample_data::team_radar();
    if args.radar_svg {
        let layout = build_radar(&radar, RadarGeometry::default())?;
        let mut out = String::new();
        for (i, name) in radar_series.iter().enumerate() {
            if let Some(path) = layout.series_path(i) {
                out.push_str(&format!("{name}: {path}\n"));
            }
        }
        return Ok(out);
    }

    let rolling: Vec<_> = rolling_game_averages(&games, cfg.rolling_window)?.collect();
    let zones = sample_data::shot_zones();
    let (home, away) = sample_data::team_metrics();
    let play_types = sample_data::play_types();
    let clutch = sample_data::clutch_metrics();
    let quarters = sample_data::quarter_trends();

    Ok(render_report(&ReportInput {
        clusters: &clusters,
        rolling: &rolling,
        rolling_window: cfg.rolling_window,
        games: &games,
        zones: &zones,
        radar_series: &radar_series,
        radar: &radar,
        teams: Some((&home, &away)),
        play_types: &play_types,
        clutch: &clutch,
        quarters: &quarters,
        theme,
    }))
}

fn resolve_theme(cfg: &DashConfig, toggle: bool) -> Theme {
    let store = cfg
        .settings_path
        .clone()
        .map(ThemeStore::open)
        .or_else(ThemeStore::open_default);
    let Some(mut store) = store else {
        return Theme::from_dark(system_prefers_dark());
    };
    if !toggle {
        return store.load(system_prefers_dark);
    }
    match store.toggle(system_prefers_dark) {
        Ok(theme) => theme,
        Err(err) => {
            tracing::warn!(%err, "failed to persist theme");
            store.load(system_prefers_dark)
        }
    }
}

fn load_shots(path: &Path) -> Result<Vec<ShotSample>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("read shots {}", path.display()))?;
    let shots: Vec<ShotSample> = serde_json::from_str(&raw).context("invalid shots json")?;
    for (idx, shot) in shots.iter().enumerate() {
        shot.validate()
            .with_context(|| format!("shot #{idx} in {}", path.display()))?;
    }
    Ok(shots)
}

fn parse_args(mut iter: impl Iterator<Item = String>) -> Result<Args> {
    let mut args = Args::default();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--shots" => args.shots = Some(PathBuf::from(next_value(&mut iter, &arg)?)),
            "--games" => args.games = Some(PathBuf::from(next_value(&mut iter, &arg)?)),
            "--radius" => {
                let raw = next_value(&mut iter, &arg)?;
                args.radius = Some(raw.parse().with_context(|| format!("bad radius {raw}"))?);
            }
            "--window" => {
                let raw = next_value(&mut iter, &arg)?;
                args.window = Some(raw.parse().with_context(|| format!("bad window {raw}"))?);
            }
            "--json" => args.json = true,
            "--radar-svg" => args.radar_svg = true,
            "--toggle-theme" => args.toggle_theme = true,
            other => return Err(anyhow!("unknown argument {other}")),
        }
    }
    Ok(args)
}

fn next_value(iter: &mut impl Iterator<Item = String>, flag: &str) -> Result<String> {
    iter.next().ok_or_else(|| anyhow!("{flag} needs a value"))
}
