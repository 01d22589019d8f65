use std::fmt::Write as _;

use crate::comparison::{Direction, Trend, compare};
use crate::game_log::GameLogEntry;
use crate::radar::RadarDatum;
use crate::rolling::RollingAverage;
use crate::shooting::{ShootingLine, ShotZoneStats, attempt_distribution};
use crate::shot_cluster::ShotCluster;
use crate::team::{
    ClutchMetric, PlayTypeMetrics, QuarterTrend, TeamMetrics, cumulative_margin, frequency_share,
    weighted_ppp,
};
use crate::theme::Theme;

pub struct ReportInput<'a> {
    pub clusters: &'a [ShotCluster],
    pub rolling: &'a [RollingAverage],
    pub rolling_window: usize,
    pub games: &'a [GameLogEntry],
    pub zones: &'a [ShotZoneStats],
    pub radar_series: &'a [String],
    pub radar: &'a [RadarDatum],
    pub teams: Option<(&'a TeamMetrics, &'a TeamMetrics)>,
    pub play_types: &'a [PlayTypeMetrics],
    pub clutch: &'a [ClutchMetric],
    pub quarters: &'a [QuarterTrend],
    pub theme: Theme,
}

pub fn render_report(input: &ReportInput<'_>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Theme: {}", input.theme.label());
    out.push('\n');

    clusters_section(&mut out, input.clusters);
    rolling_section(&mut out, input.rolling, input.rolling_window);
    last_game_section(&mut out, input.games);
    shooting_section(&mut out, input.games);
    zones_section(&mut out, input.zones);
    radar_section(&mut out, input.radar_series, input.radar);
    if let Some((team, opponent)) = input.teams {
        team_section(&mut out, team, opponent);
    }
    play_type_section(&mut out, input.play_types);
    clutch_section(&mut out, input.clutch);
    if let Some((team, opponent)) = input.teams {
        quarter_section(&mut out, input.quarters, &team.team, &opponent.team);
    }
    out
}

fn clusters_section(out: &mut String, clusters: &[ShotCluster]) {
    let _ = writeln!(out, "Shot clusters ({})", clusters.len());
    for (i, c) in clusters.iter().enumerate() {
        let _ = writeln!(
            out,
            "  #{:<2} ({:>6.1},{:>6.1}) r={:>5.1}  {:>5.1}%  {:>4} shots  [{}]",
            i + 1,
            c.center_x,
            c.center_y,
            c.radius,
            c.efficiency * 100.0,
            c.total_attempts(),
            c.tier().label()
        );
    }
    out.push('\n');
}

fn rolling_section(out: &mut String, rolling: &[RollingAverage], window: usize) {
    let _ = writeln!(out, "Rolling averages ({window}-game)");
    if rolling.is_empty() {
        let _ = writeln!(out, "  not enough games");
    }
    for r in rolling {
        let _ = writeln!(
            out,
            "  {}  pts {:>5.1}  ast {:>4.1}  reb {:>4.1}",
            r.date, r.points, r.assists, r.rebounds
        );
    }
    out.push('\n');
}

fn last_game_section(out: &mut String, games: &[GameLogEntry]) {
    let [.., prev, last] = games else {
        return;
    };
    let _ = writeln!(out, "Last game vs {} ({})", last.opponent, last.date);
    for (label, now, before) in [
        ("points", last.points, prev.points),
        ("assists", last.assists, prev.assists),
        ("rebounds", last.rebounds, prev.rebounds),
    ] {
        let cmp = compare(now as f64, before as f64, Direction::HigherBetter);
        let trend = Trend::between(now as f64, before as f64);
        let _ = writeln!(
            out,
            "  {label:<9} {now:>3} {} {}",
            cmp.display(),
            trend.arrow()
        );
    }
    out.push('\n');
}

fn shooting_section(out: &mut String, games: &[GameLogEntry]) {
    let line = ShootingLine::from_games(games);
    let _ = writeln!(out, "Shooting ({} games)", games.len());
    for (label, value) in [
        ("FG%", line.fg_pct()),
        ("3P%", line.three_pct()),
        ("FT%", line.ft_pct()),
        ("eFG%", line.effective_fg_pct()),
        ("TS%", line.true_shooting_pct()),
    ] {
        let _ = writeln!(out, "  {label:<5} {}", pct_or_na(value));
    }
    out.push('\n');
}

fn zones_section(out: &mut String, zones: &[ShotZoneStats]) {
    let _ = writeln!(out, "Shot zones");
    let dist = attempt_distribution(zones);
    for (zone, (_, share)) in zones.iter().zip(dist) {
        let vs = match zone.vs_league() {
            Some(cmp) => format!(
                "{} vs lg {:.1}% [{}]",
                cmp.signed_difference(),
                zone.league_avg,
                if cmp.is_favorable { "+" } else { "-" }
            ),
            None => "N/A".to_string(),
        };
        let _ = writeln!(
            out,
            "  {:<16} {:>3}/{:<3} {:>7}  freq {:>4.1}%  {}",
            zone.zone,
            zone.made,
            zone.attempts,
            pct_or_na(zone.percentage()),
            share,
            vs
        );
    }
    out.push('\n');
}

fn radar_section(out: &mut String, series: &[String], data: &[RadarDatum]) {
    if data.is_empty() || series.len() < 2 {
        return;
    }
    let _ = writeln!(out, "{} vs {}", series[0], series[1]);
    for d in data {
        let (Some(a), Some(b)) = (d.values.first(), d.values.get(1)) else {
            continue;
        };
        let cmp = compare(*a, *b, Direction::HigherBetter);
        let _ = writeln!(
            out,
            "  {:<12} {:>5.1} {:>5.1}  {}",
            d.category,
            a,
            b,
            cmp.signed_difference()
        );
    }
    out.push('\n');
}

fn team_section(out: &mut String, team: &TeamMetrics, opponent: &TeamMetrics) {
    let _ = writeln!(out, "Team ratings: {} vs {}", team.team, opponent.team);
    for (metric, cmp) in team.compare_with(opponent) {
        let _ = writeln!(
            out,
            "  {:<8} {:>7} {:>7}  {} [{}]",
            metric.label(),
            metric.format(cmp.value),
            metric.format(cmp.comparison_value),
            cmp.signed_difference(),
            if cmp.is_favorable { "+" } else { "-" }
        );
    }
    let _ = writeln!(
        out,
        "  Net Rtg  {:>+7.1} {:>+7.1}",
        team.net_rating(),
        opponent.net_rating()
    );
    out.push('\n');
}

fn play_type_section(out: &mut String, plays: &[PlayTypeMetrics]) {
    if plays.is_empty() {
        return;
    }
    let _ = writeln!(out, "Play types");
    for (play, (_, share)) in plays.iter().zip(frequency_share(plays)) {
        let _ = writeln!(
            out,
            "  {:<12} {:>9}  freq {:>4.1}%",
            play.play_type,
            play.ppp_label(),
            share
        );
    }
    if let Some(ppp) = weighted_ppp(plays) {
        let _ = writeln!(out, "  overall      {ppp:.2} PPP");
    }
    out.push('\n');
}

fn clutch_section(out: &mut String, clutch: &[ClutchMetric]) {
    if clutch.is_empty() {
        return;
    }
    let _ = writeln!(out, "Clutch");
    for m in clutch {
        let cmp = m.comparison();
        let _ = writeln!(
            out,
            "  {:<16} {:>5.1} vs {:>5.1}  {}",
            m.metric,
            m.value,
            m.comparison,
            cmp.display()
        );
    }
    out.push('\n');
}

fn quarter_section(out: &mut String, quarters: &[QuarterTrend], team_a: &str, team_b: &str) {
    if quarters.is_empty() {
        return;
    }
    let _ = writeln!(out, "Quarters ({team_a} - {team_b})");
    for (q, running) in quarters.iter().zip(cumulative_margin(quarters)) {
        let _ = writeln!(
            out,
            "  Q{}  {:>4.0} - {:<4.0} {:>+5.0} (game {:+.0}) {}",
            q.quarter,
            q.team_a,
            q.team_b,
            q.margin(),
            running,
            q.trend().arrow()
        );
    }
}

pub fn pct_or_na(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.1}%"),
        None => "N/A".to_string(),
    }
}
