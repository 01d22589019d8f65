use std::f64::consts::{FRAC_PI_2, TAU};
use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::error::{MetricsError, MetricsResult};

pub const GRID_SCALES: [f64; 5] = [0.2, 0.4, 0.6, 0.8, 1.0];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// SVG viewBox placement of the chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadarGeometry {
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
    pub label_offset: f64,
}

impl Default for RadarGeometry {
    fn default() -> Self {
        Self {
            center_x: 200.0,
            center_y: 200.0,
            radius: 150.0,
            label_offset: 30.0,
        }
    }
}

impl RadarGeometry {
    /// First axis points straight up, the rest go clockwise in SVG space.
    pub fn axis_angle(index: usize, count: usize) -> f64 {
        (index as f64 / count as f64) * TAU - FRAC_PI_2
    }

    pub fn polar(&self, angle: f64, distance: f64) -> Point {
        Point {
            x: angle.cos() * distance + self.center_x,
            y: angle.sin() * distance + self.center_y,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarDatum {
    pub category: String,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarAxis {
    pub category: String,
    pub angle: f64,
    pub label: Point,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarLayout {
    pub geometry: RadarGeometry,
    pub max_value: f64,
    pub axes: Vec<RadarAxis>,
    /// `series[s][i]` is the projected point of series `s` on axis `i`.
    pub series: Vec<Vec<Point>>,
}

pub fn build_radar(data: &[RadarDatum], geometry: RadarGeometry) -> MetricsResult<RadarLayout> {
    let Some(first) = data.first() else {
        return Err(MetricsError::InvalidChart("no categories".to_string()));
    };
    let series_count = first.values.len();
    if series_count == 0 {
        return Err(MetricsError::InvalidChart("no series values".to_string()));
    }
    if let Some(bad) = data.iter().find(|d| d.values.len() != series_count) {
        return Err(MetricsError::InvalidChart(format!(
            "category {} has {} values, expected {}",
            bad.category,
            bad.values.len(),
            series_count
        )));
    }
    if data.iter().flat_map(|d| d.values.iter()).any(|v| !v.is_finite()) {
        return Err(MetricsError::InvalidChart("non-finite value".to_string()));
    }

    let max_value = data
        .iter()
        .flat_map(|d| d.values.iter().copied())
        .fold(f64::NEG_INFINITY, f64::max);

    let n = data.len();
    let axes: Vec<RadarAxis> = data
        .iter()
        .enumerate()
        .map(|(i, d)| {
            let angle = RadarGeometry::axis_angle(i, n);
            RadarAxis {
                category: d.category.clone(),
                angle,
                label: geometry.polar(angle, geometry.radius + geometry.label_offset),
                values: d.values.clone(),
            }
        })
        .collect();

    let series = (0..series_count)
        .map(|s| {
            axes.iter()
                .map(|axis| {
                    let scaled = if max_value > 0.0 {
                        geometry.radius * axis.values[s] / max_value
                    } else {
                        0.0
                    };
                    geometry.polar(axis.angle, scaled)
                })
                .collect()
        })
        .collect();

    Ok(RadarLayout {
        geometry,
        max_value,
        axes,
        series,
    })
}

impl RadarLayout {
    pub fn series_path(&self, series: usize) -> Option<String> {
        let points = self.series.get(series)?;
        Some(closed_path(points))
    }

    pub fn grid_ring(&self, scale: f64) -> Vec<Point> {
        self.axes
            .iter()
            .map(|axis| self.geometry.polar(axis.angle, self.geometry.radius * scale))
            .collect()
    }

    pub fn grid_rings(&self) -> Vec<Vec<Point>> {
        GRID_SCALES.iter().map(|s| self.grid_ring(*s)).collect()
    }
}

pub fn closed_path(points: &[Point]) -> String {
    let mut out = String::new();
    for (i, p) in points.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{cmd}{},{}", p.x, p.y);
    }
    if !points.is_empty() {
        out.push('Z');
    }
    out
}
