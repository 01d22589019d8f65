use std::path::PathBuf;
use std::str::FromStr;

use crate::rolling::DEFAULT_ROLLING_WINDOW;
use crate::shot_cluster::ClusterConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct DashConfig {
    pub cluster: ClusterConfig,
    pub rolling_window: usize,
    pub settings_path: Option<PathBuf>,
}

impl Default for DashConfig {
    fn default() -> Self {
        Self {
            cluster: ClusterConfig::default(),
            rolling_window: DEFAULT_ROLLING_WINDOW,
            settings_path: None,
        }
    }
}

impl DashConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset or unparsable values keep
    /// their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let d = Self::default();
        let radius = parse_var(&lookup, "SHOT_CLUSTER_RADIUS")
            .filter(|r: &f64| r.is_finite() && *r > 0.0)
            .unwrap_or(d.cluster.radius);
        let min_radius = parse_var(&lookup, "SHOT_CLUSTER_MIN_RADIUS")
            .filter(|r: &f64| r.is_finite() && *r >= 0.0)
            .unwrap_or(d.cluster.min_radius);
        let rolling_window = parse_var::<usize>(&lookup, "ROLLING_WINDOW")
            .unwrap_or(d.rolling_window)
            .max(1);
        let settings_path = lookup("HOOPS_DASH_SETTINGS")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        Self {
            cluster: ClusterConfig { radius, min_radius },
            rolling_window,
            settings_path,
        }
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse::<T>() {
        Ok(v) => Some(v),
        Err(_) => {
            tracing::warn!(key, value = %raw, "ignoring unparsable config value");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_match_heat_map_constants() {
        let cfg = DashConfig::from_lookup(|_| None);
        assert_eq!(cfg.cluster.radius, 40.0);
        assert_eq!(cfg.cluster.min_radius, 20.0);
        assert_eq!(cfg.rolling_window, 5);
        assert!(cfg.settings_path.is_none());
    }

    #[test]
    fn overrides_and_bad_values() {
        let cfg = DashConfig::from_lookup(lookup_from(&[
            ("SHOT_CLUSTER_RADIUS", "55.5"),
            ("SHOT_CLUSTER_MIN_RADIUS", "nope"),
            ("ROLLING_WINDOW", "0"),
            ("HOOPS_DASH_SETTINGS", "/tmp/s.json"),
        ]));
        assert_eq!(cfg.cluster.radius, 55.5);
        assert_eq!(cfg.cluster.min_radius, 20.0);
        assert_eq!(cfg.rolling_window, 1);
        assert_eq!(cfg.settings_path, Some(PathBuf::from("/tmp/s.json")));
    }

    #[test]
    fn negative_radius_falls_back() {
        let cfg = DashConfig::from_lookup(lookup_from(&[("SHOT_CLUSTER_RADIUS", "-4")]));
        assert_eq!(cfg.cluster.radius, 40.0);
    }
}
