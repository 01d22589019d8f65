use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

const SETTINGS_DIR: &str = "hoops_dash";
const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark(dark: bool) -> Self {
        if dark { Theme::Dark } else { Theme::Light }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct SettingsFile {
    #[serde(rename = "darkMode", default, skip_serializing_if = "Option::is_none")]
    dark_mode: Option<bool>,
}

/// Single persisted flag: read once at startup, rewritten on every change.
#[derive(Debug, Clone)]
pub struct ThemeStore {
    path: PathBuf,
    current: Option<Theme>,
}

impl ThemeStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            current: None,
        }
    }

    pub fn open_default() -> Option<Self> {
        Self::default_path().map(Self::open)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `$XDG_CONFIG_HOME/hoops_dash/settings.json`, else `~/.config/hoops_dash/settings.json`.
    /// An explicit override comes from `DashConfig::settings_path`.
    pub fn default_path() -> Option<PathBuf> {
        settings_path_from(|key| std::env::var(key).ok())
    }

    /// Returns the saved theme, or the system preference when nothing was saved.
    /// The fallback is not written back.
    pub fn load(&mut self, system_prefers_dark: impl FnOnce() -> bool) -> Theme {
        if let Some(theme) = self.current {
            return theme;
        }
        let theme = match self.read_saved() {
            Some(dark) => Theme::from_dark(dark),
            None => Theme::from_dark(system_prefers_dark()),
        };
        tracing::debug!(theme = theme.label(), path = %self.path.display(), "loaded theme");
        self.current = Some(theme);
        theme
    }

    pub fn set(&mut self, theme: Theme) -> Result<()> {
        self.write_saved(theme.is_dark())?;
        self.current = Some(theme);
        Ok(())
    }

    pub fn toggle(&mut self, system_prefers_dark: impl FnOnce() -> bool) -> Result<Theme> {
        let next = self.load(system_prefers_dark).toggled();
        self.set(next)?;
        Ok(next)
    }

    fn read_saved(&self) -> Option<bool> {
        let raw = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str::<SettingsFile>(&raw) {
            Ok(settings) => settings.dark_mode,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), %err, "ignoring unreadable settings");
                None
            }
        }
    }

    fn write_saved(&self, dark: bool) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create settings dir {}", parent.display()))?;
        }
        let settings = SettingsFile {
            dark_mode: Some(dark),
        };
        let json = serde_json::to_string(&settings).context("serialize settings")?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).context("write settings")?;
        fs::rename(&tmp, &self.path).context("swap settings")?;
        Ok(())
    }
}

fn settings_path_from(lookup: impl Fn(&str) -> Option<String>) -> Option<PathBuf> {
    let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
    // Prefer XDG config.
    if let Some(base) = non_empty("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(base).join(SETTINGS_DIR).join(SETTINGS_FILE));
    }
    let home = non_empty("HOME")?;
    Some(
        PathBuf::from(home)
            .join(".config")
            .join(SETTINGS_DIR)
            .join(SETTINGS_FILE),
    )
}

/// Best-effort OS/terminal dark preference.
pub fn system_prefers_dark() -> bool {
    if let Ok(raw) = std::env::var("HOOPS_DASH_THEME") {
        match raw.trim().to_ascii_lowercase().as_str() {
            "dark" => return true,
            "light" => return false,
            "" => {}
            other => tracing::warn!(value = other, "unknown HOOPS_DASH_THEME value"),
        }
    }
    std::env::var("COLORFGBG")
        .ok()
        .and_then(|v| colorfgbg_is_dark(&v))
        .unwrap_or(false)
}

/// `COLORFGBG` is `fg;bg` (sometimes `fg;default;bg`); the last field is the
/// background palette index.
fn colorfgbg_is_dark(raw: &str) -> Option<bool> {
    let bg = raw.rsplit(';').next()?.trim().parse::<u8>().ok()?;
    Some(bg <= 6 || bg == 8)
}
