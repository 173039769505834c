use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::models::daily::{DEFAULT_DHIKR_COUNT, DEFAULT_QURAN_PAGES, DEFAULT_STUDY_MINUTES};
use crate::models::DailyTaskState;

fn default_quran_pages() -> u32 {
    DEFAULT_QURAN_PAGES
}
fn default_study_minutes() -> u32 {
    DEFAULT_STUDY_MINUTES
}
fn default_dhikr_count() -> u32 {
    DEFAULT_DHIKR_COUNT
}
fn default_one() -> u32 {
    1
}
fn default_study_step() -> u32 {
    5
}
fn default_dhikr_burst() -> u32 {
    10
}
fn default_hijri_offset() -> i32 {
    0
}
fn default_tick_rate_ms() -> u64 {
    1000
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetsConfig {
    #[serde(default = "default_quran_pages")]
    pub quran_pages: u32,
    #[serde(default = "default_study_minutes")]
    pub study_minutes: u32,
    #[serde(default = "default_dhikr_count")]
    pub dhikr_count: u32,
}

impl Default for TargetsConfig {
    fn default() -> Self {
        Self {
            quran_pages: default_quran_pages(),
            study_minutes: default_study_minutes(),
            dhikr_count: default_dhikr_count(),
        }
    }
}

/// How far one keypress moves each counter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepsConfig {
    #[serde(default = "default_one")]
    pub quran_pages: u32,
    #[serde(default = "default_study_step")]
    pub study_minutes: u32,
    #[serde(default = "default_one")]
    pub dhikr: u32,
    #[serde(default = "default_dhikr_burst")]
    pub dhikr_burst: u32,
}

impl Default for StepsConfig {
    fn default() -> Self {
        Self {
            quran_pages: default_one(),
            study_minutes: default_study_step(),
            dhikr: default_one(),
            dhikr_burst: default_dhikr_burst(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Days to add/subtract from the Hijri date for local moon sighting.
    #[serde(default = "default_hijri_offset")]
    pub hijri_offset: i32,
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            hijri_offset: default_hijri_offset(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub targets: TargetsConfig,
    #[serde(default)]
    pub steps: StepsConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

fn at_least_one(field: &str, value: &mut u32) {
    if *value == 0 {
        log::warn!("config: {} must be positive, using 1", field);
        *value = 1;
    }
}

impl AppConfig {
    fn project_dirs() -> Result<ProjectDirs> {
        ProjectDirs::from("", "", "deen-tracker")
            .context("Could not determine project directories")
    }

    pub fn config_path() -> Result<PathBuf> {
        let dirs = Self::project_dirs()?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("no config at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        let content =
            std::fs::read_to_string(path).with_context(|| format!("Reading {:?}", path))?;
        let config: AppConfig = toml::from_str(&content).context("Parsing config.toml")?;
        Ok(config.normalized())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self).context("Serializing config")?;
        std::fs::write(path, content).with_context(|| format!("Writing {:?}", path))?;
        Ok(())
    }

    /// Targets and steps of zero would make a goal trivially complete or a
    /// key do nothing, so they are raised to 1.
    pub fn normalized(mut self) -> Self {
        at_least_one("targets.quran_pages", &mut self.targets.quran_pages);
        at_least_one("targets.study_minutes", &mut self.targets.study_minutes);
        at_least_one("targets.dhikr_count", &mut self.targets.dhikr_count);
        at_least_one("steps.quran_pages", &mut self.steps.quran_pages);
        at_least_one("steps.study_minutes", &mut self.steps.study_minutes);
        at_least_one("steps.dhikr", &mut self.steps.dhikr);
        at_least_one("steps.dhikr_burst", &mut self.steps.dhikr_burst);
        self
    }

    pub fn initial_state(&self) -> DailyTaskState {
        DailyTaskState::with_targets(
            self.targets.quran_pages,
            self.targets.study_minutes,
            self.targets.dhikr_count,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.steps.study_minutes, 5);
        assert_eq!(config.steps.dhikr_burst, 10);
    }

    #[test]
    fn partial_file_fills_remaining_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[targets]\nquran_pages = 10\n\n[display]\nhijri_offset = -1\n")
            .unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.targets.quran_pages, 10);
        assert_eq!(config.targets.study_minutes, 30);
        assert_eq!(config.display.hijri_offset, -1);
        assert_eq!(config.display.tick_rate_ms, 1000);

        let state = config.initial_state();
        assert_eq!(state.quran_reading.target(), 10);
        assert_eq!(state.dhikr.target(), 100);
    }

    #[test]
    fn zero_targets_are_normalized() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[targets]\ndhikr_count = 0\n[steps]\nstudy_minutes = 0\n").unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.targets.dhikr_count, 1);
        assert_eq!(config.steps.study_minutes, 1);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[targets\nquran_pages = ").unwrap();
        assert!(AppConfig::load_from(&path).is_err());
    }

    #[test]
    fn save_then_load_keeps_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut config = AppConfig::default();
        config.targets.study_minutes = 60;
        config.save_to(&path).unwrap();
        assert_eq!(AppConfig::load_from(&path).unwrap(), config);
    }
}
