//! Calendar behavior configuration.

use std::path::Path;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::{CalendarError, CalendarResult};

fn default_recency_window_days() -> i64 {
    30
}

fn default_year_rollover() -> bool {
    true
}

fn default_reminder_time() -> NaiveTime {
    // 07:00 is always a valid wall-clock time
    NaiveTime::from_hms_opt(7, 0, 0).unwrap()
}

/// Configuration for the crop calendar core.
///
/// Stored as TOML when the embedding application persists it; all fields
/// have defaults so an absent or partial file still loads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarConfig {
    /// How many days into the past a materialized activity stays visible,
    /// so a farmer who opens the app late still sees recently missed tasks.
    #[serde(default = "default_recency_window_days")]
    pub recency_window_days: i64,

    /// Also generate next-year candidates, so activities keep appearing
    /// across the year boundary. Disable to restrict materialization to the
    /// current calendar year.
    #[serde(default = "default_year_rollover")]
    pub year_rollover: bool,

    /// Wall-clock time of day at which reminder notifications fire.
    #[serde(default = "default_reminder_time")]
    pub reminder_time: NaiveTime,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        CalendarConfig {
            recency_window_days: default_recency_window_days(),
            year_rollover: default_year_rollover(),
            reminder_time: default_reminder_time(),
        }
    }
}

impl CalendarConfig {
    /// Load config from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load(path: &Path) -> CalendarResult<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            toml::from_str(&content).map_err(|e| CalendarError::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save config as TOML, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> CalendarResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| CalendarError::Config(e.to_string()))?;

        std::fs::write(path, content)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_policy() {
        let config = CalendarConfig::default();
        assert_eq!(config.recency_window_days, 30);
        assert!(config.year_rollover);
        assert_eq!(
            config.reminder_time,
            NaiveTime::from_hms_opt(7, 0, 0).unwrap()
        );
    }

    #[test]
    fn toml_round_trip_preserves_fields() {
        let config = CalendarConfig {
            recency_window_days: 14,
            year_rollover: false,
            reminder_time: NaiveTime::from_hms_opt(6, 30, 0).unwrap(),
        };

        let toml = toml::to_string_pretty(&config).unwrap();
        let reparsed: CalendarConfig = toml::from_str(&toml).unwrap();
        assert_eq!(reparsed.recency_window_days, 14);
        assert!(!reparsed.year_rollover);
        assert_eq!(reparsed.reminder_time, config.reminder_time);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let config: CalendarConfig = toml::from_str("recency_window_days = 7\n").unwrap();
        assert_eq!(config.recency_window_days, 7);
        assert!(config.year_rollover);
    }

    #[test]
    fn missing_file_loads_defaults() {
        let config = CalendarConfig::load(Path::new("/nonexistent/cropcal/config.toml")).unwrap();
        assert_eq!(config.recency_window_days, 30);
    }
}
