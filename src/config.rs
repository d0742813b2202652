//! Panel and clock configuration: TOML with defaults for every field.

use crate::engine::DEFAULT_HISTORY_LIMIT;
use crate::error::ConfigError;
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Whether the tracker counts from the start of the session. Default: true.
    #[serde(default = "default_true")]
    pub tracking_on_start: bool,

    /// Transitions kept in the engine history. 0 keeps none. Default: 64.
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,

    #[serde(default)]
    pub clock: ClockConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClockConfig {
    /// Milliseconds between ticks. Default: 1000.
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,

    /// chrono strftime format used for display. Default: "%H:%M:%S".
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_true() -> bool {
    true
}
fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}
fn default_tick_ms() -> u64 {
    1000
}
fn default_format() -> String {
    "%H:%M:%S".into()
}

impl Default for PanelConfig {
    fn default() -> Self {
        PanelConfig {
            tracking_on_start: true,
            history_limit: default_history_limit(),
            clock: ClockConfig::default(),
        }
    }
}

impl Default for ClockConfig {
    fn default() -> Self {
        ClockConfig {
            tick_ms: default_tick_ms(),
            format: default_format(),
        }
    }
}

impl ClockConfig {
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

impl PanelConfig {
    /// Parse and validate a TOML document. Missing fields take defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: PanelConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from `path`, or return defaults if the file does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Like [`PanelConfig::load`], but falls back to defaults on any error.
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            log::warn!("{e}; using default config");
            Self::default()
        })
    }

    /// Check every field, reporting all problems at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut problems = Vec::new();

        if self.clock.tick_ms == 0 {
            problems.push("clock.tick_ms must be greater than 0".to_string());
        }
        if self.clock.format.trim().is_empty() {
            problems.push("clock.format cannot be empty".to_string());
        } else if StrftimeItems::new(&self.clock.format).any(|item| matches!(item, Item::Error)) {
            problems.push(format!(
                "clock.format {:?} is not a valid strftime pattern",
                self.clock.format
            ));
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Invalid(problems))
        }
    }

    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_document_uses_defaults() {
        let config = PanelConfig::from_toml_str("").unwrap();
        assert_eq!(config, PanelConfig::default());
        assert!(config.tracking_on_start);
        assert_eq!(config.history_limit, 64);
        assert_eq!(config.clock.tick(), Duration::from_secs(1));
    }

    #[test]
    fn partial_document_overrides_fields() {
        let config = PanelConfig::from_toml_str(
            r#"
            tracking_on_start = false

            [clock]
            tick_ms = 250
            "#,
        )
        .unwrap();

        assert!(!config.tracking_on_start);
        assert_eq!(config.history_limit, 64);
        assert_eq!(config.clock.tick_ms, 250);
        assert_eq!(config.clock.format, "%H:%M:%S");
    }

    #[test]
    fn validation_reports_every_problem() {
        let err = PanelConfig::from_toml_str(
            r#"
            [clock]
            tick_ms = 0
            format = "  "
            "#,
        )
        .unwrap_err();

        match err {
            ConfigError::Invalid(problems) => assert_eq!(problems.len(), 2),
            other => panic!("expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn bad_strftime_pattern_is_invalid() {
        let err = PanelConfig::from_toml_str("[clock]\nformat = \"%H %\"").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(ref p) if p.len() == 1));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = PanelConfig::from_toml_str("history_limit = \"many\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = PanelConfig::load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, PanelConfig::default());
    }

    #[test]
    fn load_reads_file_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledlab.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "history_limit = 3").unwrap();

        let config = PanelConfig::load(&path).unwrap();
        assert_eq!(config.history_limit, 3);
    }

    #[test]
    fn load_or_default_swallows_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "[clock\n").unwrap();

        assert_eq!(PanelConfig::load_or_default(&path), PanelConfig::default());
    }

    #[test]
    fn toml_round_trip() {
        let config = PanelConfig {
            tracking_on_start: false,
            history_limit: 5,
            clock: ClockConfig {
                tick_ms: 100,
                format: "%T".into(),
            },
        };
        let text = config.to_toml_string().unwrap();
        assert_eq!(PanelConfig::from_toml_str(&text).unwrap(), config);
    }
}
