use serde::Deserialize;
use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

fn default_tick_rate_ms() -> u64 {
    100
}

fn default_max_column_width() -> usize {
    50
}

/// Presentation settings, read from `~/.renters-tui/config.json`
///
/// Every field is optional in the file; defaults apply when the file or a
/// field is absent.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Event polling timeout in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Maximum rendered width of a table column
    #[serde(default = "default_max_column_width")]
    pub max_column_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            max_column_width: default_max_column_width(),
        }
    }
}

impl Config {
    fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".renters-tui"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    /// Load the config from disk, or `None` if missing or unreadable
    pub fn load() -> Option<Config> {
        let config_path = Self::config_path()?;
        if !config_path.exists() {
            return None;
        }

        let contents = fs::read_to_string(&config_path).ok()?;
        serde_json::from_str(&contents).ok()
    }

    /// Event polling timeout as a `Duration`
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.tick_rate_ms, 100);
        assert_eq!(config.max_column_width, 50);
        assert_eq!(config.tick_rate(), Duration::from_millis(100));
    }

    #[test]
    fn test_partial_file_falls_back_to_defaults() {
        let config: Config = serde_json::from_str(r#"{"tick_rate_ms": 250}"#).unwrap();
        assert_eq!(config.tick_rate_ms, 250);
        assert_eq!(config.max_column_width, 50);
    }

    #[test]
    fn test_empty_object_parses() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.tick_rate_ms, Config::default().tick_rate_ms);
    }
}
