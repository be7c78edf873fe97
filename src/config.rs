//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArcadeConfig {
    /// Fixed shuffle seed; random when unset
    #[serde(default)]
    pub seed: Option<u64>,

    #[serde(default)]
    pub tournament: TournamentConfig,

    #[serde(default)]
    pub memory: MemoryConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Image tournament configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TournamentConfig {
    #[serde(default = "default_show_names")]
    pub show_names: bool,

    #[serde(default = "default_settle_delay")]
    pub settle_delay_ms: u64,
}

fn default_show_names() -> bool {
    true
}

fn default_settle_delay() -> u64 {
    1200
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            show_names: default_show_names(),
            settle_delay_ms: default_settle_delay(),
        }
    }
}

impl TournamentConfig {
    /// Delay between picking a winner and showing the next pair
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }
}

/// Memory game configuration
#[derive(Debug, Clone, Deserialize)]
pub struct MemoryConfig {
    #[serde(default = "default_max_auto_pairs")]
    pub max_auto_pairs: usize,

    #[serde(default = "default_match_delay")]
    pub match_delay_ms: u64,

    #[serde(default = "default_mismatch_delay")]
    pub mismatch_delay_ms: u64,

    #[serde(default = "default_result_delay")]
    pub result_delay_ms: u64,
}

fn default_max_auto_pairs() -> usize {
    10 // 20 cards
}

fn default_match_delay() -> u64 {
    500
}

fn default_mismatch_delay() -> u64 {
    1000
}

fn default_result_delay() -> u64 {
    1000
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            max_auto_pairs: default_max_auto_pairs(),
            match_delay_ms: default_match_delay(),
            mismatch_delay_ms: default_mismatch_delay(),
            result_delay_ms: default_result_delay(),
        }
    }
}

impl MemoryConfig {
    pub fn match_delay(&self) -> Duration {
        Duration::from_millis(self.match_delay_ms)
    }

    pub fn mismatch_delay(&self) -> Duration {
        Duration::from_millis(self.mismatch_delay_ms)
    }

    pub fn result_delay(&self) -> Duration {
        Duration::from_millis(self.result_delay_ms)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl ArcadeConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = ArcadeConfig::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("classroom-arcade").join("config.toml")),
            Some(PathBuf::from("./arcade.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::debug!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        if let Ok(seed) = std::env::var("ARCADE_SEED") {
            if let Ok(s) = seed.parse() {
                self.seed = Some(s);
            }
        }

        if let Ok(show) = std::env::var("ARCADE_SHOW_NAMES") {
            if let Ok(b) = show.parse() {
                self.tournament.show_names = b;
            }
        }

        if let Ok(pairs) = std::env::var("ARCADE_MAX_PAIRS") {
            if let Ok(n) = pairs.parse() {
                self.memory.max_auto_pairs = n;
            }
        }

        if let Ok(level) = std::env::var("ARCADE_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("ARCADE_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Classroom Arcade Configuration
#
# Environment variables override these settings:
# - ARCADE_SEED
# - ARCADE_SHOW_NAMES
# - ARCADE_MAX_PAIRS
# - ARCADE_LOG_LEVEL
# - ARCADE_LOG_FORMAT

# Fixed shuffle seed (omit for a fresh shuffle every game)
# seed = 42

[tournament]
# Show candidate names under the images
show_names = true

# Pause after picking a winner before the next pair (ms)
settle_delay_ms = 1200

[memory]
# Maximum number of image pairs used in auto mode
max_auto_pairs = 10

# Pause before a matched pair locks in (ms)
match_delay_ms = 500

# Pause before a mismatched pair flips back (ms)
mismatch_delay_ms = 1000

# Pause between the last match and the result screen (ms)
result_delay_ms = 1000

[logging]
# Log level: trace, debug, info, warn, error
level = "warn"

# Log format: pretty or json
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ArcadeConfig::default();
        assert!(config.seed.is_none());
        assert!(config.tournament.show_names);
        assert_eq!(config.tournament.settle_delay(), Duration::from_millis(1200));
        assert_eq!(config.memory.max_auto_pairs, 10);
        assert_eq!(config.memory.match_delay(), Duration::from_millis(500));
        assert_eq!(config.memory.mismatch_delay(), Duration::from_millis(1000));
    }

    #[test]
    fn test_generated_config_parses() {
        let config = ArcadeConfig::parse(&generate_default_config()).unwrap();
        assert_eq!(config.memory.result_delay_ms, 1000);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "seed = 7\n[memory]\nmax_auto_pairs = 4").unwrap();

        let config = ArcadeConfig::load(file.path()).unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.memory.max_auto_pairs, 4);
        assert_eq!(config.memory.match_delay_ms, 500);
        assert!(config.tournament.show_names);
    }

    #[test]
    fn test_load_errors() {
        let missing = ArcadeConfig::load(Path::new("/nonexistent/arcade.toml"));
        assert!(matches!(missing, Err(ConfigError::Io { .. })));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[memory\nmax_auto_pairs = ").unwrap();
        let broken = ArcadeConfig::load(file.path());
        assert!(matches!(broken, Err(ConfigError::Parse { .. })));
    }
}
