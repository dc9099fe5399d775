//! Application configuration
//!
//! Configuration is loaded from:
//! 1. Default values
//! 2. Config file (~/.config/compete/config.toml)
//! 3. Environment variables (COMPETE_* prefix)
//!
//! Environment variables take precedence over config file values.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::seed::DEFAULT_SEED;

/// Environment variable prefix
const ENV_PREFIX: &str = "COMPETE";

/// File name of the persisted theme preference inside the data directory
pub const THEME_FILE: &str = "edu-theme";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory for durable state (theme preference)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Seed for generated student data
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Simulated login latency in milliseconds
    #[serde(default = "default_login_delay_ms")]
    pub login_delay_ms: u64,

    /// Log filter directive (e.g. "warn", "compete_core=debug")
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            seed: default_seed(),
            login_delay_ms: default_login_delay_ms(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from default location and environment
    ///
    /// Order of precedence (highest to lowest):
    /// 1. Environment variables (COMPETE_DATA_DIR, COMPETE_SEED,
    ///    COMPETE_LOGIN_DELAY_MS, COMPETE_LOG_LEVEL)
    /// 2. Config file (~/.config/compete/config.toml or COMPETE_CONFIG)
    /// 3. Default values
    pub fn load() -> Result<Self> {
        Self::load_from_path(&Self::config_file_path())
    }

    /// Load configuration, preferring a path given on the command line
    pub fn load_with_cli_override(path: Option<&PathBuf>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from_path(path),
            None => Self::load(),
        }
    }

    /// Load configuration from a specific path
    ///
    /// Environment variables are still applied as overrides.
    /// If the file doesn't exist, defaults are used.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?
        } else {
            Self::default()
        };

        config.apply_env_overrides();
        config.ensure_data_dir()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (useful for testing)
    pub fn load_from_str(toml_content: &str) -> Result<Self> {
        let mut config: Config =
            toml::from_str(toml_content).context("Failed to parse config TOML")?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides
    ///
    /// Numeric values that fail to parse are ignored.
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var(format!("{}_DATA_DIR", ENV_PREFIX)) {
            self.data_dir = PathBuf::from(val);
        }

        if let Ok(val) = std::env::var(format!("{}_SEED", ENV_PREFIX)) {
            if let Ok(seed) = val.trim().parse() {
                self.seed = seed;
            }
        }

        if let Ok(val) = std::env::var(format!("{}_LOGIN_DELAY_MS", ENV_PREFIX)) {
            if let Ok(delay) = val.trim().parse() {
                self.login_delay_ms = delay;
            }
        }

        if let Ok(val) = std::env::var(format!("{}_LOG_LEVEL", ENV_PREFIX)) {
            if !val.is_empty() {
                self.log_level = val;
            }
        }
    }

    /// Ensure data directory exists
    fn ensure_data_dir(&self) -> Result<()> {
        if !self.data_dir.exists() {
            std::fs::create_dir_all(&self.data_dir)
                .with_context(|| format!("Failed to create data directory: {:?}", self.data_dir))?;
        }
        Ok(())
    }

    /// Save configuration to a specific file
    pub fn save_to_path(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(config_path, content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;
        Ok(())
    }

    /// Get the config file path
    ///
    /// Can be overridden with COMPETE_CONFIG environment variable
    pub fn config_file_path() -> PathBuf {
        if let Ok(path) = std::env::var(format!("{}_CONFIG", ENV_PREFIX)) {
            return PathBuf::from(path);
        }

        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("compete")
            .join("config.toml")
    }

    /// Get the path to the theme preference file
    pub fn theme_path(&self) -> PathBuf {
        self.data_dir.join(THEME_FILE)
    }

    /// Simulated login latency
    pub fn login_delay(&self) -> Duration {
        Duration::from_millis(self.login_delay_ms)
    }
}

/// Get the default data directory
fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("compete")
}

fn default_seed() -> u64 {
    DEFAULT_SEED
}

fn default_login_delay_ms() -> u64 {
    500
}

fn default_log_level() -> String {
    "warn".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;
    use tempfile::TempDir;

    // Mutex to serialize tests that touch environment variables
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    /// Guard that locks env access and saves/restores env vars
    struct EnvGuard<'a> {
        _lock: std::sync::MutexGuard<'a, ()>,
        saved: Vec<(String, Option<String>)>,
    }

    impl<'a> EnvGuard<'a> {
        fn new(vars: &[&str]) -> Self {
            let lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
            let saved = vars
                .iter()
                .map(|&name| (name.to_string(), env::var(name).ok()))
                .collect();
            for name in vars {
                env::remove_var(name);
            }
            Self { _lock: lock, saved }
        }
    }

    impl Drop for EnvGuard<'_> {
        fn drop(&mut self) {
            for (name, value) in &self.saved {
                match value {
                    Some(v) => env::set_var(name, v),
                    None => env::remove_var(name),
                }
            }
        }
    }

    const ENV_VARS: &[&str] = &[
        "COMPETE_DATA_DIR",
        "COMPETE_SEED",
        "COMPETE_LOGIN_DELAY_MS",
        "COMPETE_LOG_LEVEL",
    ];

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.seed, DEFAULT_SEED);
        assert_eq!(config.login_delay_ms, 500);
        assert_eq!(config.log_level, "warn");
        assert!(config.data_dir.ends_with("compete"));
    }

    #[test]
    fn test_file_paths() {
        let config = Config::default();
        assert!(config.theme_path().ends_with(THEME_FILE));
        assert_eq!(config.login_delay(), Duration::from_millis(500));
    }

    #[test]
    fn test_env_override_data_dir() {
        let _guard = EnvGuard::new(ENV_VARS);

        let mut config = Config::default();
        env::set_var("COMPETE_DATA_DIR", "/tmp/compete-test");
        config.apply_env_overrides();

        assert_eq!(config.data_dir, PathBuf::from("/tmp/compete-test"));
    }

    #[test]
    fn test_env_override_numbers() {
        let _guard = EnvGuard::new(ENV_VARS);

        let mut config = Config::default();
        env::set_var("COMPETE_SEED", "42");
        env::set_var("COMPETE_LOGIN_DELAY_MS", "10");
        config.apply_env_overrides();
        assert_eq!(config.seed, 42);
        assert_eq!(config.login_delay_ms, 10);

        // Garbage is ignored
        env::set_var("COMPETE_SEED", "not-a-number");
        config.apply_env_overrides();
        assert_eq!(config.seed, 42);
    }

    #[test]
    fn test_env_override_log_level() {
        let _guard = EnvGuard::new(ENV_VARS);

        let mut config = Config::default();
        env::set_var("COMPETE_LOG_LEVEL", "debug");
        config.apply_env_overrides();
        assert_eq!(config.log_level, "debug");

        // Empty string keeps the current value
        env::set_var("COMPETE_LOG_LEVEL", "");
        config.apply_env_overrides();
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_serialization() {
        let _guard = EnvGuard::new(ENV_VARS);

        let config = Config {
            data_dir: PathBuf::from("/data/compete"),
            seed: 7,
            login_delay_ms: 0,
            log_level: "info".to_string(),
        };

        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("data_dir"));
        assert!(toml_str.contains("login_delay_ms"));

        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.data_dir, config.data_dir);
        assert_eq!(parsed.seed, 7);
        assert_eq!(parsed.login_delay_ms, 0);
        assert_eq!(parsed.log_level, "info");
    }

    #[test]
    fn test_load_from_str_partial() {
        let _guard = EnvGuard::new(ENV_VARS);

        let config = Config::load_from_str("seed = 99").unwrap();
        assert_eq!(config.seed, 99);
        assert_eq!(config.login_delay_ms, 500);
    }

    #[test]
    fn test_load_from_path_missing_file() {
        let _guard = EnvGuard::new(ENV_VARS);
        let temp_dir = TempDir::new().unwrap();
        env::set_var("COMPETE_DATA_DIR", temp_dir.path().join("data"));

        let path = PathBuf::from("/nonexistent/config.toml");
        let config = Config::load_from_path(&path).unwrap();

        assert_eq!(config.seed, DEFAULT_SEED);
        assert!(config.data_dir.exists());
    }

    #[test]
    fn test_save_and_reload() {
        let _guard = EnvGuard::new(ENV_VARS);
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        let config = Config {
            data_dir: temp_dir.path().join("data"),
            seed: 3,
            login_delay_ms: 25,
            log_level: "debug".to_string(),
        };
        config.save_to_path(&path).unwrap();

        let loaded = Config::load_with_cli_override(Some(&path)).unwrap();
        assert_eq!(loaded.seed, 3);
        assert_eq!(loaded.login_delay_ms, 25);
        assert_eq!(loaded.data_dir, temp_dir.path().join("data"));
    }
}
