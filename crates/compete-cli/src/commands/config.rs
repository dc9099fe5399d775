//! Config command handlers

use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use compete_core::Config;

use crate::output::{Output, OutputFormat};

/// Show current configuration
pub fn show(config_path: Option<&PathBuf>, output: &Output) -> Result<()> {
    let config =
        Config::load_with_cli_override(config_path).context("Failed to load configuration")?;

    match output.format {
        OutputFormat::Json => output.print_json(&config),
        OutputFormat::Quiet => println!("{}", config.data_dir.display()),
        OutputFormat::Human => {
            let effective_path = config_path
                .cloned()
                .unwrap_or_else(Config::config_file_path);
            println!("Configuration:");
            println!("  data_dir:       {}", config.data_dir.display());
            println!("  seed:           {}", config.seed);
            println!("  login_delay_ms: {}", config.login_delay_ms);
            println!("  log_level:      {}", config.log_level);
            println!();
            println!("Config file: {}", effective_path.display());
        }
    }

    Ok(())
}

/// Set a configuration value
pub fn set(
    key: String,
    value: String,
    config_path: Option<&PathBuf>,
    output: &Output,
) -> Result<()> {
    let mut config =
        Config::load_with_cli_override(config_path).context("Failed to load configuration")?;

    apply(&mut config, &key, &value)?;

    let save_path = config_path
        .cloned()
        .unwrap_or_else(Config::config_file_path);
    config
        .save_to_path(&save_path)
        .context("Failed to save configuration")?;

    output.success(&format!("Set {} = {}", key, value));

    Ok(())
}

fn apply(config: &mut Config, key: &str, value: &str) -> Result<()> {
    match key {
        "data_dir" => config.data_dir = value.into(),
        "seed" => {
            config.seed = value
                .parse()
                .context("Invalid value for seed. Use a non-negative integer.")?;
        }
        "login_delay_ms" => {
            config.login_delay_ms = value
                .parse()
                .context("Invalid value for login_delay_ms. Use milliseconds.")?;
        }
        "log_level" => {
            if value.trim().is_empty() {
                bail!("log_level cannot be empty");
            }
            config.log_level = value.to_string();
        }
        _ => {
            bail!(
                "Unknown configuration key: '{}'\n\
                 Valid keys: data_dir, seed, login_delay_ms, log_level",
                key
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_apply_known_keys() {
        let mut config = Config::default();

        apply(&mut config, "seed", "7").unwrap();
        apply(&mut config, "login_delay_ms", "0").unwrap();
        apply(&mut config, "log_level", "compete_core=debug").unwrap();
        apply(&mut config, "data_dir", "/tmp/compete").unwrap();

        assert_eq!(config.seed, 7);
        assert_eq!(config.login_delay_ms, 0);
        assert_eq!(config.log_level, "compete_core=debug");
        assert_eq!(config.data_dir, PathBuf::from("/tmp/compete"));
    }

    #[test]
    fn test_apply_rejects_bad_values() {
        let mut config = Config::default();

        assert!(apply(&mut config, "seed", "many").is_err());
        assert!(apply(&mut config, "login_delay_ms", "-1").is_err());
        assert!(apply(&mut config, "log_level", "  ").is_err());
        assert!(apply(&mut config, "sync_url", "ws://x").is_err());
    }

    #[test]
    fn test_set_writes_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        let data_dir = temp_dir.path().join("data");
        std::fs::write(
            &path,
            format!("data_dir = {:?}\n", data_dir.display().to_string()),
        )
        .unwrap();

        let output = Output::new(OutputFormat::Quiet);
        set("seed".to_string(), "99".to_string(), Some(&path), &output).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("seed = 99"));
    }
}
