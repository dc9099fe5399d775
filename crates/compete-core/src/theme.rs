//! Theme preference
//!
//! The light/dark choice is the only state that survives a restart. It is a
//! single file holding `light` or `dark`, read once at startup and rewritten
//! on every toggle. Writes go to a temp file first and are renamed into place.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Display theme
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The other theme
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Parse a stored value; anything unrecognized is `None`
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Current theme plus where it is persisted
#[derive(Debug, Clone, Default)]
pub struct ThemePreference {
    theme: Theme,
    path: Option<PathBuf>,
}

impl ThemePreference {
    /// Preference that is never written to disk
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Load the preference stored at `path`
    ///
    /// A missing, unreadable, or unrecognized file yields the light theme.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let theme = match fs::read_to_string(&path) {
            Ok(content) => Theme::parse(&content).unwrap_or_else(|| {
                warn!("Ignoring unrecognized theme value in {:?}", path);
                Theme::default()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Theme::default(),
            Err(e) => {
                warn!("Could not read theme file {:?}: {}", path, e);
                Theme::default()
            }
        };

        Self {
            theme,
            path: Some(path),
        }
    }

    /// The theme currently in effect
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Where the preference is stored, if anywhere
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Switch to the other theme and persist it
    ///
    /// The in-memory theme only changes once the write succeeded.
    pub fn toggle(&mut self) -> Result<Theme> {
        let next = self.theme.toggled();
        if let Some(ref path) = self.path {
            atomic_write(path, next.as_str().as_bytes())
                .with_context(|| format!("Failed to save theme to {:?}", path))?;
        }
        self.theme = next;
        info!("Theme set to {}", next);
        Ok(next)
    }
}

/// Write data to a file atomically
///
/// Writes a sibling temp file, syncs it, then renames it over the target.
fn atomic_write(path: &Path, data: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {:?}", parent))?;
    }

    let temp_path = path.with_extension("tmp");
    let mut file = File::create(&temp_path)
        .with_context(|| format!("Failed to create temp file {:?}", temp_path))?;
    file.write_all(data)
        .with_context(|| format!("Failed to write to temp file {:?}", temp_path))?;
    file.sync_all()
        .with_context(|| format!("Failed to sync temp file {:?}", temp_path))?;

    fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to rename {:?} to {:?}", temp_path, path))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_defaults_to_light() {
        let temp_dir = TempDir::new().unwrap();
        let pref = ThemePreference::load(temp_dir.path().join("edu-theme"));
        assert_eq!(pref.theme(), Theme::Light);
    }

    #[test]
    fn test_garbage_defaults_to_light() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("edu-theme");
        fs::write(&path, "purple").unwrap();

        assert_eq!(ThemePreference::load(&path).theme(), Theme::Light);
    }

    #[test]
    fn test_loads_stored_dark() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("edu-theme");
        fs::write(&path, "dark\n").unwrap();

        assert_eq!(ThemePreference::load(&path).theme(), Theme::Dark);
    }

    #[test]
    fn test_toggle_persists() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("edu-theme");

        let mut pref = ThemePreference::load(&path);
        assert_eq!(pref.toggle().unwrap(), Theme::Dark);
        assert_eq!(fs::read_to_string(&path).unwrap(), "dark");

        // A fresh load sees the stored value
        assert_eq!(ThemePreference::load(&path).theme(), Theme::Dark);
    }

    #[test]
    fn test_double_toggle_restores_theme_and_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("edu-theme");
        fs::write(&path, "light").unwrap();

        let mut pref = ThemePreference::load(&path);
        let original = pref.theme();
        let stored = fs::read_to_string(&path).unwrap();

        pref.toggle().unwrap();
        pref.toggle().unwrap();

        assert_eq!(pref.theme(), original);
        assert_eq!(fs::read_to_string(&path).unwrap(), stored);
    }

    #[test]
    fn test_in_memory_toggle() {
        let mut pref = ThemePreference::in_memory();
        assert!(pref.path().is_none());
        pref.toggle().unwrap();
        assert_eq!(pref.theme(), Theme::Dark);
    }

    #[test]
    fn test_theme_serialization() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }
}
