use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Persisted color preference for the dashboard. Defaults to dark when no
/// preference has been saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggle(&self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn load() -> Theme {
        let saved = Self::path().and_then(|path| fs::read_to_string(path).ok());
        match saved.as_deref().map(str::trim) {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::path().context("No config directory available")?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, self.as_str())
            .with_context(|| format!("Failed to save theme to {}", path.display()))?;
        Ok(())
    }

    fn path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "apptrack")
            .map(|dirs| dirs.config_dir().join("theme"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_alternates() {
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
    }
}
