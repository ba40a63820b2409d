use std::path::Path;

use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};
use wl4_game::Error;

pub const SETTINGS_VERSION: usize = 1;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct WorldSettings {
    #[serde(default = "default_version")]
    pub version: usize,
    #[serde(default)]
    pub name: Option<String>,
    // Jewel pieces (summed over quadrants) needed to reach an elemental passage's boss
    #[serde(default = "default_required_jewels")]
    pub required_jewels: usize,
    // Passage bosses that must be defeated before the golden pyramid opens
    #[serde(default = "default_required_bosses")]
    pub required_bosses: usize,
}

fn default_version() -> usize {
    SETTINGS_VERSION
}

fn default_required_jewels() -> usize {
    4
}

fn default_required_bosses() -> usize {
    5
}

impl Default for WorldSettings {
    fn default() -> Self {
        WorldSettings {
            version: default_version(),
            name: None,
            required_jewels: default_required_jewels(),
            required_bosses: default_required_bosses(),
        }
    }
}

impl WorldSettings {
    pub fn check(&self) -> wl4_game::Result<()> {
        if !(1..=4).contains(&self.required_jewels) {
            return Err(Error::InvalidRequiredJewels(self.required_jewels));
        }
        if !(1..=5).contains(&self.required_bosses) {
            return Err(Error::InvalidRequiredBosses(self.required_bosses));
        }
        Ok(())
    }
}

pub fn parse_settings(settings_str: &str) -> Result<WorldSettings> {
    let settings: WorldSettings =
        serde_json::from_str(settings_str).context("unable to parse settings")?;
    ensure!(
        settings.version <= SETTINGS_VERSION,
        "settings version {} is newer than supported version {}",
        settings.version,
        SETTINGS_VERSION
    );
    settings.check()?;
    Ok(settings)
}

pub fn load_settings(path: &Path) -> Result<WorldSettings> {
    let settings_str = std::fs::read_to_string(path)
        .with_context(|| format!("unable to read settings at {}", path.display()))?;
    parse_settings(&settings_str)
        .with_context(|| format!("invalid settings at {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let settings = parse_settings("{}").unwrap();
        assert_eq!(settings, WorldSettings::default());
        let settings = parse_settings(r#"{"required_jewels": 2, "name": "race"}"#).unwrap();
        assert_eq!(settings.required_jewels, 2);
        assert_eq!(settings.required_bosses, 5);
        assert_eq!(settings.name.as_deref(), Some("race"));
    }

    #[test]
    fn test_out_of_range_values_rejected() {
        let err = parse_settings(r#"{"required_jewels": 9}"#).unwrap_err();
        assert_eq!(
            err.downcast_ref::<Error>(),
            Some(&Error::InvalidRequiredJewels(9))
        );
        let err = parse_settings(r#"{"required_bosses": 0}"#).unwrap_err();
        assert_eq!(
            err.downcast_ref::<Error>(),
            Some(&Error::InvalidRequiredBosses(0))
        );
        assert!(parse_settings(r#"{"version": 99}"#).is_err());
        assert!(parse_settings("not json").is_err());
    }
}
