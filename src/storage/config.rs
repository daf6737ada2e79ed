use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ui::theme::{Theme, ThemeError};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),
    #[error("Invalid theme override: {0}")]
    ThemeError(#[from] ThemeError),
    #[error("Invalid first day of week {0:?}, expected Sunday or Monday")]
    FirstDayOfWeek(String),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub ui: UiConfig,
    #[serde(default)]
    pub theme_overrides: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UiConfig {
    pub theme: String,
    #[serde(default)]
    pub fade_others: bool,
    pub first_day_of_week: String,
}

impl Config {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }

    pub fn load_or_create() -> Result<Self, ConfigError> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self::default();
            config.save_to(&config_path)?;
            Ok(config)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("daymark")
    }

    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Named preset with `fade_others` and token overrides applied.
    pub fn theme(&self) -> Result<Theme, ConfigError> {
        let theme = Theme::get_by_name(&self.ui.theme)
            .with_fade_others(self.ui.fade_others)
            .with_overrides(&self.theme_overrides)?;
        Ok(theme)
    }

    pub fn first_day_of_week(&self) -> Result<Weekday, ConfigError> {
        match self.ui.first_day_of_week.to_lowercase().as_str() {
            "sunday" | "sun" => Ok(Weekday::Sun),
            "monday" | "mon" => Ok(Weekday::Mon),
            _ => Err(ConfigError::FirstDayOfWeek(self.ui.first_day_of_week.clone())),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ui: UiConfig {
                theme: "default".to_string(),
                fade_others: false,
                first_day_of_week: "Sunday".to_string(),
            },
            theme_overrides: BTreeMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use ratatui::style::Color;

    #[test]
    fn default_config_uses_default_theme() {
        let config = Config::default();
        assert_eq!(config.theme().unwrap(), Theme::default());
    }

    #[test]
    fn default_week_starts_on_sunday() {
        assert_eq!(Config::default().first_day_of_week().unwrap(), Weekday::Sun);
    }

    #[test]
    fn parse_valid_toml_config() {
        let toml_content = r##"
            [ui]
            theme = "dark"
            fade_others = true
            first_day_of_week = "Monday"

            [theme_overrides]
            calendar_background = "#000000"
        "##;

        let config = Config::from_toml(toml_content).unwrap();
        let theme = config.theme().unwrap();

        assert_eq!(theme.name, "dark");
        assert!(theme.fade_others);
        assert_eq!(theme.calendar_background, Color::Rgb(0, 0, 0));
        assert_eq!(config.first_day_of_week().unwrap(), Weekday::Mon);
    }

    #[test]
    fn overrides_and_fade_others_are_optional() {
        let toml_content = r#"
            [ui]
            theme = "default"
            first_day_of_week = "Sunday"
        "#;

        let config = Config::from_toml(toml_content).unwrap();
        assert!(!config.ui.fade_others);
        assert!(config.theme_overrides.is_empty());
    }

    #[test]
    fn parse_invalid_toml_returns_error() {
        let invalid_toml = "this is not valid toml";
        assert!(matches!(Config::from_toml(invalid_toml), Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn unknown_override_token_is_reported() {
        let mut config = Config::default();
        config
            .theme_overrides
            .insert("background".to_string(), "#ffffff".to_string());
        assert!(matches!(config.theme(), Err(ConfigError::ThemeError(ThemeError::UnknownToken(_)))));
    }

    #[test]
    fn invalid_first_day_of_week_is_reported() {
        let mut config = Config::default();
        config.ui.first_day_of_week = "Wednesday".to_string();
        assert!(matches!(config.first_day_of_week(), Err(ConfigError::FirstDayOfWeek(_))));
    }

    #[test]
    fn saved_config_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut config = Config::default();
        config.ui.fade_others = true;
        config
            .theme_overrides
            .insert("past_background_color".to_string(), "#202020".to_string());

        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn loading_missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load_from(&dir.path().join("missing.toml"));
        assert!(matches!(result, Err(ConfigError::ReadError(_))));
    }
}
