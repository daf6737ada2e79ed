use std::collections::BTreeMap;
use std::str::FromStr;

use ratatui::style::Color;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ThemeError {
    #[error("Unknown theme token: {0}")]
    UnknownToken(String),
    #[error("Invalid color {value:?} for theme token {token}")]
    InvalidColor { token: String, value: String },
}

/// Color tokens consulted when styling a day cell.
///
/// Text colors come in three palettes (`main`, `sub`, `past`), each split by
/// weekday (Sunday, Saturday, any other day).
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: String,
    pub main_text_color: Color,
    pub main_sunday_text_color: Color,
    pub main_saturday_text_color: Color,
    pub sub_text_color: Color,
    pub sub_sunday_text_color: Color,
    pub sub_saturday_text_color: Color,
    pub past_text_color: Color,
    pub past_sunday_text_color: Color,
    pub past_saturday_text_color: Color,
    pub disabled_color: Color,
    pub selected_day_text_color: Color,
    pub past_background_color: Color,
    pub calendar_background: Color,
    pub quick_action_color: Color,
    pub weekday_header: Color,
    pub status_bar: Color,
    /// Render non-emphasized days with the `sub` palette.
    pub fade_others: bool,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            name: "default".to_string(),
            main_text_color: Color::Rgb(45, 65, 80),
            main_sunday_text_color: Color::Rgb(224, 62, 62),
            main_saturday_text_color: Color::Rgb(33, 110, 212),
            sub_text_color: Color::Rgb(150, 163, 173),
            sub_sunday_text_color: Color::Rgb(238, 160, 160),
            sub_saturday_text_color: Color::Rgb(146, 186, 238),
            past_text_color: Color::Rgb(180, 188, 196),
            past_sunday_text_color: Color::Rgb(230, 186, 186),
            past_saturday_text_color: Color::Rgb(180, 204, 236),
            disabled_color: Color::Rgb(217, 225, 232),
            selected_day_text_color: Color::Rgb(255, 255, 255),
            past_background_color: Color::Rgb(242, 242, 242),
            calendar_background: Color::Rgb(255, 255, 255),
            quick_action_color: Color::Rgb(0, 132, 255),
            weekday_header: Color::Rgb(45, 65, 80),
            status_bar: Color::Rgb(45, 65, 80),
            fade_others: false,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            main_text_color: Color::Rgb(230, 230, 230),
            main_sunday_text_color: Color::Rgb(255, 121, 121),
            main_saturday_text_color: Color::Rgb(121, 178, 255),
            sub_text_color: Color::Rgb(120, 120, 130),
            sub_sunday_text_color: Color::Rgb(150, 90, 90),
            sub_saturday_text_color: Color::Rgb(90, 115, 150),
            past_text_color: Color::Rgb(95, 95, 105),
            past_sunday_text_color: Color::Rgb(125, 80, 80),
            past_saturday_text_color: Color::Rgb(80, 100, 130),
            disabled_color: Color::Rgb(70, 70, 78),
            selected_day_text_color: Color::Rgb(20, 20, 24),
            past_background_color: Color::Rgb(38, 38, 44),
            calendar_background: Color::Rgb(24, 24, 28),
            quick_action_color: Color::Rgb(80, 160, 255),
            weekday_header: Color::Rgb(200, 200, 210),
            status_bar: Color::Rgb(200, 200, 210),
            fade_others: false,
        }
    }

    pub fn solarized() -> Self {
        Self {
            name: "solarized".to_string(),
            main_text_color: Color::Rgb(147, 161, 161),
            main_sunday_text_color: Color::Rgb(220, 50, 47),
            main_saturday_text_color: Color::Rgb(38, 139, 210),
            sub_text_color: Color::Rgb(88, 110, 117),
            sub_sunday_text_color: Color::Rgb(150, 60, 58),
            sub_saturday_text_color: Color::Rgb(40, 100, 150),
            past_text_color: Color::Rgb(72, 92, 99),
            past_sunday_text_color: Color::Rgb(120, 58, 56),
            past_saturday_text_color: Color::Rgb(40, 85, 120),
            disabled_color: Color::Rgb(50, 70, 78),
            selected_day_text_color: Color::Rgb(253, 246, 227),
            past_background_color: Color::Rgb(7, 54, 66),
            calendar_background: Color::Rgb(0, 43, 54),
            quick_action_color: Color::Rgb(42, 161, 152),
            weekday_header: Color::Rgb(181, 137, 0),
            status_bar: Color::Rgb(147, 161, 161),
            fade_others: false,
        }
    }

    pub fn get_by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "dark" => Self::dark(),
            "solarized" | "solarized-dark" => Self::solarized(),
            _ => Self::default_theme(),
        }
    }

    pub fn available_themes() -> Vec<&'static str> {
        vec!["default", "dark", "solarized"]
    }

    pub fn with_fade_others(mut self, fade_others: bool) -> Self {
        self.fade_others = fade_others;
        self
    }

    /// Applies `token => color` overrides, where tokens are the snake_case
    /// field names and colors are anything `Color::from_str` accepts.
    pub fn with_overrides(mut self, overrides: &BTreeMap<String, String>) -> Result<Self, ThemeError> {
        for (token, value) in overrides {
            let color = Color::from_str(value).map_err(|_| ThemeError::InvalidColor {
                token: token.clone(),
                value: value.clone(),
            })?;
            let slot = self
                .token_mut(token)
                .ok_or_else(|| ThemeError::UnknownToken(token.clone()))?;
            *slot = color;
        }
        Ok(self)
    }

    fn token_mut(&mut self, token: &str) -> Option<&mut Color> {
        let slot = match token {
            "main_text_color" => &mut self.main_text_color,
            "main_sunday_text_color" => &mut self.main_sunday_text_color,
            "main_saturday_text_color" => &mut self.main_saturday_text_color,
            "sub_text_color" => &mut self.sub_text_color,
            "sub_sunday_text_color" => &mut self.sub_sunday_text_color,
            "sub_saturday_text_color" => &mut self.sub_saturday_text_color,
            "past_text_color" => &mut self.past_text_color,
            "past_sunday_text_color" => &mut self.past_sunday_text_color,
            "past_saturday_text_color" => &mut self.past_saturday_text_color,
            "disabled_color" => &mut self.disabled_color,
            "selected_day_text_color" => &mut self.selected_day_text_color,
            "past_background_color" => &mut self.past_background_color,
            "calendar_background" => &mut self.calendar_background,
            "quick_action_color" => &mut self.quick_action_color,
            "weekday_header" => &mut self.weekday_header,
            "status_bar" => &mut self.status_bar,
            _ => return None,
        };
        Some(slot)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_theme_name_falls_back_to_default() {
        assert_eq!(Theme::get_by_name("nope"), Theme::default_theme());
    }

    #[test]
    fn theme_names_are_case_insensitive() {
        assert_eq!(Theme::get_by_name("DARK").name, "dark");
    }

    #[test]
    fn every_available_theme_resolves_to_itself() {
        for name in Theme::available_themes() {
            assert_eq!(Theme::get_by_name(name).name, name);
        }
    }

    #[test]
    fn fade_others_is_off_by_default() {
        assert!(!Theme::default().fade_others);
    }

    #[test]
    fn override_sets_hex_color() {
        let overrides = BTreeMap::from([("calendar_background".to_string(), "#101010".to_string())]);
        let theme = Theme::default().with_overrides(&overrides).unwrap();
        assert_eq!(theme.calendar_background, Color::Rgb(16, 16, 16));
    }

    #[test]
    fn override_accepts_named_color() {
        let overrides = BTreeMap::from([("disabled_color".to_string(), "darkgray".to_string())]);
        let theme = Theme::default().with_overrides(&overrides).unwrap();
        assert_eq!(theme.disabled_color, Color::DarkGray);
    }

    #[test]
    fn override_with_unknown_token_fails() {
        let overrides = BTreeMap::from([("sunday".to_string(), "#ffffff".to_string())]);
        assert_eq!(
            Theme::default().with_overrides(&overrides),
            Err(ThemeError::UnknownToken("sunday".to_string()))
        );
    }

    #[test]
    fn override_with_bad_color_fails() {
        let overrides = BTreeMap::from([("main_text_color".to_string(), "not a color".to_string())]);
        assert!(matches!(
            Theme::default().with_overrides(&overrides),
            Err(ThemeError::InvalidColor { .. })
        ));
    }
}
