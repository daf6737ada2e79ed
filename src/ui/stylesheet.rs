use ratatui::style::{Color, Modifier, Style};

use crate::ui::theme::Theme;

/// Filler color that bridges a selected quick-action end to its neighbours.
pub const QUICK_ACTION_CONNECTOR: Color = Color::Rgb(0xc1, 0xe4, 0xfe);

pub const CHECKED_DOT_COLOR: Color = Color::White;

pub const CHECKED_DOT: char = '•';

/// Fixed style fragments derived once from a [`Theme`].
#[derive(Debug, Clone, PartialEq)]
pub struct DayStyleSheet {
    pub base_text: Style,
    pub disabled_text: Style,
    pub today: Style,
    pub first_quick_action: Style,
    pub first_quick_action_text: Style,
    pub quick_action: Style,
    pub quick_action_text: Style,
    pub na_text: Style,
}

impl DayStyleSheet {
    pub fn new(theme: &Theme) -> Self {
        Self {
            base_text: Style::new(),
            disabled_text: Style::new().fg(theme.disabled_color),
            today: Style::new().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            first_quick_action: Style::new().bg(theme.quick_action_color),
            first_quick_action_text: Style::new()
                .fg(theme.selected_day_text_color)
                .add_modifier(Modifier::BOLD),
            quick_action: Style::new().bg(QUICK_ACTION_CONNECTOR),
            quick_action_text: Style::new().fg(theme.quick_action_color),
            na_text: Style::new()
                .fg(theme.disabled_color)
                .add_modifier(Modifier::CROSSED_OUT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn na_text_is_muted_and_crossed_out() {
        let theme = Theme::default();
        let sheet = DayStyleSheet::new(&theme);
        assert_eq!(sheet.na_text.fg, Some(theme.disabled_color));
        assert!(sheet.na_text.add_modifier.contains(Modifier::CROSSED_OUT));
    }

    #[test]
    fn quick_action_edge_uses_theme_color() {
        let theme = Theme::dark();
        let sheet = DayStyleSheet::new(&theme);
        assert_eq!(sheet.first_quick_action.bg, Some(theme.quick_action_color));
    }
}
