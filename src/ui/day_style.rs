//! Reduction of a day's [`MarkingFlags`] into a [`StyleDescriptor`].
//!
//! The descriptor is the only thing the change detector compares, so it holds
//! exactly the marking-derived styling and nothing that depends on the day's
//! state or weekday. Those are layered on later by
//! [`composite`](crate::ui::day_visual::composite).

use ratatui::style::{Color, Style};

use crate::calendar::MarkingFlags;
use crate::ui::stylesheet::{DayStyleSheet, QUICK_ACTION_CONNECTOR};
use crate::ui::theme::Theme;

/// Where a marked day sits inside its highlighted range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeSegment {
    /// First day of a range that continues to the right.
    Starting(Option<Color>),
    /// Last day of a range that came from the left.
    Ending(Option<Color>),
    /// Range that starts and ends on this day.
    SingleDay(Option<Color>),
    /// Highlighted day with no range edge.
    Isolated(Option<Color>),
}

impl RangeSegment {
    pub fn is_starting_day(self) -> bool {
        matches!(self, RangeSegment::Starting(_) | RangeSegment::SingleDay(_))
    }

    pub fn is_ending_day(self) -> bool {
        matches!(self, RangeSegment::Ending(_) | RangeSegment::SingleDay(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QuickActionStyle {
    pub container_style: Option<Style>,
    pub left_filler: Option<Color>,
    pub right_filler: Option<Color>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Decoration {
    #[default]
    None,
    QuickAction(QuickActionStyle),
    Range(RangeSegment),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StyleDescriptor {
    pub text_style: Style,
    pub decoration: Decoration,
}

impl StyleDescriptor {
    pub fn quick_action(&self) -> Option<&QuickActionStyle> {
        match &self.decoration {
            Decoration::QuickAction(style) => Some(style),
            _ => None,
        }
    }

    pub fn range(&self) -> Option<RangeSegment> {
        match self.decoration {
            Decoration::Range(segment) => Some(segment),
            _ => None,
        }
    }
}

pub fn resolve_marking(marking: Option<&MarkingFlags>, theme: &Theme) -> StyleDescriptor {
    resolve_with_sheet(marking, theme, &DayStyleSheet::new(theme))
}

pub(crate) fn resolve_with_sheet(
    marking: Option<&MarkingFlags>,
    theme: &Theme,
    sheet: &DayStyleSheet,
) -> StyleDescriptor {
    let Some(marking) = marking else {
        return StyleDescriptor::default();
    };

    let mut text_style = Style::new();
    if marking.disabled {
        text_style = text_style.fg(theme.disabled_color);
    } else if marking.selected {
        text_style = text_style.fg(theme.selected_day_text_color);
    }

    if marking.quick_action {
        let (text_style, quick_action) = resolve_quick_action(marking, text_style, sheet);
        return StyleDescriptor {
            text_style,
            decoration: Decoration::QuickAction(quick_action),
        };
    }

    if marking.is_not_available() {
        text_style = sheet.na_text;
    }

    let color = marking.color;
    let segment = match (marking.starting_day, marking.ending_day) {
        (true, true) => RangeSegment::SingleDay(color),
        (true, false) => RangeSegment::Starting(color),
        (false, true) => RangeSegment::Ending(color),
        (false, false) => RangeSegment::Isolated(color),
    };

    if let Some(text_color) = marking.text_color {
        text_style = text_style.fg(text_color);
    }

    StyleDescriptor {
        text_style,
        decoration: Decoration::Range(segment),
    }
}

fn resolve_quick_action(
    marking: &MarkingFlags,
    text_style: Style,
    sheet: &DayStyleSheet,
) -> (Style, QuickActionStyle) {
    let mut style = QuickActionStyle::default();

    if marking.first || marking.last {
        style.container_style = Some(sheet.first_quick_action);
        // The connector goes on the side facing away from the edge.
        if marking.end_selected && marking.first && !marking.last {
            style.right_filler = Some(QUICK_ACTION_CONNECTOR);
        } else if marking.end_selected && marking.last && !marking.first {
            style.left_filler = Some(QUICK_ACTION_CONNECTOR);
        }
        (sheet.first_quick_action_text, style)
    } else if !marking.end_selected {
        style.container_style = Some(sheet.quick_action);
        (sheet.quick_action_text, style)
    } else {
        style.left_filler = Some(QUICK_ACTION_CONNECTOR);
        style.right_filler = Some(QUICK_ACTION_CONNECTOR);
        (text_style, style)
    }
}
