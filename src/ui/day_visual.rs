use chrono::Weekday;
use ratatui::style::{Color, Style};

use crate::calendar::{DayState, MarkingFlags};
use crate::ui::day_style::{Decoration, RangeSegment, StyleDescriptor, resolve_with_sheet};
use crate::ui::stylesheet::DayStyleSheet;
use crate::ui::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Container {
    pub rounded: bool,
    pub style: Style,
}

impl Container {
    pub fn background(&self) -> Option<Color> {
        self.style.bg
    }
}

/// Everything the rendering substrate needs to paint one day.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DayVisual {
    pub text_style: Style,
    pub container: Container,
    pub left_filler: Option<Color>,
    pub right_filler: Option<Color>,
    /// Background behind both fillers; only set for isolated marked days.
    pub center_filler: Option<Color>,
    pub checked: bool,
    pub label: String,
}

/// Resolves `marking` and composites it in one step.
pub fn resolve_day(
    state: DayState,
    weekday: Weekday,
    marking: Option<&MarkingFlags>,
    theme: &Theme,
    label: u32,
) -> (StyleDescriptor, DayVisual) {
    let sheet = DayStyleSheet::new(theme);
    let descriptor = resolve_with_sheet(marking, theme, &sheet);
    let visual = composite_with_sheet(state, weekday, marking, &descriptor, theme, &sheet, label);
    (descriptor, visual)
}

/// Layers a resolved descriptor on top of the state and weekday baseline.
pub fn composite(
    state: DayState,
    weekday: Weekday,
    marking: Option<&MarkingFlags>,
    descriptor: &StyleDescriptor,
    theme: &Theme,
    label: u32,
) -> DayVisual {
    composite_with_sheet(state, weekday, marking, descriptor, theme, &DayStyleSheet::new(theme), label)
}

pub(crate) fn composite_with_sheet(
    state: DayState,
    weekday: Weekday,
    marking: Option<&MarkingFlags>,
    descriptor: &StyleDescriptor,
    theme: &Theme,
    sheet: &DayStyleSheet,
    label: u32,
) -> DayVisual {
    let mut visual = DayVisual {
        text_style: sheet.base_text,
        label: label.to_string(),
        ..DayVisual::default()
    };

    match state {
        DayState::Disabled => visual.text_style = visual.text_style.patch(sheet.disabled_text),
        DayState::Today => {
            visual.container.style = visual.container.style.patch(sheet.today);
            visual.text_style = visual.text_style.fg(baseline_text_color(state, weekday, theme));
        }
        DayState::Past | DayState::Plain => {
            visual.text_style = visual.text_style.fg(baseline_text_color(state, weekday, theme));
        }
    }

    let Some(marking) = marking else {
        return visual;
    };

    visual.container.rounded = true;
    visual.text_style = visual.text_style.patch(descriptor.text_style);
    visual.checked = marking.checked;

    match descriptor.decoration {
        Decoration::None => {}
        Decoration::QuickAction(quick_action) => {
            if let Some(container_style) = quick_action.container_style {
                visual.container.style = visual.container.style.patch(container_style);
            }
            visual.left_filler = quick_action.left_filler;
            visual.right_filler = quick_action.right_filler;
        }
        Decoration::Range(segment) => {
            let outside = edge_background(state, theme);
            match segment {
                RangeSegment::Starting(color) => {
                    visual.left_filler = Some(outside);
                    visual.right_filler = color;
                    visual.container.style = with_background(visual.container.style, color);
                }
                RangeSegment::Ending(color) => {
                    visual.left_filler = color;
                    visual.right_filler = Some(outside);
                    visual.container.style = with_background(visual.container.style, color);
                }
                RangeSegment::Isolated(color) => {
                    let fill = if state == DayState::Past && !marking.selected {
                        visual.container.style = visual.container.style.bg(theme.past_background_color);
                        Some(theme.past_background_color)
                    } else {
                        color
                    };
                    visual.left_filler = fill;
                    visual.right_filler = fill;
                    visual.center_filler = fill;
                }
                RangeSegment::SingleDay(color) => {
                    visual.left_filler = Some(outside);
                    visual.right_filler = Some(outside);
                    visual.container.style = with_background(visual.container.style, color);
                }
            }
        }
    }

    visual
}

/// Text color before any marking is applied; `fade_others` never affects
/// past days.
pub fn baseline_text_color(state: DayState, weekday: Weekday, theme: &Theme) -> Color {
    match (state, weekday) {
        (DayState::Disabled, _) => theme.disabled_color,
        (DayState::Past, Weekday::Sun) => theme.past_sunday_text_color,
        (DayState::Past, Weekday::Sat) => theme.past_saturday_text_color,
        (DayState::Past, _) => theme.past_text_color,
        (_, Weekday::Sun) if theme.fade_others => theme.sub_sunday_text_color,
        (_, Weekday::Sat) if theme.fade_others => theme.sub_saturday_text_color,
        (_, _) if theme.fade_others => theme.sub_text_color,
        (_, Weekday::Sun) => theme.main_sunday_text_color,
        (_, Weekday::Sat) => theme.main_saturday_text_color,
        (_, _) => theme.main_text_color,
    }
}

/// Background a range edge opens onto.
fn edge_background(state: DayState, theme: &Theme) -> Color {
    if state == DayState::Past {
        theme.past_background_color
    } else {
        theme.calendar_background
    }
}

fn with_background(style: Style, color: Option<Color>) -> Style {
    match color {
        Some(color) => style.bg(color),
        None => style,
    }
}
