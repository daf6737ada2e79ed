use chrono::{NaiveDate, Weekday};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

use crate::ui::day_visual::DayVisual;
use crate::ui::month_grid::MonthGrid;
use crate::ui::stylesheet::{CHECKED_DOT, CHECKED_DOT_COLOR};
use crate::ui::theme::Theme;

/// Columns per day: filler, cap, two label columns, dot, cap, filler.
pub const DAY_WIDTH: u16 = 7;

/// Lines per week row, the second one left blank.
pub const WEEK_LINES: u16 = 2;

const HEADER_LINES: u16 = 2;

const LEFT_CAP: char = '▐';
const RIGHT_CAP: char = '▌';

#[derive(Debug, Clone, Copy)]
pub struct DayCellWidget<'a> {
    visual: &'a DayVisual,
    focused: bool,
}

impl<'a> DayCellWidget<'a> {
    pub fn new(visual: &'a DayVisual) -> Self {
        Self { visual, focused: false }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for DayCellWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < DAY_WIDTH || area.height == 0 {
            return;
        }
        let visual = self.visual;
        let (x, y) = (area.x, area.y);

        let left = visual.left_filler.or(visual.center_filler);
        let right = visual.right_filler.or(visual.center_filler);
        let body = visual
            .container
            .background()
            .or(visual.center_filler)
            .or(if left == right { left } else { None });

        paint(buf, x, y, ' ', background(left));
        paint(buf, x + 6, y, ' ', background(right));

        let rounded = visual.container.rounded && body.is_some();
        if rounded && body != left {
            paint(buf, x + 1, y, LEFT_CAP, cap(body, left));
        } else {
            paint(buf, x + 1, y, ' ', background(body.or(left)));
        }
        if rounded && body != right {
            paint(buf, x + 5, y, RIGHT_CAP, cap(body, right));
        } else {
            paint(buf, x + 5, y, ' ', background(body.or(right)));
        }

        let mut text_style = visual.container.style.patch(visual.text_style);
        if let Some(body) = body {
            text_style = text_style.bg(body);
        }
        if self.focused {
            text_style = text_style.add_modifier(Modifier::REVERSED);
        }
        let label = format!("{:>2}", visual.label);
        for (i, ch) in label.chars().take(2).enumerate() {
            paint(buf, x + 2 + i as u16, y, ch, text_style);
        }

        let dot_style = background(body).fg(CHECKED_DOT_COLOR);
        let dot = if visual.checked { CHECKED_DOT } else { ' ' };
        paint(buf, x + 4, y, dot, dot_style);
    }
}

fn background(color: Option<Color>) -> Style {
    match color {
        Some(color) => Style::new().bg(color),
        None => Style::new(),
    }
}

fn cap(body: Option<Color>, outside: Option<Color>) -> Style {
    let style = background(outside);
    match body {
        Some(body) => style.fg(body),
        None => style,
    }
}

fn paint(buf: &mut Buffer, x: u16, y: u16, ch: char, style: Style) {
    let area = buf.area;
    if x < area.right() && y < area.bottom() && x >= area.x && y >= area.y {
        buf.get_mut(x, y).set_char(ch).set_style(style);
    }
}

/// Weekday header plus one row per week of a [`MonthGrid`].
#[derive(Debug, Clone, Copy)]
pub struct MonthGridWidget<'a> {
    grid: &'a MonthGrid,
    theme: &'a Theme,
    cursor: Option<NaiveDate>,
}

impl<'a> MonthGridWidget<'a> {
    pub fn new(grid: &'a MonthGrid, theme: &'a Theme) -> Self {
        Self {
            grid,
            theme,
            cursor: None,
        }
    }

    pub fn cursor(mut self, cursor: NaiveDate) -> Self {
        self.cursor = Some(cursor);
        self
    }

    pub fn width() -> u16 {
        DAY_WIDTH * 7
    }

    pub fn height(grid: &MonthGrid) -> u16 {
        let weeks = u16::try_from(grid.weeks().count()).unwrap_or(u16::MAX);
        HEADER_LINES.saturating_add(weeks.saturating_mul(WEEK_LINES))
    }
}

impl Widget for MonthGridWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let header_style = Style::new()
            .fg(self.theme.weekday_header)
            .add_modifier(Modifier::BOLD);
        let mut weekday = self.grid.first_day_of_week;
        for column in 0..7u16 {
            let x = area.x + column * DAY_WIDTH + 2;
            if x + 2 > area.right() {
                break;
            }
            for (i, ch) in short_name(weekday).chars().enumerate() {
                paint(buf, x + i as u16, area.y, ch, header_style);
            }
            weekday = weekday.succ();
        }

        for (row, week) in (0u16..).zip(self.grid.weeks()) {
            let y = area.y + HEADER_LINES + row * WEEK_LINES;
            if y >= area.bottom() {
                break;
            }
            for (column, cell) in (0u16..).zip(week) {
                let x = area.x + column * DAY_WIDTH;
                if x + DAY_WIDTH > area.right() {
                    break;
                }
                let focused = self.cursor == Some(cell.props().date);
                DayCellWidget::new(cell.visual())
                    .focused(focused)
                    .render(Rect::new(x, y, DAY_WIDTH, 1), buf);
            }
        }
    }
}

fn short_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Mo",
        Weekday::Tue => "Tu",
        Weekday::Wed => "We",
        Weekday::Thu => "Th",
        Weekday::Fri => "Fr",
        Weekday::Sat => "Sa",
        Weekday::Sun => "Su",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::day_visual::Container;
    use std::collections::BTreeMap;
    use std::sync::Arc;

    const RED: Color = Color::Rgb(255, 0, 0);
    const WHITE: Color = Color::Rgb(255, 255, 255);

    fn render(visual: &DayVisual) -> Buffer {
        let mut buf = Buffer::empty(Rect::new(0, 0, DAY_WIDTH, 1));
        DayCellWidget::new(visual).render(buf.area, &mut buf);
        buf
    }

    fn symbols(buf: &Buffer) -> String {
        (0..buf.area.width).map(|x| buf.get(x, 0).symbol().to_string()).collect()
    }

    #[test]
    fn plain_day_renders_right_aligned_label() {
        let visual = DayVisual {
            label: "7".to_string(),
            ..DayVisual::default()
        };
        assert_eq!(symbols(&render(&visual)), "   7   ");
    }

    #[test]
    fn starting_day_has_left_cap_and_filled_right_side() {
        let visual = DayVisual {
            label: "12".to_string(),
            container: Container {
                rounded: true,
                style: Style::new().bg(RED),
            },
            left_filler: Some(WHITE),
            right_filler: Some(RED),
            ..DayVisual::default()
        };
        let buf = render(&visual);
        assert_eq!(symbols(&buf), format!(" {LEFT_CAP}12   "));
        assert_eq!(buf.get(0, 0).bg, WHITE);
        assert_eq!(buf.get(1, 0).fg, RED);
        assert_eq!(buf.get(5, 0).bg, RED);
        assert_eq!(buf.get(6, 0).bg, RED);
    }

    #[test]
    fn checked_day_shows_dot() {
        let visual = DayVisual {
            label: "3".to_string(),
            checked: true,
            ..DayVisual::default()
        };
        let buf = render(&visual);
        assert_eq!(buf.get(4, 0).symbol(), CHECKED_DOT.to_string());
        assert_eq!(buf.get(4, 0).fg, CHECKED_DOT_COLOR);
    }

    #[test]
    fn isolated_day_is_one_continuous_block() {
        let visual = DayVisual {
            label: "9".to_string(),
            container: Container {
                rounded: true,
                style: Style::new(),
            },
            left_filler: Some(RED),
            right_filler: Some(RED),
            center_filler: Some(RED),
            ..DayVisual::default()
        };
        let buf = render(&visual);
        assert!(!symbols(&buf).contains(LEFT_CAP));
        assert!((0..DAY_WIDTH).all(|x| buf.get(x, 0).bg == RED));
    }

    #[test]
    fn too_narrow_area_is_left_untouched() {
        let visual = DayVisual {
            label: "12".to_string(),
            ..DayVisual::default()
        };
        let mut buf = Buffer::empty(Rect::new(0, 0, 3, 1));
        DayCellWidget::new(&visual).render(buf.area, &mut buf);
        assert_eq!(buf, Buffer::empty(Rect::new(0, 0, 3, 1)));
    }

    #[test]
    fn grid_header_starts_on_first_day_of_week() {
        let theme = Arc::new(Theme::default());
        let markings = BTreeMap::new();
        let grid = MonthGrid::new(&crate::ui::month_grid::GridInputs {
            year: 2025,
            month: 1,
            today: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            first_day_of_week: Weekday::Sun,
            theme: Arc::clone(&theme),
            markings: &markings,
            on_press: None,
            on_long_press: None,
        });
        let area = Rect::new(0, 0, MonthGridWidget::width(), MonthGridWidget::height(&grid));
        let mut buf = Buffer::empty(area);
        MonthGridWidget::new(&grid, &theme).render(area, &mut buf);
        assert_eq!(buf.get(2, 0).symbol(), "S");
        assert_eq!(buf.get(3, 0).symbol(), "u");
        // 2025-01-01 is a Wednesday, fourth column.
        assert_eq!(buf.get(3 * DAY_WIDTH + 3, 2).symbol(), "1");
    }
}
