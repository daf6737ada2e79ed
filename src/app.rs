use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver};

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};

use crate::calendar::MarkingFlags;
use crate::ui::day_cell::DayHandler;
use crate::ui::month_grid::{GridInputs, MonthGrid, RefreshStats};
use crate::ui::theme::Theme;

/// Interaction reported by a day cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellAction {
    Pressed(NaiveDate),
    LongPressed(NaiveDate),
}

pub struct AppState {
    pub today: NaiveDate,
    pub cursor: NaiveDate,
    pub first_day_of_week: Weekday,
    pub theme: Arc<Theme>,
    pub markings: BTreeMap<NaiveDate, MarkingFlags>,
    pub grid: MonthGrid,
    pub last_refresh: RefreshStats,
    pub status_message: Option<String>,
    pub should_quit: bool,
    on_press: DayHandler,
    on_long_press: DayHandler,
    actions: Receiver<CellAction>,
}

fn grid_inputs<'a>(
    cursor: NaiveDate,
    today: NaiveDate,
    first_day_of_week: Weekday,
    theme: &Arc<Theme>,
    markings: &'a BTreeMap<NaiveDate, MarkingFlags>,
    on_press: &DayHandler,
    on_long_press: &DayHandler,
) -> GridInputs<'a> {
    GridInputs {
        year: cursor.year(),
        month: cursor.month(),
        today,
        first_day_of_week,
        theme: Arc::clone(theme),
        markings,
        on_press: Some(on_press.clone()),
        on_long_press: Some(on_long_press.clone()),
    }
}

impl AppState {
    pub fn new(today: NaiveDate, theme: Theme, first_day_of_week: Weekday) -> Self {
        let (sender, actions) = mpsc::channel();
        let long_press_sender = sender.clone();
        let on_press = DayHandler::new(move |date| {
            sender.send(CellAction::Pressed(date)).ok();
        });
        let on_long_press = DayHandler::new(move |date| {
            long_press_sender.send(CellAction::LongPressed(date)).ok();
        });
        let theme = Arc::new(theme);
        let markings = BTreeMap::new();
        let grid = MonthGrid::new(&grid_inputs(
            today,
            today,
            first_day_of_week,
            &theme,
            &markings,
            &on_press,
            &on_long_press,
        ));
        let last_refresh = RefreshStats {
            cells: grid.cells().len(),
            redrawn: grid.cells().len(),
        };

        Self {
            today,
            cursor: today,
            first_day_of_week,
            theme,
            markings,
            grid,
            last_refresh,
            status_message: None,
            should_quit: false,
            on_press,
            on_long_press,
            actions,
        }
    }

    pub fn with_markings(mut self, markings: BTreeMap<NaiveDate, MarkingFlags>) -> Self {
        self.markings = markings;
        self.refresh();
        self
    }

    pub fn with_cursor(mut self, cursor: NaiveDate) -> Self {
        self.cursor = cursor;
        self.refresh();
        self
    }

    /// Brings the grid up to date with the current state.
    pub fn refresh(&mut self) -> RefreshStats {
        let inputs = grid_inputs(
            self.cursor,
            self.today,
            self.first_day_of_week,
            &self.theme,
            &self.markings,
            &self.on_press,
            &self.on_long_press,
        );
        self.last_refresh = self.grid.refresh(&inputs);
        self.last_refresh
    }

    pub fn press_cursor(&self) -> bool {
        self.grid.press(self.cursor)
    }

    pub fn long_press_cursor(&self) -> bool {
        self.grid.long_press(self.cursor)
    }

    /// Applies pending cell interactions; returns how many were handled.
    pub fn process_actions(&mut self) -> usize {
        let pending: Vec<CellAction> = self.actions.try_iter().collect();
        for action in &pending {
            match *action {
                CellAction::Pressed(date) => {
                    let selected = self.toggle_selected(date);
                    self.status_message = Some(format!(
                        "{} {}",
                        date.format("%Y-%m-%d"),
                        if selected { "selected" } else { "deselected" }
                    ));
                }
                CellAction::LongPressed(date) => {
                    let summary = self
                        .markings
                        .get(&date)
                        .map(describe_marking)
                        .unwrap_or("unmarked");
                    self.status_message = Some(format!("{}: {}", date.format("%Y-%m-%d"), summary));
                }
            }
        }
        if !pending.is_empty() {
            self.refresh();
        }
        pending.len()
    }

    fn toggle_selected(&mut self, date: NaiveDate) -> bool {
        let marking = self.markings.entry(date).or_default();
        marking.selected = !marking.selected;
        let selected = marking.selected;
        if *marking == MarkingFlags::default() {
            self.markings.remove(&date);
        }
        selected
    }

    pub fn move_cursor_days(&mut self, days: i64) {
        let moved = if days >= 0 {
            self.cursor.checked_add_days(Days::new(days.unsigned_abs()))
        } else {
            self.cursor.checked_sub_days(Days::new(days.unsigned_abs()))
        };
        if let Some(date) = moved {
            self.cursor = date;
            self.refresh();
        }
    }

    pub fn move_months(&mut self, months: i32) {
        let moved = if months >= 0 {
            self.cursor.checked_add_months(Months::new(months.unsigned_abs()))
        } else {
            self.cursor.checked_sub_months(Months::new(months.unsigned_abs()))
        };
        if let Some(date) = moved {
            self.cursor = date;
            self.refresh();
        }
    }

    pub fn jump_to_today(&mut self) {
        self.cursor = self.today;
        self.refresh();
    }

    pub fn toggle_fade_others(&mut self) {
        let fade_others = !self.theme.fade_others;
        self.theme = Arc::new(self.theme.as_ref().clone().with_fade_others(fade_others));
        self.refresh();
    }

    /// Switches to the next built-in preset, keeping `fade_others`.
    pub fn cycle_theme(&mut self) {
        let names = Theme::available_themes();
        let next = names
            .iter()
            .position(|name| *name == self.theme.name)
            .map(|i| names[(i + 1) % names.len()])
            .unwrap_or("default");
        self.theme = Arc::new(Theme::get_by_name(next).with_fade_others(self.theme.fade_others));
        let inputs = grid_inputs(
            self.cursor,
            self.today,
            self.first_day_of_week,
            &self.theme,
            &self.markings,
            &self.on_press,
            &self.on_long_press,
        );
        self.last_refresh = self.grid.rebuild(&inputs);
    }
}

fn describe_marking(marking: &MarkingFlags) -> &'static str {
    if marking.quick_action {
        "quick action"
    } else if marking.is_not_available() {
        "not available"
    } else {
        match (marking.starting_day, marking.ending_day) {
            (true, true) => "single-day range",
            (true, false) => "range start",
            (false, true) => "range end",
            (false, false) if marking.color.is_some() => "highlighted day",
            (false, false) => "marked",
        }
    }
}
