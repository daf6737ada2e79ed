use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::calendar::{DayState, MarkingFlags};
use crate::ui::day_cell::{DayCell, DayCellProps, DayHandler};
use crate::ui::theme::Theme;

/// Everything the grid needs to build the props of each visible day.
#[derive(Debug, Clone)]
pub struct GridInputs<'a> {
    pub year: i32,
    pub month: u32,
    pub today: NaiveDate,
    pub first_day_of_week: Weekday,
    pub theme: Arc<Theme>,
    pub markings: &'a BTreeMap<NaiveDate, MarkingFlags>,
    pub on_press: Option<DayHandler>,
    pub on_long_press: Option<DayHandler>,
}

impl GridInputs<'_> {
    fn props_for(&self, date: NaiveDate) -> DayCellProps {
        let in_month = date.year() == self.year && date.month() == self.month;
        DayCellProps {
            date,
            state: DayState::for_date(date, self.today, in_month),
            marking: self.markings.get(&date).cloned(),
            theme: Arc::clone(&self.theme),
            label: date.day(),
            on_press: self.on_press.clone(),
            on_long_press: self.on_long_press.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RefreshStats {
    pub cells: usize,
    pub redrawn: usize,
}

/// The days of one month, padded to whole weeks.
#[derive(Debug, Clone)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub first_day_of_week: Weekday,
    cells: Vec<DayCell>,
}

impl MonthGrid {
    pub fn new(inputs: &GridInputs<'_>) -> Self {
        let cells = visible_dates(inputs.year, inputs.month, inputs.first_day_of_week)
            .into_iter()
            .map(|date| DayCell::new(inputs.props_for(date)))
            .collect();
        Self {
            year: inputs.year,
            month: inputs.month,
            first_day_of_week: inputs.first_day_of_week,
            cells,
        }
    }

    /// Feeds fresh props to every cell and reports how many had to be
    /// recomposited. Changing month or week start rebuilds the grid.
    pub fn refresh(&mut self, inputs: &GridInputs<'_>) -> RefreshStats {
        if (self.year, self.month, self.first_day_of_week)
            != (inputs.year, inputs.month, inputs.first_day_of_week)
        {
            return self.rebuild(inputs);
        }

        let mut stats = RefreshStats {
            cells: self.cells.len(),
            redrawn: 0,
        };
        for cell in &mut self.cells {
            let date = cell.props().date;
            if cell.receive(inputs.props_for(date)) {
                stats.redrawn += 1;
            }
        }
        tracing::debug!(cells = stats.cells, redrawn = stats.redrawn, "month grid refreshed");
        stats
    }

    /// Discards every cell and builds the grid from scratch, e.g. after a
    /// theme swap the change detector does not look at.
    pub fn rebuild(&mut self, inputs: &GridInputs<'_>) -> RefreshStats {
        *self = Self::new(inputs);
        let stats = RefreshStats {
            cells: self.cells.len(),
            redrawn: self.cells.len(),
        };
        tracing::debug!(year = self.year, month = self.month, cells = stats.cells, "month grid rebuilt");
        stats
    }

    pub fn weeks(&self) -> impl Iterator<Item = &[DayCell]> {
        self.cells.chunks(7)
    }

    pub fn cells(&self) -> &[DayCell] {
        &self.cells
    }

    pub fn cell(&self, date: NaiveDate) -> Option<&DayCell> {
        self.cells.iter().find(|cell| cell.props().date == date)
    }

    /// Returns false when `date` is not on the grid.
    pub fn press(&self, date: NaiveDate) -> bool {
        self.cell(date).map(DayCell::press).is_some()
    }

    pub fn long_press(&self, date: NaiveDate) -> bool {
        self.cell(date).map(DayCell::long_press).is_some()
    }
}

/// Dates shown for a month: whole weeks starting on `first_day_of_week`
/// covering the first through the last day of the month.
pub fn visible_dates(year: i32, month: u32, first_day_of_week: Weekday) -> Vec<NaiveDate> {
    let Some(first_day) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    let next_month_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    let Some(last_day) = next_month_first.and_then(|d| d.pred_opt()) else {
        return Vec::new();
    };

    let lead = u64::from(first_day.weekday().days_since(first_day_of_week));
    let last_day_of_week = first_day_of_week.pred();
    let trail = u64::from(last_day_of_week.days_since(last_day.weekday()));

    let (Some(start), Some(end)) = (
        first_day.checked_sub_days(Days::new(lead)),
        last_day.checked_add_days(Days::new(trail)),
    ) else {
        return Vec::new();
    };
    start.iter_days().take_while(|d| *d <= end).collect()
}
