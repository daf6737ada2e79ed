use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};
use ratatui::style::Color;

use daymark::calendar::{MarkingFlags, MarkingStatus};

const RANGE_COLOR: Color = Color::Rgb(80, 170, 255);
const PAST_RANGE_COLOR: Color = Color::Rgb(120, 200, 140);
const HIGHLIGHT_COLOR: Color = Color::Rgb(255, 170, 60);
const NA_COLOR: Color = Color::Rgb(200, 200, 200);

/// Demo markings around `today`: a range running through today, a range and
/// an isolated day in the past, a single-day range, a not-available range,
/// a quick-action strip and a checked day.
pub fn sample_markings(today: NaiveDate) -> BTreeMap<NaiveDate, MarkingFlags> {
    let mut markings = BTreeMap::new();
    let offset = |days: i64| {
        if days >= 0 {
            today.checked_add_days(Days::new(days.unsigned_abs()))
        } else {
            today.checked_sub_days(Days::new(days.unsigned_abs()))
        }
    };

    let mut put = |days: i64, marking: MarkingFlags| {
        if let Some(date) = offset(days) {
            markings.insert(date, marking);
        }
    };

    put(-1, MarkingFlags::range_start(RANGE_COLOR).with_text_color(Color::White));
    put(0, MarkingFlags::day(RANGE_COLOR).with_text_color(Color::White));
    put(1, MarkingFlags::day(RANGE_COLOR).with_text_color(Color::White).with_checked(true));
    put(2, MarkingFlags::range_end(RANGE_COLOR).with_text_color(Color::White));

    put(-9, MarkingFlags::range_start(PAST_RANGE_COLOR));
    put(-8, MarkingFlags::range_end(PAST_RANGE_COLOR));
    put(-5, MarkingFlags::day(HIGHLIGHT_COLOR));

    put(5, MarkingFlags::single_day(HIGHLIGHT_COLOR).with_selected(true));

    put(8, MarkingFlags::range_start(NA_COLOR).with_status(MarkingStatus::NotAvailable));
    put(9, MarkingFlags::range_end(NA_COLOR).with_status(MarkingStatus::NotAvailable));

    put(11, MarkingFlags::quick_action().with_edges(true, false).with_end_selected(true));
    put(12, MarkingFlags::quick_action().with_end_selected(true));
    put(13, MarkingFlags::quick_action().with_edges(false, true).with_end_selected(true));
    put(15, MarkingFlags::quick_action());

    put(17, MarkingFlags::default().with_checked(true));

    markings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_range_runs_through_today() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        let markings = sample_markings(today);
        assert!(markings[&NaiveDate::from_ymd_opt(2025, 1, 14).unwrap()].starting_day);
        assert!(markings[&NaiveDate::from_ymd_opt(2025, 1, 17).unwrap()].ending_day);
    }
}
