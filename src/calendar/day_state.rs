use std::str::FromStr;

use chrono::NaiveDate;
use thiserror::Error;

/// Temporal state of one day relative to the calendar being drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DayState {
    #[default]
    Plain,
    Today,
    Past,
    Disabled,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown day state: {0:?}")]
pub struct UnknownDayState(pub String);

impl DayState {
    /// State of `date` inside a month grid: days outside the displayed month
    /// are disabled, then past/today/plain relative to `today`.
    pub fn for_date(date: NaiveDate, today: NaiveDate, in_month: bool) -> Self {
        if !in_month {
            DayState::Disabled
        } else if date < today {
            DayState::Past
        } else if date == today {
            DayState::Today
        } else {
            DayState::Plain
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DayState::Plain => "",
            DayState::Today => "today",
            DayState::Past => "past",
            DayState::Disabled => "disabled",
        }
    }
}

impl FromStr for DayState {
    type Err = UnknownDayState;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Ok(DayState::Plain),
            "today" => Ok(DayState::Today),
            "past" => Ok(DayState::Past),
            "disabled" => Ok(DayState::Disabled),
            "selected" => {
                // Selection lives on MarkingFlags::selected now.
                tracing::warn!("day state \"selected\" is deprecated, treating it as plain");
                Ok(DayState::Plain)
            }
            other => Err(UnknownDayState(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn days_before_today_are_past() {
        let today = date(2025, 3, 12);
        assert_eq!(DayState::for_date(date(2025, 3, 11), today, true), DayState::Past);
    }

    #[test]
    fn today_is_today() {
        let today = date(2025, 3, 12);
        assert_eq!(DayState::for_date(today, today, true), DayState::Today);
    }

    #[test]
    fn future_days_are_plain() {
        let today = date(2025, 3, 12);
        assert_eq!(DayState::for_date(date(2025, 3, 20), today, true), DayState::Plain);
    }

    #[test]
    fn days_outside_the_month_are_disabled_even_when_today() {
        let today = date(2025, 3, 12);
        assert_eq!(DayState::for_date(today, today, false), DayState::Disabled);
    }

    #[test]
    fn legacy_names_parse() {
        assert_eq!("".parse::<DayState>(), Ok(DayState::Plain));
        assert_eq!("today".parse::<DayState>(), Ok(DayState::Today));
        assert_eq!("past".parse::<DayState>(), Ok(DayState::Past));
        assert_eq!("disabled".parse::<DayState>(), Ok(DayState::Disabled));
    }

    #[test]
    fn deprecated_selected_state_maps_to_plain() {
        assert_eq!("selected".parse::<DayState>(), Ok(DayState::Plain));
    }

    #[test]
    fn unknown_state_name_is_an_error() {
        assert_eq!(
            "tomorrow".parse::<DayState>(),
            Err(UnknownDayState("tomorrow".to_string()))
        );
    }

    #[test]
    fn as_str_round_trips_through_from_str() {
        for state in [DayState::Plain, DayState::Today, DayState::Past, DayState::Disabled] {
            assert_eq!(state.as_str().parse::<DayState>(), Ok(state));
        }
    }
}
