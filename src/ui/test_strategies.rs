use chrono::Weekday;
use proptest::prelude::*;
use ratatui::style::Color;

use crate::calendar::{DayState, MarkingFlags, MarkingStatus};

pub(crate) fn arb_color() -> impl Strategy<Value = Option<Color>> {
    proptest::option::of(any::<(u8, u8, u8)>().prop_map(|(r, g, b)| Color::Rgb(r, g, b)))
}

pub(crate) fn arb_state() -> impl Strategy<Value = DayState> {
    prop_oneof![
        Just(DayState::Plain),
        Just(DayState::Today),
        Just(DayState::Past),
        Just(DayState::Disabled),
    ]
}

pub(crate) fn arb_weekday() -> impl Strategy<Value = Weekday> {
    (0u8..7).prop_map(|n| match n {
        0 => Weekday::Sun,
        1 => Weekday::Mon,
        2 => Weekday::Tue,
        3 => Weekday::Wed,
        4 => Weekday::Thu,
        5 => Weekday::Fri,
        _ => Weekday::Sat,
    })
}

pub(crate) fn arb_marking() -> impl Strategy<Value = MarkingFlags> {
    (
        any::<(bool, bool, bool, bool, bool, bool)>(),
        any::<(bool, bool, bool, bool)>(),
        arb_color(),
        arb_color(),
    )
        .prop_map(
            |(
                (disabled, selected, quick_action, first, last, end_selected),
                (starting_day, ending_day, not_available, checked),
                color,
                text_color,
            )| MarkingFlags {
                disabled,
                selected,
                quick_action,
                first,
                last,
                end_selected,
                starting_day,
                ending_day,
                color,
                text_color,
                status: if not_available {
                    MarkingStatus::NotAvailable
                } else {
                    MarkingStatus::Available
                },
                checked,
            },
        )
}

/// Range markings only, i.e. `quick_action` is always false.
pub(crate) fn arb_range_marking() -> impl Strategy<Value = MarkingFlags> {
    arb_marking().prop_map(|mut marking| {
        marking.quick_action = false;
        marking
    })
}
