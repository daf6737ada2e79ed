//! A single calendar day: its inputs, its cached styling and the decision of
//! whether a new set of inputs needs a redraw.

use std::fmt;
use std::sync::Arc;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::calendar::{DayState, MarkingFlags};
use crate::ui::day_style::{StyleDescriptor, resolve_marking, resolve_with_sheet};
use crate::ui::day_visual::{DayVisual, composite_with_sheet};
use crate::ui::stylesheet::DayStyleSheet;
use crate::ui::theme::Theme;

/// Callback invoked with the cell's date. Two handlers are equal only when
/// they share the same allocation.
#[derive(Clone)]
pub struct DayHandler(Arc<dyn Fn(NaiveDate) + Send + Sync>);

impl DayHandler {
    pub fn new(handler: impl Fn(NaiveDate) + Send + Sync + 'static) -> Self {
        Self(Arc::new(handler))
    }

    pub fn call(&self, date: NaiveDate) {
        (self.0)(date)
    }
}

impl PartialEq for DayHandler {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for DayHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DayHandler")
            .field(&Arc::as_ptr(&self.0).cast::<()>())
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayCellProps {
    pub date: NaiveDate,
    pub state: DayState,
    pub marking: Option<MarkingFlags>,
    pub theme: Arc<Theme>,
    /// Day number drawn in the cell.
    pub label: u32,
    pub on_press: Option<DayHandler>,
    pub on_long_press: Option<DayHandler>,
}

impl DayCellProps {
    pub fn new(date: NaiveDate, state: DayState, theme: Arc<Theme>) -> Self {
        Self {
            date,
            state,
            marking: None,
            theme,
            label: date.day(),
            on_press: None,
            on_long_press: None,
        }
    }

    pub fn with_marking(mut self, marking: Option<MarkingFlags>) -> Self {
        self.marking = marking;
        self
    }

    pub fn with_on_press(mut self, handler: DayHandler) -> Self {
        self.on_press = Some(handler);
        self
    }

    pub fn with_on_long_press(mut self, handler: DayHandler) -> Self {
        self.on_long_press = Some(handler);
        self
    }

    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }
}

/// Props compared by identity or value after the descriptor check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropKey {
    State,
    Children,
    OnPress,
    OnLongPress,
}

pub const DAY_CELL_UPDATE_KEYS: [PropKey; 4] = [
    PropKey::State,
    PropKey::Children,
    PropKey::OnPress,
    PropKey::OnLongPress,
];

pub fn shallow_props_differ(prev: &DayCellProps, next: &DayCellProps, keys: &[PropKey]) -> bool {
    keys.iter().any(|key| match key {
        PropKey::State => prev.state != next.state,
        PropKey::Children => prev.label != next.label,
        PropKey::OnPress => prev.on_press != next.on_press,
        PropKey::OnLongPress => prev.on_long_press != next.on_long_press,
    })
}

/// Whether moving from `prev` to `next` can change what the cell draws.
pub fn should_update(prev: &DayCellProps, next: &DayCellProps) -> bool {
    let prev_descriptor = resolve_marking(prev.marking.as_ref(), &prev.theme);
    let next_descriptor = resolve_marking(next.marking.as_ref(), &next.theme);
    update_reason(&prev_descriptor, &next_descriptor, prev, next).is_some()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UpdateReason {
    Descriptor,
    FadeOthers,
    Props,
}

fn update_reason(
    prev_descriptor: &StyleDescriptor,
    next_descriptor: &StyleDescriptor,
    prev: &DayCellProps,
    next: &DayCellProps,
) -> Option<UpdateReason> {
    if prev_descriptor != next_descriptor {
        return Some(UpdateReason::Descriptor);
    }
    // Past days use a dedicated palette that ignores fade_others.
    if prev.state != DayState::Past && prev.theme.fade_others != next.theme.fade_others {
        return Some(UpdateReason::FadeOthers);
    }
    if shallow_props_differ(prev, next, &DAY_CELL_UPDATE_KEYS) {
        return Some(UpdateReason::Props);
    }
    None
}

/// A day with its last accepted props and the styling derived from them.
#[derive(Debug, Clone)]
pub struct DayCell {
    props: DayCellProps,
    descriptor: StyleDescriptor,
    visual: DayVisual,
}

impl DayCell {
    pub fn new(props: DayCellProps) -> Self {
        let sheet = DayStyleSheet::new(&props.theme);
        let descriptor = resolve_with_sheet(props.marking.as_ref(), &props.theme, &sheet);
        let visual = Self::composite(&props, &descriptor, &sheet);
        Self {
            props,
            descriptor,
            visual,
        }
    }

    pub fn props(&self) -> &DayCellProps {
        &self.props
    }

    pub fn descriptor(&self) -> &StyleDescriptor {
        &self.descriptor
    }

    pub fn visual(&self) -> &DayVisual {
        &self.visual
    }

    /// Accepts new props, recompositing only when the change detector says
    /// the drawn output may differ. Returns whether a redraw is needed.
    pub fn receive(&mut self, next: DayCellProps) -> bool {
        let sheet = DayStyleSheet::new(&next.theme);
        let next_descriptor = resolve_with_sheet(next.marking.as_ref(), &next.theme, &sheet);
        let reason = update_reason(&self.descriptor, &next_descriptor, &self.props, &next);
        tracing::trace!(date = %next.date, ?reason, "day cell update check");

        if reason.is_none() {
            self.props = next;
            return false;
        }

        self.visual = Self::composite(&next, &next_descriptor, &sheet);
        self.descriptor = next_descriptor;
        self.props = next;
        true
    }

    pub fn press(&self) {
        if let Some(handler) = &self.props.on_press {
            handler.call(self.props.date);
        }
    }

    pub fn long_press(&self) {
        if let Some(handler) = &self.props.on_long_press {
            handler.call(self.props.date);
        }
    }

    fn composite(props: &DayCellProps, descriptor: &StyleDescriptor, sheet: &DayStyleSheet) -> DayVisual {
        composite_with_sheet(
            props.state,
            props.weekday(),
            props.marking.as_ref(),
            descriptor,
            &props.theme,
            sheet,
            props.label,
        )
    }
}
