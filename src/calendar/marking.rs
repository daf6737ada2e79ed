use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarkingStatus {
    #[default]
    Available,
    NotAvailable,
}

/// Decoration attached to a single day.
///
/// `quick_action` selects the quick-action styling branch, in which case
/// `first`, `last` and `end_selected` apply and the range attributes are
/// ignored. Otherwise `starting_day`/`ending_day` place the day inside a
/// highlighted range of `color`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MarkingFlags {
    pub disabled: bool,
    pub selected: bool,
    pub quick_action: bool,
    pub first: bool,
    pub last: bool,
    pub end_selected: bool,
    pub starting_day: bool,
    pub ending_day: bool,
    pub color: Option<Color>,
    pub text_color: Option<Color>,
    pub status: MarkingStatus,
    pub checked: bool,
}

impl MarkingFlags {
    pub fn range_start(color: Color) -> Self {
        Self {
            starting_day: true,
            color: Some(color),
            ..Self::default()
        }
    }

    pub fn range_end(color: Color) -> Self {
        Self {
            ending_day: true,
            color: Some(color),
            ..Self::default()
        }
    }

    pub fn single_day(color: Color) -> Self {
        Self {
            starting_day: true,
            ending_day: true,
            color: Some(color),
            ..Self::default()
        }
    }

    /// A highlighted day with no range edge, e.g. the middle of a range.
    pub fn day(color: Color) -> Self {
        Self {
            color: Some(color),
            ..Self::default()
        }
    }

    pub fn quick_action() -> Self {
        Self {
            quick_action: true,
            ..Self::default()
        }
    }

    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = Some(color);
        self
    }

    pub fn with_status(mut self, status: MarkingStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_edges(mut self, first: bool, last: bool) -> Self {
        self.first = first;
        self.last = last;
        self
    }

    pub fn with_end_selected(mut self, end_selected: bool) -> Self {
        self.end_selected = end_selected;
        self
    }

    pub fn is_not_available(&self) -> bool {
        self.status == MarkingStatus::NotAvailable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_marking_has_no_flags() {
        let marking = MarkingFlags::default();
        assert!(!marking.quick_action);
        assert!(!marking.starting_day && !marking.ending_day);
        assert_eq!(marking.color, None);
        assert_eq!(marking.status, MarkingStatus::Available);
    }

    #[test]
    fn single_day_marks_both_edges() {
        let marking = MarkingFlags::single_day(Color::Red);
        assert!(marking.starting_day);
        assert!(marking.ending_day);
        assert_eq!(marking.color, Some(Color::Red));
    }

    #[test]
    fn not_available_status_is_detected() {
        let marking = MarkingFlags::range_start(Color::Blue).with_status(MarkingStatus::NotAvailable);
        assert!(marking.is_not_available());
    }
}
