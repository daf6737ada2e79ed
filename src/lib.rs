pub mod app;
pub mod calendar;
pub mod input;
pub mod storage;
pub mod ui;

pub use app::{AppState, CellAction};
pub use calendar::{DayState, MarkingFlags, MarkingStatus};
pub use ui::{DayVisual, StyleDescriptor, Theme, composite, resolve_day, resolve_marking, should_update};

pub use input::normal_mode;
