pub mod day_state;
pub mod marking;

pub use day_state::{DayState, UnknownDayState};
pub use marking::{MarkingFlags, MarkingStatus};
