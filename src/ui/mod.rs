pub mod day_cell;
pub mod day_style;
pub mod day_visual;
pub mod month_grid;
pub mod stylesheet;
pub mod theme;
pub mod widgets;

#[cfg(test)]
mod test_strategies;

pub use day_cell::{DayCell, DayCellProps, DayHandler, PropKey, should_update};
pub use day_style::{Decoration, QuickActionStyle, RangeSegment, StyleDescriptor, resolve_marking};
pub use day_visual::{Container, DayVisual, composite, resolve_day};
pub use month_grid::{GridInputs, MonthGrid, RefreshStats};
pub use theme::{Theme, ThemeError};
