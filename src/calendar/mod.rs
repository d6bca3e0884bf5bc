pub mod grid;
pub mod month;
pub mod picker;
pub mod view;

pub use grid::{month_grid, CalendarDayCell, MonthRelation, GRID_CELLS, WEEKDAY_LABELS};
pub use month::{days_of_month, MonthIndex};
pub use picker::CalendarPicker;
pub use view::{is_today, today, ViewState};
