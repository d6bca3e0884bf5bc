use chrono::NaiveDate;
use unsegen::input::{Navigatable, OperationResult};

use super::grid::{CalendarDayCell, GRID_CELLS, GRID_COLUMNS};
use super::month::MonthIndex;
use super::view::{self, ViewState};

pub type DateSelectFn = Box<dyn FnMut(NaiveDate)>;

/// Month-view date picker.
///
/// Keeps a [`ViewState`] and a keyboard focus over the 42 cells of the
/// visible grid. Activating the focused cell behaves like clicking it.
pub struct CalendarPicker {
    state: ViewState,
    focus: usize,
    on_date_select: Option<DateSelectFn>,
}

impl CalendarPicker {
    pub fn new() -> Self {
        CalendarPicker::with_today(view::today())
    }

    pub fn with_today(today: NaiveDate) -> Self {
        let mut picker = CalendarPicker {
            state: ViewState::new(today),
            focus: 0,
            on_date_select: None,
        };
        picker.focus_date(&today);
        picker
    }

    pub fn initial_selected_date(mut self, date: NaiveDate) -> Self {
        self.state = ViewState::new(date);
        self.focus_date(&date);
        self
    }

    pub fn on_date_select<F>(mut self, f: F) -> Self
    where
        F: FnMut(NaiveDate) + 'static,
    {
        self.on_date_select = Some(Box::new(f));
        self
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn visible_month(&self) -> MonthIndex {
        self.state.visible_month()
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.state.selected_date()
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn cells(&self) -> Vec<CalendarDayCell> {
        self.state.cells()
    }

    pub fn prev_month(&mut self) {
        self.state.prev_month();
        log::debug!("Showing {}", self.state.visible_month());
    }

    pub fn next_month(&mut self) {
        self.state.next_month();
        log::debug!("Showing {}", self.state.visible_month());
    }

    pub fn show_month_of(&mut self, date: NaiveDate) {
        self.state.show_month(MonthIndex::from(date));
        self.focus_date(&date);
    }

    /// Selects the cell at `index` of the visible grid.
    pub fn select_cell(&mut self, index: usize) {
        if let Some(cell) = self.cells().get(index) {
            self.focus = index;
            self.state.select(cell);
            log::info!("Selected {}", cell.date);

            if let Some(f) = self.on_date_select.as_mut() {
                f(cell.date);
            }
        }
    }

    pub fn activate(&mut self) {
        self.select_cell(self.focus)
    }

    fn focus_date(&mut self, date: &NaiveDate) {
        if let Some(idx) = self.cells().iter().position(|c| &c.date == date) {
            self.focus = idx;
        }
    }
}

impl Default for CalendarPicker {
    fn default() -> Self {
        CalendarPicker::new()
    }
}

impl Navigatable for CalendarPicker {
    fn move_down(&mut self) -> OperationResult {
        if self.focus + GRID_COLUMNS < GRID_CELLS {
            self.focus += GRID_COLUMNS;
            Ok(())
        } else {
            Err(())
        }
    }

    fn move_left(&mut self) -> OperationResult {
        if self.focus > 0 {
            self.focus -= 1;
            Ok(())
        } else {
            Err(())
        }
    }

    fn move_right(&mut self) -> OperationResult {
        if self.focus + 1 < GRID_CELLS {
            self.focus += 1;
            Ok(())
        } else {
            Err(())
        }
    }

    fn move_up(&mut self) -> OperationResult {
        if self.focus >= GRID_COLUMNS {
            self.focus -= GRID_COLUMNS;
            Ok(())
        } else {
            Err(())
        }
    }
}
