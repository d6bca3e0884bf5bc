use chrono::{Local, NaiveDate};

use super::grid::{month_grid, CalendarDayCell};
use super::month::MonthIndex;

/// The wall clock's calendar date, time of day discarded.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn is_today(date: &NaiveDate, today: &NaiveDate) -> bool {
    date == today
}

/// Per-instance state of a calendar picker.
///
/// `visible_month` only moves through navigation and `selected_date` only
/// through selection; neither operation touches the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    visible_month: MonthIndex,
    selected_date: NaiveDate,
}

impl ViewState {
    /// Shows the month containing `selected`.
    pub fn new(selected: NaiveDate) -> Self {
        ViewState {
            visible_month: MonthIndex::from(selected),
            selected_date: selected,
        }
    }

    pub fn visible_month(&self) -> MonthIndex {
        self.visible_month
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    pub fn prev_month(&mut self) {
        self.visible_month = self.visible_month.prev();
    }

    pub fn next_month(&mut self) {
        self.visible_month = self.visible_month.next();
    }

    pub fn show_month(&mut self, month: MonthIndex) {
        self.visible_month = month;
    }

    /// Selects `cell`'s date. Cells from adjacent months are selected in
    /// place, the visible month stays as it is.
    pub fn select(&mut self, cell: &CalendarDayCell) {
        self.selected_date = cell.date;
    }

    pub fn is_selected(&self, date: &NaiveDate) -> bool {
        *date == self.selected_date
    }

    pub fn cells(&self) -> Vec<CalendarDayCell> {
        month_grid(self.visible_month)
    }
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState::new(today())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::grid::MonthRelation;
    use chrono::Month;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn navigation_keeps_selection() {
        let mut state = ViewState::new(date(2023, 12, 24));
        state.next_month();
        assert_eq!(state.visible_month(), MonthIndex::new(Month::January, 2024));
        assert_eq!(state.selected_date(), date(2023, 12, 24));

        state.prev_month();
        state.prev_month();
        assert_eq!(state.visible_month(), MonthIndex::new(Month::November, 2023));
        assert_eq!(state.selected_date(), date(2023, 12, 24));
    }

    #[test]
    fn selecting_any_cell_keeps_visible_month() {
        let mut state = ViewState::new(date(2023, 11, 15));
        let month = state.visible_month();

        for cell in state.cells() {
            state.select(&cell);
            assert_eq!(state.selected_date(), cell.date);
            assert!(state.is_selected(&cell.date));
            assert_eq!(state.visible_month(), month);
        }
    }

    #[test]
    fn adjacent_selection_highlights_without_navigating() {
        let mut state = ViewState::new(date(2023, 11, 15));
        let cells = state.cells();
        let prev = cells
            .iter()
            .find(|c| c.relation == MonthRelation::Previous)
            .unwrap();

        state.select(prev);
        assert_eq!(state.selected_date(), date(2023, 10, 29));
        assert_eq!(state.visible_month(), MonthIndex::new(Month::November, 2023));
        assert_eq!(
            state.cells().iter().filter(|c| state.is_selected(&c.date)).count(),
            1
        );
    }

    #[test]
    fn today_marks_one_cell_in_its_month_only() {
        let today = date(2026, 10, 19);
        let state = ViewState::new(today);
        let marked = state
            .cells()
            .iter()
            .filter(|c| is_today(&c.date, &today))
            .count();
        assert_eq!(marked, 1);

        let mut other = state;
        other.show_month(MonthIndex::new(Month::March, 2026));
        let marked = other
            .cells()
            .iter()
            .filter(|c| is_today(&c.date, &today))
            .count();
        assert_eq!(marked, 0);
    }

    #[test]
    fn today_is_marked_in_adjacent_month_padding() {
        // November 2026 starts on a Sunday and ends on a Monday, so its
        // trailing padding runs from December 1 to December 12.
        let today = date(2026, 12, 3);
        let mut state = ViewState::new(today);
        state.show_month(MonthIndex::new(Month::November, 2026));

        let marked: Vec<_> = state
            .cells()
            .into_iter()
            .filter(|c| is_today(&c.date, &today))
            .collect();
        assert_eq!(marked.len(), 1);
        assert_eq!(marked[0].relation, MonthRelation::Next);
        assert_eq!(marked[0].day_number, 3);

        // January 2027 starts on a Friday, its leading padding ends December 31
        let today = date(2026, 12, 28);
        state.show_month(MonthIndex::new(Month::January, 2027));
        let marked: Vec<_> = state
            .cells()
            .into_iter()
            .filter(|c| is_today(&c.date, &today))
            .collect();
        assert_eq!(marked.len(), 1);
        assert_eq!(marked[0].relation, MonthRelation::Previous);
    }

    #[test]
    fn date_equality_ignores_construction() {
        let state = ViewState::new(date(2024, 2, 29));
        let same = date(2024, 3, 1).pred_opt().unwrap();
        assert!(state.is_selected(&same));
        assert!(!state.is_selected(&date(2023, 2, 28)));
    }
}
