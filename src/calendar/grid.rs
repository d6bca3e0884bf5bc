use chrono::{Datelike, NaiveDate};

use super::month::MonthIndex;

pub const GRID_COLUMNS: usize = 7;
pub const GRID_ROWS: usize = 6;
pub const GRID_CELLS: usize = GRID_COLUMNS * GRID_ROWS;

pub const WEEKDAY_LABELS: [&str; GRID_COLUMNS] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Which month a grid cell belongs to, relative to the displayed one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthRelation {
    Previous,
    Current,
    Next,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDayCell {
    pub day_number: u8,
    pub relation: MonthRelation,
    pub date: NaiveDate,
}

impl CalendarDayCell {
    fn new(date: NaiveDate, relation: MonthRelation) -> Self {
        CalendarDayCell {
            day_number: date.day() as u8,
            relation,
            date,
        }
    }

    pub fn is_current(&self) -> bool {
        self.relation == MonthRelation::Current
    }
}

/// Six Sunday-first weeks covering `month`, padded with the tail of the
/// previous month and the head of the next one.
pub fn month_grid(month: MonthIndex) -> Vec<CalendarDayCell> {
    let first = month.first_day();
    let num_days = month.num_days() as usize;
    let leading = first.weekday().num_days_from_sunday() as usize;

    debug_assert!(leading + num_days <= GRID_CELLS);
    let trailing = GRID_CELLS.saturating_sub(leading + num_days);

    let prev = month.prev();
    let prev_last = prev.num_days();
    let next = month.next();

    let previous_cells = (0..leading as u32)
        .rev()
        .filter_map(|back| prev.date(prev_last - back))
        .map(|date| CalendarDayCell::new(date, MonthRelation::Previous));

    let current_cells = (1..=num_days as u32)
        .filter_map(|day| month.date(day))
        .map(|date| CalendarDayCell::new(date, MonthRelation::Current));

    let next_cells = (1..=trailing as u32)
        .filter_map(|day| next.date(day))
        .map(|date| CalendarDayCell::new(date, MonthRelation::Next));

    let cells: Vec<CalendarDayCell> = previous_cells
        .chain(current_cells)
        .chain(next_cells)
        .collect();

    log::debug!("Generated {} grid cells for {}", cells.len(), month);

    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Month;

    fn relation_count(cells: &[CalendarDayCell], relation: MonthRelation) -> usize {
        cells.iter().filter(|c| c.relation == relation).count()
    }

    #[test]
    fn always_42_cells() {
        for year in [1900, 1999, 2000, 2023, 2024, 2100] {
            for month in 1..=12 {
                let idx = MonthIndex::from_number(year, month);
                assert_eq!(month_grid(idx).len(), GRID_CELLS, "{}", idx);
            }
        }
    }

    #[test]
    fn current_slice_is_contiguous_and_numbered() {
        for month in 1..=12 {
            let idx = MonthIndex::from_number(2024, month);
            let cells = month_grid(idx);
            let leading = relation_count(&cells, MonthRelation::Previous);

            let current: Vec<u8> = cells[leading..]
                .iter()
                .take_while(|c| c.is_current())
                .map(|c| c.day_number)
                .collect();

            assert_eq!(current.len() as u32, idx.num_days());
            assert_eq!(relation_count(&cells, MonthRelation::Current), current.len());
            assert!(current.iter().zip(1u8..).all(|(&n, expected)| n == expected));
        }
    }

    #[test]
    fn leading_cells_end_at_previous_month_end() {
        // March 2024 starts on a Friday, February 2024 has 29 days
        let cells = month_grid(MonthIndex::new(Month::March, 2024));
        let leading: Vec<u8> = cells
            .iter()
            .take_while(|c| c.relation == MonthRelation::Previous)
            .map(|c| c.day_number)
            .collect();

        assert_eq!(leading, vec![25, 26, 27, 28, 29]);
        assert_eq!(cells[4].date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert_eq!(cells[5].date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    }

    #[test]
    fn wednesday_start_with_thirty_days() {
        // November 2023 starts on a Wednesday and has 30 days
        let cells = month_grid(MonthIndex::new(Month::November, 2023));

        let prev: Vec<u8> = cells[0..3].iter().map(|c| c.day_number).collect();
        assert_eq!(prev, vec![29, 30, 31]);
        assert!(cells[0..3].iter().all(|c| c.relation == MonthRelation::Previous));

        assert!(cells[3..33].iter().all(|c| c.is_current()));
        assert_eq!(cells[3].day_number, 1);
        assert_eq!(cells[32].day_number, 30);

        let next: Vec<u8> = cells[33..42].iter().map(|c| c.day_number).collect();
        assert_eq!(next, (1..=9).collect::<Vec<u8>>());
        assert!(cells[33..].iter().all(|c| c.relation == MonthRelation::Next));
    }

    #[test]
    fn sunday_start_has_no_leading_cells() {
        // September 2024 starts on a Sunday
        let cells = month_grid(MonthIndex::new(Month::September, 2024));
        assert_eq!(cells[0].relation, MonthRelation::Current);
        assert_eq!(cells[0].day_number, 1);
        assert_eq!(relation_count(&cells, MonthRelation::Next), 12);
    }

    #[test]
    fn adjacent_cells_carry_adjacent_years() {
        // January 2022 starts on a Saturday: six December days lead
        let jan = month_grid(MonthIndex::new(Month::January, 2022));
        assert_eq!(jan[0].date, NaiveDate::from_ymd_opt(2021, 12, 26).unwrap());
        assert_eq!(relation_count(&jan, MonthRelation::Previous), 6);

        let dec = month_grid(MonthIndex::new(Month::December, 2023));
        let first_next = dec
            .iter()
            .find(|c| c.relation == MonthRelation::Next)
            .unwrap();
        assert_eq!(first_next.date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    }

    #[test]
    fn february_leap_and_common() {
        let leap = month_grid(MonthIndex::new(Month::February, 2024));
        assert_eq!(relation_count(&leap, MonthRelation::Current), 29);

        let common = month_grid(MonthIndex::new(Month::February, 2023));
        assert_eq!(relation_count(&common, MonthRelation::Current), 28);
    }

    #[test]
    fn dates_are_consecutive() {
        let cells = month_grid(MonthIndex::new(Month::July, 2025));
        for pair in cells.windows(2) {
            assert_eq!(pair[0].date.succ_opt().unwrap(), pair[1].date);
        }
        assert_eq!(cells[0].date.weekday(), chrono::Weekday::Sun);
    }
}
