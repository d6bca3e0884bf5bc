use chrono::{Datelike, Local, Month, NaiveDate};
use num_traits::FromPrimitive;
use std::fmt;
use std::ops::{Add, Sub};

/// Number of days in `month` of `year`, derived from the distance between
/// the first day of this month and the first day of the next one.
pub fn days_of_month(month: &Month, year: i32) -> u32 {
    let this = MonthIndex::new(*month, year);
    let next = this.next();

    next.first_day()
        .signed_duration_since(this.first_day())
        .num_days() as u32
}

/// A calendar month without a day component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthIndex {
    index: Month,
    year: i32,
}

impl MonthIndex {
    pub fn new(index: Month, year: i32) -> Self {
        MonthIndex { index, year }
    }

    /// Builds a month index from a 1-based month number. Out of range
    /// numbers are normalized into neighbouring years.
    pub fn from_number(year: i32, month: i32) -> Self {
        MonthIndex::new(Month::January, year).add_months(month - 1)
    }

    pub fn month(&self) -> Month {
        self.index
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn number(&self) -> u32 {
        self.index.number_from_month()
    }

    pub fn name(&self) -> &'static str {
        self.index.name()
    }

    /// Shifts by `delta` months, carrying into the year in both directions.
    pub fn add_months(&self, delta: i32) -> Self {
        let total = i64::from(self.year) * 12 + i64::from(self.number()) - 1 + i64::from(delta);
        let month = total.rem_euclid(12) as u32 + 1;

        // Months past the representable years stay where they are
        match i32::try_from(total.div_euclid(12)) {
            Ok(year) => MonthIndex {
                index: Month::from_u32(month).unwrap_or(Month::January),
                year,
            },
            Err(_) => *self,
        }
    }

    pub fn next(&self) -> Self {
        self.add_months(1)
    }

    pub fn prev(&self) -> Self {
        self.add_months(-1)
    }

    pub fn num_days(&self) -> u32 {
        days_of_month(&self.index, self.year)
    }

    pub fn first_day(&self) -> NaiveDate {
        self.date(1).unwrap_or(NaiveDate::MIN)
    }

    pub fn last_day(&self) -> NaiveDate {
        self.next().first_day().pred_opt().unwrap_or(NaiveDate::MIN)
    }

    /// The date with day `day` in this month, if it exists.
    pub fn date(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.number(), day)
    }

    pub fn contains(&self, date: &NaiveDate) -> bool {
        MonthIndex::from(*date) == *self
    }
}

impl Default for MonthIndex {
    fn default() -> Self {
        MonthIndex::from(Local::now().date_naive())
    }
}

impl From<NaiveDate> for MonthIndex {
    fn from(date: NaiveDate) -> Self {
        MonthIndex::from_number(date.year(), date.month() as i32)
    }
}

impl Add<u32> for MonthIndex {
    type Output = MonthIndex;
    fn add(self, rhs: u32) -> Self::Output {
        self.add_months(rhs as i32)
    }
}

impl Sub<u32> for MonthIndex {
    type Output = MonthIndex;
    fn sub(self, rhs: u32) -> Self::Output {
        self.add_months(-(rhs as i32))
    }
}

impl PartialOrd for MonthIndex {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MonthIndex {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.year, self.number()).cmp(&(other.year, other.number()))
    }
}

impl fmt::Display for MonthIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name(), self.year)
    }
}
