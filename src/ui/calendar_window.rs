use crate::calendar::{is_today, CalendarDayCell, GRID_CELLS, WEEKDAY_LABELS};
use crate::calendar::grid::{GRID_COLUMNS, GRID_ROWS};
use std::fmt::Display;
use std::fmt::Write;
use unsegen::base::*;
use unsegen::widget::*;

use super::{Context, Theme};

pub struct DayCell<'a> {
    day_num: u8,
    is_today: bool,
    theme: &'a Theme,
}

impl<'a> DayCell<'a> {
    pub const CELL_HEIGHT: usize = 1;
    pub const CELL_WIDTH: usize = 4;

    fn new(cell: &CalendarDayCell, theme: &'a Theme) -> Self {
        DayCell {
            day_num: cell.day_number,
            is_today: false,
            theme,
        }
    }

    fn today(mut self, is_today: bool) -> Self {
        self.is_today = is_today;
        self
    }
}

impl Display for DayCell<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let arg_today = if self.is_today {
            self.theme.today_day_char.unwrap_or(' ')
        } else {
            ' '
        };

        write!(f, " {}{:>2}", arg_today, self.day_num)
    }
}

/// The month picker: a title line, the weekday labels and six weeks.
pub struct CalendarWindow<'a> {
    context: &'a Context,
}

impl<'a> CalendarWindow<'a> {
    const HEADER_ROWS: usize = 2;
    const WIDTH: usize = GRID_COLUMNS * DayCell::CELL_WIDTH;

    pub fn new(context: &'a Context) -> Self {
        CalendarWindow { context }
    }
}

impl Widget for CalendarWindow<'_> {
    fn space_demand(&self) -> Demand2D {
        Demand2D {
            width: ColDemand::exact(Self::WIDTH),
            height: RowDemand::exact(Self::HEADER_ROWS + GRID_ROWS * DayCell::CELL_HEIGHT),
        }
    }

    fn draw(&self, mut window: Window, _hints: RenderingHints) {
        let theme = self.context.theme();
        let picker = &self.context.picker;
        let state = picker.state();
        let today = self.context.today();

        let mut cursor = Cursor::new(&mut window).style_modifier(
            theme
                .month_header_style
                .format(theme.month_header_text_style),
        );

        if let Err(e) = write!(
            &mut cursor,
            "<{:^width$}>",
            state.visible_month().to_string(),
            width = Self::WIDTH - 2
        ) {
            log::warn!("Error while writing month header: {}", e);
        }

        cursor.move_to(ColIndex::new(0), RowIndex::new(1));
        cursor.set_style_modifier(theme.weekday_style);
        for label in WEEKDAY_LABELS.iter() {
            let _ = write!(&mut cursor, "{:>width$}", label, width = DayCell::CELL_WIDTH);
        }

        let cells = picker.cells();
        debug_assert_eq!(cells.len(), GRID_CELLS);

        for (idx, cell) in cells.iter().enumerate() {
            let row = idx / GRID_COLUMNS;
            let col = idx % GRID_COLUMNS;
            cursor.move_to(
                ColIndex::new((col * DayCell::CELL_WIDTH) as i32),
                RowIndex::new((Self::HEADER_ROWS + row * DayCell::CELL_HEIGHT) as i32),
            );

            let today_cell = is_today(&cell.date, &today);
            let is_selected = state.is_selected(&cell.date);

            cursor.set_style_modifier(if cell.is_current() {
                theme.day_style.format(theme.day_text_style)
            } else {
                theme.other_month_style
            });
            if today_cell {
                cursor.apply_style_modifier(theme.today_day_style.format(theme.today_day_text_style));
            }
            if is_selected {
                cursor.apply_style_modifier(theme.focus_day_style);
            }
            if idx == picker.focus() {
                cursor.apply_style_modifier(theme.cursor_style);
            }

            // Selected cells carry their highlight; the marker is for today only
            let day_cell = DayCell::new(cell, theme).today(today_cell && !is_selected);
            if let Err(e) = write!(&mut cursor, "{}", day_cell) {
                log::warn!("Error while writing day cell: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::MonthRelation;
    use chrono::NaiveDate;

    #[test]
    fn day_cell_marks_today() {
        let theme = Theme::default();
        let cell = CalendarDayCell {
            day_number: 9,
            relation: MonthRelation::Current,
            date: NaiveDate::from_ymd_opt(2026, 10, 9).unwrap(),
        };

        assert_eq!(DayCell::new(&cell, &theme).to_string(), "   9");
        assert_eq!(DayCell::new(&cell, &theme).today(true).to_string(), " * 9");
        assert_eq!(
            DayCell::new(&cell, &theme).to_string().len(),
            DayCell::CELL_WIDTH
        );
    }
}
