use std::fmt::Write;
use unsegen::base::*;
use unsegen::widget::*;

use super::Context;

pub struct StatusBar<'a> {
    context: &'a Context,
}

impl<'a> StatusBar<'a> {
    pub fn new(context: &'a Context) -> Self {
        StatusBar { context }
    }

    pub fn text(&self) -> String {
        let wallpaper = self.context.wallpaper.as_deref().unwrap_or("none");
        let selected = self
            .context
            .last_selected
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "-".to_owned());
        let keys = if self.context.gallery.is_some() {
            "hjkl move  enter set  esc/x close"
        } else {
            "hjkl move  enter select  [/] month  w wallpapers  q quit"
        };

        format!(
            "wallpaper: {} | selected: {} | {}",
            wallpaper, selected, keys
        )
    }
}

impl Widget for StatusBar<'_> {
    fn space_demand(&self) -> Demand2D {
        Demand2D {
            width: ColDemand::at_least(10),
            height: RowDemand::exact(1),
        }
    }

    fn draw(&self, mut window: Window, _hints: RenderingHints) {
        let mut cursor = Cursor::new(&mut window).style_modifier(self.context.theme().status_style);
        if let Err(e) = write!(&mut cursor, "{}", self.text()) {
            log::warn!("Error while writing status bar: {}", e);
        }
        cursor.fill_and_wrap_line();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::CalendarPicker;
    use chrono::NaiveDate;

    #[test]
    fn shows_wallpaper_and_selection() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let mut context = Context::new(CalendarPicker::with_today(today), today);
        assert!(StatusBar::new(&context).text().starts_with("wallpaper: none | selected: -"));

        context.wallpaper = Some("wallpaper3.jpg".to_owned());
        context.last_selected = Some(today);
        assert!(StatusBar::new(&context)
            .text()
            .starts_with("wallpaper: wallpaper3.jpg | selected: 2026-10-19"));
    }
}
