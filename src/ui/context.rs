use chrono::NaiveDate;

use crate::calendar::{self, CalendarPicker};
use crate::events::EventSink;
use crate::gallery::MountedGallery;
use crate::host::Document;

use unsegen::base::style::*;

#[derive(Clone, Debug)]
pub struct Theme {
    pub day_style: StyleModifier,
    pub day_text_style: TextFormatModifier,
    pub other_month_style: StyleModifier,
    pub focus_day_style: StyleModifier,
    pub cursor_style: StyleModifier,
    pub today_day_style: StyleModifier,
    pub today_day_text_style: TextFormatModifier,
    pub today_day_char: Option<char>,
    pub month_header_style: StyleModifier,
    pub month_header_text_style: TextFormatModifier,
    pub weekday_style: StyleModifier,
    pub gallery_title_style: StyleModifier,
    pub tile_style: StyleModifier,
    pub tile_focus_style: StyleModifier,
    pub tile_loading_style: StyleModifier,
    pub tile_failed_style: StyleModifier,
    pub status_style: StyleModifier,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            day_style: StyleModifier::default(),
            day_text_style: TextFormatModifier::default(),
            other_month_style: StyleModifier::default().fg_color(Color::LightBlack),
            focus_day_style: StyleModifier::default()
                .bg_color(Color::Blue)
                .fg_color(Color::White),
            cursor_style: StyleModifier::default().invert(true),
            today_day_style: StyleModifier::default().fg_color(Color::LightBlue),
            today_day_text_style: TextFormatModifier::default().bold(true),
            today_day_char: Some('*'),
            month_header_style: StyleModifier::default().fg_color(Color::Yellow),
            month_header_text_style: TextFormatModifier::default().bold(true),
            weekday_style: StyleModifier::default().fg_color(Color::Yellow),
            gallery_title_style: StyleModifier::default()
                .format(TextFormatModifier::default().bold(true)),
            tile_style: StyleModifier::default(),
            tile_focus_style: StyleModifier::default().invert(true),
            tile_loading_style: StyleModifier::default().fg_color(Color::LightBlack),
            tile_failed_style: StyleModifier::default().fg_color(Color::LightRed),
            status_style: StyleModifier::default().invert(true),
        }
    }
}

pub struct Context {
    pub theme: Theme,
    pub picker: CalendarPicker,
    pub document: Document,
    pub gallery: Option<MountedGallery<EventSink>>,
    pub gallery_generation: u64,
    pub wallpaper: Option<String>,
    pub last_selected: Option<NaiveDate>,
    today: NaiveDate,
    ticks: usize,
}

impl Context {
    pub fn new(picker: CalendarPicker, today: NaiveDate) -> Self {
        Context {
            theme: Theme::default(),
            picker,
            document: Document::new(),
            gallery: None,
            gallery_generation: 0,
            wallpaper: None,
            last_selected: None,
            today,
            ticks: 0,
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn ticks(&self) -> usize {
        self.ticks
    }

    pub fn update(&mut self) {
        self.today = calendar::today();
        self.ticks = self.ticks.wrapping_add(1);
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }
}
