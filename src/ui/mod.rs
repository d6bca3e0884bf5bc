pub mod app;
pub mod calendar_window;
pub mod context;
pub mod gallery_window;
pub mod status_bar;

pub use app::App;
pub use calendar_window::CalendarWindow;
pub use context::{Context, Theme};
pub use gallery_window::GalleryWindow;
pub use status_bar::StatusBar;
