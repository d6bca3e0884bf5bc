pub mod calendar;
pub mod config;
pub mod error;
pub mod events;
pub mod gallery;
pub mod host;
pub mod loader;
pub mod ui;
