pub mod api;
pub mod config;
pub mod ui;

pub use config::AttendanceWidgetConfig;
