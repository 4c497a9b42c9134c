pub mod config;
pub mod ui;

pub use config::IncentiveEditorConfig;
