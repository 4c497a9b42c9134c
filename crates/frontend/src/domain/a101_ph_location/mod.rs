pub mod api;
pub mod cascade;
pub mod config;
pub mod ui;

pub use config::AddressFieldsConfig;
