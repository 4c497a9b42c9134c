//! Incentive Editor UI Module
//!
//! Simplified MVVM pattern implementation:
//! - model.rs: persistence of the incentive book
//! - view_model.rs: ViewModel with commands and state management
//! - view.rs: Leptos components (pure UI)

mod model;
mod view;
mod view_model;

pub use view::IncentiveEditor;
pub use view_model::{IncentiveEditorViewModel, SalaryDisplay};
