//! Entity forms: reactive state, follow-up lookups and the edit dialog

pub mod controller;
pub mod dialog;
pub mod follow_ups;

pub use controller::FormController;
pub use dialog::EntityFormDialog;
