pub mod choices;
pub mod config;
pub mod form_fields;
pub mod panels;
pub mod requests;
pub mod settings;
pub mod table_filters;
pub mod ui_state;
