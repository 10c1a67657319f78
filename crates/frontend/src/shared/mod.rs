pub mod api;
pub mod api_utils;
pub mod choices;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod forms;
pub mod icons;
pub mod settings;
pub mod storage;
