pub mod categories;
pub mod details;
pub mod list;
