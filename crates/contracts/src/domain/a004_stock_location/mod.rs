pub mod fields;
pub mod filters;

pub use fields::stock_location_form;
pub use filters::stock_location_filters;
