pub mod fields;
pub mod filters;

pub use fields::build_order_form;
pub use filters::build_order_filters;
