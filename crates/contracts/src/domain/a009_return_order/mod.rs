pub mod fields;
pub mod filters;

pub use fields::return_order_form;
pub use filters::return_order_filters;
