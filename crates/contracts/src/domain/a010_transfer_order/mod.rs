pub mod fields;
pub mod filters;

pub use fields::transfer_order_form;
pub use filters::transfer_order_filters;
