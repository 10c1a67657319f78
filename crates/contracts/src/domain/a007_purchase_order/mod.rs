pub mod fields;
pub mod filters;

pub use fields::purchase_order_form;
pub use filters::purchase_order_filters;
