pub mod fields;
pub mod filters;

pub use fields::sales_order_form;
pub use filters::sales_order_filters;
