pub mod aggregate;
pub mod fields;
pub mod filters;

pub use aggregate::{expiry_from_default_days, StockItem};
pub use fields::stock_item_form;
pub use filters::{stock_filters, stock_test_filters};
