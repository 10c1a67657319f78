pub mod aggregate;
pub mod fields;
pub mod filters;

pub use aggregate::Part;
pub use fields::part_form;
pub use filters::{part_category_filters, part_filters};
