pub mod fields;
pub mod filters;

pub use fields::supplier_part_form;
pub use filters::supplier_part_filters;
