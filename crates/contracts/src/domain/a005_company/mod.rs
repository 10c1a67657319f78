pub mod fields;
pub mod filters;

pub use fields::company_form;
pub use filters::company_filters;
