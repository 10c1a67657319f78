pub mod fields;
pub mod filters;

pub use fields::project_code_form;
pub use filters::project_code_filters;
