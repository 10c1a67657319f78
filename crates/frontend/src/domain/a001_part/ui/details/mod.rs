//! Part page
//!
//! - model.rs: API calls
//! - view_model.rs: loaded part and the panels it shows
//! - view.rs: Leptos component

mod model;
mod view;
mod view_model;

pub use view::PartDetails;
pub use view_model::PartDetailsViewModel;
