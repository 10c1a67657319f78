//! Tabs of the main area
//!
//! - `page`: the tab wrapper and the tab bar
//! - `registry`: tab key to content
//! - `tab_labels`: tab key to title

pub mod page;
pub mod registry;
pub mod tab_labels;

pub use page::{TabBar, TabPage};
pub use tab_labels::{part_details_key, tab_label_for_key};
