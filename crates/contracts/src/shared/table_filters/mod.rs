//! Table filter registry
//!
//! Every list table in the UI is identified by a string key ("stock", "part",
//! "purchaseorder", ...). [`table_filters`] returns the filters available for
//! that table. Choice lists which live on the server are not fetched here; the
//! filter carries a [`RemoteChoices`](crate::shared::choices::RemoteChoices)
//! source and the UI loads it when the filter is opened.

pub mod common;
mod registry;
mod types;
mod values;

pub use registry::{table_filters, KNOWN_TABLES};
pub use types::{filter_set, FilterSet, FilterType, TableFilter};
pub use values::{ActiveFilters, LoadedChoices};
