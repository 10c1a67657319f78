//! Platform-independent metadata for the inventory admin UI: table filters,
//! form field sets, panel composition and persisted UI state.

pub mod domain;
pub mod enums;
pub mod shared;
pub mod system;
