//! Configuration module for the GARCH client.

pub mod api;
pub mod form;

mod debug; // Private: callers go through the re-export below (crate::config::DEBUG_FLAGS)
pub use debug::DEBUG_FLAGS;

pub mod persistence;

// Re-export commonly used items
pub use api::API;
pub use form::{FORM, IntField};
pub use persistence::{APP_STATE_PATH, FORM_STATE_KEY};
