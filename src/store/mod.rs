//! Session-scoped data store.
//!
//! Holds the single snapshot of user-facing state and the refresh
//! operations that write into it.

mod state;

pub use state::DataStore;
