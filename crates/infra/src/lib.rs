//! Storage infrastructure for the inventory service.
//!
//! The only persistence concern is the [`ItemStore`] gateway: an explicit
//! struct-to-row mapping over SQLite with no query logic beyond single-row
//! reads and writes keyed by the surrogate id.

pub mod item_store;

pub use item_store::{ItemStore, StoreError};
