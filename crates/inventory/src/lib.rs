//! Inventory domain module.
//!
//! This crate contains the inventory record shape and its field-level
//! validation rules, implemented purely as deterministic domain logic
//! (no IO, no HTTP, no storage).

pub mod item;

pub use item::{FieldError, InventoryItem};
