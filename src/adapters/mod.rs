//! Adapter implementations for port traits.
//!
//! - `file_store` — JSON file standing in for browser local storage
//! - `memory_store` — process-local store for tests and one-off contexts
//! - `json_table` — embedded and on-disk translation tables

pub mod file_store;
pub mod json_table;
pub mod memory_store;
