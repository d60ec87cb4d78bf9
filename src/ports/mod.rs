//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the application core and an
//! external system. Implementations live in `src/adapters/`.

pub mod preference_store;
pub mod translation_table;

pub use preference_store::PreferenceStore;
pub use translation_table::TranslationTable;
