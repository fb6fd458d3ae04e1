//! Localized string resources.

mod string_table;

pub use string_table::StringTable;
