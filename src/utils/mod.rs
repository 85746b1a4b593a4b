//! Utility modules shared by the generators.

pub mod date;
pub mod plural;

pub use plural::plural_count;
