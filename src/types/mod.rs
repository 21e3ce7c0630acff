//! Catalog records and the values handed back to embedders.

mod exhibit;
mod outcome;

pub use exhibit::{Category, ExhibitRecord, NO_TRAITS_SENTINEL, Source, Traits, UNKNOWN_SOURCE};
pub use outcome::SearchOutcome;
