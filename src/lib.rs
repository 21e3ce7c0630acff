//! Search and browse a museum exhibit catalog.
//!
//! The core is pure: [`search::filter`] narrows records by one field,
//! [`matching::highlight`] splits text around keyword hits and the
//! [`locations::Gazetteer`] maps provenance text onto map pins.
//! [`search::SessionState`] ties them together, and [`ui::SearchUi`] puts a
//! terminal browser on top.

pub mod app_dirs;
pub mod catalog;
pub mod locations;
pub mod logging;
pub mod matching;
pub mod search;
pub mod types;
pub mod ui;

pub use catalog::{Catalog, CatalogError};
pub use locations::{Gazetteer, MapPoint};
pub use matching::{HighlightSpan, highlight};
pub use search::{SearchField, SessionState, SessionView, filter};
pub use types::{Category, ExhibitRecord, SearchOutcome, Traits};
pub use ui::{SearchUi, Theme};
