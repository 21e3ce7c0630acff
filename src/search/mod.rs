//! Keyword search over the exhibit catalog.
//!
//! [`filter`] is the single matching operation; [`SessionState`] bundles the
//! user's query, field and location choices and evaluates them into a
//! [`SessionView`].

mod field;
mod index;
mod session;

pub use field::{ParseFieldError, SearchField};
pub use index::{ExhibitIndex, filter, filter_by_key};
pub use session::{SessionState, SessionView};
