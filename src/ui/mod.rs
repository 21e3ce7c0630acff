//! Interactive terminal browser for the exhibit catalog.
//!
//! [`SearchUi`] is the public entry point. The remaining submodules hold the
//! event loop, rendering, state and the widgets and themes they draw with.

mod actions;
mod builder;
pub mod components;
pub mod highlight;
pub mod input;
mod render;
mod runtime;
mod state;
pub mod style;

pub use builder::SearchUi;
pub use state::App;
pub use style::Theme;
