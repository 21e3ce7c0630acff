//! Map locations and source-to-location lookup.

mod gazetteer;
mod resolver;

pub use gazetteer::{Gazetteer, GazetteerEntry, MapPoint};
