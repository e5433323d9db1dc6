//! Reading GeoJSON into the crate's geometry types.
//!
//! Input is parsed with `serde_json` and converted into [`crate::GeoCollection`],
//! [`crate::GeoFeature`] and [`crate::Geometry`]. Elevation values of positions
//! are dropped while parsing.

mod parse;
mod read;

pub use parse::*;
pub use read::*;
