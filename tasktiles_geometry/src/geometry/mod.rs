#![allow(clippy::module_inception)]

mod collection;
mod feature;
mod geometry;
mod types;

pub use collection::*;
pub use feature::*;
pub use geometry::*;
pub use types::*;
