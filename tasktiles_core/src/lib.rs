//! Grid math shared by the tasktiles crates: the constants of the global tiling
//! scheme, planar bounding boxes, candidate tile ranges and the error type of
//! the tiling core.

mod bbox;
mod constants;
mod error;
pub mod grid;

pub use bbox::*;
pub use constants::*;
pub use error::*;
pub use grid::{TileRange, check_zoom_level, tile_edge_length, tiles_per_axis};
