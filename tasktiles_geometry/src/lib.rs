//! Polygon geometry for tasktiles: geometry types, GeoJSON input, prepared
//! shapes and the search for the grid tiles a shape intersects.

pub mod geojson;
mod geometry;
pub mod prepared;
pub mod tile_cover;

pub use geojson::*;
pub use geometry::*;
pub use prepared::PreparedShape;
pub use tile_cover::{TileScanner, TileSquare, tiles_intersecting};
