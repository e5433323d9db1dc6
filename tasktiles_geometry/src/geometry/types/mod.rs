// Planar geometry types used by the tiling pipeline: coordinates, rings,
// polygons and multipolygons, plus the traits they share for validation, area,
// bounds, point-in-shape tests and JSON output.

mod coordinates;
mod macros;
mod multi_polygon;
mod polygon;
mod ring;
mod traits;

pub use coordinates::*;
pub use multi_polygon::*;
pub use polygon::*;
pub use ring::*;
pub use traits::*;
