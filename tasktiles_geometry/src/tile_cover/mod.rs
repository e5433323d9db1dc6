//! Finding the grid tiles a shape touches.
//!
//! [`tiles_intersecting`] is the entry point: it checks the zoom level,
//! prepares the shape, derives the candidate [`TileRange`] from the shape's
//! bounding box and lets a [`TileScanner`] test every candidate square
//! against the prepared shape.
//!
//! # Examples
//! ```
//! use tasktiles_geometry::{MultiPolygonGeometry, PolygonGeometry, tiles_intersecting};
//!
//! let square = PolygonGeometry::from_rect(&[-1.0, -1.0, 1.0, 1.0]);
//! let tiles = tiles_intersecting(&MultiPolygonGeometry::from(square), 1).unwrap();
//! let coords: Vec<(u32, u32)> = tiles.iter().map(|t| (t.col, t.row)).collect();
//! assert_eq!(coords, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
//! ```

mod scanner;
mod square;

pub use scanner::TileScanner;
pub use square::TileSquare;

use crate::{MultiPolygonGeometry, PreparedShape};
use log::debug;
use tasktiles_core::{TileRange, TilingError, check_zoom_level};

/// Returns every tile at `zoom` whose closed square shares at least one point
/// with `shape`, ordered by column and then by row.
///
/// A shape outside the global extent yields an empty list.
///
/// # Errors
/// - [`TilingError::InvalidZoomLevel`] for zoom 0 or above the maximum zoom level.
/// - [`TilingError::EmptyOrDegenerateShape`] and [`TilingError::MalformedGeometry`]
///   if the shape cannot be prepared, see [`PreparedShape::new`].
pub fn tiles_intersecting(shape: &MultiPolygonGeometry, zoom: u8) -> Result<Vec<TileSquare>, TilingError> {
	let zoom = check_zoom_level(zoom)?;
	let prepared = PreparedShape::new(shape)?;

	let Some(range) = TileRange::from_bbox(prepared.bbox(), zoom)? else {
		debug!("shape {:?} lies outside the global extent", prepared.bbox());
		return Ok(Vec::new());
	};

	debug!("testing {} candidate tiles in {range:?}", range.count_tiles());
	let tiles = TileScanner::new(&prepared, range).scan();
	debug!("{} tiles intersect the shape at zoom {zoom}", tiles.len());

	Ok(tiles)
}
