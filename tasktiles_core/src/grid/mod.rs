//! The global tiling grid.
//!
//! The projected plane `-GLOBAL_OFFSET..=GLOBAL_OFFSET` (on both axes) is cut
//! into square tiles. At zoom level `z` a tile has the edge length
//! `GLOBAL_OFFSET / 2^(z-1)`, so the grid holds `2^z` tiles per axis, indexed
//! from `0` at the south-west corner.
//!
//! ```
//! use tasktiles_core::{GLOBAL_OFFSET, tile_edge_length, tiles_per_axis};
//!
//! assert_eq!(tile_edge_length(1).unwrap(), GLOBAL_OFFSET);
//! assert_eq!(tile_edge_length(3).unwrap(), GLOBAL_OFFSET / 4.0);
//! assert_eq!(tiles_per_axis(3).unwrap(), 8);
//! ```

mod tile_range;

pub use tile_range::TileRange;

use crate::{GLOBAL_OFFSET, MAX_ZOOM_LEVEL, TilingError};

/// Accepts zoom levels `1..=MAX_ZOOM_LEVEL`.
///
/// Zoom 0 would need a fractional exponent in the edge length formula, so it
/// is rejected together with levels whose indices would overflow `u32`.
pub fn check_zoom_level(zoom: u8) -> Result<u8, TilingError> {
	if zoom == 0 || zoom > MAX_ZOOM_LEVEL {
		return Err(TilingError::InvalidZoomLevel(zoom));
	}
	Ok(zoom)
}

/// Edge length of one tile at `zoom`, in meters.
pub fn tile_edge_length(zoom: u8) -> Result<f64, TilingError> {
	let zoom = check_zoom_level(zoom)?;
	Ok(GLOBAL_OFFSET / f64::from(1u32 << (zoom - 1)))
}

/// Number of tiles along one axis of the global grid at `zoom`.
pub fn tiles_per_axis(zoom: u8) -> Result<u64, TilingError> {
	let zoom = check_zoom_level(zoom)?;
	Ok(1u64 << zoom)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(0)]
	#[case(32)]
	#[case(255)]
	fn invalid_zoom_levels(#[case] zoom: u8) {
		assert_eq!(tile_edge_length(zoom), Err(TilingError::InvalidZoomLevel(zoom)));
		assert_eq!(tiles_per_axis(zoom), Err(TilingError::InvalidZoomLevel(zoom)));
	}

	#[test]
	fn zoom_one_step_is_global_offset() {
		assert_eq!(tile_edge_length(1).unwrap(), GLOBAL_OFFSET);
		assert_eq!(tiles_per_axis(1).unwrap(), 2);
	}

	#[test]
	fn next_zoom_halves_the_edge_length() {
		for zoom in 1..MAX_ZOOM_LEVEL {
			let coarse = tile_edge_length(zoom).unwrap();
			let fine = tile_edge_length(zoom + 1).unwrap();
			assert_eq!(coarse / 2.0, fine);
			assert_eq!(tiles_per_axis(zoom + 1).unwrap(), 2 * tiles_per_axis(zoom).unwrap());
		}
	}

	#[test]
	fn grid_covers_the_global_extent() {
		for zoom in 1..=MAX_ZOOM_LEVEL {
			let step = tile_edge_length(zoom).unwrap();
			let count = tiles_per_axis(zoom).unwrap() as f64;
			assert_eq!(step * count, 2.0 * GLOBAL_OFFSET);
		}
	}
}
