//! Candidate tile ranges.
//!
//! A [`TileRange`] is the rectangle of tile indices that can possibly touch a
//! shape, derived from the shape's bounding box only. It is a superset of the
//! tiles that really intersect the shape; the exact filtering happens later
//! against the geometry itself.
//!
//! The minimum index is floored and the maximum index is ceiled. When a box
//! edge lies exactly on a tile boundary the range therefore reaches one tile
//! further on the maximum side, and the intersection test decides about it.

use super::{check_zoom_level, tile_edge_length, tiles_per_axis};
use crate::{BBox, GLOBAL_OFFSET, TilingError};
use std::{fmt::Debug, ops::RangeInclusive};

/// An inclusive rectangle of tile indices at one zoom level.
///
/// Invariants: `min_col <= max_col`, `min_row <= max_row`, and every index lies
/// within `0..tiles_per_axis(zoom)`.
#[derive(Clone, Copy, PartialEq)]
pub struct TileRange {
	zoom: u8,
	step: f64,
	min_col: u32,
	max_col: u32,
	min_row: u32,
	max_row: u32,
}

impl TileRange {
	/// Computes the candidate range of `bbox` at `zoom`.
	///
	/// Returns `Ok(None)` if the box lies completely outside the global grid,
	/// in which case no tile can intersect it.
	///
	/// ```
	/// use tasktiles_core::{BBox, TileRange};
	///
	/// let bbox = BBox::new(-1.0, -1.0, 1.0, 1.0).unwrap();
	/// let range = TileRange::from_bbox(&bbox, 1).unwrap().unwrap();
	/// assert_eq!(range.cols(), 0..=1);
	/// assert_eq!(range.rows(), 0..=1);
	/// ```
	pub fn from_bbox(bbox: &BBox, zoom: u8) -> Result<Option<TileRange>, TilingError> {
		let step = tile_edge_length(zoom)?;
		let last = (tiles_per_axis(zoom)? - 1) as f64;

		let min_col = (bbox.x_min + GLOBAL_OFFSET) / step;
		let max_col = (bbox.x_max + GLOBAL_OFFSET) / step;
		let min_row = (bbox.y_min + GLOBAL_OFFSET) / step;
		let max_row = (bbox.y_max + GLOBAL_OFFSET) / step;

		let Some((min_col, max_col)) = clip_to_grid(min_col, max_col, last) else {
			log::trace!("bbox {bbox:?} is outside the grid columns at zoom {zoom}");
			return Ok(None);
		};
		let Some((min_row, max_row)) = clip_to_grid(min_row, max_row, last) else {
			log::trace!("bbox {bbox:?} is outside the grid rows at zoom {zoom}");
			return Ok(None);
		};

		Ok(Some(TileRange {
			zoom,
			step,
			min_col,
			max_col,
			min_row,
			max_row,
		}))
	}

	/// Creates a range from explicit inclusive indices.
	pub fn from_min_and_max(
		zoom: u8,
		min_col: u32,
		min_row: u32,
		max_col: u32,
		max_row: u32,
	) -> Result<TileRange, TilingError> {
		check_zoom_level(zoom)?;
		let size = tiles_per_axis(zoom)?;
		if min_col > max_col || min_row > max_row || u64::from(max_col) >= size || u64::from(max_row) >= size {
			return Err(TilingError::EmptyOrDegenerateShape(format!(
				"tile range {min_col},{min_row}..={max_col},{max_row} is invalid at zoom {zoom}"
			)));
		}
		Ok(TileRange {
			zoom,
			step: tile_edge_length(zoom)?,
			min_col,
			max_col,
			min_row,
			max_row,
		})
	}

	/// The full grid at `zoom`.
	pub fn new_full(zoom: u8) -> Result<TileRange, TilingError> {
		let last = (tiles_per_axis(zoom)? - 1) as u32;
		TileRange::from_min_and_max(zoom, 0, 0, last, last)
	}

	#[must_use]
	pub fn zoom(&self) -> u8 {
		self.zoom
	}

	/// Tile edge length in meters.
	#[must_use]
	pub fn step(&self) -> f64 {
		self.step
	}

	#[must_use]
	pub fn cols(&self) -> RangeInclusive<u32> {
		self.min_col..=self.max_col
	}

	#[must_use]
	pub fn rows(&self) -> RangeInclusive<u32> {
		self.min_row..=self.max_row
	}

	#[must_use]
	pub fn width(&self) -> u32 {
		self.max_col - self.min_col + 1
	}

	#[must_use]
	pub fn height(&self) -> u32 {
		self.max_row - self.min_row + 1
	}

	#[must_use]
	pub fn count_tiles(&self) -> u64 {
		u64::from(self.width()) * u64::from(self.height())
	}

	#[must_use]
	pub fn contains(&self, col: u32, row: u32) -> bool {
		self.cols().contains(&col) && self.rows().contains(&row)
	}

	/// Iterates over all `(col, row)` pairs, columns outer and rows inner, both ascending.
	pub fn iter_coords(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
		self.cols().flat_map(move |col| self.rows().map(move |row| (col, row)))
	}

	/// Bounds `[x_min, y_min, x_max, y_max]` of the tile square at `(col, row)`, in meters.
	#[must_use]
	pub fn square_bounds(&self, col: u32, row: u32) -> [f64; 4] {
		let col = f64::from(col);
		let row = f64::from(row);
		[
			col * self.step - GLOBAL_OFFSET,
			row * self.step - GLOBAL_OFFSET,
			(col + 1.0) * self.step - GLOBAL_OFFSET,
			(row + 1.0) * self.step - GLOBAL_OFFSET,
		]
	}

	/// Bounding box of the whole range, in meters.
	#[must_use]
	pub fn to_bbox(&self) -> BBox {
		let [x_min, y_min, _, _] = self.square_bounds(self.min_col, self.min_row);
		let [_, _, x_max, y_max] = self.square_bounds(self.max_col, self.max_row);
		BBox {
			x_min,
			y_min,
			x_max,
			y_max,
		}
	}
}

/// Floors `min`, ceils `max` and clips both to `0..=last`.
///
/// `min` and `max` are positions in tile units. The emptiness check runs on the
/// unrounded `max`, since `ceil` maps any value in `(-1, 0]` to zero.
fn clip_to_grid(min: f64, max: f64, last: f64) -> Option<(u32, u32)> {
	let min = min.floor();
	if max < 0.0 || min > last {
		return None;
	}
	Some((min.max(0.0) as u32, max.ceil().min(last) as u32))
}

impl Debug for TileRange {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"{}: [{}, {}, {}, {}] ({}x{})",
			self.zoom,
			self.min_col,
			self.min_row,
			self.max_col,
			self.max_row,
			self.width(),
			self.height()
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::MAX_ZOOM_LEVEL;
	use rstest::rstest;

	fn range_of(bounds: [f64; 4], zoom: u8) -> Option<TileRange> {
		TileRange::from_bbox(&BBox::from_array(bounds).unwrap(), zoom).unwrap()
	}

	#[test]
	fn unit_square_around_origin_at_zoom_one() {
		let range = range_of([-1.0, -1.0, 1.0, 1.0], 1).unwrap();
		assert_eq!(range.cols(), 0..=1);
		assert_eq!(range.rows(), 0..=1);
		assert_eq!(range.step(), GLOBAL_OFFSET);
		assert_eq!(range.count_tiles(), 4);
	}

	#[test]
	fn floor_and_ceil_are_asymmetric_on_tile_boundaries() {
		// The box spans exactly tile (1, 1) at zoom 2.
		let half = GLOBAL_OFFSET / 2.0;
		let range = range_of([-half, -half, 0.0, 0.0], 2).unwrap();
		assert_eq!(range.cols(), 1..=2);
		assert_eq!(range.rows(), 1..=2);
	}

	#[test]
	fn point_inside_a_tile_spans_two_candidates_per_axis() {
		let step = tile_edge_length(4).unwrap();
		let x = 5.5 * step - GLOBAL_OFFSET;
		let y = 9.25 * step - GLOBAL_OFFSET;
		let range = range_of([x, y, x, y], 4).unwrap();
		assert_eq!(range.cols(), 5..=6);
		assert_eq!(range.rows(), 9..=10);
	}

	#[rstest]
	#[case(1)]
	#[case(2)]
	#[case(7)]
	#[case(MAX_ZOOM_LEVEL)]
	fn full_extent_is_clipped_to_the_grid(#[case] zoom: u8) {
		let range = range_of([-GLOBAL_OFFSET, -GLOBAL_OFFSET, GLOBAL_OFFSET, GLOBAL_OFFSET], zoom).unwrap();
		assert_eq!(range, TileRange::new_full(zoom).unwrap());
		assert_eq!(range.width() as u64, tiles_per_axis(zoom).unwrap());
	}

	#[rstest]
	#[case([GLOBAL_OFFSET + 10.0, 0.0, GLOBAL_OFFSET + 20.0, 10.0])]
	#[case([-GLOBAL_OFFSET - 20.0, 0.0, -GLOBAL_OFFSET - 10.0, 10.0])]
	#[case([0.0, GLOBAL_OFFSET * 3.0, 10.0, GLOBAL_OFFSET * 4.0])]
	#[case([0.0, -GLOBAL_OFFSET * 4.0, 10.0, -GLOBAL_OFFSET * 3.0])]
	fn outside_the_grid_is_none(#[case] bounds: [f64; 4]) {
		assert_eq!(range_of(bounds, 3), None);
	}

	#[test]
	fn partially_outside_is_clipped() {
		let range = range_of([-GLOBAL_OFFSET * 2.0, -10.0, 10.0, GLOBAL_OFFSET * 2.0], 2).unwrap();
		assert_eq!(range.cols(), 0..=3);
		assert_eq!(range.rows(), 1..=3);
	}

	#[test]
	fn invalid_zoom_is_rejected_before_arithmetic() {
		let bbox = BBox::new(0.0, 0.0, 1.0, 1.0).unwrap();
		assert_eq!(TileRange::from_bbox(&bbox, 0), Err(TilingError::InvalidZoomLevel(0)));
	}

	#[test]
	fn iter_coords_is_column_major() {
		let range = TileRange::from_min_and_max(3, 2, 5, 3, 6).unwrap();
		let coords: Vec<(u32, u32)> = range.iter_coords().collect();
		assert_eq!(coords, vec![(2, 5), (2, 6), (3, 5), (3, 6)]);
		assert!(range.contains(3, 6));
		assert!(!range.contains(4, 6));
	}

	#[test]
	fn square_bounds_tile_the_plane() {
		let range = TileRange::new_full(2).unwrap();
		let step = range.step();
		assert_eq!(range.square_bounds(0, 0), [-GLOBAL_OFFSET, -GLOBAL_OFFSET, step - GLOBAL_OFFSET, step - GLOBAL_OFFSET]);
		assert_eq!(range.square_bounds(2, 1)[0], 0.0);
		assert_eq!(range.square_bounds(1, 2)[2], 0.0);
		assert_eq!(range.to_bbox().as_tuple(), (-GLOBAL_OFFSET, -GLOBAL_OFFSET, GLOBAL_OFFSET, GLOBAL_OFFSET));
	}

	#[rstest]
	#[case((3, 2, 1, 1, 4))]
	#[case((3, 0, 0, 8, 0))]
	#[case((0, 0, 0, 0, 0))]
	fn from_min_and_max_rejects_invalid(#[case] args: (u8, u32, u32, u32, u32)) {
		let (zoom, c0, r0, c1, r1) = args;
		assert!(TileRange::from_min_and_max(zoom, c0, r0, c1, r1).is_err());
	}

	#[test]
	fn debug_format() {
		let range = TileRange::from_min_and_max(4, 1, 2, 3, 5).unwrap();
		assert_eq!(format!("{range:?}"), "4: [1, 2, 3, 5] (3x4)");
	}
}
