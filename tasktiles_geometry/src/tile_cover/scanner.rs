use super::TileSquare;
use crate::PreparedShape;
use tasktiles_core::TileRange;

/// Walks a candidate range and keeps the tiles whose square touches the shape.
#[derive(Debug)]
pub struct TileScanner<'a> {
	prepared: &'a PreparedShape,
	range: TileRange,
}

impl<'a> TileScanner<'a> {
	#[must_use]
	pub fn new(prepared: &'a PreparedShape, range: TileRange) -> Self {
		Self { prepared, range }
	}

	#[must_use]
	pub fn range(&self) -> &TileRange {
		&self.range
	}

	/// Lazily yields the intersecting tiles, columns outer and rows inner.
	pub fn iter(&self) -> impl Iterator<Item = TileSquare> + '_ {
		let zoom = self.range.zoom();
		self.range.iter_coords().filter_map(move |(col, row)| {
			let bounds = self.range.square_bounds(col, row);
			self.prepared
				.intersects_rect(bounds)
				.then(|| TileSquare::new(zoom, col, row, bounds))
		})
	}

	#[must_use]
	pub fn scan(&self) -> Vec<TileSquare> {
		self.iter().collect()
	}
}
