use crate::{GeometryTrait, PolygonGeometry};
use serde_json::{Value, json};

/// One grid tile that intersects a shape, together with its square.
#[derive(Clone, Debug, PartialEq)]
pub struct TileSquare {
	pub zoom: u8,
	pub col: u32,
	pub row: u32,
	/// `[x_min, y_min, x_max, y_max]` in meters
	pub bounds: [f64; 4],
	/// The tile square as a closed counterclockwise ring
	pub polygon: PolygonGeometry,
}

impl TileSquare {
	#[must_use]
	pub fn new(zoom: u8, col: u32, row: u32, bounds: [f64; 4]) -> Self {
		Self {
			zoom,
			col,
			row,
			bounds,
			polygon: PolygonGeometry::from_rect(&bounds),
		}
	}

	#[must_use]
	pub fn to_rect(&self) -> geo::Rect<f64> {
		let [x_min, y_min, x_max, y_max] = self.bounds;
		geo::Rect::new(geo::coord! { x: x_min, y: y_min }, geo::coord! { x: x_max, y: y_max })
	}

	/// GeoJSON feature of the tile square with the properties `x`, `y` and `zoom`.
	#[must_use]
	pub fn to_feature_json(&self, precision: Option<u8>) -> Value {
		json!({
			"type": "Feature",
			"geometry": {
				"type": "Polygon",
				"coordinates": self.polygon.to_coord_json(precision),
			},
			"properties": { "x": self.col, "y": self.row, "zoom": self.zoom },
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use tasktiles_core::{GLOBAL_OFFSET, TileRange};

	#[test]
	fn square_matches_bounds() {
		let range = TileRange::new_full(1).unwrap();
		let tile = TileSquare::new(1, 0, 1, range.square_bounds(0, 1));
		assert_eq!(tile.bounds, [-GLOBAL_OFFSET, 0.0, 0.0, GLOBAL_OFFSET]);
		assert_eq!(tile.polygon.compute_bounds(), Some(tile.bounds));
		assert_eq!(tile.to_rect().min(), geo::coord! { x: -GLOBAL_OFFSET, y: 0.0 });
	}

	#[test]
	fn feature_json() {
		let tile = TileSquare::new(3, 5, 6, [10.25, 20.0, 30.75, 40.0]);
		assert_eq!(
			tile.to_feature_json(Some(1)),
			json!({
				"type": "Feature",
				"geometry": {
					"type": "Polygon",
					"coordinates": [[[10.3, 20.0], [30.8, 20.0], [30.8, 40.0], [10.3, 40.0], [10.3, 20.0]]],
				},
				"properties": { "x": 5, "y": 6, "zoom": 3 },
			})
		);
	}
}
