use anyhow::Result;
use serde_json::Value;
use std::fmt::Debug;

/// Common interface of the planar area geometries.
pub trait GeometryTrait: Debug + Clone + Sized {
	/// Returns the unsigned area of the geometry.
	fn area(&self) -> f64;

	/// Verifies that the geometry can be evaluated: rings are closed, have at
	/// least four coordinates and hold only finite values.
	fn verify(&self) -> Result<()>;

	/// Converts the coordinates into nested JSON arrays, optionally rounded.
	fn to_coord_json(&self, precision: Option<u8>) -> Value;

	/// Checks if a point is strictly inside the geometry.
	///
	/// Points exactly on the boundary may return either value.
	fn contains_point(&self, x: f64, y: f64) -> bool;

	/// Projects every coordinate from WGS84 degrees to Web Mercator meters.
	fn to_mercator(&self) -> Self;

	/// Returns `[x_min, y_min, x_max, y_max]`, or `None` if there are no coordinates.
	fn compute_bounds(&self) -> Option<[f64; 4]>;
}

/// Geometries made of a list of simpler elements, e.g. a polygon made of rings.
pub trait CompositeGeometryTrait<Item>: Debug + Clone {
	fn new() -> Self;

	fn as_vec(&self) -> &Vec<Item>;

	fn as_mut_vec(&mut self) -> &mut Vec<Item>;

	fn into_inner(self) -> Vec<Item>;

	fn is_empty(&self) -> bool {
		self.as_vec().is_empty()
	}

	fn len(&self) -> usize {
		self.as_vec().len()
	}

	fn push(&mut self, item: Item) {
		self.as_mut_vec().push(item);
	}

	fn first(&self) -> Option<&Item> {
		self.as_vec().first()
	}
}

/// Merges a list of optional bounds into one.
pub(crate) fn merge_bounds(bounds: impl Iterator<Item = Option<[f64; 4]>>) -> Option<[f64; 4]> {
	bounds.flatten().reduce(|a, b| [a[0].min(b[0]), a[1].min(b[1]), a[2].max(b[2]), a[3].max(b[3])])
}
