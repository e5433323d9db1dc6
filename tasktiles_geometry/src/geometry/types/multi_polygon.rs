use super::{CompositeGeometryTrait, GeometryTrait, PolygonGeometry, merge_bounds};
use anyhow::{Context, Result};
use serde_json::Value;
use std::fmt::Debug;

/// A set of polygons treated as one area shape.
#[derive(Clone, PartialEq)]
pub struct MultiPolygonGeometry(pub Vec<PolygonGeometry>);

impl MultiPolygonGeometry {
	/// Returns `true` if there is no polygon with at least one coordinate.
	#[must_use]
	pub fn has_no_coordinates(&self) -> bool {
		self.0.iter().all(|p| p.0.iter().all(|r| r.0.is_empty()))
	}
}

impl GeometryTrait for MultiPolygonGeometry {
	fn area(&self) -> f64 {
		self.0.iter().map(GeometryTrait::area).sum()
	}

	fn verify(&self) -> Result<()> {
		for (index, polygon) in self.0.iter().enumerate() {
			polygon.verify().with_context(|| format!("polygon {index} is invalid"))?;
		}
		Ok(())
	}

	fn to_coord_json(&self, precision: Option<u8>) -> Value {
		Value::from(self.0.iter().map(|p| p.to_coord_json(precision)).collect::<Vec<_>>())
	}

	fn contains_point(&self, x: f64, y: f64) -> bool {
		self.0.iter().any(|polygon| polygon.contains_point(x, y))
	}

	fn to_mercator(&self) -> MultiPolygonGeometry {
		MultiPolygonGeometry(self.0.iter().map(GeometryTrait::to_mercator).collect())
	}

	fn compute_bounds(&self) -> Option<[f64; 4]> {
		merge_bounds(self.0.iter().map(GeometryTrait::compute_bounds))
	}
}

impl CompositeGeometryTrait<PolygonGeometry> for MultiPolygonGeometry {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<PolygonGeometry> {
		&self.0
	}
	fn as_mut_vec(&mut self) -> &mut Vec<PolygonGeometry> {
		&mut self.0
	}
	fn into_inner(self) -> Vec<PolygonGeometry> {
		self.0
	}
}

impl Debug for MultiPolygonGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(MultiPolygonGeometry, PolygonGeometry);

impl From<PolygonGeometry> for MultiPolygonGeometry {
	fn from(polygon: PolygonGeometry) -> Self {
		MultiPolygonGeometry(vec![polygon])
	}
}

impl From<geo::MultiPolygon<f64>> for MultiPolygonGeometry {
	fn from(geometry: geo::MultiPolygon<f64>) -> Self {
		MultiPolygonGeometry(geometry.into_iter().map(PolygonGeometry::from).collect())
	}
}

impl From<&MultiPolygonGeometry> for geo::MultiPolygon<f64> {
	fn from(multi: &MultiPolygonGeometry) -> Self {
		geo::MultiPolygon::new(multi.0.iter().map(geo::Polygon::from).collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn two_squares() -> MultiPolygonGeometry {
		MultiPolygonGeometry(vec![
			PolygonGeometry::from_rect(&[0.0, 0.0, 2.0, 2.0]),
			PolygonGeometry::from_rect(&[10.0, -5.0, 13.0, -4.0]),
		])
	}

	#[test]
	fn area_and_bounds() {
		let multi = two_squares();
		assert_eq!(multi.area(), 7.0);
		assert_eq!(multi.compute_bounds(), Some([0.0, -5.0, 13.0, 2.0]));
		assert_eq!(MultiPolygonGeometry::new().compute_bounds(), None);
	}

	#[test]
	fn contains_point_in_any_member() {
		let multi = two_squares();
		assert!(multi.contains_point(1.0, 1.0));
		assert!(multi.contains_point(12.0, -4.5));
		assert!(!multi.contains_point(5.0, 0.0));
	}

	#[test]
	fn has_no_coordinates() {
		assert!(MultiPolygonGeometry::new().has_no_coordinates());
		assert!(MultiPolygonGeometry(vec![PolygonGeometry::new()]).has_no_coordinates());
		assert!(!two_squares().has_no_coordinates());
	}

	#[test]
	fn verify_reports_polygon_index() {
		let mut multi = two_squares();
		multi.0[1].0[0].0.truncate(3);
		let error = multi.verify().unwrap_err();
		assert_eq!(error.to_string(), "polygon 1 is invalid");
		assert_eq!(error.root_cause().to_string(), "ring must have at least 4 points, found 3");
	}

	#[test]
	fn mercator_projection_keeps_structure() {
		let multi = two_squares().to_mercator();
		assert_eq!(multi.len(), 2);
		assert!(multi.area() > two_squares().area());
	}
}
