use super::{CompositeGeometryTrait, GeometryTrait, RingGeometry, merge_bounds};
use anyhow::{Context, Result, ensure};
use serde_json::Value;
use std::fmt::Debug;

/// A polygon: one exterior ring followed by zero or more hole rings.
#[derive(Clone, PartialEq)]
pub struct PolygonGeometry(pub Vec<RingGeometry>);

impl PolygonGeometry {
	/// Builds the axis-aligned rectangle `[x_min, y_min, x_max, y_max]` as a
	/// counterclockwise closed ring.
	#[must_use]
	pub fn from_rect(bounds: &[f64; 4]) -> PolygonGeometry {
		let [x0, y0, x1, y1] = *bounds;
		PolygonGeometry(vec![RingGeometry::from(vec![
			[x0, y0],
			[x1, y0],
			[x1, y1],
			[x0, y1],
			[x0, y0],
		])])
	}

	#[must_use]
	pub fn exterior(&self) -> Option<&RingGeometry> {
		self.0.first()
	}

	pub fn holes(&self) -> impl Iterator<Item = &RingGeometry> {
		self.0.iter().skip(1)
	}
}

impl GeometryTrait for PolygonGeometry {
	fn area(&self) -> f64 {
		let mut rings = self.0.iter();
		let Some(exterior) = rings.next() else {
			return 0.0;
		};
		exterior.area() - rings.map(GeometryTrait::area).sum::<f64>()
	}

	fn verify(&self) -> Result<()> {
		ensure!(!self.0.is_empty(), "polygon must have at least one ring");
		for (index, ring) in self.0.iter().enumerate() {
			ring.verify().with_context(|| format!("ring {index} is invalid"))?;
		}
		Ok(())
	}

	fn to_coord_json(&self, precision: Option<u8>) -> Value {
		Value::from(self.0.iter().map(|r| r.to_coord_json(precision)).collect::<Vec<_>>())
	}

	fn contains_point(&self, x: f64, y: f64) -> bool {
		let mut rings = self.0.iter();
		let Some(exterior) = rings.next() else {
			return false;
		};
		exterior.contains_point(x, y) && !rings.any(|hole| hole.contains_point(x, y))
	}

	fn to_mercator(&self) -> PolygonGeometry {
		PolygonGeometry(self.0.iter().map(GeometryTrait::to_mercator).collect())
	}

	fn compute_bounds(&self) -> Option<[f64; 4]> {
		merge_bounds(self.0.iter().map(GeometryTrait::compute_bounds))
	}
}

impl CompositeGeometryTrait<RingGeometry> for PolygonGeometry {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<RingGeometry> {
		&self.0
	}
	fn as_mut_vec(&mut self) -> &mut Vec<RingGeometry> {
		&mut self.0
	}
	fn into_inner(self) -> Vec<RingGeometry> {
		self.0
	}
}

impl Debug for PolygonGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(PolygonGeometry, RingGeometry);

impl From<geo::Polygon<f64>> for PolygonGeometry {
	fn from(geometry: geo::Polygon<f64>) -> Self {
		let (exterior, interiors) = geometry.into_inner();
		let mut rings = vec![RingGeometry::from(exterior)];
		rings.extend(interiors.into_iter().map(RingGeometry::from));
		PolygonGeometry(rings)
	}
}

impl From<&PolygonGeometry> for geo::Polygon<f64> {
	fn from(polygon: &PolygonGeometry) -> Self {
		let mut rings = polygon.0.iter().map(geo::LineString::from);
		let exterior = rings.next().unwrap_or_else(|| geo::LineString::new(vec![]));
		geo::Polygon::new(exterior, rings.collect())
	}
}
