use super::{CompositeGeometryTrait, Coordinates, GeometryTrait};
use anyhow::{Result, ensure};
use serde_json::Value;
use std::fmt::Debug;

/// A closed ring of coordinates. The first and last coordinates are identical.
#[derive(Clone, PartialEq)]
pub struct RingGeometry(pub Vec<Coordinates>);

impl RingGeometry {
	/// Signed area using the shoelace formula: positive for counterclockwise rings.
	#[must_use]
	pub fn signed_area(&self) -> f64 {
		let mut sum = 0f64;
		if let Some(mut p2) = self.0.last() {
			for p1 in &self.0 {
				sum += (p2.x() - p1.x()) * (p1.y() + p2.y());
				p2 = p1;
			}
		}
		sum / 2.0
	}

	/// Iterates over consecutive coordinate pairs, i.e. the edges of the ring.
	pub fn edges(&self) -> impl Iterator<Item = (&Coordinates, &Coordinates)> {
		self.0.windows(2).map(|w| (&w[0], &w[1]))
	}
}

impl GeometryTrait for RingGeometry {
	fn area(&self) -> f64 {
		self.signed_area().abs()
	}

	fn verify(&self) -> Result<()> {
		ensure!(self.0.len() >= 4, "ring must have at least 4 points, found {}", self.0.len());
		ensure!(self.0.first() == self.0.last(), "ring must be closed");
		ensure!(
			self.0.iter().all(Coordinates::is_finite),
			"ring contains non-finite coordinates"
		);
		Ok(())
	}

	fn to_coord_json(&self, precision: Option<u8>) -> Value {
		Value::from(self.0.iter().map(|c| c.to_json(precision)).collect::<Vec<_>>())
	}

	fn contains_point(&self, x: f64, y: f64) -> bool {
		let mut inside = false;
		for (a, b) in self.edges() {
			if ((a.y() > y) != (b.y() > y)) && (x < (b.x() - a.x()) * (y - a.y()) / (b.y() - a.y()) + a.x()) {
				inside = !inside;
			}
		}
		inside
	}

	fn to_mercator(&self) -> RingGeometry {
		RingGeometry(self.0.iter().map(Coordinates::to_mercator).collect())
	}

	fn compute_bounds(&self) -> Option<[f64; 4]> {
		let first = self.0.first()?;
		let mut bounds = [first.x(), first.y(), first.x(), first.y()];
		for c in &self.0 {
			bounds[0] = bounds[0].min(c.x());
			bounds[1] = bounds[1].min(c.y());
			bounds[2] = bounds[2].max(c.x());
			bounds[3] = bounds[3].max(c.y());
		}
		Some(bounds)
	}
}

impl CompositeGeometryTrait<Coordinates> for RingGeometry {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<Coordinates> {
		&self.0
	}
	fn as_mut_vec(&mut self) -> &mut Vec<Coordinates> {
		&mut self.0
	}
	fn into_inner(self) -> Vec<Coordinates> {
		self.0
	}
}

impl Debug for RingGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(RingGeometry, Coordinates);

impl From<geo::LineString<f64>> for RingGeometry {
	fn from(geometry: geo::LineString<f64>) -> Self {
		RingGeometry(geometry.into_iter().map(Coordinates::from).collect())
	}
}

impl From<&RingGeometry> for geo::LineString<f64> {
	fn from(ring: &RingGeometry) -> Self {
		geo::LineString::new(ring.0.iter().map(|c| geo::Coord::from(*c)).collect())
	}
}
