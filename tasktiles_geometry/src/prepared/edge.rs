use rstar::{AABB, RTreeObject};

/// One edge of a ring, tagged with the index of the polygon it belongs to.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeSegment {
	/// Start point `[x, y]`
	pub start: [f64; 2],
	/// End point `[x, y]`
	pub end: [f64; 2],
	/// Index of the owning polygon within the multipolygon
	pub polygon: usize,
}

impl EdgeSegment {
	#[must_use]
	pub fn new(start: [f64; 2], end: [f64; 2], polygon: usize) -> Self {
		Self { start, end, polygon }
	}

	/// Checks if a horizontal ray from `(px, py)` towards +∞ crosses this edge.
	///
	/// An edge is counted when exactly one endpoint lies above `py`, so a ray
	/// through a shared vertex is counted once.
	#[must_use]
	pub fn ray_crosses(&self, px: f64, py: f64) -> bool {
		let [x1, y1] = self.start;
		let [x2, y2] = self.end;

		if (y1 > py) == (y2 > py) {
			return false;
		}

		let x_intersect = x1 + (x2 - x1) * (py - y1) / (y2 - y1);
		px < x_intersect
	}

	/// Checks if the edge touches the closed rectangle.
	#[must_use]
	pub fn intersects_rect(&self, rect: &geo::Rect<f64>) -> bool {
		use geo::Intersects;
		geo::Line::new(geo::Coord::from(self.start), geo::Coord::from(self.end)).intersects(rect)
	}
}

impl RTreeObject for EdgeSegment {
	type Envelope = AABB<[f64; 2]>;

	fn envelope(&self) -> Self::Envelope {
		AABB::from_corners(
			[self.start[0].min(self.end[0]), self.start[1].min(self.end[1])],
			[self.start[0].max(self.end[0]), self.start[1].max(self.end[1])],
		)
	}
}
