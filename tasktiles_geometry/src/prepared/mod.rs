//! A polygon shape prepared for many intersection queries.
//!
//! [`PreparedShape`] validates a [`MultiPolygonGeometry`] once and indexes all
//! ring edges in an R-tree. Each query then only touches the edges near the
//! queried rectangle or point instead of walking the whole shape.

mod edge;

pub use edge::EdgeSegment;

use crate::{GeometryTrait, MultiPolygonGeometry};
use log::trace;
use rstar::{AABB, RTree};
use tasktiles_core::{BBox, TilingError};

/// Validated, read-only shape with an edge index for fast rectangle tests.
pub struct PreparedShape {
	edge_rtree: RTree<EdgeSegment>,
	bbox: BBox,
	polygon_count: usize,
}

impl std::fmt::Debug for PreparedShape {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("PreparedShape")
			.field("bbox", &self.bbox)
			.field("polygon_count", &self.polygon_count)
			.field("edge_count", &self.edge_rtree.size())
			.finish()
	}
}

impl PreparedShape {
	/// Validates the shape and builds the edge index.
	///
	/// # Errors
	/// - [`TilingError::EmptyOrDegenerateShape`] if the shape has no coordinates or no area.
	/// - [`TilingError::MalformedGeometry`] if a ring is not closed, has fewer than four
	///   coordinates or contains non-finite values.
	pub fn new(shape: &MultiPolygonGeometry) -> Result<PreparedShape, TilingError> {
		if shape.has_no_coordinates() {
			return Err(TilingError::EmptyOrDegenerateShape("shape has no coordinates".into()));
		}

		shape
			.verify()
			.map_err(|e| TilingError::MalformedGeometry(format!("{e:#}")))?;

		let area = shape.area();
		if area <= 0.0 {
			return Err(TilingError::EmptyOrDegenerateShape("shape has zero area".into()));
		}

		let bounds = shape
			.compute_bounds()
			.ok_or_else(|| TilingError::EmptyOrDegenerateShape("shape has no coordinates".into()))?;
		let bbox = BBox::from_array(bounds)?;

		let edges = extract_edges(shape);
		trace!("indexing {} edges of {} polygons, bounds {bbox:?}", edges.len(), shape.0.len());

		Ok(PreparedShape {
			edge_rtree: RTree::bulk_load(edges),
			bbox,
			polygon_count: shape.0.len(),
		})
	}

	#[must_use]
	pub fn bbox(&self) -> &BBox {
		&self.bbox
	}

	#[must_use]
	pub fn edge_count(&self) -> usize {
		self.edge_rtree.size()
	}

	/// Checks if the closed rectangle `[x_min, y_min, x_max, y_max]` shares at
	/// least one point with the shape. Touching edges and corners count.
	#[must_use]
	pub fn intersects_rect(&self, rect: [f64; 4]) -> bool {
		let [x_min, y_min, x_max, y_max] = rect;
		if x_max < self.bbox.x_min || x_min > self.bbox.x_max || y_max < self.bbox.y_min || y_min > self.bbox.y_max {
			return false;
		}

		// a boundary crossing or touching the rectangle, including a shape
		// lying completely inside the rectangle
		let envelope = AABB::from_corners([x_min, y_min], [x_max, y_max]);
		let geo_rect = geo::Rect::new(geo::coord! { x: x_min, y: y_min }, geo::coord! { x: x_max, y: y_max });
		if self
			.edge_rtree
			.locate_in_envelope_intersecting(&envelope)
			.any(|edge| edge.intersects_rect(&geo_rect))
		{
			return true;
		}

		// no boundary reaches the rectangle, so it is either fully inside or fully outside
		self.contains_point(x_min, y_min)
	}

	/// Checks if a point is inside the shape using R-tree accelerated ray casting.
	///
	/// Crossings are counted per polygon, so holes cancel out within their
	/// polygon while overlapping polygons don't cancel each other.
	#[must_use]
	pub fn contains_point(&self, x: f64, y: f64) -> bool {
		if !self.bbox.contains_point(x, y) {
			return false;
		}

		let envelope = AABB::from_corners([x, y], [self.bbox.x_max, y]);

		let mut crossed: Vec<usize> = self
			.edge_rtree
			.locate_in_envelope_intersecting(&envelope)
			.filter(|edge| edge.ray_crosses(x, y))
			.map(|edge| edge.polygon)
			.collect();

		crossed.sort_unstable();
		crossed.chunk_by(|a, b| a == b).any(|run| run.len() % 2 == 1)
	}
}

fn extract_edges(shape: &MultiPolygonGeometry) -> Vec<EdgeSegment> {
	let mut edges = Vec::new();
	for (index, polygon) in shape.0.iter().enumerate() {
		for ring in &polygon.0 {
			for (a, b) in ring.edges() {
				edges.push(EdgeSegment::new(a.as_array(), b.as_array(), index));
			}
		}
	}
	edges
}
