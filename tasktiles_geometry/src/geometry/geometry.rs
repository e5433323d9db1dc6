use super::*;
use serde_json::{Map, Value};
use std::fmt::Debug;

/// Any GeoJSON geometry. Only the polygonal variants take part in tiling.
#[derive(Clone, PartialEq)]
pub enum Geometry {
	Point(Coordinates),
	LineString(Vec<Coordinates>),
	Polygon(PolygonGeometry),
	MultiPoint(Vec<Coordinates>),
	MultiLineString(Vec<Vec<Coordinates>>),
	MultiPolygon(MultiPolygonGeometry),
	GeometryCollection(Vec<Geometry>),
}

impl Geometry {
	pub fn new_polygon<T>(value: Vec<Vec<T>>) -> Self
	where
		Coordinates: From<T>,
	{
		Self::Polygon(PolygonGeometry(value.into_iter().map(RingGeometry::from).collect()))
	}

	pub fn new_multi_polygon<T>(value: Vec<Vec<Vec<T>>>) -> Self
	where
		Coordinates: From<T>,
	{
		Self::MultiPolygon(MultiPolygonGeometry(
			value
				.into_iter()
				.map(|p| PolygonGeometry(p.into_iter().map(RingGeometry::from).collect()))
				.collect(),
		))
	}

	#[must_use]
	pub fn type_name(&self) -> &'static str {
		match self {
			Geometry::Point(_) => "Point",
			Geometry::LineString(_) => "LineString",
			Geometry::Polygon(_) => "Polygon",
			Geometry::MultiPoint(_) => "MultiPoint",
			Geometry::MultiLineString(_) => "MultiLineString",
			Geometry::MultiPolygon(_) => "MultiPolygon",
			Geometry::GeometryCollection(_) => "GeometryCollection",
		}
	}

	#[must_use]
	pub fn is_polygonal(&self) -> bool {
		matches!(self, Geometry::Polygon(_) | Geometry::MultiPolygon(_))
	}

	/// Returns the polygons of a polygonal geometry, or an empty list otherwise.
	#[must_use]
	pub fn into_polygons(self) -> Vec<PolygonGeometry> {
		match self {
			Geometry::Polygon(p) => vec![p],
			Geometry::MultiPolygon(m) => m.0,
			_ => vec![],
		}
	}

	#[must_use]
	pub fn to_json(&self, precision: Option<u8>) -> Value {
		let (key, value) = match self {
			Geometry::Point(c) => ("coordinates", c.to_json(precision)),
			Geometry::LineString(l) | Geometry::MultiPoint(l) => ("coordinates", coords_to_json(l, precision)),
			Geometry::MultiLineString(m) => (
				"coordinates",
				Value::from(
					m.iter()
						.map(|l| coords_to_json(l, precision))
						.collect::<Vec<_>>(),
				),
			),
			Geometry::Polygon(p) => ("coordinates", p.to_coord_json(precision)),
			Geometry::MultiPolygon(m) => ("coordinates", m.to_coord_json(precision)),
			Geometry::GeometryCollection(geometries) => (
				"geometries",
				Value::from(geometries.iter().map(|g| g.to_json(precision)).collect::<Vec<_>>()),
			),
		};
		let mut object = Map::new();
		object.insert("type".to_string(), Value::from(self.type_name()));
		object.insert(key.to_string(), value);
		Value::Object(object)
	}
}

fn coords_to_json(coords: &[Coordinates], precision: Option<u8>) -> Value {
	Value::from(coords.iter().map(|c| c.to_json(precision)).collect::<Vec<_>>())
}

impl From<PolygonGeometry> for Geometry {
	fn from(polygon: PolygonGeometry) -> Self {
		Geometry::Polygon(polygon)
	}
}

impl From<MultiPolygonGeometry> for Geometry {
	fn from(multi: MultiPolygonGeometry) -> Self {
		Geometry::MultiPolygon(multi)
	}
}

impl Debug for Geometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let inner: &dyn Debug = match self {
			Geometry::Point(g) => g,
			Geometry::LineString(g) | Geometry::MultiPoint(g) => g,
			Geometry::Polygon(g) => g,
			Geometry::MultiLineString(g) => g,
			Geometry::MultiPolygon(g) => g,
			Geometry::GeometryCollection(g) => g,
		};
		f.debug_tuple(self.type_name()).field(inner).finish()
	}
}
