use crate::{Coordinates, GeoCollection, GeoFeature, Geometry, MultiPolygonGeometry, PolygonGeometry, RingGeometry};
use anyhow::{Context, Result, anyhow, bail, ensure};
use serde_json::{Map, Value};

pub fn parse_geojson(json: &str) -> Result<GeoCollection> {
	let value: Value = serde_json::from_str(json).context("invalid JSON")?;
	parse_geojson_collection(&value)
}

pub fn parse_geojson_collection(value: &Value) -> Result<GeoCollection> {
	let object = as_object(value, "FeatureCollection")?;
	check_type(object, "FeatureCollection")?;

	let features = object
		.get("features")
		.ok_or_else(|| anyhow!("FeatureCollection is missing 'features'"))?
		.as_array()
		.ok_or_else(|| anyhow!("'features' must be an array"))?;

	let features = features
		.iter()
		.enumerate()
		.map(|(index, feature)| parse_geojson_feature(feature).with_context(|| format!("feature {index}")))
		.collect::<Result<Vec<_>>>()?;

	Ok(GeoCollection { features })
}

fn as_object<'a>(value: &'a Value, name: &str) -> Result<&'a Map<String, Value>> {
	value
		.as_object()
		.ok_or_else(|| anyhow!("{name} must be a JSON object"))
}

fn check_type(object: &Map<String, Value>, name: &str) -> Result<()> {
	let object_type = object
		.get("type")
		.and_then(Value::as_str)
		.ok_or_else(|| anyhow!("{name} must have a type"))?;

	if object_type != name {
		bail!("type must be '{name}'")
	}
	Ok(())
}

pub fn parse_geojson_feature(value: &Value) -> Result<GeoFeature> {
	let object = as_object(value, "Feature")?;
	check_type(object, "Feature")?;

	let id = match object.get("id") {
		None | Some(Value::Null) => None,
		Some(id @ (Value::String(_) | Value::Number(_))) => Some(id.clone()),
		Some(_) => bail!("feature id must be a string or a number"),
	};

	// unlocated features are kept, they just never take part in tiling
	let geometry = match object.get("geometry") {
		None | Some(Value::Null) => None,
		Some(geometry) => Some(parse_geojson_geometry(geometry)?),
	};

	let properties = match object.get("properties") {
		None | Some(Value::Null) => Map::new(),
		Some(Value::Object(properties)) => properties.clone(),
		Some(_) => bail!("feature properties must be an object"),
	};

	Ok(GeoFeature {
		id,
		geometry,
		properties,
	})
}

pub fn parse_geojson_geometry(value: &Value) -> Result<Geometry> {
	let object = as_object(value, "geometry")?;
	let geometry_type = object
		.get("type")
		.and_then(Value::as_str)
		.ok_or_else(|| anyhow!("geometry must have a type"))?;

	if geometry_type == "GeometryCollection" {
		let geometries = object
			.get("geometries")
			.ok_or_else(|| anyhow!("GeometryCollection is missing 'geometries'"))?
			.as_array()
			.ok_or_else(|| anyhow!("'geometries' must be an array"))?
			.iter()
			.map(parse_geojson_geometry)
			.collect::<Result<Vec<_>>>()?;
		return Ok(Geometry::GeometryCollection(geometries));
	}

	let coordinates = object
		.get("coordinates")
		.ok_or_else(|| anyhow!("geometry must have coordinates"))?;
	let coordinates = parse_geojson_coordinates(coordinates)?;

	let geometry = match geometry_type {
		"Point" => Geometry::Point(coordinates.into_c0()?),
		"LineString" => Geometry::LineString(coordinates.into_c1()?),
		"MultiPoint" => Geometry::MultiPoint(coordinates.into_c1()?),
		"Polygon" => Geometry::Polygon(new_polygon(coordinates.into_c2()?)),
		"MultiLineString" => Geometry::MultiLineString(coordinates.into_c2()?),
		"MultiPolygon" => Geometry::MultiPolygon(MultiPolygonGeometry(
			coordinates.into_c3()?.into_iter().map(new_polygon).collect(),
		)),
		_ => bail!("unknown geometry type '{geometry_type}'"),
	};

	Ok(geometry)
}

fn new_polygon(rings: Vec<Vec<Coordinates>>) -> PolygonGeometry {
	PolygonGeometry(rings.into_iter().map(RingGeometry).collect())
}

/// Nested coordinate arrays of unknown depth, as found in `coordinates`.
enum TemporaryCoordinates {
	V(f64),
	C0(Coordinates),
	C1(Vec<Coordinates>),
	C2(Vec<Vec<Coordinates>>),
	C3(Vec<Vec<Vec<Coordinates>>>),
}

impl TemporaryCoordinates {
	fn name(&self) -> &'static str {
		match self {
			TemporaryCoordinates::V(_) => "a number",
			TemporaryCoordinates::C0(_) => "a position",
			TemporaryCoordinates::C1(_) => "a list of positions",
			TemporaryCoordinates::C2(_) => "a list of lists of positions",
			TemporaryCoordinates::C3(_) => "a list of polygons",
		}
	}
	fn into_v(self) -> Result<f64> {
		match self {
			TemporaryCoordinates::V(v) => Ok(v),
			other => bail!("expected a number, found {}", other.name()),
		}
	}
	fn into_c0(self) -> Result<Coordinates> {
		match self {
			TemporaryCoordinates::C0(v) => Ok(v),
			other => bail!("expected a position, found {}", other.name()),
		}
	}
	fn into_c1(self) -> Result<Vec<Coordinates>> {
		match self {
			TemporaryCoordinates::C1(v) => Ok(v),
			other => bail!("expected a list of positions, found {}", other.name()),
		}
	}
	fn into_c2(self) -> Result<Vec<Vec<Coordinates>>> {
		match self {
			TemporaryCoordinates::C2(v) => Ok(v),
			other => bail!("expected a list of lists of positions, found {}", other.name()),
		}
	}
	fn into_c3(self) -> Result<Vec<Vec<Vec<Coordinates>>>> {
		match self {
			TemporaryCoordinates::C3(v) => Ok(v),
			other => bail!("expected a list of polygons, found {}", other.name()),
		}
	}
}

fn parse_geojson_coordinates(value: &Value) -> Result<TemporaryCoordinates> {
	use TemporaryCoordinates::{C0, C1, C2, C3, V};

	match value {
		Value::Number(number) => number
			.as_f64()
			.map(V)
			.ok_or_else(|| anyhow!("coordinate {number} is not a valid number")),
		Value::Array(entries) => {
			let list = entries
				.iter()
				.map(parse_geojson_coordinates)
				.collect::<Result<Vec<_>>>()?;

			let Some(first) = list.first() else {
				bail!("empty arrays are not allowed in coordinates")
			};

			Ok(match first {
				V(_) => {
					// a third value is the elevation, which is not needed for tiling
					ensure!(
						list.len() == 2 || list.len() == 3,
						"positions must have two or three values, found {}",
						list.len()
					);
					let values = list
						.into_iter()
						.map(TemporaryCoordinates::into_v)
						.collect::<Result<Vec<f64>>>()?;
					C0(Coordinates::new(values[0], values[1]))
				}
				C0(_) => C1(list.into_iter().map(TemporaryCoordinates::into_c0).collect::<Result<_>>()?),
				C1(_) => C2(list.into_iter().map(TemporaryCoordinates::into_c1).collect::<Result<_>>()?),
				C2(_) => C3(list.into_iter().map(TemporaryCoordinates::into_c2).collect::<Result<_>>()?),
				C3(_) => bail!("coordinates are nested too deep"),
			})
		}
		other => bail!("expected an array or number while parsing coordinates, but got {other}"),
	}
}
