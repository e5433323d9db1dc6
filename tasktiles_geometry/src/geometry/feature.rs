use super::Geometry;
use serde_json::{Map, Value, json};

/// A GeoJSON feature: a geometry with an optional id and free-form properties.
///
/// `geometry` is `None` for an unlocated feature (`"geometry": null`).
#[derive(Clone, Debug, PartialEq)]
pub struct GeoFeature {
	pub id: Option<Value>,
	pub geometry: Option<Geometry>,
	pub properties: Map<String, Value>,
}

impl GeoFeature {
	#[must_use]
	pub fn new(geometry: Geometry) -> Self {
		Self {
			id: None,
			geometry: Some(geometry),
			properties: Map::new(),
		}
	}

	#[must_use]
	pub fn without_geometry() -> Self {
		Self {
			id: None,
			geometry: None,
			properties: Map::new(),
		}
	}

	#[must_use]
	pub fn is_polygonal(&self) -> bool {
		self.geometry.as_ref().is_some_and(Geometry::is_polygonal)
	}

	#[must_use]
	pub fn geometry_type(&self) -> &'static str {
		self.geometry.as_ref().map_or("null", Geometry::type_name)
	}

	pub fn set_id(&mut self, id: impl Into<Value>) {
		self.id = Some(id.into());
	}

	pub fn set_property(&mut self, key: &str, value: impl Into<Value>) {
		self.properties.insert(key.to_string(), value.into());
	}

	#[must_use]
	pub fn to_json(&self, precision: Option<u8>) -> Value {
		let mut obj = Map::new();
		obj.insert("type".to_string(), json!("Feature"));
		if let Some(id) = &self.id {
			obj.insert("id".to_string(), id.clone());
		}
		let geometry = self.geometry.as_ref().map_or(Value::Null, |g| g.to_json(precision));
		obj.insert("geometry".to_string(), geometry);
		obj.insert("properties".to_string(), Value::Object(self.properties.clone()));
		Value::Object(obj)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::Coordinates;
	use pretty_assertions::assert_eq;

	#[test]
	fn to_json() {
		let mut feature = GeoFeature::new(Geometry::Point(Coordinates::new(1.25, 2.0)));
		feature.set_id(7);
		feature.set_property("name", "harbour");
		assert_eq!(
			feature.to_json(Some(1)),
			json!({
				"type": "Feature",
				"id": 7,
				"geometry": { "type": "Point", "coordinates": [1.3, 2.0] },
				"properties": { "name": "harbour" }
			})
		);
	}

	#[test]
	fn to_json_without_id() {
		let feature = GeoFeature::new(Geometry::Point(Coordinates::new(0.0, 0.0)));
		let json = feature.to_json(None);
		assert!(json.get("id").is_none());
		assert_eq!(json["properties"], json!({}));
	}

	#[test]
	fn without_geometry() {
		let feature = GeoFeature::without_geometry();
		assert!(!feature.is_polygonal());
		assert_eq!(feature.geometry_type(), "null");
		assert_eq!(
			feature.to_json(None),
			json!({ "type": "Feature", "geometry": null, "properties": {} })
		);
	}
}
