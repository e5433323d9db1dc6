use super::{GeoFeature, Geometry, MultiPolygonGeometry};
use crate::geojson::parse_geojson;
use anyhow::{Result, ensure};
use log::warn;
use serde_json::{Value, json};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeoCollection {
	pub features: Vec<GeoFeature>,
}

impl GeoCollection {
	#[must_use]
	pub fn from(features: Vec<GeoFeature>) -> Self {
		Self { features }
	}

	pub fn from_json_str(json_str: &str) -> Result<Self> {
		parse_geojson(json_str)
	}

	#[must_use]
	pub fn to_json(&self, precision: Option<u8>) -> Value {
		json!({
			"type": "FeatureCollection",
			"features": self.features.iter().map(|f| f.to_json(precision)).collect::<Vec<_>>(),
		})
	}

	/// Returns the features with a polygon or multipolygon geometry.
	///
	/// Other features are skipped with a warning.
	///
	/// # Errors
	/// Fails if the collection is empty or holds no polygonal feature.
	pub fn polygonal_features(&self) -> Result<Vec<&GeoFeature>> {
		ensure!(!self.features.is_empty(), "GeoJSON doesn't contain any feature.");

		let mut polygonal = Vec::new();
		for (index, feature) in self.features.iter().enumerate() {
			if feature.is_polygonal() {
				polygonal.push(feature);
			} else {
				warn!(
					"skipping feature {index}: {} geometry is not a polygon nor a multipolygon",
					feature.geometry_type()
				);
			}
		}

		ensure!(!polygonal.is_empty(), "GeoJSON doesn't contain any polygon nor multipolygon.");
		Ok(polygonal)
	}

	/// Merges all polygonal features into a single multipolygon.
	pub fn to_multi_polygon(&self) -> Result<MultiPolygonGeometry> {
		Ok(merge_to_multi_polygon(&self.polygonal_features()?))
	}
}

/// Collects the polygons of all given features into one multipolygon, keeping
/// their order. Non-polygonal features contribute nothing.
#[must_use]
pub fn merge_to_multi_polygon(features: &[&GeoFeature]) -> MultiPolygonGeometry {
	MultiPolygonGeometry(
		features
			.iter()
			.filter_map(|feature| feature.geometry.clone())
			.flat_map(Geometry::into_polygons)
			.collect(),
	)
}
