use anyhow::Result;
use log::debug;
use std::path::Path;
use tasktiles_geometry::{GeoCollection, GeometryTrait, MultiPolygonGeometry, read_geojson_file};

/// Merges the polygonal features of a collection into one shape in meters.
///
/// With `geographic` set the coordinates are read as WGS84 longitude/latitude
/// and projected to Web Mercator.
pub fn shape_from_collection(collection: &GeoCollection, geographic: bool) -> Result<MultiPolygonGeometry> {
	let shape = collection.to_multi_polygon()?;
	debug!(
		"merged {} polygons from {} features",
		shape.0.len(),
		collection.features.len()
	);
	Ok(if geographic { shape.to_mercator() } else { shape })
}

/// Reads the area of interest from a GeoJSON file.
pub fn load_shape(path: &Path, geographic: bool) -> Result<MultiPolygonGeometry> {
	let collection = read_geojson_file(path)?;
	shape_from_collection(&collection, geographic)
}
