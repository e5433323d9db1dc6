use super::parse_geojson;
use crate::GeoCollection;
use anyhow::{Context, Result};
use std::{fs::File, io::Read, path::Path};

pub fn read_geojson(mut reader: impl Read) -> Result<GeoCollection> {
	let mut buffer = String::new();
	reader.read_to_string(&mut buffer)?;
	parse_geojson(&buffer)
}

pub fn read_geojson_file(path: &Path) -> Result<GeoCollection> {
	let file = File::open(path).with_context(|| format!("Failed to open GeoJSON file '{}'", path.display()))?;
	read_geojson(file).with_context(|| format!("Failed to read GeoJSON file '{}'", path.display()))
}
