//! Writing tile lists as CSV or GeoJSON.

use crate::config::OutputFormat;
use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::{Value, json};
use std::io::Write;
use tasktiles_geometry::TileSquare;

#[derive(Serialize)]
struct TileRecord {
	x: u32,
	y: u32,
	zoom: u8,
}

/// Writes one `x,y,zoom` record per tile, preceded by a header line.
pub fn write_csv(tiles: &[TileSquare], writer: impl Write) -> Result<()> {
	let mut csv_writer = csv::Writer::from_writer(writer);
	if tiles.is_empty() {
		csv_writer.write_record(["x", "y", "zoom"])?;
	}
	for tile in tiles {
		csv_writer
			.serialize(TileRecord {
				x: tile.col,
				y: tile.row,
				zoom: tile.zoom,
			})
			.context("Failed to write CSV record")?;
	}
	csv_writer.flush()?;
	Ok(())
}

#[must_use]
pub fn tiles_to_geojson(tiles: &[TileSquare], precision: Option<u8>) -> Value {
	json!({
		"type": "FeatureCollection",
		"features": tiles.iter().map(|t| t.to_feature_json(precision)).collect::<Vec<_>>(),
	})
}

/// Writes all tile squares as one GeoJSON FeatureCollection.
pub fn write_geojson(tiles: &[TileSquare], precision: Option<u8>, mut writer: impl Write) -> Result<()> {
	serde_json::to_writer(&mut writer, &tiles_to_geojson(tiles, precision)).context("Failed to write GeoJSON")?;
	writer.flush()?;
	Ok(())
}

pub fn write_tiles(tiles: &[TileSquare], format: OutputFormat, precision: Option<u8>, writer: impl Write) -> Result<()> {
	match format {
		OutputFormat::Csv => write_csv(tiles, writer),
		OutputFormat::Geojson => write_geojson(tiles, precision, writer),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	fn tiles() -> Vec<TileSquare> {
		vec![
			TileSquare::new(2, 1, 3, [0.0, 0.0, 10.0, 10.0]),
			TileSquare::new(2, 2, 0, [10.0, 0.0, 20.0, 10.0]),
		]
	}

	#[test]
	fn csv_output() {
		let mut buffer = Vec::new();
		write_csv(&tiles(), &mut buffer).unwrap();
		assert_eq!(String::from_utf8(buffer).unwrap(), "x,y,zoom\n1,3,2\n2,0,2\n");
	}

	#[test]
	fn csv_output_without_tiles_has_header() {
		let mut buffer = Vec::new();
		write_csv(&[], &mut buffer).unwrap();
		assert_eq!(String::from_utf8(buffer).unwrap(), "x,y,zoom\n");
	}

	#[test]
	fn geojson_output() {
		let mut buffer = Vec::new();
		write_tiles(&tiles(), OutputFormat::Geojson, Some(0), &mut buffer).unwrap();
		let value: Value = serde_json::from_slice(&buffer).unwrap();
		assert_eq!(value["type"], "FeatureCollection");
		assert_eq!(value["features"].as_array().unwrap().len(), 2);
		assert_eq!(value["features"][1]["properties"], json!({ "x": 2, "y": 0, "zoom": 2 }));
		assert_eq!(
			value["features"][0]["geometry"]["coordinates"],
			json!([[[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0], [0.0, 0.0]]])
		);
	}
}
