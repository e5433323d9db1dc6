use anyhow::{Context, Result};
use std::{
	ffi::OsString,
	fs::File,
	io::{BufWriter, Write},
	path::PathBuf,
};
use tasktiles::{
	config::{Config, OutputFormat, SETTINGS_ENV},
	export::write_tiles,
	shape::load_shape,
};
use tasktiles_geometry::tiles_intersecting;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
/// List the tiles that intersect the polygons of a GeoJSON file
pub struct Subcommand {
	/// GeoJSON file with Polygon or MultiPolygon features
	#[arg(value_name = "INPUT_FILE")]
	input: PathBuf,

	/// Zoom level of the tile grid, 1 to 31
	#[arg(long, short)]
	zoom: Option<u8>,

	/// Read coordinates as WGS84 longitude/latitude instead of Web Mercator meters
	#[arg(long, short)]
	geographic: bool,

	/// Output format
	#[arg(long, short, value_enum)]
	format: Option<OutputFormat>,

	/// Decimal places of coordinates in GeoJSON output
	#[arg(long)]
	precision: Option<u8>,

	/// Write to this file instead of stdout
	#[arg(long, short, value_name = "OUTPUT_FILE")]
	output: Option<PathBuf>,

	/// YAML settings file, defaults to the file named in TASKTILES_SETTINGS
	#[arg(long, short, value_name = "CONFIG_FILE")]
	config: Option<PathBuf>,
}

pub fn run(args: &Subcommand) -> Result<()> {
	run_with_settings(args, std::env::var_os(SETTINGS_ENV))
}

/// Runs the command with `settings_env` standing in for the settings variable.
fn run_with_settings(args: &Subcommand, settings_env: Option<OsString>) -> Result<()> {
	let config = Config::load(args.config.as_deref(), settings_env)?;

	let zoom = args
		.zoom
		.or(config.zoom)
		.context("No zoom level given, use --zoom or set 'zoom' in the config file")?;
	let geographic = args.geographic || config.geographic;
	let format = args.format.unwrap_or(config.format);
	let precision = args.precision.or(config.precision);

	log::debug!("computing tiles of {:?} at zoom {zoom}", args.input);

	let shape = load_shape(&args.input, geographic)?;
	let tiles = tiles_intersecting(&shape, zoom)?;
	log::info!("{} tiles at zoom {zoom}", tiles.len());

	match &args.output {
		Some(path) => {
			let file =
				File::create(path).with_context(|| format!("Failed to create output file \"{}\"", path.display()))?;
			write_tiles(&tiles, format, precision, BufWriter::new(file))
				.with_context(|| format!("Failed to write to output file \"{}\"", path.display()))?;
		}
		None => {
			let mut stdout = std::io::stdout().lock();
			write_tiles(&tiles, format, precision, &mut stdout)?;
			if format == OutputFormat::Geojson {
				writeln!(stdout)?;
			}
		}
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::tests::run_command;
	use assert_fs::TempDir;
	use clap::Parser;
	use pretty_assertions::assert_eq;
	use std::path::Path;

	#[derive(Parser, Debug)]
	struct TilesCli {
		#[command(flatten)]
		args: Subcommand,
	}

	/// Parses the arguments like the `tiles` subcommand and runs it with the
	/// given settings variable instead of the real environment.
	fn run_tiles(arguments: &[&str], settings_env: Option<&str>) -> Result<()> {
		let cli = TilesCli::try_parse_from(std::iter::once("tiles").chain(arguments.iter().copied()))?;
		run_with_settings(&cli.args, settings_env.map(OsString::from))
	}

	const UNIT_SQUARE: &str = r#"{"type":"FeatureCollection","features":[{"type":"Feature","geometry":{"type":"Polygon","coordinates":[[[-1,-1],[1,-1],[1,1],[-1,1],[-1,-1]]]},"properties":{}}]}"#;

	const BERLIN: &str = r#"{"type":"FeatureCollection","features":[{"type":"Feature","geometry":{"type":"Polygon","coordinates":[[[13.39,52.49],[13.41,52.49],[13.41,52.51],[13.39,52.51],[13.39,52.49]]]},"properties":{"name":"Berlin"}}]}"#;

	fn write_file(dir: &TempDir, name: &str, content: &str) -> String {
		let path = dir.path().join(name);
		std::fs::write(&path, content).unwrap();
		path.display().to_string()
	}

	fn read(path: impl AsRef<Path>) -> String {
		std::fs::read_to_string(path).unwrap()
	}

	#[test]
	fn csv_to_file() -> Result<()> {
		let dir = TempDir::new()?;
		let input = write_file(&dir, "square.geojson", UNIT_SQUARE);
		let output = dir.path().join("tiles.csv").display().to_string();

		run_tiles(&[&input, "--zoom", "1", "--output", &output], None)?;

		assert_eq!(read(&output), "x,y,zoom\n0,0,1\n0,1,1\n1,0,1\n1,1,1\n");
		Ok(())
	}

	#[test]
	fn geojson_to_file() -> Result<()> {
		let dir = TempDir::new()?;
		let input = write_file(&dir, "square.geojson", UNIT_SQUARE);
		let output = dir.path().join("tiles.geojson").display().to_string();

		run_tiles(&[&input, "-z", "1", "-f", "geojson", "--precision", "0", "-o", &output], None)?;

		let value: serde_json::Value = serde_json::from_str(&read(&output))?;
		let features = value["features"].as_array().unwrap();
		assert_eq!(features.len(), 4);
		assert_eq!(features[3]["properties"], serde_json::json!({ "x": 1, "y": 1, "zoom": 1 }));
		assert_eq!(
			features[0]["geometry"]["coordinates"][0][0],
			serde_json::json!([-20037508.0, -20037508.0])
		);
		Ok(())
	}

	#[test]
	fn geographic_input() -> Result<()> {
		let dir = TempDir::new()?;
		let input = write_file(&dir, "berlin.geojson", BERLIN);
		let output = dir.path().join("tiles.csv").display().to_string();

		run_tiles(&[&input, "--zoom", "10", "--geographic", "-o", &output], None)?;

		assert_eq!(read(&output), "x,y,zoom\n550,688,10\n");
		Ok(())
	}

	#[test]
	fn settings_from_config_file() -> Result<()> {
		let dir = TempDir::new()?;
		let input = write_file(&dir, "berlin.geojson", BERLIN);
		let config = write_file(&dir, "settings.yml", "zoom: 10\ngeographic: true\nformat: geojson\n");
		let output = dir.path().join("tiles.csv").display().to_string();

		// --format on the command line overrides the config file
		run_tiles(&[&input, "-c", &config, "-f", "csv", "-o", &output], None)?;

		assert_eq!(read(&output), "x,y,zoom\n550,688,10\n");
		Ok(())
	}

	#[test]
	fn missing_zoom() {
		let dir = TempDir::new().unwrap();
		let input = write_file(&dir, "square.geojson", UNIT_SQUARE);
		let config = write_file(&dir, "empty.yml", "");
		let error = run_tiles(&[&input, "-c", &config], None).unwrap_err();
		assert_eq!(
			error.to_string(),
			"No zoom level given, use --zoom or set 'zoom' in the config file"
		);
	}

	#[test]
	fn invalid_zoom() {
		let dir = TempDir::new().unwrap();
		let input = write_file(&dir, "square.geojson", UNIT_SQUARE);
		let error = run_tiles(&[&input, "--zoom", "0"], None).unwrap_err();
		assert_eq!(error.to_string(), "invalid zoom level 0: must be between 1 and 31");
	}

	#[test]
	fn missing_input() {
		let error = run_tiles(&["/does/not/exist.geojson", "--zoom", "3"], None).unwrap_err();
		assert_eq!(error.to_string(), "Failed to open GeoJSON file '/does/not/exist.geojson'");
	}

	#[test]
	fn settings_from_environment() -> Result<()> {
		let dir = TempDir::new()?;
		let input = write_file(&dir, "berlin.geojson", BERLIN);
		let settings = write_file(&dir, "settings.yml", "zoom: 10\ngeographic: true\n");
		let output = dir.path().join("tiles.csv").display().to_string();

		run_tiles(&[&input, "-o", &output], Some(&settings))?;
		assert_eq!(read(&output), "x,y,zoom\n550,688,10\n");

		// an explicit --config wins over the settings variable
		let other = write_file(&dir, "other.yml", "zoom: 1\ngeographic: true\n");
		run_tiles(&[&input, "-c", &other, "-o", &output], Some(&settings))?;
		assert_eq!(read(&output), "x,y,zoom\n1,1,1\n");
		Ok(())
	}

	#[test]
	fn subcommand_is_wired_up() {
		let error = run_command(vec!["tasktiles", "tiles", "--format", "xml"]).unwrap_err();
		assert!(error.to_string().contains("invalid value 'xml'"));
	}
}
