use anyhow::Result;
use std::path::PathBuf;
use tasktiles::shape::load_shape;
use tasktiles_core::{TileRange, tile_edge_length};
use tasktiles_geometry::PreparedShape;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
/// Show the candidate tile range of a GeoJSON file, before the polygons are tested
pub struct Subcommand {
	/// GeoJSON file with Polygon or MultiPolygon features
	#[arg(value_name = "INPUT_FILE")]
	input: PathBuf,

	/// Zoom level of the tile grid, 1 to 31
	#[arg(long, short)]
	zoom: u8,

	/// Read coordinates as WGS84 longitude/latitude instead of Web Mercator meters
	#[arg(long, short)]
	geographic: bool,
}

pub fn run(args: &Subcommand) -> Result<()> {
	println!("{}", describe(args)?);
	Ok(())
}

fn describe(args: &Subcommand) -> Result<String> {
	let step = tile_edge_length(args.zoom)?;
	let shape = load_shape(&args.input, args.geographic)?;
	let prepared = PreparedShape::new(&shape)?;

	let mut lines = vec![
		format!("bounds: {:?}", prepared.bbox()),
		format!("edges: {}", prepared.edge_count()),
		format!("zoom: {}, tile edge length: {step:.3} m", args.zoom),
	];

	match TileRange::from_bbox(prepared.bbox(), args.zoom)? {
		Some(range) => {
			lines.push(format!("columns: {:?}", range.cols()));
			lines.push(format!("rows: {:?}", range.rows()));
			lines.push(format!("candidates: {}", range.count_tiles()));
		}
		None => lines.push("candidates: 0, the shape is outside of the global extent".to_string()),
	}

	Ok(lines.join("\n"))
}
