mod tools;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{ErrorLevel, Verbosity};

#[derive(Parser, Debug)]
#[command(
	author,
	version,
	about,
	long_about = None,
	propagate_version = true,
	disable_help_subcommand = true,
)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	#[command(flatten)]
	verbose: Verbosity<ErrorLevel>,
}

#[derive(Subcommand, Debug)]
enum Commands {
	/// List the tiles that intersect the polygons of a GeoJSON file
	Tiles(tools::tiles::Subcommand),

	/// Show the candidate tile range of a GeoJSON file
	Range(tools::range::Subcommand),
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	run(cli)
}

fn run(cli: Cli) -> Result<()> {
	match &cli.command {
		Commands::Tiles(arguments) => tools::tiles::run(arguments),
		Commands::Range(arguments) => tools::range::run(arguments),
	}
}

#[cfg(test)]
mod tests {
	use crate::{Cli, run};
	use anyhow::Result;
	use clap::Parser;

	pub fn run_command(arg_vec: Vec<&str>) -> Result<String> {
		let cli = Cli::try_parse_from(arg_vec)?;
		let msg = format!("{cli:?}");
		run(cli)?;
		Ok(msg)
	}

	#[test]
	fn help() {
		let err = run_command(vec!["tasktiles"]).unwrap_err().to_string();
		assert!(err.starts_with("Splits an area of interest into the grid of map tiles that intersect it."));
		assert!(err.contains("\nUsage: tasktiles [OPTIONS] <COMMAND>"));
	}

	#[test]
	fn version() {
		let err = run_command(vec!["tasktiles", "-V"]).unwrap_err().to_string();
		assert!(err.starts_with("tasktiles "));
	}

	#[test]
	fn tiles_subcommand() {
		let output = run_command(vec!["tasktiles", "tiles"]).unwrap_err().to_string();
		assert!(output.starts_with("List the tiles that intersect the polygons of a GeoJSON file"));
	}

	#[test]
	fn range_subcommand() {
		let output = run_command(vec!["tasktiles", "range"]).unwrap_err().to_string();
		assert!(output.starts_with("Show the candidate tile range of a GeoJSON file"));
	}
}
