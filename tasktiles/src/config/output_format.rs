use serde::Deserialize;

/// How the resulting tiles are written.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
	/// One `x,y,zoom` line per tile, with a header line
	#[default]
	Csv,
	/// A FeatureCollection with one square polygon per tile
	Geojson,
}
