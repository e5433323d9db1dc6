use super::OutputFormat;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::{
	ffi::OsString,
	fs::File,
	io::{BufReader, Read},
	path::{Path, PathBuf},
};

/// Environment variable that may point to a settings file.
pub const SETTINGS_ENV: &str = "TASKTILES_SETTINGS";

#[derive(Default, Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
	/// Zoom level used when no `--zoom` is given
	pub zoom: Option<u8>,

	/// Input coordinates are WGS84 longitude/latitude and are projected to Web Mercator
	pub geographic: bool,

	/// Number of decimal places of coordinates in GeoJSON output
	pub precision: Option<u8>,

	/// Output format
	pub format: OutputFormat,
}

impl Config {
	pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
		Ok(serde_yaml_ng::from_reader(reader)?)
	}

	pub fn from_string(text: &str) -> Result<Self> {
		Ok(serde_yaml_ng::from_str(text)?)
	}

	pub fn from_path(path: &Path) -> Result<Self> {
		let file = File::open(path).with_context(|| format!("Failed to open config file '{}'", path.display()))?;
		Config::from_reader(BufReader::new(file)).with_context(|| format!("Failed to parse config file '{}'", path.display()))
	}

	/// Finds and reads the settings.
	///
	/// An explicit path must exist. Otherwise the path in `env_value` (the value of
	/// [`SETTINGS_ENV`]) is used if that file exists, else the defaults apply.
	pub fn load(explicit: Option<&Path>, env_value: Option<OsString>) -> Result<Self> {
		if let Some(path) = explicit {
			log::debug!("reading config from {path:?}");
			return Config::from_path(path);
		}

		if let Some(path) = env_value.map(PathBuf::from) {
			if path.is_file() {
				log::debug!("reading config from {path:?} set in {SETTINGS_ENV}");
				return Config::from_path(&path);
			}
			log::debug!("config file {path:?} set in {SETTINGS_ENV} does not exist, using defaults");
		}

		Ok(Config::default())
	}
}
