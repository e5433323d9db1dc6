//! Settings file for the `tasktiles` command.
//!
//! The file is YAML. Every field is optional:
//!
//! ```yaml
//! zoom: 14
//! geographic: true
//! precision: 2
//! format: geojson
//! ```
//!
//! Values given on the command line take precedence over the file.

mod main;
mod output_format;

pub use main::*;
pub use output_format::OutputFormat;
