//! Library side of the `tasktiles` command: settings, loading the area of
//! interest from GeoJSON and writing tile lists.

pub mod config;
pub mod export;
pub mod shape;
