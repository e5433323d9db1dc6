use thiserror::Error;

/// Errors raised by the tiling core.
///
/// "No tile intersects this shape" is not an error: it is an empty result.
/// These variants are reserved for inputs the core cannot work with at all.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TilingError {
	#[error("invalid zoom level {0}: must be between 1 and 31")]
	InvalidZoomLevel(u8),

	#[error("empty or degenerate shape: {0}")]
	EmptyOrDegenerateShape(String),

	#[error("malformed geometry: {0}")]
	MalformedGeometry(String),
}
