use serde_json::{Value, json};
use std::{f64::consts::PI, fmt::Debug};
use tasktiles_core::{EARTH_RADIUS, MAX_LAT, MAX_LON};

/// A planar position `(x, y)`.
///
/// Depending on context the values are projected meters or WGS84 degrees
/// (longitude, latitude). Elevation is never stored.
#[derive(Clone, Copy, PartialEq)]
pub struct Coordinates([f64; 2]);

impl Coordinates {
	#[must_use]
	pub fn new(x: f64, y: f64) -> Self {
		Self([x, y])
	}

	#[must_use]
	pub fn x(&self) -> f64 {
		self.0[0]
	}

	#[must_use]
	pub fn y(&self) -> f64 {
		self.0[1]
	}

	#[must_use]
	pub fn as_array(&self) -> [f64; 2] {
		self.0
	}

	#[must_use]
	pub fn is_finite(&self) -> bool {
		self.0[0].is_finite() && self.0[1].is_finite()
	}

	/// Projects WGS84 degrees (longitude, latitude) to Web Mercator meters.
	///
	/// Latitudes and longitudes beyond the Mercator limits are clamped first.
	#[must_use]
	pub fn to_mercator(&self) -> Coordinates {
		let lon = self.x().clamp(-MAX_LON, MAX_LON);
		let lat = self.y().clamp(-MAX_LAT, MAX_LAT);
		Coordinates([
			lon.to_radians() * EARTH_RADIUS,
			(PI / 4.0 + lat.to_radians() / 2.0).tan().ln() * EARTH_RADIUS,
		])
	}

	#[must_use]
	pub fn to_json(&self, precision: Option<u8>) -> Value {
		if let Some(prec) = precision {
			let factor = 10f64.powi(i32::from(prec));
			json!([(self.x() * factor).round() / factor, (self.y() * factor).round() / factor])
		} else {
			json!(self.0)
		}
	}
}

impl<'a, T> From<&'a [T; 2]> for Coordinates
where
	T: Copy + Into<f64>,
{
	fn from(value: &'a [T; 2]) -> Self {
		Coordinates([value[0].into(), value[1].into()])
	}
}

impl From<[f64; 2]> for Coordinates {
	fn from(value: [f64; 2]) -> Self {
		Coordinates(value)
	}
}

impl From<(f64, f64)> for Coordinates {
	fn from(value: (f64, f64)) -> Self {
		Coordinates([value.0, value.1])
	}
}

impl From<geo::Coord> for Coordinates {
	fn from(value: geo::Coord) -> Self {
		Coordinates([value.x, value.y])
	}
}

impl From<Coordinates> for geo::Coord {
	fn from(value: Coordinates) -> Self {
		geo::Coord {
			x: value.x(),
			y: value.y(),
		}
	}
}

impl Debug for Coordinates {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}
