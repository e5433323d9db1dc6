use crate::TilingError;
use std::fmt::Debug;

/// An axis-aligned bounding box in projected coordinates (meters).
///
/// The box is defined by four `f64` values:
/// - `x_min`: minimum x (west)
/// - `y_min`: minimum y (south)
/// - `x_max`: maximum x (east)
/// - `y_max`: maximum y (north)
///
/// A `BBox` is always finite with `x_min <= x_max` and `y_min <= y_max`.
/// A zero-width or zero-height box is valid, it describes a line or a point.
///
/// # Examples
/// ```
/// use tasktiles_core::BBox;
///
/// let mut bbox = BBox::new(-10.0, -5.0, 10.0, 5.0).unwrap();
/// bbox.extend(&BBox::new(-12.0, -3.0, 8.0, 6.0).unwrap());
/// assert_eq!(bbox.as_tuple(), (-12.0, -5.0, 10.0, 6.0));
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct BBox {
	pub x_min: f64,
	pub y_min: f64,
	pub x_max: f64,
	pub y_max: f64,
}

impl BBox {
	/// Creates a new `BBox` from `x_min, y_min, x_max, y_max`.
	///
	/// # Errors
	/// Returns [`TilingError::EmptyOrDegenerateShape`] if a value is not finite
	/// or a minimum exceeds its maximum.
	pub fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Result<BBox, TilingError> {
		BBox {
			x_min,
			y_min,
			x_max,
			y_max,
		}
		.checked()
	}

	/// Creates a `BBox` from the `[x_min, y_min, x_max, y_max]` array returned by
	/// geometry bound computations.
	pub fn from_array(bounds: [f64; 4]) -> Result<BBox, TilingError> {
		let [x_min, y_min, x_max, y_max] = bounds;
		BBox::new(x_min, y_min, x_max, y_max)
	}

	#[must_use]
	pub fn as_array(&self) -> [f64; 4] {
		[self.x_min, self.y_min, self.x_max, self.y_max]
	}

	#[must_use]
	pub fn as_tuple(&self) -> (f64, f64, f64, f64) {
		(self.x_min, self.y_min, self.x_max, self.y_max)
	}

	#[must_use]
	pub fn width(&self) -> f64 {
		self.x_max - self.x_min
	}

	#[must_use]
	pub fn height(&self) -> f64 {
		self.y_max - self.y_min
	}

	/// Expands the box in place so that it also covers `other`.
	pub fn extend(&mut self, other: &BBox) {
		self.x_min = self.x_min.min(other.x_min);
		self.y_min = self.y_min.min(other.y_min);
		self.x_max = self.x_max.max(other.x_max);
		self.y_max = self.y_max.max(other.y_max);
	}

	/// Returns `true` if both boxes share at least one point. Touching edges count.
	///
	/// ```
	/// use tasktiles_core::BBox;
	///
	/// let a = BBox::new(0.0, 0.0, 1.0, 1.0).unwrap();
	/// let b = BBox::new(1.0, 1.0, 2.0, 2.0).unwrap();
	/// let c = BBox::new(1.5, 0.0, 2.0, 1.0).unwrap();
	/// assert!(a.intersects(&b));
	/// assert!(!a.intersects(&c));
	/// ```
	#[must_use]
	pub fn intersects(&self, other: &BBox) -> bool {
		self.x_min <= other.x_max && other.x_min <= self.x_max && self.y_min <= other.y_max && other.y_min <= self.y_max
	}

	/// Returns `true` if the point lies inside the box or on its border.
	#[must_use]
	pub fn contains_point(&self, x: f64, y: f64) -> bool {
		self.x_min <= x && x <= self.x_max && self.y_min <= y && y <= self.y_max
	}

	fn checked(self) -> Result<BBox, TilingError> {
		if !self.as_array().iter().all(|v| v.is_finite()) {
			return Err(TilingError::EmptyOrDegenerateShape(format!(
				"bounding box {self:?} contains non-finite values"
			)));
		}
		if self.x_min > self.x_max || self.y_min > self.y_max {
			return Err(TilingError::EmptyOrDegenerateShape(format!(
				"bounding box {self:?} has a minimum larger than its maximum"
			)));
		}
		Ok(self)
	}
}

impl Debug for BBox {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "[{}, {}, {}, {}]", self.x_min, self.y_min, self.x_max, self.y_max)
	}
}
