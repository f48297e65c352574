use std::fmt::Debug;

/// A position `[x, y]`, longitude first as in GeoJSON.
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
	pub fn is_finite(&self) -> bool {
		self.0[0].is_finite() && self.0[1].is_finite()
	}

	#[must_use]
	pub fn as_array(&self) -> [f64; 2] {
		self.0
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

impl From<Coordinates> for geo_types::Coord<f64> {
	fn from(value: Coordinates) -> Self {
		geo_types::Coord {
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

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn constructors_agree() {
		let a = Coordinates::new(1.0, 2.0);
		assert_eq!(Coordinates::from([1.0, 2.0]), a);
		assert_eq!(Coordinates::from((1.0, 2.0)), a);
		assert_eq!(Coordinates::from(&[1, 2]), a);
		assert_eq!(a.as_array(), [1.0, 2.0]);
	}

	#[test]
	fn finiteness() {
		assert!(Coordinates::new(13.4, 52.5).is_finite());
		assert!(!Coordinates::new(f64::NAN, 0.0).is_finite());
		assert!(!Coordinates::new(0.0, f64::INFINITY).is_finite());
	}

	#[test]
	fn into_geo_coord() {
		let coord: geo_types::Coord<f64> = Coordinates::new(3.0, 4.0).into();
		assert_eq!(coord, geo_types::coord! { x: 3.0, y: 4.0 });
	}

	#[test]
	fn debug_format() {
		assert_eq!(format!("{:?}", Coordinates::new(1.0, 2.5)), "[1.0, 2.5]");
	}
}
