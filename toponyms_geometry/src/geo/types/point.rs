use super::{Coordinates, GeometryTrait};
use anyhow::{Result, ensure};
use std::fmt::Debug;

/// A single position, the geometry of a toponym.
#[derive(Clone, PartialEq)]
pub struct PointGeometry(pub Coordinates);

impl PointGeometry {
	#[must_use]
	pub fn new(c: Coordinates) -> Self {
		Self(c)
	}
	#[must_use]
	pub fn x(&self) -> f64 {
		self.0.x()
	}
	#[must_use]
	pub fn y(&self) -> f64 {
		self.0.y()
	}
	#[must_use]
	pub fn as_coord(&self) -> &Coordinates {
		&self.0
	}
	#[must_use]
	pub fn to_geo(&self) -> geo_types::Point<f64> {
		geo_types::Point::new(self.x(), self.y())
	}
}

impl GeometryTrait for PointGeometry {
	fn verify(&self) -> Result<()> {
		ensure!(self.0.is_finite(), "Point must have finite coordinates, got {:?}", self.0);
		Ok(())
	}

	fn compute_bounds(&self) -> Option<[f64; 4]> {
		self.0.is_finite().then(|| [self.x(), self.y(), self.x(), self.y()])
	}
}

impl Debug for PointGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}

impl<'a, T> From<&'a [T; 2]> for PointGeometry
where
	T: Copy + Into<f64>,
{
	fn from(value: &'a [T; 2]) -> Self {
		Self(Coordinates::from(value))
	}
}

impl From<[f64; 2]> for PointGeometry {
	fn from(value: [f64; 2]) -> Self {
		Self(Coordinates::from(value))
	}
}
