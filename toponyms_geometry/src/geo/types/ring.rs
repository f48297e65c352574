use super::{Coordinates, GeometryTrait, bounds_of};
use anyhow::{Result, ensure};
use std::fmt::Debug;

/// A closed ring of coordinates, the building block of polygons.
/// The first and last positions must be identical.
#[derive(Clone, PartialEq)]
pub struct RingGeometry(pub Vec<Coordinates>);

impl RingGeometry {
	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn to_geo(&self) -> geo_types::LineString<f64> {
		geo_types::LineString::from(self.0.iter().map(|c| geo_types::Coord::from(*c)).collect::<Vec<_>>())
	}
}

impl GeometryTrait for RingGeometry {
	/// A valid ring has at least 4 positions (3 distinct plus the closing one),
	/// is closed and has finite coordinates only.
	fn verify(&self) -> Result<()> {
		ensure!(self.0.len() >= 4, "Ring must have at least 4 points, got {}", self.0.len());
		ensure!(self.0.first() == self.0.last(), "Ring must be closed");
		ensure!(self.0.iter().all(Coordinates::is_finite), "Ring must have finite coordinates");
		Ok(())
	}

	fn compute_bounds(&self) -> Option<[f64; 4]> {
		bounds_of(&self.0)
	}
}

impl Debug for RingGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_parts!(RingGeometry, Coordinates);
