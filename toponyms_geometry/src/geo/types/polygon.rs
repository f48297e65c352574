use super::{GeometryTrait, RingGeometry};
use anyhow::{Result, ensure};
use std::fmt::Debug;

/// A polygon: the exterior ring followed by optional interior rings (holes).
#[derive(Clone, PartialEq)]
pub struct PolygonGeometry(pub Vec<RingGeometry>);

impl PolygonGeometry {
	pub fn exterior(&self) -> Option<&RingGeometry> {
		self.0.first()
	}

	pub fn interiors(&self) -> &[RingGeometry] {
		self.0.get(1..).unwrap_or_default()
	}

	/// Converts into a `geo_types::Polygon` after verifying the rings.
	pub fn to_geo(&self) -> Result<geo_types::Polygon<f64>> {
		self.verify()?;
		let exterior = self
			.exterior()
			.map_or_else(|| geo_types::LineString::new(vec![]), RingGeometry::to_geo);
		let interiors = self.interiors().iter().map(RingGeometry::to_geo).collect();
		Ok(geo_types::Polygon::new(exterior, interiors))
	}
}

impl GeometryTrait for PolygonGeometry {
	fn verify(&self) -> Result<()> {
		ensure!(!self.0.is_empty(), "Polygon must have at least one ring");
		for ring in &self.0 {
			ring.verify()?;
		}
		Ok(())
	}

	/// Bounds of the exterior ring; holes lie inside it.
	fn compute_bounds(&self) -> Option<[f64; 4]> {
		self.exterior()?.compute_bounds()
	}
}

impl Debug for PolygonGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_parts!(PolygonGeometry, RingGeometry);
