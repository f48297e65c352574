use super::{GeometryTrait, PointGeometry, PolygonGeometry};
use std::fmt::Debug;

/// The geometries the join distinguishes. Every other GeoJSON type is kept by name
/// only, so classification can still tell it apart.
#[derive(Clone, PartialEq)]
pub enum Geometry {
	Point(PointGeometry),
	Polygon(PolygonGeometry),
	Other(String),
}

impl Geometry {
	#[must_use]
	pub fn get_type_name(&self) -> &str {
		match self {
			Geometry::Point(_) => "Point",
			Geometry::Polygon(_) => "Polygon",
			Geometry::Other(name) => name,
		}
	}

	pub fn new_point<T>(value: T) -> Self
	where
		PointGeometry: From<T>,
	{
		Self::Point(PointGeometry::from(value))
	}

	pub fn new_polygon<T>(value: T) -> Self
	where
		PolygonGeometry: From<T>,
	{
		Self::Polygon(PolygonGeometry::from(value))
	}

	#[must_use]
	pub fn compute_bounds(&self) -> Option<[f64; 4]> {
		match self {
			Geometry::Point(g) => g.compute_bounds(),
			Geometry::Polygon(g) => g.compute_bounds(),
			Geometry::Other(_) => None,
		}
	}
}

impl Debug for Geometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Geometry::Point(g) => f.debug_tuple("Point").field(g).finish(),
			Geometry::Polygon(g) => f.debug_tuple("Polygon").field(g).finish(),
			Geometry::Other(name) => f.debug_tuple("Other").field(name).finish(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn type_names() {
		assert_eq!(Geometry::new_point([1.0, 2.0]).get_type_name(), "Point");
		assert_eq!(
			Geometry::new_polygon(&[[[0, 0], [1, 0], [1, 1], [0, 0]]]).get_type_name(),
			"Polygon"
		);
		assert_eq!(Geometry::Other("LineString".to_string()).get_type_name(), "LineString");
	}

	#[test]
	fn bounds() {
		let point = Geometry::new_point(&[3, 4]);
		assert_eq!(point.compute_bounds(), Some([3.0, 4.0, 3.0, 4.0]));
		assert_eq!(Geometry::Other("MultiPoint".to_string()).compute_bounds(), None);
	}

	#[test]
	fn debug_format() {
		assert_eq!(format!("{:?}", Geometry::new_point(&[1, 2])), "Point([1.0, 2.0])");
	}
}
