use super::{SpatialIndexError, SpatialIndexTrait};
use crate::{GeoCollection, GeoFeature, Geometry, GeometryTrait, PointGeometry};
use ::geo::Contains;
use log::debug;
use rstar::{AABB, RTree, RTreeObject};
use std::fmt::Debug;

/// Bounding box of an indexed polygon, pointing back to its feature.
#[derive(Clone, Debug)]
struct IndexedPolygon {
	position: usize,
	envelope: AABB<[f64; 2]>,
}

impl RTreeObject for IndexedPolygon {
	type Envelope = AABB<[f64; 2]>;

	fn envelope(&self) -> Self::Envelope {
		self.envelope
	}
}

/// Polygon features in an R-tree of their bounding boxes.
///
/// A query first collects the polygons whose box covers the point, then applies the
/// exact containment predicate to those candidates. Results are returned in the order
/// the features were indexed.
#[derive(Default)]
pub struct PolygonIndex {
	features: Vec<GeoFeature>,
	// Converted once at index time; a degenerate polygon keeps its conversion error.
	shapes: Vec<Result<geo_types::Polygon<f64>, SpatialIndexError>>,
	tree: RTree<IndexedPolygon>,
}

impl PolygonIndex {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn from_collection(collection: GeoCollection) -> Self {
		let mut index = Self::new();
		index.index(collection);
		index
	}

	fn insert(&mut self, feature: GeoFeature) {
		let Geometry::Polygon(polygon) = &feature.geometry else {
			debug!("not indexing feature {:?}: geometry is a {}", feature.id(), feature.geometry.get_type_name());
			return;
		};
		let Some([x_min, y_min, x_max, y_max]) = polygon.compute_bounds() else {
			debug!("not indexing feature {:?}: polygon has no coordinates", feature.id());
			return;
		};

		let shape = polygon.to_geo().map_err(|e| SpatialIndexError::InvalidPolygon {
			reason: format!("feature {:?}: {e}", feature.id()),
		});
		let position = self.features.len();
		self.features.push(feature);
		self.shapes.push(shape);
		self.tree.insert(IndexedPolygon {
			position,
			envelope: AABB::from_corners([x_min, y_min], [x_max, y_max]),
		});
	}
}

impl SpatialIndexTrait for PolygonIndex {
	fn index(&mut self, collection: GeoCollection) {
		for feature in collection {
			self.insert(feature);
		}
	}

	fn query_point(&self, point: &PointGeometry) -> Result<Vec<&GeoFeature>, SpatialIndexError> {
		if point.verify().is_err() {
			return Err(SpatialIndexError::InvalidPoint {
				x: point.x(),
				y: point.y(),
			});
		}

		let mut candidates: Vec<usize> = self
			.tree
			.locate_in_envelope_intersecting(&AABB::from_point([point.x(), point.y()]))
			.map(|entry| entry.position)
			.collect();
		candidates.sort_unstable();

		let target = point.to_geo();
		let mut result = Vec::new();
		for position in candidates {
			let shape = self.shapes[position].as_ref().map_err(Clone::clone)?;
			if shape.contains(&target) {
				result.push(&self.features[position]);
			}
		}
		Ok(result)
	}

	fn len(&self) -> usize {
		self.features.len()
	}
}

impl Debug for PolygonIndex {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("PolygonIndex").field("features", &self.features.len()).finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::GeoProperties;
	use pretty_assertions::assert_eq;
	use rstest::rstest;
	use serde_json::json;

	fn building(id: &str, geometry: Geometry) -> GeoFeature {
		GeoFeature::with_properties(geometry, GeoProperties::from(vec![("id", json!(id))]))
	}

	fn square(id: &str, x0: i32, y0: i32, x1: i32, y1: i32) -> GeoFeature {
		building(
			id,
			Geometry::new_polygon(&[[[x0, y0], [x1, y0], [x1, y1], [x0, y1], [x0, y0]]]),
		)
	}

	fn ids(features: &[&GeoFeature]) -> Vec<String> {
		features
			.iter()
			.map(|f| f.id().map(|id| id.to_string()).unwrap_or_default())
			.collect()
	}

	fn query(index: &PolygonIndex, x: f64, y: f64) -> Vec<String> {
		ids(&index.query_point(&PointGeometry::from([x, y])).unwrap())
	}

	#[rstest]
	#[case(5.0, 5.0, &["b1"])]
	#[case(15.0, 15.0, &["b2"])]
	#[case(10.5, 10.5, &[])]
	#[case(-1.0, 5.0, &[])]
	fn single_matches(#[case] x: f64, #[case] y: f64, #[case] expected: &[&str]) {
		let index = PolygonIndex::from_collection(GeoCollection::from(vec![
			square("b1", 0, 0, 10, 10),
			square("b2", 11, 11, 20, 20),
		]));
		assert_eq!(index.len(), 2);
		assert_eq!(query(&index, x, y), expected);
	}

	#[test]
	fn overlapping_polygons_all_match() {
		let index = PolygonIndex::from_collection(GeoCollection::from(vec![
			square("b1", 0, 0, 10, 10),
			square("b2", 4, 4, 8, 8),
			square("b3", 20, 20, 30, 30),
		]));
		assert_eq!(query(&index, 5.0, 5.0), ["b1", "b2"]);
	}

	#[rstest]
	#[case(2.0, 2.0, &["b1"])]
	#[case(9.9, 0.1, &["b1"])]
	#[case(5.0, 5.0, &[])]
	#[case(4.0, 5.0, &[])]
	fn holes_are_not_contained(#[case] x: f64, #[case] y: f64, #[case] expected: &[&str]) {
		let index = PolygonIndex::from_collection(GeoCollection::from(vec![building(
			"b1",
			Geometry::new_polygon(&[
				[[0, 0], [10, 0], [10, 10], [0, 10], [0, 0]],
				[[4, 4], [6, 4], [6, 6], [4, 6], [4, 4]],
			]),
		)]));
		assert_eq!(query(&index, x, y), expected);
	}

	#[test]
	fn boundary_is_not_contained() {
		let index = PolygonIndex::from_collection(GeoCollection::from(vec![square("b1", 0, 0, 10, 10)]));
		assert!(query(&index, 10.0, 5.0).is_empty());
		assert!(query(&index, 0.0, 0.0).is_empty());
	}

	#[test]
	fn insertion_order_does_not_change_matches() {
		let features = vec![
			square("b1", 0, 0, 10, 10),
			square("b2", 2, 2, 6, 6),
			square("b3", 5, 5, 15, 15),
			square("b4", 30, 30, 40, 40),
		];
		let forward = PolygonIndex::from_collection(GeoCollection::from(features.clone()));
		let backward = PolygonIndex::from_collection(features.into_iter().rev().collect());

		for (x, y) in [(1.0, 1.0), (3.0, 3.0), (5.5, 5.5), (12.0, 12.0), (35.0, 35.0), (50.0, 50.0)] {
			let mut a = query(&forward, x, y);
			let mut b = query(&backward, x, y);
			a.sort();
			b.sort();
			assert_eq!(a, b, "point ({x}, {y})");
		}
	}

	#[test]
	fn skips_non_polygons_and_empty_polygons() {
		let mut index = PolygonIndex::new();
		index.index(GeoCollection::from(vec![
			building("p", Geometry::new_point([1.0, 1.0])),
			building("e", Geometry::Polygon(crate::PolygonGeometry(vec![]))),
			square("b1", 0, 0, 10, 10),
		]));
		assert_eq!(index.len(), 1);
		assert!(!index.is_empty());
		assert_eq!(query(&index, 1.0, 1.0), ["b1"]);
	}

	#[test]
	fn degenerate_polygon_fails_the_query() {
		let index = PolygonIndex::from_collection(GeoCollection::from(vec![
			square("b1", 0, 0, 10, 10),
			building("bad", Geometry::new_polygon(&[[[0, 0], [10, 0], [10, 10]]])),
		]));
		let err = index.query_point(&PointGeometry::from([5.0, 5.0])).unwrap_err();
		assert!(matches!(err, SpatialIndexError::InvalidPolygon { .. }), "{err:?}");

		// outside the degenerate polygon's box the index still answers
		assert!(query(&index, 50.0, 50.0).is_empty());
	}

	#[test]
	fn non_finite_point_is_rejected() {
		let index = PolygonIndex::from_collection(GeoCollection::from(vec![square("b1", 0, 0, 10, 10)]));
		let err = index.query_point(&PointGeometry::from([f64::NAN, 1.0])).unwrap_err();
		assert!(matches!(err, SpatialIndexError::InvalidPoint { .. }));
		assert!(err.to_string().starts_with("invalid query point"));
	}

	#[test]
	fn empty_index() {
		let index = PolygonIndex::new();
		assert!(index.is_empty());
		assert!(query(&index, 0.0, 0.0).is_empty());
		assert_eq!(format!("{index:?}"), "PolygonIndex { features: 0 }");
	}
}
