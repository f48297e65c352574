use super::SpatialIndexError;
use crate::{GeoCollection, GeoFeature, PointGeometry};
use std::fmt::Debug;

/// Boxed spatial index, as stored per map layer.
pub type SpatialIndex = Box<dyn SpatialIndexTrait>;

/// Capability of answering point-in-polygon queries over indexed features.
pub trait SpatialIndexTrait: Debug + Send + Sync {
	/// Adds the polygon features of `collection`. Features that are not polygons, and
	/// polygons without any coordinates, are not indexed.
	fn index(&mut self, collection: GeoCollection);

	/// All indexed features whose polygon strictly contains `point`.
	///
	/// Points on a polygon's boundary are not contained. Fails if the point or one of
	/// the candidate polygons cannot be evaluated.
	fn query_point(&self, point: &PointGeometry) -> Result<Vec<&GeoFeature>, SpatialIndexError>;

	/// Number of indexed features.
	fn len(&self) -> usize;

	fn is_empty(&self) -> bool {
		self.len() == 0
	}
}
