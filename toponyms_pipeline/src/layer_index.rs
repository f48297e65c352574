//! Per-layer spatial indices of building footprints.

use crate::{GeometryRecord, classifier::is_building_polygon};
use itertools::Itertools;
use log::{debug, trace};
use std::collections::BTreeMap;
use toponyms_core::LayerId;
use toponyms_geometry::{GeoCollection, GeoFeature, PolygonIndex, SpatialIndex, SpatialIndexTrait};

/// One spatial index per map layer. Built once, read-only afterwards.
#[derive(Debug, Default)]
pub struct LayerIndex {
	indices: BTreeMap<LayerId, SpatialIndex>,
}

impl LayerIndex {
	pub fn get(&self, layer: &LayerId) -> Option<&dyn SpatialIndexTrait> {
		self.indices.get(layer).map(|index| index.as_ref())
	}

	/// Number of layers.
	pub fn len(&self) -> usize {
		self.indices.len()
	}

	pub fn is_empty(&self) -> bool {
		self.indices.is_empty()
	}

	/// Layer ids in ascending order.
	pub fn layer_ids(&self) -> impl Iterator<Item = &LayerId> {
		self.indices.keys()
	}

	/// Number of indexed polygons per layer, in ascending layer order.
	pub fn feature_counts(&self) -> impl Iterator<Item = (&LayerId, usize)> {
		self.indices.iter().map(|(layer, index)| (layer, index.len()))
	}

	/// Number of indexed polygons over all layers.
	pub fn feature_count(&self) -> usize {
		self.indices.values().map(|index| index.len()).sum()
	}
}

/// Collects building polygons by layer and builds the [`LayerIndex`] from them.
#[derive(Default)]
pub struct LayerIndexBuilder {
	layers: BTreeMap<LayerId, Vec<GeoFeature>>,
}

impl LayerIndexBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds `record` if it is a building polygon with a layer. Returns whether it was added.
	pub fn add(&mut self, record: GeometryRecord) -> bool {
		if !is_building_polygon(&record) {
			trace!("not a building polygon: {:?}", record.id());
			return false;
		}
		let Some(layer) = record.layer_id() else {
			debug!("skipping building polygon {:?} without layer", record.id());
			return false;
		};
		let id = record.id();
		match record.into_feature() {
			Some(feature) => {
				self.layers.entry(layer).or_default().push(feature);
				true
			}
			None => {
				debug!("skipping building polygon {id:?} without geometry");
				false
			}
		}
	}

	/// Number of polygons added so far.
	pub fn len(&self) -> usize {
		self.layers.values().map(Vec::len).sum()
	}

	pub fn is_empty(&self) -> bool {
		self.layers.is_empty()
	}

	/// Builds one index per layer that received at least one polygon.
	pub fn build(self) -> LayerIndex {
		let indices: BTreeMap<LayerId, SpatialIndex> = self
			.layers
			.into_iter()
			.map(|(layer, features)| {
				let mut index: SpatialIndex = Box::new(PolygonIndex::new());
				index.index(GeoCollection::from(features));
				(layer, index)
			})
			.collect();
		debug!("built indices for layers: {}", indices.keys().join(", "));
		LayerIndex { indices }
	}
}
