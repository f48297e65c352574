//! Matches one toponym against the index of its map layer.

use crate::{GeometryRecord, JoinError, LayerIndex};
use log::warn;
use toponyms_core::{QualifiedId, RelationRecord};
use toponyms_geometry::Geometry;

/// Result of matching a single toponym.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchOutcome {
	/// One relation per containing building, in index order.
	Matched(Vec<RelationRecord>),
	/// No building of the toponym's layer contains it.
	Miss,
	/// The toponym could not be matched. Never fatal for a run.
	Failed(JoinError),
}

/// Finds the buildings whose footprint contains `toponym` on the same map layer.
///
/// Every containing building yields a `st:sameAs` relation from the toponym to the
/// building, both qualified with the `building-inspector` namespace. A containing
/// building without an id is skipped with a warning.
pub fn match_toponym(toponym: &GeometryRecord, layer_index: &LayerIndex) -> MatchOutcome {
	let layer = toponym.layer_id();
	let Some(index) = layer.as_ref().and_then(|layer| layer_index.get(layer)) else {
		return MatchOutcome::Failed(JoinError::MissingIndex { layer });
	};
	let Some(id) = toponym.id() else {
		return MatchOutcome::Failed(JoinError::MissingId);
	};
	let Some(Geometry::Point(point)) = toponym.geometry() else {
		return MatchOutcome::Miss;
	};

	let buildings = match index.query_point(point) {
		Ok(buildings) => buildings,
		Err(source) => return MatchOutcome::Failed(JoinError::ContainmentQuery { toponym: id, source }),
	};
	if buildings.is_empty() {
		return MatchOutcome::Miss;
	}

	let from = QualifiedId::building_inspector(id);
	let relations: Vec<RelationRecord> = buildings
		.into_iter()
		.filter_map(|building| {
			let building_id = building.id();
			if building_id.is_none() {
				warn!("toponym {from} lies in a building without id, skipping it");
			}
			building_id
		})
		.map(|building_id| RelationRecord::same_as(&from, &QualifiedId::building_inspector(building_id)))
		.collect();

	if relations.is_empty() {
		MatchOutcome::Miss
	} else {
		MatchOutcome::Matched(relations)
	}
}
