use thiserror::Error;
use toponyms_core::{LayerId, RecordId};
use toponyms_geometry::SpatialIndexError;

/// Why a single toponym produced no relations. None of these end a run.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum JoinError {
	/// The toponym's map layer has no building polygons, or the toponym has no layer.
	#[error("No geospatial index found for map layer {}", display_layer(.layer.as_ref()))]
	MissingIndex { layer: Option<LayerId> },

	#[error("containment query for toponym {toponym} failed")]
	ContainmentQuery {
		toponym: RecordId,
		#[source]
		source: SpatialIndexError,
	},

	/// The toponym has no string or numeric `id`.
	#[error("toponym has no id")]
	MissingId,
}

fn display_layer(layer: Option<&LayerId>) -> String {
	layer.map_or_else(|| String::from("(none)"), ToString::to_string)
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::error::Error as _;

	#[test]
	fn messages() {
		let err = JoinError::MissingIndex {
			layer: Some(LayerId::from(7_u64)),
		};
		assert_eq!(err.to_string(), "No geospatial index found for map layer 7");
		assert_eq!(
			JoinError::MissingIndex { layer: None }.to_string(),
			"No geospatial index found for map layer (none)"
		);
		assert_eq!(JoinError::MissingId.to_string(), "toponym has no id");
	}

	#[test]
	fn query_error_keeps_its_source() {
		let err = JoinError::ContainmentQuery {
			toponym: RecordId::from("t1"),
			source: SpatialIndexError::InvalidPolygon {
				reason: "Ring must be closed".to_string(),
			},
		};
		assert_eq!(err.to_string(), "containment query for toponym t1 failed");
		assert_eq!(err.source().unwrap().to_string(), "invalid polygon: Ring must be closed");
	}
}
