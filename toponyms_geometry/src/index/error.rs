use thiserror::Error;

/// Failures of a containment query.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpatialIndexError {
	/// A candidate polygon cannot be evaluated (too few positions, unclosed ring, non-finite coordinates).
	#[error("invalid polygon: {reason}")]
	InvalidPolygon { reason: String },

	/// The query point has non-finite coordinates.
	#[error("invalid query point [{x}, {y}]")]
	InvalidPoint { x: f64, y: f64 },
}
