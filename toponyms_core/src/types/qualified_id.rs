use super::RecordId;
use std::fmt::Display;

/// Namespace of every record read from the building-inspector objects file.
///
/// Other consumers of the relation store resolve identifiers by this prefix, so it must not change.
pub const BUILDING_INSPECTOR: &str = "building-inspector";

/// A record id qualified with the namespace of its source, rendered as `namespace/id`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct QualifiedId {
	namespace: &'static str,
	id: RecordId,
}

impl QualifiedId {
	pub fn new(namespace: &'static str, id: RecordId) -> Self {
		Self { namespace, id }
	}

	/// Qualifies `id` with the [`BUILDING_INSPECTOR`] namespace.
	pub fn building_inspector(id: RecordId) -> Self {
		Self::new(BUILDING_INSPECTOR, id)
	}

	pub fn namespace(&self) -> &str {
		self.namespace
	}

	pub fn id(&self) -> &RecordId {
		&self.id
	}
}

impl Display for QualifiedId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}/{}", self.namespace, self.id)
	}
}
