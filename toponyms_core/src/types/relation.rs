//! Relation records, the output of the toponym join.
//!
//! A relation is serialized as
//!
//! ```json
//! {"type":"relation","obj":{"from":"building-inspector/t1","to":"building-inspector/b1","type":"st:sameAs"}}
//! ```

use super::QualifiedId;
use serde::{Deserialize, Serialize};

/// Discriminator of the record envelope. Relations are the only kind produced here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordKind {
	#[serde(rename = "relation")]
	Relation,
}

/// Kind of assertion a relation makes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RelationType {
	/// Both identifiers refer to the same real-world entity.
	#[serde(rename = "st:sameAs")]
	SameAs,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relation {
	pub from: String,
	pub to: String,
	#[serde(rename = "type")]
	pub relation_type: RelationType,
}

/// One record handed to the relation sink.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationRecord {
	#[serde(rename = "type")]
	pub kind: RecordKind,
	pub obj: Relation,
}

impl RelationRecord {
	pub fn new(from: &QualifiedId, to: &QualifiedId, relation_type: RelationType) -> Self {
		Self {
			kind: RecordKind::Relation,
			obj: Relation {
				from: from.to_string(),
				to: to.to_string(),
				relation_type,
			},
		}
	}

	/// A `st:sameAs` relation between `from` and `to`.
	pub fn same_as(from: &QualifiedId, to: &QualifiedId) -> Self {
		Self::new(from, to, RelationType::SameAs)
	}

	pub fn from_id(&self) -> &str {
		&self.obj.from
	}

	pub fn to_id(&self) -> &str {
		&self.obj.to
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::RecordId;
	use anyhow::Result;
	use pretty_assertions::assert_eq;
	use serde_json::json;

	fn example() -> RelationRecord {
		RelationRecord::same_as(
			&QualifiedId::building_inspector(RecordId::from("t1")),
			&QualifiedId::building_inspector(RecordId::from("b1")),
		)
	}

	#[test]
	fn serializes_to_relation_envelope() -> Result<()> {
		assert_eq!(
			serde_json::to_value(example())?,
			json!({
				"type": "relation",
				"obj": {
					"from": "building-inspector/t1",
					"to": "building-inspector/b1",
					"type": "st:sameAs"
				}
			})
		);
		Ok(())
	}

	#[test]
	fn reads_back_written_line() -> Result<()> {
		let line = serde_json::to_string(&example())?;
		assert_eq!(serde_json::from_str::<RelationRecord>(&line)?, example());
		Ok(())
	}

	#[test]
	fn rejects_unknown_relation_type() {
		let line = r#"{"type":"relation","obj":{"from":"a","to":"b","type":"st:partOf"}}"#;
		assert!(serde_json::from_str::<RelationRecord>(line).is_err());
	}

	#[test]
	fn accessors() {
		let relation = example();
		assert_eq!(relation.from_id(), "building-inspector/t1");
		assert_eq!(relation.to_id(), "building-inspector/b1");
	}
}
