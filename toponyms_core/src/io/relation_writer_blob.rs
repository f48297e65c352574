//! Collects relation records in memory, for embedding the join into other programs.

use super::RelationWriterTrait;
use crate::RelationRecord;
use anyhow::Result;
use async_trait::async_trait;

#[derive(Clone, Debug, Default)]
pub struct RelationWriterBlob {
	relations: Vec<RelationRecord>,
	finished: bool,
}

impl RelationWriterBlob {
	pub fn new() -> RelationWriterBlob {
		RelationWriterBlob::default()
	}

	pub fn as_slice(&self) -> &[RelationRecord] {
		&self.relations
	}

	pub fn into_relations(self) -> Vec<RelationRecord> {
		self.relations
	}

	pub fn is_finished(&self) -> bool {
		self.finished
	}

	/// Renders the collected relations as line-delimited JSON.
	pub fn to_ndjson(&self) -> Result<String> {
		let mut text = String::new();
		for relation in &self.relations {
			text.push_str(&serde_json::to_string(relation)?);
			text.push('\n');
		}
		Ok(text)
	}
}

#[async_trait]
impl RelationWriterTrait for RelationWriterBlob {
	async fn write_relation(&mut self, relation: &RelationRecord) -> Result<()> {
		self.relations.push(relation.clone());
		Ok(())
	}

	async fn finish(&mut self) -> Result<()> {
		self.finished = true;
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{QualifiedId, RecordId};

	#[tokio::test]
	async fn collects_in_order() -> Result<()> {
		let mut writer = RelationWriterBlob::new();
		for id in ["a", "b", "c"] {
			let from = QualifiedId::building_inspector(RecordId::from(id));
			let to = QualifiedId::building_inspector(RecordId::from("x"));
			writer.write_relation(&RelationRecord::same_as(&from, &to)).await?;
		}
		assert!(!writer.is_finished());
		writer.finish().await?;
		assert!(writer.is_finished());

		assert_eq!(writer.to_ndjson()?.lines().count(), 3);
		let froms: Vec<String> = writer.into_relations().into_iter().map(|r| r.obj.from).collect();
		assert_eq!(
			froms,
			vec![
				"building-inspector/a",
				"building-inspector/b",
				"building-inspector/c"
			]
		);
		Ok(())
	}
}
