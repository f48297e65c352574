use super::{RecordSourceTrait, RecordStream, read_record_lines};
use crate::JsonObject;
use anyhow::Result;
use async_trait::async_trait;
use std::fmt::Debug;

/// A record source backed by line-delimited JSON held in memory.
#[derive(Clone)]
pub struct RecordSourceBlob {
	text: String,
}

impl RecordSourceBlob {
	/// Builds a source with one line per object, in the given order.
	pub fn from_objects<'a>(objects: impl IntoIterator<Item = &'a JsonObject>) -> Result<Self> {
		let lines = objects
			.into_iter()
			.map(serde_json::to_string)
			.collect::<Result<Vec<_>, _>>()?;
		Ok(Self { text: lines.join("\n") })
	}

	pub fn as_str(&self) -> &str {
		&self.text
	}
}

impl From<&str> for RecordSourceBlob {
	fn from(text: &str) -> Self {
		Self { text: text.to_string() }
	}
}

impl From<String> for RecordSourceBlob {
	fn from(text: String) -> Self {
		Self { text }
	}
}

impl Debug for RecordSourceBlob {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("RecordSourceBlob").field("bytes", &self.text.len()).finish()
	}
}

#[async_trait]
impl RecordSourceTrait for RecordSourceBlob {
	async fn read_records(&self) -> Result<RecordStream<'_>> {
		Ok(read_record_lines(self.text.as_bytes(), String::from("memory")))
	}

	fn get_name(&self) -> &str {
		"memory"
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use futures::TryStreamExt;
	use serde_json::json;

	#[tokio::test]
	async fn from_objects_round_trips_order() -> Result<()> {
		let objects: Vec<JsonObject> = (1..=3)
			.map(|i| json!({ "id": i }).as_object().cloned().unwrap())
			.collect();
		let source = RecordSourceBlob::from_objects(&objects)?;
		assert_eq!(source.as_str().lines().count(), 3);

		let records: Vec<JsonObject> = source.read_records().await?.try_collect().await?;
		assert_eq!(records, objects);
		Ok(())
	}

	#[test]
	fn debug_shows_size_only() {
		let source = RecordSourceBlob::from("{}");
		assert_eq!(format!("{source:?}"), "RecordSourceBlob { bytes: 2 }");
		assert_eq!(source.get_name(), "memory");
	}
}
