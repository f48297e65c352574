//! This module defines the `RelationWriterTrait`, the sink relation records are written to.
//!
//! Writers receive one record per call and the caller awaits every call before issuing the
//! next one, so implementations never see concurrent writes.

use crate::RelationRecord;
use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait RelationWriterTrait: Send {
	/// Persists a single relation. An error ends the run.
	async fn write_relation(&mut self, relation: &RelationRecord) -> Result<()>;

	/// Flushes everything written so far. Called once when a run ends, also when the run
	/// failed for a reason other than this sink.
	async fn finish(&mut self) -> Result<()>;
}
