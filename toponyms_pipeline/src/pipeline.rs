//! Orchestration of the join: the indexing phase, then the matching phase.

use crate::{
	GeometryRecord, JoinError, LayerIndex, LayerIndexBuilder, MatchOutcome,
	classifier::{RecordClass, classify},
	match_toponym,
};
use anyhow::{Context, Result, bail};
use futures::StreamExt;
use log::{debug, info, warn};
use std::fmt::Display;
use toponyms_core::{
	config::PassMode,
	io::{RecordSourceTrait, RelationWriterTrait},
};
use tokio_util::sync::CancellationToken;

/// The phases of a run. Matching starts only after indexing has completed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
	Indexing,
	Matching,
}

impl Display for Phase {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(match self {
			Phase::Indexing => "indexing",
			Phase::Matching => "matching",
		})
	}
}

/// Why a run ended early. Only a failed sink is left unfinished.
enum Failure {
	Sink(anyhow::Error),
	Run(anyhow::Error),
}

impl From<anyhow::Error> for Failure {
	fn from(error: anyhow::Error) -> Self {
		Failure::Run(error)
	}
}

/// Counters of a completed run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
	pub polygons_indexed: usize,
	pub layers: usize,
	pub toponyms: usize,
	pub relations_written: usize,
	pub misses: usize,
	pub missing_index: usize,
	pub query_errors: usize,
	pub missing_ids: usize,
}

impl RunSummary {
	fn count_failure(&mut self, error: &JoinError) {
		match error {
			JoinError::MissingIndex { .. } => self.missing_index += 1,
			JoinError::ContainmentQuery { .. } => self.query_errors += 1,
			JoinError::MissingId => self.missing_ids += 1,
		}
	}
}

impl Display for RunSummary {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"{} relations from {} toponyms ({} misses, {} without index, {} failed queries, {} without id); {} polygons in {} layers",
			self.relations_written,
			self.toponyms,
			self.misses,
			self.missing_index,
			self.query_errors,
			self.missing_ids,
			self.polygons_indexed,
			self.layers
		)
	}
}

/// Links the toponyms of a record source to the buildings containing them.
///
/// ```
/// use toponyms_core::io::{RecordSourceBlob, RelationWriterBlob};
/// use toponyms_pipeline::ToponymJoin;
///
/// #[tokio::main]
/// async fn main() -> anyhow::Result<()> {
///     let source = RecordSourceBlob::from(concat!(
///         r#"{"id":"b1","type":"Building","data":{"layerId":"L1"},"geometry":{"type":"Polygon","coordinates":[[[0,0],[10,0],[10,10],[0,10],[0,0]]]}}"#,
///         "\n",
///         r#"{"id":"t1","type":"Building","data":{"layerId":"L1"},"geometry":{"type":"Point","coordinates":[5,5]}}"#,
///     ));
///     let mut sink = RelationWriterBlob::new();
///
///     let summary = ToponymJoin::default().run(&source, &mut sink).await?;
///     assert_eq!(summary.relations_written, 1);
///     assert_eq!(sink.as_slice()[0].to_id(), "building-inspector/b1");
///     Ok(())
/// }
/// ```
#[derive(Clone, Debug, Default)]
pub struct ToponymJoin {
	pass_mode: PassMode,
	cancellation: CancellationToken,
}

impl ToponymJoin {
	pub fn new(pass_mode: PassMode) -> Self {
		Self {
			pass_mode,
			cancellation: CancellationToken::new(),
		}
	}

	/// Stops the run at the next record once `token` is cancelled.
	pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
		self.cancellation = token;
		self
	}

	/// Runs both phases and finishes `sink`.
	///
	/// Relations are written one at a time in the order of their toponyms. The first
	/// failing write ends the run with that error; so do read errors of the source and
	/// cancellation. Per-toponym failures are logged and counted only.
	///
	/// After a read error or cancellation the sink is still finished, so that relations
	/// written up to that point are kept. A sink whose write failed is not finished.
	pub async fn run(&self, source: &dyn RecordSourceTrait, sink: &mut dyn RelationWriterTrait) -> Result<RunSummary> {
		let mut summary = RunSummary::default();
		match self.run_phases(source, sink, &mut summary).await {
			Ok(()) => {
				sink.finish().await.context("failed to finish relation sink")?;
				info!("Done matching toponyms: {summary}");
				Ok(summary)
			}
			Err(Failure::Sink(error)) => Err(error),
			Err(Failure::Run(error)) => {
				if let Err(finish_error) = sink.finish().await {
					warn!("failed to finish relation sink after an aborted run: {finish_error:#}");
				}
				info!("Aborted after {} relations", summary.relations_written);
				Err(error)
			}
		}
	}

	async fn run_phases(
		&self,
		source: &dyn RecordSourceTrait,
		sink: &mut dyn RelationWriterTrait,
		summary: &mut RunSummary,
	) -> Result<(), Failure> {
		let (layer_index, buffered) = self.index(source).await?;
		summary.polygons_indexed = layer_index.feature_count();
		summary.layers = layer_index.len();
		info!("Done indexing geometries: {} polygons in {} layers", summary.polygons_indexed, summary.layers);

		match buffered {
			Some(toponyms) => {
				for toponym in toponyms {
					self.check_cancelled(Phase::Matching)?;
					self.match_and_write(&toponym, &layer_index, sink, summary).await?;
				}
			}
			None => {
				let mut stream = source.read_records().await?;
				while let Some(object) = stream.next().await {
					self.check_cancelled(Phase::Matching)?;
					let record = GeometryRecord::new(object.with_context(|| format!("failed to read {}", source.get_name()))?);
					if classify(&record) == RecordClass::BuildingToponym {
						self.match_and_write(&record, &layer_index, sink, summary).await?;
					}
				}
			}
		}
		Ok(())
	}

	/// Indexes all building polygons. In buffered mode the toponyms of the same pass
	/// are kept for matching.
	async fn index(&self, source: &dyn RecordSourceTrait) -> Result<(LayerIndex, Option<Vec<GeometryRecord>>)> {
		let mut builder = LayerIndexBuilder::new();
		let mut toponyms = match self.pass_mode {
			PassMode::TwoPass => None,
			PassMode::Buffered => Some(Vec::new()),
		};

		let mut stream = source.read_records().await?;
		while let Some(object) = stream.next().await {
			self.check_cancelled(Phase::Indexing)?;
			let record = GeometryRecord::new(object.with_context(|| format!("failed to read {}", source.get_name()))?);
			match (classify(&record), toponyms.as_mut()) {
				(RecordClass::BuildingPolygon, _) => {
					builder.add(record);
				}
				(RecordClass::BuildingToponym, Some(toponyms)) => toponyms.push(record),
				_ => {}
			}
		}
		self.check_cancelled(Phase::Indexing)?;

		Ok((builder.build(), toponyms))
	}

	async fn match_and_write(
		&self,
		toponym: &GeometryRecord,
		layer_index: &LayerIndex,
		sink: &mut dyn RelationWriterTrait,
		summary: &mut RunSummary,
	) -> Result<(), Failure> {
		summary.toponyms += 1;
		match match_toponym(toponym, layer_index) {
			MatchOutcome::Matched(relations) => {
				for relation in relations {
					self.check_cancelled(Phase::Matching)?;
					sink
						.write_relation(&relation)
						.await
						.with_context(|| format!("failed to write relation {} -> {}", relation.from_id(), relation.to_id()))
						.map_err(Failure::Sink)?;
					summary.relations_written += 1;
				}
			}
			MatchOutcome::Miss => {
				debug!("no building found for toponym {:?}", toponym.id());
				summary.misses += 1;
			}
			MatchOutcome::Failed(error) => {
				warn!("{:#}", anyhow::Error::from(error.clone()));
				summary.count_failure(&error);
			}
		}
		Ok(())
	}

	fn check_cancelled(&self, phase: Phase) -> Result<()> {
		if self.cancellation.is_cancelled() {
			bail!("toponym join cancelled during {phase}");
		}
		Ok(())
	}
}
