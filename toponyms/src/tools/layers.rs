use anyhow::{Context, Result};
use futures::StreamExt;
use itertools::Itertools;
use std::{collections::HashMap, fmt::Write, path::PathBuf};
use toponyms_core::{
	LayerId,
	io::{RecordSourceFile, RecordSourceTrait},
};
use toponyms_pipeline::{
	GeometryRecord, LayerIndex, LayerIndexBuilder,
	classifier::{RecordClass, classify},
};

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// line-delimited JSON file with the building-inspector objects
	#[arg(required = true)]
	input_file: PathBuf,
}

#[tokio::main]
pub async fn run(arguments: &Subcommand) -> Result<()> {
	let source = RecordSourceFile::open(&arguments.input_file)?;
	let report = LayerReport::read(&source).await?;
	print!("{}", report.render());
	Ok(())
}

/// Polygons and toponyms per map layer, from a single pass over a source.
struct LayerReport {
	index: LayerIndex,
	toponyms: HashMap<LayerId, usize>,
	toponyms_without_layer: usize,
}

impl LayerReport {
	async fn read(source: &dyn RecordSourceTrait) -> Result<LayerReport> {
		let mut builder = LayerIndexBuilder::new();
		let mut toponym_layers = Vec::new();
		let mut toponyms_without_layer = 0;

		let mut stream = source.read_records().await?;
		while let Some(object) = stream.next().await {
			let record = GeometryRecord::new(object.with_context(|| format!("failed to read {}", source.get_name()))?);
			match classify(&record) {
				RecordClass::BuildingPolygon => {
					builder.add(record);
				}
				RecordClass::BuildingToponym => match record.layer_id() {
					Some(layer) => toponym_layers.push(layer),
					None => toponyms_without_layer += 1,
				},
				RecordClass::Other => {}
			}
		}

		Ok(LayerReport {
			index: builder.build(),
			toponyms: toponym_layers.into_iter().counts(),
			toponyms_without_layer,
		})
	}

	/// One line per layer in ascending layer order. Layers whose toponyms have no
	/// polygons to match against are flagged.
	fn render(&self) -> String {
		let polygons: HashMap<&LayerId, usize> = self.index.feature_counts().collect();
		let mut text = String::new();
		for layer in self.index.layer_ids().chain(self.toponyms.keys()).sorted().dedup() {
			let polygon_count = polygons.get(layer).copied().unwrap_or(0);
			let toponym_count = self.toponyms.get(layer).copied().unwrap_or(0);
			let _ = write!(text, "layer {layer}: {polygon_count} polygons, {toponym_count} toponyms");
			if toponym_count > 0 && self.index.get(layer).is_none() {
				text.push_str(" (no polygons to match)");
			}
			text.push('\n');
		}
		if self.toponyms_without_layer > 0 {
			let _ = writeln!(text, "{} toponyms without layer", self.toponyms_without_layer);
		}
		text
	}
}
