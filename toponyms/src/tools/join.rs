use anyhow::{Context, Result};
use log::{info, warn};
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;
use toponyms_core::{
	config::{Config, PassMode},
	io::{RecordSourceFile, RelationWriterFile},
};
use toponyms_pipeline::ToponymJoin;

#[derive(clap::Args, Debug)]
#[command(disable_version_flag = true)]
pub struct Subcommand {
	/// line-delimited JSON file with the building-inspector objects
	/// [default: building-inspector/building-inspector.objects.ndjson]
	#[arg(verbatim_doc_comment)]
	input_file: Option<PathBuf>,

	/// line-delimited JSON file the relations are written to
	/// [default: toponyms.relations.ndjson]
	#[arg(verbatim_doc_comment)]
	output_file: Option<PathBuf>,

	/// YAML configuration file; its relative paths are resolved against its directory
	#[arg(long, short, value_name = "FILE", display_order = 1)]
	config: Option<PathBuf>,

	/// how the input is read; overrides the configuration file
	#[arg(long, value_enum, value_name = "MODE", display_order = 2)]
	pass_mode: Option<PassMode>,

	/// read the input only once, keeping toponyms in memory while indexing; same as `--pass-mode buffered`
	#[arg(long, display_order = 2, conflicts_with = "pass_mode")]
	buffered: bool,
}

#[tokio::main]
pub async fn run(arguments: &Subcommand) -> Result<()> {
	let config = get_config(arguments)?;
	eprintln!("join toponyms from {:?} to {:?}", config.source, config.target);

	let source = RecordSourceFile::open(&config.source)?;
	let mut sink = RelationWriterFile::create(&config.target).await?;

	let token = CancellationToken::new();
	let interrupt = token.clone();
	tokio::spawn(async move {
		if tokio::signal::ctrl_c().await.is_ok() {
			warn!("interrupted, stopping the join");
			interrupt.cancel();
		}
	});

	let summary = ToponymJoin::new(config.pass_mode)
		.with_cancellation(token)
		.run(&source, &mut sink)
		.await
		.with_context(|| format!("failed to join toponyms of {:?}", config.source))?;
	info!("wrote {} relations to {:?}", sink.count(), sink.path());

	eprintln!("finished: {summary}");

	Ok(())
}

/// Loads `--config` if given, then applies the positional paths and the pass mode on top.
fn get_config(arguments: &Subcommand) -> Result<Config> {
	let mut config = match &arguments.config {
		Some(path) => Config::from_path(path)?,
		None => Config::default(),
	};
	if let Some(input_file) = &arguments.input_file {
		config.source.clone_from(input_file);
	}
	if let Some(output_file) = &arguments.output_file {
		config.target.clone_from(output_file);
	}
	if let Some(pass_mode) = arguments.pass_mode {
		config.pass_mode = pass_mode;
	}
	if arguments.buffered {
		config.pass_mode = PassMode::Buffered;
	}
	Ok(config)
}
