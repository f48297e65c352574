use super::PassMode;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::{
	fs::File,
	io::{BufReader, Read},
	path::{Path, PathBuf},
};

const DEFAULT_SOURCE: &str = "building-inspector/building-inspector.objects.ndjson";
const DEFAULT_TARGET: &str = "toponyms.relations.ndjson";

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
	/// Line-delimited JSON file with the building-inspector objects
	#[serde(default = "default_source")]
	pub source: PathBuf,

	/// Line-delimited JSON file the relations are written to
	#[serde(default = "default_target")]
	pub target: PathBuf,

	/// Read the source twice (`two_pass`) or once, buffering toponyms (`buffered`)
	#[serde(default)]
	pub pass_mode: PassMode,
}

fn default_source() -> PathBuf {
	PathBuf::from(DEFAULT_SOURCE)
}

fn default_target() -> PathBuf {
	PathBuf::from(DEFAULT_TARGET)
}

impl Default for Config {
	fn default() -> Self {
		Config {
			source: default_source(),
			target: default_target(),
			pass_mode: PassMode::default(),
		}
	}
}

impl Config {
	pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
		Ok(serde_yaml_ng::from_reader(reader)?)
	}

	pub fn from_string(text: &str) -> Result<Self> {
		// an empty document is a config with every default
		if text.trim().is_empty() {
			return Ok(Config::default());
		}
		Ok(serde_yaml_ng::from_str(text)?)
	}

	/// Parses the file at `path` and resolves relative paths against the file's directory.
	pub fn from_path(path: &Path) -> Result<Self> {
		let file = File::open(path).with_context(|| format!("failed to open config file {path:?}"))?;
		let mut text = String::new();
		BufReader::new(file).read_to_string(&mut text)?;

		let mut config = Config::from_string(&text).with_context(|| format!("failed to parse config file {path:?}"))?;
		if let Some(base) = path.parent() {
			config.resolve_paths(base);
		}
		Ok(config)
	}

	/// Makes `source` and `target` absolute by joining relative ones onto `base`.
	pub fn resolve_paths(&mut self, base: &Path) {
		if self.source.is_relative() {
			self.source = base.join(&self.source);
		}
		if self.target.is_relative() {
			self.target = base.join(&self.target);
		}
	}
}
