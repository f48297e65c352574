#[cfg(feature = "cli")]
use clap::ValueEnum;
use serde::Deserialize;
use std::fmt::Display;

/// How the record source is consumed.
///
/// Both modes finish indexing every polygon before the first toponym is matched.
#[cfg_attr(feature = "cli", derive(ValueEnum))]
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PassMode {
	/// Read the source once for polygons and once more for toponyms.
	#[default]
	TwoPass,
	/// Read the source once, holding toponyms in memory until indexing is done.
	Buffered,
}

impl PassMode {
	pub fn as_str(&self) -> &str {
		match self {
			PassMode::TwoPass => "two_pass",
			PassMode::Buffered => "buffered",
		}
	}
}

impl Display for PassMode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}
