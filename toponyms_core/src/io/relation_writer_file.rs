//! Writes relation records to a line-delimited JSON file, one relation per line.
//!
//! # Examples
//!
//! ```rust
//! use toponyms_core::{io::{RelationWriterFile, RelationWriterTrait}, QualifiedId, RecordId, RelationRecord};
//! use anyhow::Result;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let path = std::env::temp_dir().join("toponyms-doc.relations.ndjson");
//!     let mut writer = RelationWriterFile::create(&path).await?;
//!
//!     let from = QualifiedId::building_inspector(RecordId::from("t1"));
//!     let to = QualifiedId::building_inspector(RecordId::from("b1"));
//!     writer.write_relation(&RelationRecord::same_as(&from, &to)).await?;
//!     writer.finish().await?;
//!
//!     assert_eq!(writer.count(), 1);
//!     Ok(())
//! }
//! ```

use super::RelationWriterTrait;
use crate::RelationRecord;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::{
	fs::{self, File},
	io::{AsyncWriteExt, BufWriter},
};

pub struct RelationWriterFile {
	writer: BufWriter<File>,
	path: PathBuf,
	count: u64,
}

impl RelationWriterFile {
	/// Creates (or truncates) the file at `path`, creating missing parent directories.
	pub async fn create(path: &Path) -> Result<RelationWriterFile> {
		if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
			fs::create_dir_all(parent)
				.await
				.with_context(|| format!("failed to create directory {parent:?}"))?;
		}

		let file = File::create(path)
			.await
			.with_context(|| format!("failed to create relations file {path:?}"))?;

		Ok(RelationWriterFile {
			writer: BufWriter::new(file),
			path: path.to_path_buf(),
			count: 0,
		})
	}

	/// Number of relations written so far.
	pub fn count(&self) -> u64 {
		self.count
	}

	pub fn path(&self) -> &Path {
		&self.path
	}
}

#[async_trait]
impl RelationWriterTrait for RelationWriterFile {
	async fn write_relation(&mut self, relation: &RelationRecord) -> Result<()> {
		let mut line = serde_json::to_vec(relation)?;
		line.push(b'\n');
		self
			.writer
			.write_all(&line)
			.await
			.with_context(|| format!("failed to write to {:?}", self.path))?;
		self.count += 1;
		Ok(())
	}

	async fn finish(&mut self) -> Result<()> {
		self
			.writer
			.flush()
			.await
			.with_context(|| format!("failed to flush {:?}", self.path))
	}
}
