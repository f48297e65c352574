//! Reads geometry records from a line-delimited JSON file on the filesystem.

use super::{RecordSourceTrait, RecordStream, read_record_lines};
use anyhow::{Context, Result, ensure};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::{fs::File, io::BufReader};

#[derive(Debug)]
pub struct RecordSourceFile {
	path: PathBuf,
	name: String,
}

impl RecordSourceFile {
	/// Creates a source for the file at `path`. The file is opened anew on every pass.
	pub fn open(path: &Path) -> Result<RecordSourceFile> {
		ensure!(path.is_file(), "objects file {path:?} does not exist");

		Ok(RecordSourceFile {
			path: path.to_path_buf(),
			name: path.to_string_lossy().to_string(),
		})
	}

	pub fn path(&self) -> &Path {
		&self.path
	}
}

#[async_trait]
impl RecordSourceTrait for RecordSourceFile {
	async fn read_records(&self) -> Result<RecordStream<'_>> {
		let file = File::open(&self.path)
			.await
			.with_context(|| format!("failed to open objects file {:?}", self.path))?;

		Ok(read_record_lines(BufReader::new(file), self.name.clone()))
	}

	fn get_name(&self) -> &str {
		&self.name
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use futures::TryStreamExt;
	use serde_json::json;
	use std::io::Write;
	use tempfile::NamedTempFile;

	#[test]
	fn open_requires_existing_file() {
		let err = RecordSourceFile::open(Path::new("/does/not/exist.ndjson")).unwrap_err();
		assert!(err.to_string().contains("does not exist"));
	}

	#[tokio::test]
	async fn reads_every_pass_from_the_start() -> Result<()> {
		let mut file = NamedTempFile::new()?;
		writeln!(file, "{{\"id\":\"b1\"}}")?;
		writeln!(file)?;
		writeln!(file, "not json")?;
		writeln!(file, "{{\"id\":\"t1\"}}")?;
		file.flush()?;

		let source = RecordSourceFile::open(file.path())?;
		assert_eq!(source.path(), file.path());

		for _ in 0..2 {
			let records: Vec<_> = source.read_records().await?.try_collect().await?;
			assert_eq!(records.len(), 2);
			assert_eq!(records[0]["id"], json!("b1"));
			assert_eq!(records[1]["id"], json!("t1"));
		}
		Ok(())
	}
}
