//! This module defines the `RecordSourceTrait`, the interface of every store the join reads
//! geometry records from.
//!
//! # Examples
//!
//! ```rust
//! use toponyms_core::io::{RecordSourceBlob, RecordSourceTrait};
//! use futures::TryStreamExt;
//! use anyhow::Result;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let source = RecordSourceBlob::from("{\"id\":\"b1\"}\n{\"id\":\"t1\"}");
//!
//!     // every call starts a new pass over the records
//!     let first: Vec<_> = source.read_records().await?.try_collect().await?;
//!     let second: Vec<_> = source.read_records().await?.try_collect().await?;
//!     assert_eq!(first, second);
//!     assert_eq!(first.len(), 2);
//!
//!     Ok(())
//! }
//! ```

use crate::JsonObject;
use anyhow::Result;
use async_trait::async_trait;
use futures::stream::BoxStream;
use std::fmt::Debug;

/// A stream of records in source order. An `Err` item is a failed read and ends the stream.
pub type RecordStream<'a> = BoxStream<'a, Result<JsonObject>>;

#[async_trait]
pub trait RecordSourceTrait: Debug + Send + Sync {
	/// Starts a new pass over all records of the source.
	async fn read_records(&self) -> Result<RecordStream<'_>>;

	/// Gets the name of the source, used in log and error messages.
	fn get_name(&self) -> &str;
}
