//! Readers for geometry records and writers for relation records.
//!
//! # Overview
//!
//! Records are stored as line-delimited JSON: one object per line. A [`RecordSourceTrait`]
//! turns such a store into a stream of [`JsonObject`](crate::JsonObject)s and can be read any
//! number of times; every call to `read_records` starts a fresh, independent pass.
//!
//! Relations leave the join through a [`RelationWriterTrait`], one record per call.
//!
//! | source / sink          | backing store                   |
//! |------------------------|---------------------------------|
//! | [`RecordSourceFile`]   | a line-delimited JSON file      |
//! | [`RecordSourceBlob`]   | line-delimited JSON in memory   |
//! | [`RelationWriterFile`] | a line-delimited JSON file      |
//! | [`RelationWriterBlob`] | a vector of relations in memory |

mod lines;
mod record_source;
mod record_source_blob;
mod record_source_file;
mod relation_writer;
mod relation_writer_blob;
mod relation_writer_file;

pub use lines::*;
pub use record_source::*;
pub use record_source_blob::*;
pub use record_source_file::*;
pub use relation_writer::*;
pub use relation_writer_blob::*;
pub use relation_writer_file::*;
