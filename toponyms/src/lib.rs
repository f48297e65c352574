//! # toponyms
//!
//! Links the building toponyms of a building-inspector survey export to the building
//! footprints they label.
//!
//! The export is a line-delimited JSON file of survey objects. Buildings come in two
//! shapes: footprint polygons and label points. For every label point lying inside a
//! footprint on the same map layer, a relation is written:
//!
//! ```json
//! {"type":"relation","obj":{"from":"building-inspector/t1","to":"building-inspector/b1","type":"st:sameAs"}}
//! ```
//!
//! ## Usage Example
//!
//! ```rust
//! use toponyms::{
//!     core::io::{RecordSourceBlob, RelationWriterBlob},
//!     pipeline::ToponymJoin,
//! };
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let source = RecordSourceBlob::from(concat!(
//!         r#"{"id":"b1","type":"st:Building","data":{"layerId":3},"geometry":{"type":"Polygon","coordinates":[[[0,0],[4,0],[4,4],[0,4],[0,0]]]}}"#,
//!         "\n",
//!         r#"{"id":"t1","type":"st:Building","data":{"layerId":3},"geometry":{"type":"Point","coordinates":[1,2]}}"#,
//!     ));
//!     let mut relations = RelationWriterBlob::new();
//!
//!     ToponymJoin::default().run(&source, &mut relations).await?;
//!     assert_eq!(relations.as_slice()[0].from_id(), "building-inspector/t1");
//!     Ok(())
//! }
//! ```

pub use toponyms_core as core;
pub use toponyms_geometry as geometry;
pub use toponyms_pipeline as pipeline;
