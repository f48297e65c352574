//! Configuration of a join run.
//!
//! - [`Config`](crate::config::Config): YAML loader, file locations and pass mode
//! - [`PassMode`](crate::config::PassMode): how often the record source is read
//!
//! A configuration file looks like this:
//!
//! ```yaml
//! source: ../building-inspector/building-inspector.objects.ndjson
//! target: toponyms.relations.ndjson
//! pass_mode: buffered
//! ```

mod main;
mod pass_mode;

pub use main::Config;
pub use pass_mode::PassMode;
