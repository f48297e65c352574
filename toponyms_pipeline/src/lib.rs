//! The two-phase toponym join.
//!
//! First every building polygon of the record source is indexed, grouped by map layer.
//! Then the source is read again and every building toponym is matched against the
//! index of its layer; each containing building yields one `st:sameAs` relation.

pub mod classifier;
mod error;
pub mod layer_index;
pub mod matcher;
pub mod pipeline;
mod record;

pub use error::JoinError;
pub use layer_index::{LayerIndex, LayerIndexBuilder};
pub use matcher::{MatchOutcome, match_toponym};
pub use pipeline::{Phase, RunSummary, ToponymJoin};
pub use record::GeometryRecord;
