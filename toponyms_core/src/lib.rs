//! Shared building blocks of the toponym join: record identifiers, relation records,
//! the line-delimited JSON record source, the relation sink and the configuration.

pub mod config;
pub mod io;
pub mod types;

pub use types::*;
