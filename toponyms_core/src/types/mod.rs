mod json;
mod layer_id;
mod qualified_id;
mod record_id;
mod relation;

pub use json::*;
pub use layer_id::*;
pub use qualified_id::*;
pub use record_id::*;
pub use relation::*;
