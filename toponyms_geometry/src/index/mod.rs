//! Point-in-polygon containment over a fixed set of polygon features.
//!
//! The join only depends on [`SpatialIndexTrait`]: seed it once with a
//! [`GeoCollection`](crate::GeoCollection), then ask which features contain a point.
//! [`PolygonIndex`] is the provided implementation.

mod error;
mod polygon_index;
mod traits;

pub use error::*;
pub use polygon_index::*;
pub use traits::*;
