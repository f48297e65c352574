//! GeoJSON geometries and features of the toponym join, and the spatial index they are
//! queried through.

mod geo;
pub mod geojson;
pub mod index;

pub use geo::*;
pub use geojson::*;
pub use index::*;
