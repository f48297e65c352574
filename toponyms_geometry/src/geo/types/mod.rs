// Geometric primitives of the join: points (toponyms) and polygons (building footprints)
// with their rings. They share `GeometryTrait` for validation and bounding boxes, and
// convert into `geo_types` for the exact containment predicate.

mod coordinates;
mod macros;
mod point;
mod polygon;
mod ring;
mod traits;

pub use coordinates::*;
pub use point::*;
pub use polygon::*;
pub use ring::*;
pub use traits::*;
