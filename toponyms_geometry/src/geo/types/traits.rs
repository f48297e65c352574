use anyhow::Result;
use std::fmt::Debug;

/// Common interface of the geometric primitives.
pub trait GeometryTrait: Debug + Clone + Sized {
	/// Verifies the geometric validity of the geometry.
	/// For example, checks if there are enough points or if polygons are properly closed.
	/// Returns an error describing the first problem found.
	fn verify(&self) -> Result<()>;

	/// Compute the bounding box of this geometry.
	///
	/// Returns `Some([x_min, y_min, x_max, y_max])` over all finite coordinates,
	/// or `None` if there are none.
	fn compute_bounds(&self) -> Option<[f64; 4]>;
}

/// Folds coordinates into a bounding box, ignoring non-finite ones.
pub(crate) fn bounds_of<'a>(coords: impl IntoIterator<Item = &'a super::Coordinates>) -> Option<[f64; 4]> {
	coords
		.into_iter()
		.filter(|c| c.is_finite())
		.fold(None, |bounds, c| {
			Some(match bounds {
				None => [c.x(), c.y(), c.x(), c.y()],
				Some([x_min, y_min, x_max, y_max]) => [x_min.min(c.x()), y_min.min(c.y()), x_max.max(c.x()), y_max.max(c.y())],
			})
		})
}
