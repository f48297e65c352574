use super::GeoFeature;

/// A FeatureCollection, the unit a spatial index is seeded with.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeoCollection {
	pub features: Vec<GeoFeature>,
}

impl GeoCollection {
	#[must_use]
	pub fn from(features: Vec<GeoFeature>) -> Self {
		Self { features }
	}

	pub fn push(&mut self, feature: GeoFeature) {
		self.features.push(feature);
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.features.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.features.is_empty()
	}
}

impl FromIterator<GeoFeature> for GeoCollection {
	fn from_iter<T: IntoIterator<Item = GeoFeature>>(iter: T) -> Self {
		Self::from(iter.into_iter().collect())
	}
}

impl IntoIterator for GeoCollection {
	type Item = GeoFeature;
	type IntoIter = std::vec::IntoIter<GeoFeature>;
	fn into_iter(self) -> Self::IntoIter {
		self.features.into_iter()
	}
}
