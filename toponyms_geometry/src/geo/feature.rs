use super::{GeoProperties, Geometry};
use std::fmt::Debug;
use toponyms_core::RecordId;

/// A geometry with its record's other members, as handed to a spatial index.
#[derive(Clone, Debug, PartialEq)]
pub struct GeoFeature {
	pub geometry: Geometry,
	pub properties: GeoProperties,
}

impl GeoFeature {
	#[must_use]
	pub fn new(geometry: Geometry) -> Self {
		Self {
			geometry,
			properties: GeoProperties::new(),
		}
	}

	#[must_use]
	pub fn with_properties(geometry: Geometry, properties: GeoProperties) -> Self {
		Self { geometry, properties }
	}

	pub fn set_properties(&mut self, properties: GeoProperties) {
		self.properties = properties;
	}

	#[must_use]
	pub fn id(&self) -> Option<RecordId> {
		self.properties.id()
	}
}
