use serde_json::{Value, map};
use std::fmt::Debug;
use toponyms_core::{JsonObject, RecordId};

/// The non-geometric members of a record, carried opaquely.
#[derive(Clone, Default, PartialEq)]
pub struct GeoProperties {
	properties: JsonObject,
}

impl GeoProperties {
	#[must_use]
	pub fn new() -> GeoProperties {
		GeoProperties::default()
	}
	pub fn insert(&mut self, key: String, value: Value) {
		self.properties.insert(key, value);
	}
	pub fn remove(&mut self, key: &str) -> Option<Value> {
		self.properties.remove(key)
	}
	#[must_use]
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.properties.get(key)
	}
	pub fn iter(&self) -> map::Iter<'_> {
		self.properties.iter()
	}
	#[must_use]
	pub fn len(&self) -> usize {
		self.properties.len()
	}
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.properties.is_empty()
	}
	#[must_use]
	pub fn as_object(&self) -> &JsonObject {
		&self.properties
	}
	/// The `id` member, if it is a string or a number.
	#[must_use]
	pub fn id(&self) -> Option<RecordId> {
		self.get("id").and_then(RecordId::from_json)
	}
}

impl From<JsonObject> for GeoProperties {
	fn from(properties: JsonObject) -> Self {
		GeoProperties { properties }
	}
}

impl From<Vec<(&str, Value)>> for GeoProperties {
	fn from(value: Vec<(&str, Value)>) -> Self {
		value.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
	}
}

impl FromIterator<(String, Value)> for GeoProperties {
	fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
		GeoProperties {
			properties: JsonObject::from_iter(iter),
		}
	}
}

impl IntoIterator for GeoProperties {
	type Item = (String, Value);
	type IntoIter = map::IntoIter;
	fn into_iter(self) -> Self::IntoIter {
		self.properties.into_iter()
	}
}

impl Debug for GeoProperties {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_map().entries(self.iter()).finish()
	}
}
