use log::debug;
use serde_json::Value;
use toponyms_core::{JsonObject, LayerId, RecordId, get_json_path};
use toponyms_geometry::{GeoFeature, GeoProperties, Geometry, parse_geojson_geometry};

/// One record of the survey dataset with its geometry parsed.
///
/// The `geometry` member is split off the record; everything else is kept as it was
/// read. A `geometry` that is not a valid GeoJSON geometry counts as absent.
#[derive(Clone, Debug, PartialEq)]
pub struct GeometryRecord {
	properties: JsonObject,
	geometry: Option<Geometry>,
}

impl GeometryRecord {
	pub fn new(mut properties: JsonObject) -> Self {
		let geometry = properties.remove("geometry").and_then(|value| match parse_geojson_geometry(&value) {
			Ok(geometry) => Some(geometry),
			Err(err) => {
				debug!(
					"ignoring geometry of record {:?}: {err:#}",
					properties.get("id").and_then(RecordId::from_json)
				);
				None
			}
		});
		Self { properties, geometry }
	}

	pub fn id(&self) -> Option<RecordId> {
		self.properties.get("id").and_then(RecordId::from_json)
	}

	pub fn type_tag(&self) -> Option<&str> {
		self.properties.get("type").and_then(Value::as_str)
	}

	/// The map layer from `data.layerId`.
	pub fn layer_id(&self) -> Option<LayerId> {
		get_json_path(&self.properties, &["data", "layerId"]).and_then(LayerId::from_json)
	}

	pub fn geometry(&self) -> Option<&Geometry> {
		self.geometry.as_ref()
	}

	/// All members except `geometry`.
	pub fn properties(&self) -> &JsonObject {
		&self.properties
	}

	/// The record as a feature: its geometry plus all other members as properties.
	pub fn into_feature(self) -> Option<GeoFeature> {
		let geometry = self.geometry?;
		Some(GeoFeature::with_properties(geometry, GeoProperties::from(self.properties)))
	}
}

impl From<JsonObject> for GeometryRecord {
	fn from(object: JsonObject) -> Self {
		Self::new(object)
	}
}
