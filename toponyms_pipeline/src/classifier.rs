//! Partitions survey records into building polygons and building toponyms.

use crate::GeometryRecord;
use toponyms_geometry::{GeoFeature, Geometry};

/// Type tag of building records.
pub const BUILDING_TYPE: &str = "Building";

/// The same tag in the `st:` namespace, as the survey exports write it.
pub const BUILDING_TYPE_NAMESPACED: &str = "st:Building";

/// Role of a record in the join.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordClass {
	BuildingPolygon,
	BuildingToponym,
	Other,
}

pub fn is_building(record: &GeometryRecord) -> bool {
	matches!(record.type_tag(), Some(BUILDING_TYPE | BUILDING_TYPE_NAMESPACED))
}

/// A building whose geometry is a polygon: a footprint.
pub fn is_building_polygon(record: &GeometryRecord) -> bool {
	is_building(record) && matches!(record.geometry(), Some(Geometry::Polygon(_)))
}

/// A building whose geometry is a point: a label placement.
pub fn is_building_toponym(record: &GeometryRecord) -> bool {
	is_building(record) && matches!(record.geometry(), Some(Geometry::Point(_)))
}

pub fn classify(record: &GeometryRecord) -> RecordClass {
	if is_building_polygon(record) {
		RecordClass::BuildingPolygon
	} else if is_building_toponym(record) {
		RecordClass::BuildingToponym
	} else {
		RecordClass::Other
	}
}

/// Projects a record to a feature; `None` without a geometry.
pub fn to_feature(record: GeometryRecord) -> Option<GeoFeature> {
	record.into_feature()
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::{Value, json};

	fn record(value: Value) -> GeometryRecord {
		GeometryRecord::new(value.as_object().cloned().unwrap())
	}

	fn square() -> Value {
		json!({"type": "Polygon", "coordinates": [[[0, 0], [10, 0], [10, 10], [0, 10], [0, 0]]]})
	}

	fn point() -> Value {
		json!({"type": "Point", "coordinates": [5, 5]})
	}

	#[rstest]
	#[case(json!({"type": "Building", "geometry": square()}), RecordClass::BuildingPolygon)]
	#[case(json!({"type": "st:Building", "geometry": square()}), RecordClass::BuildingPolygon)]
	#[case(json!({"type": "Building", "geometry": point()}), RecordClass::BuildingToponym)]
	#[case(json!({"type": "st:Building", "geometry": point()}), RecordClass::BuildingToponym)]
	#[case(json!({"type": "Building"}), RecordClass::Other)]
	#[case(json!({"type": "Building", "geometry": {"type": "LineString", "coordinates": [[0, 0], [1, 1]]}}), RecordClass::Other)]
	#[case(json!({"type": "Building", "geometry": {"coordinates": [5, 5]}}), RecordClass::Other)]
	#[case(json!({"type": "Street", "geometry": square()}), RecordClass::Other)]
	#[case(json!({"type": "building", "geometry": point()}), RecordClass::Other)]
	#[case(json!({"geometry": point()}), RecordClass::Other)]
	fn classifies(#[case] value: Value, #[case] expected: RecordClass) {
		let r = record(value);
		assert_eq!(classify(&r), expected);
		assert_eq!(is_building_polygon(&r), expected == RecordClass::BuildingPolygon);
		assert_eq!(is_building_toponym(&r), expected == RecordClass::BuildingToponym);
	}

	#[test]
	fn to_feature_drops_geometry_from_properties() {
		let feature = to_feature(record(json!({"id": "b1", "type": "Building", "geometry": square()}))).unwrap();
		assert!(feature.properties.get("geometry").is_none());
		assert_eq!(feature.properties.get("type"), Some(&json!("Building")));
		assert_eq!(feature.geometry.get_type_name(), "Polygon");
	}

	#[test]
	fn to_feature_without_geometry() {
		assert_eq!(to_feature(record(json!({"id": "b1", "type": "Building"}))), None);
	}
}
