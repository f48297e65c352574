use crate::{Coordinates, Geometry, PointGeometry, PolygonGeometry, RingGeometry};
use anyhow::{Context, Result, anyhow, bail};
use serde_json::Value;

/// Parses a GeoJSON geometry object.
///
/// `Point` and `Polygon` are read with their coordinates; any other geometry type is
/// returned as [`Geometry::Other`] without looking at its coordinates. Positions may
/// carry more than two numbers (altitude, measure); the extra ones are ignored.
///
/// ```
/// use serde_json::json;
/// use toponyms_geometry::{Geometry, parse_geojson_geometry};
///
/// let geometry = parse_geojson_geometry(&json!({"type": "Point", "coordinates": [5, 5]})).unwrap();
/// assert_eq!(geometry, Geometry::new_point([5.0, 5.0]));
/// ```
pub fn parse_geojson_geometry(value: &Value) -> Result<Geometry> {
	let object = value.as_object().ok_or(anyhow!("geometry must be an object"))?;
	let geometry_type = object
		.get("type")
		.and_then(Value::as_str)
		.ok_or(anyhow!("geometry must have a type"))?;

	Ok(match geometry_type {
		"Point" => Geometry::Point(parse_point(get_coordinates(object)?).context("invalid Point")?),
		"Polygon" => Geometry::Polygon(parse_polygon(get_coordinates(object)?).context("invalid Polygon")?),
		other => Geometry::Other(other.to_string()),
	})
}

fn get_coordinates(object: &serde_json::Map<String, Value>) -> Result<&Value> {
	object.get("coordinates").ok_or(anyhow!("geometry must have coordinates"))
}

fn parse_position(value: &Value) -> Result<Coordinates> {
	let array = value.as_array().ok_or(anyhow!("position must be an array"))?;
	if array.len() < 2 {
		bail!("position must have at least 2 numbers, got {}", array.len());
	}
	let number = |v: &Value| v.as_f64().ok_or(anyhow!("position must contain numbers, got {v}"));
	Ok(Coordinates::new(number(&array[0])?, number(&array[1])?))
}

fn parse_point(value: &Value) -> Result<PointGeometry> {
	parse_position(value).map(PointGeometry)
}

fn parse_ring(value: &Value) -> Result<RingGeometry> {
	let array = value.as_array().ok_or(anyhow!("ring must be an array of positions"))?;
	array.iter().map(parse_position).collect::<Result<Vec<_>>>().map(RingGeometry)
}

fn parse_polygon(value: &Value) -> Result<PolygonGeometry> {
	let array = value.as_array().ok_or(anyhow!("polygon must be an array of rings"))?;
	array.iter().map(parse_ring).collect::<Result<Vec<_>>>().map(PolygonGeometry)
}
