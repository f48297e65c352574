use serde_json::{Map, Number, Value};

/// A JSON object as read from one line of the record source.
pub type JsonObject = Map<String, Value>;

/// Follows `path` through nested objects and returns the value at its end.
///
/// ```
/// use serde_json::json;
/// use toponyms_core::get_json_path;
///
/// let record = json!({ "data": { "layerId": "L1" } });
/// let record = record.as_object().unwrap();
/// assert_eq!(get_json_path(record, &["data", "layerId"]), Some(&json!("L1")));
/// assert_eq!(get_json_path(record, &["data", "missing"]), None);
/// ```
pub fn get_json_path<'a>(object: &'a JsonObject, path: &[&str]) -> Option<&'a Value> {
	let (last, parents) = path.split_last()?;
	let mut current = object;
	for key in parents {
		current = current.get(*key)?.as_object()?;
	}
	current.get(*last)
}

/// Rewrites integral floats such as `1.0` or `-0.0` as integers, so that numbers with the
/// same value get the same representation. Other numbers are returned unchanged.
pub fn normalize_number(number: &Number) -> Number {
	if number.is_i64() || number.is_u64() {
		return number.clone();
	}
	match number.as_f64() {
		Some(value) if value.fract() == 0.0 && value >= 0.0 && value < u64::MAX as f64 => Number::from(value as u64),
		Some(value) if value.fract() == 0.0 && value < 0.0 && value >= i64::MIN as f64 => Number::from(value as i64),
		_ => number.clone(),
	}
}
