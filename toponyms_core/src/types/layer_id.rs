use super::normalize_number;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::{
	cmp::Ordering,
	fmt::{Debug, Display},
};

/// Identifier of a map layer, read from a record's `data.layerId`.
///
/// Numbers are compared by value, so `1` and `1.0` name the same layer, while the
/// string `"1"` and the number `1` name different layers. Numbers sort before strings.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LayerId {
	Number(Number),
	Text(String),
}

impl LayerId {
	/// Reads a layer id from a JSON value.
	///
	/// Returns `None` for anything but a number or a non-empty string, which keeps
	/// records without a usable layer out of every layer.
	pub fn from_json(value: &Value) -> Option<Self> {
		match value {
			Value::String(text) if !text.is_empty() => Some(LayerId::Text(text.clone())),
			Value::Number(number) => Some(LayerId::Number(normalize_number(number))),
			_ => None,
		}
	}
}

impl From<&str> for LayerId {
	fn from(value: &str) -> Self {
		LayerId::Text(value.to_string())
	}
}

impl From<u64> for LayerId {
	fn from(value: u64) -> Self {
		LayerId::Number(Number::from(value))
	}
}

impl Display for LayerId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			LayerId::Number(number) => Display::fmt(number, f),
			LayerId::Text(text) => f.write_str(text),
		}
	}
}

impl Debug for LayerId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			LayerId::Number(number) => f.debug_tuple("Number").field(&number.to_string()).finish(),
			LayerId::Text(text) => f.debug_tuple("Text").field(text).finish(),
		}
	}
}

impl PartialOrd for LayerId {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for LayerId {
	fn cmp(&self, other: &Self) -> Ordering {
		use LayerId::*;
		match (self, other) {
			(Number(a), Number(b)) => {
				let by_value = match (a.as_f64(), b.as_f64()) {
					(Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
					_ => Ordering::Equal,
				};
				by_value.then_with(|| a.to_string().cmp(&b.to_string()))
			}
			(Text(a), Text(b)) => a.cmp(b),
			(Number(_), Text(_)) => Ordering::Less,
			(Text(_), Number(_)) => Ordering::Greater,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	#[case(json!("L1"), Some(LayerId::from("L1")))]
	#[case(json!(7), Some(LayerId::from(7)))]
	#[case(json!(""), None)]
	#[case(json!(null), None)]
	#[case(json!(true), None)]
	#[case(json!(["L1"]), None)]
	fn from_json(#[case] value: Value, #[case] expected: Option<LayerId>) {
		assert_eq!(LayerId::from_json(&value), expected);
	}

	#[test]
	fn string_and_number_are_different_layers() {
		let text = LayerId::from_json(&json!("1")).unwrap();
		let number = LayerId::from_json(&json!(1)).unwrap();
		assert_ne!(text, number);
		assert_eq!(text.to_string(), number.to_string());
	}

	#[test]
	fn ordering() {
		let mut layers = vec![
			LayerId::from("b"),
			LayerId::from(10),
			LayerId::from("a"),
			LayerId::from(2),
			LayerId::from_json(&json!(2.5)).unwrap(),
		];
		layers.sort();
		assert_eq!(
			layers.iter().map(|l| l.to_string()).collect::<Vec<_>>(),
			vec!["2", "2.5", "10", "a", "b"]
		);
	}

	#[test]
	fn equal_values_are_the_same_layer() {
		let int = LayerId::from(1);
		let float = LayerId::from_json(&json!(1.0)).unwrap();
		assert_eq!(int, float);
		assert_eq!(int.cmp(&float), Ordering::Equal);
		assert_eq!(float.to_string(), "1");

		let zero = LayerId::from_json(&json!(0.0)).unwrap();
		let negative_zero = LayerId::from_json(&json!(-0.0)).unwrap();
		assert_eq!(zero, negative_zero);
		assert_eq!(zero.cmp(&negative_zero), Ordering::Equal);

		assert_ne!(LayerId::from_json(&json!("1")).unwrap(), float);
	}
}
