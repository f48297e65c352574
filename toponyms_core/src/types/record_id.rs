use super::normalize_number;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::fmt::{Debug, Display};

/// Identity of a record inside its source, taken from the record's `id` member.
///
/// Survey exports use both strings and numbers as ids. Strings are kept verbatim; an
/// integral float such as `1.0` is read as the integer `1`.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
	Number(Number),
	Text(String),
}

impl RecordId {
	/// Reads an id from a JSON value. Only strings and numbers qualify.
	pub fn from_json(value: &Value) -> Option<Self> {
		match value {
			Value::String(text) => Some(RecordId::Text(text.clone())),
			Value::Number(number) => Some(RecordId::Number(normalize_number(number))),
			_ => None,
		}
	}
}

impl From<&str> for RecordId {
	fn from(value: &str) -> Self {
		RecordId::Text(value.to_string())
	}
}

impl From<u64> for RecordId {
	fn from(value: u64) -> Self {
		RecordId::Number(Number::from(value))
	}
}

impl Display for RecordId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			RecordId::Number(number) => Display::fmt(number, f),
			RecordId::Text(text) => f.write_str(text),
		}
	}
}

impl Debug for RecordId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			RecordId::Number(number) => f.debug_tuple("Number").field(&number.to_string()).finish(),
			RecordId::Text(text) => f.debug_tuple("Text").field(text).finish(),
		}
	}
}
