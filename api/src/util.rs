//! Lenient deserializers for request bodies written by a browser client, which
//! is not always careful about sending strings as strings and numbers as numbers.

use {
	serde::{de::Error, Deserialize, Deserializer},
	serde_json::Value,
};

/// Accepts a string, number or boolean and renders it as text. `null` and a
/// missing field both become `None`; pair with `#[serde(default)]`.
pub fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
	D: Deserializer<'de>,
{
	match Option::<Value>::deserialize(deserializer)? {
		None | Some(Value::Null) => Ok(None),
		Some(Value::String(text)) => Ok(Some(text)),
		Some(Value::Number(number)) => Ok(Some(number.to_string())),
		Some(Value::Bool(boolean)) => Ok(Some(boolean.to_string())),
		Some(other) => Err(Error::custom(format!("expected text, found `{other}`"))),
	}
}

/// Accepts a number or a string holding one. `null` and a missing field both
/// become `None`; pair with `#[serde(default)]`.
pub fn optional_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
	D: Deserializer<'de>,
{
	match Option::<Value>::deserialize(deserializer)? {
		None | Some(Value::Null) => Ok(None),
		Some(Value::Number(number)) => number
			.as_f64()
			.map(Some)
			.ok_or_else(|| Error::custom(format!("`{number}` is out of range"))),
		Some(Value::String(text)) => text
			.trim()
			.parse::<f64>()
			.map(Some)
			.map_err(|_| Error::custom(format!("expected a number, found `{text}`"))),
		Some(other) => Err(Error::custom(format!("expected a number, found `{other}`"))),
	}
}

/// Accepts a whole number that fits an `i32`, written as a number or as a string.
/// `null` and a missing field both become `None`; pair with `#[serde(default)]`.
pub fn optional_integer<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
	D: Deserializer<'de>,
{
	let integer = match Option::<Value>::deserialize(deserializer)? {
		None | Some(Value::Null) => return Ok(None),
		Some(Value::Number(number)) => number
			.as_i64()
			.or_else(|| number.as_f64().filter(|n| n.fract() == 0.0).map(|n| n as i64)),
		Some(Value::String(text)) => text.trim().parse::<i64>().ok(),
		Some(other) => return Err(Error::custom(format!("expected an integer, found `{other}`"))),
	};

	integer
		.and_then(|integer| i32::try_from(integer).ok())
		.map(Some)
		.ok_or_else(|| Error::custom("expected an integer in range"))
}
