//! Serde adapter for optional choice fields whose unset state travels as `""`.
//!
//! Use with `#[serde(with = "crate::models::blank")]` on an `Option<T>` where
//! `T` renders through `Display` and reads back through `FromStr`.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serializer};
use std::fmt::Display;
use std::str::FromStr;

// Rating codes may arrive as bare numbers from hand-written JSON.
#[derive(Deserialize)]
#[serde(untagged)]
enum Raw {
    Text(String),
    Code(u64),
}

pub fn serialize<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Display,
    S: Serializer,
{
    match value {
        Some(value) => serializer.collect_str(value),
        None => serializer.serialize_str(""),
    }
}

pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: FromStr,
    T::Err: Display,
    D: Deserializer<'de>,
{
    let raw = match Option::<Raw>::deserialize(deserializer)? {
        None => return Ok(None),
        Some(Raw::Text(text)) => text,
        Some(Raw::Code(code)) => code.to_string(),
    };
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse().map(Some).map_err(D::Error::custom)
}
