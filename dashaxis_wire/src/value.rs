// Copyright 2025 the Dashaxis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Whole-payload decoding into a value tree that can hold non-finite numbers.

use std::collections::BTreeMap;

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use serde_json::{Number, Value};

use crate::WireError;
use crate::sentinel::{parse_sentinel, serialize_sentinel_f64};

/// A decoded JSON value.
///
/// This mirrors [`serde_json::Value`] with one extra case, [`WireValue::NonFinite`], for
/// sentinels that were replaced during decoding.
#[derive(Clone, Debug, PartialEq)]
pub enum WireValue {
    /// `null`.
    Null,
    /// `true` or `false`.
    Bool(bool),
    /// A JSON number, kept exact.
    Number(Number),
    /// `+∞`, `-∞` or NaN decoded from a sentinel string.
    NonFinite(f64),
    /// Any string that is not exactly a sentinel.
    String(String),
    /// An array.
    Array(Vec<WireValue>),
    /// An object.
    Object(BTreeMap<String, WireValue>),
}

impl WireValue {
    /// Returns the value as an `f64` if it is numeric.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => n.as_f64(),
            Self::NonFinite(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the value as a string slice if it is a (non-sentinel) string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the elements if this is an array.
    pub fn as_array(&self) -> Option<&[Self]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Looks up `key` if this is an object.
    pub fn get(&self, key: &str) -> Option<&Self> {
        match self {
            Self::Object(map) => map.get(key),
            _ => None,
        }
    }

    /// Whether this is `null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl Serialize for WireValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Number(n) => n.serialize(serializer),
            Self::NonFinite(v) => serialize_sentinel_f64(v, serializer),
            Self::String(s) => serializer.serialize_str(s),
            Self::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Object(map) => {
                let mut m = serializer.serialize_map(Some(map.len()))?;
                for (k, v) in map {
                    m.serialize_entry(k, v)?;
                }
                m.end()
            }
        }
    }
}

/// Parses a JSON payload and replaces every sentinel string.
pub fn decode_str(payload: &str) -> Result<WireValue, WireError> {
    let value: Value = serde_json::from_str(payload)?;
    Ok(decode_value(value))
}

/// Parses a JSON payload from bytes and replaces every sentinel string.
pub fn decode_slice(payload: &[u8]) -> Result<WireValue, WireError> {
    let value: Value = serde_json::from_slice(payload)?;
    Ok(decode_value(value))
}

/// Replaces every sentinel string in an already-parsed value.
///
/// Object keys are never replaced; only values are.
pub fn decode_value(value: Value) -> WireValue {
    let mut replaced = 0_usize;
    let out = convert(value, &mut replaced);
    if replaced > 0 {
        log::debug!("decoded {replaced} non-finite sentinel(s)");
    }
    out
}

/// Encodes a value tree back to JSON, spelling non-finite numbers as sentinels.
pub fn encode_string(value: &WireValue) -> Result<String, WireError> {
    Ok(serde_json::to_string(value)?)
}

fn convert(value: Value, replaced: &mut usize) -> WireValue {
    match value {
        Value::Null => WireValue::Null,
        Value::Bool(b) => WireValue::Bool(b),
        Value::Number(n) => WireValue::Number(n),
        Value::String(s) => match parse_sentinel(&s) {
            Some(v) => {
                *replaced += 1;
                WireValue::NonFinite(v)
            }
            None => WireValue::String(s),
        },
        Value::Array(items) => {
            WireValue::Array(items.into_iter().map(|v| convert(v, replaced)).collect())
        }
        Value::Object(map) => WireValue::Object(
            map.into_iter()
                .map(|(k, v)| (k, convert(v, replaced)))
                .collect(),
        ),
    }
}
