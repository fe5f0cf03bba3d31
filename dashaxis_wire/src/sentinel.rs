// Copyright 2025 the Dashaxis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The sentinel literals and the single-field serde hooks.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Wire spelling of `+∞`.
pub const SENTINEL_INF: &str = "hypofuzz-inf-a928fa52b3ea4a9a";
/// Wire spelling of `-∞`.
pub const SENTINEL_NINF: &str = "hypofuzz-ninf-a928fa52b3ea4a9a";
/// Wire spelling of NaN.
pub const SENTINEL_NAN: &str = "hypofuzz-nan-a928fa52b3ea4a9a";

/// Returns the value a sentinel stands for, or `None` if `s` is not exactly a sentinel.
pub fn parse_sentinel(s: &str) -> Option<f64> {
    match s {
        SENTINEL_INF => Some(f64::INFINITY),
        SENTINEL_NINF => Some(f64::NEG_INFINITY),
        SENTINEL_NAN => Some(f64::NAN),
        _ => None,
    }
}

/// Returns the sentinel spelling of a non-finite value, or `None` for finite values.
pub fn sentinel_for(v: f64) -> Option<&'static str> {
    if v.is_nan() {
        Some(SENTINEL_NAN)
    } else if v == f64::INFINITY {
        Some(SENTINEL_INF)
    } else if v == f64::NEG_INFINITY {
        Some(SENTINEL_NINF)
    } else {
        None
    }
}

/// An `f64` that travels as a JSON number when finite and as a sentinel string otherwise.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct SentinelF64(pub f64);

impl From<f64> for SentinelF64 {
    fn from(v: f64) -> Self {
        Self(v)
    }
}

impl From<SentinelF64> for f64 {
    fn from(v: SentinelF64) -> Self {
        v.0
    }
}

impl Serialize for SentinelF64 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize_sentinel_f64(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for SentinelF64 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(SentinelVisitor).map(Self)
    }
}

/// `serialize_with` hook for plain `f64` fields.
pub fn serialize_sentinel_f64<S>(v: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match sentinel_for(*v) {
        Some(s) => serializer.serialize_str(s),
        None => serializer.serialize_f64(*v),
    }
}

/// `deserialize_with` hook for plain `f64` fields.
///
/// Accepts any JSON number or one of the three sentinels; any other string is an error.
pub fn deserialize_sentinel_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(SentinelVisitor)
}

struct SentinelVisitor;

impl Visitor<'_> for SentinelVisitor {
    type Value = f64;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number or a non-finite sentinel string")
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<f64, E> {
        Ok(v)
    }

    #[allow(clippy::cast_precision_loss, reason = "counters above 2^53 lose precision as f64")]
    fn visit_i64<E: de::Error>(self, v: i64) -> Result<f64, E> {
        Ok(v as f64)
    }

    #[allow(clippy::cast_precision_loss, reason = "counters above 2^53 lose precision as f64")]
    fn visit_u64<E: de::Error>(self, v: u64) -> Result<f64, E> {
        Ok(v as f64)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<f64, E> {
        parse_sentinel(v).ok_or_else(|| E::invalid_value(de::Unexpected::Str(v), &self))
    }
}
