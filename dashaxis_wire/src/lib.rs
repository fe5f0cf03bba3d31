// Copyright 2025 the Dashaxis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dashboard payload decoding.
//!
//! JSON has no spelling for infinities or NaN, so the campaign backend sends them as reserved
//! sentinel strings. This crate turns those sentinels back into `f64`s:
//!
//! - [`decode_str`] walks a whole payload and replaces every exact sentinel match, leaving every
//!   other value untouched,
//! - [`SentinelF64`] and [`deserialize_sentinel_f64`] do the same for a single typed field.
//!
//! ```
//! use dashaxis_wire::{SENTINEL_INF, decode_str};
//!
//! let v = decode_str(&format!(r#"{{"best": "{SENTINEL_INF}", "calls": 12}}"#))?;
//! assert_eq!(v.get("best").and_then(|v| v.as_f64()), Some(f64::INFINITY));
//! assert_eq!(v.get("calls").and_then(|v| v.as_f64()), Some(12.0));
//! # Ok::<(), dashaxis_wire::WireError>(())
//! ```

mod sentinel;
mod value;

pub use sentinel::{
    SENTINEL_INF, SENTINEL_NAN, SENTINEL_NINF, SentinelF64, deserialize_sentinel_f64,
    parse_sentinel, sentinel_for, serialize_sentinel_f64,
};
pub use value::{WireValue, decode_slice, decode_str, decode_value, encode_string};

/// Errors from decoding or encoding a payload.
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// The payload is not valid JSON.
    #[error("malformed dashboard payload: {0}")]
    Json(#[from] serde_json::Error),
}
