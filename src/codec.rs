//! JSON codec for records and discriminated record families.
//!
//! Families are serde internally tagged enums: the discriminator key is
//! written first and exactly once, followed by the variant's own fields at the
//! same level. Unknown or missing discriminators fail to decode.

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::errors::Result;

/// A family of records sharing one discriminator on the wire.
pub trait Polymorphic {
    /// Wire name of the discriminator field.
    const DISCRIMINATOR: &'static str;

    /// Discriminator values of every variant, in declaration order.
    fn discriminator_values() -> &'static [&'static str];

    /// Discriminator value of this variant.
    fn discriminator_value(&self) -> &'static str;
}

/// Encode a record as a JSON value.
pub fn to_json<T: Serialize + ?Sized>(record: &T) -> Result<Value> {
    Ok(serde_json::to_value(record)?)
}

/// Encode a record as compact JSON text.
pub fn to_json_string<T: Serialize + ?Sized>(record: &T) -> Result<String> {
    Ok(serde_json::to_string(record)?)
}

/// Decode a record from a JSON value.
pub fn from_json<T: DeserializeOwned>(value: Value) -> Result<T> {
    Ok(serde_json::from_value(value)?)
}

/// Decode a record from JSON bytes.
pub fn from_slice<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    Ok(serde_json::from_slice(bytes)?)
}
