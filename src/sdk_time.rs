//! Timestamp wire format.
//!
//! Output is always UTC with exactly three fractional digits and a `Z`
//! suffix (`2016-08-25T21:10:29.600Z`). Any RFC 3339 timestamp is accepted
//! on input.

use time::{
    format_description::{well_known::Rfc3339, FormatItem},
    macros::format_description,
    OffsetDateTime, UtcOffset,
};

const WIRE_FORMAT: &[FormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z");

/// Render a timestamp in the wire format.
pub fn format(value: &OffsetDateTime) -> Result<String, time::error::Format> {
    value.to_offset(UtcOffset::UTC).format(WIRE_FORMAT)
}

/// Parse an RFC 3339 timestamp.
pub fn parse(value: &str) -> Result<OffsetDateTime, time::error::Parse> {
    OffsetDateTime::parse(value, &Rfc3339)
}

/// `#[serde(with = "crate::sdk_time::option")]` for optional timestamp fields.
pub mod option {
    use serde::{de, ser, Deserialize, Deserializer, Serializer};
    use time::OffsetDateTime;

    pub fn serialize<S: Serializer>(
        value: &Option<OffsetDateTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(value) => {
                let text = super::format(value).map_err(ser::Error::custom)?;
                serializer.serialize_some(&text)
            }
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<OffsetDateTime>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(text) => super::parse(&text).map(Some).map_err(de::Error::custom),
            None => Ok(None),
        }
    }
}
