use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{
    enums::oci_enum,
    errors::ValidationError,
    schema::{FieldSpec, FieldType, Record},
    validate::{EnumCheck, Validate},
};

oci_enum! {
    /// Record type of an internal DNS record.
    InternalDnsRecordType {
        A = "A",
    }
}

/// A DNS record inside an internal hosted zone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalDnsRecord {
    pub id: String,
    pub compartment_id: String,
    pub internal_hosted_zone_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: InternalDnsRecordType,
    pub value: String,
    /// Time to live, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<i64>,
    #[serde(
        default,
        with = "crate::sdk_time::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub time_created: Option<OffsetDateTime>,
}

impl Record for InternalDnsRecord {
    const NAME: &'static str = "InternalDnsRecord";

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::body("Id", "id", true, FieldType::String),
            FieldSpec::body("CompartmentId", "compartmentId", true, FieldType::String),
            FieldSpec::body("InternalHostedZoneId", "internalHostedZoneId", true, FieldType::String),
            FieldSpec::body("Name", "name", true, FieldType::String),
            FieldSpec::body("Type", "type", true, FieldType::Enum("InternalDnsRecordType")),
            FieldSpec::body("Value", "value", true, FieldType::String),
            FieldSpec::body("Ttl", "ttl", false, FieldType::Integer),
            FieldSpec::body("TimeCreated", "timeCreated", false, FieldType::Timestamp),
        ];
        FIELDS
    }
}

impl Validate for InternalDnsRecord {
    fn validate_enum_value(&self) -> Result<(), ValidationError> {
        EnumCheck::new(Self::NAME)
            .field("Type", &self.record_type)
            .finish()
    }
}

/// Body of a request creating an internal DNS record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInternalDnsRecordDetails {
    pub compartment_id: String,
    pub internal_hosted_zone_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: InternalDnsRecordType,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<i64>,
}

impl Record for CreateInternalDnsRecordDetails {
    const NAME: &'static str = "CreateInternalDnsRecordDetails";

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::body("CompartmentId", "compartmentId", true, FieldType::String),
            FieldSpec::body("InternalHostedZoneId", "internalHostedZoneId", true, FieldType::String),
            FieldSpec::body("Name", "name", true, FieldType::String),
            FieldSpec::body("Type", "type", true, FieldType::Enum("InternalDnsRecordType")),
            FieldSpec::body("Value", "value", true, FieldType::String),
            FieldSpec::body("Ttl", "ttl", false, FieldType::Integer),
        ];
        FIELDS
    }
}

impl Validate for CreateInternalDnsRecordDetails {
    fn validate_enum_value(&self) -> Result<(), ValidationError> {
        EnumCheck::new(Self::NAME)
            .field("Type", &self.record_type)
            .finish()
    }
}
