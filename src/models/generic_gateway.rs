use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{
    enums::{is_unset, oci_enum},
    errors::ValidationError,
    schema::{FieldSpec, FieldType, Record},
    validate::{EnumCheck, Validate},
};

oci_enum! {
    /// Transport protocol a next hop forwards.
    NextHopProtocol {
        Tcp = "TCP",
        Udp = "UDP",
        All = "ALL",
    }
}

oci_enum! {
    /// Kind of target a next hop points at.
    NextHopTargetType {
        Padp = "PADP",
        VnicWorker = "VNIC_WORKER",
    }
}

oci_enum! {
    InternalGenericGatewayLifecycleState {
        Provisioning = "PROVISIONING",
        Available = "AVAILABLE",
        Updating = "UPDATING",
        Terminating = "TERMINATING",
        Terminated = "TERMINATED",
    }
}

/// Forwarding target behind an internal generic gateway.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextHop {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<i64>,
    #[serde(default, skip_serializing_if = "is_unset")]
    pub protocol: Option<NextHopProtocol>,
    pub substrate_ip: String,
    pub target_id: String,
    pub target_type: NextHopTargetType,
}

impl NextHop {
    pub fn new(
        substrate_ip: impl Into<String>,
        target_id: impl Into<String>,
        target_type: impl Into<NextHopTargetType>,
    ) -> Self {
        Self {
            port: None,
            protocol: None,
            substrate_ip: substrate_ip.into(),
            target_id: target_id.into(),
            target_type: target_type.into(),
        }
    }

    pub fn with_port(mut self, port: i64) -> Self {
        self.port = Some(port);
        self
    }

    pub fn with_protocol(mut self, protocol: impl Into<NextHopProtocol>) -> Self {
        self.protocol = Some(protocol.into());
        self
    }
}

impl Record for NextHop {
    const NAME: &'static str = "NextHop";

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::body("Port", "port", false, FieldType::Integer),
            FieldSpec::body("Protocol", "protocol", false, FieldType::Enum("NextHopProtocol")),
            FieldSpec::body("SubstrateIp", "substrateIp", true, FieldType::String),
            FieldSpec::body("TargetId", "targetId", true, FieldType::String),
            FieldSpec::body("TargetType", "targetType", true, FieldType::Enum("NextHopTargetType")),
        ];
        FIELDS
    }
}

impl Validate for NextHop {
    fn validate_enum_value(&self) -> Result<(), ValidationError> {
        EnumCheck::new(Self::NAME)
            .optional("Protocol", self.protocol.as_ref())
            .field("TargetType", &self.target_type)
            .finish()
    }
}

/// An internal generic gateway and the next hops it forwards to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalGenericGateway {
    pub id: String,
    pub compartment_id: String,
    pub lifecycle_state: InternalGenericGatewayLifecycleState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_hops: Option<Vec<NextHop>>,
    #[serde(
        default,
        with = "crate::sdk_time::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub time_created: Option<OffsetDateTime>,
}

impl Record for InternalGenericGateway {
    const NAME: &'static str = "InternalGenericGateway";

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::body("Id", "id", true, FieldType::String),
            FieldSpec::body("CompartmentId", "compartmentId", true, FieldType::String),
            FieldSpec::body(
                "LifecycleState",
                "lifecycleState",
                true,
                FieldType::Enum("InternalGenericGatewayLifecycleState"),
            ),
            FieldSpec::body("NextHops", "nextHops", false, FieldType::RecordList("NextHop")),
            FieldSpec::body("TimeCreated", "timeCreated", false, FieldType::Timestamp),
        ];
        FIELDS
    }
}

impl Validate for InternalGenericGateway {
    fn validate_enum_value(&self) -> Result<(), ValidationError> {
        EnumCheck::new(Self::NAME)
            .field("LifecycleState", &self.lifecycle_state)
            .finish()
    }
}

/// Body of a request replacing the next hops of an internal generic gateway.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInternalGenericGatewayDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_hops: Option<Vec<NextHop>>,
}

impl Record for UpdateInternalGenericGatewayDetails {
    const NAME: &'static str = "UpdateInternalGenericGatewayDetails";

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[FieldSpec::body(
            "NextHops",
            "nextHops",
            false,
            FieldType::RecordList("NextHop"),
        )];
        FIELDS
    }
}

impl Validate for UpdateInternalGenericGatewayDetails {
    fn validate_enum_value(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}
