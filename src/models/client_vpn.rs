use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{
    enums::{is_unset, oci_enum},
    errors::ValidationError,
    schema::{FieldSpec, FieldType, Record},
    validate::{EnumCheck, Validate},
};

oci_enum! {
    /// Lifecycle state of a client VPN endpoint.
    ClientVpnLifecycleState {
        Creating = "CREATING",
        Active = "ACTIVE",
        Inactive = "INACTIVE",
        Failed = "FAILED",
        Deleted = "DELETED",
        Deleting = "DELETING",
        Updating = "UPDATING",
    }
}

oci_enum! {
    /// Lifecycle state of a client VPN user.
    ClientVpnUserLifecycleState {
        Creating = "CREATING",
        Active = "ACTIVE",
        Inactive = "INACTIVE",
        Failed = "FAILED",
        Deleted = "DELETED",
        Deleting = "DELETING",
        Updating = "UPDATING",
    }
}

/// Runtime status of a client VPN endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientVpnStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_connections: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_users: Option<Vec<ClientVpnActiveUser>>,
    #[serde(default, skip_serializing_if = "is_unset")]
    pub lifecycle_state: Option<ClientVpnLifecycleState>,
}

impl Record for ClientVpnStatus {
    const NAME: &'static str = "ClientVpnStatus";

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::body("CurrentConnections", "currentConnections", false, FieldType::Integer),
            FieldSpec::body(
                "ActiveUsers",
                "activeUsers",
                false,
                FieldType::RecordList("ClientVpnActiveUser"),
            ),
            FieldSpec::body(
                "LifecycleState",
                "lifecycleState",
                false,
                FieldType::Enum("ClientVpnLifecycleState"),
            ),
        ];
        FIELDS
    }
}

impl Validate for ClientVpnStatus {
    fn validate_enum_value(&self) -> Result<(), ValidationError> {
        EnumCheck::new(Self::NAME)
            .optional("LifecycleState", self.lifecycle_state.as_ref())
            .finish()
    }
}

/// A user currently connected to a client VPN endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientVpnActiveUser {
    pub user_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_ip: Option<String>,
    #[serde(
        default,
        with = "crate::sdk_time::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub time_connected: Option<OffsetDateTime>,
}

impl Record for ClientVpnActiveUser {
    const NAME: &'static str = "ClientVpnActiveUser";

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::body("UserName", "userName", true, FieldType::String),
            FieldSpec::body("ClientIp", "clientIp", false, FieldType::String),
            FieldSpec::body("TimeConnected", "timeConnected", false, FieldType::Timestamp),
        ];
        FIELDS
    }
}

impl Validate for ClientVpnActiveUser {
    fn validate_enum_value(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// A user provisioned on a client VPN endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientVpnUser {
    pub user_name: String,
    #[serde(default, skip_serializing_if = "is_unset")]
    pub lifecycle_state: Option<ClientVpnUserLifecycleState>,
    /// Whether the user may only authenticate with a certificate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_cert_auth_only: Option<bool>,
    #[serde(
        default,
        with = "crate::sdk_time::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub time_created: Option<OffsetDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_vpn_id: Option<String>,
}

impl Record for ClientVpnUser {
    const NAME: &'static str = "ClientVpnUser";

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::body("UserName", "userName", true, FieldType::String),
            FieldSpec::body(
                "LifecycleState",
                "lifecycleState",
                false,
                FieldType::Enum("ClientVpnUserLifecycleState"),
            ),
            FieldSpec::body("IsCertAuthOnly", "isCertAuthOnly", false, FieldType::Boolean),
            FieldSpec::body("TimeCreated", "timeCreated", false, FieldType::Timestamp),
            FieldSpec::body("ClientVpnId", "clientVpnId", false, FieldType::String),
        ];
        FIELDS
    }
}

impl Validate for ClientVpnUser {
    fn validate_enum_value(&self) -> Result<(), ValidationError> {
        EnumCheck::new(Self::NAME)
            .optional("LifecycleState", self.lifecycle_state.as_ref())
            .finish()
    }
}
