use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::{
    binding::{ensure_success, OciRequest, OciResponse, RequestMetadata},
    enums::oci_enum,
    errors::{Result, ValidationError},
    http::{RawResponse, ETAG_HEADER},
    models::InstancePowerActionDetails,
    schema::{
        FieldSpec, FieldType, Record, IF_MATCH, OPC_REQUEST_ID, OPC_RETRY_TOKEN, REQUEST_METADATA,
    },
    validate::{EnumCheck, Validate},
};

oci_enum! {
    /// Power actions accepted by the instance action endpoint.
    InstanceActionAction {
        Stop = "STOP",
        Start = "START",
        SoftReset = "SOFTRESET",
        Reset = "RESET",
        SoftStop = "SOFTSTOP",
        SendDiagnosticInterrupt = "SENDDIAGNOSTICINTERRUPT",
        DiagnosticReboot = "DIAGNOSTICREBOOT",
        RebootMigrate = "REBOOTMIGRATE",
    }
}

/// Run a power action on an instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstanceActionRequest {
    #[serde(rename = "instanceId")]
    pub instance_id: String,
    #[serde(rename = "action")]
    pub action: InstanceActionAction,
    #[serde(rename = "if-match", default, skip_serializing_if = "Option::is_none")]
    pub if_match: Option<String>,
    #[serde(rename = "opc-retry-token", default, skip_serializing_if = "Option::is_none")]
    pub opc_retry_token: Option<String>,
    #[serde(rename = "opc-request-id", default, skip_serializing_if = "Option::is_none")]
    pub opc_request_id: Option<String>,
    #[serde(
        rename = "instancePowerActionDetails",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub instance_power_action_details: Option<InstancePowerActionDetails>,
    #[serde(skip)]
    pub request_metadata: RequestMetadata,
}

impl InstanceActionRequest {
    pub fn new(instance_id: impl Into<String>, action: impl Into<InstanceActionAction>) -> Self {
        Self {
            instance_id: instance_id.into(),
            action: action.into(),
            ..Default::default()
        }
    }

    pub fn with_if_match(mut self, if_match: impl Into<String>) -> Self {
        self.if_match = Some(if_match.into());
        self
    }

    pub fn with_opc_retry_token(mut self, opc_retry_token: impl Into<String>) -> Self {
        self.opc_retry_token = Some(opc_retry_token.into());
        self
    }

    pub fn with_opc_request_id(mut self, opc_request_id: impl Into<String>) -> Self {
        self.opc_request_id = Some(opc_request_id.into());
        self
    }

    pub fn with_instance_power_action_details(
        mut self,
        details: impl Into<InstancePowerActionDetails>,
    ) -> Self {
        self.instance_power_action_details = Some(details.into());
        self
    }

    pub fn with_request_metadata(mut self, request_metadata: RequestMetadata) -> Self {
        self.request_metadata = request_metadata;
        self
    }
}

impl Record for InstanceActionRequest {
    const NAME: &'static str = "InstanceActionRequest";

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::path("InstanceId", "instanceId"),
            FieldSpec::query("Action", "action", true, FieldType::Enum("InstanceActionAction")),
            IF_MATCH,
            OPC_RETRY_TOKEN,
            OPC_REQUEST_ID,
            FieldSpec::body(
                "InstancePowerActionDetails",
                "instancePowerActionDetails",
                false,
                FieldType::Record("InstancePowerActionDetails"),
            ),
            REQUEST_METADATA,
        ];
        FIELDS
    }
}

impl Validate for InstanceActionRequest {
    fn validate_enum_value(&self) -> Result<(), ValidationError> {
        EnumCheck::new(Self::NAME)
            .field("Action", &self.action)
            .finish()
    }
}

impl OciRequest for InstanceActionRequest {
    const METHOD: Method = Method::POST;
    const PATH: &'static str = "/instances/{instanceId}";

    fn request_metadata(&self) -> &RequestMetadata {
        &self.request_metadata
    }

    fn submitted_records(&self) -> Vec<&dyn Validate> {
        self.instance_power_action_details
            .iter()
            .map(|details| details as &dyn Validate)
            .collect()
    }
}

#[derive(Debug, Clone)]
pub struct InstanceActionResponse {
    pub raw_response: RawResponse,
    pub etag: Option<String>,
    pub opc_request_id: Option<String>,
}

impl OciResponse for InstanceActionResponse {
    fn from_raw(raw: RawResponse) -> Result<Self> {
        let raw = ensure_success(raw)?;
        Ok(Self {
            etag: raw.header(ETAG_HEADER),
            opc_request_id: raw.request_id(),
            raw_response: raw,
        })
    }

    fn raw_response(&self) -> &RawResponse {
        &self.raw_response
    }
}
