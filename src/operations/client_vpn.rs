use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::{
    binding::{ensure_success, OciRequest, OciResponse, RequestMetadata},
    errors::{Result, ValidationError},
    http::RawResponse,
    models::ClientVpnStatus,
    schema::{FieldSpec, Record, OPC_REQUEST_ID, REQUEST_METADATA},
    validate::Validate,
};

/// Fetch the connection status of a client VPN endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetClientVpnStatusRequest {
    #[serde(rename = "clientVpnId")]
    pub client_vpn_id: String,
    #[serde(rename = "opc-request-id", default, skip_serializing_if = "Option::is_none")]
    pub opc_request_id: Option<String>,
    #[serde(skip)]
    pub request_metadata: RequestMetadata,
}

impl GetClientVpnStatusRequest {
    pub fn new(client_vpn_id: impl Into<String>) -> Self {
        Self {
            client_vpn_id: client_vpn_id.into(),
            ..Default::default()
        }
    }

    pub fn with_opc_request_id(mut self, opc_request_id: impl Into<String>) -> Self {
        self.opc_request_id = Some(opc_request_id.into());
        self
    }

    pub fn with_request_metadata(mut self, request_metadata: RequestMetadata) -> Self {
        self.request_metadata = request_metadata;
        self
    }
}

impl Record for GetClientVpnStatusRequest {
    const NAME: &'static str = "GetClientVpnStatusRequest";

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::path("ClientVpnId", "clientVpnId"),
            OPC_REQUEST_ID,
            REQUEST_METADATA,
        ];
        FIELDS
    }
}

impl Validate for GetClientVpnStatusRequest {
    fn validate_enum_value(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

impl OciRequest for GetClientVpnStatusRequest {
    const METHOD: Method = Method::GET;
    const PATH: &'static str = "/clientVpns/{clientVpnId}/status";

    fn request_metadata(&self) -> &RequestMetadata {
        &self.request_metadata
    }
}

#[derive(Debug, Clone)]
pub struct GetClientVpnStatusResponse {
    pub raw_response: RawResponse,
    pub client_vpn_status: ClientVpnStatus,
    pub opc_request_id: Option<String>,
}

impl OciResponse for GetClientVpnStatusResponse {
    fn from_raw(raw: RawResponse) -> Result<Self> {
        let raw = ensure_success(raw)?;
        Ok(Self {
            client_vpn_status: raw.json()?,
            opc_request_id: raw.request_id(),
            raw_response: raw,
        })
    }

    fn raw_response(&self) -> &RawResponse {
        &self.raw_response
    }
}
