use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::{
    binding::{ensure_success, OciRequest, OciResponse, RequestMetadata},
    errors::{Result, ValidationError},
    http::{RawResponse, ETAG_HEADER},
    models::{CreateInternalDnsRecordDetails, InternalDnsRecord},
    schema::{FieldSpec, FieldType, Record, OPC_REQUEST_ID, OPC_RETRY_TOKEN, REQUEST_METADATA},
    validate::Validate,
};

/// Create a record in an internal hosted zone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateInternalDnsRecordRequest {
    #[serde(rename = "createInternalDnsRecordDetails")]
    pub create_internal_dns_record_details: CreateInternalDnsRecordDetails,
    #[serde(rename = "opc-request-id", default, skip_serializing_if = "Option::is_none")]
    pub opc_request_id: Option<String>,
    /// Idempotency token; a retried create with the same token returns the original record.
    #[serde(rename = "opc-retry-token", default, skip_serializing_if = "Option::is_none")]
    pub opc_retry_token: Option<String>,
    #[serde(skip)]
    pub request_metadata: RequestMetadata,
}

impl CreateInternalDnsRecordRequest {
    pub fn new(create_internal_dns_record_details: CreateInternalDnsRecordDetails) -> Self {
        Self {
            create_internal_dns_record_details,
            ..Default::default()
        }
    }

    pub fn with_opc_request_id(mut self, opc_request_id: impl Into<String>) -> Self {
        self.opc_request_id = Some(opc_request_id.into());
        self
    }

    pub fn with_opc_retry_token(mut self, opc_retry_token: impl Into<String>) -> Self {
        self.opc_retry_token = Some(opc_retry_token.into());
        self
    }

    pub fn with_request_metadata(mut self, request_metadata: RequestMetadata) -> Self {
        self.request_metadata = request_metadata;
        self
    }
}

impl Record for CreateInternalDnsRecordRequest {
    const NAME: &'static str = "CreateInternalDnsRecordRequest";

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::body(
                "CreateInternalDnsRecordDetails",
                "createInternalDnsRecordDetails",
                true,
                FieldType::Record("CreateInternalDnsRecordDetails"),
            ),
            OPC_REQUEST_ID,
            OPC_RETRY_TOKEN,
            REQUEST_METADATA,
        ];
        FIELDS
    }
}

impl Validate for CreateInternalDnsRecordRequest {
    fn validate_enum_value(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

impl OciRequest for CreateInternalDnsRecordRequest {
    const METHOD: Method = Method::POST;
    const PATH: &'static str = "/internalDnsRecords";

    fn request_metadata(&self) -> &RequestMetadata {
        &self.request_metadata
    }

    fn submitted_records(&self) -> Vec<&dyn Validate> {
        vec![&self.create_internal_dns_record_details as &dyn Validate]
    }
}

#[derive(Debug, Clone)]
pub struct CreateInternalDnsRecordResponse {
    pub raw_response: RawResponse,
    pub internal_dns_record: InternalDnsRecord,
    pub etag: Option<String>,
    pub opc_request_id: Option<String>,
}

impl OciResponse for CreateInternalDnsRecordResponse {
    fn from_raw(raw: RawResponse) -> Result<Self> {
        let raw = ensure_success(raw)?;
        Ok(Self {
            internal_dns_record: raw.json()?,
            etag: raw.header(ETAG_HEADER),
            opc_request_id: raw.request_id(),
            raw_response: raw,
        })
    }

    fn raw_response(&self) -> &RawResponse {
        &self.raw_response
    }
}
