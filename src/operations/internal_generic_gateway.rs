use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::{
    binding::{ensure_success, OciRequest, OciResponse, RequestMetadata},
    errors::{Result, ValidationError},
    http::{RawResponse, ETAG_HEADER},
    models::{InternalGenericGateway, UpdateInternalGenericGatewayDetails},
    schema::{
        FieldSpec, FieldType, Record, IF_MATCH, INTERNAL_AUTHZ_OPERATION_NAME,
        INTERNAL_AUTHZ_RESOURCE_KIND, OPC_REQUEST_ID, REQUEST_METADATA,
    },
    validate::Validate,
};

/// Replace the next hops of an internal generic gateway.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateInternalGenericGatewayRequest {
    #[serde(rename = "internalGenericGatewayId")]
    pub internal_generic_gateway_id: String,
    #[serde(rename = "updateInternalGenericGatewayDetails")]
    pub update_internal_generic_gateway_details: UpdateInternalGenericGatewayDetails,
    /// Optimistic concurrency: the update applies only if the etag still matches.
    #[serde(rename = "if-match", default, skip_serializing_if = "Option::is_none")]
    pub if_match: Option<String>,
    #[serde(rename = "opc-request-id", default, skip_serializing_if = "Option::is_none")]
    pub opc_request_id: Option<String>,
    #[serde(
        rename = "internal-authz-operation-name",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub internal_authz_operation_name: Option<String>,
    #[serde(
        rename = "internal-authz-resource-kind",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub internal_authz_resource_kind: Option<String>,
    #[serde(skip)]
    pub request_metadata: RequestMetadata,
}

impl UpdateInternalGenericGatewayRequest {
    pub fn new(
        internal_generic_gateway_id: impl Into<String>,
        update_internal_generic_gateway_details: UpdateInternalGenericGatewayDetails,
    ) -> Self {
        Self {
            internal_generic_gateway_id: internal_generic_gateway_id.into(),
            update_internal_generic_gateway_details,
            ..Default::default()
        }
    }

    pub fn with_if_match(mut self, if_match: impl Into<String>) -> Self {
        self.if_match = Some(if_match.into());
        self
    }

    pub fn with_opc_request_id(mut self, opc_request_id: impl Into<String>) -> Self {
        self.opc_request_id = Some(opc_request_id.into());
        self
    }

    pub fn with_internal_authz(
        mut self,
        operation_name: impl Into<String>,
        resource_kind: impl Into<String>,
    ) -> Self {
        self.internal_authz_operation_name = Some(operation_name.into());
        self.internal_authz_resource_kind = Some(resource_kind.into());
        self
    }

    pub fn with_request_metadata(mut self, request_metadata: RequestMetadata) -> Self {
        self.request_metadata = request_metadata;
        self
    }
}

impl Record for UpdateInternalGenericGatewayRequest {
    const NAME: &'static str = "UpdateInternalGenericGatewayRequest";

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::path("InternalGenericGatewayId", "internalGenericGatewayId"),
            FieldSpec::body(
                "UpdateInternalGenericGatewayDetails",
                "updateInternalGenericGatewayDetails",
                true,
                FieldType::Record("UpdateInternalGenericGatewayDetails"),
            ),
            IF_MATCH,
            OPC_REQUEST_ID,
            INTERNAL_AUTHZ_OPERATION_NAME,
            INTERNAL_AUTHZ_RESOURCE_KIND,
            REQUEST_METADATA,
        ];
        FIELDS
    }
}

impl Validate for UpdateInternalGenericGatewayRequest {
    fn validate_enum_value(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

impl OciRequest for UpdateInternalGenericGatewayRequest {
    const METHOD: Method = Method::PUT;
    const PATH: &'static str = "/internalGenericGateways/{internalGenericGatewayId}";

    fn request_metadata(&self) -> &RequestMetadata {
        &self.request_metadata
    }

    fn submitted_records(&self) -> Vec<&dyn Validate> {
        vec![&self.update_internal_generic_gateway_details as &dyn Validate]
    }
}

#[derive(Debug, Clone)]
pub struct UpdateInternalGenericGatewayResponse {
    pub raw_response: RawResponse,
    pub internal_generic_gateway: InternalGenericGateway,
    pub etag: Option<String>,
    pub opc_request_id: Option<String>,
}

impl OciResponse for UpdateInternalGenericGatewayResponse {
    fn from_raw(raw: RawResponse) -> Result<Self> {
        let raw = ensure_success(raw)?;
        Ok(Self {
            internal_generic_gateway: raw.json()?,
            etag: raw.header(ETAG_HEADER),
            opc_request_id: raw.request_id(),
            raw_response: raw,
        })
    }

    fn raw_response(&self) -> &RawResponse {
        &self.raw_response
    }
}

/// Delete an internal generic gateway.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteInternalGenericGatewayRequest {
    #[serde(rename = "internalGenericGatewayId")]
    pub internal_generic_gateway_id: String,
    #[serde(rename = "if-match", default, skip_serializing_if = "Option::is_none")]
    pub if_match: Option<String>,
    #[serde(rename = "opc-request-id", default, skip_serializing_if = "Option::is_none")]
    pub opc_request_id: Option<String>,
    #[serde(
        rename = "internal-authz-operation-name",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub internal_authz_operation_name: Option<String>,
    #[serde(
        rename = "internal-authz-resource-kind",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub internal_authz_resource_kind: Option<String>,
    #[serde(skip)]
    pub request_metadata: RequestMetadata,
}

impl DeleteInternalGenericGatewayRequest {
    pub fn new(internal_generic_gateway_id: impl Into<String>) -> Self {
        Self {
            internal_generic_gateway_id: internal_generic_gateway_id.into(),
            ..Default::default()
        }
    }

    pub fn with_if_match(mut self, if_match: impl Into<String>) -> Self {
        self.if_match = Some(if_match.into());
        self
    }

    pub fn with_opc_request_id(mut self, opc_request_id: impl Into<String>) -> Self {
        self.opc_request_id = Some(opc_request_id.into());
        self
    }

    pub fn with_internal_authz(
        mut self,
        operation_name: impl Into<String>,
        resource_kind: impl Into<String>,
    ) -> Self {
        self.internal_authz_operation_name = Some(operation_name.into());
        self.internal_authz_resource_kind = Some(resource_kind.into());
        self
    }

    pub fn with_request_metadata(mut self, request_metadata: RequestMetadata) -> Self {
        self.request_metadata = request_metadata;
        self
    }
}

impl Record for DeleteInternalGenericGatewayRequest {
    const NAME: &'static str = "DeleteInternalGenericGatewayRequest";

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::path("InternalGenericGatewayId", "internalGenericGatewayId"),
            IF_MATCH,
            OPC_REQUEST_ID,
            INTERNAL_AUTHZ_OPERATION_NAME,
            INTERNAL_AUTHZ_RESOURCE_KIND,
            REQUEST_METADATA,
        ];
        FIELDS
    }
}

impl Validate for DeleteInternalGenericGatewayRequest {
    fn validate_enum_value(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

impl OciRequest for DeleteInternalGenericGatewayRequest {
    const METHOD: Method = Method::DELETE;
    const PATH: &'static str = "/internalGenericGateways/{internalGenericGatewayId}";

    fn request_metadata(&self) -> &RequestMetadata {
        &self.request_metadata
    }
}

#[derive(Debug, Clone)]
pub struct DeleteInternalGenericGatewayResponse {
    pub raw_response: RawResponse,
    pub opc_request_id: Option<String>,
}

impl OciResponse for DeleteInternalGenericGatewayResponse {
    fn from_raw(raw: RawResponse) -> Result<Self> {
        let raw = ensure_success(raw)?;
        Ok(Self {
            opc_request_id: raw.request_id(),
            raw_response: raw,
        })
    }

    fn raw_response(&self) -> &RawResponse {
        &self.raw_response
    }
}

#[cfg(test)]
mod tests {
    use reqwest::{
        header::{HeaderMap, HeaderValue},
        StatusCode,
    };
    use serde_json::json;

    use super::*;
    use crate::{
        errors::Error,
        models::{InternalGenericGatewayLifecycleState, NextHop, NextHopTargetType},
    };

    #[test]
    fn update_carries_authz_headers_and_body() {
        let details = UpdateInternalGenericGatewayDetails {
            next_hops: Some(vec![NextHop::new(
                "10.0.0.7",
                "ocid1.vnic.oc1..v",
                NextHopTargetType::Padp,
            )]),
        };
        let request = UpdateInternalGenericGatewayRequest::new("ocid1.igg.oc1..g", details)
            .with_if_match("etag-1")
            .with_internal_authz("UpdateInternalGenericGateway", "internalGenericGateway");
        let bound = request.to_http_request().unwrap();
        assert_eq!(bound.method, Method::PUT);
        assert_eq!(bound.path(), "/internalGenericGateways/ocid1.igg.oc1..g");
        assert_eq!(bound.header("if-match"), Some("etag-1"));
        assert_eq!(
            bound.header("internal-authz-operation-name"),
            Some("UpdateInternalGenericGateway")
        );
        assert_eq!(
            bound.header("internal-authz-resource-kind"),
            Some("internalGenericGateway")
        );
        assert_eq!(
            bound.json_body().unwrap(),
            Some(json!({"nextHops": [{
                "substrateIp": "10.0.0.7",
                "targetId": "ocid1.vnic.oc1..v",
                "targetType": "PADP"
            }]}))
        );
    }

    #[test]
    fn delete_has_no_body() {
        let bound = DeleteInternalGenericGatewayRequest::new("ocid1.igg.oc1..g")
            .with_opc_request_id("req-2")
            .to_http_request()
            .unwrap();
        assert_eq!(bound.method, Method::DELETE);
        assert!(bound.body.is_none());
        assert!(bound.header("content-type").is_none());
        assert_eq!(bound.header("opc-request-id"), Some("req-2"));
    }

    #[test]
    fn update_response_decodes_gateway_and_etag() {
        let mut headers = HeaderMap::new();
        headers.insert("etag", HeaderValue::from_static("etag-2"));
        let body = json!({
            "id": "ocid1.igg.oc1..g",
            "compartmentId": "ocid1.compartment.oc1..c",
            "lifecycleState": "UPDATING"
        });
        let response = UpdateInternalGenericGatewayResponse::from_raw(RawResponse::new(
            StatusCode::OK,
            headers,
            body.to_string(),
        ))
        .unwrap();
        assert_eq!(response.etag.as_deref(), Some("etag-2"));
        assert_eq!(
            response.internal_generic_gateway.lifecycle_state,
            InternalGenericGatewayLifecycleState::Updating
        );
        assert_eq!(response.opc_request_id, None);
    }

    #[test]
    fn delete_response_surfaces_conflicts() {
        let raw = RawResponse::new(
            StatusCode::PRECONDITION_FAILED,
            HeaderMap::new(),
            r#"{"code":"NoEtagMatch","message":"etag mismatch"}"#,
        );
        let err = DeleteInternalGenericGatewayResponse::from_raw(raw).unwrap_err();
        match err {
            Error::Api(api) => {
                assert_eq!(api.status, 412);
                assert_eq!(api.code.as_deref(), Some("NoEtagMatch"));
            }
            other => panic!("expected api error, got {other:?}"),
        }
    }
}
