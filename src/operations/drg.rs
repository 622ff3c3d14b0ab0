use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::{
    binding::{ensure_success, OciRequest, OciResponse, RequestMetadata},
    errors::{Result, ValidationError},
    http::{RawResponse, WORK_REQUEST_ID_HEADER},
    models::{MigrateDrgDetails, UpdateDrgRouteRulesDetails},
    schema::{FieldSpec, FieldType, Record, OPC_REQUEST_ID, OPC_RETRY_TOKEN, REQUEST_METADATA},
    validate::Validate,
};

/// Migrate a DRG (or one of its attachments) to another DRG type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MigrateDrgRequest {
    #[serde(rename = "drgId")]
    pub drg_id: String,
    #[serde(rename = "migrateDrgDetails")]
    pub migrate_drg_details: MigrateDrgDetails,
    #[serde(rename = "opc-request-id", default, skip_serializing_if = "Option::is_none")]
    pub opc_request_id: Option<String>,
    #[serde(rename = "opc-retry-token", default, skip_serializing_if = "Option::is_none")]
    pub opc_retry_token: Option<String>,
    #[serde(skip)]
    pub request_metadata: RequestMetadata,
}

impl MigrateDrgRequest {
    pub fn new(drg_id: impl Into<String>, migrate_drg_details: MigrateDrgDetails) -> Self {
        Self {
            drg_id: drg_id.into(),
            migrate_drg_details,
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

impl Record for MigrateDrgRequest {
    const NAME: &'static str = "MigrateDrgRequest";

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::path("DrgId", "drgId"),
            FieldSpec::body(
                "MigrateDrgDetails",
                "migrateDrgDetails",
                true,
                FieldType::Record("MigrateDrgDetails"),
            ),
            OPC_REQUEST_ID,
            OPC_RETRY_TOKEN,
            REQUEST_METADATA,
        ];
        FIELDS
    }
}

impl Validate for MigrateDrgRequest {
    fn validate_enum_value(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

impl OciRequest for MigrateDrgRequest {
    const METHOD: Method = Method::POST;
    const PATH: &'static str = "/drgs/{drgId}/actions/migrate";

    fn request_metadata(&self) -> &RequestMetadata {
        &self.request_metadata
    }

    fn submitted_records(&self) -> Vec<&dyn Validate> {
        vec![&self.migrate_drg_details as &dyn Validate]
    }
}

#[derive(Debug, Clone)]
pub struct MigrateDrgResponse {
    pub raw_response: RawResponse,
    pub opc_request_id: Option<String>,
    /// Work request tracking the migration.
    pub opc_work_request_id: Option<String>,
}

impl OciResponse for MigrateDrgResponse {
    fn from_raw(raw: RawResponse) -> Result<Self> {
        let raw = ensure_success(raw)?;
        Ok(Self {
            opc_request_id: raw.request_id(),
            opc_work_request_id: raw.header(WORK_REQUEST_ID_HEADER),
            raw_response: raw,
        })
    }

    fn raw_response(&self) -> &RawResponse {
        &self.raw_response
    }
}

/// Add, remove or retarget rules of a DRG route table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateDrgRouteRulesRequest {
    #[serde(rename = "drgRouteTableId")]
    pub drg_route_table_id: String,
    #[serde(rename = "updateDrgRouteRulesDetails")]
    pub update_drg_route_rules_details: UpdateDrgRouteRulesDetails,
    #[serde(rename = "opc-request-id", default, skip_serializing_if = "Option::is_none")]
    pub opc_request_id: Option<String>,
    #[serde(skip)]
    pub request_metadata: RequestMetadata,
}

impl UpdateDrgRouteRulesRequest {
    pub fn new(
        drg_route_table_id: impl Into<String>,
        update_drg_route_rules_details: UpdateDrgRouteRulesDetails,
    ) -> Self {
        Self {
            drg_route_table_id: drg_route_table_id.into(),
            update_drg_route_rules_details,
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

impl Record for UpdateDrgRouteRulesRequest {
    const NAME: &'static str = "UpdateDrgRouteRulesRequest";

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::path("DrgRouteTableId", "drgRouteTableId"),
            FieldSpec::body(
                "UpdateDrgRouteRulesDetails",
                "updateDrgRouteRulesDetails",
                true,
                FieldType::Record("UpdateDrgRouteRulesDetails"),
            ),
            OPC_REQUEST_ID,
            REQUEST_METADATA,
        ];
        FIELDS
    }
}

impl Validate for UpdateDrgRouteRulesRequest {
    fn validate_enum_value(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

impl OciRequest for UpdateDrgRouteRulesRequest {
    const METHOD: Method = Method::POST;
    const PATH: &'static str = "/drgRouteTables/{drgRouteTableId}/actions/updateDrgRouteRules";

    fn request_metadata(&self) -> &RequestMetadata {
        &self.request_metadata
    }

    fn submitted_records(&self) -> Vec<&dyn Validate> {
        vec![&self.update_drg_route_rules_details as &dyn Validate]
    }
}

#[derive(Debug, Clone)]
pub struct UpdateDrgRouteRulesResponse {
    pub raw_response: RawResponse,
    pub opc_request_id: Option<String>,
}

impl OciResponse for UpdateDrgRouteRulesResponse {
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
    use crate::{errors::Error, models::DrgType};

    #[test]
    fn migrate_binds_path_headers_and_body() {
        let request = MigrateDrgRequest::new(
            "ocid1.drg.oc1..d",
            MigrateDrgDetails::new(DrgType::DrgTransitHub).with_drg_attachment_id("ocid1.att"),
        )
        .with_opc_retry_token("token-1");
        let bound = request.to_http_request().unwrap();
        assert_eq!(bound.method, Method::POST);
        assert_eq!(bound.path(), "/drgs/ocid1.drg.oc1..d/actions/migrate");
        assert_eq!(bound.header("opc-retry-token"), Some("token-1"));
        assert_eq!(bound.header("opc-request-id"), None);
        assert!(bound.query.is_empty());
        assert_eq!(
            bound.json_body().unwrap(),
            Some(json!({"destinationDrgType": "DRG_TRANSIT_HUB", "drgAttachmentId": "ocid1.att"}))
        );
    }

    #[test]
    fn migrate_validates_its_body() {
        let request =
            MigrateDrgRequest::new("ocid1.drg.oc1..d", MigrateDrgDetails::new("DRG_QUANTUM"));
        match request.to_http_request() {
            Err(Error::Validation(err)) => {
                assert_eq!(err.record, "MigrateDrgDetails");
                assert_eq!(
                    err.to_string(),
                    "unsupported enum value for DestinationDrgType: DRG_QUANTUM. \
                     Supported values are: DRG_CLASSICAL,DRG_TRANSIT_HUB."
                );
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn migrate_response_promotes_work_request() {
        let mut headers = HeaderMap::new();
        headers.insert("opc-request-id", HeaderValue::from_static("req-1"));
        headers.insert("opc-work-request-id", HeaderValue::from_static("wr-1"));
        let response =
            MigrateDrgResponse::from_raw(RawResponse::new(StatusCode::OK, headers, Vec::new()))
                .unwrap();
        assert_eq!(response.opc_request_id.as_deref(), Some("req-1"));
        assert_eq!(response.opc_work_request_id.as_deref(), Some("wr-1"));
        assert_eq!(response.raw_response().status, StatusCode::OK);
    }

    #[test]
    fn route_rules_need_a_table() {
        let request = UpdateDrgRouteRulesRequest::new("", UpdateDrgRouteRulesDetails::default());
        assert!(matches!(
            request.to_http_request(),
            Err(Error::MissingField {
                record: "UpdateDrgRouteRulesRequest",
                field: "drgRouteTableId"
            })
        ));
    }

    #[test]
    fn empty_route_rules_body_is_an_empty_object() {
        let request =
            UpdateDrgRouteRulesRequest::new("ocid1.drgroutetable", UpdateDrgRouteRulesDetails::default());
        let bound = request.to_http_request().unwrap();
        assert_eq!(
            bound.path(),
            "/drgRouteTables/ocid1.drgroutetable/actions/updateDrgRouteRules"
        );
        assert_eq!(bound.json_body().unwrap(), Some(json!({})));
    }
}
