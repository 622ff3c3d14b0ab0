use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::{
    binding::{ensure_success, OciRequest, OciResponse, RequestMetadata},
    enums::{is_unset, oci_enum},
    errors::{Result, ValidationError},
    http::{RawResponse, ETAG_HEADER, NEXT_PAGE_HEADER},
    models::{DrgAttachment, DrgAttachmentLifecycleState},
    schema::{FieldSpec, FieldType, Record, OPC_REQUEST_ID, REQUEST_METADATA},
    validate::{EnumCheck, Validate},
};

oci_enum! {
    /// Attachment kinds a DRG attachment listing can be narrowed to.
    ListDrgAttachmentsAttachmentType {
        Vcn = "VCN",
        VirtualCircuit = "VIRTUAL_CIRCUIT",
        RemotePeeringConnection = "REMOTE_PEERING_CONNECTION",
        IpsecTunnel = "IPSEC_TUNNEL",
        All = "ALL",
    }
}

oci_enum! {
    ListDrgAttachmentsSortBy {
        TimeCreated = "TIMECREATED",
        DisplayName = "DISPLAYNAME",
    }
}

oci_enum! {
    ListDrgAttachmentsSortOrder {
        Asc = "ASC",
        Desc = "DESC",
    }
}

/// Fetch one DRG attachment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetDrgAttachmentRequest {
    #[serde(rename = "drgAttachmentId")]
    pub drg_attachment_id: String,
    #[serde(rename = "opc-request-id", default, skip_serializing_if = "Option::is_none")]
    pub opc_request_id: Option<String>,
    #[serde(skip)]
    pub request_metadata: RequestMetadata,
}

impl GetDrgAttachmentRequest {
    pub fn new(drg_attachment_id: impl Into<String>) -> Self {
        Self {
            drg_attachment_id: drg_attachment_id.into(),
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

impl Record for GetDrgAttachmentRequest {
    const NAME: &'static str = "GetDrgAttachmentRequest";

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::path("DrgAttachmentId", "drgAttachmentId"),
            OPC_REQUEST_ID,
            REQUEST_METADATA,
        ];
        FIELDS
    }
}

impl Validate for GetDrgAttachmentRequest {
    fn validate_enum_value(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

impl OciRequest for GetDrgAttachmentRequest {
    const METHOD: Method = Method::GET;
    const PATH: &'static str = "/drgAttachments/{drgAttachmentId}";

    fn request_metadata(&self) -> &RequestMetadata {
        &self.request_metadata
    }
}

#[derive(Debug, Clone)]
pub struct GetDrgAttachmentResponse {
    pub raw_response: RawResponse,
    pub drg_attachment: DrgAttachment,
    pub etag: Option<String>,
    pub opc_request_id: Option<String>,
}

impl OciResponse for GetDrgAttachmentResponse {
    fn from_raw(raw: RawResponse) -> Result<Self> {
        let raw = ensure_success(raw)?;
        Ok(Self {
            drg_attachment: raw.json()?,
            etag: raw.header(ETAG_HEADER),
            opc_request_id: raw.request_id(),
            raw_response: raw,
        })
    }

    fn raw_response(&self) -> &RawResponse {
        &self.raw_response
    }
}

/// List the DRG attachments of a compartment, optionally filtered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListDrgAttachmentsRequest {
    pub compartment_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vcn_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drg_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    /// Pagination token from a previous `opc-next-page` header.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_id: Option<String>,
    #[serde(default, skip_serializing_if = "is_unset")]
    pub attachment_type: Option<ListDrgAttachmentsAttachmentType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drg_route_table_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "is_unset")]
    pub sort_by: Option<ListDrgAttachmentsSortBy>,
    #[serde(default, skip_serializing_if = "is_unset")]
    pub sort_order: Option<ListDrgAttachmentsSortOrder>,
    #[serde(default, skip_serializing_if = "is_unset")]
    pub lifecycle_state: Option<DrgAttachmentLifecycleState>,
    #[serde(rename = "opc-request-id", default, skip_serializing_if = "Option::is_none")]
    pub opc_request_id: Option<String>,
    #[serde(skip)]
    pub request_metadata: RequestMetadata,
}

impl ListDrgAttachmentsRequest {
    pub fn new(compartment_id: impl Into<String>) -> Self {
        Self {
            compartment_id: compartment_id.into(),
            ..Default::default()
        }
    }

    pub fn with_vcn_id(mut self, vcn_id: impl Into<String>) -> Self {
        self.vcn_id = Some(vcn_id.into());
        self
    }

    pub fn with_drg_id(mut self, drg_id: impl Into<String>) -> Self {
        self.drg_id = Some(drg_id.into());
        self
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_page(mut self, page: impl Into<String>) -> Self {
        self.page = Some(page.into());
        self
    }

    pub fn with_network_id(mut self, network_id: impl Into<String>) -> Self {
        self.network_id = Some(network_id.into());
        self
    }

    pub fn with_attachment_type(
        mut self,
        attachment_type: impl Into<ListDrgAttachmentsAttachmentType>,
    ) -> Self {
        self.attachment_type = Some(attachment_type.into());
        self
    }

    pub fn with_drg_route_table_id(mut self, drg_route_table_id: impl Into<String>) -> Self {
        self.drg_route_table_id = Some(drg_route_table_id.into());
        self
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    pub fn with_sort_by(mut self, sort_by: impl Into<ListDrgAttachmentsSortBy>) -> Self {
        self.sort_by = Some(sort_by.into());
        self
    }

    pub fn with_sort_order(mut self, sort_order: impl Into<ListDrgAttachmentsSortOrder>) -> Self {
        self.sort_order = Some(sort_order.into());
        self
    }

    pub fn with_lifecycle_state(
        mut self,
        lifecycle_state: impl Into<DrgAttachmentLifecycleState>,
    ) -> Self {
        self.lifecycle_state = Some(lifecycle_state.into());
        self
    }

    pub fn with_opc_request_id(mut self, opc_request_id: impl Into<String>) -> Self {
        self.opc_request_id = Some(opc_request_id.into());
        self
    }

    pub fn with_request_metadata(mut self, request_metadata: RequestMetadata) -> Self {
        self.request_metadata = request_metadata;
        self
    }

    /// The same listing, continued from `page`.
    pub fn next_page(&self, page: impl Into<String>) -> Self {
        self.clone().with_page(page)
    }
}

impl Record for ListDrgAttachmentsRequest {
    const NAME: &'static str = "ListDrgAttachmentsRequest";

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::query("CompartmentId", "compartmentId", true, FieldType::String),
            FieldSpec::query("VcnId", "vcnId", false, FieldType::String),
            FieldSpec::query("DrgId", "drgId", false, FieldType::String),
            FieldSpec::query("Limit", "limit", false, FieldType::Integer),
            FieldSpec::query("Page", "page", false, FieldType::String),
            FieldSpec::query("NetworkId", "networkId", false, FieldType::String),
            FieldSpec::query(
                "AttachmentType",
                "attachmentType",
                false,
                FieldType::Enum("ListDrgAttachmentsAttachmentType"),
            ),
            FieldSpec::query("DrgRouteTableId", "drgRouteTableId", false, FieldType::String),
            FieldSpec::query("DisplayName", "displayName", false, FieldType::String),
            FieldSpec::query("SortBy", "sortBy", false, FieldType::Enum("ListDrgAttachmentsSortBy")),
            FieldSpec::query(
                "SortOrder",
                "sortOrder",
                false,
                FieldType::Enum("ListDrgAttachmentsSortOrder"),
            ),
            FieldSpec::query(
                "LifecycleState",
                "lifecycleState",
                false,
                FieldType::Enum("DrgAttachmentLifecycleState"),
            ),
            OPC_REQUEST_ID,
            REQUEST_METADATA,
        ];
        FIELDS
    }
}

impl Validate for ListDrgAttachmentsRequest {
    fn validate_enum_value(&self) -> Result<(), ValidationError> {
        EnumCheck::new(Self::NAME)
            .optional("AttachmentType", self.attachment_type.as_ref())
            .optional("SortBy", self.sort_by.as_ref())
            .optional("SortOrder", self.sort_order.as_ref())
            .optional("LifecycleState", self.lifecycle_state.as_ref())
            .finish()
    }
}

impl OciRequest for ListDrgAttachmentsRequest {
    const METHOD: Method = Method::GET;
    const PATH: &'static str = "/drgAttachments";

    fn request_metadata(&self) -> &RequestMetadata {
        &self.request_metadata
    }
}

#[derive(Debug, Clone)]
pub struct ListDrgAttachmentsResponse {
    pub raw_response: RawResponse,
    pub items: Vec<DrgAttachment>,
    /// Present when more results are available.
    pub opc_next_page: Option<String>,
    pub opc_request_id: Option<String>,
}

impl OciResponse for ListDrgAttachmentsResponse {
    fn from_raw(raw: RawResponse) -> Result<Self> {
        let raw = ensure_success(raw)?;
        Ok(Self {
            items: raw.json()?,
            opc_next_page: raw.header(NEXT_PAGE_HEADER),
            opc_request_id: raw.request_id(),
            raw_response: raw,
        })
    }

    fn raw_response(&self) -> &RawResponse {
        &self.raw_response
    }
}
