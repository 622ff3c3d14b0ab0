//! Request and response records of each operation.

mod client_vpn;
mod drg;
mod drg_attachment;
mod instance;
mod internal_dns_record;
mod internal_generic_gateway;

pub use client_vpn::{GetClientVpnStatusRequest, GetClientVpnStatusResponse};
pub use drg::{
    MigrateDrgRequest, MigrateDrgResponse, UpdateDrgRouteRulesRequest,
    UpdateDrgRouteRulesResponse,
};
pub use drg_attachment::{
    GetDrgAttachmentRequest, GetDrgAttachmentResponse, ListDrgAttachmentsAttachmentType,
    ListDrgAttachmentsRequest, ListDrgAttachmentsResponse, ListDrgAttachmentsSortBy,
    ListDrgAttachmentsSortOrder,
};
pub use instance::{InstanceActionAction, InstanceActionRequest, InstanceActionResponse};
pub use internal_dns_record::{CreateInternalDnsRecordRequest, CreateInternalDnsRecordResponse};
pub use internal_generic_gateway::{
    DeleteInternalGenericGatewayRequest, DeleteInternalGenericGatewayResponse,
    UpdateInternalGenericGatewayRequest, UpdateInternalGenericGatewayResponse,
};
