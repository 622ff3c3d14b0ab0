//! Data records of the Core Services API.

mod client_vpn;
mod dns;
mod drg_attachment;
mod generic_gateway;
mod instance_action;
mod macsec;
mod migration;
mod route_rules;

pub use client_vpn::{
    ClientVpnActiveUser, ClientVpnLifecycleState, ClientVpnStatus, ClientVpnUser,
    ClientVpnUserLifecycleState,
};
pub use dns::{CreateInternalDnsRecordDetails, InternalDnsRecord, InternalDnsRecordType};
pub use drg_attachment::{
    DrgAttachment, DrgAttachmentLifecycleState, DrgAttachmentNetworkDetails,
    IpsecTunnelDrgAttachmentNetworkDetails, RemotePeeringConnectionDrgAttachmentNetworkDetails,
    VcnDrgAttachmentNetworkDetails, VcnRouteType, VirtualCircuitDrgAttachmentNetworkDetails,
};
pub use generic_gateway::{
    InternalGenericGateway, InternalGenericGatewayLifecycleState, NextHop, NextHopProtocol,
    NextHopTargetType, UpdateInternalGenericGatewayDetails,
};
pub use instance_action::{InstancePowerActionDetails, ResetActionDetails, SoftResetActionDetails};
pub use macsec::{MacsecEncryptionCipher, MacsecProperties, MacsecState};
pub use migration::{BulkMigration, DrgType, MigrateDrgDetails};
pub use route_rules::{RouteDestinationRouteTarget, UpdateDrgRouteRulesDetails};

/// Records that may carry the OCID of the resource they describe.
pub trait HasId {
    fn id(&self) -> Option<&str>;
}
