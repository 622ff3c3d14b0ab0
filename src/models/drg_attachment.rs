use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::HasId;
use crate::{
    codec::Polymorphic,
    enums::{is_unset, oci_enum},
    errors::ValidationError,
    schema::{FieldSpec, FieldType, Record},
    validate::{EnumCheck, Validate},
};

oci_enum! {
    DrgAttachmentLifecycleState {
        Attaching = "ATTACHING",
        Attached = "ATTACHED",
        Detaching = "DETACHING",
        Detached = "DETACHED",
    }
}

oci_enum! {
    /// Which VCN routes a DRG attachment imports.
    VcnRouteType {
        VcnCidrs = "VCN_CIDRS",
        SubnetCidrs = "SUBNET_CIDRS",
    }
}

/// The network resource behind a DRG attachment, discriminated by `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DrgAttachmentNetworkDetails {
    #[serde(rename = "REMOTE_PEERING_CONNECTION")]
    RemotePeeringConnection(RemotePeeringConnectionDrgAttachmentNetworkDetails),
    #[serde(rename = "VIRTUAL_CIRCUIT")]
    VirtualCircuit(VirtualCircuitDrgAttachmentNetworkDetails),
    #[serde(rename = "IPSEC_TUNNEL")]
    IpsecTunnel(IpsecTunnelDrgAttachmentNetworkDetails),
    #[serde(rename = "VCN")]
    Vcn(VcnDrgAttachmentNetworkDetails),
}

impl Polymorphic for DrgAttachmentNetworkDetails {
    const DISCRIMINATOR: &'static str = "type";

    fn discriminator_values() -> &'static [&'static str] {
        &["REMOTE_PEERING_CONNECTION", "VIRTUAL_CIRCUIT", "IPSEC_TUNNEL", "VCN"]
    }

    fn discriminator_value(&self) -> &'static str {
        match self {
            Self::RemotePeeringConnection(_) => "REMOTE_PEERING_CONNECTION",
            Self::VirtualCircuit(_) => "VIRTUAL_CIRCUIT",
            Self::IpsecTunnel(_) => "IPSEC_TUNNEL",
            Self::Vcn(_) => "VCN",
        }
    }
}

impl HasId for DrgAttachmentNetworkDetails {
    fn id(&self) -> Option<&str> {
        match self {
            Self::RemotePeeringConnection(details) => details.id(),
            Self::VirtualCircuit(details) => details.id(),
            Self::IpsecTunnel(details) => details.id(),
            Self::Vcn(details) => details.id(),
        }
    }
}

impl Validate for DrgAttachmentNetworkDetails {
    fn validate_enum_value(&self) -> Result<(), ValidationError> {
        match self {
            Self::RemotePeeringConnection(details) => details.validate_enum_value(),
            Self::VirtualCircuit(details) => details.validate_enum_value(),
            Self::IpsecTunnel(details) => details.validate_enum_value(),
            Self::Vcn(details) => details.validate_enum_value(),
        }
    }
}

impl From<RemotePeeringConnectionDrgAttachmentNetworkDetails> for DrgAttachmentNetworkDetails {
    fn from(details: RemotePeeringConnectionDrgAttachmentNetworkDetails) -> Self {
        Self::RemotePeeringConnection(details)
    }
}

impl From<VirtualCircuitDrgAttachmentNetworkDetails> for DrgAttachmentNetworkDetails {
    fn from(details: VirtualCircuitDrgAttachmentNetworkDetails) -> Self {
        Self::VirtualCircuit(details)
    }
}

impl From<IpsecTunnelDrgAttachmentNetworkDetails> for DrgAttachmentNetworkDetails {
    fn from(details: IpsecTunnelDrgAttachmentNetworkDetails) -> Self {
        Self::IpsecTunnel(details)
    }
}

impl From<VcnDrgAttachmentNetworkDetails> for DrgAttachmentNetworkDetails {
    fn from(details: VcnDrgAttachmentNetworkDetails) -> Self {
        Self::Vcn(details)
    }
}

/// Remote peering connection attached to a DRG.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemotePeeringConnectionDrgAttachmentNetworkDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub peer_region_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub peer_attachment_route_target: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub import_route_target: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_route_target: Option<String>,
    /// BGP ASN of the region hosting the DRG.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regional_oci_asn: Option<String>,
}

impl HasId for RemotePeeringConnectionDrgAttachmentNetworkDetails {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl Record for RemotePeeringConnectionDrgAttachmentNetworkDetails {
    const NAME: &'static str = "RemotePeeringConnectionDrgAttachmentNetworkDetails";

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::body("Id", "id", false, FieldType::String),
            FieldSpec::body("PeerRegionName", "peerRegionName", false, FieldType::String),
            FieldSpec::body(
                "PeerAttachmentRouteTarget",
                "peerAttachmentRouteTarget",
                false,
                FieldType::String,
            ),
            FieldSpec::body("ImportRouteTarget", "importRouteTarget", false, FieldType::String),
            FieldSpec::body("ExportRouteTarget", "exportRouteTarget", false, FieldType::String),
            FieldSpec::body("RegionalOciAsn", "regionalOciAsn", false, FieldType::String),
        ];
        FIELDS
    }
}

impl Validate for RemotePeeringConnectionDrgAttachmentNetworkDetails {
    fn validate_enum_value(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// FastConnect virtual circuit attached to a DRG.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualCircuitDrgAttachmentNetworkDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mpls_label: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_target: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region_name: Option<String>,
    /// Whether the circuit terminates on a fast-failover aggregation block.
    #[serde(rename = "isFFAB", default, skip_serializing_if = "Option::is_none")]
    pub is_ffab: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_edge_pop: Option<bool>,
}

impl HasId for VirtualCircuitDrgAttachmentNetworkDetails {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl Record for VirtualCircuitDrgAttachmentNetworkDetails {
    const NAME: &'static str = "VirtualCircuitDrgAttachmentNetworkDetails";

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::body("Id", "id", false, FieldType::String),
            FieldSpec::body("MplsLabel", "mplsLabel", false, FieldType::Integer),
            FieldSpec::body("RouteTarget", "routeTarget", false, FieldType::String),
            FieldSpec::body("RegionName", "regionName", false, FieldType::String),
            FieldSpec::body("IsFFAB", "isFFAB", false, FieldType::Boolean),
            FieldSpec::body("IsEdgePop", "isEdgePop", false, FieldType::Boolean),
        ];
        FIELDS
    }
}

impl Validate for VirtualCircuitDrgAttachmentNetworkDetails {
    fn validate_enum_value(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// IPSec tunnel attached to a DRG.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IpsecTunnelDrgAttachmentNetworkDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipsec_connection_id: Option<String>,
}

impl HasId for IpsecTunnelDrgAttachmentNetworkDetails {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl Record for IpsecTunnelDrgAttachmentNetworkDetails {
    const NAME: &'static str = "IpsecTunnelDrgAttachmentNetworkDetails";

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::body("Id", "id", false, FieldType::String),
            FieldSpec::body("IpsecConnectionId", "ipsecConnectionId", false, FieldType::String),
        ];
        FIELDS
    }
}

impl Validate for IpsecTunnelDrgAttachmentNetworkDetails {
    fn validate_enum_value(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// VCN attached to a DRG.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VcnDrgAttachmentNetworkDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_table_id: Option<String>,
    #[serde(default, skip_serializing_if = "is_unset")]
    pub vcn_route_type: Option<VcnRouteType>,
}

impl HasId for VcnDrgAttachmentNetworkDetails {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl Record for VcnDrgAttachmentNetworkDetails {
    const NAME: &'static str = "VcnDrgAttachmentNetworkDetails";

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::body("Id", "id", false, FieldType::String),
            FieldSpec::body("RouteTableId", "routeTableId", false, FieldType::String),
            FieldSpec::body("VcnRouteType", "vcnRouteType", false, FieldType::Enum("VcnRouteType")),
        ];
        FIELDS
    }
}

impl Validate for VcnDrgAttachmentNetworkDetails {
    fn validate_enum_value(&self) -> Result<(), ValidationError> {
        EnumCheck::new(Self::NAME)
            .optional("VcnRouteType", self.vcn_route_type.as_ref())
            .finish()
    }
}

/// A link between a DRG and a network resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrgAttachment {
    pub id: String,
    pub drg_id: String,
    pub compartment_id: String,
    pub lifecycle_state: DrgAttachmentLifecycleState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_details: Option<DrgAttachmentNetworkDetails>,
    #[serde(
        default,
        with = "crate::sdk_time::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub time_created: Option<OffsetDateTime>,
}

impl Record for DrgAttachment {
    const NAME: &'static str = "DrgAttachment";

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::body("Id", "id", true, FieldType::String),
            FieldSpec::body("DrgId", "drgId", true, FieldType::String),
            FieldSpec::body("CompartmentId", "compartmentId", true, FieldType::String),
            FieldSpec::body(
                "LifecycleState",
                "lifecycleState",
                true,
                FieldType::Enum("DrgAttachmentLifecycleState"),
            ),
            FieldSpec::body("DisplayName", "displayName", false, FieldType::String),
            FieldSpec::body(
                "NetworkDetails",
                "networkDetails",
                false,
                FieldType::Record("DrgAttachmentNetworkDetails"),
            ),
            FieldSpec::body("TimeCreated", "timeCreated", false, FieldType::Timestamp),
        ];
        FIELDS
    }
}

impl Validate for DrgAttachment {
    fn validate_enum_value(&self) -> Result<(), ValidationError> {
        EnumCheck::new(Self::NAME)
            .field("LifecycleState", &self.lifecycle_state)
            .finish()
    }
}
