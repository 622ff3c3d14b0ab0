//! Enum table properties: every symbol round-trips through its token, and the
//! canonical token order is the declaration order.

use std::fmt::Debug;

use oci_core_models::{
    enum_registry,
    models::{
        ClientVpnLifecycleState, ClientVpnUserLifecycleState, DrgAttachmentLifecycleState,
        DrgType, InternalDnsRecordType, InternalGenericGatewayLifecycleState,
        MacsecEncryptionCipher, MacsecState, NextHopProtocol, NextHopTargetType, VcnRouteType,
    },
    operations::{
        InstanceActionAction, ListDrgAttachmentsAttachmentType, ListDrgAttachmentsSortBy,
        ListDrgAttachmentsSortOrder,
    },
    string_values_of, OciEnum,
};

fn assert_round_trips<E: OciEnum + Debug>() {
    let values = E::values();
    assert_eq!(values.len(), E::string_values().len(), "{}", E::NAME);
    for symbol in values {
        assert!(symbol.is_known(), "{}: {symbol:?}", E::NAME);
        assert_eq!(E::lookup(symbol.as_str()), Some(symbol.clone()));
        assert!(E::string_values().contains(&symbol.as_str()));
        assert!(E::contains(&symbol.as_str().to_ascii_lowercase()));
    }
    assert_eq!(string_values_of(E::NAME), Some(E::string_values()));
}

#[test]
fn every_registered_enum_round_trips() {
    assert_round_trips::<ClientVpnLifecycleState>();
    assert_round_trips::<ClientVpnUserLifecycleState>();
    assert_round_trips::<InternalDnsRecordType>();
    assert_round_trips::<DrgType>();
    assert_round_trips::<NextHopProtocol>();
    assert_round_trips::<NextHopTargetType>();
    assert_round_trips::<MacsecEncryptionCipher>();
    assert_round_trips::<MacsecState>();
    assert_round_trips::<DrgAttachmentLifecycleState>();
    assert_round_trips::<InternalGenericGatewayLifecycleState>();
    assert_round_trips::<VcnRouteType>();
    assert_round_trips::<ListDrgAttachmentsAttachmentType>();
    assert_round_trips::<ListDrgAttachmentsSortBy>();
    assert_round_trips::<ListDrgAttachmentsSortOrder>();
    assert_round_trips::<InstanceActionAction>();
    assert_eq!(enum_registry().len(), 15);
}

#[test]
fn canonical_orders_are_declaration_orders() {
    let expected: &[(&str, &[&str])] = &[
        (
            "ClientVpnLifecycleState",
            &["CREATING", "ACTIVE", "INACTIVE", "FAILED", "DELETED", "DELETING", "UPDATING"],
        ),
        ("InternalDnsRecordType", &["A"]),
        ("DrgType", &["DRG_CLASSICAL", "DRG_TRANSIT_HUB"]),
        ("NextHopProtocol", &["TCP", "UDP", "ALL"]),
        ("NextHopTargetType", &["PADP", "VNIC_WORKER"]),
        (
            "MacsecEncryptionCipher",
            &["AES128_GCM", "AES128_GCM_XPN", "AES256_GCM", "AES256_GCM_XPN"],
        ),
        ("MacsecState", &["ENABLED", "DISABLED"]),
        (
            "DrgAttachmentLifecycleState",
            &["ATTACHING", "ATTACHED", "DETACHING", "DETACHED"],
        ),
        (
            "InternalGenericGatewayLifecycleState",
            &["PROVISIONING", "AVAILABLE", "UPDATING", "TERMINATING", "TERMINATED"],
        ),
        ("VcnRouteType", &["VCN_CIDRS", "SUBNET_CIDRS"]),
        (
            "ListDrgAttachmentsAttachmentType",
            &["VCN", "VIRTUAL_CIRCUIT", "REMOTE_PEERING_CONNECTION", "IPSEC_TUNNEL", "ALL"],
        ),
        ("ListDrgAttachmentsSortBy", &["TIMECREATED", "DISPLAYNAME"]),
        ("ListDrgAttachmentsSortOrder", &["ASC", "DESC"]),
        (
            "InstanceActionAction",
            &[
                "STOP",
                "START",
                "SOFTRESET",
                "RESET",
                "SOFTSTOP",
                "SENDDIAGNOSTICINTERRUPT",
                "DIAGNOSTICREBOOT",
                "REBOOTMIGRATE",
            ],
        ),
    ];
    for (name, tokens) in expected {
        assert_eq!(string_values_of(name), Some(*tokens), "{name}");
    }
}

#[test]
fn mixed_case_tokens_decode_to_known_symbols() {
    let state: ClientVpnLifecycleState = serde_json::from_str("\"Active\"").unwrap();
    assert_eq!(state, ClientVpnLifecycleState::Active);
    let action: InstanceActionAction = serde_json::from_str("\"softreset\"").unwrap();
    assert_eq!(action, InstanceActionAction::SoftReset);
    assert_eq!(serde_json::to_string(&action).unwrap(), "\"SOFTRESET\"");
}
