//! Field tables agree with the serde shape of their records.
//!
//! Each record is decoded from an object carrying every transmitted wire name
//! in its table, then re-encoded; the emitted keys must be exactly the table's.

use std::collections::BTreeSet;

use oci_core_models::{
    models::{
        BulkMigration, ClientVpnActiveUser, ClientVpnStatus, ClientVpnUser,
        CreateInternalDnsRecordDetails, DrgAttachment, InternalDnsRecord, InternalGenericGateway,
        IpsecTunnelDrgAttachmentNetworkDetails, MacsecProperties, MigrateDrgDetails, NextHop,
        RemotePeeringConnectionDrgAttachmentNetworkDetails, ResetActionDetails,
        RouteDestinationRouteTarget, SoftResetActionDetails, UpdateDrgRouteRulesDetails,
        UpdateInternalGenericGatewayDetails, VcnDrgAttachmentNetworkDetails,
        VirtualCircuitDrgAttachmentNetworkDetails,
    },
    operations::{
        CreateInternalDnsRecordRequest, DeleteInternalGenericGatewayRequest,
        GetClientVpnStatusRequest, GetDrgAttachmentRequest, InstanceActionRequest,
        ListDrgAttachmentsRequest, MigrateDrgRequest, UpdateDrgRouteRulesRequest,
        UpdateInternalGenericGatewayRequest,
    },
    string_values_of, FieldType, Position, Record,
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{json, Map, Value};

fn wire_names<R: Record>() -> BTreeSet<&'static str> {
    R::fields()
        .iter()
        .filter(|f| f.position != Position::Metadata)
        .map(|f| f.wire_name)
        .collect()
}

fn sample(field_type: FieldType, nested: &[(&str, Value)]) -> Value {
    match field_type {
        FieldType::Integer => json!(1),
        FieldType::Boolean => json!(true),
        FieldType::String => json!("x"),
        FieldType::Timestamp => json!("2016-08-25T21:10:29.600Z"),
        FieldType::Enum(name) => {
            let tokens = string_values_of(name).unwrap_or_else(|| panic!("unregistered {name}"));
            json!(tokens[0])
        }
        FieldType::StringList => json!(["x"]),
        FieldType::RecordList(_) => json!([]),
        FieldType::Record(name) => nested
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, value)| value.clone())
            .unwrap_or_else(|| panic!("no nested value for {name}")),
    }
}

/// An object holding every transmitted field of `R`.
fn populated<R: Record>(nested: &[(&str, Value)]) -> Value {
    let mut object = Map::new();
    for field in R::fields() {
        if field.position == Position::Metadata {
            continue;
        }
        object.insert(field.wire_name.to_string(), sample(field.field_type, nested));
    }
    Value::Object(object)
}

fn assert_table_matches_serde<R>(nested: &[(&str, Value)])
where
    R: Record + Serialize + DeserializeOwned,
{
    let record: R = serde_json::from_value(populated::<R>(nested))
        .unwrap_or_else(|err| panic!("{}: {err}", R::NAME));
    let encoded = serde_json::to_value(&record).unwrap();
    let keys: BTreeSet<&str> = encoded
        .as_object()
        .unwrap_or_else(|| panic!("{} did not encode to an object", R::NAME))
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys, wire_names::<R>(), "{}", R::NAME);
}

#[test]
fn data_record_tables_match_serde_names() {
    let network_details = [("DrgAttachmentNetworkDetails", json!({"type": "VCN"}))];

    assert_table_matches_serde::<BulkMigration>(&[]);
    assert_table_matches_serde::<MigrateDrgDetails>(&[]);
    assert_table_matches_serde::<ClientVpnStatus>(&[]);
    assert_table_matches_serde::<ClientVpnActiveUser>(&[]);
    assert_table_matches_serde::<ClientVpnUser>(&[]);
    assert_table_matches_serde::<InternalDnsRecord>(&[]);
    assert_table_matches_serde::<CreateInternalDnsRecordDetails>(&[]);
    assert_table_matches_serde::<NextHop>(&[]);
    assert_table_matches_serde::<InternalGenericGateway>(&[]);
    assert_table_matches_serde::<UpdateInternalGenericGatewayDetails>(&[]);
    assert_table_matches_serde::<RouteDestinationRouteTarget>(&[]);
    assert_table_matches_serde::<UpdateDrgRouteRulesDetails>(&[]);
    assert_table_matches_serde::<MacsecProperties>(&[]);
    assert_table_matches_serde::<DrgAttachment>(&network_details);
}

#[test]
fn family_variant_tables_match_serde_names() {
    assert_table_matches_serde::<RemotePeeringConnectionDrgAttachmentNetworkDetails>(&[]);
    assert_table_matches_serde::<VirtualCircuitDrgAttachmentNetworkDetails>(&[]);
    assert_table_matches_serde::<IpsecTunnelDrgAttachmentNetworkDetails>(&[]);
    assert_table_matches_serde::<VcnDrgAttachmentNetworkDetails>(&[]);
    assert_table_matches_serde::<SoftResetActionDetails>(&[]);
    assert_table_matches_serde::<ResetActionDetails>(&[]);
}

#[test]
fn request_tables_match_serde_names() {
    let nested = [
        ("MigrateDrgDetails", json!({"destinationDrgType": "DRG_TRANSIT_HUB"})),
        ("UpdateDrgRouteRulesDetails", json!({"destinations": ["10.0.0.0/16"]})),
        (
            "UpdateInternalGenericGatewayDetails",
            json!({"nextHops": []}),
        ),
        (
            "CreateInternalDnsRecordDetails",
            json!({
                "compartmentId": "c",
                "internalHostedZoneId": "z",
                "name": "host",
                "type": "A",
                "value": "10.0.0.2"
            }),
        ),
        (
            "InstancePowerActionDetails",
            json!({"actionType": "softreset", "allowDenseRebootMigration": true}),
        ),
    ];

    assert_table_matches_serde::<MigrateDrgRequest>(&nested);
    assert_table_matches_serde::<UpdateDrgRouteRulesRequest>(&nested);
    assert_table_matches_serde::<UpdateInternalGenericGatewayRequest>(&nested);
    assert_table_matches_serde::<DeleteInternalGenericGatewayRequest>(&nested);
    assert_table_matches_serde::<GetDrgAttachmentRequest>(&nested);
    assert_table_matches_serde::<ListDrgAttachmentsRequest>(&nested);
    assert_table_matches_serde::<CreateInternalDnsRecordRequest>(&nested);
    assert_table_matches_serde::<GetClientVpnStatusRequest>(&nested);
    assert_table_matches_serde::<InstanceActionRequest>(&nested);
}
