use serde::{Deserialize, Serialize};

use crate::{
    errors::ValidationError,
    schema::{FieldSpec, FieldType, Record},
    validate::Validate,
};

/// Pairs a route destination with the route target it should resolve to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteDestinationRouteTarget {
    pub destination: String,
    pub route_target: String,
}

impl RouteDestinationRouteTarget {
    pub fn new(destination: impl Into<String>, route_target: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
            route_target: route_target.into(),
        }
    }
}

impl Record for RouteDestinationRouteTarget {
    const NAME: &'static str = "RouteDestinationRouteTarget";

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::body("Destination", "destination", true, FieldType::String),
            FieldSpec::body("RouteTarget", "routeTarget", true, FieldType::String),
        ];
        FIELDS
    }
}

impl Validate for RouteDestinationRouteTarget {
    fn validate_enum_value(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// Body of a route-rule edit on a DRG route table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDrgRouteRulesDetails {
    /// Extra rule OCIDs to carry over unchanged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_route_rule_ids: Option<Vec<String>>,
    /// CIDR destinations the edit applies to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destinations: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_destination_route_targets: Option<Vec<RouteDestinationRouteTarget>>,
}

impl Record for UpdateDrgRouteRulesDetails {
    const NAME: &'static str = "UpdateDrgRouteRulesDetails";

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::body(
                "AdditionalRouteRuleIds",
                "additionalRouteRuleIds",
                false,
                FieldType::StringList,
            ),
            FieldSpec::body("Destinations", "destinations", false, FieldType::StringList),
            FieldSpec::body(
                "RouteDestinationRouteTargets",
                "routeDestinationRouteTargets",
                false,
                FieldType::RecordList("RouteDestinationRouteTarget"),
            ),
        ];
        FIELDS
    }
}

impl Validate for UpdateDrgRouteRulesDetails {
    fn validate_enum_value(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn empty_lists_are_kept_when_set() {
        let details = UpdateDrgRouteRulesDetails {
            additional_route_rule_ids: Some(Vec::new()),
            destinations: Some(vec!["10.0.0.0/16".into()]),
            route_destination_route_targets: Some(vec![RouteDestinationRouteTarget::new(
                "10.0.0.0/16",
                "65000:100",
            )]),
        };
        assert_eq!(
            serde_json::to_value(&details).unwrap(),
            json!({
                "additionalRouteRuleIds": [],
                "destinations": ["10.0.0.0/16"],
                "routeDestinationRouteTargets": [
                    {"destination": "10.0.0.0/16", "routeTarget": "65000:100"}
                ]
            })
        );
    }
}
