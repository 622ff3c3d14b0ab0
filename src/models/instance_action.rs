use serde::{Deserialize, Serialize};

use crate::{
    codec::Polymorphic,
    errors::ValidationError,
    schema::{FieldSpec, FieldType, Record},
    validate::Validate,
};

/// Extra parameters of a power action, discriminated by `actionType`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "actionType")]
pub enum InstancePowerActionDetails {
    #[serde(rename = "softreset")]
    SoftReset(SoftResetActionDetails),
    #[serde(rename = "reset")]
    Reset(ResetActionDetails),
}

impl Polymorphic for InstancePowerActionDetails {
    const DISCRIMINATOR: &'static str = "actionType";

    fn discriminator_values() -> &'static [&'static str] {
        &["softreset", "reset"]
    }

    fn discriminator_value(&self) -> &'static str {
        match self {
            Self::SoftReset(_) => "softreset",
            Self::Reset(_) => "reset",
        }
    }
}

impl Validate for InstancePowerActionDetails {
    fn validate_enum_value(&self) -> Result<(), ValidationError> {
        match self {
            Self::SoftReset(details) => details.validate_enum_value(),
            Self::Reset(details) => details.validate_enum_value(),
        }
    }
}

impl From<SoftResetActionDetails> for InstancePowerActionDetails {
    fn from(details: SoftResetActionDetails) -> Self {
        Self::SoftReset(details)
    }
}

impl From<ResetActionDetails> for InstancePowerActionDetails {
    fn from(details: ResetActionDetails) -> Self {
        Self::Reset(details)
    }
}

const POWER_ACTION_FIELDS: &[FieldSpec] = &[FieldSpec::body(
    "AllowDenseRebootMigration",
    "allowDenseRebootMigration",
    false,
    FieldType::Boolean,
)];

/// Parameters of a graceful reboot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoftResetActionDetails {
    /// Permit migrating the instance to a denser host during the reboot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_dense_reboot_migration: Option<bool>,
}

impl SoftResetActionDetails {
    pub fn allow_dense_reboot_migration(allow: bool) -> Self {
        Self {
            allow_dense_reboot_migration: Some(allow),
        }
    }
}

impl Record for SoftResetActionDetails {
    const NAME: &'static str = "SoftResetActionDetails";

    fn fields() -> &'static [FieldSpec] {
        POWER_ACTION_FIELDS
    }
}

impl Validate for SoftResetActionDetails {
    fn validate_enum_value(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// Parameters of an immediate power cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetActionDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_dense_reboot_migration: Option<bool>,
}

impl ResetActionDetails {
    pub fn allow_dense_reboot_migration(allow: bool) -> Self {
        Self {
            allow_dense_reboot_migration: Some(allow),
        }
    }
}

impl Record for ResetActionDetails {
    const NAME: &'static str = "ResetActionDetails";

    fn fields() -> &'static [FieldSpec] {
        POWER_ACTION_FIELDS
    }
}

impl Validate for ResetActionDetails {
    fn validate_enum_value(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn reset_without_fields_is_just_the_tag() {
        let details = InstancePowerActionDetails::from(ResetActionDetails::default());
        assert_eq!(serde_json::to_string(&details).unwrap(), r#"{"actionType":"reset"}"#);
    }

    #[test]
    fn decodes_by_action_type() {
        let details: InstancePowerActionDetails = serde_json::from_value(json!({
            "actionType": "softreset",
            "allowDenseRebootMigration": false
        }))
        .unwrap();
        assert_eq!(
            details,
            InstancePowerActionDetails::SoftReset(
                SoftResetActionDetails::allow_dense_reboot_migration(false)
            )
        );
        assert_eq!(details.discriminator_value(), "softreset");
    }

    #[test]
    fn unknown_action_type_fails_to_decode() {
        let result: Result<InstancePowerActionDetails, _> =
            serde_json::from_value(json!({"actionType": "hibernate"}));
        assert!(result.is_err());
        let missing: Result<InstancePowerActionDetails, _> =
            serde_json::from_value(json!({"allowDenseRebootMigration": true}));
        assert!(missing.is_err());
    }
}
