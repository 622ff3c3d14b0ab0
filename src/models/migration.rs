use serde::{Deserialize, Serialize};

use crate::{
    enums::oci_enum,
    errors::ValidationError,
    schema::{FieldSpec, FieldType, Record},
    validate::{EnumCheck, Validate},
};

oci_enum! {
    /// Kind of DRG a migration targets.
    DrgType {
        DrgClassical = "DRG_CLASSICAL",
        DrgTransitHub = "DRG_TRANSIT_HUB",
    }
}

/// Outcome of a bulk DRG migration: counts plus the OCIDs on each side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkMigration {
    pub success_count: i64,
    pub failure_count: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub successful_migrations: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failed_migrations: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub successful_backfills: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failed_backfills: Option<Vec<String>>,
}

impl Record for BulkMigration {
    const NAME: &'static str = "BulkMigration";

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::body("SuccessCount", "successCount", true, FieldType::Integer),
            FieldSpec::body("FailureCount", "failureCount", true, FieldType::Integer),
            FieldSpec::body("SuccessfulMigrations", "successfulMigrations", false, FieldType::StringList),
            FieldSpec::body("FailedMigrations", "failedMigrations", false, FieldType::StringList),
            FieldSpec::body("SuccessfulBackfills", "successfulBackfills", false, FieldType::StringList),
            FieldSpec::body("FailedBackfills", "failedBackfills", false, FieldType::StringList),
        ];
        FIELDS
    }
}

impl Validate for BulkMigration {
    fn validate_enum_value(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// Body of a DRG migration request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MigrateDrgDetails {
    pub destination_drg_type: DrgType,
    /// Attachment to migrate; every attachment of the DRG when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drg_attachment_id: Option<String>,
}

impl MigrateDrgDetails {
    pub fn new(destination_drg_type: impl Into<DrgType>) -> Self {
        Self {
            destination_drg_type: destination_drg_type.into(),
            drg_attachment_id: None,
        }
    }

    pub fn with_drg_attachment_id(mut self, drg_attachment_id: impl Into<String>) -> Self {
        self.drg_attachment_id = Some(drg_attachment_id.into());
        self
    }
}

impl Record for MigrateDrgDetails {
    const NAME: &'static str = "MigrateDrgDetails";

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::body("DestinationDrgType", "destinationDrgType", true, FieldType::Enum("DrgType")),
            FieldSpec::body("DrgAttachmentId", "drgAttachmentId", false, FieldType::String),
        ];
        FIELDS
    }
}

impl Validate for MigrateDrgDetails {
    fn validate_enum_value(&self) -> Result<(), ValidationError> {
        EnumCheck::new(Self::NAME)
            .field("DestinationDrgType", &self.destination_drg_type)
            .finish()
    }
}
