use serde::{Deserialize, Serialize};

use crate::{
    enums::{is_unset, oci_enum},
    errors::ValidationError,
    schema::{FieldSpec, FieldType, Record},
    validate::{EnumCheck, Validate},
};

oci_enum! {
    /// Cipher suites available to MACsec.
    MacsecEncryptionCipher {
        Aes128Gcm = "AES128_GCM",
        Aes128GcmXpn = "AES128_GCM_XPN",
        Aes256Gcm = "AES256_GCM",
        Aes256GcmXpn = "AES256_GCM_XPN",
    }
}

oci_enum! {
    MacsecState {
        Enabled = "ENABLED",
        Disabled = "DISABLED",
    }
}

/// MACsec settings of a cross-connect or cross-connect group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacsecProperties {
    pub state: MacsecState,
    #[serde(default, skip_serializing_if = "is_unset")]
    pub encryption_cipher: Option<MacsecEncryptionCipher>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_unprotected_traffic_allowed: Option<bool>,
}

impl Record for MacsecProperties {
    const NAME: &'static str = "MacsecProperties";

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::body("State", "state", true, FieldType::Enum("MacsecState")),
            FieldSpec::body(
                "EncryptionCipher",
                "encryptionCipher",
                false,
                FieldType::Enum("MacsecEncryptionCipher"),
            ),
            FieldSpec::body(
                "IsUnprotectedTrafficAllowed",
                "isUnprotectedTrafficAllowed",
                false,
                FieldType::Boolean,
            ),
        ];
        FIELDS
    }
}

impl Validate for MacsecProperties {
    fn validate_enum_value(&self) -> Result<(), ValidationError> {
        EnumCheck::new(Self::NAME)
            .field("State", &self.state)
            .optional("EncryptionCipher", self.encryption_cipher.as_ref())
            .finish()
    }
}
