//! String enumerations of the Core Services API.
//!
//! Every enum is declared through [`oci_enum!`], which yields:
//! - one variant per known token plus `Other(String)` for anything else,
//! - plain-string serde (`from = "String"`, `into = "String"`), so unknown tokens
//!   decode without error and are reported later by the validator,
//! - an [`OciEnum`] impl with the canonical token list and a process-wide lookup table.
//!
//! `Default` is the empty token, which the validator treats as "not provided".

use crate::{
    models::{
        ClientVpnLifecycleState, ClientVpnUserLifecycleState, DrgAttachmentLifecycleState,
        DrgType, InternalDnsRecordType, InternalGenericGatewayLifecycleState,
        MacsecEncryptionCipher, MacsecState, NextHopProtocol, NextHopTargetType, VcnRouteType,
    },
    operations::{
        InstanceActionAction, ListDrgAttachmentsAttachmentType, ListDrgAttachmentsSortBy,
        ListDrgAttachmentsSortOrder,
    },
};

/// Contract shared by every string enumeration.
pub trait OciEnum: Sized + Clone + PartialEq + 'static {
    /// Schema name of the enum.
    const NAME: &'static str;

    /// Every known symbol exactly once.
    fn values() -> Vec<Self>;

    /// Known tokens in declaration order.
    fn string_values() -> &'static [&'static str];

    /// Resolve a token (case-insensitively) to its symbol.
    fn lookup(token: &str) -> Option<Self>;

    /// Token string of this symbol.
    fn as_str(&self) -> &str;

    /// Whether `token` names a known symbol.
    fn contains(token: &str) -> bool {
        Self::lookup(token).is_some()
    }

    /// False for `Other(_)`.
    fn is_known(&self) -> bool;

    /// True for the empty token.
    fn is_unset(&self) -> bool {
        self.as_str().is_empty()
    }
}

/// Serde predicate: optional enum fields that are absent or empty stay off the wire.
pub(crate) fn is_unset<E: OciEnum>(value: &Option<E>) -> bool {
    value.as_ref().map_or(true, OciEnum::is_unset)
}

macro_rules! oci_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $variant:ident = $token:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $(
                #[doc = concat!("`", $token, "`")]
                $variant,
            )+
            /// Token outside the known set (including the empty token).
            Other(String),
        }

        impl $name {
            /// Known tokens in declaration order.
            pub const TOKENS: &'static [&'static str] = &[$( $token ),+];
        }

        impl $crate::enums::OciEnum for $name {
            const NAME: &'static str = stringify!($name);

            fn values() -> Vec<Self> {
                vec![$( $name::$variant ),+]
            }

            fn string_values() -> &'static [&'static str] {
                Self::TOKENS
            }

            fn lookup(token: &str) -> Option<Self> {
                static MAPPING: ::std::sync::LazyLock<
                    ::std::collections::HashMap<String, $name>,
                > = ::std::sync::LazyLock::new(|| {
                    let mut mapping = ::std::collections::HashMap::new();
                    $( mapping.insert($token.to_ascii_lowercase(), $name::$variant); )+
                    mapping
                });
                MAPPING.get(&token.to_ascii_lowercase()).cloned()
            }

            fn as_str(&self) -> &str {
                match self {
                    $( $name::$variant => $token, )+
                    $name::Other(other) => other.as_str(),
                }
            }

            fn is_known(&self) -> bool {
                !matches!(self, $name::Other(_))
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::Other(String::new())
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                <$name as $crate::enums::OciEnum>::lookup(value)
                    .unwrap_or_else(|| $name::Other(value.to_string()))
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                <$name as $crate::enums::OciEnum>::lookup(&value).unwrap_or($name::Other(value))
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                match value {
                    $name::Other(other) => other,
                    known => $crate::enums::OciEnum::as_str(&known).to_string(),
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::enums::OciEnum::as_str(self))
            }
        }
    };
}

pub(crate) use oci_enum;

/// Name and canonical tokens of one registered enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumDescriptor {
    pub name: &'static str,
    pub tokens: &'static [&'static str],
}

impl EnumDescriptor {
    const fn of<E: OciEnum>(tokens: &'static [&'static str]) -> Self {
        Self {
            name: E::NAME,
            tokens,
        }
    }
}

static REGISTRY: [EnumDescriptor; 15] = [
    EnumDescriptor::of::<ClientVpnLifecycleState>(ClientVpnLifecycleState::TOKENS),
    EnumDescriptor::of::<ClientVpnUserLifecycleState>(ClientVpnUserLifecycleState::TOKENS),
    EnumDescriptor::of::<InternalDnsRecordType>(InternalDnsRecordType::TOKENS),
    EnumDescriptor::of::<DrgType>(DrgType::TOKENS),
    EnumDescriptor::of::<NextHopProtocol>(NextHopProtocol::TOKENS),
    EnumDescriptor::of::<NextHopTargetType>(NextHopTargetType::TOKENS),
    EnumDescriptor::of::<MacsecEncryptionCipher>(MacsecEncryptionCipher::TOKENS),
    EnumDescriptor::of::<MacsecState>(MacsecState::TOKENS),
    EnumDescriptor::of::<DrgAttachmentLifecycleState>(DrgAttachmentLifecycleState::TOKENS),
    EnumDescriptor::of::<InternalGenericGatewayLifecycleState>(
        InternalGenericGatewayLifecycleState::TOKENS,
    ),
    EnumDescriptor::of::<VcnRouteType>(VcnRouteType::TOKENS),
    EnumDescriptor::of::<ListDrgAttachmentsAttachmentType>(
        ListDrgAttachmentsAttachmentType::TOKENS,
    ),
    EnumDescriptor::of::<ListDrgAttachmentsSortBy>(ListDrgAttachmentsSortBy::TOKENS),
    EnumDescriptor::of::<ListDrgAttachmentsSortOrder>(ListDrgAttachmentsSortOrder::TOKENS),
    EnumDescriptor::of::<InstanceActionAction>(InstanceActionAction::TOKENS),
];

/// Every enum known to the crate, with its canonical token order.
pub fn enum_registry() -> &'static [EnumDescriptor] {
    &REGISTRY
}

/// Canonical tokens of the enum registered under `name`.
pub fn string_values_of(name: &str) -> Option<&'static [&'static str]> {
    REGISTRY.iter().find(|d| d.name == name).map(|d| d.tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive_and_canonicalizes() {
        assert_eq!(MacsecState::lookup("enabled"), Some(MacsecState::Enabled));
        let parsed: MacsecState = serde_json::from_str("\"Disabled\"").unwrap();
        assert_eq!(parsed, MacsecState::Disabled);
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "\"DISABLED\"");
    }

    #[test]
    fn unknown_tokens_decode_into_other() {
        let parsed: DrgType = serde_json::from_str("\"DRG_MYSTERY\"").unwrap();
        assert_eq!(parsed, DrgType::Other("DRG_MYSTERY".into()));
        assert!(!parsed.is_known());
        assert!(!parsed.is_unset());
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "\"DRG_MYSTERY\"");
    }

    #[test]
    fn default_is_the_empty_token() {
        let unset = NextHopProtocol::default();
        assert!(unset.is_unset());
        assert_eq!(unset.as_str(), "");
        assert!(is_unset(&Some(unset)));
        assert!(is_unset::<NextHopProtocol>(&None));
        assert!(!is_unset(&Some(NextHopProtocol::Tcp)));
    }

    #[test]
    fn contains_checks_membership() {
        assert!(MacsecEncryptionCipher::contains("AES256_GCM_XPN"));
        assert!(!MacsecEncryptionCipher::contains("AES512"));
        assert!(!MacsecEncryptionCipher::contains(""));
    }

    #[test]
    fn registry_names_are_unique() {
        let mut names: Vec<_> = enum_registry().iter().map(|d| d.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), enum_registry().len());
        assert_eq!(string_values_of("DrgType"), Some(DrgType::TOKENS));
        assert_eq!(string_values_of("Nope"), None);
    }
}
