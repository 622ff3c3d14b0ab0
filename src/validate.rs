//! Pre-flight enum validation.
//!
//! Validation is shallow: a record checks its own enum-typed fields only.
//! Nested records are checked when they are themselves submitted.

use crate::{
    enums::OciEnum,
    errors::{EnumViolation, ValidationError},
};

/// Records that can refuse unknown enum tokens before being sent.
pub trait Validate {
    /// `Ok(())` when every enum field is empty or carries a known token.
    fn validate_enum_value(&self) -> Result<(), ValidationError>;
}

impl<T: Validate + ?Sized> Validate for &T {
    fn validate_enum_value(&self) -> Result<(), ValidationError> {
        (**self).validate_enum_value()
    }
}

/// Accumulates violations for one record in field order.
#[derive(Debug)]
pub(crate) struct EnumCheck {
    record: &'static str,
    violations: Vec<EnumViolation>,
}

impl EnumCheck {
    pub(crate) fn new(record: &'static str) -> Self {
        Self {
            record,
            violations: Vec::new(),
        }
    }

    pub(crate) fn field<E: OciEnum>(mut self, name: &'static str, value: &E) -> Self {
        if !value.is_unset() && !E::contains(value.as_str()) {
            self.violations.push(EnumViolation {
                field: name,
                actual: value.as_str().to_string(),
                supported: E::string_values(),
            });
        }
        self
    }

    pub(crate) fn optional<E: OciEnum>(self, name: &'static str, value: Option<&E>) -> Self {
        match value {
            Some(value) => self.field(name, value),
            None => self,
        }
    }

    pub(crate) fn finish(self) -> Result<(), ValidationError> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(self.record, self.violations))
        }
    }
}
