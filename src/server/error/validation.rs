use std::collections::BTreeMap;

use thiserror::Error;

use crate::model::api::ValidationErrorDto;

/// Message reported alongside every set of field violations.
pub const VALIDATION_ERROR_MESSAGE: &str = "you have validation errors";

/// Field-level violations collected while validating a submitted form.
///
/// Maps field name to a human readable message. Fields are kept ordered so
/// responses and logs are deterministic.
#[derive(Error, Debug, Clone, Default, PartialEq, Eq)]
#[error("{}", VALIDATION_ERROR_MESSAGE)]
pub struct ValidationErrors {
    details: BTreeMap<String, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a violation for `field`, replacing any earlier message for it.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.details.insert(field.into(), message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.details.is_empty()
    }

    pub fn len(&self) -> usize {
        self.details.len()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.details.get(field).map(String::as_str)
    }

    /// Converts the collected violations into a result.
    ///
    /// # Returns
    /// - `Ok(())` - No violations were recorded
    /// - `Err(ValidationErrors)` - At least one field was rejected
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    pub fn into_dto(self) -> ValidationErrorDto {
        ValidationErrorDto {
            error: VALIDATION_ERROR_MESSAGE.to_string(),
            details: self.details,
        }
    }
}
