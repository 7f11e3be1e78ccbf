//! Required-field validation for submitted card forms.

use crate::server::{error::validation::ValidationErrors, model::card::CardForm};

/// Message recorded for a required field that is empty or only whitespace.
pub const BLANK_MESSAGE: &str = "cannot be blank";

/// Checks a submitted form before it reaches persistence.
pub trait Validator: Send + Sync {
    /// Validates every field independently, reporting all violations at once.
    ///
    /// # Returns
    /// - `Ok(())` - The form is acceptable
    /// - `Err(ValidationErrors)` - One entry per rejected field
    fn validate(&self, form: &CardForm) -> Result<(), ValidationErrors>;
}

/// Requires `word`, `transcription` and `translation` to be non-blank.
///
/// `user_id` is an opaque reference and is not checked.
#[derive(Debug, Clone, Copy, Default)]
pub struct CardValidator;

impl Validator for CardValidator {
    fn validate(&self, form: &CardForm) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        for (field, value) in [
            ("word", &form.word),
            ("transcription", &form.transcription),
            ("translation", &form.translation),
        ] {
            if value.trim().is_empty() {
                errors.add(field, BLANK_MESSAGE);
            }
        }

        errors.into_result()
    }
}
