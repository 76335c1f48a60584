//! Validation and autofill outcome types.
//!
//! Malformed form data is never an `Err` anywhere in this workspace -- the
//! validators always return a `ValidationResult` describing every failure.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::form::FormType;
use crate::value::FormData;

/// Stable machine-readable codes for validation and navigation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// A required field is empty, absent, or an unchecked required checkbox.
    MissingField,
    /// Every member of an at-least-one group is falsy.
    MissingGroupSelection,
    /// A mandatory form is skipped, unstarted, in progress, or errored.
    MissingRequiredForm,
    /// A mandatory form's data exists but fails field validation.
    IncompleteForm,
    /// A mandatory form has no stored data at all.
    FormDataMissing,
    /// A canonical field holds divergent values across forms.
    DataInconsistency,
    /// A jump past the first not-yet-reached form was refused.
    NavigationBlocked,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::MissingField => "MISSING_FIELD",
            ErrorCode::MissingGroupSelection => "MISSING_GROUP_SELECTION",
            ErrorCode::MissingRequiredForm => "MISSING_REQUIRED_FORM",
            ErrorCode::IncompleteForm => "INCOMPLETE_FORM",
            ErrorCode::FormDataMissing => "FORM_DATA_MISSING",
            ErrorCode::DataInconsistency => "DATA_INCONSISTENCY",
            ErrorCode::NavigationBlocked => "NAVIGATION_BLOCKED",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One validation failure, addressable to a form and optionally a field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    pub form_type: FormType,
    pub code: ErrorCode,
    pub message: String,
    pub field: Option<String>,
}

impl ValidationError {
    pub fn new(form_type: FormType, code: ErrorCode, message: impl Into<String>) -> Self {
        ValidationError {
            form_type,
            code,
            message: message.into(),
            field: None,
        }
    }

    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.code, self.form_type, self.message)
    }
}

/// Outcome of validating one form or a whole packet.
///
/// `warnings` carries non-blocking findings (cross-form divergence before
/// the filing boundary); `valid` reflects `errors` only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationError>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        ValidationResult {
            valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn from_errors(errors: Vec<ValidationError>) -> Self {
        ValidationResult {
            valid: errors.is_empty(),
            errors,
            warnings: Vec::new(),
        }
    }

    pub fn push_error(&mut self, error: ValidationError) {
        self.errors.push(error);
        self.valid = false;
    }

    pub fn push_warning(&mut self, warning: ValidationError) {
        self.warnings.push(warning);
    }
}

/// Where autofilled values came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AutofillSource {
    Vault,
    PreviousForm,
    Both,
}

impl AutofillSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            AutofillSource::Vault => "vault",
            AutofillSource::PreviousForm => "previous_form",
            AutofillSource::Both => "both",
        }
    }
}

/// Outcome of an autofill pass over one target form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutofillResult {
    pub fields_autofilled: usize,
    pub fields: FormData,
    pub source: AutofillSource,
}

impl AutofillResult {
    pub fn new(fields: FormData, source: AutofillSource) -> Self {
        AutofillResult {
            fields_autofilled: fields.len(),
            fields,
            source,
        }
    }
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_error_flips_valid() {
        let mut result = ValidationResult::ok();
        assert!(result.valid);
        result.push_error(ValidationError::new(
            FormType::RestrainingOrderRequest,
            ErrorCode::MissingField,
            "protected_name is required",
        ));
        assert!(!result.valid);
        assert_eq!(result.errors.len(), 1);
    }

    #[test]
    fn warnings_do_not_flip_valid() {
        let mut result = ValidationResult::ok();
        result.push_warning(ValidationError::new(
            FormType::NoticeOfHearing,
            ErrorCode::DataInconsistency,
            "case number differs",
        ));
        assert!(result.valid);
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn error_codes_serialize_screaming() {
        let json = serde_json::to_string(&ErrorCode::MissingRequiredForm).unwrap();
        assert_eq!(json, "\"MISSING_REQUIRED_FORM\"");
    }

    #[test]
    fn autofill_source_tags() {
        assert_eq!(AutofillSource::PreviousForm.as_str(), "previous_form");
        assert_eq!(AutofillSource::Vault.as_str(), "vault");
        assert_eq!(AutofillSource::Both.as_str(), "both");
    }
}
