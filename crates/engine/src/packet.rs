//! Packet-level validation: which forms the current configuration makes
//! mandatory, and the aggregated packet verdict.

use std::collections::BTreeMap;

use docket_core::{
    ErrorCode, FormData, FormStatus, FormType, PacketConfig, PacketType, ValidationError,
    ValidationResult,
};

use crate::consistency;
use crate::validator;

/// Where the packet verdict is being taken.
///
/// Cross-form divergence is a warning while drafting and a blocking error
/// at the filing boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationBoundary {
    Draft,
    Filing,
}

/// Whether the packet's configuration makes this form mandatory.
///
/// Exhaustive over the closed form set; forms outside the packet's order
/// are never mandatory.
pub fn is_form_required(form: FormType, packet: PacketType, config: &PacketConfig) -> bool {
    if packet.position_of(form).is_none() {
        return false;
    }
    match form {
        FormType::RestrainingOrderRequest
        | FormType::ConfidentialInformation
        | FormType::NoticeOfHearing => packet == PacketType::DvInitial,
        FormType::ResponseToRequest => packet == PacketType::DvResponse,
        FormType::ChildrenInformation => config.has_children,
        FormType::IncomeAndExpense => {
            config.requesting_child_support || config.requesting_spousal_support
        }
        FormType::AdditionalPage => config.need_more_space,
    }
}

/// The condition that makes a form mandatory, for MISSING_REQUIRED_FORM
/// messages.
pub fn requirement_reason(form: FormType) -> &'static str {
    match form {
        FormType::RestrainingOrderRequest
        | FormType::ConfidentialInformation
        | FormType::NoticeOfHearing => "required for every initiating packet",
        FormType::ResponseToRequest => "required for every response packet",
        FormType::ChildrenInformation => "required because the packet includes children",
        FormType::IncomeAndExpense => {
            "required because child or spousal support is requested"
        }
        FormType::AdditionalPage => "required because additional space was requested",
    }
}

/// Aggregate per-form and cross-form results into one packet verdict.
///
/// For every form in the packet's order:
/// - mandatory and status in {Skipped, NotStarted, InProgress, Error} →
///   MISSING_REQUIRED_FORM naming the form and its triggering condition
///   (InProgress is NOT done -- strict membership, no looser check);
/// - mandatory otherwise → re-run the form validator and surface
///   FORM_DATA_MISSING (no stored data) or INCOMPLETE_FORM field errors;
/// - non-mandatory Skipped → no error.
///
/// Consistency findings append as warnings, promoted to blocking
/// DATA_INCONSISTENCY errors only at the filing boundary.
pub fn validate_packet_data(
    packet: PacketType,
    config: &PacketConfig,
    statuses: &BTreeMap<FormType, FormStatus>,
    forms: &BTreeMap<FormType, FormData>,
    boundary: ValidationBoundary,
) -> ValidationResult {
    let mut result = ValidationResult::ok();

    for &form in packet.form_order() {
        let required = is_form_required(form, packet, config);
        if !required {
            continue;
        }

        let status = statuses.get(&form).copied().unwrap_or(FormStatus::NotStarted);
        if matches!(
            status,
            FormStatus::Skipped | FormStatus::NotStarted | FormStatus::InProgress | FormStatus::Error
        ) {
            result.push_error(ValidationError::new(
                form,
                ErrorCode::MissingRequiredForm,
                format!(
                    "{} ({}) is {}: {}",
                    form.id(),
                    form.title(),
                    status,
                    requirement_reason(form)
                ),
            ));
            continue;
        }

        // Status claims done; re-check the data behind it.
        match forms.get(&form) {
            None => {
                result.push_error(ValidationError::new(
                    form,
                    ErrorCode::FormDataMissing,
                    format!("{} has no saved data", form.id()),
                ));
            }
            Some(data) => {
                let form_result = validator::validate_form_data(form, data);
                for error in form_result.errors {
                    result.push_error(ValidationError {
                        form_type: form,
                        code: ErrorCode::IncompleteForm,
                        message: error.message,
                        field: error.field,
                    });
                }
            }
        }
    }

    for finding in consistency::find_inconsistencies(forms) {
        // Attribute the finding to the first form involved.
        let form = finding.forms.first().copied().unwrap_or(packet.form_order()[0]);
        let error = finding.to_validation_error(form);
        match boundary {
            ValidationBoundary::Draft => result.push_warning(error),
            ValidationBoundary::Filing => result.push_error(error),
        }
    }

    result
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
