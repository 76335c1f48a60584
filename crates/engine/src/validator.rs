//! Per-form validation against the requirement catalog.
//!
//! Malformed data is never an error here -- every check runs and every
//! failure is collected into the returned `ValidationResult`.

use docket_core::{
    catalog, ErrorCode, FormData, FormType, ValidationError, ValidationResult,
};

/// Validate one form's data against its catalog entry.
///
/// Emits MISSING_FIELD for each required field that is absent, empty text,
/// an unchecked checkbox, or an empty list; MISSING_GROUP_SELECTION for
/// each at-least-one group with every member falsy. Returns ALL failures,
/// not just the first.
pub fn validate_form_data(form: FormType, data: &FormData) -> ValidationResult {
    let entry = catalog::requirements(form);
    let mut result = ValidationResult::ok();

    for field in entry.required {
        if !data.is_filled(field) {
            result.push_error(
                ValidationError::new(
                    form,
                    ErrorCode::MissingField,
                    format!("{}: required field '{}' is missing", form.id(), field),
                )
                .with_field(*field),
            );
        }
    }

    for group in entry.groups {
        let any_filled = group.members.iter().any(|member| data.is_filled(member));
        if !any_filled {
            result.push_error(ValidationError::new(
                form,
                ErrorCode::MissingGroupSelection,
                format!(
                    "{}: select at least one of the {} options ({})",
                    form.id(),
                    group.name,
                    group.members.join(", ")
                ),
            ));
        }
    }

    result
}

/// Zero validation errors.
pub fn is_form_complete(form: FormType, data: &FormData) -> bool {
    validate_form_data(form, data).errors.is_empty()
}

/// Floored percentage of satisfied requirement slots.
///
/// `100 * satisfied / (required fields + groups)`. Monotonically
/// non-decreasing as fields fill with others held fixed; 0 for empty data;
/// 100 exactly when `is_form_complete`.
pub fn completion_percentage(form: FormType, data: &FormData) -> u8 {
    let entry = catalog::requirements(form);
    let total = entry.slot_count();
    if total == 0 {
        return 100;
    }

    let mut satisfied = entry
        .required
        .iter()
        .filter(|field| data.is_filled(field))
        .count();
    satisfied += entry
        .groups
        .iter()
        .filter(|group| group.members.iter().any(|member| data.is_filled(member)))
        .count();

    (100 * satisfied / total) as u8
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_request() -> FormData {
        let mut data = FormData::new();
        data.insert("protected_name", "Jane Smith");
        data.insert("restrained_name", "John Doe");
        data.insert("county", "Orange");
        data.insert("relationship_to_restrained", "spouse");
        data.insert("abuse_description", "described in attachment");
        data.insert("order_stay_away", true);
        data
    }

    #[test]
    fn empty_data_reports_every_requirement() {
        let result = validate_form_data(FormType::RestrainingOrderRequest, &FormData::new());
        assert!(!result.valid);
        // 5 required fields + 1 group.
        assert_eq!(result.errors.len(), 6);
        assert!(result
            .errors
            .iter()
            .any(|e| e.code == ErrorCode::MissingGroupSelection));
    }

    #[test]
    fn filled_form_is_complete() {
        let data = filled_request();
        assert!(is_form_complete(FormType::RestrainingOrderRequest, &data));
        assert_eq!(
            completion_percentage(FormType::RestrainingOrderRequest, &data),
            100
        );
    }

    #[test]
    fn unchecked_group_blocks_completion() {
        let mut data = filled_request();
        data.insert("order_stay_away", false);
        let result = validate_form_data(FormType::RestrainingOrderRequest, &data);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].code, ErrorCode::MissingGroupSelection);
        assert!(result.errors[0].message.contains("orders requested"));
    }

    #[test]
    fn missing_field_errors_name_the_field() {
        let mut data = filled_request();
        data.insert("county", "");
        let result = validate_form_data(FormType::RestrainingOrderRequest, &data);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].code, ErrorCode::MissingField);
        assert_eq!(result.errors[0].field.as_deref(), Some("county"));
    }

    #[test]
    fn complete_iff_percentage_is_100() {
        // Walk from empty to full one field at a time; the equivalence must
        // hold at every step and the percentage must never decrease.
        let full = filled_request();
        let mut data = FormData::new();
        let mut last = completion_percentage(FormType::RestrainingOrderRequest, &data);
        assert_eq!(last, 0);

        for (field, value) in full.iter() {
            data.insert(field.clone(), value.clone());
            let pct = completion_percentage(FormType::RestrainingOrderRequest, &data);
            assert!(pct >= last, "completion dropped from {} to {}", last, pct);
            last = pct;
            assert_eq!(
                is_form_complete(FormType::RestrainingOrderRequest, &data),
                pct == 100
            );
        }
        assert_eq!(last, 100);
    }

    #[test]
    fn percentage_floors() {
        // Notice form: 3 required slots, 1 filled => 33.
        let mut data = FormData::new();
        data.insert("petitioner_name", "Jane Smith");
        assert_eq!(completion_percentage(FormType::NoticeOfHearing, &data), 33);
    }
}
