//! Autofill resolver: merges field-mapper output from multiple sources
//! with a defined precedence.
//!
//! Precedence is an explicit ordered layer list folded left to right, later
//! layer overwriting earlier on key collision. A form the user already
//! confirmed outranks a stale vault value, so the previous-form layer comes
//! after the vault layer. A future third source is one more entry in the
//! fold, not a reshuffle.

use std::collections::BTreeMap;

use docket_core::{AutofillResult, AutofillSource, FormData, FormType};
use docket_storage::VaultRecord;

use crate::mapper;

/// Declared autofill sources for each target form, in ascending priority:
/// when two sources fill the same destination key, the later one wins.
pub fn autofill_sources(target: FormType) -> &'static [FormType] {
    use FormType::*;
    match target {
        RestrainingOrderRequest => &[],
        ConfidentialInformation => &[RestrainingOrderRequest],
        NoticeOfHearing => &[RestrainingOrderRequest],
        ChildrenInformation => &[RestrainingOrderRequest],
        IncomeAndExpense => &[RestrainingOrderRequest, ResponseToRequest],
        AdditionalPage => &[RestrainingOrderRequest, ResponseToRequest],
        ResponseToRequest => &[RestrainingOrderRequest],
    }
}

fn fold_previous_forms(
    target: FormType,
    completed: &BTreeMap<FormType, FormData>,
) -> FormData {
    let mut merged = FormData::new();
    for source in autofill_sources(target) {
        if let Some(data) = completed.get(source) {
            merged.overlay(mapper::map_between_forms(*source, target, data));
        }
    }
    merged
}

/// Pre-populate `target` from earlier forms in the same packet.
///
/// Resolves the declared source list, applies each pair mapper to every
/// available source, and folds in the fixed priority order. Deterministic
/// for a fixed snapshot regardless of call order; a missing source form is
/// "no data", never an error.
pub fn autofill_from_previous_forms(
    target: FormType,
    completed: &BTreeMap<FormType, FormData>,
) -> AutofillResult {
    AutofillResult::new(
        fold_previous_forms(target, completed),
        AutofillSource::PreviousForm,
    )
}

/// Pre-populate `target` from the personal-data store.
pub fn autofill_from_vault(target: FormType, vault: &VaultRecord) -> AutofillResult {
    AutofillResult::new(mapper::map_vault_to_form(vault, target), AutofillSource::Vault)
}

/// Pre-populate `target` from both layers: vault first, previous forms on
/// top, so a previously confirmed form value wins every collision.
pub fn autofill_from_both(
    target: FormType,
    vault: &VaultRecord,
    completed: &BTreeMap<FormType, FormData>,
) -> AutofillResult {
    let layers = [
        mapper::map_vault_to_form(vault, target),
        fold_previous_forms(target, completed),
    ];
    let mut merged = FormData::new();
    for layer in layers {
        merged.overlay(layer);
    }
    AutofillResult::new(merged, AutofillSource::Both)
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn completed_request() -> BTreeMap<FormType, FormData> {
        let mut data = FormData::new();
        data.insert("protected_name", "Jane Smith");
        data.insert("restrained_name", "John Doe");
        data.insert("case_number", "FL1");
        let mut completed = BTreeMap::new();
        completed.insert(FormType::RestrainingOrderRequest, data);
        completed
    }

    #[test]
    fn previous_form_autofill_maps_the_declared_subset() {
        let result =
            autofill_from_previous_forms(FormType::ConfidentialInformation, &completed_request());
        assert!(result.fields_autofilled > 0);
        assert_eq!(result.source, AutofillSource::PreviousForm);
        assert_eq!(result.fields.filled_text("party_protected"), Some("Jane Smith"));
        assert_eq!(result.fields.filled_text("party_restrained"), Some("John Doe"));
        assert_eq!(result.fields.filled_text("case_number"), Some("FL1"));
        assert_eq!(result.fields.len(), 3);
    }

    #[test]
    fn no_sources_means_empty_result_not_error() {
        let result =
            autofill_from_previous_forms(FormType::RestrainingOrderRequest, &completed_request());
        assert_eq!(result.fields_autofilled, 0);
        assert!(result.fields.is_empty());

        let empty = BTreeMap::new();
        let result = autofill_from_previous_forms(FormType::NoticeOfHearing, &empty);
        assert_eq!(result.fields_autofilled, 0);
    }

    #[test]
    fn vault_autofill_is_tagged_vault() {
        let vault = VaultRecord {
            full_name: Some("Jane Smith".to_string()),
            ..VaultRecord::default()
        };
        let result = autofill_from_vault(FormType::NoticeOfHearing, &vault);
        assert_eq!(result.source, AutofillSource::Vault);
        assert_eq!(result.fields.filled_text("petitioner_name"), Some("Jane Smith"));
    }

    #[test]
    fn previous_form_beats_vault_on_collision() {
        let vault = VaultRecord {
            county: Some("Orange".to_string()),
            ..VaultRecord::default()
        };
        let mut request = FormData::new();
        request.insert("county", "Los Angeles");
        let mut completed = BTreeMap::new();
        completed.insert(FormType::RestrainingOrderRequest, request);

        let result = autofill_from_both(FormType::IncomeAndExpense, &vault, &completed);
        assert_eq!(result.source, AutofillSource::Both);
        assert_eq!(result.fields.filled_text("county"), Some("Los Angeles"));
    }

    #[test]
    fn both_keeps_vault_values_with_no_collision() {
        let vault = VaultRecord {
            telephone: Some("714-555-0100".to_string()),
            ..VaultRecord::default()
        };
        let result = autofill_from_both(FormType::IncomeAndExpense, &vault, &completed_request());
        assert_eq!(result.fields.filled_text("telephone"), Some("714-555-0100"));
        // And the previous-form layer still lands.
        assert_eq!(result.fields.filled_text("petitioner_name"), Some("Jane Smith"));
    }

    #[test]
    fn fold_is_deterministic_for_a_fixed_snapshot() {
        let completed = completed_request();
        let a = autofill_from_previous_forms(FormType::IncomeAndExpense, &completed);
        let b = autofill_from_previous_forms(FormType::IncomeAndExpense, &completed);
        assert_eq!(a, b);
    }
}
