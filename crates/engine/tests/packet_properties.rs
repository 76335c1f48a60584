//! Property-style checks over the validators and resolvers, exercised
//! through the public API only.

use std::collections::BTreeMap;

use docket_core::{
    catalog, CanonicalField, ErrorCode, FieldValue, FormData, FormStatus, FormType, PacketConfig,
    PacketType,
};
use docket_engine::{
    autofill_from_both, autofill_from_previous_forms, completion_percentage,
    find_inconsistencies, is_form_complete, synchronize_common_fields, validate_packet_data,
    ValidationBoundary,
};
use docket_storage::VaultRecord;

const ALL_FORMS: [FormType; 7] = [
    FormType::RestrainingOrderRequest,
    FormType::ConfidentialInformation,
    FormType::NoticeOfHearing,
    FormType::ChildrenInformation,
    FormType::IncomeAndExpense,
    FormType::AdditionalPage,
    FormType::ResponseToRequest,
];

/// Data satisfying every catalog requirement of `form`.
fn fully_filled(form: FormType) -> FormData {
    let entry = catalog::requirements(form);
    let mut data = FormData::new();
    for field in entry.required {
        data.insert(*field, format!("value for {}", field));
    }
    for group in entry.groups {
        data.insert(group.members[0], true);
    }
    data
}

#[test]
fn complete_iff_percentage_100_for_every_form() {
    for form in ALL_FORMS {
        // Empty: neither complete nor 100.
        assert!(!is_form_complete(form, &FormData::new()));
        assert_eq!(completion_percentage(form, &FormData::new()), 0);

        // Full: both.
        let full = fully_filled(form);
        assert!(is_form_complete(form, &full), "{} not complete", form);
        assert_eq!(completion_percentage(form, &full), 100);
    }
}

#[test]
fn percentage_is_monotone_under_fill_for_every_form() {
    for form in ALL_FORMS {
        let full = fully_filled(form);
        let mut partial = FormData::new();
        let mut last = 0u8;
        for (field, value) in full.iter() {
            partial.insert(field.clone(), value.clone());
            let pct = completion_percentage(form, &partial);
            assert!(
                pct >= last,
                "{}: completion fell from {} to {} after filling '{}'",
                form,
                last,
                pct,
                field
            );
            last = pct;
            assert_eq!(is_form_complete(form, &partial), pct == 100);
        }
    }
}

#[test]
fn every_non_done_status_on_a_mandatory_form_invalidates_the_packet() {
    let config = PacketConfig::default();
    let forms: BTreeMap<FormType, FormData> = PacketType::DvInitial
        .form_order()
        .iter()
        .map(|f| (*f, fully_filled(*f)))
        .collect();

    for bad_status in [
        FormStatus::NotStarted,
        FormStatus::InProgress,
        FormStatus::Error,
        FormStatus::Skipped,
    ] {
        let mut statuses: BTreeMap<FormType, FormStatus> = PacketType::DvInitial
            .form_order()
            .iter()
            .map(|f| (*f, FormStatus::Complete))
            .collect();
        statuses.insert(FormType::ConfidentialInformation, bad_status);

        let result = validate_packet_data(
            PacketType::DvInitial,
            &config,
            &statuses,
            &forms,
            ValidationBoundary::Draft,
        );
        assert!(!result.valid, "status {} passed the packet", bad_status);
        assert!(
            result.errors.iter().any(|e| {
                e.code == ErrorCode::MissingRequiredForm && e.message.contains("CLETS-001")
            }),
            "no MISSING_REQUIRED_FORM for status {}",
            bad_status
        );
    }
}

#[test]
fn previous_form_autofill_is_the_mapped_subset() {
    let mut source = FormData::new();
    source.insert("protected_name", "Jane Smith");
    source.insert("restrained_name", "John Doe");
    source.insert("case_number", "FL1");
    source.insert("abuse_description", "not a canonical field");
    let mut completed = BTreeMap::new();
    completed.insert(FormType::RestrainingOrderRequest, source);

    let result = autofill_from_previous_forms(FormType::NoticeOfHearing, &completed);
    assert!(result.fields_autofilled > 0);
    assert_eq!(result.source.as_str(), "previous_form");
    assert_eq!(result.fields.filled_text("petitioner_name"), Some("Jane Smith"));
    assert_eq!(result.fields.filled_text("respondent_name"), Some("John Doe"));
    assert_eq!(result.fields.filled_text("case_number"), Some("FL1"));
    // The undeclared field did not leak through.
    assert!(result.fields.get("abuse_description").is_none());
}

#[test]
fn both_merge_prefers_the_previous_form_on_collision() {
    let vault = VaultRecord {
        county: Some("Orange".to_string()),
        ..VaultRecord::default()
    };
    let mut request = FormData::new();
    request.insert("county", "Los Angeles");
    let mut completed = BTreeMap::new();
    completed.insert(FormType::RestrainingOrderRequest, request);

    let merged = autofill_from_both(FormType::IncomeAndExpense, &vault, &completed);
    assert_eq!(merged.fields.filled_text("county"), Some("Los Angeles"));
    assert_eq!(merged.source.as_str(), "both");
}

#[test]
fn case_number_divergence_names_both_values() {
    let mut a = FormData::new();
    a.insert("case_number", "X");
    let mut b = FormData::new();
    b.insert("case_number", "Y");
    let mut forms = BTreeMap::new();
    forms.insert(FormType::RestrainingOrderRequest, a);
    forms.insert(FormType::ConfidentialInformation, b);

    let findings = find_inconsistencies(&forms);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].field, CanonicalField::CaseNumber);
    let msg = findings[0].message();
    assert!(msg.contains("'X'") && msg.contains("'Y'"));

    // Agreement produces nothing.
    let mut forms = BTreeMap::new();
    let mut a = FormData::new();
    a.insert("case_number", "X");
    let mut b = FormData::new();
    b.insert("case_number", "X");
    forms.insert(FormType::RestrainingOrderRequest, a);
    forms.insert(FormType::ConfidentialInformation, b);
    assert!(find_inconsistencies(&forms).is_empty());
}

#[test]
fn synchronize_never_overwrites_and_tolerates_missing_authority() {
    let mut authority = FormData::new();
    authority.insert("case_number", "A");
    let mut target = FormData::new();
    target.insert("case_number", "B");
    let mut forms = BTreeMap::new();
    forms.insert(FormType::RestrainingOrderRequest, authority);
    forms.insert(FormType::NoticeOfHearing, target);

    synchronize_common_fields(&mut forms, FormType::RestrainingOrderRequest);
    assert_eq!(
        forms[&FormType::NoticeOfHearing].filled_text("case_number"),
        Some("B")
    );

    // Absent authoritative form: no panic, no change.
    let mut only_target = BTreeMap::new();
    let mut data = FormData::new();
    data.insert("case_number", "B");
    only_target.insert(FormType::NoticeOfHearing, data);
    let before = only_target.clone();
    let written = synchronize_common_fields(&mut only_target, FormType::RestrainingOrderRequest);
    assert_eq!(written, 0);
    assert_eq!(only_target, before);
}

#[test]
fn group_satisfaction_accepts_any_single_member() {
    let entry = catalog::requirements(FormType::RestrainingOrderRequest);
    let group = &entry.groups[0];
    for member in group.members {
        let mut data = fully_filled(FormType::RestrainingOrderRequest);
        // Clear every member, then set just this one.
        for m in group.members {
            data.insert(*m, FieldValue::Bool(false));
        }
        data.insert(*member, true);
        assert!(
            is_form_complete(FormType::RestrainingOrderRequest, &data),
            "member '{}' alone did not satisfy the group",
            member
        );
    }
}
