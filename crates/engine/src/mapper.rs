//! Pure field mappers: form-pair translation tables and the vault mapper.
//!
//! A mapper emits only the destination keys its table declares, and only
//! when the corresponding source value is present and filled. Mappers never
//! invent defaults -- an absent source key simply produces no destination
//! key.

use docket_core::{CanonicalField, FormData, FormType};
use docket_storage::VaultRecord;

/// Source-field → destination-field pairs for one ordered form pair.
///
/// Pairs not listed here do not map; `map_between_forms` returns an empty
/// result for them rather than guessing.
fn pair_table(source: FormType, target: FormType) -> &'static [(&'static str, &'static str)] {
    use FormType::*;
    match (source, target) {
        (RestrainingOrderRequest, ConfidentialInformation) => &[
            ("protected_name", "party_protected"),
            ("restrained_name", "party_restrained"),
            ("case_number", "case_number"),
        ],
        (RestrainingOrderRequest, NoticeOfHearing) => &[
            ("protected_name", "petitioner_name"),
            ("restrained_name", "respondent_name"),
            ("county", "court_county"),
            ("case_number", "case_number"),
        ],
        (RestrainingOrderRequest, ChildrenInformation) => &[
            ("protected_name", "parent_protected_name"),
            ("restrained_name", "parent_restrained_name"),
            ("case_number", "case_number"),
        ],
        (RestrainingOrderRequest, IncomeAndExpense) => &[
            ("protected_name", "petitioner_name"),
            ("county", "county"),
            ("telephone", "telephone"),
            ("case_number", "case_number"),
        ],
        (RestrainingOrderRequest, AdditionalPage) => &[("case_number", "case_number")],
        (RestrainingOrderRequest, ResponseToRequest) => &[
            ("protected_name", "protected_name"),
            ("restrained_name", "respondent_name"),
            ("county", "county"),
            ("case_number", "case_number"),
        ],
        // The response form filer is the restrained party, so its name does
        // NOT flow into FL-150's petitioner slot; only neutral fields map.
        (ResponseToRequest, IncomeAndExpense) => &[
            ("county", "county"),
            ("telephone", "telephone"),
            ("case_number", "case_number"),
        ],
        (ResponseToRequest, AdditionalPage) => &[("case_number", "case_number")],
        _ => &[],
    }
}

/// Translate one form's fields into another form's namespace.
pub fn map_between_forms(source: FormType, target: FormType, data: &FormData) -> FormData {
    let mut out = FormData::new();
    for (src_field, dest_field) in pair_table(source, target) {
        if let Some(value) = data.get(src_field).filter(|v| v.is_filled()) {
            out.insert(*dest_field, value.clone());
        }
    }
    out
}

/// Map the vault record into one form's namespace.
///
/// Common fields (name, address, phone, email, county) resolve through the
/// canonical alias table; per-form extensions handle the slots the common
/// table cannot (attorney block, which party the filer is).
pub fn map_vault_to_form(vault: &VaultRecord, form: FormType) -> FormData {
    let mut out = FormData::new();

    // The vault describes the filer. On a response packet the filer is the
    // restrained party; everywhere else the protected party.
    let name_field = match form {
        FormType::ResponseToRequest => CanonicalField::RestrainedName.field_name(form),
        _ => CanonicalField::ProtectedName.field_name(form),
    };
    if let (Some(dest), Some(name)) = (name_field, vault.full_name.as_deref()) {
        if !name.trim().is_empty() {
            out.insert(dest, name);
        }
    }

    let common = [
        (CanonicalField::County, vault.county.as_deref()),
        (CanonicalField::Email, vault.email.as_deref()),
        (CanonicalField::Telephone, vault.telephone.as_deref()),
    ];
    for (canonical, value) in common {
        if let (Some(dest), Some(value)) = (canonical.field_name(form), value) {
            if !value.trim().is_empty() {
                out.insert(dest, value);
            }
        }
    }

    // Forms with a mailing-address caption block.
    if matches!(
        form,
        FormType::RestrainingOrderRequest | FormType::IncomeAndExpense | FormType::ResponseToRequest
    ) {
        if let Some(address) = vault.mailing_address() {
            out.insert("mailing_address", address);
        }
    }

    // Forms with an attorney caption block.
    if matches!(
        form,
        FormType::RestrainingOrderRequest | FormType::ResponseToRequest
    ) {
        if let Some(attorney) = vault.attorney_name.as_deref().filter(|s| !s.trim().is_empty()) {
            out.insert("attorney_name", attorney);
        }
        if let Some(bar) = vault
            .attorney_bar_number
            .as_deref()
            .filter(|s| !s.trim().is_empty())
        {
            out.insert("attorney_bar_number", bar);
        }
    }

    out
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
