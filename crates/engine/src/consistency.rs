//! Cross-document consistency: find and repair divergent canonical-field
//! values across a packet's forms.

use std::collections::BTreeMap;

use docket_core::{CanonicalField, ErrorCode, FormData, FormType, ValidationError};

/// One canonical field holding more than one distinct value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsistencyFinding {
    pub field: CanonicalField,
    /// Every distinct conflicting value, in packet-order of first sighting.
    pub values: Vec<String>,
    /// Forms that record this canonical field with a filled value.
    pub forms: Vec<FormType>,
}

impl ConsistencyFinding {
    /// Message naming the field and all conflicting values.
    pub fn message(&self) -> String {
        format!(
            "{} differs across forms: {}",
            self.field,
            self.values
                .iter()
                .map(|v| format!("'{}'", v))
                .collect::<Vec<_>>()
                .join(" vs ")
        )
    }

    /// Whether this divergence involves the given form.
    pub fn involves(&self, form: FormType) -> bool {
        self.forms.contains(&form)
    }

    /// Render as a non-blocking validation warning (or, at the filing
    /// boundary, the caller re-tags it as a blocking error).
    pub fn to_validation_error(&self, code_form: FormType) -> ValidationError {
        ValidationError::new(code_form, ErrorCode::DataInconsistency, self.message())
    }
}

/// For each canonical field, the distinct non-empty values seen across all
/// forms, resolved through the alias table.
pub fn extract_common_values(
    forms: &BTreeMap<FormType, FormData>,
) -> BTreeMap<CanonicalField, Vec<String>> {
    let mut out = BTreeMap::new();
    for field in CanonicalField::ALL {
        let mut values: Vec<String> = Vec::new();
        for (form, data) in forms {
            if let Some(value) = field.value_on(*form, data) {
                if !values.iter().any(|v| v == value) {
                    values.push(value.to_string());
                }
            }
        }
        if !values.is_empty() {
            out.insert(field, values);
        }
    }
    out
}

/// One finding per canonical field whose distinct-value set has size > 1.
///
/// Empty when every populated canonical field agrees everywhere; a field
/// populated on only one form cannot diverge.
pub fn find_inconsistencies(forms: &BTreeMap<FormType, FormData>) -> Vec<ConsistencyFinding> {
    let mut findings = Vec::new();
    for field in CanonicalField::ALL {
        let mut values: Vec<String> = Vec::new();
        let mut involved: Vec<FormType> = Vec::new();
        for (form, data) in forms {
            if let Some(value) = field.value_on(*form, data) {
                involved.push(*form);
                if !values.iter().any(|v| v == value) {
                    values.push(value.to_string());
                }
            }
        }
        if values.len() > 1 {
            findings.push(ConsistencyFinding {
                field,
                values,
                forms: involved,
            });
        }
    }
    findings
}

/// Copy the authoritative form's canonical values into every other form
/// that records them but has them empty.
///
/// Never overwrites an existing non-empty value on a target: repair fills
/// gaps, reconciliation of true conflicts stays with the user. A missing
/// authoritative form is a no-op, not an error. Returns the number of
/// fields written.
pub fn synchronize_common_fields(
    forms: &mut BTreeMap<FormType, FormData>,
    authoritative: FormType,
) -> usize {
    let authoritative_data = match forms.get(&authoritative) {
        Some(data) => data.clone(),
        None => return 0,
    };

    let mut written = 0;
    for field in CanonicalField::ALL {
        let value = match field.value_on(authoritative, &authoritative_data) {
            Some(v) => v.to_string(),
            None => continue,
        };
        for (form, data) in forms.iter_mut() {
            if *form == authoritative {
                continue;
            }
            let Some(dest) = field.field_name(*form) else {
                continue;
            };
            if !data.is_filled(dest) {
                data.insert(dest, value.clone());
                written += 1;
            }
        }
    }
    written
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
