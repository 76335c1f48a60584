//! Canonical-field alias table.
//!
//! A canonical field is one logical value (case number, county, a party's
//! name) that several forms record under different field names. This table
//! is the single place the equivalences live; the consistency engine and
//! the vault mapper both resolve through it, and it is part of the public
//! contract so export tooling renders agreement without reimplementing it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::form::FormType;
use crate::value::FormData;

/// The logical values that must agree across every form recording them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanonicalField {
    CaseNumber,
    County,
    ProtectedName,
    RestrainedName,
    Email,
    Telephone,
}

impl CanonicalField {
    pub const ALL: [CanonicalField; 6] = [
        CanonicalField::CaseNumber,
        CanonicalField::County,
        CanonicalField::ProtectedName,
        CanonicalField::RestrainedName,
        CanonicalField::Email,
        CanonicalField::Telephone,
    ];

    /// Human label used in divergence messages.
    pub fn label(&self) -> &'static str {
        match self {
            CanonicalField::CaseNumber => "case number",
            CanonicalField::County => "county",
            CanonicalField::ProtectedName => "protected person name",
            CanonicalField::RestrainedName => "restrained person name",
            CanonicalField::Email => "email",
            CanonicalField::Telephone => "telephone",
        }
    }

    /// The field name this canonical value lives under on `form`, or `None`
    /// when the form does not record it.
    pub fn field_name(&self, form: FormType) -> Option<&'static str> {
        use FormType::*;
        match self {
            CanonicalField::CaseNumber => match form {
                // Every form carries the court's case number once assigned.
                RestrainingOrderRequest | ConfidentialInformation | NoticeOfHearing
                | ChildrenInformation | IncomeAndExpense | AdditionalPage | ResponseToRequest => {
                    Some("case_number")
                }
            },
            CanonicalField::County => match form {
                RestrainingOrderRequest | IncomeAndExpense | ResponseToRequest => Some("county"),
                NoticeOfHearing => Some("court_county"),
                ConfidentialInformation | ChildrenInformation | AdditionalPage => None,
            },
            CanonicalField::ProtectedName => match form {
                RestrainingOrderRequest | ResponseToRequest => Some("protected_name"),
                ConfidentialInformation => Some("party_protected"),
                NoticeOfHearing | IncomeAndExpense => Some("petitioner_name"),
                ChildrenInformation => Some("parent_protected_name"),
                AdditionalPage => None,
            },
            CanonicalField::RestrainedName => match form {
                RestrainingOrderRequest => Some("restrained_name"),
                ConfidentialInformation => Some("party_restrained"),
                NoticeOfHearing | ResponseToRequest => Some("respondent_name"),
                ChildrenInformation => Some("parent_restrained_name"),
                IncomeAndExpense | AdditionalPage => None,
            },
            CanonicalField::Email => match form {
                RestrainingOrderRequest | ResponseToRequest => Some("email"),
                _ => None,
            },
            CanonicalField::Telephone => match form {
                RestrainingOrderRequest | IncomeAndExpense | ResponseToRequest => {
                    Some("telephone")
                }
                _ => None,
            },
        }
    }

    /// The canonical value on `form`'s data, if the form records this field
    /// and the value is filled-in text.
    pub fn value_on<'a>(&self, form: FormType, data: &'a FormData) -> Option<&'a str> {
        self.field_name(form).and_then(|name| data.filled_text(name))
    }
}

impl fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
