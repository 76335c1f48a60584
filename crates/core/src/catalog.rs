//! Form requirement catalog: per form kind, the required fields and the
//! at-least-one-of groups.
//!
//! One declarative table per form, resolved through an exhaustive match so
//! a new `FormType` variant cannot ship without a catalog entry. Field
//! names here are the canonical per-form names the mapper and alias table
//! also use; they must agree with the authoritative Judicial Council form
//! text before this catalog is relied on for a real filing.

use crate::form::FormType;

/// A set of fields where validity needs at least one member filled, not all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldGroup {
    /// Short label used in MISSING_GROUP_SELECTION messages.
    pub name: &'static str,
    pub members: &'static [&'static str],
}

/// Requirement entry for one form kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormRequirements {
    pub required: &'static [&'static str],
    pub groups: &'static [FieldGroup],
}

impl FormRequirements {
    /// Number of independently satisfiable requirement slots, the
    /// denominator of the completion percentage.
    pub fn slot_count(&self) -> usize {
        self.required.len() + self.groups.len()
    }
}

const RESTRAINING_ORDER_REQUEST: FormRequirements = FormRequirements {
    required: &[
        "protected_name",
        "restrained_name",
        "county",
        "relationship_to_restrained",
        "abuse_description",
    ],
    groups: &[FieldGroup {
        name: "orders requested",
        members: &[
            "order_personal_conduct",
            "order_stay_away",
            "order_move_out",
        ],
    }],
};

const CONFIDENTIAL_INFORMATION: FormRequirements = FormRequirements {
    required: &[
        "party_protected",
        "party_restrained",
        "restrained_date_of_birth",
    ],
    groups: &[FieldGroup {
        name: "restrained-person identifiers",
        members: &[
            "restrained_drivers_license",
            "restrained_vehicle",
            "restrained_distinguishing_marks",
        ],
    }],
};

const NOTICE_OF_HEARING: FormRequirements = FormRequirements {
    required: &["petitioner_name", "respondent_name", "court_county"],
    groups: &[],
};

const CHILDREN_INFORMATION: FormRequirements = FormRequirements {
    required: &[
        "parent_protected_name",
        "parent_restrained_name",
        "children",
    ],
    groups: &[FieldGroup {
        name: "custody orders requested",
        members: &["request_legal_custody", "request_physical_custody", "request_visitation"],
    }],
};

const INCOME_AND_EXPENSE: FormRequirements = FormRequirements {
    required: &["petitioner_name", "county", "employer_name", "monthly_income"],
    groups: &[FieldGroup {
        name: "income evidence",
        members: &[
            "pay_stub_attached",
            "tax_return_attached",
            "income_declaration",
        ],
    }],
};

const ADDITIONAL_PAGE: FormRequirements = FormRequirements {
    required: &["attached_to_form", "page_text"],
    groups: &[],
};

const RESPONSE_TO_REQUEST: FormRequirements = FormRequirements {
    required: &["respondent_name", "protected_name", "case_number"],
    groups: &[FieldGroup {
        name: "response position",
        members: &["consent_to_orders", "contest_orders"],
    }],
};

/// The catalog entry for a form kind.
pub fn requirements(form: FormType) -> &'static FormRequirements {
    match form {
        FormType::RestrainingOrderRequest => &RESTRAINING_ORDER_REQUEST,
        FormType::ConfidentialInformation => &CONFIDENTIAL_INFORMATION,
        FormType::NoticeOfHearing => &NOTICE_OF_HEARING,
        FormType::ChildrenInformation => &CHILDREN_INFORMATION,
        FormType::IncomeAndExpense => &INCOME_AND_EXPENSE,
        FormType::AdditionalPage => &ADDITIONAL_PAGE,
        FormType::ResponseToRequest => &RESPONSE_TO_REQUEST,
    }
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
