//! Form kinds and per-form completion status.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The closed set of document kinds a packet can contain.
///
/// Each variant corresponds to one Judicial Council form. The enum is the
/// key of every rule table in this workspace; an open string key here is
/// exactly how a status check ends up silently accepting a form kind no
/// table knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormType {
    /// DV-100: Request for Domestic Violence Restraining Order.
    RestrainingOrderRequest,
    /// CLETS-001: Confidential CLETS Information (law-enforcement companion).
    ConfidentialInformation,
    /// DV-109: Notice of Court Hearing.
    NoticeOfHearing,
    /// DV-105: Request for Child Custody and Visitation Orders.
    ChildrenInformation,
    /// FL-150: Income and Expense Declaration.
    IncomeAndExpense,
    /// MC-020: Additional Page.
    AdditionalPage,
    /// DV-120: Response to Request for Domestic Violence Restraining Order.
    ResponseToRequest,
}

impl FormType {
    /// The Judicial Council form number, used in user-facing messages.
    pub fn id(&self) -> &'static str {
        match self {
            FormType::RestrainingOrderRequest => "DV-100",
            FormType::ConfidentialInformation => "CLETS-001",
            FormType::NoticeOfHearing => "DV-109",
            FormType::ChildrenInformation => "DV-105",
            FormType::IncomeAndExpense => "FL-150",
            FormType::AdditionalPage => "MC-020",
            FormType::ResponseToRequest => "DV-120",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            FormType::RestrainingOrderRequest => "Request for Domestic Violence Restraining Order",
            FormType::ConfidentialInformation => "Confidential CLETS Information",
            FormType::NoticeOfHearing => "Notice of Court Hearing",
            FormType::ChildrenInformation => "Request for Child Custody and Visitation Orders",
            FormType::IncomeAndExpense => "Income and Expense Declaration",
            FormType::AdditionalPage => "Additional Page",
            FormType::ResponseToRequest => "Response to Request for Restraining Order",
        }
    }
}

impl fmt::Display for FormType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Completion status of a single form within a packet.
///
/// Invariant: a form is `Complete` or `Validated` only immediately after the
/// validator reported zero errors for it. Any later edit demotes it to
/// `InProgress` until re-validated, so a status read is never stale-true.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormStatus {
    NotStarted,
    InProgress,
    /// Zero validation errors; cross-form consistency not (yet) clean.
    Complete,
    /// Zero validation errors and no consistency divergence involving this form.
    Validated,
    Skipped,
    Error,
}

impl FormStatus {
    /// Whether this status satisfies the forward-navigation gate.
    ///
    /// Strict membership in {Complete, Validated, Skipped}. `InProgress` is
    /// NOT done -- treating it as done is the defect class this engine
    /// exists to prevent.
    pub fn is_done(&self) -> bool {
        matches!(
            self,
            FormStatus::Complete | FormStatus::Validated | FormStatus::Skipped
        )
    }
}

impl fmt::Display for FormStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FormStatus::NotStarted => "not started",
            FormStatus::InProgress => "in progress",
            FormStatus::Complete => "complete",
            FormStatus::Validated => "validated",
            FormStatus::Skipped => "skipped",
            FormStatus::Error => "error",
        };
        write!(f, "{}", s)
    }
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_progress_is_not_done() {
        assert!(!FormStatus::InProgress.is_done());
        assert!(!FormStatus::NotStarted.is_done());
        assert!(!FormStatus::Error.is_done());
    }

    #[test]
    fn done_statuses() {
        assert!(FormStatus::Complete.is_done());
        assert!(FormStatus::Validated.is_done());
        assert!(FormStatus::Skipped.is_done());
    }

    #[test]
    fn form_type_serde_round_trip() {
        let json = serde_json::to_string(&FormType::RestrainingOrderRequest).unwrap();
        assert_eq!(json, "\"restraining_order_request\"");
        let back: FormType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, FormType::RestrainingOrderRequest);
    }

    #[test]
    fn form_ids_are_judicial_council_numbers() {
        assert_eq!(FormType::RestrainingOrderRequest.id(), "DV-100");
        assert_eq!(FormType::IncomeAndExpense.id(), "FL-150");
    }
}
