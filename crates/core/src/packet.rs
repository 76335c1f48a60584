//! Packet kinds, the per-packet form order, and the workflow phase machine.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::form::FormType;

/// The closed set of filing scenarios a packet can represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PacketType {
    /// Initiating packet: restraining-order request plus companions.
    DvInitial,
    /// Responding packet filed by the restrained party.
    DvResponse,
}

impl PacketType {
    /// The fixed, ordered form list for this packet kind.
    ///
    /// Order is the filing order shown to the user; `formStatuses` carries
    /// exactly one entry per form listed here.
    pub fn form_order(&self) -> &'static [FormType] {
        match self {
            PacketType::DvInitial => &[
                FormType::RestrainingOrderRequest,
                FormType::ConfidentialInformation,
                FormType::NoticeOfHearing,
                FormType::ChildrenInformation,
                FormType::IncomeAndExpense,
                FormType::AdditionalPage,
            ],
            PacketType::DvResponse => &[
                FormType::ResponseToRequest,
                FormType::IncomeAndExpense,
                FormType::AdditionalPage,
            ],
        }
    }

    /// Index of a form within this packet's order, if the packet contains it.
    pub fn position_of(&self, form: FormType) -> Option<usize> {
        self.form_order().iter().position(|f| *f == form)
    }
}

impl fmt::Display for PacketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PacketType::DvInitial => "dv_initial",
            PacketType::DvResponse => "dv_response",
        };
        write!(f, "{}", s)
    }
}

/// Booleans driving conditional form requirements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PacketConfig {
    pub has_children: bool,
    pub requesting_child_support: bool,
    pub requesting_spousal_support: bool,
    pub need_more_space: bool,
    pub has_existing_case_number: bool,
}

/// High-level phase of a packet workflow.
///
/// Forward navigation advances this monotonically:
/// SelectingPacketType → FillingForms → ReviewProgress / ReadyToFile → Filed.
/// `ReviewProgress` and `ReadyToFile` toggle on packet-validation outcome;
/// `Filed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowState {
    SelectingPacketType,
    FillingForms,
    ReviewProgress,
    ReadyToFile,
    Filed,
}

impl fmt::Display for WorkflowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            WorkflowState::SelectingPacketType => "selecting_packet_type",
            WorkflowState::FillingForms => "filling_forms",
            WorkflowState::ReviewProgress => "review_progress",
            WorkflowState::ReadyToFile => "ready_to_file",
            WorkflowState::Filed => "filed",
        };
        write!(f, "{}", s)
    }
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
