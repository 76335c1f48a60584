//! The packet workflow aggregate and its state machine.
//!
//! Owns the form cursor, per-form statuses, and the high-level phase, and
//! orchestrates the validators and the autofill resolver on every
//! transition. All mutation of a packet goes through this machine.
//!
//! Ordering invariant: `validate_current_form` writes the status the
//! forward-navigation gate reads, so its result must be applied before
//! `transition_to_next_form` checks `form_statuses`. The gate itself is
//! strict membership in {Complete, Validated, Skipped} -- anything looser
//! re-admits the "in progress means done" defect.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use docket_core::{
    ErrorCode, FormData, FormStatus, FormType, PacketConfig, PacketType, ValidationError,
    ValidationResult, WorkflowState,
};
use docket_storage::{DocumentStore, StorageError, VaultRecord};

use crate::autofill;
use crate::consistency;
use crate::packet::{self, ValidationBoundary};
use crate::validator;

// ──────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────

/// Failures of workflow operations (never of form data itself).
#[derive(Debug, thiserror::Error)]
pub enum WorkflowError {
    /// A jump past the first not-yet-reached form was refused.
    #[error("navigation blocked: {reason}")]
    NavigationBlocked { reason: String },

    /// Skip was requested for a form the packet configuration mandates.
    #[error("cannot skip {form}: {reason}")]
    MandatorySkip { form: FormType, reason: &'static str },

    /// The packet is filed; its workflow is terminal.
    #[error("packet already filed")]
    AlreadyFiled,

    /// Filing was requested outside the ReadyToFile phase.
    #[error("packet is not ready to file (state: {state})")]
    NotReadyToFile { state: WorkflowState },

    /// Store I/O failed. Always propagated, never swallowed.
    #[error(transparent)]
    Store(#[from] StorageError),
}

// ──────────────────────────────────────────────
// Aggregate
// ──────────────────────────────────────────────

/// The persisted workflow aggregate for one packet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PacketWorkflow {
    pub id: String,
    pub user_id: String,
    pub packet_type: PacketType,
    pub state: WorkflowState,
    /// Index into `packet_type.form_order()`.
    pub cursor: usize,
    /// Exactly one entry per form in the packet's fixed order.
    pub form_statuses: BTreeMap<FormType, FormStatus>,
    pub config: PacketConfig,
    /// External document id per form, owned by the persistence layer.
    pub form_data_refs: BTreeMap<FormType, String>,
    /// RFC 3339.
    pub created_at: String,
    /// RFC 3339.
    pub updated_at: String,
}

fn now_rfc3339() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_default()
}

impl PacketWorkflow {
    fn new(id: String, user_id: String, packet_type: PacketType, config: PacketConfig) -> Self {
        let now = now_rfc3339();
        PacketWorkflow {
            id,
            user_id,
            packet_type,
            state: WorkflowState::FillingForms,
            cursor: 0,
            form_statuses: packet_type
                .form_order()
                .iter()
                .map(|f| (*f, FormStatus::NotStarted))
                .collect(),
            config,
            form_data_refs: BTreeMap::new(),
            created_at: now.clone(),
            updated_at: now,
        }
    }

    fn touch(&mut self) {
        self.updated_at = now_rfc3339();
    }
}

// ──────────────────────────────────────────────
// State machine
// ──────────────────────────────────────────────

/// The workflow state machine bound to a document store and an optional
/// vault snapshot.
pub struct WorkflowEngine<S> {
    store: S,
    vault: Option<VaultRecord>,
    workflow: PacketWorkflow,
}

impl<S: DocumentStore> WorkflowEngine<S> {
    /// Create a fresh workflow: every form NotStarted in packet order,
    /// cursor on the first form, phase FillingForms. The first form is
    /// autofilled from the vault immediately so the user never types what
    /// the vault already knows.
    pub async fn start_workflow(
        id: impl Into<String>,
        user_id: impl Into<String>,
        packet_type: PacketType,
        config: PacketConfig,
        store: S,
        vault: Option<VaultRecord>,
    ) -> Result<Self, WorkflowError> {
        let workflow = PacketWorkflow::new(id.into(), user_id.into(), packet_type, config);
        let mut engine = WorkflowEngine {
            store,
            vault,
            workflow,
        };
        engine.apply_autofill().await?;
        tracing::debug!(
            workflow = %engine.workflow.id,
            packet = %packet_type,
            "workflow started"
        );
        Ok(engine)
    }

    /// Rebind a previously persisted workflow aggregate.
    pub fn load_workflow(workflow: PacketWorkflow, store: S, vault: Option<VaultRecord>) -> Self {
        WorkflowEngine {
            store,
            vault,
            workflow,
        }
    }

    pub fn workflow(&self) -> &PacketWorkflow {
        &self.workflow
    }

    /// Consume the engine, returning the aggregate for persistence.
    pub fn into_workflow(self) -> PacketWorkflow {
        self.workflow
    }

    fn order(&self) -> &'static [FormType] {
        self.workflow.packet_type.form_order()
    }

    pub fn current_form(&self) -> FormType {
        self.order()[self.workflow.cursor]
    }

    pub fn next_form(&self) -> Option<FormType> {
        self.order().get(self.workflow.cursor + 1).copied()
    }

    pub fn previous_form(&self) -> Option<FormType> {
        self.workflow
            .cursor
            .checked_sub(1)
            .map(|i| self.order()[i])
    }

    pub fn form_status(&self, form: FormType) -> FormStatus {
        self.workflow
            .form_statuses
            .get(&form)
            .copied()
            .unwrap_or(FormStatus::NotStarted)
    }

    fn set_status(&mut self, form: FormType, status: FormStatus) {
        self.workflow.form_statuses.insert(form, status);
        self.workflow.touch();
    }

    fn ensure_not_filed(&self) -> Result<(), WorkflowError> {
        if self.workflow.state == WorkflowState::Filed {
            return Err(WorkflowError::AlreadyFiled);
        }
        Ok(())
    }

    // ── Navigation ────────────────────────────────────────────────────────

    /// True iff a next form exists and the current form's status is
    /// strictly one of {Complete, Validated, Skipped}.
    pub fn can_transition_to_next_form(&self) -> bool {
        self.next_form().is_some() && self.form_status(self.current_form()).is_done()
    }

    /// Validate the current form, then advance.
    ///
    /// On validation failure the cursor does not move and the errors come
    /// back in the result. After the last form the packet verdict decides
    /// the phase: ReadyToFile when valid, ReviewProgress otherwise.
    pub async fn transition_to_next_form(&mut self) -> Result<ValidationResult, WorkflowError> {
        self.ensure_not_filed()?;
        // A form the user skipped stays skipped; re-validating it would
        // demand data the user declined to provide.
        let result = if self.form_status(self.current_form()) == FormStatus::Skipped {
            ValidationResult::ok()
        } else {
            self.validate_current_form().await?
        };
        if !result.valid {
            return Ok(result);
        }

        match self.next_form() {
            Some(next) => {
                self.workflow.cursor += 1;
                self.workflow.touch();
                tracing::debug!(workflow = %self.workflow.id, form = %next, "entered form");
                if self.form_status(next) == FormStatus::NotStarted {
                    self.apply_autofill().await?;
                }
                Ok(result)
            }
            None => {
                let packet_result = self.validate_packet().await?;
                self.workflow.state = if packet_result.valid {
                    WorkflowState::ReadyToFile
                } else {
                    WorkflowState::ReviewProgress
                };
                self.workflow.touch();
                tracing::debug!(
                    workflow = %self.workflow.id,
                    state = %self.workflow.state,
                    "packet reviewed"
                );
                Ok(packet_result)
            }
        }
    }

    /// Never gated on validation; users must always be able to go back and
    /// fix data. Leaving review re-opens the FillingForms phase. Fails only
    /// once the packet is filed.
    pub fn transition_to_previous_form(&mut self) -> Result<(), WorkflowError> {
        self.ensure_not_filed()?;
        if self.workflow.cursor > 0 {
            self.workflow.cursor -= 1;
        }
        if matches!(
            self.workflow.state,
            WorkflowState::ReviewProgress | WorkflowState::ReadyToFile
        ) {
            self.workflow.state = WorkflowState::FillingForms;
        }
        self.workflow.touch();
        Ok(())
    }

    /// Jump to any visited form, or at most one past the last form the
    /// user has reached. Anything further is NAVIGATION_BLOCKED.
    pub fn jump_to_form(&mut self, target: FormType) -> Result<(), WorkflowError> {
        self.ensure_not_filed()?;
        let Some(target_index) = self.workflow.packet_type.position_of(target) else {
            return Err(WorkflowError::NavigationBlocked {
                reason: format!("{} is not part of this packet", target.id()),
            });
        };

        let frontier = self
            .order()
            .iter()
            .rposition(|f| self.form_status(*f) != FormStatus::NotStarted)
            .map_or(0, |i| i + 1);
        if target_index > frontier {
            return Err(WorkflowError::NavigationBlocked {
                reason: format!(
                    "{} cannot be reached before earlier forms are started",
                    target.id()
                ),
            });
        }

        self.workflow.cursor = target_index;
        if matches!(
            self.workflow.state,
            WorkflowState::ReviewProgress | WorkflowState::ReadyToFile
        ) {
            self.workflow.state = WorkflowState::FillingForms;
        }
        self.workflow.touch();
        Ok(())
    }

    /// Mark a non-mandatory current form Skipped and advance past it.
    pub async fn skip_current_form(&mut self) -> Result<(), WorkflowError> {
        self.ensure_not_filed()?;
        let form = self.current_form();
        if packet::is_form_required(form, self.workflow.packet_type, &self.workflow.config) {
            return Err(WorkflowError::MandatorySkip {
                form,
                reason: packet::requirement_reason(form),
            });
        }
        self.set_status(form, FormStatus::Skipped);
        if self.next_form().is_some() {
            self.workflow.cursor += 1;
            if self.form_status(self.current_form()) == FormStatus::NotStarted {
                self.apply_autofill().await?;
            }
        }
        Ok(())
    }

    /// Record that a form's data was edited. A Complete or Validated form
    /// drops back to InProgress until re-validated, so its status is never
    /// stale-true.
    ///
    /// Only forms in the packet's order are accepted; `form_statuses` holds
    /// exactly one entry per form in that order, and a foreign key would
    /// survive serialization.
    pub fn record_form_edit(&mut self, form: FormType) -> Result<(), WorkflowError> {
        self.ensure_not_filed()?;
        if self.workflow.packet_type.position_of(form).is_none() {
            return Err(WorkflowError::NavigationBlocked {
                reason: format!("{} is not part of this packet", form.id()),
            });
        }
        if self.form_status(form) != FormStatus::InProgress {
            self.set_status(form, FormStatus::InProgress);
        }
        Ok(())
    }

    // ── Validation ────────────────────────────────────────────────────────

    /// Validate the current form against its catalog entry.
    ///
    /// Zero errors promotes the status to Complete, or Validated when no
    /// consistency divergence involves this form. Failure demotes to
    /// InProgress (Error when the form has no stored data at all) and the
    /// error list is returned, not raised.
    pub async fn validate_current_form(&mut self) -> Result<ValidationResult, WorkflowError> {
        self.ensure_not_filed()?;
        let form = self.current_form();
        // A stored-but-empty map counts as no data; the packet validator
        // filters empty maps the same way, so the two verdicts agree.
        let stored = self
            .store
            .get_form_data(form)
            .await?
            .filter(|data| !data.is_empty());
        let Some(data) = stored else {
            self.set_status(form, FormStatus::Error);
            let mut result = ValidationResult::ok();
            result.push_error(ValidationError::new(
                form,
                ErrorCode::FormDataMissing,
                format!("{} has no saved data", form.id()),
            ));
            return Ok(result);
        };

        let mut result = validator::validate_form_data(form, &data);
        if result.valid {
            let forms = self.load_packet_forms().await?;
            let findings = consistency::find_inconsistencies(&forms);
            let divergent_here = findings.iter().any(|f| f.involves(form));
            for finding in findings.iter().filter(|f| f.involves(form)) {
                result.push_warning(finding.to_validation_error(form));
            }
            self.set_status(
                form,
                if divergent_here {
                    FormStatus::Complete
                } else {
                    FormStatus::Validated
                },
            );
        } else {
            self.set_status(form, FormStatus::InProgress);
        }
        tracing::debug!(
            workflow = %self.workflow.id,
            form = %form,
            valid = result.valid,
            errors = result.errors.len(),
            "form validated"
        );
        Ok(result)
    }

    /// The packet verdict at the drafting boundary (divergence warns).
    pub async fn validate_packet(&self) -> Result<ValidationResult, WorkflowError> {
        let forms = self.load_packet_forms().await?;
        Ok(packet::validate_packet_data(
            self.workflow.packet_type,
            &self.workflow.config,
            &self.workflow.form_statuses,
            &forms,
            ValidationBoundary::Draft,
        ))
    }

    /// Weighted mean of per-form completion over required forms, with
    /// non-required Skipped forms excluded from the denominator.
    pub async fn packet_completion_percentage(&self) -> Result<u8, WorkflowError> {
        let forms = self.load_packet_forms().await?;
        let mut counted = 0usize;
        let mut sum = 0usize;
        for &form in self.order() {
            let required =
                packet::is_form_required(form, self.workflow.packet_type, &self.workflow.config);
            if !required && self.form_status(form) == FormStatus::Skipped {
                continue;
            }
            counted += 1;
            sum += forms
                .get(&form)
                .map_or(0, |data| validator::completion_percentage(form, data) as usize);
        }
        if counted == 0 {
            return Ok(100);
        }
        Ok((sum / counted) as u8)
    }

    /// Final packet verdict with consistency promoted to blocking; on
    /// success the workflow is retired to the terminal Filed phase.
    ///
    /// The export itself (PDF assembly, e-filing) is an external
    /// collaborator; this only guards and flips the phase.
    pub async fn mark_filed(&mut self) -> Result<ValidationResult, WorkflowError> {
        self.ensure_not_filed()?;
        if self.workflow.state != WorkflowState::ReadyToFile {
            return Err(WorkflowError::NotReadyToFile {
                state: self.workflow.state,
            });
        }
        let forms = self.load_packet_forms().await?;
        let result = packet::validate_packet_data(
            self.workflow.packet_type,
            &self.workflow.config,
            &self.workflow.form_statuses,
            &forms,
            ValidationBoundary::Filing,
        );
        self.workflow.state = if result.valid {
            WorkflowState::Filed
        } else {
            WorkflowState::ReviewProgress
        };
        self.workflow.touch();
        tracing::info!(
            workflow = %self.workflow.id,
            filed = result.valid,
            "filing verdict"
        );
        Ok(result)
    }

    // ── Internals ─────────────────────────────────────────────────────────

    async fn load_packet_forms(&self) -> Result<BTreeMap<FormType, FormData>, WorkflowError> {
        let mut forms = BTreeMap::new();
        for &form in self.order() {
            if let Some(data) = self.store.get_form_data(form).await? {
                if !data.is_empty() {
                    forms.insert(form, data);
                }
            }
        }
        Ok(forms)
    }

    /// Pre-populate the current form. Existing stored values always win
    /// over autofilled ones; autofill fills gaps, never overwrites.
    async fn apply_autofill(&mut self) -> Result<usize, WorkflowError> {
        let form = self.current_form();
        let completed = self.completed_forms().await?;
        let resolved = match &self.vault {
            Some(vault) => autofill::autofill_from_both(form, vault, &completed),
            None => autofill::autofill_from_previous_forms(form, &completed),
        };
        if resolved.fields_autofilled == 0 {
            return Ok(0);
        }

        let existing = self.store.get_form_data(form).await?.unwrap_or_default();
        let mut merged = resolved.fields;
        merged.overlay(existing);
        let written = merged.len();
        self.store.save_form_data(form, merged).await?;
        if self.form_status(form) == FormStatus::NotStarted {
            self.set_status(form, FormStatus::InProgress);
        }
        tracing::debug!(
            workflow = %self.workflow.id,
            form = %form,
            fields = resolved.fields_autofilled,
            source = resolved.source.as_str(),
            "form autofilled"
        );
        Ok(written)
    }

    /// Forms whose data can seed autofill: status done, not skipped.
    async fn completed_forms(&self) -> Result<BTreeMap<FormType, FormData>, WorkflowError> {
        let mut completed = BTreeMap::new();
        for &form in self.order() {
            let status = self.form_status(form);
            if !matches!(status, FormStatus::Complete | FormStatus::Validated) {
                continue;
            }
            if let Some(data) = self.store.get_form_data(form).await? {
                if !data.is_empty() {
                    completed.insert(form, data);
                }
            }
        }
        Ok(completed)
    }
}
