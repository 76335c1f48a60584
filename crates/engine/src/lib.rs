//! Docket packet workflow and consistency engine.
//!
//! A packet is a set of related court forms filed together for one
//! procedural purpose. This crate decides what data must exist, where it
//! comes from, and whether it agrees -- it renders nothing and talks to no
//! network service. The pieces, leaf to root:
//!
//! - `validator` -- one form's data against its requirement catalog entry
//! - `mapper` -- pure per-form-pair field translation, plus vault → form
//! - `autofill` -- merges mapper output from multiple sources with a
//!   defined precedence (previous form beats vault)
//! - `consistency` -- finds and repairs divergent canonical-field values
//! - `packet` -- which forms the configuration makes mandatory, and the
//!   aggregated packet verdict
//! - `workflow` -- the state machine owning cursor, statuses, and phase,
//!   orchestrating everything above on each transition
//!
//! Everything is synchronous and pure except single-form document-store
//! reads/writes in `workflow`; there is no internal shared mutable state,
//! so every function is reentrant. One active editor per packet is
//! assumed; store conflict resolution belongs to the store.

pub mod autofill;
pub mod consistency;
pub mod mapper;
pub mod packet;
pub mod validator;
pub mod workflow;

pub use autofill::{
    autofill_from_both, autofill_from_previous_forms, autofill_from_vault, autofill_sources,
};
pub use consistency::{
    extract_common_values, find_inconsistencies, synchronize_common_fields, ConsistencyFinding,
};
pub use mapper::{map_between_forms, map_vault_to_form};
pub use packet::{is_form_required, validate_packet_data, ValidationBoundary};
pub use validator::{completion_percentage, is_form_complete, validate_form_data};
pub use workflow::{PacketWorkflow, WorkflowEngine, WorkflowError};
