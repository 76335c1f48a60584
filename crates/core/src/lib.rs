//! Docket core -- domain types for packet assembly of interdependent
//! court forms.
//!
//! This crate owns the closed domain vocabulary (form kinds, packet kinds,
//! statuses, workflow phases), the per-form requirement catalog, and the
//! canonical-field alias table. Everything here is a static rule table or a
//! plain value type; the engine crate consumes these to validate, autofill,
//! and reconcile a packet. Rule tables are exhaustive matches over closed
//! enums so adding a form kind is a compile error until every table names it.

pub mod alias;
pub mod catalog;
pub mod form;
pub mod packet;
pub mod result;
pub mod value;

pub use alias::CanonicalField;
pub use catalog::{requirements, FieldGroup, FormRequirements};
pub use form::{FormStatus, FormType};
pub use packet::{PacketConfig, PacketType, WorkflowState};
pub use result::{
    AutofillResult, AutofillSource, ErrorCode, ValidationError, ValidationResult,
};
pub use value::{FieldValue, FormData};
