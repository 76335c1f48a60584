use async_trait::async_trait;

use docket_core::{FormData, FormType};

use crate::error::StorageError;

/// The document-store seam the workflow engine reads and writes through.
///
/// Keyed by form type; the workflow aggregate owns the mapping from form
/// type to external document id (`form_data_refs`), so backends resolve the
/// key however their persistence layer requires.
///
/// ## Consistency
///
/// The backing store is eventually consistent and last-write-wins. The one
/// hard ordering requirement imposed on callers: a form's validation result
/// and the status write it produces must be durably applied before the
/// forward-navigation gate reads form statuses.
///
/// ## Missing data
///
/// `get_form_data` returns `Ok(None)` for a form that has never been saved;
/// absence of data is not a storage error.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Read one form's field data, or `None` if never saved.
    async fn get_form_data(&self, form: FormType) -> Result<Option<FormData>, StorageError>;

    /// Write one form's field data (last write wins).
    async fn save_form_data(&self, form: FormType, data: FormData) -> Result<(), StorageError>;
}
