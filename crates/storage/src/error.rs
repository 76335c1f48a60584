/// All errors a DocumentStore implementation can return.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// No document ref exists for this form in the workflow's ref map.
    #[error("no document reference for form {form_id}")]
    MissingDocumentRef { form_id: String },

    /// A backend-specific storage error (connection, serialization, etc.).
    #[error("storage backend error: {0}")]
    Backend(String),
}
