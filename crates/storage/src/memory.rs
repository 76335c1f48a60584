//! In-memory DocumentStore backend for tests and embedders.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use docket_core::{FormData, FormType};

use crate::error::StorageError;
use crate::traits::DocumentStore;

/// A DocumentStore holding form data in a process-local map.
///
/// Last write wins, like the production store. Useful as the reference
/// backend in engine tests and for offline drafting sessions.
#[derive(Default)]
pub struct MemoryStore {
    forms: RwLock<BTreeMap<FormType, FormData>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }

    /// Seed a form's data outside the trait, for test setup.
    pub async fn seed(&self, form: FormType, data: FormData) {
        self.forms.write().await.insert(form, data);
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn get_form_data(&self, form: FormType) -> Result<Option<FormData>, StorageError> {
        Ok(self.forms.read().await.get(&form).cloned())
    }

    async fn save_form_data(&self, form: FormType, data: FormData) -> Result<(), StorageError> {
        self.forms.write().await.insert(form, data);
        Ok(())
    }
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
