//! The personal-data store ("vault") record.

use serde::{Deserialize, Serialize};

/// A flat snapshot of the user's personal-data store.
///
/// Read-only input to the autofill resolver. Every field is optional; the
/// mapper emits only destination keys whose vault source is actually
/// present, never defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultRecord {
    pub full_name: Option<String>,
    pub address_street: Option<String>,
    pub address_city: Option<String>,
    pub address_state: Option<String>,
    pub address_zip: Option<String>,
    pub telephone: Option<String>,
    pub email: Option<String>,
    pub county: Option<String>,
    pub date_of_birth: Option<String>,
    pub attorney_name: Option<String>,
    pub attorney_bar_number: Option<String>,
}

impl VaultRecord {
    /// The street/city/state/zip parts joined into one mailing-address
    /// line, or `None` when no part is present.
    pub fn mailing_address(&self) -> Option<String> {
        let parts: Vec<&str> = [
            self.address_street.as_deref(),
            self.address_city.as_deref(),
            self.address_state.as_deref(),
            self.address_zip.as_deref(),
        ]
        .into_iter()
        .flatten()
        .filter(|s| !s.trim().is_empty())
        .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
