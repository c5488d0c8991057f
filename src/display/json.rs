//! JSON output formatting, one object per line.

use crate::domain::AddressEntry;
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// JSON record for a single entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressReport {
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid: Option<bool>,
}

impl From<&AddressEntry> for AddressReport {
    fn from(entry: &AddressEntry) -> Self {
        Self {
            address: entry.literal().as_str().to_string(),
            valid: entry.validity(),
        }
    }
}

/// Formats entries as compact JSON objects
pub struct JsonFormatter;

impl JsonFormatter {
    /// Creates a new JsonFormatter instance
    pub fn new() -> Self {
        Self
    }

    pub fn format(&self, entry: &AddressEntry) -> Result<String> {
        let report = AddressReport::from(entry);
        Ok(serde_json::to_string(&report)?)
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}
