//! Plain text output, one entry per line.

use crate::domain::AddressEntry;

/// Formats entries as `<literal>` or `<literal> Correct|Not Correct`
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn format(&self, entry: &AddressEntry) -> String {
        entry.to_string()
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}
