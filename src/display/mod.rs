//! Display module for rendering address entries as text or JSON lines.
pub mod json;
pub mod text;
pub use json::*;
pub use text::*;

use crate::domain::AddressEntry;
use anyhow::Result;
use clap::ValueEnum;

/// Output format selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    /// Renders one entry as a single output line (without the newline)
    pub fn render(&self, entry: &AddressEntry) -> Result<String> {
        match self {
            Self::Text => Ok(TextFormatter::new().format(entry)),
            Self::Json => JsonFormatter::new().format(entry),
        }
    }
}
