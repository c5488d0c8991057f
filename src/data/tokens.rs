//! Whitespace-delimited token reader over any buffered input

use anyhow::{Context, Result};
use std::collections::VecDeque;
use std::io::BufRead;
use tracing::{debug, trace};

/// Token separators: ASCII space, tab, newline, vertical tab, form feed and
/// carriage return. Unicode spaces such as U+00A0 stay inside the token.
fn is_separator(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0b'
}

/// Pulls tokens line by line, so interactive input may span several lines
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Returns the next token, or None at end of input
    pub fn next_token(&mut self) -> Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = Vec::new();
            let read = self
                .reader
                .read_until(b'\n', &mut line)
                .context("Failed to read from input")?;
            if read == 0 {
                return Ok(None);
            }
            trace!(bytes = read, "read input line");

            // Invalid UTF-8 becomes U+FFFD and simply fails validation
            let line = String::from_utf8_lossy(&line);
            self.pending.extend(
                line.split(is_separator)
                    .filter(|token| !token.is_empty())
                    .map(str::to_string),
            );
        }

        Ok(self.pending.pop_front())
    }

    /// Reads exactly `count` tokens, failing if input ends first
    pub fn take(&mut self, count: usize) -> Result<Vec<String>> {
        let mut tokens = Vec::with_capacity(count);
        while tokens.len() < count {
            match self.next_token()? {
                Some(token) => tokens.push(token),
                None => anyhow::bail!(
                    "unexpected end of input: expected {} addresses, got {}",
                    count,
                    tokens.len()
                ),
            }
        }

        if !self.pending.is_empty() {
            debug!(ignored = self.pending.len(), "ignoring extra tokens on last line");
        }

        Ok(tokens)
    }
}
