//! Generator configuration

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Options for [`Po`](crate::Po).
///
/// The defaults reproduce the plain catalog layout: no header entry and
/// message text copied through without escaping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PoGeneratorOptions {
    /// Escape `\`, `"`, and control characters inside `msgid` strings
    pub escape_strings: bool,
    /// Write a `msgid ""` header entry carrying the locales
    pub emit_header: bool,
}

impl PoGeneratorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_escape_strings(mut self, escape_strings: bool) -> Self {
        self.escape_strings = escape_strings;
        self
    }

    pub fn with_header(mut self, emit_header: bool) -> Self {
        self.emit_header = emit_header;
        self
    }

    /// Parse options from a JSON object. Missing fields take their defaults.
    pub fn from_json(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }
}
