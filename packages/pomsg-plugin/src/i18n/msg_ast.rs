//! Message AST Module
//!
//! Defines the structured messages consumed by the serializers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents a translatable message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: u64,
    /// MIME-like content type, e.g. `text/html`
    pub content_type: String,
    /// Empty when the message has no description
    #[serde(default)]
    pub description: String,
    /// Empty when the message has no meaning
    #[serde(default)]
    pub meaning: String,
    pub parts: Vec<MessagePart>,
}

impl Message {
    pub fn new(id: u64, content_type: impl Into<String>, parts: Vec<MessagePart>) -> Self {
        Message {
            id,
            content_type: content_type.into(),
            description: String::new(),
            meaning: String::new(),
            parts,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_meaning(mut self, meaning: impl Into<String>) -> Self {
        self.meaning = meaning.into();
        self
    }

    /// Whether the top level of the message holds a plural block
    pub fn is_plural(&self) -> bool {
        self.parts
            .iter()
            .any(|part| matches!(part, MessagePart::Plural { .. }))
    }
}

/// A piece of message content.
///
/// Simple messages are made of `RawText` and `Placeholder` parts only. A plural
/// message holds a single `Plural` part whose cases are simple content again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MessagePart {
    RawText { text: String },
    Placeholder { name: String },
    Plural { cases: Vec<PluralCase> },
    Select { var_name: String, cases: Vec<SelectCase> },
}

impl MessagePart {
    pub fn raw_text(text: impl Into<String>) -> Self {
        MessagePart::RawText { text: text.into() }
    }

    pub fn placeholder(name: impl Into<String>) -> Self {
        MessagePart::Placeholder { name: name.into() }
    }

    pub fn plural(cases: Vec<PluralCase>) -> Self {
        MessagePart::Plural { cases }
    }

    pub fn select(var_name: impl Into<String>, cases: Vec<SelectCase>) -> Self {
        MessagePart::Select {
            var_name: var_name.into(),
            cases,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluralCase {
    pub spec: PluralCaseSpec,
    pub parts: Vec<MessagePart>,
}

impl PluralCase {
    pub fn new(spec: PluralCaseSpec, parts: Vec<MessagePart>) -> Self {
        PluralCase { spec, parts }
    }
}

/// Selector of a plural case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PluralCaseSpec {
    /// `{case n}`
    Explicit(i64),
    /// `{default}`
    Other,
}

impl fmt::Display for PluralCaseSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PluralCaseSpec::Explicit(value) => write!(f, "case {}", value),
            PluralCaseSpec::Other => f.write_str("default"),
        }
    }
}

/// A case of a select block. `value` is `None` for the default case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectCase {
    #[serde(default)]
    pub value: Option<String>,
    pub parts: Vec<MessagePart>,
}

impl SelectCase {
    pub fn new(value: Option<String>, parts: Vec<MessagePart>) -> Self {
        SelectCase { value, parts }
    }
}
