//! Error types for PO generation

use crate::i18n::msg_ast::PluralCaseSpec;
use thiserror::Error;

/// Errors raised while writing a bundle.
///
/// Every variant aborts the whole bundle; no partial catalog is returned.
#[derive(Error, Debug)]
pub enum PoError {
    /// An embedded plural or a select block was found
    #[error("PO generation does not support {construct} (message id={id})")]
    UnsupportedConstruct { id: u64, construct: &'static str },

    /// Content was found next to the plural block of a message
    #[error(
        "No message content is allowed before or after a plural block. Found: {found} (message id={id})"
    )]
    MalformedPluralPlacement { id: u64, found: String },

    /// A plural case other than `{case 1}` and `{default}`
    #[error(
        "PO only supports singular and plural variants, {{case 1}} and {{default}}, respectively. Found: {{{case}}} (message id={id})"
    )]
    UnsupportedPluralCase { id: u64, case: PluralCaseSpec },

    /// A bundle or options document could not be decoded
    #[error("Invalid JSON input: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

pub(crate) const EMBEDDED_PLURAL: &str = "embedded plural";
pub(crate) const SELECT: &str = "select blocks";

/// Result type for PO operations
pub type Result<T> = std::result::Result<T, PoError>;
