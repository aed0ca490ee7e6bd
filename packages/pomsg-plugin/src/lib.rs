#![deny(clippy::all)]

/**
 * PO Message Plugin
 *
 * Writes structured message bundles as gettext PO catalogs
 */

pub mod config;
pub mod error;
pub mod i18n;

// Re-exports
pub use config::PoGeneratorOptions;
pub use error::{PoError, Result};
pub use i18n::serializers::po::{generate_po, Po};
pub use i18n::{Message, MessageBundle, MessagePart, PluralCase, PluralCaseSpec, SelectCase};
