//! I18n Module
//!
//! Message model, bundle container and catalog serializers

pub mod message_bundle;
pub mod msg_ast;
pub mod serializers;

// Re-export commonly used items
pub use message_bundle::MessageBundle;
pub use msg_ast::{Message, MessagePart, PluralCase, PluralCaseSpec, SelectCase};
pub use serializers::serializer::{xliff_datatype, Serializer};
pub use serializers::Po;
