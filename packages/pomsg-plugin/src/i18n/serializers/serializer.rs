//! Serializer Module
//!
//! Base trait for catalog serializers and shared content-type metadata

use crate::error::Result;
use crate::i18n::message_bundle::MessageBundle;
use indexmap::IndexMap;
use once_cell::sync::Lazy;

/// Base trait for catalog serializers
pub trait Serializer {
    /// Serialize every message of the bundle, in bundle order.
    ///
    /// Fails as a whole: either the full catalog is returned or an error.
    fn write(
        &self,
        bundle: &MessageBundle,
        source_locale: &str,
        target_locale: Option<&str>,
    ) -> Result<String>;
}

/// Content types with a known XLIFF `datatype` value
static CONTENT_TYPE_TO_XLIFF_DATATYPE: Lazy<IndexMap<&'static str, &'static str>> =
    Lazy::new(|| {
        IndexMap::from([
            ("text/plain", "plaintext"),
            ("text/html", "html"),
            ("application/xhtml+xml", "xhtml"),
            ("application/javascript", "javascript"),
            ("text/css", "css"),
            ("text/xml", "xml"),
        ])
    });

/// Map a message content type to its XLIFF datatype, if it has one
pub fn xliff_datatype(content_type: &str) -> Option<&'static str> {
    CONTENT_TYPE_TO_XLIFF_DATATYPE.get(content_type).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_known_content_types() {
        assert_eq!(xliff_datatype("text/plain"), Some("plaintext"));
        assert_eq!(xliff_datatype("text/html"), Some("html"));
        assert_eq!(xliff_datatype("application/xhtml+xml"), Some("xhtml"));
        assert_eq!(xliff_datatype("application/javascript"), Some("javascript"));
        assert_eq!(xliff_datatype("text/css"), Some("css"));
        assert_eq!(xliff_datatype("text/xml"), Some("xml"));
    }

    #[test]
    fn should_not_map_other_content_types() {
        assert_eq!(xliff_datatype("application/json"), None);
        assert_eq!(xliff_datatype("TEXT/HTML"), None);
        assert_eq!(xliff_datatype(""), None);
    }
}
