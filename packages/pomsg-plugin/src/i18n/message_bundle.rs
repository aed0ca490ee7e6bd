//! Message Bundle Module
//!
//! An ordered container for the messages handed to a serializer

use crate::error::Result;
use crate::i18n::msg_ast::Message;
use crate::i18n::serializers::serializer::Serializer;
use serde::{Deserialize, Serialize};

/// A container for messages, kept in insertion order.
///
/// Messages are never merged or reordered: serializers see them exactly as
/// they were pushed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageBundle {
    #[serde(default)]
    locale: Option<String>,
    messages: Vec<Message>,
}

impl MessageBundle {
    pub fn new(locale: Option<String>) -> Self {
        MessageBundle {
            locale,
            messages: Vec::new(),
        }
    }

    pub fn from_messages(locale: Option<String>, messages: Vec<Message>) -> Self {
        MessageBundle { locale, messages }
    }

    /// Decode a bundle from its JSON form
    pub fn from_json(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    pub fn get_messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.messages.iter()
    }

    /// Split into two bundles at `mid`, both keeping this bundle's locale
    pub fn split_at(&self, mid: usize) -> (MessageBundle, MessageBundle) {
        let (head, tail) = self.messages.split_at(mid.min(self.messages.len()));
        (
            MessageBundle::from_messages(self.locale.clone(), head.to_vec()),
            MessageBundle::from_messages(self.locale.clone(), tail.to_vec()),
        )
    }

    /// Serialize the bundle. `source_locale` falls back to the bundle locale.
    pub fn write(
        &self,
        serializer: &dyn Serializer,
        source_locale: Option<&str>,
        target_locale: Option<&str>,
    ) -> Result<String> {
        let source_locale = source_locale.or(self.locale()).unwrap_or_default();
        serializer.write(self, source_locale, target_locale)
    }
}

impl<'a> IntoIterator for &'a MessageBundle {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}

impl Extend<Message> for MessageBundle {
    fn extend<T: IntoIterator<Item = Message>>(&mut self, iter: T) {
        self.messages.extend(iter);
    }
}

impl FromIterator<Message> for MessageBundle {
    fn from_iter<T: IntoIterator<Item = Message>>(iter: T) -> Self {
        MessageBundle::from_messages(None, iter.into_iter().collect())
    }
}
