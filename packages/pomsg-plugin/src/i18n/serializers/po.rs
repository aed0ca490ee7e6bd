//! PO Serializer Module
//!
//! gettext PO (Portable Object) catalog writer. Write-only: PO files are
//! never loaded back through this crate.

use crate::config::PoGeneratorOptions;
use crate::error::{PoError, Result, EMBEDDED_PLURAL, SELECT};
use crate::i18n::message_bundle::MessageBundle;
use crate::i18n::msg_ast::{Message, MessagePart, PluralCase, PluralCaseSpec};
use crate::i18n::serializers::indented_lines::IndentedLinesBuilder;
use crate::i18n::serializers::serializer::{xliff_datatype, Serializer};
use std::borrow::Cow;
use tracing::{debug, trace};

const INDENT_SIZE: usize = 2;
const MSGID: &str = "msgid";
const MSGID_PLURAL: &str = "msgid_plural";

/// PO catalog serializer
#[derive(Debug, Clone, Default)]
pub struct Po {
    options: PoGeneratorOptions,
}

impl Po {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: PoGeneratorOptions) -> Self {
        Po { options }
    }

    pub fn options(&self) -> &PoGeneratorOptions {
        &self.options
    }

    fn write_header(
        &self,
        ilb: &mut IndentedLinesBuilder,
        source_locale: &str,
        target_locale: Option<&str>,
    ) {
        ilb.append_line(&[MSGID, " \"\""]);
        ilb.append_line(&["msgstr \"\""]);
        ilb.append_line(&["\"Content-Type: text/plain; charset=UTF-8\\n\""]);
        ilb.append_line(&["\"X-Source-Language: ", &*escape_po(source_locale), "\\n\""]);
        if let Some(target) = target_locale {
            ilb.append_line(&["\"Language: ", &*escape_po(target), "\\n\""]);
        }
        ilb.append_blank_line();
    }

    fn write_message(&self, ilb: &mut IndentedLinesBuilder, msg: &Message) -> Result<()> {
        if !msg.description.is_empty() {
            ilb.append_line(&["# Description: ", msg.description.as_str()]);
        }
        if !msg.meaning.is_empty() {
            ilb.append_line(&["# Meaning: ", msg.meaning.as_str()]);
        }

        let id = msg.id.to_string();
        ilb.append_line(&["#: id=", id.as_str()]);
        ilb.append_line(&["#: type=", msg.content_type.as_str()]);
        trace!(
            id = msg.id,
            content_type = %msg.content_type,
            datatype = ?xliff_datatype(&msg.content_type),
            "writing PO entry"
        );

        let mut singular = String::new();
        let mut parts = msg.parts.iter();
        let mut plural = None;
        for part in parts.by_ref() {
            if let MessagePart::Plural { cases } = part {
                plural = Some(cases);
                break;
            }
            render_part(&mut singular, part, msg.id)?;
        }

        match plural {
            None => {
                ilb.append_indent()
                    .append(MSGID)
                    .append(" \"")
                    .append(&self.quote(&singular))
                    .append_line_end(&["\""]);
            }
            Some(cases) => {
                if !singular.is_empty() {
                    return Err(PoError::MalformedPluralPlacement {
                        id: msg.id,
                        found: singular,
                    });
                }
                let trailing = render_parts(parts, msg.id)?;
                if !trailing.is_empty() {
                    return Err(PoError::MalformedPluralPlacement {
                        id: msg.id,
                        found: trailing,
                    });
                }
                self.write_plural(ilb, cases, msg.id)?;
            }
        }

        ilb.append_blank_line();
        Ok(())
    }

    /// Only `{case 1}` and `{default}` have a PO counterpart. Cases are written
    /// in their source order.
    fn write_plural(
        &self,
        ilb: &mut IndentedLinesBuilder,
        cases: &[PluralCase],
        id: u64,
    ) -> Result<()> {
        for case in cases {
            let keyword = match case.spec {
                PluralCaseSpec::Explicit(1) => MSGID,
                PluralCaseSpec::Other => MSGID_PLURAL,
                spec @ PluralCaseSpec::Explicit(_) => {
                    return Err(PoError::UnsupportedPluralCase { id, case: spec });
                }
            };
            let text = render_parts(&case.parts, id)?;
            ilb.append_line_end(&[keyword, " \"", &*self.quote(&text), "\""]);
        }
        Ok(())
    }

    fn quote<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if self.options.escape_strings {
            escape_po(text)
        } else {
            Cow::Borrowed(text)
        }
    }
}

impl Serializer for Po {
    fn write(
        &self,
        bundle: &MessageBundle,
        source_locale: &str,
        target_locale: Option<&str>,
    ) -> Result<String> {
        debug!(
            messages = bundle.len(),
            source_locale,
            target_locale = ?target_locale,
            "generating PO catalog"
        );

        let mut ilb = IndentedLinesBuilder::new(INDENT_SIZE);
        if self.options.emit_header {
            self.write_header(&mut ilb, source_locale, target_locale);
        }

        for msg in bundle {
            if let Err(err) = self.write_message(&mut ilb, msg) {
                debug!(id = msg.id, error = %err, "PO generation aborted");
                return Err(err);
            }
        }

        Ok(ilb.into_string())
    }
}

/// Generate the PO catalog for `bundle` with default options.
///
/// `target_locale` does not change message entries; it is only written to the
/// header, which the default options leave out.
pub fn generate_po(
    bundle: &MessageBundle,
    source_locale: &str,
    target_locale: Option<&str>,
) -> Result<String> {
    Po::new().write(bundle, source_locale, target_locale)
}

fn render_parts<'a>(parts: impl IntoIterator<Item = &'a MessagePart>, id: u64) -> Result<String> {
    let mut out = String::new();
    for part in parts {
        render_part(&mut out, part, id)?;
    }
    Ok(out)
}

fn render_part(out: &mut String, part: &MessagePart, id: u64) -> Result<()> {
    match part {
        MessagePart::RawText { text } => out.push_str(text),
        MessagePart::Placeholder { name } => {
            out.push_str("{$");
            out.push_str(name);
            out.push('}');
        }
        MessagePart::Plural { .. } => {
            return Err(PoError::UnsupportedConstruct {
                id,
                construct: EMBEDDED_PLURAL,
            });
        }
        MessagePart::Select { .. } => {
            return Err(PoError::UnsupportedConstruct {
                id,
                construct: SELECT,
            });
        }
    }
    Ok(())
}

/// C-style escaping for the inside of a PO string literal
pub fn escape_po(text: &str) -> Cow<'_, str> {
    if !text.contains(['\\', '"', '\n', '\r', '\t']) {
        return Cow::Borrowed(text);
    }
    let mut escaped = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}
