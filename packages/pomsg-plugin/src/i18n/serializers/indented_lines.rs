//! Indented Lines Builder
//!
//! A text buffer that writes whole lines at the current indentation level

use std::fmt;

const INDENT_WITH: &str = " ";

/// Line-oriented output buffer.
///
/// Lines written with [`append_line`](Self::append_line) are prefixed with
/// `indent * indent_size` spaces. Raw appends and line ends never indent.
#[derive(Debug, Clone, Default)]
pub struct IndentedLinesBuilder {
    buffer: String,
    indent_size: usize,
    indent: usize,
}

impl IndentedLinesBuilder {
    pub fn new(indent_size: usize) -> Self {
        IndentedLinesBuilder {
            buffer: String::new(),
            indent_size,
            indent: 0,
        }
    }

    pub fn indent_size(&self) -> usize {
        self.indent_size
    }

    pub fn indent(&self) -> usize {
        self.indent
    }

    pub fn inc_indent(&mut self) {
        self.indent += 1;
    }

    /// No-op at level zero
    pub fn dec_indent(&mut self) {
        self.indent = self.indent.saturating_sub(1);
    }

    /// Append the current indentation without ending a line
    pub fn append_indent(&mut self) -> &mut Self {
        let width = self.indent * self.indent_size;
        self.buffer.push_str(&INDENT_WITH.repeat(width));
        self
    }

    /// Append raw text with no indentation and no line end
    pub fn append(&mut self, part: &str) -> &mut Self {
        self.buffer.push_str(part);
        self
    }

    /// Append an indented line made of `parts`
    pub fn append_line(&mut self, parts: &[&str]) -> &mut Self {
        self.append_indent();
        self.append_line_end(parts)
    }

    /// Append `parts` and terminate the current line
    pub fn append_line_end(&mut self, parts: &[&str]) -> &mut Self {
        for part in parts {
            self.buffer.push_str(part);
        }
        self.buffer.push('\n');
        self
    }

    /// Terminate the current line with nothing else on it
    pub fn append_blank_line(&mut self) -> &mut Self {
        self.append_line_end(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn into_string(self) -> String {
        self.buffer
    }
}

impl fmt::Display for IndentedLinesBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buffer)
    }
}
