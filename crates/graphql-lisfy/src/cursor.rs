//! A single-character-lookahead view over source text.
//!
//! [`Cursor`] is the only type that inspects or advances over raw input.
//! Everything above it (the lexical primitives and the grammar in
//! [`crate::reader`]) goes through its methods, so position tracking lives in
//! exactly one place.

use crate::char_class;
use crate::SourcePosition;
use crate::SourceSpan;
use std::path::Path;

pub struct Cursor<'src> {
    source: &'src str,

    /// The remaining text is `&source[curr_byte_offset..]`.
    curr_byte_offset: usize,

    curr_line: usize,

    /// Counts characters, not bytes: "🎉" (4 bytes) advances this by 1.
    curr_col_utf8: usize,

    /// "🎉" (U+1F389, a surrogate pair) advances this by 2.
    curr_col_utf16: usize,

    /// Set after `\r` so that a following `\n` does not count as a second
    /// line break.
    last_char_was_cr: bool,

    file_path: Option<&'src Path>,
}

impl<'src> Cursor<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            curr_byte_offset: 0,
            curr_line: 0,
            curr_col_utf8: 0,
            curr_col_utf16: 0,
            last_char_was_cr: false,
            file_path: None,
        }
    }

    /// Creates a cursor whose spans carry `path`.
    pub fn with_file_path(source: &'src str, path: &'src Path) -> Self {
        Self {
            file_path: Some(path),
            ..Self::new(source)
        }
    }

    // =========================================================================
    // Position helpers
    // =========================================================================

    /// The full source text this cursor reads from.
    pub fn source(&self) -> &'src str {
        self.source
    }

    /// The text not consumed yet.
    pub fn remaining(&self) -> &'src str {
        &self.source[self.curr_byte_offset..]
    }

    pub fn is_at_end(&self) -> bool {
        self.curr_byte_offset >= self.source.len()
    }

    pub fn position(&self) -> SourcePosition {
        SourcePosition::new(
            self.curr_line,
            self.curr_col_utf8,
            self.curr_col_utf16,
            self.curr_byte_offset,
        )
    }

    /// A span from `start` up to the current position.
    pub fn span_from(&self, start: SourcePosition) -> SourceSpan {
        let end = self.position();
        match self.file_path {
            Some(path) => SourceSpan::with_file(start, end, path.to_path_buf()),
            None => SourceSpan::new(start, end),
        }
    }

    /// A span covering the next character (or an empty span at EOF).
    pub fn next_char_span(&self) -> SourceSpan {
        let start = self.position();
        let mut end = start;
        if let Some(ch) = self.peek_char() {
            end = SourcePosition::new(
                start.line(),
                start.col_utf8() + 1,
                start.col_utf16() + ch.len_utf16(),
                start.byte_offset() + ch.len_utf8(),
            );
        }
        match self.file_path {
            Some(path) => SourceSpan::with_file(start, end, path.to_path_buf()),
            None => SourceSpan::new(start, end),
        }
    }

    // =========================================================================
    // Raw character access
    // =========================================================================

    /// Peeks at the next character without consuming it.
    pub fn peek_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Consumes the next character and updates position tracking.
    ///
    /// `\n`, `\r` and `\r\n` each count as one line terminator.
    pub fn consume(&mut self) -> Option<char> {
        let ch = self.peek_char()?;

        if ch == '\n' {
            if self.last_char_was_cr {
                self.last_char_was_cr = false;
            } else {
                self.curr_line += 1;
                self.curr_col_utf8 = 0;
                self.curr_col_utf16 = 0;
            }
        } else if ch == '\r' {
            self.curr_line += 1;
            self.curr_col_utf8 = 0;
            self.curr_col_utf16 = 0;
            self.last_char_was_cr = true;
        } else {
            self.curr_col_utf8 += 1;
            self.curr_col_utf16 += ch.len_utf16();
            self.last_char_was_cr = false;
        }

        self.curr_byte_offset += ch.len_utf8();
        Some(ch)
    }

    /// Consumes the maximal run of characters matching `pred` and returns
    /// it as a slice of the source.
    pub fn consume_while(&mut self, pred: impl Fn(char) -> bool) -> &'src str {
        let start = self.curr_byte_offset;
        while let Some(ch) = self.peek_char() {
            if !pred(ch) {
                break;
            }
            self.consume();
        }
        &self.source[start..self.curr_byte_offset]
    }

    /// Consumes everything before the next occurrence of the ASCII byte
    /// `delimiter` and returns it. The delimiter itself is left in place.
    ///
    /// Returns `None`, consuming nothing, if `delimiter` never occurs.
    pub fn consume_until_ascii(&mut self, delimiter: u8) -> Option<&'src str> {
        debug_assert!(delimiter.is_ascii());
        let len = memchr::memchr(delimiter, self.remaining().as_bytes())?;
        let start = self.curr_byte_offset;
        let end = start + len;
        // An ASCII byte never occurs inside a multi-byte character, so `end`
        // is a character boundary.
        while self.curr_byte_offset < end {
            self.consume();
        }
        Some(&self.source[start..end])
    }

    // =========================================================================
    // Lookahead beyond one character
    // =========================================================================

    /// Returns `true` if the remaining text starts with `text`.
    pub fn starts_with(&self, text: &str) -> bool {
        self.remaining().starts_with(text)
    }

    /// Returns the name that starts at the current position, without
    /// consuming it.
    pub fn peek_name(&self) -> Option<&'src str> {
        let remaining = self.remaining();
        let first = remaining.chars().next()?;
        if !char_class::is_name_start(first) {
            return None;
        }
        let len = remaining
            .find(|ch: char| !char_class::is_name_continue(ch))
            .unwrap_or(remaining.len());
        Some(&remaining[..len])
    }

    // =========================================================================
    // Ignored tokens
    // =========================================================================

    /// Skips everything GraphQL treats as insignificant between tokens:
    /// whitespace, line terminators, the BOM, commas, and `#` comments.
    pub fn skip_ignored(&mut self) {
        while let Some(ch) = self.peek_char() {
            if char_class::is_whitespace(ch) || ch == ',' {
                self.consume();
            } else if ch == '#' {
                self.skip_comment();
            } else {
                break;
            }
        }
    }

    /// Skips a `#` comment up to (not including) the end of the line.
    pub fn skip_comment(&mut self) {
        debug_assert_eq!(self.peek_char(), Some('#'));
        while let Some(ch) = self.peek_char() {
            if ch == '\n' || ch == '\r' {
                break;
            }
            self.consume();
        }
    }
}
