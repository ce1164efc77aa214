//! Recursive descent reader for GraphQL operation documents.
//!
//! [`Reader`] reads directly from a [`Cursor`] without a separate token
//! stream. Grammar rules each have a `read_*` method returning
//! `Result<Node, ReaderError>`; the first error aborts the whole read.
//!
//! Control flow is strictly top-down:
//!
//! ```text
//! document → operation → variable definition → type / atom → name
//!          → lexical primitives → cursor
//! ```
//!
//! Only the lexical primitives in this file (`peek_significant*`,
//! `expect_literal`, `expect_keyword`) and a handful of scanners inspect the
//! cursor; every error is built by the helpers at the bottom of this file.

mod atom;
mod name;
mod operation;
mod type_ref;

use crate::ast::Definition;
use crate::ast::Document;
use crate::char_class;
use crate::Cursor;
use crate::ReaderError;
use crate::ReaderErrorKind;
use crate::SourceSpan;
use crate::UnsupportedFeature;
use std::path::Path;

/// Knobs for a single read.
#[derive(Clone, Copy, Debug)]
pub struct ReaderOptions<'a> {
    /// Maximum nesting depth of lists, objects and list types.
    pub max_depth: usize,

    /// Path of the file being read, attached to error spans.
    pub file_path: Option<&'a Path>,
}

impl ReaderOptions<'_> {
    /// Prevents stack overflow from adversarial inputs like `[[[[[...`.
    /// 64 levels is far beyond any realistic document while staying safe
    /// even in debug builds.
    pub const DEFAULT_MAX_DEPTH: usize = 64;
}

impl Default for ReaderOptions<'_> {
    fn default() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
            file_path: None,
        }
    }
}

/// A recursive descent reader over one source text.
///
/// A reader is single-use: once a `read_*` method fails, the cursor is left
/// wherever the error was detected.
pub struct Reader<'src> {
    cursor: Cursor<'src>,

    /// Current nesting depth, shared by [`read_atom`](Self::read_atom) and
    /// [`read_type`](Self::read_type).
    depth: usize,

    max_depth: usize,
}

impl<'src> Reader<'src> {
    pub fn new(source: &'src str) -> Self {
        Self::with_options(source, ReaderOptions::default())
    }

    pub fn with_options(source: &'src str, options: ReaderOptions<'src>) -> Self {
        let cursor = match options.file_path {
            Some(path) => Cursor::with_file_path(source, path),
            None => Cursor::new(source),
        };
        Self {
            cursor,
            depth: 0,
            max_depth: options.max_depth,
        }
    }

    // =========================================================================
    // Document assembly
    // =========================================================================

    /// Reads a whole document: exactly one operation definition followed by
    /// end of input.
    pub fn read_document(&mut self) -> Result<Document, ReaderError> {
        let operation = self.read_operation_definition()?;
        log::trace!(
            "Read {} operation {:?} with {} variable definition(s).",
            operation.kind,
            operation.name,
            operation.variable_definitions.len(),
        );
        let definitions = vec![Definition::OperationDefinition(operation)];
        self.expect_no_further_definitions()?;
        Ok(Document { definitions })
    }

    /// Fails unless only ignored input remains.
    pub fn finish(&mut self) -> Result<(), ReaderError> {
        match self.peek_significant_or_eof() {
            None => Ok(()),
            Some(_) => Err(self.unexpected_char_error(&["end of input"])),
        }
    }

    fn expect_no_further_definitions(&mut self) -> Result<(), ReaderError> {
        match self.peek_significant_or_eof() {
            None => Ok(()),
            Some(ch) if ch == '{' || char_class::is_name_start(ch) => {
                let span = self.cursor.next_char_span();
                let mut error =
                    self.unsupported_error(UnsupportedFeature::MultipleDefinitions, span);
                error.add_note("only the first definition of a document is read");
                Err(error)
            },
            Some(ch) => {
                let mut error = self.unexpected_char_error(&["end of input"]);
                if char_class::is_punctuator(ch) {
                    error.add_note(format!(
                        "`{ch}` does not start a definition",
                    ));
                }
                Err(error)
            },
        }
    }

    // =========================================================================
    // Lexical primitives
    // =========================================================================

    /// Skips ignored input and peeks at the next character. End of input is
    /// an error mentioning `expected`.
    pub fn peek_significant(&mut self, expected: &str) -> Result<char, ReaderError> {
        self.cursor.skip_ignored();
        match self.cursor.peek_char() {
            Some(ch) => Ok(ch),
            None => Err(self.eof_error(&[expected])),
        }
    }

    /// Skips ignored input and peeks at the next character, returning `None`
    /// at end of input. Used to probe for optional constructs.
    pub fn peek_significant_or_eof(&mut self) -> Option<char> {
        self.cursor.skip_ignored();
        self.cursor.peek_char()
    }

    /// Skips ignored input and consumes exactly `text`.
    ///
    /// `text` is a punctuator (`"{"`) or a keyword (`"query"`); no ignored
    /// input may appear inside it. Returns the span of the consumed text.
    pub fn expect_literal(&mut self, text: &str) -> Result<SourceSpan, ReaderError> {
        self.cursor.skip_ignored();
        let start = self.cursor.position();
        for expected_ch in text.chars() {
            match self.cursor.peek_char() {
                Some(ch) if ch == expected_ch => {
                    self.cursor.consume();
                },
                _ => return Err(self.unexpected_char_error(&[text])),
            }
        }
        Ok(self.cursor.span_from(start))
    }

    /// Like [`expect_literal`](Self::expect_literal), but the keyword must
    /// not run on into a longer name: `truthy` does not match `true`.
    pub fn expect_keyword(&mut self, keyword: &str) -> Result<SourceSpan, ReaderError> {
        self.cursor.skip_ignored();
        match self.cursor.peek_name() {
            Some(word) if word == keyword => self.expect_literal(keyword),
            Some(word) => {
                // The first character where `word` stops matching `keyword`.
                let found = word
                    .chars()
                    .zip(keyword.chars())
                    .find_map(|(actual, wanted)| (actual != wanted).then_some(actual))
                    .or_else(|| word.get(keyword.len()..).and_then(|rest| rest.chars().next()))
                    .unwrap_or_else(|| word.chars().next().unwrap_or_default());
                let start = self.cursor.position();
                self.cursor.consume_while(char_class::is_name_continue);
                Err(ReaderError::new(
                    format!("expected `{keyword}`, found `{word}`"),
                    self.cursor.span_from(start),
                    ReaderErrorKind::UnexpectedCharacter {
                        expected: vec![keyword.to_string()],
                        found,
                    },
                ))
            },
            None => Err(self.unexpected_char_error(&[keyword])),
        }
    }

    /// Reads `"..."` and returns the characters between the quotes.
    ///
    /// Escape sequences are not processed: the literal ends at the first `"`
    /// after the opening one.
    pub(crate) fn read_string_literal(&mut self) -> Result<&'src str, ReaderError> {
        let open_span = self.expect_literal("\"")?;
        match self.cursor.consume_until_ascii(b'"') {
            Some(contents) => {
                self.cursor.consume();
                Ok(contents)
            },
            None => {
                let mut error = ReaderError::new(
                    "unterminated string literal",
                    open_span,
                    ReaderErrorKind::UnterminatedString,
                );
                error.add_note("reached end of input before the closing `\"`");
                Err(error)
            },
        }
    }

    /// [`peek_significant`](Self::peek_significant) inside an open
    /// delimiter: end of input reports the unclosed delimiter.
    pub(crate) fn peek_significant_in(
        &mut self,
        open_delimiter: &str,
        open_span: &SourceSpan,
    ) -> Result<char, ReaderError> {
        self.cursor.skip_ignored();
        match self.cursor.peek_char() {
            Some(ch) => Ok(ch),
            None => Err(self.unclosed_delimiter_error(open_delimiter, open_span)),
        }
    }

    // =========================================================================
    // Recursion guard
    // =========================================================================

    /// Increments the nesting depth, failing once it exceeds the limit. The
    /// caller must call `exit_recursion()` when done (use the wrapper
    /// pattern to guarantee this).
    pub(crate) fn enter_recursion(&mut self) -> Result<(), ReaderError> {
        if self.depth >= self.max_depth {
            let span = self.cursor.next_char_span();
            return Err(ReaderError::new(
                "maximum nesting depth exceeded",
                span,
                ReaderErrorKind::RecursionLimitExceeded {
                    limit: self.max_depth,
                },
            ));
        }
        self.depth += 1;
        Ok(())
    }

    pub(crate) fn exit_recursion(&mut self) {
        self.depth -= 1;
    }

    // =========================================================================
    // Error construction
    // =========================================================================

    /// An error for the character at the cursor, or an end-of-input error if
    /// there is none.
    pub(crate) fn unexpected_char_error(&self, expected: &[&str]) -> ReaderError {
        let Some(found) = self.cursor.peek_char() else {
            return self.eof_error(expected);
        };
        ReaderError::new(
            format!(
                "expected {}, found `{}`",
                describe_expected(expected),
                found.escape_debug(),
            ),
            self.cursor.next_char_span(),
            ReaderErrorKind::UnexpectedCharacter {
                expected: expected.iter().map(|s| s.to_string()).collect(),
                found,
            },
        )
    }

    pub(crate) fn eof_error(&self, expected: &[&str]) -> ReaderError {
        ReaderError::new(
            format!("expected {}, found end of input", describe_expected(expected)),
            self.cursor.next_char_span(),
            ReaderErrorKind::UnexpectedEof {
                expected: expected.iter().map(|s| s.to_string()).collect(),
            },
        )
    }

    pub(crate) fn unclosed_delimiter_error(
        &self,
        open_delimiter: &str,
        open_span: &SourceSpan,
    ) -> ReaderError {
        let mut error = ReaderError::new(
            format!("unclosed `{open_delimiter}`"),
            self.cursor.next_char_span(),
            ReaderErrorKind::UnclosedDelimiter {
                delimiter: open_delimiter.to_string(),
            },
        );
        error.add_note_with_span(
            format!("opening `{open_delimiter}` here"),
            open_span.clone(),
        );
        error
    }

    pub(crate) fn unsupported_error(
        &self,
        feature: UnsupportedFeature,
        span: SourceSpan,
    ) -> ReaderError {
        log::debug!("Rejecting unsupported syntax: {feature}.");
        ReaderError::new(
            format!("{feature} are not supported yet"),
            span,
            ReaderErrorKind::Unsupported(feature),
        )
    }
}

/// Renders `["a", "b"]` as "`a` or `b`". Descriptive entries that are not
/// literal text ("name", "value", "end of input") are left unquoted.
fn describe_expected(expected: &[&str]) -> String {
    let quoted: Vec<String> = expected
        .iter()
        .map(|item| {
            if item.contains(' ') || matches!(*item, "name" | "value" | "type") {
                item.to_string()
            } else {
                format!("`{item}`")
            }
        })
        .collect();
    quoted.join(" or ")
}
