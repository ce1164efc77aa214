use crate::ErrorNote;
use crate::ErrorNoteKind;
use crate::ErrorNotes;
use crate::ReaderErrorKind;
use crate::SourceSpan;
use crate::UnsupportedFeature;

/// A reader error with location information and contextual notes.
///
/// Reading stops at the first error: there is no recovery and no partial
/// AST.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{}", self.format_oneline())]
pub struct ReaderError {
    /// Human-readable primary error message.
    ///
    /// Examples: "expected `:`, found `I`", "unclosed `{`"
    message: String,

    /// Where the error was detected.
    ///
    /// - For "unexpected character" errors: the offending character
    /// - For end-of-input errors: the (empty) span at the end of the source
    span: SourceSpan,

    kind: ReaderErrorKind,

    notes: ErrorNotes,
}

impl ReaderError {
    /// Creates a new reader error with no notes.
    pub fn new(
        message: impl Into<String>,
        span: SourceSpan,
        kind: ReaderErrorKind,
    ) -> Self {
        Self {
            message: message.into(),
            span,
            kind,
            notes: ErrorNotes::new(),
        }
    }

    /// Returns the human-readable error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the span where the error was detected.
    pub fn span(&self) -> &SourceSpan {
        &self.span
    }

    /// Returns the categorized error kind.
    pub fn kind(&self) -> &ReaderErrorKind {
        &self.kind
    }

    /// Returns the additional notes for this error.
    pub fn notes(&self) -> &ErrorNotes {
        &self.notes
    }

    /// Returns `true` when the input used recognized-but-unhandled syntax,
    /// as opposed to being malformed.
    pub fn is_unsupported(&self) -> bool {
        matches!(self.kind, ReaderErrorKind::Unsupported(_))
    }

    /// Returns the unsupported feature this error reports, if any.
    pub fn unsupported_feature(&self) -> Option<UnsupportedFeature> {
        match self.kind {
            ReaderErrorKind::Unsupported(feature) => Some(feature),
            _ => None,
        }
    }

    /// Adds a general note without a span.
    pub fn add_note(&mut self, message: impl Into<String>) {
        self.notes.push(ErrorNote::general(message));
    }

    /// Adds a general note pointing at a related location.
    pub fn add_note_with_span(&mut self, message: impl Into<String>, span: SourceSpan) {
        self.notes.push(ErrorNote::general_with_span(message, span));
    }

    /// Adds a help note.
    pub fn add_help(&mut self, message: impl Into<String>) {
        self.notes.push(ErrorNote::help(message));
    }

    /// Formats this error as a diagnostic string for CLI output.
    ///
    /// Produces output like:
    /// ```text
    /// error: expected `:`, found `I`
    ///   --> <input>:1:14
    ///    |
    ///  1 | query Foo($x Int) { }
    ///    |              ^
    ///    = help: variable definitions look like `$name: Type`
    /// ```
    ///
    /// When `source` is `None` the snippet is omitted but the line/column
    /// are still shown.
    pub fn format_detailed(&self, source: Option<&str>) -> String {
        let mut output = String::new();

        output.push_str("error: ");
        output.push_str(&self.message);
        output.push('\n');

        let line = self.span.start_inclusive.line() + 1;
        let column = self.span.start_inclusive.col_utf8() + 1;
        output.push_str(&format!(
            "  --> {}:{line}:{column}\n",
            self.span.file_display_name(),
        ));

        if let Some(src) = source
            && let Some(snippet) = Self::format_snippet(src, &self.span, '^')
        {
            output.push_str(&snippet);
        }

        for note in &self.notes {
            let prefix = match note.kind {
                ErrorNoteKind::General => "note",
                ErrorNoteKind::Help => "help",
            };
            output.push_str(&format!("   = {prefix}: {}\n", note.message));

            if let (Some(note_span), Some(src)) = (&note.span, source)
                && let Some(snippet) = Self::format_snippet(src, note_span, '-')
            {
                output.push_str(&snippet);
            }
        }

        output
    }

    /// Formats this error as a single-line summary.
    ///
    /// ```text
    /// query.graphql:5:12: error: expected `:`, found `I`
    /// ```
    pub fn format_oneline(&self) -> String {
        let line = self.span.start_inclusive.line() + 1;
        let column = self.span.start_inclusive.col_utf8() + 1;
        format!(
            "{}:{line}:{column}: error: {}",
            self.span.file_display_name(),
            self.message,
        )
    }

    fn format_snippet(source: &str, span: &SourceSpan, marker: char) -> Option<String> {
        let line_num = span.start_inclusive.line();
        let line_content = source.lines().nth(line_num)?;
        let display_line_num = line_num + 1;
        let line_num_width = display_line_num.to_string().len().max(2);

        let mut output = String::new();
        output.push_str(&format!("{:>width$} |\n", "", width = line_num_width));
        output.push_str(&format!(
            "{display_line_num:>line_num_width$} | {line_content}\n"
        ));

        let col_start = span.start_inclusive.col_utf8();
        let underline_len =
            if span.end_exclusive.line() == line_num
                && span.end_exclusive.col_utf8() > col_start {
                span.end_exclusive.col_utf8() - col_start
            } else {
                1
            };
        output.push_str(&format!(
            "{:>width$} | {:>padding$}{}\n",
            "",
            "",
            marker.to_string().repeat(underline_len),
            width = line_num_width,
            padding = col_start,
        ));

        Some(output)
    }
}
