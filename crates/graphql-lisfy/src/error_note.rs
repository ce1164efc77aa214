use crate::SourceSpan;
use smallvec::SmallVec;

/// The kind of an error note (determines how the note is rendered).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorNoteKind {
    /// General context about the error.
    ///
    /// Rendered as `= note: ...` in CLI output.
    /// Example: "opening `{` here" (with span pointing to the opener)
    General,

    /// Actionable suggestion for fixing the error.
    ///
    /// Rendered as `= help: ...` in CLI output.
    Help,
}

/// An error note providing additional context about a [`ReaderError`].
///
/// [`ReaderError`]: crate::ReaderError
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorNote {
    pub kind: ErrorNoteKind,
    pub message: String,

    /// Optional span pointing to a related location.
    pub span: Option<SourceSpan>,
}

impl ErrorNote {
    /// Creates a general note without a span.
    pub fn general(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorNoteKind::General,
            message: message.into(),
            span: None,
        }
    }

    /// Creates a general note with a span.
    pub fn general_with_span(message: impl Into<String>, span: SourceSpan) -> Self {
        Self {
            kind: ErrorNoteKind::General,
            message: message.into(),
            span: Some(span),
        }
    }

    /// Creates a help note without a span.
    pub fn help(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorNoteKind::Help,
            message: message.into(),
            span: None,
        }
    }
}

/// Most errors carry 0-2 notes.
pub type ErrorNotes = SmallVec<[ErrorNote; 2]>;
