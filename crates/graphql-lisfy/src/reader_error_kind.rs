/// Syntax that the reader recognizes but does not handle yet.
///
/// Each variant names the exact syntactic form that triggers it, so callers
/// (and conformance tests) can tell "this document is invalid" apart from
/// "this reader doesn't support that yet".
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum UnsupportedFeature {
    /// `@` following a variable definition: `($x: Int @skip)`.
    #[error("directives on variable definitions")]
    VariableDirectives,

    /// `@` between an operation's header and its selection set:
    /// `query Foo @live { ... }`.
    #[error("directives on operation definitions")]
    OperationDirectives,

    /// A definition introduced by the `fragment` keyword.
    #[error("fragment definitions")]
    FragmentDefinitions,

    /// Another definition following the first one in a document.
    #[error("documents with more than one definition")]
    MultipleDefinitions,
}

/// Categorizes reader errors for programmatic handling.
///
/// The `#[error(...)]` messages are concise. Full human-readable messages
/// live in `ReaderError::message()`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ReaderErrorKind {
    /// Expected specific input but found a different character.
    ///
    /// ```text
    /// query Foo($x Int) { }
    ///              ^ expected `:`, found `I`
    /// ```
    #[error("unexpected character: `{found}`")]
    UnexpectedCharacter {
        expected: Vec<String>,
        found: char,
    },

    /// The input ended before a complete construct was read.
    #[error("unexpected end of input")]
    UnexpectedEof {
        expected: Vec<String>,
    },

    /// A numeric literal that parses as neither an integer nor a float.
    ///
    /// ```text
    /// 1.2.3
    /// ^^^^^ could not parse as a number
    /// ```
    #[error("invalid number: `{0}`")]
    InvalidNumber(String),

    /// A string literal without its closing `"`.
    #[error("unterminated string literal")]
    UnterminatedString,

    /// The same field name appears twice in one object literal.
    #[error("duplicate object field: `{name}`")]
    DuplicateObjectField {
        name: String,
    },

    /// A construct that must not be empty, e.g. `()` for variable
    /// definitions.
    #[error("invalid empty construct: `{construct}`")]
    InvalidEmptyConstruct {
        construct: String,
    },

    /// An opening delimiter whose closing counterpart never appears.
    #[error("unclosed delimiter: `{delimiter}`")]
    UnclosedDelimiter {
        delimiter: String,
    },

    /// Lists, objects or list types nested deeper than the configured limit.
    #[error("maximum nesting depth of {limit} exceeded")]
    RecursionLimitExceeded {
        limit: usize,
    },

    /// Recognized syntax that the reader does not handle yet.
    #[error("unsupported: {0}")]
    Unsupported(UnsupportedFeature),
}
