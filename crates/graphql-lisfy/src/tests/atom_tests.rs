//! Tests for reading input values ([`Atom`]s).
//!
//! Most tests go through [`crate::read_atom`], which also requires that the
//! whole input is consumed.

use crate::ast::Atom;
use crate::ast::AtomObject;
use crate::Reader;
use crate::ReaderErrorKind;
use crate::ReaderOptions;

fn atom(source: &str) -> Atom {
    match crate::read_atom(source) {
        Ok(atom) => atom,
        Err(error) => panic!(
            "Expected `{source}` to read, got:\n{}",
            error.format_detailed(Some(source)),
        ),
    }
}

fn atom_error_kind(source: &str) -> ReaderErrorKind {
    match crate::read_atom(source) {
        Ok(atom) => panic!("Expected `{source}` to fail, got: {atom:?}"),
        Err(error) => error.kind().clone(),
    }
}

// =============================================================================
// Numbers
// =============================================================================

/// Verifies that digits read as an Int.
#[test]
fn atom_int() {
    assert_eq!(atom("42"), Atom::Int(42));
    assert_eq!(atom("0"), Atom::Int(0));
}

/// Verifies that both signs are accepted on integers.
#[test]
fn atom_int_signed() {
    assert_eq!(atom("-7"), Atom::Int(-7));
    assert_eq!(atom("+5"), Atom::Int(5));
}

/// Verifies that a fractional part or exponent reads as a Float.
#[test]
fn atom_float() {
    assert_eq!(atom("-3.14"), Atom::Float(-3.14));
    assert_eq!(atom("1e3"), Atom::Float(1000.0));
    assert_eq!(atom("2.5E-1"), Atom::Float(0.25));
}

/// Verifies that an integer too large for i64 falls back to a Float.
#[test]
fn atom_int_overflow_reads_as_float() {
    assert_eq!(atom("9223372036854775808"), Atom::Float(9223372036854775808.0));
}

/// Verifies that a run of number characters that parses as neither an int
/// nor a float is an error carrying the offending text.
#[test]
fn atom_invalid_number() {
    assert_eq!(
        atom_error_kind("1.2.3"),
        ReaderErrorKind::InvalidNumber("1.2.3".to_string()),
    );
    assert_eq!(
        atom_error_kind("1-2"),
        ReaderErrorKind::InvalidNumber("1-2".to_string()),
    );
}

/// Verifies that a float overflowing to infinity is rejected.
#[test]
fn atom_float_overflow_is_invalid() {
    assert_eq!(
        atom_error_kind("1e400"),
        ReaderErrorKind::InvalidNumber("1e400".to_string()),
    );
}

/// Verifies that the span of an invalid number covers the whole run.
#[test]
fn atom_invalid_number_span() {
    let error = crate::read_atom("  1.2.3").unwrap_err();
    assert_eq!(error.span().slice("  1.2.3"), Some("1.2.3"));
}

// =============================================================================
// Strings
// =============================================================================

/// Verifies that a string literal reads as the text between the quotes.
#[test]
fn atom_string() {
    assert_eq!(atom("\"hello\""), Atom::String("hello".to_string()));
    assert_eq!(atom("\"\""), Atom::String(String::new()));
}

/// Verifies that escape sequences are kept verbatim.
#[test]
fn atom_string_escapes_are_not_processed() {
    assert_eq!(atom(r#""a\nb""#), Atom::String(r"a\nb".to_string()));
}

/// Verifies that a string may contain braces, commas and `#`.
#[test]
fn atom_string_with_syntax_characters() {
    assert_eq!(atom("\"{a, #b}\""), Atom::String("{a, #b}".to_string()));
}

/// Verifies that a string without its closing quote is an error spanning
/// the opening quote.
#[test]
fn atom_unterminated_string() {
    let error = crate::read_atom("  \"hello").unwrap_err();
    assert_eq!(error.kind(), &ReaderErrorKind::UnterminatedString);
    assert_eq!(error.span().start_inclusive.byte_offset(), 2);
    assert_eq!(error.notes().len(), 1);
}

// =============================================================================
// Keywords and enums
// =============================================================================

/// Verifies the three keyword literals.
#[test]
fn atom_keywords() {
    assert_eq!(atom("true"), Atom::Boolean(true));
    assert_eq!(atom("false"), Atom::Boolean(false));
    assert_eq!(atom("null"), Atom::Null);
}

/// Verifies that a partial keyword match is an error rather than an Enum.
#[test]
fn atom_partial_keyword_is_error() {
    let error = crate::read_atom("truthy").unwrap_err();
    assert!(matches!(
        error.kind(),
        ReaderErrorKind::UnexpectedCharacter { found: 't', .. },
    ));
    assert_eq!(error.message(), "expected `true`, found `truthy`");
    assert_eq!(error.span().slice("truthy"), Some("truthy"));
    assert!(!error.notes().is_empty());
}

/// Verifies that a keyword running on into a longer name is rejected.
#[test]
fn atom_keyword_prefix_is_error() {
    let error = crate::read_atom("nullable").unwrap_err();
    assert_eq!(
        error.kind(),
        &ReaderErrorKind::UnexpectedCharacter {
            expected: vec!["null".to_string()],
            found: 'a',
        },
    );
    assert_eq!(error.span().slice("nullable"), Some("nullable"));
}

/// Verifies that a bareword starting with `t`, `f` or `n` is never an enum.
#[test]
fn atom_keyword_letters_never_read_as_enum() {
    for source in ["nope", "fast", "tall", "nullable"] {
        let kind = atom_error_kind(source);
        assert!(
            matches!(kind, ReaderErrorKind::UnexpectedCharacter { .. }),
            "`{source}` gave {kind:?}",
        );
    }
}

/// Verifies the bareword fallback.
#[test]
fn atom_enum() {
    assert_eq!(atom("FOO"), Atom::Enum("FOO".to_string()));
    assert_eq!(atom("_private"), Atom::Enum("_private".to_string()));
    assert_eq!(atom("RED_2"), Atom::Enum("RED_2".to_string()));
}

/// Verifies that a character that cannot start any value is an error.
#[test]
fn atom_unexpected_character() {
    let error = crate::read_atom(")").unwrap_err();
    assert_eq!(
        error.kind(),
        &ReaderErrorKind::UnexpectedCharacter {
            expected: vec!["value".to_string()],
            found: ')',
        },
    );
    assert_eq!(error.message(), "expected value, found `)`");
}

/// Verifies that empty input is an end-of-input error.
#[test]
fn atom_empty_input() {
    assert!(matches!(
        atom_error_kind("   "),
        ReaderErrorKind::UnexpectedEof { .. },
    ));
}

// =============================================================================
// Lists
// =============================================================================

/// Verifies nested lists with comma and whitespace separators.
#[test]
fn atom_nested_list() {
    assert_eq!(
        atom("[1, 2, [3]]"),
        Atom::List(vec![
            Atom::Int(1),
            Atom::Int(2),
            Atom::List(vec![Atom::Int(3)]),
        ]),
    );
}

/// Verifies that commas are optional and may repeat.
#[test]
fn atom_list_commas_are_ignored() {
    assert_eq!(atom("[1 2,,3,]"), atom("[1, 2, 3]"));
}

/// Verifies that an empty list is legal.
#[test]
fn atom_empty_list() {
    assert_eq!(atom("[]"), Atom::List(vec![]));
    assert_eq!(atom("[ , ]"), Atom::List(vec![]));
}

/// Verifies that an unclosed list reports the delimiter with a note at the
/// opening bracket.
#[test]
fn atom_unclosed_list() {
    let error = crate::read_atom("[1, 2").unwrap_err();
    assert_eq!(
        error.kind(),
        &ReaderErrorKind::UnclosedDelimiter {
            delimiter: "[".to_string(),
        },
    );
    let note = &error.notes()[0];
    assert_eq!(note.message, "opening `[` here");
    assert_eq!(
        note.span.as_ref().map(|span| span.start_inclusive.byte_offset()),
        Some(0),
    );
}

// =============================================================================
// Objects
// =============================================================================

/// Verifies that an object keeps its fields in source order.
#[test]
fn atom_object() {
    let mut expected = AtomObject::new();
    expected.insert("b".to_string(), Atom::String("x".to_string()));
    expected.insert("a".to_string(), Atom::Int(1));

    let Atom::Object(fields) = atom("{b: \"x\", a: 1}") else {
        panic!("expected an object");
    };
    assert_eq!(fields, expected);
    assert_eq!(
        fields.keys().collect::<Vec<_>>(),
        vec!["b", "a"],
    );
}

/// Verifies that an empty object is legal.
#[test]
fn atom_empty_object() {
    assert_eq!(atom("{}"), Atom::Object(AtomObject::new()));
}

/// Verifies nesting of objects inside lists and vice versa.
#[test]
fn atom_object_nesting() {
    let Atom::Object(fields) = atom("{list: [{inner: null}], flag: false}") else {
        panic!("expected an object");
    };
    let Some(Atom::List(items)) = fields.get("list") else {
        panic!("expected a list under `list`");
    };
    let Atom::Object(inner) = &items[0] else {
        panic!("expected an object in the list");
    };
    assert_eq!(inner.get("inner"), Some(&Atom::Null));
    assert_eq!(fields.get("flag"), Some(&Atom::Boolean(false)));
}

/// Verifies that a repeated key is rejected with a note pointing at the
/// first occurrence.
#[test]
fn atom_object_duplicate_key() {
    let source = "{a: 1, a: 2}";
    let error = crate::read_atom(source).unwrap_err();
    assert_eq!(
        error.kind(),
        &ReaderErrorKind::DuplicateObjectField {
            name: "a".to_string(),
        },
    );
    assert_eq!(error.span().start_inclusive.byte_offset(), 7);
    let first = error.notes()[0].span.as_ref().unwrap();
    assert_eq!(first.start_inclusive.byte_offset(), 1);
    assert_eq!(first.slice(source), Some("a"));
}

/// Verifies that a missing `:` inside an object is an error naming `:`.
#[test]
fn atom_object_missing_colon() {
    let kind = atom_error_kind("{a 1}");
    assert_eq!(
        kind,
        ReaderErrorKind::UnexpectedCharacter {
            expected: vec![":".to_string()],
            found: '1',
        },
    );
}

/// Verifies that an object key must be a name.
#[test]
fn atom_object_key_must_be_name() {
    assert!(matches!(
        atom_error_kind("{\"a\": 1}"),
        ReaderErrorKind::UnexpectedCharacter { found: '"', .. },
    ));
}

// =============================================================================
// Nesting limit and trailing input
// =============================================================================

/// Verifies that nesting beyond the configured depth is rejected instead of
/// overflowing the stack.
#[test]
fn atom_recursion_limit() {
    let source = "[".repeat(200);
    assert_eq!(
        atom_error_kind(&source),
        ReaderErrorKind::RecursionLimitExceeded {
            limit: ReaderOptions::DEFAULT_MAX_DEPTH,
        },
    );
}

/// Verifies that nesting right up to a custom limit still reads.
#[test]
fn atom_recursion_limit_is_configurable() {
    let options = ReaderOptions {
        max_depth: 3,
        ..ReaderOptions::default()
    };
    assert!(Reader::with_options("[[1]]", options).read_atom().is_ok());
    let error = Reader::with_options("[[[1]]]", options).read_atom().unwrap_err();
    assert_eq!(
        error.kind(),
        &ReaderErrorKind::RecursionLimitExceeded { limit: 3 },
    );
}

/// Verifies that `read_atom` rejects input after the value.
#[test]
fn atom_trailing_input() {
    assert_eq!(
        atom_error_kind("1 2"),
        ReaderErrorKind::UnexpectedCharacter {
            expected: vec!["end of input".to_string()],
            found: '2',
        },
    );
}

/// Verifies that a [`Reader`] can read several values back to back.
#[test]
fn atom_reader_reads_successive_values() {
    let mut reader = Reader::new("1 \"two\" THREE");
    assert_eq!(reader.read_atom().unwrap(), Atom::Int(1));
    assert_eq!(reader.read_atom().unwrap(), Atom::String("two".to_string()));
    assert_eq!(reader.read_atom().unwrap(), Atom::Enum("THREE".to_string()));
    assert!(reader.finish().is_ok());
}
