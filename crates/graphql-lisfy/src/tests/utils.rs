//! Various test utils.

use crate::ast::OperationDefinition;
use crate::ReaderError;
use crate::ReaderErrorKind;
use crate::UnsupportedFeature;

/// Reads `source` as a document and returns its only operation, panicking
/// if the read fails.
pub fn read_operation(source: &str) -> OperationDefinition {
    let document = match crate::read(source) {
        Ok(document) => document,
        Err(error) => panic!(
            "Expected `{source}` to read successfully, got:\n{}",
            error.format_detailed(Some(source)),
        ),
    };
    assert_eq!(document.definitions.len(), 1);
    document.operations().next().cloned().unwrap()
}

/// Reads `source` as a document and returns the error, panicking if the
/// read succeeds.
pub fn read_error(source: &str) -> ReaderError {
    match crate::read(source) {
        Ok(document) => panic!("Expected `{source}` to fail, got: {document:?}"),
        Err(error) => error,
    }
}

/// Asserts that reading `source` fails with the given unsupported feature.
pub fn assert_unsupported(source: &str, feature: UnsupportedFeature) -> ReaderError {
    let error = read_error(source);
    assert_eq!(
        error.kind(),
        &ReaderErrorKind::Unsupported(feature),
        "unexpected error for `{source}`: {error}",
    );
    assert!(error.is_unsupported());
    error
}
