//! A character-level reader for GraphQL operation documents.
//!
//! The reader turns the text of a single operation definition into a typed
//! AST ([`ast::Document`]) that can be rendered back out through
//! [`ast::Render`]. It reads straight from a [`Cursor`] without a separate
//! tokenizer and stops at the first [`ReaderError`].
//!
//! ```
//! use graphql_lisfy::ast::OperationKind;
//!
//! let doc = graphql_lisfy::read("query Foo($id: ID! = 4) { user { name } }")?;
//! let op = doc.operations().next().unwrap();
//! assert_eq!(op.kind, OperationKind::Query);
//! assert_eq!(op.name.as_deref(), Some("Foo"));
//! assert_eq!(op.variable_definitions[0].name, "id");
//! # Ok::<(), graphql_lisfy::ReaderError>(())
//! ```
//!
//! Selection sets are balanced but not parsed: their contents are kept as
//! text. Directives, fragments and multi-definition documents are rejected
//! with [`ReaderErrorKind::Unsupported`].

pub mod ast;
pub mod char_class;
mod cursor;
mod error_note;
pub mod reader;
mod reader_error;
mod reader_error_kind;
mod source_position;
mod source_span;

pub use cursor::Cursor;
pub use error_note::ErrorNote;
pub use error_note::ErrorNoteKind;
pub use error_note::ErrorNotes;
pub use reader::Reader;
pub use reader::ReaderOptions;
pub use reader_error::ReaderError;
pub use reader_error_kind::ReaderErrorKind;
pub use reader_error_kind::UnsupportedFeature;
pub use source_position::SourcePosition;
pub use source_span::SourceSpan;

/// Reads a document made of exactly one operation definition.
pub fn read(source: &str) -> Result<ast::Document, ReaderError> {
    read_with_options(source, ReaderOptions::default())
}

/// [`read`] with explicit [`ReaderOptions`].
pub fn read_with_options<'src>(
    source: &'src str,
    options: ReaderOptions<'src>,
) -> Result<ast::Document, ReaderError> {
    Reader::with_options(source, options).read_document()
}

/// Reads a single value (e.g. `[1, {a: "b"}]`) spanning all of `source`.
pub fn read_atom(source: &str) -> Result<ast::Atom, ReaderError> {
    let mut reader = Reader::new(source);
    let atom = reader.read_atom()?;
    reader.finish()?;
    Ok(atom)
}

/// Reads a single type reference (e.g. `[Int!]!`) spanning all of `source`.
pub fn read_type(source: &str) -> Result<ast::TypeAnnotation, ReaderError> {
    let mut reader = Reader::new(source);
    let type_annotation = reader.read_type()?;
    reader.finish()?;
    Ok(type_annotation)
}

#[cfg(test)]
mod tests;
