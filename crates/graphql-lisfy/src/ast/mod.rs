//! AST types produced by the reader.
//!
//! Every family of nodes is a closed enum or a plain struct; there is no
//! runtime type inspection anywhere. All node types implement [`Render`],
//! which turns a node back into text.
//!
//! Nodes own their strings, so a [`Document`] outlives the source text it
//! was read from.

mod atom;
mod directive;
mod document;
mod operation_definition;
mod render;
mod selection;
mod type_annotation;
mod value;
mod variable_definition;

pub use atom::Atom;
pub use atom::AtomObject;
pub use directive::Directive;
pub use document::Definition;
pub use document::Document;
pub use operation_definition::OperationDefinition;
pub use operation_definition::OperationKind;
pub use render::Render;
pub use selection::Field;
pub use selection::Selection;
pub use selection::SelectionSet;
pub use type_annotation::FlatTypeRef;
pub use type_annotation::TypeAnnotation;
pub use value::Value;
pub use variable_definition::VariableDefinition;
