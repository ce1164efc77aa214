use crate::ast::Atom;
use crate::ast::Definition;
use crate::ast::Document;
use crate::ast::Render;
use crate::ast::TypeAnnotation;
use crate::ast::VariableDefinition;
use inherent::inherent;

/// Anything the reader can produce.
///
/// This is what flows through a read-eval-print pipeline: each family of
/// nodes is one variant, and consumers match exhaustively.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum Value {
    Atom(Atom),
    Definition(Definition),
    Document(Document),
    Type(TypeAnnotation),
    VariableDefinition(VariableDefinition),
}

impl Value {
    /// Returns a short name for this value's variant, for messages and logs.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Atom(atom) => atom.kind_name(),
            Value::Definition(_) => "definition",
            Value::Document(_) => "document",
            Value::Type(_) => "type",
            Value::VariableDefinition(_) => "variable definition",
        }
    }
}

#[inherent]
impl Render for Value {
    pub fn append_rendered(&self, sink: &mut String, minify: bool) {
        match self {
            Value::Atom(v) => v.append_rendered(sink, minify),
            Value::Definition(v) => v.append_rendered(sink, minify),
            Value::Document(v) => v.append_rendered(sink, minify),
            Value::Type(v) => v.append_rendered(sink, minify),
            Value::VariableDefinition(v) => v.append_rendered(sink, minify),
        }
    }

    pub fn render(&self, minify: bool) -> String;
}

impl From<Atom> for Value {
    fn from(atom: Atom) -> Self {
        Value::Atom(atom)
    }
}

impl From<Definition> for Value {
    fn from(definition: Definition) -> Self {
        Value::Definition(definition)
    }
}

impl From<Document> for Value {
    fn from(document: Document) -> Self {
        Value::Document(document)
    }
}

impl From<TypeAnnotation> for Value {
    fn from(type_annotation: TypeAnnotation) -> Self {
        Value::Type(type_annotation)
    }
}

impl From<VariableDefinition> for Value {
    fn from(variable_definition: VariableDefinition) -> Self {
        Value::VariableDefinition(variable_definition)
    }
}
