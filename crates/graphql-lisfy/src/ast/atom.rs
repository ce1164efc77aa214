use crate::ast::render::append_fields;
use crate::ast::render::append_separated;
use crate::ast::Render;
use indexmap::IndexMap;
use inherent::inherent;

/// Field name → value mapping of an object literal.
///
/// Keys are unique and keep the order they were written in.
pub type AtomObject = IndexMap<String, Atom>;

/// A literal value.
///
/// See
/// [Input Values](https://spec.graphql.org/September2025/#sec-Input-Values).
/// Variable references (`$name`) are not atoms: only constant values are
/// read.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum Atom {
    Boolean(bool),
    /// A bareword that is not `true`, `false` or `null`.
    Enum(String),
    Float(f64),
    Int(i64),
    List(Vec<Atom>),
    Null,
    Object(AtomObject),
    /// The raw characters between the quotes. Escape sequences are not
    /// processed, so a string can never contain `"`.
    String(String),
}

impl Atom {
    /// Returns a short name for this atom's variant, for messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Atom::Boolean(_) => "boolean",
            Atom::Enum(_) => "enum",
            Atom::Float(_) => "float",
            Atom::Int(_) => "int",
            Atom::List(_) => "list",
            Atom::Null => "null",
            Atom::Object(_) => "object",
            Atom::String(_) => "string",
        }
    }
}

#[inherent]
impl Render for Atom {
    pub fn append_rendered(&self, sink: &mut String, minify: bool) {
        match self {
            Atom::Boolean(true) => sink.push_str("true"),
            Atom::Boolean(false) => sink.push_str("false"),
            Atom::Enum(name) => sink.push_str(name),
            // `Debug` always keeps a `.` or an exponent, so the text reads
            // back as a float rather than an int.
            Atom::Float(value) => sink.push_str(&format!("{value:?}")),
            Atom::Int(value) => sink.push_str(&value.to_string()),
            Atom::List(items) => {
                sink.push('[');
                append_separated(items, sink, minify);
                sink.push(']');
            },
            Atom::Null => sink.push_str("null"),
            Atom::Object(fields) => {
                sink.push('{');
                append_fields(fields, sink, minify);
                sink.push('}');
            },
            Atom::String(value) => {
                sink.push('"');
                sink.push_str(value);
                sink.push('"');
            },
        }
    }

    pub fn render(&self, minify: bool) -> String;
}
