use crate::ast::directive::append_directives;
use crate::ast::render::key_separator;
use crate::ast::Atom;
use crate::ast::Directive;
use crate::ast::FlatTypeRef;
use crate::ast::Render;
use crate::ast::TypeAnnotation;
use inherent::inherent;

/// A variable definition in an operation's header (e.g. `$id: ID! = 1`).
///
/// See
/// [Variable Definitions](https://spec.graphql.org/September2025/#sec-Language.Variables).
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct VariableDefinition {
    pub default_value: Option<Atom>,
    /// Always empty: directives on variable definitions are rejected by the
    /// reader.
    pub directives: Vec<Directive>,
    /// The variable name without its leading `$`.
    pub name: String,
    pub var_type: TypeAnnotation,
}

impl VariableDefinition {
    /// The variable's type reduced to a single list flag and non-null flag.
    pub fn flat_type(&self) -> FlatTypeRef {
        self.var_type.flatten()
    }
}

#[inherent]
impl Render for VariableDefinition {
    pub fn append_rendered(&self, sink: &mut String, minify: bool) {
        sink.push('$');
        sink.push_str(&self.name);
        sink.push_str(key_separator(minify));
        self.var_type.append_rendered(sink, minify);
        if let Some(default_value) = &self.default_value {
            sink.push_str(if minify { "=" } else { " = " });
            default_value.append_rendered(sink, minify);
        }
        append_directives(&self.directives, sink, minify);
    }

    pub fn render(&self, minify: bool) -> String;
}
