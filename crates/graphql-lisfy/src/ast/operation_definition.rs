use crate::ast::directive::append_directives;
use crate::ast::render::append_separated;
use crate::ast::Directive;
use crate::ast::Render;
use crate::ast::SelectionSet;
use crate::ast::VariableDefinition;
use inherent::inherent;
use std::fmt;

/// The kind of a GraphQL operation.
///
/// See
/// [Operations](https://spec.graphql.org/September2025/#sec-Language.Operations).
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, serde::Serialize)]
pub enum OperationKind {
    Mutation,
    /// Also the kind of a keyword-less operation (`{ ... }`).
    #[default]
    Query,
    Subscription,
}

impl OperationKind {
    /// The keyword that introduces an operation of this kind.
    pub fn keyword(&self) -> &'static str {
        match self {
            OperationKind::Mutation => "mutation",
            OperationKind::Query => "query",
            OperationKind::Subscription => "subscription",
        }
    }

    /// The kind introduced by `keyword`, if it is an operation keyword.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "mutation" => Some(OperationKind::Mutation),
            "query" => Some(OperationKind::Query),
            "subscription" => Some(OperationKind::Subscription),
            _ => None,
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// An operation definition (query, mutation, or subscription).
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct OperationDefinition {
    /// Always empty: directives on operations are rejected by the reader.
    pub directives: Vec<Directive>,
    pub kind: OperationKind,
    pub name: Option<String>,
    pub selection_set: SelectionSet,
    pub variable_definitions: Vec<VariableDefinition>,
}

impl OperationDefinition {
    /// Whether this operation can be written as a bare selection set
    /// (`{ ... }`) without losing information.
    pub fn is_shorthand(&self) -> bool {
        self.kind == OperationKind::Query
            && self.name.is_none()
            && self.variable_definitions.is_empty()
            && self.directives.is_empty()
    }
}

#[inherent]
impl Render for OperationDefinition {
    pub fn append_rendered(&self, sink: &mut String, minify: bool) {
        if !self.is_shorthand() {
            sink.push_str(self.kind.keyword());
            if let Some(name) = &self.name {
                sink.push(' ');
                sink.push_str(name);
            }
            if !self.variable_definitions.is_empty() {
                sink.push('(');
                append_separated(&self.variable_definitions, sink, minify);
                sink.push(')');
            }
            append_directives(&self.directives, sink, minify);
            if !minify {
                sink.push(' ');
            }
        }
        self.selection_set.append_rendered(sink, minify);
    }

    pub fn render(&self, minify: bool) -> String;
}
