use crate::ast::directive::append_arguments;
use crate::ast::directive::append_directives;
use crate::ast::render::key_separator;
use crate::ast::AtomObject;
use crate::ast::Directive;
use crate::ast::Render;
use inherent::inherent;

/// The `{ ... }` body of an operation.
///
/// The reader balances the braces but does not parse what is between them:
/// `selections` is always empty and the trimmed text between the braces is
/// kept verbatim in `unparsed_body`.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct SelectionSet {
    pub selections: Vec<Selection>,
    pub unparsed_body: String,
}

impl SelectionSet {
    /// A selection set whose contents were skipped over.
    pub fn unparsed(body: impl Into<String>) -> Self {
        Self {
            selections: vec![],
            unparsed_body: body.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty() && self.unparsed_body.is_empty()
    }
}

#[inherent]
impl Render for SelectionSet {
    pub fn append_rendered(&self, sink: &mut String, minify: bool) {
        if self.is_empty() {
            sink.push_str("{}");
            return;
        }
        let inner_separator = if minify { "" } else { " " };
        sink.push('{');
        sink.push_str(inner_separator);
        for (idx, selection) in self.selections.iter().enumerate() {
            if idx > 0 {
                sink.push(' ');
            }
            selection.append_rendered(sink, minify);
        }
        if !self.unparsed_body.is_empty() {
            if !self.selections.is_empty() {
                sink.push(' ');
            }
            sink.push_str(&self.unparsed_body);
        }
        // A trailing `#` comment would swallow the closing brace.
        let ends_in_comment = self
            .unparsed_body
            .lines()
            .last()
            .is_some_and(|line| line.contains('#'));
        sink.push_str(if ends_in_comment { "\n" } else { inner_separator });
        sink.push('}');
    }

    pub fn render(&self, minify: bool) -> String;
}

/// One entry of a selection set.
///
/// Only fields are modeled; fragment spreads and inline fragments are not.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum Selection {
    Field(Field),
}

#[inherent]
impl Render for Selection {
    pub fn append_rendered(&self, sink: &mut String, minify: bool) {
        match self {
            Selection::Field(field) => field.append_rendered(sink, minify),
        }
    }

    pub fn render(&self, minify: bool) -> String;
}

/// A field selection (e.g. `alias: user(id: 4) @include(if: true) { name }`).
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Field {
    pub alias: Option<String>,
    pub arguments: AtomObject,
    pub directives: Vec<Directive>,
    pub name: String,
    pub selection_set: Option<SelectionSet>,
}

#[inherent]
impl Render for Field {
    pub fn append_rendered(&self, sink: &mut String, minify: bool) {
        if let Some(alias) = &self.alias {
            sink.push_str(alias);
            sink.push_str(key_separator(minify));
        }
        sink.push_str(&self.name);
        append_arguments(&self.arguments, sink, minify);
        append_directives(&self.directives, sink, minify);
        if let Some(selection_set) = &self.selection_set {
            if !minify {
                sink.push(' ');
            }
            selection_set.append_rendered(sink, minify);
        }
    }

    pub fn render(&self, minify: bool) -> String;
}
