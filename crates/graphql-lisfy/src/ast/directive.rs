use crate::ast::render::append_fields;
use crate::ast::AtomObject;
use crate::ast::Render;
use inherent::inherent;

/// A directive annotation (e.g. `@skip(if: true)`).
///
/// The reader never produces one yet: directive syntax is rejected with
/// [`UnsupportedFeature`](crate::UnsupportedFeature) wherever it appears.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Directive {
    pub name: String,
    pub arguments: AtomObject,
}

#[inherent]
impl Render for Directive {
    pub fn append_rendered(&self, sink: &mut String, minify: bool) {
        sink.push('@');
        sink.push_str(&self.name);
        append_arguments(&self.arguments, sink, minify);
    }

    pub fn render(&self, minify: bool) -> String;
}

/// Appends `(name: value, ...)`, or nothing when there are no arguments.
pub(crate) fn append_arguments(arguments: &AtomObject, sink: &mut String, minify: bool) {
    if arguments.is_empty() {
        return;
    }
    sink.push('(');
    append_fields(arguments, sink, minify);
    sink.push(')');
}

/// Appends each directive preceded by a space.
pub(crate) fn append_directives(directives: &[Directive], sink: &mut String, minify: bool) {
    for directive in directives {
        sink.push(' ');
        directive.append_rendered(sink, minify);
    }
}
