use crate::ast::AtomObject;

/// Trait implemented by all AST node types (and [`Value`]). Produces a
/// textual rendering of the node.
///
/// Nodes implement this via `#[inherent] impl Render`, so `render()` works
/// without importing the trait while generic code can still bound on it.
///
/// The rendering is GraphQL surface syntax:
///
/// - **Pretty** (`minify == false`): a space after `:` and `,`, between
///   header parts and before a selection set.
/// - **Minified** (`minify == true`): no optional whitespace.
///
/// Reading the rendering of an [`Atom`] yields an equal `Atom`.
///
/// [`Atom`]: crate::ast::Atom
/// [`Value`]: crate::ast::Value
pub trait Render {
    /// Append this node's rendering to `sink`.
    fn append_rendered(&self, sink: &mut String, minify: bool);

    /// Return this node's rendering as a new string.
    fn render(&self, minify: bool) -> String {
        let mut sink = String::new();
        self.append_rendered(&mut sink, minify);
        sink
    }
}

/// Separator placed between items of a list-like construct.
pub(crate) fn item_separator(minify: bool) -> &'static str {
    if minify { "," } else { ", " }
}

/// Separator placed between a key and its value (`a: 1`).
pub(crate) fn key_separator(minify: bool) -> &'static str {
    if minify { ":" } else { ": " }
}

/// Appends `items` rendered and separated by [`item_separator`].
pub(crate) fn append_separated<'a, T: Render + 'a>(
    items: impl IntoIterator<Item = &'a T>,
    sink: &mut String,
    minify: bool,
) {
    for (idx, item) in items.into_iter().enumerate() {
        if idx > 0 {
            sink.push_str(item_separator(minify));
        }
        item.append_rendered(sink, minify);
    }
}

/// Appends `name: value` pairs separated by [`item_separator`].
pub(crate) fn append_fields(
    fields: &AtomObject,
    sink: &mut String,
    minify: bool,
) {
    for (idx, (name, value)) in fields.iter().enumerate() {
        if idx > 0 {
            sink.push_str(item_separator(minify));
        }
        sink.push_str(name);
        sink.push_str(key_separator(minify));
        value.append_rendered(sink, minify);
    }
}
