use crate::ast::OperationDefinition;
use crate::ast::Render;
use inherent::inherent;

/// Root AST node of a read.
///
/// Built once per [`read`](crate::read) call and owned by the caller.
/// The reader currently produces exactly one definition per document.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Document {
    pub definitions: Vec<Definition>,
}

impl Document {
    /// Iterate over the operation definitions in this document.
    pub fn operations(&self) -> impl Iterator<Item = &OperationDefinition> {
        self.definitions.iter().map(|definition| match definition {
            Definition::OperationDefinition(op) => op,
        })
    }
}

#[inherent]
impl Render for Document {
    pub fn append_rendered(&self, sink: &mut String, minify: bool) {
        let separator = if minify { " " } else { "\n\n" };
        for (idx, definition) in self.definitions.iter().enumerate() {
            if idx > 0 {
                sink.push_str(separator);
            }
            definition.append_rendered(sink, minify);
        }
    }

    pub fn render(&self, minify: bool) -> String;
}

/// A top-level definition in a [`Document`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum Definition {
    OperationDefinition(OperationDefinition),
}

#[inherent]
impl Render for Definition {
    pub fn append_rendered(&self, sink: &mut String, minify: bool) {
        match self {
            Definition::OperationDefinition(op) => op.append_rendered(sink, minify),
        }
    }

    pub fn render(&self, minify: bool) -> String;
}
