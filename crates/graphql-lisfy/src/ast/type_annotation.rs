use crate::ast::Render;
use inherent::inherent;

/// A
/// [type reference](https://spec.graphql.org/September2025/#sec-Type-References)
/// (e.g. `Int`, `[Int]`, `[Int!]!`).
///
/// List and non-null wrappers nest arbitrarily, one node per wrapper.
/// [`flatten()`](Self::flatten) reduces the annotation to the single-level
/// [`FlatTypeRef`] shape.
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub enum TypeAnnotation {
    List(Box<TypeAnnotation>),
    Named(String),
    NonNull(Box<TypeAnnotation>),
}

impl TypeAnnotation {
    pub fn named(name: impl Into<String>) -> Self {
        TypeAnnotation::Named(name.into())
    }

    pub fn list_of(inner: TypeAnnotation) -> Self {
        TypeAnnotation::List(Box::new(inner))
    }

    pub fn non_null(inner: TypeAnnotation) -> Self {
        TypeAnnotation::NonNull(Box::new(inner))
    }

    /// The innermost named type.
    pub fn innermost_name(&self) -> &str {
        match self {
            TypeAnnotation::List(inner)
            | TypeAnnotation::NonNull(inner) => inner.innermost_name(),
            TypeAnnotation::Named(name) => name,
        }
    }

    /// Whether the outermost wrapper is `!`.
    pub fn is_non_null(&self) -> bool {
        matches!(self, TypeAnnotation::NonNull(_))
    }

    /// Whether this is a list once an outer `!` is stripped.
    pub fn is_list(&self) -> bool {
        match self {
            TypeAnnotation::List(_) => true,
            TypeAnnotation::Named(_) => false,
            TypeAnnotation::NonNull(inner) => {
                matches!(inner.as_ref(), TypeAnnotation::List(_))
            },
        }
    }

    /// Reduces this annotation to one list flag and one non-null flag.
    ///
    /// Item nullability is lost: `[Foo!]!` and `[Foo]!` flatten to the same
    /// record.
    pub fn flatten(&self) -> FlatTypeRef {
        FlatTypeRef {
            name: self.innermost_name().to_string(),
            is_list: self.is_list(),
            is_non_null: self.is_non_null(),
        }
    }
}

#[inherent]
impl Render for TypeAnnotation {
    pub fn append_rendered(&self, sink: &mut String, minify: bool) {
        match self {
            TypeAnnotation::List(inner) => {
                sink.push('[');
                inner.append_rendered(sink, minify);
                sink.push(']');
            },
            TypeAnnotation::Named(name) => sink.push_str(name),
            TypeAnnotation::NonNull(inner) => {
                inner.append_rendered(sink, minify);
                sink.push('!');
            },
        }
    }

    pub fn render(&self, minify: bool) -> String;
}

/// Single-level view of a [`TypeAnnotation`]: one name, one list flag and
/// one non-null flag for the whole reference.
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct FlatTypeRef {
    pub name: String,
    pub is_list: bool,
    pub is_non_null: bool,
}
