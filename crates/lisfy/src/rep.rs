//! The read, eval and print stages shared by every command.
//!
//! `eval` is the identity: a read [`Value`] is printed exactly as it was
//! read.

use graphql_lisfy::ast::Value;
use graphql_lisfy::ReaderError;
use graphql_lisfy::ReaderOptions;

/// Reads one document from `source`.
pub(crate) fn read(source: &str, options: ReaderOptions<'_>) -> Result<Value, ReaderError> {
    graphql_lisfy::read_with_options(source, options).map(Value::from)
}

pub(crate) fn eval(value: Value) -> Value {
    value
}

pub(crate) fn print(value: &Value, minify: bool) -> String {
    value.render(minify)
}

/// `print(eval(read(source)))`
pub(crate) fn rep(source: &str, minify: bool) -> Result<String, ReaderError> {
    let value = eval(read(source, ReaderOptions::default())?);
    log::debug!("Evaluated a {}.", value.kind_name());
    Ok(print(&value, minify))
}

#[cfg(test)]
mod tests {
    use super::rep;
    use graphql_lisfy::ReaderErrorKind;
    use graphql_lisfy::UnsupportedFeature;

    /// Verifies that `rep` renders a document back in pretty form.
    #[test]
    fn rep_pretty() {
        assert_eq!(
            rep("query   Foo($x:Int=5){ a }", false).unwrap(),
            "query Foo($x: Int = 5) { a }",
        );
    }

    /// Verifies that `rep` honors minification.
    #[test]
    fn rep_minified() {
        assert_eq!(
            rep("mutation Like($id: ID!) { like(id: $id) }", true).unwrap(),
            "mutation Like($id:ID!){like(id: $id)}",
        );
    }

    /// Verifies that `rep` output reads back to the same output.
    #[test]
    fn rep_is_idempotent() {
        let once = rep("query Q($f: [Int!] = [1, 2]) { a }", false).unwrap();
        assert_eq!(rep(&once, false).unwrap(), once);
    }

    /// Verifies that read errors pass through untouched.
    #[test]
    fn rep_propagates_errors() {
        let error = rep("query Foo($x: Int @skip) { }", false).unwrap_err();
        assert_eq!(
            error.kind(),
            &ReaderErrorKind::Unsupported(UnsupportedFeature::VariableDirectives),
        );
    }
}
