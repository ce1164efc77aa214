use crate::ast::TypeAnnotation;
use crate::reader::Reader;
use crate::ReaderError;

impl Reader<'_> {
    /// Reads a type reference: `Name`, `[Type]`, optionally followed by `!`.
    ///
    /// A single trailing `!` is consumed; a second one is left for the caller
    /// to reject.
    pub fn read_type(&mut self) -> Result<TypeAnnotation, ReaderError> {
        self.enter_recursion()?;
        let result = self.read_type_impl();
        self.exit_recursion();
        result
    }

    fn read_type_impl(&mut self) -> Result<TypeAnnotation, ReaderError> {
        let base = if self.peek_significant("type")? == '[' {
            let open_span = self.expect_literal("[")?;
            let inner = self.read_type()?;
            self.peek_significant_in("[", &open_span)?;
            self.expect_literal("]")?;
            TypeAnnotation::list_of(inner)
        } else {
            let name = self.read_name().map_err(|mut error| {
                error.add_help("a type is a name like `Int` or a list type like `[Int]`");
                error
            })?;
            TypeAnnotation::named(name)
        };

        if self.peek_significant_or_eof() == Some('!') {
            self.expect_literal("!")?;
            return Ok(TypeAnnotation::non_null(base));
        }
        Ok(base)
    }
}
