use crate::ast::OperationDefinition;
use crate::ast::OperationKind;
use crate::ast::SelectionSet;
use crate::ast::VariableDefinition;
use crate::char_class;
use crate::reader::Reader;
use crate::ReaderError;
use crate::ReaderErrorKind;
use crate::UnsupportedFeature;

impl Reader<'_> {
    // =========================================================================
    // Operation definitions
    // =========================================================================

    /// Reads an operation definition:
    ///
    /// ```text
    /// [query|mutation|subscription] [Name] [( VariableDefinition+ )] { ... }
    /// ```
    ///
    /// With no keyword the operation is a query.
    pub fn read_operation_definition(&mut self) -> Result<OperationDefinition, ReaderError> {
        self.peek_significant("operation definition")?;
        let kind = self.read_operation_kind()?;
        let name = self.read_optional_name().map(str::to_string);

        let variable_definitions = match self.peek_significant_or_eof() {
            Some('(') => self.read_variable_definitions()?,
            _ => vec![],
        };

        if self.peek_significant_or_eof() == Some('@') {
            let span = self.cursor.next_char_span();
            return Err(self.unsupported_error(UnsupportedFeature::OperationDirectives, span));
        }

        let selection_set = self.read_selection_set()?;

        Ok(OperationDefinition {
            directives: vec![],
            kind,
            name,
            selection_set,
            variable_definitions,
        })
    }

    /// Consumes an operation keyword if there is one. A name that is not a
    /// keyword is left in place: it is the name of a keyword-less query.
    fn read_operation_kind(&mut self) -> Result<OperationKind, ReaderError> {
        let Some(word) = self.cursor.peek_name() else {
            return Ok(OperationKind::Query);
        };
        if word == "fragment" {
            let start = self.cursor.position();
            self.cursor.consume_while(char_class::is_name_continue);
            let span = self.cursor.span_from(start);
            return Err(self.unsupported_error(UnsupportedFeature::FragmentDefinitions, span));
        }
        match OperationKind::from_keyword(word) {
            Some(kind) => {
                self.expect_keyword(kind.keyword())?;
                Ok(kind)
            },
            None => Ok(OperationKind::Query),
        }
    }

    // =========================================================================
    // Variable definitions
    // =========================================================================

    /// Reads `( VariableDefinition+ )`.
    fn read_variable_definitions(&mut self) -> Result<Vec<VariableDefinition>, ReaderError> {
        let open_span = self.expect_literal("(")?;

        if self.peek_significant_in("(", &open_span)? == ')' {
            let close_span = self.cursor.next_char_span();
            let mut error = ReaderError::new(
                "empty variable definitions",
                close_span,
                ReaderErrorKind::InvalidEmptyConstruct {
                    construct: "()".to_string(),
                },
            );
            error.add_help("remove the parentheses or define at least one variable");
            return Err(error);
        }

        let mut definitions = vec![];
        while self.peek_significant_in("(", &open_span)? != ')' {
            definitions.push(self.read_variable_definition()?);
        }
        self.expect_literal(")")?;
        Ok(definitions)
    }

    /// Reads `$name: Type [= default]`.
    pub fn read_variable_definition(&mut self) -> Result<VariableDefinition, ReaderError> {
        self.expect_literal("$")?;
        let name = self.read_name()?.to_string();
        self.expect_literal(":").map_err(|mut error| {
            error.add_help("variable definitions look like `$name: Type`");
            error
        })?;
        let var_type = self.read_type()?;

        let default_value = if self.peek_significant_or_eof() == Some('=') {
            self.expect_literal("=")?;
            Some(self.read_atom()?)
        } else {
            None
        };

        if self.peek_significant_or_eof() == Some('@') {
            let span = self.cursor.next_char_span();
            return Err(self.unsupported_error(UnsupportedFeature::VariableDirectives, span));
        }

        Ok(VariableDefinition {
            default_value,
            directives: vec![],
            name,
            var_type,
        })
    }

    // =========================================================================
    // Selection sets
    // =========================================================================

    /// Skips over a balanced `{ ... }` and keeps its trimmed body as text.
    ///
    /// Braces inside string literals and `#` comments do not count toward
    /// the balance.
    fn read_selection_set(&mut self) -> Result<SelectionSet, ReaderError> {
        let open_span = self.expect_literal("{")?;
        let body_start = self.cursor.position().byte_offset();
        let mut depth = 1usize;

        loop {
            let Some(ch) = self.cursor.peek_char() else {
                return Err(self.unclosed_delimiter_error("{", &open_span));
            };
            match ch {
                '{' => {
                    depth += 1;
                    self.cursor.consume();
                },
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        break;
                    }
                    self.cursor.consume();
                },
                '"' => {
                    self.read_string_literal()?;
                },
                '#' => self.cursor.skip_comment(),
                _ => {
                    self.cursor.consume();
                },
            }
        }

        let body_end = self.cursor.position().byte_offset();
        let body = self.cursor.source()[body_start..body_end].trim();
        self.expect_literal("}")?;
        Ok(SelectionSet::unparsed(body))
    }
}
