use crate::ast::Atom;
use crate::ast::AtomObject;
use crate::char_class;
use crate::reader::Reader;
use crate::ReaderError;
use crate::ReaderErrorKind;
use crate::SourceSpan;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

impl Reader<'_> {
    /// Reads one input value.
    ///
    /// The first significant character decides the form:
    ///
    /// | first char        | form                       |
    /// |-------------------|----------------------------|
    /// | `0-9`, `+`, `-`   | [`Atom::Int`] / [`Atom::Float`] |
    /// | `"`               | [`Atom::String`]           |
    /// | `t`               | `true`                     |
    /// | `f`               | `false`                    |
    /// | `n`               | `null`                     |
    /// | `[`               | [`Atom::List`]             |
    /// | `{`               | [`Atom::Object`]           |
    /// | name start        | [`Atom::Enum`]             |
    ///
    /// Because `t`, `f` and `n` always select a keyword, enum values starting
    /// with those letters cannot be read.
    pub fn read_atom(&mut self) -> Result<Atom, ReaderError> {
        self.enter_recursion()?;
        let result = self.read_atom_impl();
        self.exit_recursion();
        result
    }

    fn read_atom_impl(&mut self) -> Result<Atom, ReaderError> {
        match self.peek_significant("value")? {
            ch if char_class::is_number_start(ch) => self.read_number(),
            '"' => Ok(Atom::String(self.read_string_literal()?.to_string())),
            't' => self.read_keyword_atom("true", Atom::Boolean(true)),
            'f' => self.read_keyword_atom("false", Atom::Boolean(false)),
            'n' => self.read_keyword_atom("null", Atom::Null),
            '[' => self.read_list(),
            '{' => self.read_object(),
            _ => match self.read_optional_name() {
                Some(name) => Ok(Atom::Enum(name.to_string())),
                None => Err(self.unexpected_char_error(&["value"])),
            },
        }
    }

    fn read_keyword_atom(&mut self, keyword: &str, atom: Atom) -> Result<Atom, ReaderError> {
        self.expect_keyword(keyword).map_err(|mut error| {
            error.add_help(
                "values starting with `t`, `f` or `n` are read as `true`, `false` \
                 or `null`, so enum values cannot start with those letters",
            );
            error
        })?;
        Ok(atom)
    }

    /// Reads the maximal run of number characters, preferring an integer
    /// reading over a float one.
    fn read_number(&mut self) -> Result<Atom, ReaderError> {
        let start = self.cursor.position();
        let text = self.cursor.consume_while(char_class::is_number_continue);
        if let Ok(value) = text.parse::<i64>() {
            return Ok(Atom::Int(value));
        }
        if let Ok(value) = text.parse::<f64>()
            && value.is_finite()
        {
            return Ok(Atom::Float(value));
        }
        Err(ReaderError::new(
            format!("invalid number `{text}`"),
            self.cursor.span_from(start),
            ReaderErrorKind::InvalidNumber(text.to_string()),
        ))
    }

    fn read_list(&mut self) -> Result<Atom, ReaderError> {
        let open_span = self.expect_literal("[")?;
        let mut items = vec![];
        while self.peek_significant_in("[", &open_span)? != ']' {
            items.push(self.read_atom()?);
        }
        self.expect_literal("]")?;
        Ok(Atom::List(items))
    }

    fn read_object(&mut self) -> Result<Atom, ReaderError> {
        let open_span = self.expect_literal("{")?;
        let mut fields = AtomObject::new();
        let mut key_spans: HashMap<String, SourceSpan> = HashMap::new();
        while self.peek_significant_in("{", &open_span)? != '}' {
            let key_start = self.cursor.position();
            let key = self.read_name()?;
            let key_span = self.cursor.span_from(key_start);
            match key_spans.entry(key.to_string()) {
                Entry::Occupied(first) => {
                    let mut error = ReaderError::new(
                        format!("duplicate object field `{key}`"),
                        key_span,
                        ReaderErrorKind::DuplicateObjectField {
                            name: key.to_string(),
                        },
                    );
                    error.add_note_with_span(
                        format!("`{key}` first defined here"),
                        first.get().clone(),
                    );
                    return Err(error);
                },
                Entry::Vacant(slot) => {
                    slot.insert(key_span);
                },
            }
            self.expect_literal(":")?;
            let value = self.read_atom()?;
            fields.insert(key.to_string(), value);
        }
        self.expect_literal("}")?;
        Ok(Atom::Object(fields))
    }
}
