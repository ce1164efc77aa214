use crate::char_class;
use crate::reader::Reader;
use crate::ReaderError;

impl<'src> Reader<'src> {
    /// Reads a required name (`[_A-Za-z][_0-9A-Za-z]*`).
    pub fn read_name(&mut self) -> Result<&'src str, ReaderError> {
        self.peek_significant("name")?;
        self.read_optional_name()
            .ok_or_else(|| self.unexpected_char_error(&["name"]))
    }

    /// Reads a name if one starts at the next significant character.
    /// Consumes nothing but ignored input otherwise.
    pub fn read_optional_name(&mut self) -> Option<&'src str> {
        match self.peek_significant_or_eof() {
            Some(ch) if char_class::is_name_start(ch) => {
                Some(self.cursor.consume_while(char_class::is_name_continue))
            },
            _ => None,
        }
    }
}
