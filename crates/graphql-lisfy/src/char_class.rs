//! Character classes of the GraphQL lexical grammar.

/// Single-character punctuators. `...` is a punctuator too but is never a
/// single character.
pub const PUNCTUATORS: &[char] = &[
    '!', '$', '&', '(', ')', ':', '=', '@', '[', ']', '{', '|', '}',
];

/// Characters that may appear in a numeric literal after its first
/// character.
pub const NUMBER_CHARS: &[char] = &[
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'e', 'E', '.', '+', '-',
];

/// `[A-Za-z_]`
pub const fn is_name_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

/// `[A-Za-z0-9_]`
pub const fn is_name_continue(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

/// Characters that may begin a numeric literal: a digit or a sign.
pub const fn is_number_start(ch: char) -> bool {
    ch.is_ascii_digit() || ch == '-' || ch == '+'
}

pub fn is_number_continue(ch: char) -> bool {
    NUMBER_CHARS.contains(&ch)
}

pub fn is_punctuator(ch: char) -> bool {
    PUNCTUATORS.contains(&ch)
}

/// Whitespace and line terminators ignored between tokens. Commas and
/// comments are ignored too but are handled by the cursor separately.
pub const fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r' | '\u{FEFF}')
}
