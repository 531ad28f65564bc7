//! Reserved-word resolution for identifier lexemes.
//!
//! Three closed word lists share the identifier shape:
//! 1. **Keywords**: `program var procedure begin end if then else while do
//!    for to downto integer real boolean char array of function const type`
//! 2. **Logical operators**: `and or not`
//! 3. **Arithmetic operators**: `div mod`
//!
//! Matching is exact and case-sensitive. The lookup uses the word length
//! as a first-pass filter (reserved words are 2-9 characters), then
//! matches against the words of that length.

use crate::TokenCategory;

/// Resolve an identifier lexeme to its final category.
///
/// Returns [`TokenCategory::Identifier`] when the text is not a reserved
/// word.
#[inline]
pub fn resolve_identifier(text: &str) -> TokenCategory {
    lookup(text).unwrap_or(TokenCategory::Identifier)
}

/// Look up a reserved word.
///
/// Returns `None` for ordinary identifiers.
#[inline]
pub fn lookup(text: &str) -> Option<TokenCategory> {
    use TokenCategory::{ArithmeticOperator, Keyword, LogicalOperator};

    let len = text.len();
    if !(2..=9).contains(&len) || !text.as_bytes()[0].is_ascii_lowercase() {
        return None;
    }

    match len {
        2 => match text {
            "do" | "if" | "of" | "to" => Some(Keyword),
            "or" => Some(LogicalOperator),
            _ => None,
        },
        3 => match text {
            "end" | "for" | "var" => Some(Keyword),
            "and" | "not" => Some(LogicalOperator),
            "div" | "mod" => Some(ArithmeticOperator),
            _ => None,
        },
        4 => match text {
            "char" | "else" | "real" | "then" | "type" => Some(Keyword),
            _ => None,
        },
        5 => match text {
            "array" | "begin" | "const" | "while" => Some(Keyword),
            _ => None,
        },
        6 => match text {
            "downto" => Some(Keyword),
            _ => None,
        },
        7 => match text {
            "boolean" | "integer" | "program" => Some(Keyword),
            _ => None,
        },
        8 => match text {
            "function" => Some(Keyword),
            _ => None,
        },
        9 => match text {
            "procedure" => Some(Keyword),
            _ => None,
        },
        _ => None,
    }
}
