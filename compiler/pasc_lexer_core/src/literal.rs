//! Cooking of quoted literals: quote stripping and escape decoding.
//!
//! Both scanners hand the raw, quote-delimited lexeme to
//! [`cook_literal`], which guarantees they agree on literal text and on
//! the char/string split.
//!
//! # Escapes
//!
//! `\n` `\t` `\r` `\\` `\'` resolve to their characters. Any other escape
//! keeps the backslash and the following character verbatim, and a
//! trailing lone backslash is kept as-is.

use crate::{Token, TokenCategory};

/// Resolve a recognised escape character.
#[inline]
fn resolve_escape(c: char) -> Option<char> {
    match c {
        'n' => Some('\n'),
        't' => Some('\t'),
        'r' => Some('\r'),
        '\\' => Some('\\'),
        '\'' => Some('\''),
        _ => None,
    }
}

/// Decode the escapes in a literal's content (between the quotes).
///
/// Fast path: returns `None` when the content has no backslash, so the
/// caller can use the source slice directly.
pub fn unescape(content: &str) -> Option<String> {
    if !content.contains('\\') {
        return None;
    }

    let mut result = String::with_capacity(content.len());
    let mut chars = content.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some(esc) => {
                if let Some(resolved) = resolve_escape(esc) {
                    result.push(resolved);
                } else {
                    result.push('\\');
                    result.push(esc);
                }
            }
            None => result.push('\\'),
        }
    }

    Some(result)
}

/// Strip the outer single quotes from a lexeme, if it has both.
#[inline]
pub fn strip_quotes(lexeme: &str) -> Option<&str> {
    lexeme.strip_prefix('\'')?.strip_suffix('\'')
}

/// Turn a literal lexeme into its token.
///
/// When `lexeme` is quote-delimited the quotes are stripped and escapes
/// decoded; a decoded text of at most one character is always a
/// [`TokenCategory::CharLiteral`]. Lexemes without surrounding quotes
/// (possible with custom rule tables) are emitted verbatim under
/// `category`.
pub fn cook_literal(category: TokenCategory, lexeme: &str) -> Token {
    let Some(content) = strip_quotes(lexeme) else {
        return Token::new(category, lexeme);
    };
    let text = unescape(content).unwrap_or_else(|| content.to_owned());
    let category = if text.chars().count() <= 1 {
        TokenCategory::CharLiteral
    } else {
        category
    };
    Token::new(category, text)
}
