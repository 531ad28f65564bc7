//! Token categories and the token value both scanners emit.

use std::fmt;

/// Closed set of token categories for Pascal-S.
///
/// Comments never produce tokens, so there is no comment category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum TokenCategory {
    // === Words ===
    Keyword,
    Identifier,

    // === Operators ===
    ArithmeticOperator,
    RelationalOperator,
    LogicalOperator,
    AssignOperator,
    RangeOperator,

    // === Literals ===
    Number,
    CharLiteral,
    StringLiteral,

    // === Punctuation ===
    Semicolon,
    Comma,
    Colon,
    Dot,
    #[cfg_attr(feature = "serde", serde(rename = "LPARENTHESIS"))]
    LeftParen,
    #[cfg_attr(feature = "serde", serde(rename = "RPARENTHESIS"))]
    RightParen,
    #[cfg_attr(feature = "serde", serde(rename = "LBRACKET"))]
    LeftBracket,
    #[cfg_attr(feature = "serde", serde(rename = "RBRACKET"))]
    RightBracket,
}

impl TokenCategory {
    /// Every category, in declaration order.
    pub const ALL: [TokenCategory; 18] = [
        TokenCategory::Keyword,
        TokenCategory::Identifier,
        TokenCategory::ArithmeticOperator,
        TokenCategory::RelationalOperator,
        TokenCategory::LogicalOperator,
        TokenCategory::AssignOperator,
        TokenCategory::RangeOperator,
        TokenCategory::Number,
        TokenCategory::CharLiteral,
        TokenCategory::StringLiteral,
        TokenCategory::Semicolon,
        TokenCategory::Comma,
        TokenCategory::Colon,
        TokenCategory::Dot,
        TokenCategory::LeftParen,
        TokenCategory::RightParen,
        TokenCategory::LeftBracket,
        TokenCategory::RightBracket,
    ];

    /// Upper-case name used in the `CATEGORY(text)` listing format.
    pub const fn name(self) -> &'static str {
        match self {
            TokenCategory::Keyword => "KEYWORD",
            TokenCategory::Identifier => "IDENTIFIER",
            TokenCategory::ArithmeticOperator => "ARITHMETIC_OPERATOR",
            TokenCategory::RelationalOperator => "RELATIONAL_OPERATOR",
            TokenCategory::LogicalOperator => "LOGICAL_OPERATOR",
            TokenCategory::AssignOperator => "ASSIGN_OPERATOR",
            TokenCategory::RangeOperator => "RANGE_OPERATOR",
            TokenCategory::Number => "NUMBER",
            TokenCategory::CharLiteral => "CHAR_LITERAL",
            TokenCategory::StringLiteral => "STRING_LITERAL",
            TokenCategory::Semicolon => "SEMICOLON",
            TokenCategory::Comma => "COMMA",
            TokenCategory::Colon => "COLON",
            TokenCategory::Dot => "DOT",
            TokenCategory::LeftParen => "LPARENTHESIS",
            TokenCategory::RightParen => "RPARENTHESIS",
            TokenCategory::LeftBracket => "LBRACKET",
            TokenCategory::RightBracket => "RBRACKET",
        }
    }

    /// Returns `true` for the quoted literal categories.
    pub const fn is_literal(self) -> bool {
        matches!(
            self,
            TokenCategory::CharLiteral | TokenCategory::StringLiteral
        )
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified lexeme.
///
/// `text` is the verbatim source text, except for literals: their quotes
/// are stripped and escapes resolved.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token {
    category: TokenCategory,
    text: String,
}

impl Token {
    pub fn new(category: TokenCategory, text: impl Into<String>) -> Self {
        Self {
            category,
            text: text.into(),
        }
    }

    #[inline]
    pub fn category(&self) -> TokenCategory {
        self.category
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Token {
    /// Renders as `CATEGORY(text)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.category, self.text)
    }
}
