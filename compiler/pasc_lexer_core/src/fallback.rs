//! Hand-written Pascal-S scanner with no rule-table dependency.
//!
//! Used when the automaton rules cannot be loaded, and as the oracle the
//! automaton engine is cross-checked against. Token boundaries, categories
//! and error kinds follow the built-in rule table exactly; see
//! `pasc_lexer::cross_check`.
//!
//! # Design
//!
//! Main dispatch is a `match` on the current byte. Each arm calls a focused
//! method that advances the cursor and reports what it found. Comments are
//! consumed inside the scan loop and never surface as tokens.

use crate::cursor::Cursor;
use crate::keywords;
use crate::literal::cook_literal;
use crate::{ScanError, Token, TokenCategory, TokenScanner};

/// Outcome of one dispatch step.
enum Scanned {
    Token(Token),
    /// A complete comment was skipped; scan again.
    Comment,
    /// The rest of the input was an unterminated brace comment.
    Exhausted,
}

/// Character-by-character scanner over a [`Cursor`].
#[derive(Clone, Debug)]
pub struct FallbackScanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> FallbackScanner<'a> {
    /// Create a new scanner from a cursor.
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self { cursor }
    }

    /// Current byte offset of the underlying cursor.
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    /// Produce the next token.
    ///
    /// Returns `Ok(None)` when the source is exhausted. Subsequent calls
    /// continue to return `Ok(None)`.
    pub fn next_token(&mut self) -> Result<Option<Token>, ScanError> {
        loop {
            self.cursor.eat_whitespace();
            if self.cursor.is_eof() {
                return Ok(None);
            }

            let start = self.cursor.pos();
            let scanned = match self.cursor.current() {
                b'a'..=b'z' | b'A'..=b'Z' => self.identifier(start),
                b'0'..=b'9' => self.number(start),
                b'\'' => self.literal(start)?,
                b'{' => self.brace_comment(start),
                b'(' => self.left_paren_or_comment(start),
                b'+' | b'-' | b'*' | b'/' => self.single(start, TokenCategory::ArithmeticOperator),
                b'=' => self.single(start, TokenCategory::RelationalOperator),
                b'<' => self.less(start),
                b'>' => self.greater(start),
                b':' => self.colon(start),
                b'.' => self.dot(start),
                b';' => self.single(start, TokenCategory::Semicolon),
                b',' => self.single(start, TokenCategory::Comma),
                b')' => self.single(start, TokenCategory::RightParen),
                b'[' => self.single(start, TokenCategory::LeftBracket),
                b']' => self.single(start, TokenCategory::RightBracket),
                _ => return Err(self.unrecognized(start)),
            };

            match scanned {
                Scanned::Token(token) => return Ok(Some(token)),
                Scanned::Comment => {}
                Scanned::Exhausted => return Ok(None),
            }
        }
    }

    // ─── Words & Numbers ───────────────────────────────────────────

    fn identifier(&mut self, start: u32) -> Scanned {
        self.cursor.advance(); // first letter, already validated
        self.cursor.eat_while(|b| b.is_ascii_alphanumeric() || b == b'_');
        let text = self.cursor.slice_from(start);
        Scanned::Token(Token::new(keywords::resolve_identifier(text), text))
    }

    fn number(&mut self, start: u32) -> Scanned {
        self.cursor.eat_while(|b| b.is_ascii_digit());
        self.emit(start, TokenCategory::Number)
    }

    // ─── Literals ──────────────────────────────────────────────────

    fn literal(&mut self, start: u32) -> Result<Scanned, ScanError> {
        self.cursor.advance(); // opening quote
        loop {
            if self.cursor.is_eof() {
                return Err(ScanError::UnterminatedLiteral { pos: start });
            }
            match self.cursor.current() {
                b'\'' => {
                    self.cursor.advance();
                    break;
                }
                b'\\' => {
                    self.cursor.advance();
                    if self.cursor.is_eof() {
                        return Err(ScanError::UnterminatedLiteral { pos: start });
                    }
                    self.cursor.advance_char();
                }
                _ => self.cursor.advance_char(),
            }
        }
        let lexeme = self.cursor.slice_from(start);
        Ok(Scanned::Token(cook_literal(TokenCategory::StringLiteral, lexeme)))
    }

    // ─── Comments ──────────────────────────────────────────────────

    fn brace_comment(&mut self, start: u32) -> Scanned {
        self.cursor.advance(); // '{'
        if self.cursor.eat_until(b'}') {
            self.cursor.advance();
            Scanned::Comment
        } else {
            tracing::warn!(pos = start, "unterminated brace comment dropped at end of input");
            Scanned::Exhausted
        }
    }

    fn left_paren_or_comment(&mut self, start: u32) -> Scanned {
        if self.cursor.peek() != b'*' {
            return self.single(start, TokenCategory::LeftParen);
        }
        let before = self.cursor;
        self.cursor.advance_n(2); // '(*'
        if self.cursor.eat_until_seq(b"*)") {
            self.cursor.advance_n(2);
            return Scanned::Comment;
        }
        // Unclosed: the '(' stands alone and scanning resumes after it.
        tracing::trace!(pos = start, "unclosed '(*', treating '(' as a token");
        self.cursor = before;
        self.single(start, TokenCategory::LeftParen)
    }

    // ─── Operators & Punctuation ───────────────────────────────────

    /// Single-byte token: advance one byte and emit the given category.
    fn single(&mut self, start: u32, category: TokenCategory) -> Scanned {
        self.cursor.advance();
        self.emit(start, category)
    }

    /// Optional second byte: consume `second` if it follows.
    fn pair(
        &mut self,
        start: u32,
        second: u8,
        joined: TokenCategory,
        alone: TokenCategory,
    ) -> Scanned {
        self.cursor.advance();
        if self.cursor.current() == second {
            self.cursor.advance();
            self.emit(start, joined)
        } else {
            self.emit(start, alone)
        }
    }

    fn less(&mut self, start: u32) -> Scanned {
        self.cursor.advance(); // '<'
        if matches!(self.cursor.current(), b'>' | b'=') {
            self.cursor.advance();
        }
        self.emit(start, TokenCategory::RelationalOperator)
    }

    fn greater(&mut self, start: u32) -> Scanned {
        self.cursor.advance(); // '>'
        if self.cursor.current() == b'=' {
            self.cursor.advance();
        }
        self.emit(start, TokenCategory::RelationalOperator)
    }

    fn colon(&mut self, start: u32) -> Scanned {
        self.pair(
            start,
            b'=',
            TokenCategory::AssignOperator,
            TokenCategory::Colon,
        )
    }

    fn dot(&mut self, start: u32) -> Scanned {
        self.pair(
            start,
            b'.',
            TokenCategory::RangeOperator,
            TokenCategory::Dot,
        )
    }

    fn emit(&self, start: u32, category: TokenCategory) -> Scanned {
        Scanned::Token(Token::new(category, self.cursor.slice_from(start)))
    }

    fn unrecognized(&self, start: u32) -> ScanError {
        ScanError::UnrecognizedCharacter {
            ch: self
                .cursor
                .current_char()
                .unwrap_or(char::REPLACEMENT_CHARACTER),
            pos: start,
        }
    }
}

impl TokenScanner for FallbackScanner<'_> {
    fn scan_one(&mut self) -> Result<Option<Token>, ScanError> {
        self.next_token()
    }
}
