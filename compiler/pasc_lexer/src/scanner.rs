//! Runtime choice between the automaton engine and the fallback scanner.

use std::fmt;

use pasc_lexer_core::{Cursor, FallbackScanner, ScanError, SourceBuffer, Token, TokenScanner};

use crate::{RuleTable, ScanEngine, StateClassifier};

/// Which scanner implementation to run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScannerKind {
    /// Rule-table driven [`ScanEngine`].
    #[default]
    Automaton,
    /// Hand-written [`FallbackScanner`].
    Fallback,
}

impl ScannerKind {
    pub const ALL: [ScannerKind; 2] = [ScannerKind::Automaton, ScannerKind::Fallback];

    pub const fn name(self) -> &'static str {
        match self {
            ScannerKind::Automaton => "automaton",
            ScannerKind::Fallback => "fallback",
        }
    }
}

impl fmt::Display for ScannerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Either scanner, behind one [`TokenScanner`] implementation.
#[derive(Clone, Debug)]
pub enum Scanner<'a> {
    Automaton(ScanEngine<'a>),
    Fallback(FallbackScanner<'a>),
}

impl<'a> Scanner<'a> {
    pub fn automaton(
        table: &'a RuleTable,
        classifier: &'a StateClassifier,
        cursor: Cursor<'a>,
    ) -> Self {
        Scanner::Automaton(ScanEngine::new(table, classifier, cursor))
    }

    pub fn fallback(cursor: Cursor<'a>) -> Self {
        Scanner::Fallback(FallbackScanner::new(cursor))
    }

    pub fn kind(&self) -> ScannerKind {
        match self {
            Scanner::Automaton(_) => ScannerKind::Automaton,
            Scanner::Fallback(_) => ScannerKind::Fallback,
        }
    }

    /// Current byte offset of the underlying cursor.
    pub fn pos(&self) -> u32 {
        match self {
            Scanner::Automaton(engine) => engine.pos(),
            Scanner::Fallback(fallback) => fallback.pos(),
        }
    }
}

impl TokenScanner for Scanner<'_> {
    fn scan_one(&mut self) -> Result<Option<Token>, ScanError> {
        match self {
            Scanner::Automaton(engine) => engine.next_token(),
            Scanner::Fallback(fallback) => fallback.next_token(),
        }
    }
}

/// Scan `source` with the automaton built from `table`.
///
/// `table` must use the Pascal-S state names (see
/// [`PASCAL_STATES`](crate::PASCAL_STATES)).
pub fn lex(source: &str, table: &RuleTable) -> Result<Vec<Token>, ScanError> {
    lex_with(ScannerKind::Automaton, source, table)
}

/// Scan `source` with the fallback scanner.
pub fn lex_fallback(source: &str) -> Result<Vec<Token>, ScanError> {
    let buf = SourceBuffer::new(source);
    FallbackScanner::new(buf.cursor()).collect_tokens()
}

/// Scan `source` with the scanner of the given kind.
///
/// `table` is ignored for [`ScannerKind::Fallback`].
pub fn lex_with(
    kind: ScannerKind,
    source: &str,
    table: &RuleTable,
) -> Result<Vec<Token>, ScanError> {
    match kind {
        ScannerKind::Automaton => {
            let classifier = StateClassifier::pascal(table);
            let buf = SourceBuffer::new(source);
            ScanEngine::new(table, &classifier, buf.cursor()).collect_tokens()
        }
        ScannerKind::Fallback => lex_fallback(source),
    }
}
