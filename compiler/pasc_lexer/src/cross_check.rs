//! Run both scanners over the same source and compare them token by token.

use pasc_lexer_core::{FallbackScanner, ScanError, SourceBuffer, Token, TokenScanner};
use tracing::debug;

use crate::{RuleTable, ScanEngine, StateClassifier};

/// What one scanner produced at a given index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Token(Token),
    Error(ScanError),
    /// The scanner was already exhausted.
    End,
}

impl From<Option<Result<Token, ScanError>>> for Outcome {
    fn from(item: Option<Result<Token, ScanError>>) -> Self {
        match item {
            Some(Ok(token)) => Outcome::Token(token),
            Some(Err(err)) => Outcome::Error(err),
            None => Outcome::End,
        }
    }
}

/// Result of [`cross_check`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CrossCheck {
    /// Both scanners produced the same tokens, and the same error if any.
    Agree {
        tokens: Vec<Token>,
        error: Option<ScanError>,
    },
    /// First position where the scanners differ.
    Diverge {
        index: usize,
        automaton: Outcome,
        fallback: Outcome,
    },
}

impl CrossCheck {
    pub fn is_agree(&self) -> bool {
        matches!(self, CrossCheck::Agree { .. })
    }
}

/// Scan `source` with the automaton for `table` and with the fallback
/// scanner, stopping at the first difference.
pub fn cross_check(source: &str, table: &RuleTable) -> CrossCheck {
    let classifier = StateClassifier::pascal(table);
    let buf = SourceBuffer::new(source);
    let mut automaton = ScanEngine::new(table, &classifier, buf.cursor()).tokens();
    let mut fallback = FallbackScanner::new(buf.cursor()).tokens();

    let mut tokens = Vec::new();
    loop {
        let left = Outcome::from(automaton.next());
        let right = Outcome::from(fallback.next());
        if left != right {
            debug!(index = tokens.len(), ?left, ?right, "scanners diverge");
            return CrossCheck::Diverge {
                index: tokens.len(),
                automaton: left,
                fallback: right,
            };
        }
        match left {
            Outcome::Token(token) => tokens.push(token),
            Outcome::Error(err) => {
                return CrossCheck::Agree {
                    tokens,
                    error: Some(err),
                };
            }
            Outcome::End => return CrossCheck::Agree { tokens, error: None },
        }
    }
}
