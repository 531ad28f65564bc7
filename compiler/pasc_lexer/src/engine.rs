//! Longest-match scanning driven by a rule table.
//!
//! # Algorithm
//!
//! For each token the engine steps the automaton from the start state one
//! character at a time, remembering the last final state it passed through
//! together with the cursor position just after it (the checkpoint). When
//! the automaton rejects a character, or the input ends, the cursor is reset
//! to the checkpoint and the lexeme between the token start and the
//! checkpoint is finalized. Characters read past the checkpoint are simply
//! scanned again as part of the next token.
//!
//! A rejection with no checkpoint is fatal. Running out of input with no
//! checkpoint drops the trailing fragment, unless the fragment opened a
//! quoted literal, which is reported as unterminated.
//!
//! Comment states finalize to nothing; the engine loops and scans again
//! rather than recursing, so comment-only inputs run in constant stack.

use pasc_lexer_core::{Cursor, ScanError, Token, TokenScanner};
use tracing::{trace, warn};

use crate::{Automaton, RuleTable, StateClassifier, StateId};

/// Last final state seen during a match, with the position just after it.
type Checkpoint = (StateId, u32);

/// Automaton-driven scanner over a [`Cursor`].
#[derive(Clone, Debug)]
pub struct ScanEngine<'a> {
    automaton: Automaton<'a>,
    classifier: &'a StateClassifier,
    cursor: Cursor<'a>,
}

impl<'a> ScanEngine<'a> {
    /// Create an engine. `classifier` must have been built for `table`.
    pub fn new(table: &'a RuleTable, classifier: &'a StateClassifier, cursor: Cursor<'a>) -> Self {
        Self {
            automaton: table.automaton(),
            classifier,
            cursor,
        }
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
            let Some((state, end)) = self.longest_match(start)? else {
                return Ok(None);
            };
            self.cursor.reset_to(end);

            let lexeme = self.cursor.slice(start, end);
            if let Some(token) = self
                .classifier
                .finalize(self.automaton.table(), state, lexeme)?
            {
                return Ok(Some(token));
            }
            trace!(start, end, "skipped comment");
        }
    }

    /// Step the automaton as far as it goes from `start`.
    ///
    /// Returns the checkpoint to finalize, or `None` when a fragment at end
    /// of input was dropped.
    fn longest_match(&mut self, start: u32) -> Result<Option<Checkpoint>, ScanError> {
        let mut state = self.automaton.start();
        let mut checkpoint: Option<Checkpoint> = None;

        loop {
            let pos = self.cursor.pos();
            let Some(ch) = self.cursor.bump() else {
                return match checkpoint {
                    Some(checkpoint) => Ok(Some(self.backtrack(checkpoint, pos))),
                    None => self.drop_fragment(start),
                };
            };

            match self.automaton.step(state, ch) {
                Some(next) => {
                    state = next;
                    if self.automaton.is_final(next) {
                        checkpoint = Some((next, self.cursor.pos()));
                    }
                }
                None => {
                    return match checkpoint {
                        Some(checkpoint) => Ok(Some(self.backtrack(checkpoint, pos))),
                        None => Err(ScanError::UnrecognizedCharacter { ch, pos }),
                    };
                }
            }
        }
    }

    fn backtrack(&self, checkpoint: Checkpoint, stopped_at: u32) -> Checkpoint {
        let (state, end) = checkpoint;
        if end < stopped_at {
            trace!(
                state = self.automaton.state_name(state),
                from = stopped_at,
                to = end,
                "backtracking to last final state"
            );
        }
        checkpoint
    }

    /// End of input reached without any final state.
    fn drop_fragment(&self, start: u32) -> Result<Option<Checkpoint>, ScanError> {
        let fragment = self.cursor.slice_from(start);
        if fragment.starts_with('\'') {
            return Err(ScanError::UnterminatedLiteral { pos: start });
        }
        warn!(
            pos = start,
            fragment, "dropping unmatched fragment at end of input"
        );
        Ok(None)
    }
}

impl TokenScanner for ScanEngine<'_> {
    fn scan_one(&mut self) -> Result<Option<Token>, ScanError> {
        self.next_token()
    }
}

#[cfg(test)]
mod tests;
