//! Fatal scanning errors shared by both scanners.
//!
//! Every variant aborts the scan session: there is no resynchronisation
//! after a malformed token. Positions are byte offsets into the source;
//! use [`SourceBuffer::line_col`](crate::SourceBuffer::line_col) to render
//! them for humans.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum ScanError {
    /// No transition for `ch` and no earlier final state to fall back to.
    #[error("unrecognized character {ch:?} at offset {pos}")]
    UnrecognizedCharacter { ch: char, pos: u32 },

    /// A quoted literal ran into end of input. `pos` is the opening quote.
    #[error("unterminated literal starting at offset {pos}")]
    UnterminatedLiteral { pos: u32 },

    /// The rule table reached a final state the classifier does not know.
    ///
    /// Always a setup defect, never a property of the input.
    #[error("unclassified final state '{name}'")]
    UnclassifiedState { name: String },
}

impl ScanError {
    /// Byte offset the error points at, if it has one.
    pub fn pos(&self) -> Option<u32> {
        match self {
            ScanError::UnrecognizedCharacter { pos, .. }
            | ScanError::UnterminatedLiteral { pos } => Some(*pos),
            ScanError::UnclassifiedState { .. } => None,
        }
    }
}
