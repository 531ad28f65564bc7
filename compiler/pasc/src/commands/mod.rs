//! Command handlers for the `pasc` CLI.
//!
//! Handlers write to a caller-supplied sink and return [`CommandError`];
//! only `main` decides what goes to stdout, stderr and the exit status.

use std::io;
use std::path::Path;

use pasc_lexer::{ScanError, SourceBuffer};
use thiserror::Error;

mod cross_check;
mod lex;

pub use cross_check::cross_check_source;
pub use lex::{write_tokens, LexSummary, OutputFormat};

/// Failure of a CLI command.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("cannot open '{path}': {source}")]
    Open {
        path: String,
        #[source]
        source: io::Error,
    },

    /// A fatal scan error, rendered with line and column.
    #[error("{0}")]
    Scan(String),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Read a source file, mapping failure to the "cannot open" message.
pub fn read_file(path: &Path) -> Result<String, CommandError> {
    std::fs::read_to_string(path).map_err(|source| CommandError::Open {
        path: path.display().to_string(),
        source,
    })
}

/// Render a scan error against the buffer it came from.
pub fn describe_scan_error(buf: &SourceBuffer, err: &ScanError) -> String {
    match err {
        ScanError::UnrecognizedCharacter { ch, pos } => {
            let (line, column) = buf.line_col(*pos);
            format!(
                "unrecognized character '{}' at line {line}, column {column}",
                ch.escape_debug()
            )
        }
        ScanError::UnterminatedLiteral { pos } => {
            let (line, column) = buf.line_col(*pos);
            format!("unterminated literal starting at line {line}, column {column}")
        }
        ScanError::UnclassifiedState { name } => format!("unclassified final state '{name}'"),
    }
}
