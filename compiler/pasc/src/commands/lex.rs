//! `pasc <INPUT>`: tokenize a file and print the tokens.

use std::io::Write;
use std::time::{Duration, Instant};

use pasc_lexer::{Lexer, SourceBuffer, TokenScanner};

use super::{describe_scan_error, CommandError};

/// How tokens are printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One `CATEGORY(text)` line per token, printed as it is scanned.
    #[default]
    Text,
    /// A JSON array of `{"category", "text"}` objects.
    Json,
}

/// What a successful scan produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LexSummary {
    pub tokens: usize,
    pub elapsed: Duration,
}

/// Scan `source` with `lexer` and write the tokens to `out`.
///
/// In text mode, tokens scanned before a fatal error have already been
/// written when the error is returned.
pub fn write_tokens(
    source: &str,
    lexer: &Lexer,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<LexSummary, CommandError> {
    let buf = SourceBuffer::new(source);
    let start = Instant::now();

    let tokens = match format {
        OutputFormat::Text => {
            let mut count = 0;
            for token in lexer.scanner(&buf).tokens() {
                let token = token.map_err(|err| scan_failure(&buf, &err))?;
                writeln!(out, "{token}")?;
                count += 1;
            }
            count
        }
        OutputFormat::Json => {
            let tokens = lexer
                .scanner(&buf)
                .collect_tokens()
                .map_err(|err| scan_failure(&buf, &err))?;
            serde_json::to_writer_pretty(&mut *out, &tokens)?;
            writeln!(out)?;
            tokens.len()
        }
    };

    Ok(LexSummary {
        tokens,
        elapsed: start.elapsed(),
    })
}

fn scan_failure(buf: &SourceBuffer, err: &pasc_lexer::ScanError) -> CommandError {
    tracing::debug!(error = %err, "scan aborted");
    CommandError::Scan(describe_scan_error(buf, err))
}
