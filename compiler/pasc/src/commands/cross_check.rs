//! `pasc --cross-check <INPUT>`: compare the two scanners on one file.

use std::io::Write;

use pasc_lexer::{cross_check, CrossCheck, Outcome, RuleTable, SourceBuffer};

use super::{describe_scan_error, CommandError};

/// Run both scanners over `source` and report to `out`.
///
/// Returns `true` when the scanners agree.
pub fn cross_check_source(
    source: &str,
    table: &RuleTable,
    out: &mut impl Write,
) -> Result<bool, CommandError> {
    let buf = SourceBuffer::new(source);
    match cross_check(source, table) {
        CrossCheck::Agree { tokens, error } => {
            write!(out, "scanners agree on {} tokens", tokens.len())?;
            match error {
                Some(err) => writeln!(out, ", then: {}", describe_scan_error(&buf, &err))?,
                None => writeln!(out)?,
            }
            Ok(true)
        }
        CrossCheck::Diverge {
            index,
            automaton,
            fallback,
        } => {
            writeln!(out, "scanners diverge at token {index}")?;
            writeln!(out, "  automaton: {}", describe(&buf, &automaton))?;
            writeln!(out, "  fallback:  {}", describe(&buf, &fallback))?;
            Ok(false)
        }
    }
}

fn describe(buf: &SourceBuffer, outcome: &Outcome) -> String {
    match outcome {
        Outcome::Token(token) => token.to_string(),
        Outcome::Error(err) => format!("error: {}", describe_scan_error(buf, err)),
        Outcome::End => "end of input".to_owned(),
    }
}
