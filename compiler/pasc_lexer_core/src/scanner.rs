//! The scanning capability shared by the automaton engine and the
//! fallback scanner.

use std::iter::FusedIterator;

use crate::{ScanError, Token};

/// A pull-based source of tokens.
///
/// Implementations return `Ok(None)` once the input is exhausted and keep
/// returning it afterwards. An `Err` is fatal for the session.
pub trait TokenScanner {
    /// Scan the next token.
    fn scan_one(&mut self) -> Result<Option<Token>, ScanError>;

    /// Adapt the scanner into an iterator that stops after the first error.
    fn tokens(self) -> Tokens<Self>
    where
        Self: Sized,
    {
        Tokens {
            scanner: self,
            done: false,
        }
    }

    /// Scan the remaining input into a vector.
    fn collect_tokens(self) -> Result<Vec<Token>, ScanError>
    where
        Self: Sized,
    {
        self.tokens().collect()
    }
}

impl<S: TokenScanner + ?Sized> TokenScanner for &mut S {
    fn scan_one(&mut self) -> Result<Option<Token>, ScanError> {
        (**self).scan_one()
    }
}

/// Iterator over a [`TokenScanner`], fused after end of input or an error.
#[derive(Debug)]
pub struct Tokens<S> {
    scanner: S,
    done: bool,
}

impl<S: TokenScanner> Iterator for Tokens<S> {
    type Item = Result<Token, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.scanner.scan_one() {
            Ok(Some(token)) => Some(Ok(token)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

impl<S: TokenScanner> FusedIterator for Tokens<S> {}
