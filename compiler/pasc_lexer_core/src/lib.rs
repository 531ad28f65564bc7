//! Low-level scanning primitives for Pascal-S.
//!
//! This crate is standalone: it knows nothing about rule tables or
//! automata. It provides:
//!
//! - [`SourceBuffer`] / [`Cursor`]: sentinel-terminated byte access
//! - [`Token`] / [`TokenCategory`]: the token value every scanner emits
//! - [`ScanError`]: fatal scan failures
//! - [`TokenScanner`]: the pull interface shared by all scanners
//! - [`FallbackScanner`]: a hand-written scanner that needs no rule file
//!
//! The rule-driven engine lives in `pasc_lexer` and reuses the keyword and
//! literal helpers exported here, so both scanners agree on categories.

mod cursor;
pub mod fallback;
pub mod keywords;
pub mod literal;
mod scan_error;
mod scanner;
mod source_buffer;
mod token;

pub use cursor::Cursor;
pub use fallback::FallbackScanner;
pub use scan_error::ScanError;
pub use scanner::{TokenScanner, Tokens};
pub use source_buffer::SourceBuffer;
pub use token::{Token, TokenCategory};
