//! Rule-driven lexer for Pascal-S.
//!
//! A [`RuleTable`] is parsed once from a line-oriented automaton
//! description (the built-in one, or a file). A [`ScanEngine`] then steps
//! the table's [`Automaton`] over the source with longest-match and
//! backtracking, and a [`StateClassifier`] turns each accepted lexeme into
//! a [`Token`] or skips it as a comment.
//!
//! The hand-written [`FallbackScanner`] from `pasc_lexer_core` implements
//! the same token grammar without a table. Both sit behind
//! [`TokenScanner`], can be chosen at runtime through [`Scanner`], and can
//! be compared with [`cross_check`].
//!
//! ```
//! use pasc_lexer::{lex, RuleTable, TokenCategory};
//!
//! let table = RuleTable::builtin()?;
//! let tokens = lex("x := 'a';", &table)?;
//! assert_eq!(tokens[0].category(), TokenCategory::Identifier);
//! assert_eq!(tokens[2].category(), TokenCategory::CharLiteral);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod automaton;
mod classifier;
mod config;
mod cross_check;
mod engine;
mod rule_table;
mod scanner;

pub use automaton::Automaton;
pub use classifier::{StateClass, StateClassifier, PASCAL_STATES};
pub use config::{Lexer, LexerConfig, RuleSource};
pub use cross_check::{cross_check, CrossCheck, Outcome};
pub use engine::ScanEngine;
pub use rule_table::{
    LoadError, LoadFailure, RuleTable, StateId, BUILTIN_ORIGIN, BUILTIN_RULES,
};
pub use scanner::{lex, lex_fallback, lex_with, Scanner, ScannerKind};

pub use pasc_lexer_core::{
    FallbackScanner, ScanError, SourceBuffer, Token, TokenCategory, TokenScanner, Tokens,
};
