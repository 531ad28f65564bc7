//! Lexer configuration and the scanner it selects.

use std::path::PathBuf;

use pasc_lexer_core::{ScanError, SourceBuffer, Token, TokenScanner};
use tracing::{info, warn};

use crate::{LoadError, RuleTable, Scanner, ScannerKind, StateClassifier};

/// Where the automaton description comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RuleSource {
    /// The Pascal-S description embedded in the crate.
    #[default]
    Builtin,
    /// A description file on disk.
    File(PathBuf),
}

impl RuleSource {
    pub fn load(&self) -> Result<RuleTable, LoadError> {
        match self {
            RuleSource::Builtin => RuleTable::builtin(),
            RuleSource::File(path) => RuleTable::load(path),
        }
    }
}

/// Configuration for a [`Lexer`].
#[derive(Debug, Clone, Default)]
pub struct LexerConfig {
    /// Rule description for the automaton scanner.
    pub rules: RuleSource,
    /// Scanner to prefer. The fallback scanner is used regardless when the
    /// rules fail to load.
    pub scanner: ScannerKind,
}

impl LexerConfig {
    #[must_use]
    pub fn new(scanner: ScannerKind) -> Self {
        Self {
            scanner,
            ..Default::default()
        }
    }

    /// Set the rule description source.
    #[must_use]
    pub fn with_rules(mut self, rules: RuleSource) -> Self {
        self.rules = rules;
        self
    }

    /// Read rules from `path` instead of the built-in description.
    #[must_use]
    pub fn with_rule_file(self, path: impl Into<PathBuf>) -> Self {
        self.with_rules(RuleSource::File(path.into()))
    }
}

/// A loaded rule table with its classifier.
#[derive(Debug, Clone)]
struct CompiledRules {
    table: RuleTable,
    classifier: StateClassifier,
}

/// A configured, reusable scanner factory.
///
/// Holds the rule table (if the automaton scanner is in use) and hands out
/// a fresh [`Scanner`] per source.
#[derive(Debug, Clone)]
pub struct Lexer {
    rules: Option<CompiledRules>,
}

impl Lexer {
    /// Build a lexer from `config`.
    ///
    /// Never fails: a rule table that cannot be loaded is logged and the
    /// lexer switches to the fallback scanner.
    pub fn from_config(config: &LexerConfig) -> Self {
        if config.scanner == ScannerKind::Fallback {
            return Self::fallback();
        }
        match config.rules.load() {
            Ok(table) => Self::with_table(table),
            Err(err) => {
                warn!(error = %err, "falling back to the hand-written scanner");
                Self::fallback()
            }
        }
    }

    /// Automaton lexer over `table`, classified with the Pascal-S states.
    pub fn with_table(table: RuleTable) -> Self {
        let classifier = StateClassifier::pascal(&table);
        info!(
            origin = table.origin(),
            states = table.state_count(),
            transitions = table.transition_count(),
            "automaton scanner ready"
        );
        Self {
            rules: Some(CompiledRules { table, classifier }),
        }
    }

    pub fn fallback() -> Self {
        Self { rules: None }
    }

    pub fn kind(&self) -> ScannerKind {
        if self.rules.is_some() {
            ScannerKind::Automaton
        } else {
            ScannerKind::Fallback
        }
    }

    /// The rule table, when the automaton scanner is in use.
    pub fn table(&self) -> Option<&RuleTable> {
        self.rules.as_ref().map(|rules| &rules.table)
    }

    /// A scanner positioned at the start of `buf`.
    pub fn scanner<'a>(&'a self, buf: &'a SourceBuffer) -> Scanner<'a> {
        match &self.rules {
            Some(rules) => Scanner::automaton(&rules.table, &rules.classifier, buf.cursor()),
            None => Scanner::fallback(buf.cursor()),
        }
    }

    /// Scan the whole of `source`.
    pub fn lex(&self, source: &str) -> Result<Vec<Token>, ScanError> {
        let buf = SourceBuffer::new(source);
        self.scanner(&buf).collect_tokens()
    }
}

#[cfg(test)]
mod tests {
    use pasc_lexer_core::TokenCategory;

    use super::*;

    #[test]
    fn default_config_uses_builtin_automaton() {
        let lexer = Lexer::from_config(&LexerConfig::default());
        assert_eq!(lexer.kind(), ScannerKind::Automaton);
        assert_eq!(
            lexer.table().map(RuleTable::origin),
            Some(crate::BUILTIN_ORIGIN)
        );
    }

    #[test]
    fn fallback_config_skips_rule_loading() {
        let config = LexerConfig::new(ScannerKind::Fallback).with_rule_file("/no/such/rules");
        let lexer = Lexer::from_config(&config);
        assert_eq!(lexer.kind(), ScannerKind::Fallback);
        assert!(lexer.table().is_none());
    }

    #[test]
    fn unreadable_rules_fall_back() {
        let config = LexerConfig::default().with_rule_file("/no/such/rules");
        let lexer = Lexer::from_config(&config);
        assert_eq!(lexer.kind(), ScannerKind::Fallback);
        assert_eq!(
            lexer.lex("x;"),
            Ok(vec![
                Token::new(TokenCategory::Identifier, "x"),
                Token::new(TokenCategory::Semicolon, ";"),
            ])
        );
    }

    #[test]
    fn rule_source_load() {
        assert!(RuleSource::Builtin.load().is_ok());
        assert!(RuleSource::File("/no/such/rules".into()).load().is_err());
    }
}
