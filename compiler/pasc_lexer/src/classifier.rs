//! Final-state classification and token finalization.
//!
//! The classifier maps the final states of one [`RuleTable`] to what
//! reaching them means: a token of some category, or a comment to skip.
//! Finalizing a lexeme also applies the two disambiguation rules shared
//! with the fallback scanner:
//!
//! - identifier lexemes are re-checked against the reserved words
//! - quoted literal lexemes are cooked (quotes stripped, escapes decoded)

use pasc_lexer_core::keywords::resolve_identifier;
use pasc_lexer_core::literal::cook_literal;
use pasc_lexer_core::{ScanError, Token, TokenCategory};
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::{RuleTable, StateId};

/// Meaning of a final state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StateClass {
    Token(TokenCategory),
    /// Consumed silently; scanning resumes after it.
    Comment,
}

/// Final-state names of the built-in rule table and their classes.
pub const PASCAL_STATES: &[(&str, StateClass)] = &[
    ("S_ID", StateClass::Token(TokenCategory::Identifier)),
    ("S_NUM", StateClass::Token(TokenCategory::Number)),
    ("S_ARITH", StateClass::Token(TokenCategory::ArithmeticOperator)),
    ("S_EQ", StateClass::Token(TokenCategory::RelationalOperator)),
    ("S_LT", StateClass::Token(TokenCategory::RelationalOperator)),
    ("S_LE", StateClass::Token(TokenCategory::RelationalOperator)),
    ("S_NE", StateClass::Token(TokenCategory::RelationalOperator)),
    ("S_GT", StateClass::Token(TokenCategory::RelationalOperator)),
    ("S_GE", StateClass::Token(TokenCategory::RelationalOperator)),
    ("S_COLON", StateClass::Token(TokenCategory::Colon)),
    ("S_ASSIGN", StateClass::Token(TokenCategory::AssignOperator)),
    ("S_SEMICOLON", StateClass::Token(TokenCategory::Semicolon)),
    ("S_COMMA", StateClass::Token(TokenCategory::Comma)),
    ("S_DOT", StateClass::Token(TokenCategory::Dot)),
    ("S_RANGE", StateClass::Token(TokenCategory::RangeOperator)),
    ("S_LPAREN", StateClass::Token(TokenCategory::LeftParen)),
    ("S_RPAREN", StateClass::Token(TokenCategory::RightParen)),
    ("S_LBRACKET", StateClass::Token(TokenCategory::LeftBracket)),
    ("S_RBRACKET", StateClass::Token(TokenCategory::RightBracket)),
    ("S_CHAR_END", StateClass::Token(TokenCategory::CharLiteral)),
    ("S_STR_END", StateClass::Token(TokenCategory::StringLiteral)),
    ("S_BCOMMENT_END", StateClass::Comment),
    ("S_PCOMMENT_END", StateClass::Comment),
];

/// Immutable map from final states to [`StateClass`].
///
/// Keyed by [`StateId`], so a classifier only makes sense alongside the
/// table it was built for.
#[derive(Clone, Debug, Default)]
pub struct StateClassifier {
    classes: FxHashMap<StateId, StateClass>,
}

impl StateClassifier {
    /// Build a classifier for `table` from `(state name, class)` entries.
    ///
    /// Names the table never mentions are ignored.
    pub fn new<'n>(
        table: &RuleTable,
        entries: impl IntoIterator<Item = (&'n str, StateClass)>,
    ) -> Self {
        let mut classes = FxHashMap::default();
        for (name, class) in entries {
            match table.state_id(name) {
                Some(id) => {
                    classes.insert(id, class);
                }
                None => debug!(state = name, "classified state not in rule table"),
            }
        }
        for state in table.final_states() {
            if !classes.contains_key(&state) {
                debug!(state = table.state_name(state), "final state has no class");
            }
        }
        Self { classes }
    }

    /// Classifier for rule tables that use the Pascal-S state names.
    pub fn pascal(table: &RuleTable) -> Self {
        Self::new(table, PASCAL_STATES.iter().copied())
    }

    #[inline]
    pub fn classify(&self, state: StateId) -> Option<StateClass> {
        self.classes.get(&state).copied()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Turn the lexeme accepted in `state` into a token.
    ///
    /// Returns `Ok(None)` for comment states.
    pub fn finalize(
        &self,
        table: &RuleTable,
        state: StateId,
        lexeme: &str,
    ) -> Result<Option<Token>, ScanError> {
        match self.classify(state) {
            Some(StateClass::Token(category)) => Ok(Some(cook(category, lexeme))),
            Some(StateClass::Comment) => Ok(None),
            None => Err(ScanError::UnclassifiedState {
                name: table.state_name(state).to_owned(),
            }),
        }
    }
}

fn cook(category: TokenCategory, lexeme: &str) -> Token {
    match category {
        TokenCategory::Identifier => Token::new(resolve_identifier(lexeme), lexeme),
        category if category.is_literal() => cook_literal(category, lexeme),
        category => Token::new(category, lexeme),
    }
}
