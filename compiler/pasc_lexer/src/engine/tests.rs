use pasc_lexer_core::{SourceBuffer, TokenCategory};
use pretty_assertions::assert_eq;

use super::*;
use crate::StateClass;

fn table(source: &str) -> RuleTable {
    match RuleTable::parse(source, "test") {
        Ok(table) => table,
        Err(err) => panic!("{err}"),
    }
}

fn builtin() -> RuleTable {
    match RuleTable::builtin() {
        Ok(table) => table,
        Err(err) => panic!("{err}"),
    }
}

fn scan_with(
    table: &RuleTable,
    classifier: &StateClassifier,
    source: &str,
) -> Result<Vec<Token>, ScanError> {
    let buf = SourceBuffer::new(source);
    ScanEngine::new(table, classifier, buf.cursor()).collect_tokens()
}

fn scan(source: &str) -> Result<Vec<Token>, ScanError> {
    let table = builtin();
    let classifier = StateClassifier::pascal(&table);
    scan_with(&table, &classifier, source)
}

fn texts(tokens: &[Token]) -> Vec<(TokenCategory, &str)> {
    tokens.iter().map(|t| (t.category(), t.text())).collect()
}

/// Table accepting `a`, `ab` and `;`.
const A_AB: &str = "\
Start_state = S0
Final_state = A, AB, SEMI
S0 a A
A b AB
S0 ; SEMI
";

fn a_ab_classifier(table: &RuleTable) -> StateClassifier {
    StateClassifier::new(
        table,
        [
            ("A", StateClass::Token(TokenCategory::Identifier)),
            ("AB", StateClass::Token(TokenCategory::Identifier)),
            ("SEMI", StateClass::Token(TokenCategory::Semicolon)),
        ],
    )
}

// === Longest Match ===

#[test]
fn longest_match_wins() {
    let table = table(A_AB);
    let classifier = a_ab_classifier(&table);
    let tokens = scan_with(&table, &classifier, "ab;").unwrap_or_default();
    assert_eq!(
        texts(&tokens),
        [
            (TokenCategory::Identifier, "ab"),
            (TokenCategory::Semicolon, ";")
        ]
    );
}

#[test]
fn backtracks_over_non_final_suffix() {
    // `abc` passes through the non-final C; the match falls back to `ab`.
    let source = format!("{A_AB}AB c C\n");
    let table = table(&source);
    let classifier = a_ab_classifier(&table);
    assert_eq!(
        scan_with(&table, &classifier, "abc"),
        Err(ScanError::UnrecognizedCharacter { ch: 'c', pos: 2 })
    );

    // `c` is rescanned from the start state after the `ab` token.
    let buf = SourceBuffer::new("abca");
    let results: Vec<_> = ScanEngine::new(&table, &classifier, buf.cursor())
        .tokens()
        .collect();
    assert_eq!(
        results,
        [
            Ok(Token::new(TokenCategory::Identifier, "ab")),
            Err(ScanError::UnrecognizedCharacter { ch: 'c', pos: 2 }),
        ]
    );
}

#[test]
fn unrecognized_first_character() {
    let table = table(A_AB);
    let classifier = a_ab_classifier(&table);
    assert_eq!(
        scan_with(&table, &classifier, "a b"),
        Err(ScanError::UnrecognizedCharacter { ch: 'b', pos: 2 })
    );
}

#[test]
fn missing_start_state_rejects_everything() {
    let table = table("Final_state = A\nS0 a A\n");
    let classifier = StateClassifier::default();
    assert_eq!(
        scan_with(&table, &classifier, "a"),
        Err(ScanError::UnrecognizedCharacter { ch: 'a', pos: 0 })
    );
}

#[test]
fn unclassified_final_state() {
    let table = table(A_AB);
    let classifier = StateClassifier::default();
    assert_eq!(
        scan_with(&table, &classifier, "a"),
        Err(ScanError::UnclassifiedState {
            name: "A".to_owned()
        })
    );
}

#[test]
fn duplicate_transition_uses_last_definition() {
    let source = "\
Start_state = S0
Final_state = NUM, ID
S0 x NUM
S0 x ID
";
    let table = table(source);
    let classifier = StateClassifier::new(
        &table,
        [
            ("NUM", StateClass::Token(TokenCategory::Number)),
            ("ID", StateClass::Token(TokenCategory::Identifier)),
        ],
    );
    let tokens = scan_with(&table, &classifier, "x").unwrap_or_default();
    assert_eq!(texts(&tokens), [(TokenCategory::Identifier, "x")]);
}

#[test]
fn trailing_fragment_without_checkpoint_is_dropped() {
    let source = "\
Start_state = S0
Final_state = AB
S0 a A
A b AB
";
    let table = table(source);
    let classifier =
        StateClassifier::new(&table, [("AB", StateClass::Token(TokenCategory::Identifier))]);
    let tokens = scan_with(&table, &classifier, "ab a").unwrap_or_default();
    assert_eq!(texts(&tokens), [(TokenCategory::Identifier, "ab")]);
}

// === Builtin Table ===

#[test]
fn statement() {
    let tokens = scan("x := x + 1;").unwrap_or_default();
    assert_eq!(
        texts(&tokens),
        [
            (TokenCategory::Identifier, "x"),
            (TokenCategory::AssignOperator, ":="),
            (TokenCategory::Identifier, "x"),
            (TokenCategory::ArithmeticOperator, "+"),
            (TokenCategory::Number, "1"),
            (TokenCategory::Semicolon, ";"),
        ]
    );
}

#[test]
fn keyword_carve_out() {
    let tokens = scan("begin beginning end").unwrap_or_default();
    assert_eq!(
        texts(&tokens),
        [
            (TokenCategory::Keyword, "begin"),
            (TokenCategory::Identifier, "beginning"),
            (TokenCategory::Keyword, "end"),
        ]
    );
}

#[test]
fn comment_transparency() {
    let tokens = scan("a {skip this} b").unwrap_or_default();
    assert_eq!(
        texts(&tokens),
        [
            (TokenCategory::Identifier, "a"),
            (TokenCategory::Identifier, "b")
        ]
    );
}

#[test]
fn comment_only_input_runs_in_a_loop() {
    let source = "(* c *) ".repeat(50_000);
    assert_eq!(scan(&source), Ok(Vec::new()));
}

#[test]
fn range_needs_two_dots() {
    let tokens = scan("1..10 a.b").unwrap_or_default();
    assert_eq!(
        texts(&tokens),
        [
            (TokenCategory::Number, "1"),
            (TokenCategory::RangeOperator, ".."),
            (TokenCategory::Number, "10"),
            (TokenCategory::Identifier, "a"),
            (TokenCategory::Dot, "."),
            (TokenCategory::Identifier, "b"),
        ]
    );
}

#[test]
fn literals() {
    let tokens = scan(r"'a\nb' 'x' '' 'it\'s'").unwrap_or_default();
    assert_eq!(
        texts(&tokens),
        [
            (TokenCategory::StringLiteral, "a\nb"),
            (TokenCategory::CharLiteral, "x"),
            (TokenCategory::CharLiteral, ""),
            (TokenCategory::StringLiteral, "it's"),
        ]
    );
}

#[test]
fn unterminated_literal() {
    assert_eq!(
        scan("x := 'abc"),
        Err(ScanError::UnterminatedLiteral { pos: 5 })
    );
}

#[test]
fn unterminated_brace_comment_is_dropped() {
    assert_eq!(scan("a { b c").map(|t| t.len()), Ok(1));
}

#[test]
fn unclosed_paren_comment_backtracks_to_paren() {
    let tokens = scan("(* x").unwrap_or_default();
    assert_eq!(
        texts(&tokens),
        [
            (TokenCategory::LeftParen, "("),
            (TokenCategory::ArithmeticOperator, "*"),
            (TokenCategory::Identifier, "x"),
        ]
    );
}

#[test]
fn newline_inside_literal_is_rejected() {
    assert_eq!(
        scan("'a\nb'"),
        Err(ScanError::UnrecognizedCharacter { ch: '\n', pos: 2 })
    );
}

#[test]
fn stray_characters() {
    assert_eq!(
        scan("}"),
        Err(ScanError::UnrecognizedCharacter { ch: '}', pos: 0 })
    );
    assert_eq!(
        scan("a é"),
        Err(ScanError::UnrecognizedCharacter { ch: 'é', pos: 2 })
    );
}

#[test]
fn exhausted_engine_keeps_returning_none() {
    let table = builtin();
    let classifier = StateClassifier::pascal(&table);
    let buf = SourceBuffer::new("x");
    let mut engine = ScanEngine::new(&table, &classifier, buf.cursor());
    assert!(matches!(engine.next_token(), Ok(Some(_))));
    assert_eq!(engine.next_token(), Ok(None));
    assert_eq!(engine.next_token(), Ok(None));
    assert_eq!(engine.pos(), 1);
}
