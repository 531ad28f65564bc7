//! File-level tests for the `pasc` command handlers.

use std::path::{Path, PathBuf};

use pasc::commands::{cross_check_source, read_file, write_tokens, OutputFormat};
use pasc_lexer::{Lexer, LexerConfig, RuleSource, ScannerKind};
use pretty_assertions::assert_eq;
use tempfile::{tempdir, TempDir};

const PROGRAM: &str = "program hello;\nbegin\n  writeln('hi')\nend.\n";

fn scratch_dir() -> TempDir {
    match tempdir() {
        Ok(dir) => dir,
        Err(err) => panic!("cannot create scratch directory: {err}"),
    }
}

fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    if let Err(err) = std::fs::write(&path, contents) {
        panic!("cannot write {}: {err}", path.display());
    }
    path
}

fn lex_file(path: &Path, config: &LexerConfig) -> String {
    let source = match read_file(path) {
        Ok(source) => source,
        Err(err) => panic!("{err}"),
    };
    let lexer = Lexer::from_config(config);
    let mut out = Vec::new();
    if let Err(err) = write_tokens(&source, &lexer, OutputFormat::Text, &mut out) {
        panic!("{err}");
    }
    String::from_utf8_lossy(&out).into_owned()
}

#[test]
fn program_file_lexes_the_same_with_both_scanners() {
    let dir = scratch_dir();
    let path = write_file(&dir, "hello.pas", PROGRAM);
    let expected = "KEYWORD(program)\nIDENTIFIER(hello)\nSEMICOLON(;)\nKEYWORD(begin)\n\
                    IDENTIFIER(writeln)\nLPARENTHESIS(()\nSTRING_LITERAL(hi)\n\
                    RPARENTHESIS())\nKEYWORD(end)\nDOT(.)\n";
    for kind in ScannerKind::ALL {
        assert_eq!(lex_file(&path, &LexerConfig::new(kind)), expected);
    }
}

#[test]
fn rule_file_drives_the_automaton() {
    let dir = scratch_dir();
    let rules = write_file(
        &dir,
        "digits.dfa",
        "Start_state = S0\nFinal_state = S_NUM\nS0 1 S_NUM\nS_NUM 1 S_NUM\n",
    );
    let input = write_file(&dir, "ones.pas", "11 1");
    let config = LexerConfig::new(ScannerKind::Automaton).with_rule_file(rules);
    assert_eq!(lex_file(&input, &config), "NUMBER(11)\nNUMBER(1)\n");
}

#[test]
fn unreadable_rule_file_falls_back_to_hand_written_scanner() {
    let dir = scratch_dir();
    let input = write_file(&dir, "fallback.pas", "x := 1");
    let config = LexerConfig::new(ScannerKind::Automaton)
        .with_rules(RuleSource::File(dir.path().join("missing.dfa")));
    assert_eq!(Lexer::from_config(&config).kind(), ScannerKind::Fallback);
    assert_eq!(
        lex_file(&input, &config),
        "IDENTIFIER(x)\nASSIGN_OPERATOR(:=)\nNUMBER(1)\n"
    );
}

#[test]
fn cross_check_of_a_program_file() {
    let dir = scratch_dir();
    let path = write_file(&dir, "cross.pas", PROGRAM);
    let source = match read_file(&path) {
        Ok(source) => source,
        Err(err) => panic!("{err}"),
    };
    let table = match RuleSource::Builtin.load() {
        Ok(table) => table,
        Err(err) => panic!("{err}"),
    };
    let mut out = Vec::new();
    assert!(matches!(cross_check_source(&source, &table, &mut out), Ok(true)));
    assert_eq!(String::from_utf8_lossy(&out), "scanners agree on 10 tokens\n");
}

#[test]
fn scratch_files_are_removed_when_a_test_fails() {
    let dir = scratch_dir();
    let path = write_file(&dir, "doomed.pas", PROGRAM);
    let inside = path.clone();
    let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(move || {
        let _dir = dir;
        assert_eq!(lex_file(&inside, &LexerConfig::default()), "");
    }));
    assert!(outcome.is_err());
    assert!(!path.exists(), "{} outlived its test", path.display());
}
