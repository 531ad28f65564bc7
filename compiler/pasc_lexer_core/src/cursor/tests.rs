use crate::SourceBuffer;

// === Basic Navigation ===

#[test]
fn current_returns_first_byte() {
    let buf = SourceBuffer::new("var");
    assert_eq!(buf.cursor().current(), b'v');
}

#[test]
fn advance_moves_forward() {
    let buf = SourceBuffer::new("var");
    let mut cursor = buf.cursor();
    cursor.advance();
    assert_eq!(cursor.current(), b'a');
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn peek_looks_one_byte_ahead() {
    let buf = SourceBuffer::new("(*x");
    let cursor = buf.cursor();
    assert_eq!(cursor.current(), b'(');
    assert_eq!(cursor.peek(), b'*');
}

#[test]
fn interior_null_is_not_eof() {
    let buf = SourceBuffer::new("a\0b");
    let mut cursor = buf.cursor();
    cursor.advance();
    assert_eq!(cursor.current(), 0);
    assert!(!cursor.is_eof());
    assert_eq!(cursor.bump(), Some('\0'));
    assert_eq!(cursor.bump(), Some('b'));
    assert!(cursor.is_eof());
}

// === Characters ===

#[test]
fn bump_returns_chars_then_none() {
    let buf = SourceBuffer::new("ab");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.bump(), Some('a'));
    assert_eq!(cursor.bump(), Some('b'));
    assert_eq!(cursor.bump(), None);
    assert_eq!(cursor.pos(), 2);
}

#[test]
fn bump_decodes_multibyte() {
    let buf = SourceBuffer::new("é!");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.current_char(), Some('é'));
    assert_eq!(cursor.bump(), Some('é'));
    assert_eq!(cursor.pos(), 2);
    assert_eq!(cursor.bump(), Some('!'));
}

#[test]
fn advance_char_skips_whole_code_point() {
    let buf = SourceBuffer::new("\u{1F600}x");
    let mut cursor = buf.cursor();
    cursor.advance_char();
    assert_eq!(cursor.pos(), 4);
    assert_eq!(cursor.current(), b'x');
}

// === Backtracking ===

#[test]
fn reset_to_restores_position() {
    let buf = SourceBuffer::new("abc");
    let mut cursor = buf.cursor();
    cursor.bump();
    let checkpoint = cursor.pos();
    cursor.bump();
    cursor.bump();
    assert!(cursor.is_eof());
    cursor.reset_to(checkpoint);
    assert_eq!(cursor.current_char(), Some('b'));
}

#[test]
fn copies_are_independent() {
    let buf = SourceBuffer::new("abc");
    let mut cursor = buf.cursor();
    let snapshot = cursor;
    cursor.advance_n(2);
    assert_eq!(snapshot.pos(), 0);
    assert_eq!(cursor.pos(), 2);
}

// === Slice ===

#[test]
fn slice_extracts_substring() {
    let buf = SourceBuffer::new("begin end");
    let cursor = buf.cursor();
    assert_eq!(cursor.slice(0, 5), "begin");
    assert_eq!(cursor.slice(6, 9), "end");
    assert_eq!(cursor.slice(3, 3), "");
}

#[test]
fn slice_from_extracts_to_current() {
    let buf = SourceBuffer::new("downto");
    let mut cursor = buf.cursor();
    cursor.advance_n(4);
    assert_eq!(cursor.slice_from(0), "down");
}

// === Eating ===

#[test]
fn eat_while_stops_at_predicate() {
    let buf = SourceBuffer::new("123abc");
    let mut cursor = buf.cursor();
    cursor.eat_while(|b| b.is_ascii_digit());
    assert_eq!(cursor.pos(), 3);
}

#[test]
fn eat_while_stops_at_eof() {
    let buf = SourceBuffer::new("999");
    let mut cursor = buf.cursor();
    cursor.eat_while(|b| b.is_ascii_digit());
    assert!(cursor.is_eof());
}

#[test]
fn eat_whitespace_includes_newlines() {
    let buf = SourceBuffer::new(" \t\r\n  x");
    let mut cursor = buf.cursor();
    cursor.eat_whitespace();
    assert_eq!(cursor.current(), b'x');
    assert_eq!(cursor.pos(), 6);
}

#[test]
fn eat_whitespace_stops_at_eof() {
    let buf = SourceBuffer::new("   ");
    let mut cursor = buf.cursor();
    cursor.eat_whitespace();
    assert!(cursor.is_eof());
}

#[test]
fn eat_until_finds_byte() {
    let buf = SourceBuffer::new("{ comment } x");
    let mut cursor = buf.cursor();
    assert!(cursor.eat_until(b'}'));
    assert_eq!(cursor.pos(), 10);
}

#[test]
fn eat_until_missing_moves_to_eof() {
    let buf = SourceBuffer::new("{ never closed");
    let mut cursor = buf.cursor();
    assert!(!cursor.eat_until(b'}'));
    assert!(cursor.is_eof());
}

#[test]
fn eat_until_seq_finds_close() {
    let buf = SourceBuffer::new("(* a * b *) c");
    let mut cursor = buf.cursor();
    cursor.advance_n(2);
    assert!(cursor.eat_until_seq(b"*)"));
    assert_eq!(cursor.pos(), 9);
}

#[test]
fn eat_until_seq_missing_moves_to_eof() {
    let buf = SourceBuffer::new("(* open");
    let mut cursor = buf.cursor();
    cursor.advance_n(2);
    assert!(!cursor.eat_until_seq(b"*)"));
    assert!(cursor.is_eof());
}
