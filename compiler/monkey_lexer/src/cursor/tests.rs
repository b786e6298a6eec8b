use super::Cursor;

// === Basic Navigation ===

#[test]
fn current_returns_first_byte() {
    let cursor = Cursor::new("abc");
    assert_eq!(cursor.current(), b'a');
    assert_eq!(cursor.pos(), 0);
}

#[test]
fn advance_moves_forward() {
    let mut cursor = Cursor::new("abc");
    cursor.advance();
    assert_eq!(cursor.current(), b'b');
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn advance_through_entire_source() {
    let mut cursor = Cursor::new("hi");
    assert_eq!(cursor.current(), b'h');
    cursor.advance();
    assert_eq!(cursor.current(), b'i');
    cursor.advance();
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), 0);
}

#[test]
fn advance_at_eof_is_noop() {
    let mut cursor = Cursor::new("x");
    cursor.advance();
    cursor.advance();
    cursor.advance();
    assert_eq!(cursor.pos(), 1);
    assert!(cursor.is_eof());
}

#[test]
fn at_clamps_to_source_len() {
    let cursor = Cursor::at("abc", 10);
    assert_eq!(cursor.pos(), 3);
    assert!(cursor.is_eof());

    let cursor = Cursor::at("abc", 1);
    assert_eq!(cursor.current(), b'b');
}

#[test]
fn at_inside_character_moves_to_next_boundary() {
    // U+00E9 is 2 bytes, U+1F600 is 4
    let cursor = Cursor::at("\u{e9}x", 1);
    assert_eq!(cursor.pos(), 2);
    assert_eq!(cursor.current(), b'x');

    let cursor = Cursor::at("\u{1F600}", 2);
    assert_eq!(cursor.pos(), 4);
    assert!(cursor.is_eof());
}

// === EOF Detection ===

#[test]
fn is_eof_on_empty_source() {
    let cursor = Cursor::new("");
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), 0);
}

#[test]
fn interior_null_is_not_eof() {
    let mut cursor = Cursor::new("a\0b");
    cursor.advance(); // at '\0'
    assert_eq!(cursor.current(), 0);
    assert!(!cursor.is_eof());
    cursor.advance();
    assert_eq!(cursor.current(), b'b');
}

// === Slice ===

#[test]
fn slice_extracts_substring() {
    let cursor = Cursor::new("hello world");
    assert_eq!(cursor.slice(0, 5), "hello");
    assert_eq!(cursor.slice(6, 11), "world");
}

#[test]
fn slice_from_extracts_to_current() {
    let mut cursor = Cursor::at("abcdef", 3);
    assert_eq!(cursor.slice_from(0), "abc");
    cursor.advance();
    assert_eq!(cursor.slice_from(1), "bcd");
}

#[test]
fn slice_empty_range() {
    let cursor = Cursor::new("hello");
    assert_eq!(cursor.slice(2, 2), "");
}

#[test]
fn slice_splitting_a_character_is_empty() {
    let cursor = Cursor::new("\u{e9}");
    assert_eq!(cursor.slice(0, 1), "");
}

// === eat_while ===

#[test]
fn eat_while_consumes_matching_bytes() {
    let mut cursor = Cursor::new("aaabbb");
    cursor.eat_while(|b| b == b'a');
    assert_eq!(cursor.pos(), 3);
    assert_eq!(cursor.current(), b'b');
}

#[test]
fn eat_while_stops_at_eof() {
    let mut cursor = Cursor::new("aaa");
    cursor.eat_while(|b| b == b'a');
    assert_eq!(cursor.pos(), 3);
    assert!(cursor.is_eof());
}

#[test]
fn eat_while_stops_at_eof_even_if_pred_accepts_zero() {
    let mut cursor = Cursor::new("\0\0");
    cursor.eat_while(|b| b == 0);
    assert_eq!(cursor.pos(), 2);
}

// === UTF-8 ===

#[test]
fn utf8_char_width_by_leading_byte() {
    assert_eq!(Cursor::utf8_char_width(b'a'), 1);
    assert_eq!(Cursor::utf8_char_width(0xC3), 2);
    assert_eq!(Cursor::utf8_char_width(0xE2), 3);
    assert_eq!(Cursor::utf8_char_width(0xF0), 4);
}

#[test]
fn advance_char_skips_multibyte_character() {
    // U+1F600 is 4 bytes
    let mut cursor = Cursor::new("\u{1F600}x");
    cursor.advance_char();
    assert_eq!(cursor.pos(), 4);
    assert_eq!(cursor.current(), b'x');
}

#[test]
fn advance_char_at_eof_is_noop() {
    let mut cursor = Cursor::new("");
    cursor.advance_char();
    assert_eq!(cursor.pos(), 0);
}
