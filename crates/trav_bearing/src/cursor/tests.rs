use super::Cursor;

// === Basic Navigation ===

#[test]
fn current_returns_first_byte() {
    let cursor = Cursor::new("N45");
    assert_eq!(cursor.current(), b'N');
}

#[test]
fn advance_moves_forward() {
    let mut cursor = Cursor::new("N45");
    cursor.advance();
    assert_eq!(cursor.current(), b'4');
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn current_at_eof_is_zero() {
    let mut cursor = Cursor::new("N");
    cursor.advance();
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), 0);
}

// === Eating ===

#[test]
fn eat_while_counts_digits() {
    let mut cursor = Cursor::new("123°");
    let start = cursor.pos();
    assert_eq!(cursor.eat_while(|b| b.is_ascii_digit()), 3);
    assert_eq!(cursor.slice_from(start), b"123");
}

#[test]
fn eat_while_stops_at_eof() {
    let mut cursor = Cursor::new("99");
    assert_eq!(cursor.eat_while(|b| b.is_ascii_digit()), 2);
    assert!(cursor.is_eof());
}

#[test]
fn eat_whitespace_reports_progress() {
    let mut cursor = Cursor::new(" \t4");
    assert!(cursor.eat_whitespace());
    assert!(!cursor.eat_whitespace());
    assert_eq!(cursor.current(), b'4');
}

#[test]
fn eat_str_matches_multibyte_symbol() {
    let mut cursor = Cursor::new("°30");
    assert!(cursor.eat_str("°"));
    assert_eq!(cursor.current(), b'3');
    assert!(!cursor.eat_str("°"));
}

#[test]
fn eat_str_near_end_does_not_overrun() {
    let mut cursor = Cursor::new("4");
    cursor.advance();
    assert!(!cursor.eat_str("°"));
    assert!(cursor.is_eof());
}
