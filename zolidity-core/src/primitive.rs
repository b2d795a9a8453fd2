//! Single-character recognizers.
//!
//! Each primitive either consumes exactly one character that satisfies its
//! predicate and returns it, or returns `None` and leaves the cursor where
//! it was. End of input is an ordinary non-match.

use crate::cursor::Cursor;

/// Consume one character if `pred` accepts it.
#[inline]
pub fn satisfy<'a>(cursor: &mut Cursor<'a>, pred: impl FnOnce(char) -> bool) -> Option<&'a str> {
    match cursor.peek() {
        Some(ch) if pred(ch) => cursor.bump(),
        _ => None,
    }
}

/// ASCII letter: `a-z`, `A-Z`.
#[inline]
pub fn letter<'a>(cursor: &mut Cursor<'a>) -> Option<&'a str> {
    satisfy(cursor, |ch| ch.is_ascii_alphabetic())
}

/// `0-9`.
#[inline]
pub fn decimal_digit<'a>(cursor: &mut Cursor<'a>) -> Option<&'a str> {
    satisfy(cursor, |ch| ch.is_ascii_digit())
}

/// `0-9`, `a-f`, `A-F`.
#[inline]
pub fn hex_digit<'a>(cursor: &mut Cursor<'a>) -> Option<&'a str> {
    satisfy(cursor, |ch| ch.is_ascii_hexdigit())
}

/// Exactly `expected`.
#[inline]
pub fn char<'a>(cursor: &mut Cursor<'a>, expected: char) -> Option<&'a str> {
    satisfy(cursor, |ch| ch == expected)
}

/// Any character contained in `set`.
#[inline]
pub fn one_of<'a>(cursor: &mut Cursor<'a>, set: &str) -> Option<&'a str> {
    satisfy(cursor, |ch| set.contains(ch))
}

/// Any character not contained in `set`.
#[inline]
pub fn none_of<'a>(cursor: &mut Cursor<'a>, set: &str) -> Option<&'a str> {
    satisfy(cursor, |ch| !set.contains(ch))
}

/// The exact character sequence `word`, all or nothing.
pub fn word<'a>(cursor: &mut Cursor<'a>, word: &str) -> Option<&'a str> {
    let mut cp = cursor.checkpoint();
    for expected in word.chars() {
        if char(&mut cp, expected).is_none() {
            return cp.revert();
        }
    }
    Some(cp.commit())
}

/// Printable ASCII allowed unescaped inside `'...'`: `0x20..=0x7E` except
/// `'` and `\`.
#[inline]
pub fn single_quoted_printable<'a>(cursor: &mut Cursor<'a>) -> Option<&'a str> {
    satisfy(cursor, |ch| matches!(ch, ' '..='~') && ch != '\'' && ch != '\\')
}

/// Printable ASCII allowed unescaped inside `"..."`: `0x20..=0x7E` except
/// `"` and `\`.
#[inline]
pub fn double_quoted_printable<'a>(cursor: &mut Cursor<'a>) -> Option<&'a str> {
    satisfy(cursor, |ch| matches!(ch, ' '..='~') && ch != '"' && ch != '\\')
}
