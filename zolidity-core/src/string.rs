//! String literals: plain, hex and unicode, plus escape sequences.
//!
//! Every form is delimited by `"` or `'`. The opening quote decides which
//! closing quote is required; the other quote character is ordinary body
//! text.

use crate::combinator::{atomic, many, many1, optional, repeat};
use crate::cursor::Cursor;
use crate::primitive::{
    char, double_quoted_printable, hex_digit, none_of, one_of, single_quoted_printable, word,
};

/// `\` followed by one of `' " \ n r t`, a literal line break, `uNNNN` or
/// `xNN`.
pub fn escape_sequence<'a>(cursor: &mut Cursor<'a>) -> Option<&'a str> {
    let mut cp = cursor.checkpoint();
    char(&mut cp, '\\')?;
    one_of(&mut cp, "'\"\\nrt\n\r")
        .or_else(|| {
            atomic(&mut cp, |c| {
                char(c, 'u')?;
                repeat(c, 4, hex_digit)
            })
        })
        .or_else(|| {
            atomic(&mut cp, |c| {
                char(c, 'x')?;
                repeat(c, 2, hex_digit)
            })
        })?;
    Some(cp.commit())
}

/// `""` or `''`.
pub fn empty_string<'a>(cursor: &mut Cursor<'a>) -> Option<&'a str> {
    repeat(cursor, 2, |c| char(c, '"')).or_else(|| repeat(cursor, 2, |c| char(c, '\'')))
}

/// Open with `"` or `'`, run `body` for that quote, require the same quote
/// to close. Any failure reverts the whole literal.
fn quoted<'a>(
    cursor: &mut Cursor<'a>,
    body: impl FnOnce(&mut Cursor<'a>, char) -> Option<&'a str>,
) -> Option<&'a str> {
    let mut cp = cursor.checkpoint();
    let quote = if char(&mut cp, '"').is_some() {
        '"'
    } else if char(&mut cp, '\'').is_some() {
        '\''
    } else {
        return cp.revert();
    };
    body(&mut cp, quote)?;
    char(&mut cp, quote)?;
    Some(cp.commit())
}

/// One body element of a plain string: printable ASCII or an escape.
fn plain_character<'a>(cursor: &mut Cursor<'a>, quote: char) -> Option<&'a str> {
    let printable = if quote == '"' {
        double_quoted_printable(cursor)
    } else {
        single_quoted_printable(cursor)
    };
    printable.or_else(|| escape_sequence(cursor))
}

/// One body element of a unicode string: anything but the quote, a line
/// break or a backslash, or an escape.
fn unicode_character<'a>(cursor: &mut Cursor<'a>, quote: char) -> Option<&'a str> {
    let stop = if quote == '"' { "\"\r\n\\" } else { "'\r\n\\" };
    none_of(cursor, stop).or_else(|| escape_sequence(cursor))
}

/// Exactly two hex digits.
fn hex_pair<'a>(cursor: &mut Cursor<'a>) -> Option<&'a str> {
    repeat(cursor, 2, hex_digit)
}

/// Empty, or `pair ('_'? pair)*`.
fn hex_body<'a>(cursor: &mut Cursor<'a>, _quote: char) -> Option<&'a str> {
    Some(optional(cursor, |c| {
        hex_pair(c)?;
        Some(many(c, |c| {
            hex_pair(c).or_else(|| {
                atomic(c, |c| {
                    char(c, '_')?;
                    hex_pair(c)
                })
            })
        }))
    }))
}

/// A quoted plain string, possibly empty.
pub fn quoted_string<'a>(cursor: &mut Cursor<'a>) -> Option<&'a str> {
    quoted(cursor, |c, quote| Some(many(c, |c| plain_character(c, quote))))
}

/// A quoted plain string with at least one character.
pub fn non_empty_string<'a>(cursor: &mut Cursor<'a>) -> Option<&'a str> {
    quoted(cursor, |c, quote| many1(c, |c| plain_character(c, quote)))
}

/// One or more adjacent plain strings: `"abc"'def'""`.
pub fn string_literal<'a>(cursor: &mut Cursor<'a>) -> Option<&'a str> {
    many1(cursor, |c| non_empty_string(c).or_else(|| empty_string(c)))
}

/// `hex` followed by one or more quoted segments of hex byte pairs.
pub fn hex_string<'a>(cursor: &mut Cursor<'a>) -> Option<&'a str> {
    let mut cp = cursor.checkpoint();
    word(&mut cp, "hex")?;
    many1(&mut cp, |c| quoted(c, hex_body))?;
    Some(cp.commit())
}

/// `unicode` followed by one or more quoted segments.
pub fn unicode_string<'a>(cursor: &mut Cursor<'a>) -> Option<&'a str> {
    let mut cp = cursor.checkpoint();
    word(&mut cp, "unicode")?;
    many1(&mut cp, |c| quoted(c, |c, quote| Some(many(c, |c| unicode_character(c, quote)))))?;
    Some(cp.commit())
}

/// Zero or more hex strings. Always matches, possibly the empty span.
pub fn hex_string_literal<'a>(cursor: &mut Cursor<'a>) -> Option<&'a str> {
    Some(many(cursor, hex_string))
}

/// Zero or more unicode strings. Always matches, possibly the empty span.
pub fn unicode_string_literal<'a>(cursor: &mut Cursor<'a>) -> Option<&'a str> {
    Some(many(cursor, unicode_string))
}
