//! Identifiers and word-shaped literals.

use crate::combinator::many;
use crate::cursor::Cursor;
use crate::primitive::{decimal_digit, letter, one_of, word};

/// Can `ch` continue an identifier?
#[inline]
pub fn is_identifier_part(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '$' || ch == '_'
}

/// `(letter | '$' | '_') (letter | digit | '$' | '_')*`
pub fn identifier<'a>(cursor: &mut Cursor<'a>) -> Option<&'a str> {
    let mut cp = cursor.checkpoint();
    if letter(&mut cp).or_else(|| one_of(&mut cp, "$_")).is_none() {
        return cp.revert();
    }
    many(&mut cp, |c| {
        letter(c)
            .or_else(|| decimal_digit(c))
            .or_else(|| one_of(c, "$_"))
    });
    Some(cp.commit())
}

/// `true` or `false`, case-sensitive.
///
/// With [`Options::word_boundaries`](crate::Options) set (the default) the
/// word must not be followed by an identifier character.
pub fn boolean_literal<'a>(cursor: &mut Cursor<'a>) -> Option<&'a str> {
    let mut cp = cursor.checkpoint();
    if word(&mut cp, "true").or_else(|| word(&mut cp, "false")).is_none() {
        return cp.revert();
    }
    if cp.options().word_boundaries && cp.peek().is_some_and(is_identifier_part) {
        return cp.revert();
    }
    Some(cp.commit())
}
