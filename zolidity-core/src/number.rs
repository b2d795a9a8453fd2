//! Numeric literals.
//!
//! Digit runs may be grouped with single underscores between digits:
//! `1_000`, `0xdead_beef`. A run may not start or end with `_` and may not
//! contain `__`.

use crate::combinator::{atomic, many, optional, Rule};
use crate::cursor::Cursor;
use crate::keyword::number_unit;
use crate::primitive::{char, decimal_digit, hex_digit, one_of, word};

/// `digit ('_'? digit)*` for the given digit class.
///
/// The greedy loop cannot tell "stopped before a non-digit" from "stopped
/// inside `_`, `__` or a trailing `_`", so the character after the loop is
/// checked on the raw input.
fn grouped_digits<'a>(cursor: &mut Cursor<'a>, digit: Rule) -> Option<&'a str> {
    let mut cp = cursor.checkpoint();
    digit(&mut cp)?;
    many(&mut cp, |c| {
        digit(c).or_else(|| {
            atomic(c, |c| {
                char(c, '_')?;
                digit(c)
            })
        })
    });
    if cp.peek() == Some('_') {
        return cp.revert();
    }
    Some(cp.commit())
}

/// Decimal digits with underscore grouping.
pub fn decimal_digits<'a>(cursor: &mut Cursor<'a>) -> Option<&'a str> {
    grouped_digits(cursor, decimal_digit)
}

/// `0x` followed by grouped hex digits.
///
/// `0x` alone and `0x1a_` are rejected. `0x1g` matches `0x1`.
pub fn hex_number<'a>(cursor: &mut Cursor<'a>) -> Option<&'a str> {
    let mut cp = cursor.checkpoint();
    word(&mut cp, "0x")?;
    grouped_digits(&mut cp, hex_digit)?;
    Some(cp.commit())
}

/// `digits ('.' digits)? ([eE] '-'? digits)?`
///
/// Once `.` or the exponent marker is consumed its digits are mandatory,
/// and a missing part rejects the whole number: `1.` and `1e` do not match
/// at all.
pub fn decimal_number<'a>(cursor: &mut Cursor<'a>) -> Option<&'a str> {
    let mut cp = cursor.checkpoint();
    decimal_digits(&mut cp)?;
    if char(&mut cp, '.').is_some() {
        decimal_digits(&mut cp)?;
    }
    if one_of(&mut cp, "eE").is_some() {
        optional(&mut cp, |c| char(c, '-'));
        decimal_digits(&mut cp)?;
    }
    Some(cp.commit())
}

/// A hex or decimal number with an optional unit suffix (`1 ether`,
/// `30minutes`).
///
/// Unlike the Solidity grammar rule, which leaves whitespace to the
/// tokenizer, spaces or tabs before the unit are accepted here. They are
/// consumed only together with the unit.
///
/// A unit glued to a decimal number must not start with `e`: in `1ether`
/// the `e` opens an exponent with no digits, so the whole number fails.
pub fn number_literal<'a>(cursor: &mut Cursor<'a>) -> Option<&'a str> {
    let mut cp = cursor.checkpoint();
    hex_number(&mut cp).or_else(|| decimal_number(&mut cp))?;
    optional(&mut cp, |c| {
        many(c, |c| one_of(c, " \t"));
        number_unit(c)
    });
    Some(cp.commit())
}
