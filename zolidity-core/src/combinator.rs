//! Backtracking combinators.
//!
//! All combinators settle their own checkpoint before returning, so they
//! compose freely: a failed combinator leaves the cursor untouched.

use crate::cursor::Cursor;

/// A grammar rule: returns the matched text, or `None` with the cursor
/// unchanged.
pub type Rule = for<'a> fn(&mut Cursor<'a>) -> Option<&'a str>;

/// Run `f` once as an indivisible unit.
///
/// On success the whole span consumed by `f` is committed and returned, on
/// failure everything `f` consumed is given back.
#[inline]
pub fn atomic<'a, T>(
    cursor: &mut Cursor<'a>,
    f: impl FnOnce(&mut Cursor<'a>) -> Option<T>,
) -> Option<&'a str> {
    let mut cp = cursor.checkpoint();
    match f(&mut *cp) {
        Some(_) => Some(cp.commit()),
        None => cp.revert(),
    }
}

/// Run `f` exactly `n` times; if any run fails, revert all of them.
pub fn repeat<'a, T>(
    cursor: &mut Cursor<'a>,
    n: usize,
    mut f: impl FnMut(&mut Cursor<'a>) -> Option<T>,
) -> Option<&'a str> {
    let mut cp = cursor.checkpoint();
    for _ in 0..n {
        if f(&mut *cp).is_none() {
            return cp.revert();
        }
    }
    Some(cp.commit())
}

/// Zero or more runs of `f`. Never fails.
///
/// Each successful run stays consumed. The loop ends on the first failure,
/// or on a success that did not advance the cursor.
pub fn many<'a, T>(
    cursor: &mut Cursor<'a>,
    mut f: impl FnMut(&mut Cursor<'a>) -> Option<T>,
) -> &'a str {
    let mut cp = cursor.checkpoint();
    loop {
        let before = cp.position();
        if f(&mut *cp).is_none() || cp.position() == before {
            break;
        }
    }
    cp.commit()
}

/// One or more runs of `f`.
pub fn many1<'a, T>(
    cursor: &mut Cursor<'a>,
    mut f: impl FnMut(&mut Cursor<'a>) -> Option<T>,
) -> Option<&'a str> {
    let mut cp = cursor.checkpoint();
    f(&mut *cp)?;
    many(&mut *cp, &mut f);
    Some(cp.commit())
}

/// Run `f` and tolerate its failure. Returns the (possibly empty) span it
/// consumed.
#[inline]
pub fn optional<'a, T>(
    cursor: &mut Cursor<'a>,
    f: impl FnOnce(&mut Cursor<'a>) -> Option<T>,
) -> &'a str {
    let text = cursor.text();
    let start = cursor.position();
    let empty = &text[start..start];
    atomic(cursor, f).unwrap_or(empty)
}

/// Ordered choice: the first alternative that matches wins.
pub fn choice<'a>(cursor: &mut Cursor<'a>, alternatives: &[Rule]) -> Option<&'a str> {
    alternatives.iter().find_map(|rule| atomic(cursor, *rule))
}
