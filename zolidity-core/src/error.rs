//! Errors for whole-input recognition.
//!
//! Rules themselves never fail with an error: a non-match is `None` with the
//! cursor restored. These errors only describe why a text is not exactly
//! one token.

use thiserror::Error;

use crate::combinator::Rule;
use crate::cursor::Cursor;
use crate::options::Options;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RecognizeError {
    #[error("no match at offset 0")]
    NoMatch,

    #[error("matched {matched} bytes, {remaining} bytes left over")]
    Incomplete { matched: usize, remaining: usize },
}

/// Run `rule` on a fresh cursor over `text` and require it to consume all
/// of it.
pub fn recognize_exact(rule: Rule, text: &str) -> Result<&str, RecognizeError> {
    recognize_exact_with(rule, text, Options::default())
}

pub fn recognize_exact_with(rule: Rule, text: &str, options: Options) -> Result<&str, RecognizeError> {
    let mut cursor = Cursor::with_options(text, options);
    let matched = rule(&mut cursor).ok_or(RecognizeError::NoMatch)?;
    if !cursor.is_eof() {
        return Err(RecognizeError::Incomplete {
            matched: matched.len(),
            remaining: cursor.remaining().len(),
        });
    }
    Ok(matched)
}
