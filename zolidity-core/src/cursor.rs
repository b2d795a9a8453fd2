//! Input cursor and scoped checkpoints.
//!
//! A [`Cursor`] is a byte offset over an immutable `&str`. Rules never move
//! it directly: composite rules open a [`Checkpoint`], run their sub-rules
//! through it, and settle it with [`Checkpoint::commit`] (keep what was
//! consumed) or [`Checkpoint::revert`] (give it all back).
//!
//! ```text
//!   text:  0 x 1 a _ g
//!          ^start    ^position
//!          └─commit──┘  -> "0x1a_"    revert -> position = start
//! ```
//!
//! A checkpoint that goes out of scope unsettled reverts, so an early
//! `return None` or `?` inside a rule can never leak partial consumption.

use std::ops::{Deref, DerefMut};

use tracing::trace;

use crate::options::Options;
use crate::span::Span;

/// Scan position over a borrowed source text.
///
/// Invariant: `position <= text.len()` and `position` is always on a
/// `char` boundary.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    text: &'a str,
    position: usize,
    options: Options,
}

impl<'a> Cursor<'a> {
    /// Cursor at the start of `text` with default [`Options`].
    pub fn new(text: &'a str) -> Self {
        Self::with_options(text, Options::default())
    }

    pub fn with_options(text: &'a str, options: Options) -> Self {
        Self {
            text,
            position: 0,
            options,
        }
    }

    /// Cursor positioned at byte `offset`.
    ///
    /// Returns `None` if `offset` is past the end of `text` or falls inside
    /// a multi-byte character.
    pub fn starting_at(text: &'a str, offset: usize) -> Option<Self> {
        Self::starting_at_with(text, offset, Options::default())
    }

    pub fn starting_at_with(text: &'a str, offset: usize, options: Options) -> Option<Self> {
        if !text.is_char_boundary(offset) {
            return None;
        }
        let mut cursor = Self::with_options(text, options);
        cursor.position = offset;
        Some(cursor)
    }

    #[inline]
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Current byte offset.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    #[inline]
    pub fn options(&self) -> Options {
        self.options
    }

    /// Text from the current position to the end.
    #[inline]
    pub fn remaining(&self) -> &'a str {
        &self.text[self.position..]
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.position >= self.text.len()
    }

    /// Next character, without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Text covered by `span`, if it lies within this cursor's text.
    pub fn slice(&self, span: Span) -> Option<&'a str> {
        span.slice(self.text)
    }

    /// Consume one character and return it as a slice of the text.
    ///
    /// Only primitives call this; everything else composes them.
    #[inline]
    pub(crate) fn bump(&mut self) -> Option<&'a str> {
        let ch = self.peek()?;
        let start = self.position;
        self.position += ch.len_utf8();
        Some(&self.text[start..self.position])
    }

    /// Open a checkpoint at the current position.
    ///
    /// The checkpoint borrows the cursor mutably and dereferences to it, so
    /// sub-rules run through the checkpoint until it is settled.
    #[inline]
    pub fn checkpoint(&mut self) -> Checkpoint<'_, 'a> {
        Checkpoint {
            start: self.position,
            cursor: self,
            settled: false,
        }
    }
}

/// Saved cursor position bound to one rule invocation.
#[must_use = "an unsettled checkpoint reverts when dropped"]
#[derive(Debug)]
pub struct Checkpoint<'c, 'a> {
    cursor: &'c mut Cursor<'a>,
    start: usize,
    settled: bool,
}

impl<'c, 'a> Checkpoint<'c, 'a> {
    /// Position at which the checkpoint was opened.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Bytes consumed since the checkpoint was opened.
    #[inline]
    pub fn len(&self) -> usize {
        self.cursor.position - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn span(&self) -> Span {
        Span::new(self.start, self.cursor.position)
    }

    /// Keep the consumed input and return it.
    #[inline]
    pub fn commit(mut self) -> &'a str {
        self.settled = true;
        let text = self.cursor.text;
        &text[self.start..self.cursor.position]
    }

    /// Give back everything consumed since the checkpoint was opened.
    ///
    /// Always returns `None`, so a rule can `return checkpoint.revert();`.
    #[inline]
    pub fn revert<T>(mut self) -> Option<T> {
        self.settled = true;
        self.rewind();
        None
    }

    fn rewind(&mut self) {
        if self.cursor.position != self.start {
            trace!(
                target: "zolidity::cursor",
                start = self.start,
                position = self.cursor.position,
                "revert"
            );
        }
        self.cursor.position = self.start;
    }
}

impl Drop for Checkpoint<'_, '_> {
    fn drop(&mut self) {
        if !self.settled {
            self.rewind();
        }
    }
}

impl<'a> Deref for Checkpoint<'_, 'a> {
    type Target = Cursor<'a>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        self.cursor
    }
}

impl<'a> DerefMut for Checkpoint<'_, 'a> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.cursor
    }
}
