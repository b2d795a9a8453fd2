//! Literal classification.
//!
//! `literal` tries each literal form in a fixed order and reports which one
//! matched. Only the matched text is returned; no value is computed.

use tracing::debug;

use crate::combinator::many1;
use crate::cursor::Cursor;
use crate::identifier::boolean_literal;
use crate::number::number_literal;
use crate::span::Span;
use crate::string::{hex_string, string_literal, unicode_string};

/// The kind of literal recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum LiteralKind {
    /// `"abc"`, `'abc'`, adjacent strings concatenated
    String,
    /// `42`, `0xff`, `1.5e-3`, `1 ether`
    Number,
    /// `true` or `false`
    Boolean,
    /// `hex"00ff"`
    HexString,
    /// `unicode"..."`
    UnicodeString,
}

impl LiteralKind {
    /// Kinds in the order `literal` tries them.
    pub const ALL: [LiteralKind; 5] = [
        LiteralKind::String,
        LiteralKind::Number,
        LiteralKind::Boolean,
        LiteralKind::HexString,
        LiteralKind::UnicodeString,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::HexString => "hex string",
            Self::UnicodeString => "unicode string",
        }
    }

    /// Run the rule for this kind. Hex and unicode strings need at least one
    /// segment here.
    pub fn recognize<'a>(self, cursor: &mut Cursor<'a>) -> Option<&'a str> {
        match self {
            Self::String => string_literal(cursor),
            Self::Number => number_literal(cursor),
            Self::Boolean => boolean_literal(cursor),
            Self::HexString => many1(cursor, hex_string),
            Self::UnicodeString => many1(cursor, unicode_string),
        }
    }
}

/// A recognized literal.
///
/// `text` borrows from the cursor's source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Literal<'a> {
    pub kind: LiteralKind,
    pub text: &'a str,
    pub span: Span,
}

impl<'a> Literal<'a> {
    /// Value of a boolean literal.
    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self.kind {
            LiteralKind::Boolean => Some(self.text == "true"),
            _ => None,
        }
    }

    #[inline]
    pub fn is_string(&self) -> bool {
        matches!(
            self.kind,
            LiteralKind::String | LiteralKind::HexString | LiteralKind::UnicodeString
        )
    }
}

/// Recognize any literal at the cursor.
pub fn literal<'a>(cursor: &mut Cursor<'a>) -> Option<Literal<'a>> {
    let start = cursor.position();
    let (kind, text) = LiteralKind::ALL
        .into_iter()
        .find_map(|kind| kind.recognize(cursor).map(|text| (kind, text)))?;
    debug!(target: "zolidity::literal", kind = kind.name(), text, start, "recognized literal");
    Some(Literal {
        kind,
        text,
        span: Span::new(start, cursor.position()),
    })
}
