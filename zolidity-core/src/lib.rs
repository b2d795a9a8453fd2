//! Zolidity Core Recognizers
//!
//! Backtracking recognizers for the lexical layer of a Solidity-like
//! language: identifiers, numbers, strings, hex/unicode strings, booleans
//! and elementary type keywords. Every rule returns the slice of source text
//! it matched, or `None` with the cursor left where it started.
//!
//! # Architecture
//!
//! - **cursor.rs** - Cursor over `&str`, scoped checkpoints
//! - **combinator.rs** - atomic, repeat, many, many1, optional, choice
//! - **primitive.rs** - Single-character and fixed-word rules
//! - **identifier.rs** - Identifiers and boolean literals
//! - **number.rs** - Hex and decimal numbers, unit suffixes
//! - **string.rs** - Plain, hex and unicode strings, escapes
//! - **keyword.rs** - Elementary type and unit keyword tables
//! - **literal.rs** - Literal classification
//! - **error.rs** - Whole-input recognition errors
//!
//! ```
//! use zolidity_core::{number_literal, Cursor};
//!
//! let mut cursor = Cursor::new("1_000 ether;");
//! assert_eq!(number_literal(&mut cursor), Some("1_000 ether"));
//! assert_eq!(cursor.remaining(), ";");
//! ```

pub mod combinator;
pub mod cursor;
pub mod error;
pub mod identifier;
pub mod keyword;
pub mod literal;
pub mod number;
pub mod options;
pub mod primitive;
pub mod span;
pub mod string;

pub use combinator::{atomic, choice, many, many1, optional, repeat, Rule};
pub use cursor::{Checkpoint, Cursor};
pub use error::{recognize_exact, recognize_exact_with, RecognizeError};
pub use identifier::{boolean_literal, identifier, is_identifier_part};
pub use keyword::{
    elementary_type, fixed_bytes, number_unit, signed_integer_type, unsigned_integer_type, Keyword,
};
pub use literal::{literal, Literal, LiteralKind};
pub use number::{decimal_digits, decimal_number, hex_number, number_literal};
pub use options::Options;
pub use span::Span;
pub use string::{
    empty_string, escape_sequence, hex_string, hex_string_literal, non_empty_string,
    quoted_string, string_literal, unicode_string, unicode_string_literal,
};
