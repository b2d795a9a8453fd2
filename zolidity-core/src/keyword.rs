//! Built-in type names and unit suffixes.
//!
//! The tables are exact copies of the Solidity 0.8 lexer grammar and are
//! built at compile time as perfect-hash sets. A keyword rule reads a whole
//! identifier and keeps it only if the identifier is a member, so `uint2567`
//! is rejected instead of matching the `uint256` prefix.

use phf::{phf_set, Set};

use crate::cursor::Cursor;
use crate::identifier::identifier;

/// `uint`, `uint8` ... `uint256`.
pub static UNSIGNED_INTEGER_TYPES: Set<&'static str> = phf_set! {
    "uint",
    "uint8", "uint16", "uint24", "uint32", "uint40", "uint48", "uint56", "uint64",
    "uint72", "uint80", "uint88", "uint96", "uint104", "uint112", "uint120", "uint128",
    "uint136", "uint144", "uint152", "uint160", "uint168", "uint176", "uint184", "uint192",
    "uint200", "uint208", "uint216", "uint224", "uint232", "uint240", "uint248", "uint256",
};

/// `int`, `int8` ... `int256`.
pub static SIGNED_INTEGER_TYPES: Set<&'static str> = phf_set! {
    "int",
    "int8", "int16", "int24", "int32", "int40", "int48", "int56", "int64",
    "int72", "int80", "int88", "int96", "int104", "int112", "int120", "int128",
    "int136", "int144", "int152", "int160", "int168", "int176", "int184", "int192",
    "int200", "int208", "int216", "int224", "int232", "int240", "int248", "int256",
};

/// `bytes1` ... `bytes32`.
pub static FIXED_BYTES_TYPES: Set<&'static str> = phf_set! {
    "bytes1", "bytes2", "bytes3", "bytes4", "bytes5", "bytes6", "bytes7", "bytes8",
    "bytes9", "bytes10", "bytes11", "bytes12", "bytes13", "bytes14", "bytes15", "bytes16",
    "bytes17", "bytes18", "bytes19", "bytes20", "bytes21", "bytes22", "bytes23", "bytes24",
    "bytes25", "bytes26", "bytes27", "bytes28", "bytes29", "bytes30", "bytes31", "bytes32",
};

/// Currency and time suffixes for number literals.
pub static NUMBER_UNITS: Set<&'static str> = phf_set! {
    "wei", "gwei", "ether",
    "seconds", "minutes", "hours", "days", "weeks", "years",
};

/// The keyword tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Keyword {
    UnsignedInteger,
    SignedInteger,
    FixedBytes,
    NumberUnit,
}

impl Keyword {
    pub const ALL: [Keyword; 4] = [
        Keyword::UnsignedInteger,
        Keyword::SignedInteger,
        Keyword::FixedBytes,
        Keyword::NumberUnit,
    ];

    #[inline]
    pub fn table(self) -> &'static Set<&'static str> {
        match self {
            Self::UnsignedInteger => &UNSIGNED_INTEGER_TYPES,
            Self::SignedInteger => &SIGNED_INTEGER_TYPES,
            Self::FixedBytes => &FIXED_BYTES_TYPES,
            Self::NumberUnit => &NUMBER_UNITS,
        }
    }

    /// Exact, case-sensitive membership.
    #[inline]
    pub fn contains(self, word: &str) -> bool {
        self.table().contains(word)
    }

    /// Members in unspecified order.
    pub fn iter(self) -> impl Iterator<Item = &'static str> {
        self.table().iter().copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::UnsignedInteger => "unsigned integer type",
            Self::SignedInteger => "signed integer type",
            Self::FixedBytes => "fixed bytes type",
            Self::NumberUnit => "number unit",
        }
    }

    /// Read an identifier and keep it only if it belongs to this table.
    pub fn recognize<'a>(self, cursor: &mut Cursor<'a>) -> Option<&'a str> {
        let mut cp = cursor.checkpoint();
        match identifier(&mut cp) {
            Some(word) if self.contains(word) => Some(cp.commit()),
            _ => cp.revert(),
        }
    }
}

pub fn unsigned_integer_type<'a>(cursor: &mut Cursor<'a>) -> Option<&'a str> {
    Keyword::UnsignedInteger.recognize(cursor)
}

pub fn signed_integer_type<'a>(cursor: &mut Cursor<'a>) -> Option<&'a str> {
    Keyword::SignedInteger.recognize(cursor)
}

pub fn fixed_bytes<'a>(cursor: &mut Cursor<'a>) -> Option<&'a str> {
    Keyword::FixedBytes.recognize(cursor)
}

pub fn number_unit<'a>(cursor: &mut Cursor<'a>) -> Option<&'a str> {
    Keyword::NumberUnit.recognize(cursor)
}

/// A sized elementary type name: integer or fixed bytes.
///
/// Tables are tried in order; at most one can hold a given identifier.
pub fn elementary_type<'a>(cursor: &mut Cursor<'a>) -> Option<(Keyword, &'a str)> {
    [Keyword::UnsignedInteger, Keyword::SignedInteger, Keyword::FixedBytes]
        .into_iter()
        .find_map(|keyword| keyword.recognize(cursor).map(|text| (keyword, text)))
}
