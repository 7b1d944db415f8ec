//! Layout declaration: a storage word plus a static table of fields.

use crate::field::Field;
use crate::word::Word;

/// Whether mutations clear bits not covered by any declared field.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum UndefinedBits {
    /// Every mutation also zeroes all bits outside the declared fields, so a
    /// value can never hold undeclared bits.
    Zeroes,
    /// Undeclared bits pass through construction and mutation untouched.
    #[default]
    Unspecified,
}

/// Declares a packed layout: the storage word, its field table, and the
/// policy for undeclared bits.
///
/// Implementors are zero-sized markers; the trait is the runtime descriptor
/// table one generic accessor interprets:
///
/// ```
/// use na_bits::{BitField, Field, Schema, UndefinedBits};
///
/// enum Header {}
///
/// impl Schema for Header {
///     type Word = u16;
///     const FIELDS: &'static [Field] = &[
///         Field::new("length", 0, 10),
///         Field::new("kind", 11, 14),
///         Field::flag("urgent", 15),
///     ];
///     const UNDEFINED_BITS: UndefinedBits = UndefinedBits::Zeroes;
/// }
///
/// let header = BitField::<Header>::from_raw_bits(0xFFFF);
/// assert_eq!(header.raw_bits(), 0xFFFF); // every bit is declared here
/// ```
pub trait Schema: 'static {
    /// Storage word backing values of this layout.
    type Word: Word;

    /// The declared fields. Order does not matter; overlap is permitted
    /// (overlapping fields alias the same storage bits).
    const FIELDS: &'static [Field];

    const UNDEFINED_BITS: UndefinedBits = UndefinedBits::Unspecified;

    /// Union of every declared field's shifted mask.
    const DECLARED_MASK: u128 = declared_mask(Self::FIELDS);

    /// Bytes needed to hold every declared field: `ceil((max(hi) + 1) / 8)`.
    const SIZE_IN_BYTES: usize = size_in_bytes(Self::FIELDS);

    /// Evaluates to `()` when every declared field fits the storage word.
    /// Referenced from accessors so a bad layout fails to compile.
    #[doc(hidden)]
    const FIELDS_IN_RANGE: () = check_fields(Self::FIELDS, <Self::Word as Word>::BITS);
}

const fn declared_mask(fields: &[Field]) -> u128 {
    let mut mask = 0u128;
    let mut i = 0;
    while i < fields.len() {
        mask |= fields[i].mask() << fields[i].lo();
        i += 1;
    }
    mask
}

const fn size_in_bytes(fields: &[Field]) -> usize {
    let mut max_hi = 0u32;
    let mut any = false;
    let mut i = 0;
    while i < fields.len() {
        if fields[i].hi() > max_hi {
            max_hi = fields[i].hi();
        }
        any = true;
        i += 1;
    }
    if any { (max_hi as usize + 1 + 7) / 8 } else { 0 }
}

const fn check_fields(fields: &[Field], bits: u32) {
    let mut i = 0;
    while i < fields.len() {
        assert!(
            fields[i].hi() < bits,
            "declared field exceeds the storage width"
        );
        i += 1;
    }
}
