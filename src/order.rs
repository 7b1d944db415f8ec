//! Byte-order and bit-numbering conventions for views.
//!
//! Byte order reuses the zerocopy marker types ([`BigEndian`], [`LittleEndian`],
//! [`NetworkEndian`]), re-exported from the crate root. Bit numbering is a
//! crate-local pair of marker types, [`MsbIsBitZero`] and [`LsbIsBitZero`].
//! Both conventions are carried in a view's type, so a nested view can hold an
//! order entirely independent of its parent.

use zerocopy::{BigEndian, LittleEndian};

mod private {
    pub trait Sealed {}

    impl Sealed for zerocopy::BigEndian {}
    impl Sealed for zerocopy::LittleEndian {}
    impl Sealed for super::MsbIsBitZero {}
    impl Sealed for super::LsbIsBitZero {}
}

/// Byte orders usable by the view engine.
///
/// Implemented for [`zerocopy::BigEndian`] and [`zerocopy::LittleEndian`]
/// ([`zerocopy::NetworkEndian`] is an alias of big-endian). Sealed.
pub trait ByteOrder: zerocopy::ByteOrder + private::Sealed + Copy + Send + Sync + 'static {
    /// Whether the first byte of a multi-byte field window holds the
    /// least-significant bits.
    const LITTLE: bool;
}

impl ByteOrder for BigEndian {
    const LITTLE: bool = false;
}

impl ByteOrder for LittleEndian {
    const LITTLE: bool = true;
}

/// Bit-numbering conventions usable by the view engine. Sealed.
pub trait BitOrder: private::Sealed + Copy + Send + Sync + 'static {
    /// Whether bit 0 names the most-significant bit of a field's first byte.
    ///
    /// When `false`, bit 0 names a field's own least-significant bit,
    /// native-integer style.
    const MSB_FIRST: bool;
}

/// Bit 0 is the most-significant bit of the field's first byte.
///
/// This is the convention of protocol diagrams: bits are numbered left to
/// right, so a field's lowest bit number addresses its most-significant bit.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum MsbIsBitZero {}

/// Bit 0 is a field's own least-significant bit, native-integer style.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum LsbIsBitZero {}

impl BitOrder for MsbIsBitZero {
    const MSB_FIRST: bool = true;
}

impl BitOrder for LsbIsBitZero {
    const MSB_FIRST: bool = false;
}
