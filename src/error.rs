//! Error types for bit-field, view, and stream operations.
//!
//! This module contains the [`Error`] type which represents all possible errors
//! that can occur when manipulating packed values, views, or bit streams.
//!
//! # Example
//!
//! ```
//! use na_bits::{BitStream, Error};
//!
//! let mut stream = BitStream::new();
//! match stream.read() {
//!     Ok(bit) => println!("read {bit}"),
//!     Err(Error::EndOfStream) => println!("stream is empty"),
//!     Err(e) => println!("unexpected: {e}"),
//! }
//! ```

use std::fmt::{self, Display};

/// Alias for a `Result` with the error type [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// This type represents all possible errors that can occur when operating on
/// packed bit-field values, bit views, or bit streams.
///
/// Every fallible operation in this crate is atomic: when it returns an error,
/// the value, view, or stream it was called on is left exactly as it was
/// before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Division or remainder with a zero divisor.
    DivideByZero,

    /// Numeric text contained no digits.
    ///
    /// Returned for empty input, or for input that ends right after a sign
    /// or a `0x`/`0b` prefix.
    EmptyNumber,

    /// An unexpected character was encountered while parsing numeric text.
    ///
    /// The payload is the offending character. A `_` separator that is not
    /// between two digits is reported this way as well.
    InvalidDigit(char),

    /// Parsed numeric text does not fit the storage width.
    NumberOverflow,

    /// A dynamic comparison was attempted against an incompatible type.
    ///
    /// Distinct from "not equal": the operands could not be compared at all.
    TypeMismatch,

    /// A position, length, or capacity argument is outside the valid range.
    ///
    /// Returned by seek, truncate, and the view engine when the target range
    /// falls outside the buffer or stream bounds.
    OutOfRange,

    /// A read was attempted past the last available bit.
    EndOfStream,

    /// The destination buffer passed to `try_format` is too small.
    ///
    /// The payload is the number of bytes the formatted text requires.
    /// Nothing is written to the destination.
    BufferTooSmall(usize),
}

impl Error {
    /// Returns `true` for the parse-failure variants.
    pub const fn is_format(&self) -> bool {
        matches!(
            self,
            Error::EmptyNumber | Error::InvalidDigit(_) | Error::NumberOverflow
        )
    }
}

impl Display for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::DivideByZero => formatter.write_str("attempt to divide by zero"),
            Error::EmptyNumber => formatter.write_str("no digits found in input"),
            Error::InvalidDigit(c) => {
                formatter.write_str(&format!("invalid digit in input: {c:?}"))
            }
            Error::NumberOverflow => formatter.write_str("number too large for storage width"),
            Error::TypeMismatch => formatter.write_str("comparison against an incompatible type"),
            Error::OutOfRange => formatter.write_str("position or range out of bounds"),
            Error::EndOfStream => formatter.write_str("read past the end of the stream"),
            Error::BufferTooSmall(needed) => formatter.write_str(&format!(
                "destination buffer too small: {needed} bytes required"
            )),
        }
    }
}

impl std::error::Error for Error {}
