pub use zerocopy::BigEndian;
pub use zerocopy::LittleEndian;
pub use zerocopy::NetworkEndian;

pub mod engine;
mod error;
mod field;
pub mod float;
mod order;
mod schema;
mod stream;
mod util;
mod value;
mod view;
mod word;

#[cfg(feature = "serde")]
mod de;
#[cfg(feature = "serde")]
mod ser;

pub use error::*;
pub use field::*;
pub use float::{DecimalBits, DoubleBits, HalfBits, SingleBits};
pub use order::*;
pub use schema::*;
pub use stream::*;
pub use value::*;
pub use view::*;
pub use word::*;
