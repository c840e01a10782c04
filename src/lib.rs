//! Geographic coordinate core.
//!
//! An immutable latitude/longitude value type with a persisted 7-byte
//! fixed-point encoding, a bit-interleaved spatial hash and a text parser
//! for human-entered coordinates. Distance and destination-point math is
//! delegated to the [`geodesy`] module.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![deny(unsafe_code)]

pub mod coord;
pub mod geodesy;

pub use coord::{
    CodecError, CoordBuffer, DisplayPrecision, GeoCoord, LatticeCoord, ParseError, ParseSettings,
    COORD_BYTE_SIZE,
};
pub use geodesy::{Bearing, Distance, Geodesy};
