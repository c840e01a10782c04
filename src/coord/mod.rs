//! Coordinate module.
//!
//! Provides the [`GeoCoord`] value type together with:
//! - Fixed-point quantization onto a 27-bit lattice per axis
//! - A 7-byte binary record for persistent storage
//! - A 54-bit interleaved spatial hash and a fast id
//! - A permissive text parser for decimal and degree/minute/second input
//!
//! # Precision
//!
//! Encoding and hashing are lossy. A decoded coordinate is within half a
//! lattice step of the original, about 0.07 m north/south and 0.15 m
//! east/west at the equator. This is never reported as an error.
//!
//! # Example Usage
//!
//! ```
//! use geocoord_core::coord::{GeoCoord, COORD_BYTE_SIZE};
//!
//! let coord: GeoCoord = "52°31'12\" N 13°24'18\" E".parse().unwrap();
//!
//! let mut record = [0u8; COORD_BYTE_SIZE];
//! coord.encode_to_buffer(&mut record);
//! let restored = GeoCoord::decode(&record);
//!
//! assert_eq!(restored.hash(), coord.hash());
//! assert_eq!(restored.id(), coord.id());
//! assert_eq!(GeoCoord::parse(&coord.to_string()).unwrap().to_string(), coord.to_string());
//! ```

pub mod codec;
pub mod error;
pub mod hash;
pub mod lattice;
pub mod parser;
pub mod types;

pub use codec::{CoordBuffer, COORD_BYTE_SIZE};
pub use error::{CodecError, ParseError};
pub use lattice::{LatticeCoord, MAX_RAW_COORD_VALUE};
pub use parser::ParseSettings;
pub use types::{DisplayPrecision, GeoCoord};
