//! Spatial hash, fast id and geohash bucketing.
//!
//! The spatial hash interleaves the 27 bits of both lattice values into a
//! 54-bit number, latitude bit first in each pair:
//!
//! ```text
//! bit 53     52     51     50     ...  1      0
//!     lat26  lon26  lat25  lon25  ...  lat0   lon0
//! ```
//!
//! Equal lattice pairs always give equal hashes and distinct pairs never
//! collide. Numeric closeness of two hashes says nothing about distance.
//!
//! # Geohash Precision Table
//!
//! | Length | Cell Width | Cell Height |
//! |--------|-----------|-------------|
//! | 5      | ±2.4 km   | ±2.4 km     |
//! | 6      | ±0.61 km  | ±0.61 km    |
//! | 7      | ±0.076 km | ±0.15 km    |
//! | 8      | ±0.019 km | ±0.019 km   |

use super::lattice::{Axis, LatticeCoord, LATTICE_BITS, MAX_RAW_COORD_VALUE};
use super::types::GeoCoord;

/// Number of significant bits in a spatial hash.
pub const HASH_BITS: u32 = 2 * LATTICE_BITS;

/// Interleaves two lattice values into a spatial hash.
///
/// Bits above bit 26 of either input are ignored.
///
/// # Examples
///
/// ```
/// use geocoord_core::coord::hash::interleave;
///
/// assert_eq!(interleave(0b1, 0b0), 0b10);
/// assert_eq!(interleave(0b0, 0b1), 0b01);
/// assert_eq!(interleave(0b11, 0b01), 0b1011);
/// ```
#[must_use]
pub fn interleave(lat: u64, lon: u64) -> u64 {
    (0..LATTICE_BITS).rev().fold(0, |number, bit| {
        let number = (number << 1) | ((lat >> bit) & 0x01);
        (number << 1) | ((lon >> bit) & 0x01)
    })
}

/// Splits a spatial hash back into its lattice pair.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn deinterleave(hash: u64) -> LatticeCoord {
    let (lat, lon) = (0..LATTICE_BITS).fold((0_u64, 0_u64), |(lat, lon), bit| {
        (
            lat | (((hash >> (2 * bit + 1)) & 0x01) << bit),
            lon | (((hash >> (2 * bit)) & 0x01) << bit),
        )
    });

    LatticeCoord::new(lat as u32, lon as u32)
}

impl GeoCoord {
    /// Returns the 54-bit spatial hash of the coordinate.
    ///
    /// Coordinates that quantize to the same lattice pair share a hash.
    #[must_use]
    pub fn hash(&self) -> u64 {
        interleave(
            Axis::Latitude.quantize(self.lat()),
            Axis::Longitude.quantize(self.lon()),
        )
    }

    /// Rebuilds the lattice coordinate a spatial hash was computed from.
    ///
    /// # Examples
    ///
    /// ```
    /// use geocoord_core::GeoCoord;
    ///
    /// let coord = GeoCoord::new(48.8566, 2.3522);
    /// assert_eq!(GeoCoord::from_hash(coord.hash()), coord.snapped());
    /// ```
    #[must_use]
    pub fn from_hash(hash: u64) -> Self {
        deinterleave(hash).to_coord()
    }

    /// Returns a fast unique id for the coordinate.
    ///
    /// Coordinates with the same lattice pair share an id. The id has no
    /// ordering meaning; close ids do not imply close locations.
    #[must_use]
    pub fn id(&self) -> u64 {
        let lattice = self.lattice();
        (u64::from(lattice.lat & MAX_RAW_COORD_VALUE) << LATTICE_BITS)
            | u64::from(lattice.lon & MAX_RAW_COORD_VALUE)
    }

    /// Encodes the coordinate as a geohash string of the given length.
    ///
    /// Returns `None` for coordinates the geohash alphabet cannot represent
    /// (out of range or not finite).
    ///
    /// # Examples
    ///
    /// ```
    /// use geocoord_core::GeoCoord;
    ///
    /// let geohash = GeoCoord::new(37.7749, -122.4194).geohash(8).unwrap();
    /// assert_eq!(geohash.len(), 8);
    /// assert!(geohash.starts_with("9q8yy"));
    /// ```
    #[must_use]
    pub fn geohash(&self, len: usize) -> Option<String> {
        geohash::encode(
            geohash::Coord {
                x: self.lon(),
                y: self.lat(),
            },
            len,
        )
        .ok()
    }

    /// Decodes a geohash string to the center of its cell.
    ///
    /// Returns `None` for empty strings or characters outside the base32
    /// geohash alphabet.
    #[must_use]
    pub fn from_geohash(geohash: &str) -> Option<Self> {
        if geohash.is_empty() {
            return None;
        }

        geohash::decode(geohash)
            .ok()
            .map(|(center, _, _)| Self::new(center.y, center.x))
    }
}
