//! Fixed-point quantization of degree values onto a 27-bit lattice.
//!
//! Each axis is shifted into the positive range and scaled so that the
//! largest shifted value lands exactly on [`MAX_RAW_COORD_VALUE`]:
//!
//! | Axis      | Offset | Shifted range | Step (degrees) |
//! |-----------|--------|---------------|----------------|
//! | Latitude  | 90.0   | 0..=180       | ~1.341e-6      |
//! | Longitude | 180.0  | 0..=360       | ~2.682e-6      |
//!
//! The transform is lossy. Decoding a lattice value gives back the degree
//! value at the lattice point, which differs from the input by at most half
//! a step.

use serde::{Deserialize, Serialize};

use super::types::GeoCoord;

/// Largest value of a 27-bit lattice coordinate (`2^27 - 1`).
pub const MAX_RAW_COORD_VALUE: u32 = 0x7FF_FFFF;

/// Number of significant bits per lattice axis.
pub const LATTICE_BITS: u32 = 27;

/// Shift applied to latitude before scaling.
pub const LAT_OFFSET: f64 = 90.0;

/// Shift applied to longitude before scaling.
pub const LON_OFFSET: f64 = 180.0;

/// Lattice units per degree of latitude.
pub const LAT_CONVERSION_FACTOR: f64 = MAX_RAW_COORD_VALUE as f64 / 180.0;

/// Lattice units per degree of longitude.
pub const LON_CONVERSION_FACTOR: f64 = MAX_RAW_COORD_VALUE as f64 / 360.0;

/// Degrees covered by one latitude lattice step.
pub const LAT_STEP: f64 = 1.0 / LAT_CONVERSION_FACTOR;

/// Degrees covered by one longitude lattice step.
pub const LON_STEP: f64 = 1.0 / LON_CONVERSION_FACTOR;

/// One axis of a coordinate, carrying its offset and conversion factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// North/south axis, [-90, 90].
    Latitude,
    /// East/west axis, [-180, 180].
    Longitude,
}

impl Axis {
    /// Returns the shift that moves this axis into the positive range.
    #[must_use]
    pub const fn offset(self) -> f64 {
        match self {
            Self::Latitude => LAT_OFFSET,
            Self::Longitude => LON_OFFSET,
        }
    }

    /// Returns the lattice units per degree for this axis.
    #[must_use]
    pub const fn factor(self) -> f64 {
        match self {
            Self::Latitude => LAT_CONVERSION_FACTOR,
            Self::Longitude => LON_CONVERSION_FACTOR,
        }
    }

    /// Returns the degree size of one lattice step on this axis.
    #[must_use]
    pub const fn step(self) -> f64 {
        match self {
            Self::Latitude => LAT_STEP,
            Self::Longitude => LON_STEP,
        }
    }

    /// Quantizes a degree value on this axis.
    #[must_use]
    pub fn quantize(self, value: f64) -> u64 {
        quantize(value, self.offset(), self.factor())
    }

    /// Converts a lattice value on this axis back to degrees.
    #[must_use]
    pub fn dequantize(self, raw: u64) -> f64 {
        dequantize(raw, self.offset(), self.factor())
    }
}

/// Computes `round((value + offset) * factor)` as an unsigned integer.
///
/// No range check is made. Inputs below `-offset` saturate to zero and NaN
/// maps to zero; inputs above the axis maximum produce values wider than
/// 27 bits, which the codec truncates.
///
/// # Examples
///
/// ```
/// use geocoord_core::coord::lattice::{quantize, LAT_CONVERSION_FACTOR, LAT_OFFSET, MAX_RAW_COORD_VALUE};
///
/// assert_eq!(quantize(-90.0, LAT_OFFSET, LAT_CONVERSION_FACTOR), 0);
/// assert_eq!(
///     quantize(90.0, LAT_OFFSET, LAT_CONVERSION_FACTOR),
///     u64::from(MAX_RAW_COORD_VALUE)
/// );
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn quantize(value: f64, offset: f64, factor: f64) -> u64 {
    ((value + offset) * factor).round() as u64
}

/// Computes `raw / factor - offset`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn dequantize(raw: u64, offset: f64, factor: f64) -> f64 {
    raw as f64 / factor - offset
}

/// A coordinate expressed as a pair of lattice values.
///
/// Two coordinates with equal `LatticeCoord`s are indistinguishable after
/// encoding or hashing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LatticeCoord {
    /// Latitude lattice value
    pub lat: u32,
    /// Longitude lattice value
    pub lon: u32,
}

impl LatticeCoord {
    /// Creates a lattice pair from raw values.
    #[must_use]
    pub const fn new(lat: u32, lon: u32) -> Self {
        Self { lat, lon }
    }

    /// Quantizes both axes of a coordinate.
    ///
    /// Values are truncated to 32 bits here; only the low 27 carry meaning
    /// for in-range coordinates.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_coord(coord: &GeoCoord) -> Self {
        Self {
            lat: Axis::Latitude.quantize(coord.lat()) as u32,
            lon: Axis::Longitude.quantize(coord.lon()) as u32,
        }
    }

    /// Converts the lattice pair back to degrees.
    #[must_use]
    pub fn to_coord(self) -> GeoCoord {
        GeoCoord::new(
            Axis::Latitude.dequantize(u64::from(self.lat)),
            Axis::Longitude.dequantize(u64::from(self.lon)),
        )
    }

    /// Returns true if both values fit into 27 bits.
    #[must_use]
    pub const fn is_in_range(self) -> bool {
        self.lat <= MAX_RAW_COORD_VALUE && self.lon <= MAX_RAW_COORD_VALUE
    }
}

impl From<GeoCoord> for LatticeCoord {
    fn from(coord: GeoCoord) -> Self {
        Self::from_coord(&coord)
    }
}

impl GeoCoord {
    /// Returns the lattice pair this coordinate quantizes to.
    #[must_use]
    pub fn lattice(&self) -> LatticeCoord {
        LatticeCoord::from_coord(self)
    }

    /// Returns the coordinate moved onto its lattice point.
    ///
    /// For in-range coordinates this is what decoding the encoded record
    /// yields.
    #[must_use]
    pub fn snapped(&self) -> Self {
        self.lattice().to_coord()
    }
}
