//! Fixed 7-byte binary record for a coordinate.
//!
//! # Layout
//!
//! Both axes are quantized to 27-bit lattice values (see
//! [`lattice`](super::lattice)) and packed little-endian:
//!
//! ```text
//! byte 0..=2   latitude  bits  0..=23
//! byte 3..=5   longitude bits  0..=23
//! byte 6       low nibble:  latitude  bits 24..=26
//!              high nibble: longitude bits 24..=26
//! ```
//!
//! This layout is persisted to storage and must not change.

use super::error::{CodecError, CodecResult};
use super::lattice::LatticeCoord;
use super::types::GeoCoord;

/// Number of bytes in an encoded coordinate.
pub const COORD_BYTE_SIZE: usize = 7;

/// A single encoded coordinate record.
pub type CoordBuffer = [u8; COORD_BYTE_SIZE];

/// Packs a lattice pair into a record.
///
/// Only the low 27 bits of each value are stored.
#[allow(clippy::cast_possible_truncation)]
pub fn pack(lattice: LatticeCoord, buffer: &mut CoordBuffer) {
    let lat = lattice.lat;
    let lon = lattice.lon;

    buffer[0] = (lat & 0xff) as u8;
    buffer[1] = ((lat >> 8) & 0xff) as u8;
    buffer[2] = ((lat >> 16) & 0xff) as u8;

    buffer[3] = (lon & 0xff) as u8;
    buffer[4] = ((lon >> 8) & 0xff) as u8;
    buffer[5] = ((lon >> 16) & 0xff) as u8;

    buffer[6] = (((lat >> 24) & 0x07) | ((lon >> 20) & 0x70)) as u8;
}

/// Unpacks the lattice pair stored in a record.
#[must_use]
pub fn unpack(buffer: &CoordBuffer) -> LatticeCoord {
    let lat = u32::from(buffer[0])
        | (u32::from(buffer[1]) << 8)
        | (u32::from(buffer[2]) << 16)
        | (u32::from(buffer[6] & 0x0f) << 24);

    let lon = u32::from(buffer[3])
        | (u32::from(buffer[4]) << 8)
        | (u32::from(buffer[5]) << 16)
        | (u32::from(buffer[6] & 0xf0) << 20);

    LatticeCoord::new(lat, lon)
}

impl GeoCoord {
    /// Encodes the coordinate into a new 7-byte record.
    #[must_use]
    pub fn encode(&self) -> CoordBuffer {
        let mut buffer = [0; COORD_BYTE_SIZE];
        self.encode_to_buffer(&mut buffer);
        buffer
    }

    /// Encodes the coordinate into a caller-supplied record.
    pub fn encode_to_buffer(&self, buffer: &mut CoordBuffer) {
        pack(self.lattice(), buffer);
    }

    /// Decodes a coordinate from a record.
    ///
    /// The result lies on the lattice and differs from the originally encoded
    /// coordinate by at most half a quantization step per axis.
    #[must_use]
    pub fn decode(buffer: &CoordBuffer) -> Self {
        unpack(buffer).to_coord()
    }

    /// Decodes a record into `self`, replacing both values.
    pub fn decode_from_buffer(&mut self, buffer: &CoordBuffer) {
        *self = Self::decode(buffer);
    }

    /// Encodes into the first [`COORD_BYTE_SIZE`] bytes of a slice.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::BufferTooShort`] if the slice holds fewer than
    /// seven bytes. Nothing is written in that case.
    pub fn encode_to_slice(&self, buffer: &mut [u8]) -> CodecResult<()> {
        let actual = buffer.len();
        let record = buffer
            .get_mut(..COORD_BYTE_SIZE)
            .and_then(|head| <&mut CoordBuffer>::try_from(head).ok())
            .ok_or_else(|| too_short(actual))?;

        self.encode_to_buffer(record);
        Ok(())
    }

    /// Decodes from the first [`COORD_BYTE_SIZE`] bytes of a slice.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::BufferTooShort`] if the slice holds fewer than
    /// seven bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use geocoord_core::{CodecError, GeoCoord};
    ///
    /// let stream = [0x96, 0x8f, 0x55, 0x72, 0x42, 0x4c, 0x46, 0xff];
    /// let coord = GeoCoord::decode_from_slice(&stream).unwrap();
    /// assert!((coord.lat() - 52.52).abs() < 1e-6);
    ///
    /// assert_eq!(
    ///     GeoCoord::decode_from_slice(&stream[..3]),
    ///     Err(CodecError::BufferTooShort { expected: 7, actual: 3 })
    /// );
    /// ```
    pub fn decode_from_slice(buffer: &[u8]) -> CodecResult<Self> {
        let record = buffer
            .get(..COORD_BYTE_SIZE)
            .and_then(|head| <&CoordBuffer>::try_from(head).ok())
            .ok_or_else(|| too_short(buffer.len()))?;

        Ok(Self::decode(record))
    }
}

fn too_short(actual: usize) -> CodecError {
    log::warn!("coordinate buffer too short: {actual} < {COORD_BYTE_SIZE} bytes");
    CodecError::BufferTooShort {
        expected: COORD_BYTE_SIZE,
        actual,
    }
}
