//! Coordinate value type.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Smallest valid latitude in degrees.
pub const MIN_LAT: f64 = -90.0;
/// Largest valid latitude in degrees.
pub const MAX_LAT: f64 = 90.0;
/// Smallest valid longitude in degrees.
pub const MIN_LON: f64 = -180.0;
/// Largest valid longitude in degrees.
pub const MAX_LON: f64 = 180.0;

/// Number of decimals used when rendering a coordinate as text.
///
/// | Precision | Decimal Places | Approximate Resolution |
/// |-----------|----------------|------------------------|
/// | Coarse    | 2              | ~1.1 km                |
/// | Standard  | 4              | ~11 m                  |
/// | Fine      | 5              | ~1.1 m                 |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DisplayPrecision {
    /// 2 decimal places
    Coarse,
    /// 4 decimal places
    Standard,
    /// 5 decimal places, used by the canonical display text
    #[default]
    Fine,
}

impl DisplayPrecision {
    /// Returns the number of decimal places for this precision level.
    #[must_use]
    pub const fn decimal_places(self) -> usize {
        match self {
            Self::Coarse => 2,
            Self::Standard => 4,
            Self::Fine => 5,
        }
    }
}

/// An anonymous geographic coordinate.
///
/// A plain value holding latitude and longitude in degrees. Nothing is
/// validated at construction; the codec and hash only give meaningful
/// results for latitude in [-90, 90] and longitude in [-180, 180]. Use
/// [`GeoCoord::is_valid`] to check before encoding.
///
/// Equality compares the raw `f64` values without tolerance. Ordering is
/// lexicographic, latitude first.
///
/// # Example
///
/// ```
/// use geocoord_core::GeoCoord;
///
/// let berlin = GeoCoord::new(52.52, 13.405);
/// let buffer = berlin.encode();
/// let decoded = GeoCoord::decode(&buffer);
///
/// assert!((decoded.lat() - berlin.lat()).abs() < 1e-6);
/// assert_eq!(decoded.encode(), buffer);
/// assert_eq!(berlin.to_string(), "52.52000 N 13.40500 E");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct GeoCoord {
    lat: f64,
    lon: f64,
}

impl GeoCoord {
    /// Creates a coordinate from latitude and longitude in degrees.
    #[must_use]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Replaces both values at once.
    pub fn set(&mut self, lat: f64, lon: f64) {
        self.lat = lat;
        self.lon = lon;
    }

    /// Returns the latitude in degrees.
    #[must_use]
    pub const fn lat(&self) -> f64 {
        self.lat
    }

    /// Returns the longitude in degrees.
    #[must_use]
    pub const fn lon(&self) -> f64 {
        self.lon
    }

    /// Returns true if both values are finite and inside the valid ranges.
    ///
    /// # Examples
    ///
    /// ```
    /// use geocoord_core::GeoCoord;
    ///
    /// assert!(GeoCoord::new(90.0, -180.0).is_valid());
    /// assert!(!GeoCoord::new(90.5, 0.0).is_valid());
    /// assert!(!GeoCoord::new(f64::NAN, 0.0).is_valid());
    /// ```
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && (MIN_LAT..=MAX_LAT).contains(&self.lat)
            && (MIN_LON..=MAX_LON).contains(&self.lon)
    }

    /// Total ordering, latitude first, using [`f64::total_cmp`] on each axis.
    ///
    /// Agrees with `partial_cmp` for non-NaN values except that `-0.0`
    /// sorts before `0.0`.
    #[must_use]
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.lat
            .total_cmp(&other.lat)
            .then_with(|| self.lon.total_cmp(&other.lon))
    }

    /// Renders the canonical display text, five decimals per axis.
    ///
    /// The output is always accepted by [`GeoCoord::parse`].
    #[must_use]
    pub fn display_text(&self) -> String {
        self.display_text_with(DisplayPrecision::default())
    }

    /// Renders the display text with the given number of decimals.
    ///
    /// # Examples
    ///
    /// ```
    /// use geocoord_core::{DisplayPrecision, GeoCoord};
    ///
    /// let coord = GeoCoord::new(-33.8688, -151.2093);
    /// assert_eq!(
    ///     coord.display_text_with(DisplayPrecision::Coarse),
    ///     "33.87 S 151.21 W"
    /// );
    /// ```
    #[must_use]
    pub fn display_text_with(&self, precision: DisplayPrecision) -> String {
        let decimals = precision.decimal_places();
        let lat_hint = if self.lat >= 0.0 { 'N' } else { 'S' };
        let lon_hint = if self.lon >= 0.0 { 'E' } else { 'W' };

        format!(
            "{:.decimals$} {lat_hint} {:.decimals$} {lon_hint}",
            self.lat.abs(),
            self.lon.abs(),
        )
    }
}

impl fmt::Display for GeoCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_text())
    }
}

impl From<(f64, f64)> for GeoCoord {
    fn from((lat, lon): (f64, f64)) -> Self {
        Self::new(lat, lon)
    }
}

impl From<GeoCoord> for (f64, f64) {
    fn from(coord: GeoCoord) -> Self {
        (coord.lat, coord.lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_precision_decimal_places() {
        assert_eq!(DisplayPrecision::Coarse.decimal_places(), 2);
        assert_eq!(DisplayPrecision::Standard.decimal_places(), 4);
        assert_eq!(DisplayPrecision::Fine.decimal_places(), 5);
    }

    #[test]
    fn display_precision_default_is_fine() {
        assert_eq!(DisplayPrecision::default(), DisplayPrecision::Fine);
    }

    #[test]
    fn equality_is_exact() {
        let a = GeoCoord::new(52.52, 13.405);
        assert_eq!(a, GeoCoord::new(52.52, 13.405));
        assert_ne!(a, GeoCoord::new(52.52, 13.405 + 1e-12));
    }

    #[test]
    fn ordering_is_latitude_first() {
        let south = GeoCoord::new(10.0, 170.0);
        let north = GeoCoord::new(20.0, -170.0);
        assert!(south < north);

        let west = GeoCoord::new(10.0, -5.0);
        let east = GeoCoord::new(10.0, 5.0);
        assert!(west < east);
        assert_eq!(west.partial_cmp(&west), Some(Ordering::Equal));
    }

    #[test]
    fn ordering_with_nan_is_undefined() {
        let nan = GeoCoord::new(f64::NAN, 0.0);
        assert_eq!(nan.partial_cmp(&GeoCoord::new(0.0, 0.0)), None);
        assert_ne!(nan, nan);
    }

    #[test]
    fn total_cmp_sorts_latitude_then_longitude() {
        let mut coords = vec![
            GeoCoord::new(1.0, 2.0),
            GeoCoord::new(-1.0, 5.0),
            GeoCoord::new(1.0, -2.0),
        ];
        coords.sort_by(GeoCoord::total_cmp);
        assert_eq!(
            coords,
            vec![
                GeoCoord::new(-1.0, 5.0),
                GeoCoord::new(1.0, -2.0),
                GeoCoord::new(1.0, 2.0),
            ]
        );
    }

    #[test]
    fn set_replaces_both_values() {
        let mut coord = GeoCoord::default();
        coord.set(1.5, -2.5);
        assert_eq!(coord.lat(), 1.5);
        assert_eq!(coord.lon(), -2.5);
    }

    #[test]
    fn display_text_uses_direction_hints() {
        assert_eq!(
            GeoCoord::new(52.52, 13.405).display_text(),
            "52.52000 N 13.40500 E"
        );
        assert_eq!(
            GeoCoord::new(-52.52, -13.405).display_text(),
            "52.52000 S 13.40500 W"
        );
        assert_eq!(GeoCoord::new(0.0, 0.0).to_string(), "0.00000 N 0.00000 E");
    }

    #[test]
    fn display_text_with_standard_precision() {
        let coord = GeoCoord::new(37.774_929_5, -122.419_415_5);
        assert_eq!(
            coord.display_text_with(DisplayPrecision::Standard),
            "37.7749 N 122.4194 W"
        );
    }

    #[test]
    fn validity_checks_range_and_finiteness() {
        assert!(GeoCoord::new(0.0, 0.0).is_valid());
        assert!(GeoCoord::new(-90.0, 180.0).is_valid());
        assert!(!GeoCoord::new(0.0, 180.1).is_valid());
        assert!(!GeoCoord::new(0.0, f64::INFINITY).is_valid());
    }

    #[test]
    fn tuple_conversions() {
        let coord: GeoCoord = (1.0, 2.0).into();
        assert_eq!(coord, GeoCoord::new(1.0, 2.0));
        let (lat, lon): (f64, f64) = coord.into();
        assert_eq!((lat, lon), (1.0, 2.0));
    }

    #[test]
    fn json_roundtrip_preserves_values() {
        let coord = GeoCoord::new(37.774_929_5, -122.419_415_5);
        let json = serde_json::to_string(&coord).unwrap();
        assert_eq!(json, r#"{"lat":37.7749295,"lon":-122.4194155}"#);

        let recovered: GeoCoord = serde_json::from_str(&json).unwrap();
        assert_eq!(recovered, coord);
    }
}
