//! Distance and bearing value types.

use std::fmt;
use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// A distance along the earth's surface, stored in metres.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Distance {
    meters: f64,
}

impl Distance {
    /// Zero distance.
    pub const ZERO: Self = Self { meters: 0.0 };

    /// Creates a distance from metres.
    #[must_use]
    pub const fn from_meters(meters: f64) -> Self {
        Self { meters }
    }

    /// Creates a distance from kilometres.
    #[must_use]
    pub fn from_kilometers(kilometers: f64) -> Self {
        Self::from_meters(kilometers * 1000.0)
    }

    /// Returns the distance in metres.
    #[must_use]
    pub const fn as_meters(self) -> f64 {
        self.meters
    }

    /// Returns the distance in kilometres.
    #[must_use]
    pub fn as_kilometers(self) -> f64 {
        self.meters / 1000.0
    }
}

impl Add for Distance {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_meters(self.meters + rhs.meters)
    }
}

impl Sub for Distance {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_meters(self.meters - rhs.meters)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.meters.abs() >= 1000.0 {
            write!(f, "{:.1} km", self.as_kilometers())
        } else {
            write!(f, "{:.0} m", self.meters)
        }
    }
}

/// A course over ground in degrees clockwise from true north, kept in
/// `[0, 360)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Bearing {
    degrees: f64,
}

impl Bearing {
    /// Creates a bearing from degrees, wrapping into `[0, 360)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use geocoord_core::geodesy::Bearing;
    ///
    /// assert_eq!(Bearing::from_degrees(-90.0).as_degrees(), 270.0);
    /// assert_eq!(Bearing::from_degrees(450.0).as_degrees(), 90.0);
    /// ```
    #[must_use]
    pub fn from_degrees(degrees: f64) -> Self {
        let wrapped = degrees.rem_euclid(360.0);
        // rem_euclid can round up to exactly 360 for tiny negative inputs
        Self {
            degrees: if wrapped >= 360.0 { 0.0 } else { wrapped },
        }
    }

    /// Creates a bearing from radians.
    #[must_use]
    pub fn from_radians(radians: f64) -> Self {
        Self::from_degrees(radians.to_degrees())
    }

    /// Returns the bearing in degrees.
    #[must_use]
    pub const fn as_degrees(self) -> f64 {
        self.degrees
    }

    /// Returns the bearing in radians.
    #[must_use]
    pub fn as_radians(self) -> f64 {
        self.degrees.to_radians()
    }

    /// Returns the nearest of the eight principal compass points.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn compass_point(self) -> &'static str {
        const POINTS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];
        let sector = ((self.degrees + 22.5) / 45.0) as usize % POINTS.len();
        POINTS[sector]
    }
}

impl fmt::Display for Bearing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}°", self.degrees)
    }
}
