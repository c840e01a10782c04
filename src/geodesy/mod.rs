//! Distance and destination-point calculations between coordinates.
//!
//! The math is delegated to the `geo` crate:
//! - [`Geodesic`] uses Karney's algorithm on the WGS-84 ellipsoid (default)
//! - [`Haversine`] uses a sphere with the mean earth radius
//!
//! Both ignore elevation.
//!
//! # Example Usage
//!
//! ```
//! use geocoord_core::geodesy::{Bearing, Distance, Haversine};
//! use geocoord_core::GeoCoord;
//!
//! let berlin = GeoCoord::new(52.52, 13.405);
//! let paris = GeoCoord::new(48.8566, 2.3522);
//!
//! let km = berlin.distance_to(&paris).as_kilometers();
//! assert!((870.0..890.0).contains(&km));
//!
//! let spherical = berlin.distance_to_with(&paris, &Haversine).as_kilometers();
//! assert!((km - spherical).abs() < 5.0);
//!
//! let east = berlin.destination(Bearing::from_degrees(90.0), Distance::from_kilometers(10.0));
//! assert!(east.lon() > berlin.lon());
//! ```

mod types;

pub use types::{Bearing, Distance};

use std::ops::Sub;

use geo::{GeodesicDestination, GeodesicDistance, HaversineDestination, HaversineDistance, Point};

use crate::coord::GeoCoord;

/// Distance and destination-point calculations on the earth's surface.
pub trait Geodesy {
    /// Returns the surface distance between two coordinates.
    fn distance(&self, from: &GeoCoord, to: &GeoCoord) -> Distance;

    /// Returns the coordinate reached by travelling `distance` from `origin`
    /// along the initial course `bearing`.
    fn destination(&self, origin: &GeoCoord, bearing: Bearing, distance: Distance) -> GeoCoord;
}

/// Ellipsoidal calculations on WGS-84.
#[derive(Debug, Clone, Copy, Default)]
pub struct Geodesic;

/// Spherical calculations using the mean earth radius.
#[derive(Debug, Clone, Copy, Default)]
pub struct Haversine;

impl Geodesy for Geodesic {
    fn distance(&self, from: &GeoCoord, to: &GeoCoord) -> Distance {
        Distance::from_meters(to_point(from).geodesic_distance(&to_point(to)))
    }

    fn destination(&self, origin: &GeoCoord, bearing: Bearing, distance: Distance) -> GeoCoord {
        from_point(
            to_point(origin).geodesic_destination(bearing.as_degrees(), distance.as_meters()),
        )
    }
}

impl Geodesy for Haversine {
    fn distance(&self, from: &GeoCoord, to: &GeoCoord) -> Distance {
        Distance::from_meters(to_point(from).haversine_distance(&to_point(to)))
    }

    fn destination(&self, origin: &GeoCoord, bearing: Bearing, distance: Distance) -> GeoCoord {
        from_point(
            to_point(origin).haversine_destination(bearing.as_degrees(), distance.as_meters()),
        )
    }
}

fn to_point(coord: &GeoCoord) -> Point<f64> {
    Point::new(coord.lon(), coord.lat())
}

fn from_point(point: Point<f64>) -> GeoCoord {
    GeoCoord::new(point.y(), normalize_lon(point.x()))
}

/// Wraps a longitude into `[-180, 180]`.
fn normalize_lon(lon: f64) -> f64 {
    if (-180.0..=180.0).contains(&lon) {
        lon
    } else {
        (lon + 180.0).rem_euclid(360.0) - 180.0
    }
}

impl GeoCoord {
    /// Returns the ellipsoidal distance to `target`.
    #[must_use]
    pub fn distance_to(&self, target: &Self) -> Distance {
        self.distance_to_with(target, &Geodesic)
    }

    /// Returns the distance to `target` using the given calculation.
    #[must_use]
    pub fn distance_to_with<G: Geodesy + ?Sized>(&self, target: &Self, geodesy: &G) -> Distance {
        geodesy.distance(self, target)
    }

    /// Returns the coordinate reached by travelling `distance` along
    /// `bearing`, on the ellipsoid.
    #[must_use]
    pub fn destination(&self, bearing: Bearing, distance: Distance) -> Self {
        self.destination_with(bearing, distance, &Geodesic)
    }

    /// Returns the destination coordinate using the given calculation.
    #[must_use]
    pub fn destination_with<G: Geodesy + ?Sized>(
        &self,
        bearing: Bearing,
        distance: Distance,
        geodesy: &G,
    ) -> Self {
        geodesy.destination(self, bearing, distance)
    }
}

impl Sub for GeoCoord {
    type Output = Distance;

    fn sub(self, rhs: Self) -> Distance {
        self.distance_to(&rhs)
    }
}
