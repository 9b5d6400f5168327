//! Geographic bounds in WGS84 degrees
//!
//! `Bounds` is the caller-facing description of the map window. The
//! conversion engine consumes it as-is; validation happens at the input
//! boundary (CLI, HTTP layer) via [`Bounds::validate`], never inside the
//! engine.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors reported when caller-supplied bounds are rejected at the input
/// boundary.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BoundsError {
    #[error("bounds contain a non-finite coordinate")]
    NonFinite,

    #[error("north ({north}) must be greater than south ({south})")]
    Inverted { north: f64, south: f64 },

    #[error("latitudes must lie strictly between -90 and 90 degrees")]
    Polar,
}

/// A geographic window: north/south/east/west edges in WGS84 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl Bounds {
    pub fn new(north: f64, south: f64, east: f64, west: f64) -> Self {
        Self {
            north,
            south,
            east,
            west,
        }
    }

    /// Build bounds from a viewport region: a center point plus the total
    /// latitude/longitude spans.
    pub fn from_center(lat: f64, lng: f64, lat_delta: f64, lng_delta: f64) -> Self {
        let half_lat = lat_delta / 2.0;
        let half_lng = lng_delta / 2.0;
        Self {
            north: lat + half_lat,
            south: lat - half_lat,
            east: lng + half_lng,
            west: lng - half_lng,
        }
    }

    /// Window area in square degrees.
    pub fn area_degrees(&self) -> f64 {
        ((self.north - self.south) * (self.east - self.west)).abs()
    }

    /// Clamp latitudes into [-90, 90] and wrap longitudes into [-180, 180).
    pub fn clamped(&self) -> Self {
        Self {
            north: self.north.clamp(-90.0, 90.0),
            south: self.south.clamp(-90.0, 90.0),
            east: wrap_longitude(self.east),
            west: wrap_longitude(self.west),
        }
    }

    /// Web-Mercator zoom level implied by the latitude span: the whole-world
    /// span is zoom 0 and each halving of the span adds one level. The span
    /// is clamped to [1e-6, 360] before taking the logarithm.
    pub fn zoom_level(&self) -> f64 {
        let span = (self.north - self.south).abs().clamp(1e-6, 360.0);
        (360.0 / span).log2().round()
    }

    /// Input-boundary validation: every coordinate must be finite, `north`
    /// must exceed `south`, and latitudes must stay strictly inside
    /// (-90, 90). The projection diverges at the poles, so polar edges are
    /// rejected here rather than clamped later.
    pub fn validate(&self) -> Result<(), BoundsError> {
        let edges = [self.north, self.south, self.east, self.west];
        if edges.iter().any(|edge| !edge.is_finite()) {
            return Err(BoundsError::NonFinite);
        }
        if self.north <= self.south {
            return Err(BoundsError::Inverted {
                north: self.north,
                south: self.south,
            });
        }
        if self.north >= 90.0 || self.south <= -90.0 {
            return Err(BoundsError::Polar);
        }
        Ok(())
    }
}

fn wrap_longitude(lng: f64) -> f64 {
    (lng + 540.0).rem_euclid(360.0) - 180.0
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "N:{:.5}  S:{:.5}  E:{:.5}  W:{:.5}",
            self.north, self.south, self.east, self.west
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_center() {
        let bounds = Bounds::from_center(10.0, 20.0, 2.0, 4.0);
        assert_eq!(bounds.north, 11.0);
        assert_eq!(bounds.south, 9.0);
        assert_eq!(bounds.east, 22.0);
        assert_eq!(bounds.west, 18.0);
    }

    #[test]
    fn test_area_degrees() {
        let bounds = Bounds::new(1.0, 0.0, 3.0, 1.0);
        assert_eq!(bounds.area_degrees(), 2.0);
        // Orientation does not matter for the area
        let flipped = Bounds::new(0.0, 1.0, 1.0, 3.0);
        assert_eq!(flipped.area_degrees(), 2.0);
    }

    #[test]
    fn test_clamped_wraps_longitudes() {
        let bounds = Bounds::new(95.0, -95.0, 190.0, -190.0).clamped();
        assert_eq!(bounds.north, 90.0);
        assert_eq!(bounds.south, -90.0);
        assert_eq!(bounds.east, -170.0);
        assert_eq!(bounds.west, 170.0);
    }

    #[test]
    fn test_clamped_keeps_valid_bounds() {
        let bounds = Bounds::new(48.5, 48.25, 2.25, 2.0);
        assert_eq!(bounds.clamped(), bounds);
    }

    #[test]
    fn test_zoom_level() {
        assert_eq!(Bounds::new(180.0, -180.0, 180.0, -180.0).zoom_level(), 0.0);
        assert_eq!(Bounds::new(90.0, -90.0, 0.0, 0.0).zoom_level(), 1.0);
        // A city-sized window sits in the low teens
        let city = Bounds::from_center(52.52, 13.40, 0.04, 0.06);
        assert_eq!(city.zoom_level(), 13.0);
    }

    #[test]
    fn test_validate_accepts_ordinary_window() {
        assert!(Bounds::new(1.0, 0.0, 1.0, 0.0).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        let bounds = Bounds::new(f64::NAN, 0.0, 1.0, 0.0);
        assert_eq!(bounds.validate(), Err(BoundsError::NonFinite));
    }

    #[test]
    fn test_validate_rejects_inverted() {
        let bounds = Bounds::new(0.0, 1.0, 1.0, 0.0);
        assert!(matches!(
            bounds.validate(),
            Err(BoundsError::Inverted { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_polar_edges() {
        assert_eq!(
            Bounds::new(90.0, 0.0, 1.0, 0.0).validate(),
            Err(BoundsError::Polar)
        );
        assert_eq!(
            Bounds::new(0.0, -90.0, 1.0, 0.0).validate(),
            Err(BoundsError::Polar)
        );
    }

    #[test]
    fn test_display_formatting() {
        let bounds = Bounds::new(52.5, 52.4, 13.5, 13.4);
        assert_eq!(
            bounds.to_string(),
            "N:52.50000  S:52.40000  E:13.50000  W:13.40000"
        );
    }
}
