//! Named locations on the plane.

use serde::{Deserialize, Serialize};

/// A named point: the departure venue or a rider's home.
///
/// Locations are immutable once created. Coordinates are plain planar
/// units; no geodesy is involved.
///
/// # Examples
///
/// ```
/// use u_rideshare::models::Location;
///
/// let venue = Location::new("venue", 0.0, 0.0);
/// let home = Location::new("home", 3.0, 4.0);
/// assert_eq!(home.name(), "home");
/// assert!((venue.distance_to(&home) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    name: String,
    x: f64,
    y: f64,
}

impl Location {
    /// Creates a location.
    pub fn new(name: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            name: name.into(),
            x,
            y,
        }
    }

    /// Identifier of this location.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Returns `true` if both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Euclidean distance to another location.
    ///
    /// Infinite only when the true distance exceeds `f64::MAX`.
    pub fn distance_to(&self, other: &Location) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let loc = Location::new("B", 5.0, 2.0);
        assert_eq!(loc.name(), "B");
        assert_eq!(loc.x(), 5.0);
        assert_eq!(loc.y(), 2.0);
        assert!(loc.is_finite());
    }

    #[test]
    fn test_distance_symmetric() {
        let a = Location::new("A", 2.0, 5.0);
        let c = Location::new("C", 1.0, 8.0);
        assert_eq!(a.distance_to(&c), c.distance_to(&a));
        assert!((a.distance_to(&c) - 10f64.sqrt()).abs() < 1e-10);
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let a = Location::new("A", -7.5, 3.25);
        assert_eq!(a.distance_to(&a), 0.0);
    }

    #[test]
    fn test_distance_far_apart_stays_finite() {
        let origin = Location::new("origin", 0.0, 0.0);
        let far = Location::new("far", 1e200, 1e200);
        let d = origin.distance_to(&far);
        assert!(d.is_finite());
        assert!((d / 1e200 - 2f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_non_finite() {
        assert!(!Location::new("x", f64::NAN, 0.0).is_finite());
        assert!(!Location::new("x", 0.0, f64::INFINITY).is_finite());
    }
}
