//! Drop-off route and hop types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One directed leg between two consecutive stops.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hop {
    /// Stop the car leaves from.
    pub from: String,
    /// Stop the car arrives at.
    pub to: String,
    /// Length of this leg.
    pub distance: f64,
}

impl Hop {
    /// Renders the hop as `from ➝ to (5.4km)` with the given distance unit.
    pub fn describe(&self, unit: &str) -> String {
        format!("{} ➝ {} ({:.1}{unit})", self.from, self.to, self.distance)
    }
}

/// An ordered drop-off sequence for a single car.
///
/// The first stop is the departure point and the last stop is the car
/// owner's home. Each consecutive pair of stops has a matching [`Hop`].
///
/// # Examples
///
/// ```
/// use u_rideshare::models::DropOffRoute;
///
/// let mut route = DropOffRoute::new("venue");
/// route.push_stop("B", 5.0);
/// route.push_stop("A", 3.0);
/// assert_eq!(route.stops(), ["venue", "B", "A"]);
/// assert_eq!(route.hops().len(), 2);
/// assert!((route.total_distance() - 8.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropOffRoute {
    stops: Vec<String>,
    hops: Vec<Hop>,
    total_distance: f64,
}

impl DropOffRoute {
    /// Creates a route holding only the departure point.
    pub fn new(departure: impl Into<String>) -> Self {
        Self {
            stops: vec![departure.into()],
            hops: Vec::new(),
            total_distance: 0.0,
        }
    }

    /// Appends a stop reached from the current last stop over `distance`.
    pub fn push_stop(&mut self, name: impl Into<String>, distance: f64) {
        let to = name.into();
        let from = self.last_stop().to_owned();
        self.hops.push(Hop {
            from,
            to: to.clone(),
            distance,
        });
        self.stops.push(to);
        self.total_distance += distance;
    }

    /// The departure point.
    pub fn departure(&self) -> &str {
        self.stops.first().map(String::as_str).unwrap_or_default()
    }

    /// The final stop (the car owner once the route is complete).
    pub fn last_stop(&self) -> &str {
        self.stops.last().map(String::as_str).unwrap_or_default()
    }

    /// All stops in visiting order, departure included.
    pub fn stops(&self) -> &[String] {
        &self.stops
    }

    /// The hop log, one entry per consecutive pair of stops.
    pub fn hops(&self) -> &[Hop] {
        &self.hops
    }

    /// Number of stops, departure included.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Returns `true` if the car never leaves the departure point.
    pub fn is_empty(&self) -> bool {
        self.hops.is_empty()
    }

    /// Sum of all hop distances.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Distance driven from the departure until `name` is first dropped off.
    ///
    /// Returns `None` if `name` is never the destination of a hop.
    pub fn distance_to_drop_off(&self, name: &str) -> Option<f64> {
        let mut ridden = 0.0;
        for hop in &self.hops {
            ridden += hop.distance;
            if hop.to == name {
                return Some(ridden);
            }
        }
        None
    }
}

impl fmt::Display for DropOffRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.stops.join(" → "))
    }
}
