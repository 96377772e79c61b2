//! Nearest-neighbor drop-off ordering.
//!
//! Starting from the departure point, always drive to the nearest rider not
//! yet dropped off. The car owner is held back and always visited last.
//!
//! # Complexity
//!
//! O(n²) where n = number of riders.
//!
//! # Reference
//!
//! Single-pass greedy construction with no backtracking. Tour quality is
//! typically well above optimal, which is acceptable for a handful of
//! riders.

use tracing::debug;

use super::RouteBuilder;
use crate::distance::LocationBook;
use crate::error::Result;
use crate::models::{DropOffRoute, Location, RiderSet};

/// Greedy nearest-unvisited route builder.
///
/// Ties are resolved in favor of the rider selected first.
///
/// # Examples
///
/// ```
/// use u_rideshare::constructive::{NearestNeighbor, RouteBuilder};
/// use u_rideshare::distance::LocationBook;
/// use u_rideshare::models::{Location, RiderSet};
///
/// let book = LocationBook::from_locations(vec![
///     Location::new("venue", 0.0, 0.0),
///     Location::new("A", 3.0, 0.0),
///     Location::new("B", 2.0, 0.0),
///     Location::new("C", 1.0, 0.0),
/// ])
/// .unwrap();
/// let riders = RiderSet::new(["A", "B", "C"]).unwrap();
///
/// let route = NearestNeighbor.build(&book, "venue", &riders).unwrap();
/// assert_eq!(route.stops(), ["venue", "C", "B", "A"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestNeighbor;

impl RouteBuilder for NearestNeighbor {
    fn build(
        &self,
        book: &LocationBook,
        departure: &str,
        riders: &RiderSet,
    ) -> Result<DropOffRoute> {
        let start = book.get(departure)?;
        let owner = book.get(riders.owner())?;
        let mut unvisited: Vec<&Location> = riders
            .passengers()
            .map(|name| book.get(name))
            .collect::<Result<_>>()?;

        let mut route = DropOffRoute::new(start.name());
        let mut current = start;

        while !unvisited.is_empty() {
            // Strict `<` keeps the earliest rider on ties.
            let mut best: Option<(usize, f64)> = None;
            for (i, candidate) in unvisited.iter().enumerate() {
                let d = current.distance_to(candidate);
                if best.map_or(true, |(_, best_d)| d < best_d) {
                    best = Some((i, d));
                }
            }

            let Some((i, d)) = best else { break };
            let next = unvisited.remove(i);
            debug!(from = current.name(), to = next.name(), distance = d, "hop");
            route.push_stop(next.name(), d);
            current = next;
        }

        let d = current.distance_to(owner);
        debug!(from = current.name(), to = owner.name(), distance = d, "final hop to owner");
        route.push_stop(owner.name(), d);

        Ok(route)
    }
}
