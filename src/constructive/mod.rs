//! Drop-off route construction.
//!
//! - [`RouteBuilder`] — capability trait for anything that orders the stops
//! - [`NearestNeighbor`] — greedy nearest-unvisited ordering, O(n²)
//!
//! Exact or improving solvers can be added as further [`RouteBuilder`]
//! implementations without touching fare allocation.

mod nearest_neighbor;

pub use nearest_neighbor::NearestNeighbor;

use crate::distance::LocationBook;
use crate::error::Result;
use crate::models::{DropOffRoute, RiderSet};

/// Orders the drop-offs of a single car.
///
/// Implementations must return a route that starts at `departure`, drops
/// off every rider other than the owner exactly once, and ends at the
/// owner's home.
pub trait RouteBuilder: Send + Sync {
    /// Builds the drop-off route.
    ///
    /// Fails with [`crate::RideshareError::UnknownLocation`] if the
    /// departure, owner, or any rider is not in `book`.
    fn build(
        &self,
        book: &LocationBook,
        departure: &str,
        riders: &RiderSet,
    ) -> Result<DropOffRoute>;
}

/// Builds a route with the default [`NearestNeighbor`] heuristic.
pub fn build_route(
    book: &LocationBook,
    departure: &str,
    riders: &RiderSet,
) -> Result<DropOffRoute> {
    NearestNeighbor.build(book, departure, riders)
}
