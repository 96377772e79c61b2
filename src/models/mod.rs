//! Domain model types for shared-ride drop-off planning.
//!
//! Provides named locations, the rider selection with its car owner,
//! drop-off routes with their hop log, and per-rider fare allocations.

mod fare;
mod location;
mod riders;
mod route;

pub use fare::{FareAllocation, FareShare};
pub use location::Location;
pub use riders::RiderSet;
pub use route::{DropOffRoute, Hop};
