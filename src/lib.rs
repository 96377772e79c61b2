//! # u-rideshare
//!
//! Drop-off routing and fare splitting for a group sharing one chauffeured
//! car home. A greedy nearest-neighbor pass orders the stops, the car
//! owner is always dropped off last, and the fare is split in proportion to
//! how far each rider travels.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Location, RiderSet, DropOffRoute, FareAllocation)
//! - [`distance`] — Named location registry and Euclidean distance
//! - [`constructive`] — Route builders (`RouteBuilder` trait, Nearest Neighbor)
//! - [`fare`] — Distance-proportional fare allocation
//! - [`planner`] — Request/response entry point chaining routing and allocation
//! - [`config`] — Planner settings

pub mod config;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod fare;
pub mod models;
pub mod planner;

pub use error::{RideshareError, Result};
