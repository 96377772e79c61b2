//! Fare splitting.
//!
//! Turns a drop-off route into per-rider payments proportional to ride
//! distance.

mod allocate;

pub use allocate::{allocate_fares, zero_allocation};
