//! Error type shared by every operation in the crate.

use thiserror::Error;

/// Errors raised while building a route or allocating fares.
///
/// All of them are deterministic functions of the input; nothing here is
/// worth retrying.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RideshareError {
    /// The rider selection is empty.
    #[error("rider set is empty")]
    EmptyRiderSet,

    /// A rider, owner or departure name has no registered coordinates.
    #[error("unknown location `{name}`")]
    UnknownLocation {
        /// The name that failed to resolve.
        name: String,
    },

    /// Total coefficient is zero, so proportional shares are undefined.
    #[error("total ride distance is zero; fares cannot be split proportionally")]
    InvalidAllocation,

    /// Ride distances are too large to add up as finite numbers.
    #[error("total ride distance is not finite; coordinates are too far apart")]
    NonFiniteDistance,

    /// A location name was registered twice.
    #[error("location `{name}` is already registered")]
    DuplicateLocation {
        /// The repeated name.
        name: String,
    },

    /// A rider appears more than once in the selection.
    #[error("rider `{name}` is selected more than once")]
    DuplicateRider {
        /// The repeated name.
        name: String,
    },

    /// A location was given a NaN or infinite coordinate.
    #[error("location `{name}` has a non-finite coordinate")]
    NonFiniteCoordinate {
        /// The offending location.
        name: String,
    },

    /// A rider is never dropped off on the route being billed.
    #[error("rider `{name}` is not a stop on the route")]
    RiderNotOnRoute {
        /// The missing rider.
        name: String,
    },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, RideshareError>;
