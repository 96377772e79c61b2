//! Request/response planning entry point.
//!
//! A [`RideRequest`] carries everything the core needs for one computation;
//! [`plan`] turns it into a [`RidePlan`]. Nothing is kept between calls.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::{PlannerConfig, ZeroDistancePolicy};
use crate::constructive::{NearestNeighbor, RouteBuilder};
use crate::distance::LocationBook;
use crate::error::{RideshareError, Result};
use crate::fare::{allocate_fares, zero_allocation};
use crate::models::{DropOffRoute, FareAllocation, Location, RiderSet};

/// Input for a single planning run.
///
/// # Examples
///
/// ```
/// use u_rideshare::planner::{plan, RideRequest};
///
/// let request: RideRequest = serde_json::from_str(r#"{
///     "departure": "venue",
///     "locations": [
///         {"name": "venue", "x": 0.0, "y": 0.0},
///         {"name": "A", "x": 0.0, "y": 4.0},
///         {"name": "B", "x": 0.0, "y": 1.0}
///     ],
///     "riders": ["A", "B"],
///     "total_cost": 500
/// }"#).unwrap();
///
/// let ride = plan(&request).unwrap();
/// assert_eq!(ride.route.stops(), ["venue", "B", "A"]);
/// assert_eq!(ride.allocation.payment_of("A"), Some(400));
/// assert_eq!(ride.allocation.payment_of("B"), Some(100));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RideRequest {
    /// Name of the departure location.
    pub departure: String,
    /// Every known location, departure included.
    pub locations: Vec<Location>,
    /// Selected riders; the first one owns the car unless `owner` is set.
    pub riders: Vec<String>,
    /// Explicit car owner.
    #[serde(default)]
    pub owner: Option<String>,
    /// Estimated fare to split.
    pub total_cost: u64,
    /// Seats available, excluding the driver. Reported, never enforced.
    #[serde(default)]
    pub capacity: Option<u32>,
    /// Planner settings.
    #[serde(default)]
    pub config: PlannerConfig,
}

/// Result of a planning run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RidePlan {
    /// Owner whose car is used.
    pub owner: String,
    /// Drop-off order with its hop log.
    pub route: DropOffRoute,
    /// Per-rider payments.
    pub allocation: FareAllocation,
}

/// Plans a ride with the default nearest-neighbor route builder.
pub fn plan(request: &RideRequest) -> Result<RidePlan> {
    plan_with(&NearestNeighbor, request)
}

/// Plans a ride with a caller-supplied route builder.
pub fn plan_with<B: RouteBuilder + ?Sized>(
    builder: &B,
    request: &RideRequest,
) -> Result<RidePlan> {
    let book = LocationBook::from_locations(request.locations.iter().cloned())?;
    let riders = match &request.owner {
        Some(owner) => RiderSet::with_owner(request.riders.iter().cloned(), owner.clone())?,
        None => RiderSet::new(request.riders.iter().cloned())?,
    };

    if let Some(capacity) = request.capacity {
        let passengers = riders.passengers().count();
        if passengers > capacity as usize {
            warn!(passengers, capacity, "more passengers than seats; capacity is not enforced");
        }
    }

    let route = builder.build(&book, &request.departure, &riders)?;
    let allocation = match allocate_fares(&route, &riders, request.total_cost) {
        Ok(allocation) => allocation,
        Err(RideshareError::InvalidAllocation)
            if request.config.zero_distance == ZeroDistancePolicy::ZeroPayments =>
        {
            warn!("ride covers no distance; every rider pays 0");
            zero_allocation(&route, &riders, request.total_cost)
        }
        Err(e) => return Err(e),
    };

    info!(
        owner = riders.owner(),
        stops = route.len(),
        distance = route.total_distance(),
        paid = allocation.total_paid(),
        total_cost = request.total_cost,
        "ride planned"
    );

    Ok(RidePlan {
        owner: riders.owner().to_owned(),
        route,
        allocation,
    })
}
