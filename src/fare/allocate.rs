//! Distance-proportional fare allocation.

use tracing::debug;

use crate::error::{RideshareError, Result};
use crate::models::{DropOffRoute, FareAllocation, FareShare, RiderSet};

/// Splits `total_cost` among riders in proportion to how far each one rides.
///
/// A rider's coefficient is the distance driven from the departure until
/// that rider is first dropped off, so the car owner, always the last stop,
/// carries the full route length. Payments are
/// `floor(coefficient / total_coefficient * total_cost)`.
///
/// # Errors
///
/// - [`RideshareError::RiderNotOnRoute`] if a rider is never dropped off.
/// - [`RideshareError::InvalidAllocation`] if every coefficient is zero.
/// - [`RideshareError::NonFiniteDistance`] if the coefficients overflow.
///
/// # Examples
///
/// ```
/// use u_rideshare::models::{DropOffRoute, RiderSet};
/// use u_rideshare::fare::allocate_fares;
///
/// let mut route = DropOffRoute::new("venue");
/// route.push_stop("B", 1.0);
/// route.push_stop("A", 2.0);
/// let riders = RiderSet::new(["A", "B"]).unwrap();
///
/// // A rides 3.0, B rides 1.0
/// let alloc = allocate_fares(&route, &riders, 1000).unwrap();
/// assert_eq!(alloc.payment_of("A"), Some(750));
/// assert_eq!(alloc.payment_of("B"), Some(250));
/// ```
pub fn allocate_fares(
    route: &DropOffRoute,
    riders: &RiderSet,
    total_cost: u64,
) -> Result<FareAllocation> {
    let coefficients = riders
        .riders()
        .iter()
        .map(|rider| {
            route
                .distance_to_drop_off(rider)
                .map(|d| (rider, d))
                .ok_or_else(|| RideshareError::RiderNotOnRoute {
                    name: rider.clone(),
                })
        })
        .collect::<Result<Vec<_>>>()?;

    let total_coefficient: f64 = coefficients.iter().map(|(_, c)| c).sum();
    if !total_coefficient.is_finite() {
        return Err(RideshareError::NonFiniteDistance);
    }
    if total_coefficient <= 0.0 {
        return Err(RideshareError::InvalidAllocation);
    }

    let fare = total_cost as f64;
    let mut remaining = total_cost;
    let shares = coefficients
        .into_iter()
        .map(|(rider, coefficient)| {
            // `as` truncates toward zero. Near u64::MAX the f64 fare rounds up,
            // so payments are capped to what is left of the fare.
            let payment = ((coefficient / total_coefficient * fare) as u64).min(remaining);
            remaining -= payment;
            debug!(rider = rider.as_str(), coefficient, payment, "fare share");
            FareShare {
                rider: rider.clone(),
                coefficient,
                payment,
            }
        })
        .collect();

    Ok(FareAllocation::new(shares, total_cost))
}

/// Allocation with every payment set to zero.
///
/// Used when a ride covers no distance and the caller opts not to fail.
pub fn zero_allocation(route: &DropOffRoute, riders: &RiderSet, total_cost: u64) -> FareAllocation {
    let shares = riders
        .riders()
        .iter()
        .map(|rider| FareShare {
            rider: rider.clone(),
            coefficient: route.distance_to_drop_off(rider).unwrap_or(0.0),
            payment: 0,
        })
        .collect();
    FareAllocation::new(shares, total_cost)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constructive::build_route;
    use crate::distance::LocationBook;
    use crate::models::Location;

    fn party_book() -> LocationBook {
        LocationBook::from_locations(vec![
            Location::new("dep", 0.0, 0.0),
            Location::new("A", 2.0, 5.0),
            Location::new("B", 5.0, 2.0),
            Location::new("C", 1.0, 8.0),
        ])
        .expect("valid book")
    }

    #[test]
    fn test_party_scenario_payments() {
        let book = party_book();
        let riders = RiderSet::new(["A", "B", "C"]).expect("valid");
        let route = build_route(&book, "dep", &riders).expect("route");
        let alloc = allocate_fares(&route, &riders, 9000).expect("allocation");

        let names: Vec<_> = alloc.shares().iter().map(|s| s.rider.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);

        let a = alloc.share_of("A").expect("A");
        let b = alloc.share_of("B").expect("B");
        let c = alloc.share_of("C").expect("C");
        assert!((b.coefficient - 5.385164807).abs() < 1e-6);
        assert!((c.coefficient - 12.596267358).abs() < 1e-6);
        assert!((a.coefficient - route.total_distance()).abs() < 1e-10);
        assert!((a.coefficient - 15.758545018).abs() < 1e-6);

        assert_eq!(a.payment, 4203);
        assert_eq!(b.payment, 1436);
        assert_eq!(c.payment, 3360);
        assert_eq!(alloc.total_paid(), 8999);
        assert_eq!(alloc.shortfall(), 1);
    }

    #[test]
    fn test_zero_cost_pays_nothing() {
        let book = party_book();
        let riders = RiderSet::new(["A", "B", "C"]).expect("valid");
        let route = build_route(&book, "dep", &riders).expect("route");
        let alloc = allocate_fares(&route, &riders, 0).expect("allocation");
        assert!(alloc.shares().iter().all(|s| s.payment == 0));
        assert!(alloc.total_coefficient() > 0.0);
    }

    #[test]
    fn test_all_at_departure_is_invalid() {
        let book = LocationBook::from_locations(vec![
            Location::new("dep", 1.0, 1.0),
            Location::new("A", 1.0, 1.0),
            Location::new("B", 1.0, 1.0),
        ])
        .expect("valid book");
        let riders = RiderSet::new(["A", "B"]).expect("valid");
        let route = build_route(&book, "dep", &riders).expect("route");
        let err = allocate_fares(&route, &riders, 5000).unwrap_err();
        assert_eq!(err, RideshareError::InvalidAllocation);
    }

    #[test]
    fn test_huge_fare_never_overpays() {
        let mut route = DropOffRoute::new("dep");
        route.push_stop("B", 1.0);
        route.push_stop("A", 0.0);
        let riders = RiderSet::new(["A", "B"]).expect("valid");
        let alloc = allocate_fares(&route, &riders, u64::MAX).expect("allocation");
        assert_eq!(alloc.total_paid(), u64::MAX);
        assert!(alloc.shares().iter().all(|s| s.payment <= u64::MAX / 2 + 1));
        assert_eq!(alloc.shortfall(), 0);
    }

    #[test]
    fn test_overflowing_distance_is_rejected() {
        let book = LocationBook::from_locations(vec![
            Location::new("dep", -1e308, -1e308),
            Location::new("A", 1e308, 1e308),
            Location::new("B", 1.0, 0.0),
        ])
        .expect("valid book");
        let riders = RiderSet::new(["A", "B"]).expect("valid");
        let route = build_route(&book, "dep", &riders).expect("route");
        let err = allocate_fares(&route, &riders, 9000).unwrap_err();
        assert_eq!(err, RideshareError::NonFiniteDistance);
    }

    #[test]
    fn test_far_apart_riders_still_pay() {
        let book = LocationBook::from_locations(vec![
            Location::new("dep", 0.0, 0.0),
            Location::new("A", 1e200, 0.0),
            Location::new("B", 1.0, 0.0),
        ])
        .expect("valid book");
        let riders = RiderSet::new(["A", "B"]).expect("valid");
        let route = build_route(&book, "dep", &riders).expect("route");
        let alloc = allocate_fares(&route, &riders, 9000).expect("allocation");
        assert_eq!(alloc.payment_of("A"), Some(9000));
        assert_eq!(alloc.payment_of("B"), Some(0));
    }

    #[test]
    fn test_rider_missing_from_route() {
        let mut route = DropOffRoute::new("dep");
        route.push_stop("A", 4.0);
        let riders = RiderSet::new(["A", "B"]).expect("valid");
        let err = allocate_fares(&route, &riders, 100).unwrap_err();
        assert_eq!(err, RideshareError::RiderNotOnRoute { name: "B".into() });
    }

    #[test]
    fn test_owner_outside_selection_is_not_billed() {
        let book = party_book();
        let riders = RiderSet::with_owner(["B", "C"], "A").expect("valid");
        let route = build_route(&book, "dep", &riders).expect("route");
        let alloc = allocate_fares(&route, &riders, 1000).expect("allocation");
        assert_eq!(alloc.shares().len(), 2);
        assert!(alloc.share_of("A").is_none());
    }

    #[test]
    fn test_zero_allocation() {
        let mut route = DropOffRoute::new("dep");
        route.push_stop("A", 0.0);
        let riders = RiderSet::new(["A"]).expect("valid");
        let alloc = zero_allocation(&route, &riders, 300);
        assert_eq!(alloc.total_paid(), 0);
        assert_eq!(alloc.shortfall(), 300);
    }
}
