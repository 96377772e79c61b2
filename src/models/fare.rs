//! Fare allocation types.

use serde::{Deserialize, Serialize};

/// One rider's share of the fare.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FareShare {
    /// Rider name.
    pub rider: String,
    /// Cumulative ride distance from the departure to this rider's drop-off.
    pub coefficient: f64,
    /// Amount owed, truncated toward zero.
    pub payment: u64,
}

/// Per-rider payments for a single ride, in rider selection order.
///
/// Payments are truncated, so they may sum to slightly less than the
/// fare; [`FareAllocation::shortfall`] reports the loss.
///
/// # Examples
///
/// ```
/// use u_rideshare::models::{FareAllocation, FareShare};
///
/// let alloc = FareAllocation::new(
///     vec![
///         FareShare { rider: "A".into(), coefficient: 2.0, payment: 66 },
///         FareShare { rider: "B".into(), coefficient: 1.0, payment: 33 },
///     ],
///     100,
/// );
/// assert_eq!(alloc.total_paid(), 99);
/// assert_eq!(alloc.shortfall(), 1);
/// assert_eq!(alloc.payment_of("B"), Some(33));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FareAllocation {
    shares: Vec<FareShare>,
    total_cost: u64,
}

impl FareAllocation {
    /// Creates an allocation from computed shares.
    pub fn new(shares: Vec<FareShare>, total_cost: u64) -> Self {
        Self { shares, total_cost }
    }

    /// All shares in rider selection order.
    pub fn shares(&self) -> &[FareShare] {
        &self.shares
    }

    /// The fare being split.
    pub fn total_cost(&self) -> u64 {
        self.total_cost
    }

    /// Sum of all coefficients.
    pub fn total_coefficient(&self) -> f64 {
        self.shares.iter().map(|s| s.coefficient).sum()
    }

    /// Sum of all payments.
    pub fn total_paid(&self) -> u64 {
        self.shares
            .iter()
            .fold(0u64, |acc, s| acc.saturating_add(s.payment))
    }

    /// Amount lost to truncation.
    pub fn shortfall(&self) -> u64 {
        self.total_cost.saturating_sub(self.total_paid())
    }

    /// Looks up a rider's share.
    pub fn share_of(&self, rider: &str) -> Option<&FareShare> {
        self.shares.iter().find(|s| s.rider == rider)
    }

    /// Looks up a rider's payment.
    pub fn payment_of(&self, rider: &str) -> Option<u64> {
        self.share_of(rider).map(|s| s.payment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn share(rider: &str, coefficient: f64, payment: u64) -> FareShare {
        FareShare {
            rider: rider.into(),
            coefficient,
            payment,
        }
    }

    #[test]
    fn test_totals() {
        let alloc = FareAllocation::new(vec![share("A", 3.0, 50), share("B", 3.0, 50)], 100);
        assert_eq!(alloc.total_paid(), 100);
        assert_eq!(alloc.shortfall(), 0);
        assert!((alloc.total_coefficient() - 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_total_paid_saturates() {
        let alloc = FareAllocation::new(
            vec![share("A", 1.0, u64::MAX), share("B", 1.0, 1)],
            u64::MAX,
        );
        assert_eq!(alloc.total_paid(), u64::MAX);
        assert_eq!(alloc.shortfall(), 0);
    }

    #[test]
    fn test_lookup_missing() {
        let alloc = FareAllocation::new(vec![share("A", 1.0, 10)], 10);
        assert!(alloc.share_of("Z").is_none());
        assert_eq!(alloc.payment_of("A"), Some(10));
    }
}
