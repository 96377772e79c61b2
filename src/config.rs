//! Planner configuration.

use serde::{Deserialize, Serialize};

/// What to do when a ride covers no distance at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroDistancePolicy {
    /// Surface [`crate::RideshareError::InvalidAllocation`].
    #[default]
    Reject,
    /// Log a warning and charge every rider nothing.
    ZeroPayments,
}

/// Tunables for [`crate::planner::plan`].
///
/// Every field has a default, so an empty JSON object is a valid config.
///
/// # Examples
///
/// ```
/// use u_rideshare::config::{PlannerConfig, ZeroDistancePolicy};
///
/// let cfg: PlannerConfig = serde_json::from_str(r#"{"zero_distance": "zero_payments"}"#).unwrap();
/// assert_eq!(cfg.zero_distance, ZeroDistancePolicy::ZeroPayments);
/// assert_eq!(cfg.distance_unit, "km");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Zero-distance handling.
    pub zero_distance: ZeroDistancePolicy,
    /// Unit label used when rendering distances.
    pub distance_unit: String,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            zero_distance: ZeroDistancePolicy::Reject,
            distance_unit: "km".to_owned(),
        }
    }
}
