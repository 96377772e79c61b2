//! Rider selection and car owner.

use std::collections::HashSet;

use crate::error::{RideshareError, Result};

/// An ordered, duplicate-free selection of riders with a designated car owner.
///
/// The owner is always the last stop of a route. By convention the first
/// selected rider owns the car; [`RiderSet::with_owner`] names someone else,
/// who need not be in the selection.
///
/// # Examples
///
/// ```
/// use u_rideshare::models::RiderSet;
///
/// let riders = RiderSet::new(["A", "B", "C"]).unwrap();
/// assert_eq!(riders.owner(), "A");
/// assert_eq!(riders.len(), 3);
/// assert_eq!(riders.passengers().collect::<Vec<_>>(), vec!["B", "C"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiderSet {
    riders: Vec<String>,
    owner: String,
}

impl RiderSet {
    /// Creates a rider set whose first rider is the car owner.
    pub fn new<I, S>(riders: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let riders = Self::collect_unique(riders)?;
        let owner = riders[0].clone();
        Ok(Self { riders, owner })
    }

    /// Creates a rider set with an explicit owner.
    pub fn with_owner<I, S>(riders: I, owner: impl Into<String>) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let riders = Self::collect_unique(riders)?;
        Ok(Self {
            riders,
            owner: owner.into(),
        })
    }

    fn collect_unique<I, S>(riders: I) -> Result<Vec<String>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let riders: Vec<String> = riders.into_iter().map(Into::into).collect();
        if riders.is_empty() {
            return Err(RideshareError::EmptyRiderSet);
        }
        let mut seen = HashSet::with_capacity(riders.len());
        for name in &riders {
            if !seen.insert(name.as_str()) {
                return Err(RideshareError::DuplicateRider { name: name.clone() });
            }
        }
        Ok(riders)
    }

    /// Riders in selection order.
    pub fn riders(&self) -> &[String] {
        &self.riders
    }

    /// The car owner.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Returns `true` if the owner is also part of the selection.
    pub fn owner_is_rider(&self) -> bool {
        self.riders.iter().any(|r| *r == self.owner)
    }

    /// Riders other than the owner, in selection order.
    pub fn passengers(&self) -> impl Iterator<Item = &str> {
        self.riders
            .iter()
            .map(String::as_str)
            .filter(move |r| *r != self.owner)
    }

    /// Number of selected riders.
    pub fn len(&self) -> usize {
        self.riders.len()
    }

    /// Always `false`; construction rejects empty selections.
    pub fn is_empty(&self) -> bool {
        self.riders.is_empty()
    }
}
