//! Name-indexed location registry.

use std::collections::HashMap;

use crate::error::{RideshareError, Result};
use crate::models::Location;

/// Registry of named locations, kept in insertion order.
///
/// Names are unique; coordinates must be finite.
///
/// # Examples
///
/// ```
/// use u_rideshare::models::Location;
/// use u_rideshare::distance::LocationBook;
///
/// let book = LocationBook::from_locations(vec![
///     Location::new("venue", 0.0, 0.0),
///     Location::new("A", 3.0, 4.0),
/// ])
/// .unwrap();
/// assert_eq!(book.len(), 2);
/// assert!((book.distance("venue", "A").unwrap() - 5.0).abs() < 1e-10);
/// assert!(book.get("B").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct LocationBook {
    locations: Vec<Location>,
    index: HashMap<String, usize>,
}

impl LocationBook {
    /// Creates an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a book from a list of locations.
    pub fn from_locations<I>(locations: I) -> Result<Self>
    where
        I: IntoIterator<Item = Location>,
    {
        let mut book = Self::new();
        for loc in locations {
            book.insert(loc)?;
        }
        Ok(book)
    }

    /// Registers a location.
    ///
    /// Fails on a repeated name or a non-finite coordinate.
    pub fn insert(&mut self, location: Location) -> Result<()> {
        if !location.is_finite() {
            return Err(RideshareError::NonFiniteCoordinate {
                name: location.name().to_owned(),
            });
        }
        if self.index.contains_key(location.name()) {
            return Err(RideshareError::DuplicateLocation {
                name: location.name().to_owned(),
            });
        }
        self.index
            .insert(location.name().to_owned(), self.locations.len());
        self.locations.push(location);
        Ok(())
    }

    /// Looks up a location by name.
    pub fn get(&self, name: &str) -> Result<&Location> {
        self.index
            .get(name)
            .map(|&i| &self.locations[i])
            .ok_or_else(|| RideshareError::UnknownLocation {
                name: name.to_owned(),
            })
    }

    /// Returns `true` if `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Euclidean distance between two named locations.
    pub fn distance(&self, from: &str, to: &str) -> Result<f64> {
        Ok(self.get(from)?.distance_to(self.get(to)?))
    }

    /// Locations in insertion order.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Number of registered locations.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Returns `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}
