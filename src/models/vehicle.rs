//! Vehicle type with capacity and range limits.

use serde::{Deserialize, Serialize};

/// A vehicle that serves one route.
///
/// # Examples
///
/// ```
/// use u_tabu_routing::models::Vehicle;
///
/// let v = Vehicle::new(0, 200, 150.0);
/// assert_eq!(v.id(), 0);
/// assert_eq!(v.capacity(), 200);
/// assert_eq!(v.max_distance(), 150.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    id: usize,
    capacity: u32,
    max_distance: f64,
}

impl Vehicle {
    /// Creates a vehicle with the given ID, load capacity, and maximum
    /// closed-tour distance.
    pub fn new(id: usize, capacity: u32, max_distance: f64) -> Self {
        Self {
            id,
            capacity,
            max_distance,
        }
    }

    /// Vehicle ID.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Maximum load capacity.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Maximum distance of a depot-to-depot tour.
    pub fn max_distance(&self) -> f64 {
        self.max_distance
    }
}
