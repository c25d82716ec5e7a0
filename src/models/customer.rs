//! Customer type.

use serde::{Deserialize, Serialize};

use super::Location;

/// A customer to be served from the depot.
///
/// Identity is the `id`: ids are expected to be unique across an instance.
///
/// # Examples
///
/// ```
/// use u_tabu_routing::models::{Customer, Location};
///
/// let c = Customer::new(1, 10, Location::new(3.0, 4.0));
/// assert_eq!(c.id(), 1);
/// assert_eq!(c.demand(), 10);
/// assert!((c.location().distance(&Location::ORIGIN) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    id: usize,
    demand: u32,
    location: Location,
}

impl Customer {
    /// Creates a new customer.
    pub fn new(id: usize, demand: u32, location: Location) -> Self {
        Self {
            id,
            demand,
            location,
        }
    }

    /// Customer ID.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Units to deliver at this customer.
    pub fn demand(&self) -> u32 {
        self.demand
    }

    /// Where the customer is.
    pub fn location(&self) -> Location {
        self.location
    }

    /// Euclidean distance to another customer.
    pub fn distance_to(&self, other: &Customer) -> f64 {
        self.location.distance(&other.location)
    }
}
