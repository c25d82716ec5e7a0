//! Seeded random instances for demos, benchmarks, and tests.
//!
//! The optimization engine itself never draws random numbers; this module
//! only fabricates inputs for it.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::models::{Customer, Location, Vehicle};

/// A generated problem instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instance {
    /// Customers with ids `1..=n`.
    pub customers: Vec<Customer>,
    /// Homogeneous fleet with ids `1..=m`.
    pub vehicles: Vec<Vehicle>,
}

/// Builder for random instances around the depot.
///
/// Coordinates are uniform in `[-coordinate_range, coordinate_range]`,
/// demands uniform in `1..=max_demand`.
///
/// # Examples
///
/// ```
/// use u_tabu_routing::generator::InstanceGenerator;
///
/// let instance = InstanceGenerator::default()
///     .with_num_customers(20)
///     .with_num_vehicles(4)
///     .with_seed(7)
///     .generate();
/// assert_eq!(instance.customers.len(), 20);
/// assert_eq!(instance.vehicles.len(), 4);
/// assert_eq!(instance, InstanceGenerator::default()
///     .with_num_customers(20)
///     .with_num_vehicles(4)
///     .with_seed(7)
///     .generate());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstanceGenerator {
    /// Number of customers.
    pub num_customers: usize,
    /// Number of vehicles.
    pub num_vehicles: usize,
    /// Largest demand drawn.
    pub max_demand: u32,
    /// Half-width of the square customers are drawn from.
    pub coordinate_range: f64,
    /// Capacity of every vehicle.
    pub capacity: u32,
    /// Maximum tour distance of every vehicle.
    pub max_distance: f64,
    /// Random seed.
    pub seed: u64,
}

impl Default for InstanceGenerator {
    fn default() -> Self {
        Self {
            num_customers: 10,
            num_vehicles: 3,
            max_demand: 10,
            coordinate_range: 50.0,
            capacity: 50,
            max_distance: 500.0,
            seed: 42,
        }
    }
}

impl InstanceGenerator {
    /// Sets the number of customers.
    pub fn with_num_customers(mut self, n: usize) -> Self {
        self.num_customers = n;
        self
    }

    /// Sets the number of vehicles.
    pub fn with_num_vehicles(mut self, n: usize) -> Self {
        self.num_vehicles = n;
        self
    }

    /// Sets the largest demand drawn (at least 1).
    pub fn with_max_demand(mut self, max: u32) -> Self {
        self.max_demand = max;
        self
    }

    /// Sets the half-width of the coordinate square.
    pub fn with_coordinate_range(mut self, range: f64) -> Self {
        self.coordinate_range = range;
        self
    }

    /// Sets the vehicle capacity.
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the vehicle range.
    pub fn with_max_distance(mut self, max: f64) -> Self {
        self.max_distance = max;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Draws an instance. The same settings always yield the same instance.
    pub fn generate(&self) -> Instance {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let range = self.coordinate_range.abs();
        let max_demand = self.max_demand.max(1);

        let customers = (1..=self.num_customers)
            .map(|id| {
                let x = rng.random_range(-range..=range);
                let y = rng.random_range(-range..=range);
                let demand = rng.random_range(1..=max_demand);
                Customer::new(id, demand, Location::new(x, y))
            })
            .collect();

        let vehicles = (1..=self.num_vehicles)
            .map(|id| Vehicle::new(id, self.capacity, self.max_distance))
            .collect();

        Instance {
            customers,
            vehicles,
        }
    }
}
