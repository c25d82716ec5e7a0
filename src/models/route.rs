//! Route type and its value-producing primitives.

use serde::Serialize;

use super::{Customer, Location, Vehicle};

/// The depot every route starts and ends at.
pub const DEPOT: Location = Location::ORIGIN;

/// Why a route is infeasible.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum RouteViolation {
    /// Total demand exceeds the vehicle capacity.
    CapacityExceeded {
        /// Load carried by the route.
        load: u64,
        /// Vehicle capacity.
        capacity: u32,
    },
    /// Closed-tour distance exceeds the vehicle range.
    MaxDistanceExceeded {
        /// Actual distance.
        distance: f64,
        /// Maximum allowed distance.
        max_distance: f64,
    },
}

/// An ordered sequence of customers served by one vehicle.
///
/// The tour runs depot → customers in order → depot. Load and distance are
/// computed when the route is built; every primitive returns a new route and
/// leaves `self` untouched.
///
/// # Examples
///
/// ```
/// use u_tabu_routing::models::{Customer, Location, Route, Vehicle};
///
/// let route = Route::new(
///     Vehicle::new(0, 10, 100.0),
///     vec![
///         Customer::new(1, 4, Location::new(3.0, 0.0)),
///         Customer::new(2, 5, Location::new(3.0, 4.0)),
///     ],
/// );
/// assert_eq!(route.load(), 9);
/// assert!((route.distance() - 12.0).abs() < 1e-10); // 3 + 4 + 5
/// assert!(route.is_feasible());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    vehicle: Vehicle,
    customers: Vec<Customer>,
    load: u64,
    distance: f64,
}

impl Route {
    /// Creates a route visiting `customers` in the given order.
    pub fn new(vehicle: Vehicle, customers: Vec<Customer>) -> Self {
        let load = customers.iter().map(|c| u64::from(c.demand())).sum();
        let distance = tour_distance(&customers);
        Self {
            vehicle,
            customers,
            load,
            distance,
        }
    }

    /// Creates a route with no customers.
    pub fn empty(vehicle: Vehicle) -> Self {
        Self::new(vehicle, Vec::new())
    }

    /// The vehicle serving this route.
    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    /// Customers in visit order.
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// Customer IDs in visit order.
    pub fn customer_ids(&self) -> Vec<usize> {
        self.customers.iter().map(Customer::id).collect()
    }

    /// Number of customers (excluding the depot).
    pub fn len(&self) -> usize {
        self.customers.len()
    }

    /// Returns `true` if the route visits no customer.
    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    /// Sum of customer demands, widened so that no set of `u32` demands
    /// can overflow it.
    pub fn load(&self) -> u64 {
        self.load
    }

    /// Length of the closed tour through the depot.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Returns `true` if both load and distance are within the vehicle limits.
    pub fn is_feasible(&self) -> bool {
        self.load <= u64::from(self.vehicle.capacity())
            && self.distance <= self.vehicle.max_distance()
    }

    /// Lists the constraints this route breaks. Empty iff the route is feasible.
    pub fn violations(&self) -> Vec<RouteViolation> {
        let mut violations = Vec::new();
        if self.load > u64::from(self.vehicle.capacity()) {
            violations.push(RouteViolation::CapacityExceeded {
                load: self.load,
                capacity: self.vehicle.capacity(),
            });
        }
        if self.distance > self.vehicle.max_distance() {
            violations.push(RouteViolation::MaxDistanceExceeded {
                distance: self.distance,
                max_distance: self.vehicle.max_distance(),
            });
        }
        violations
    }

    /// Reverses the customers at positions `i..=j`.
    ///
    /// Applying the same swap twice restores the original order.
    ///
    /// # Panics
    ///
    /// Panics if `j` is out of bounds or `i > j`. Callers must pass `i < j`;
    /// debug builds also reject `i == j`, release builds return an identical
    /// route for it.
    pub fn two_opt_swap(&self, i: usize, j: usize) -> Route {
        debug_assert!(i < j, "two_opt_swap requires i < j");
        let mut customers = self.customers.clone();
        customers[i..=j].reverse();
        Route::new(self.vehicle, customers)
    }

    /// Returns a copy with `customer` visited last.
    pub fn appended(&self, customer: Customer) -> Route {
        let mut customers = Vec::with_capacity(self.customers.len() + 1);
        customers.extend_from_slice(&self.customers);
        customers.push(customer);
        Route::new(self.vehicle, customers)
    }

    /// Returns a copy without the customer at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn removed(&self, index: usize) -> Route {
        let mut customers = self.customers.clone();
        customers.remove(index);
        Route::new(self.vehicle, customers)
    }

    /// Returns a copy with `customer` inserted before position `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position > len()`.
    pub fn inserted(&self, position: usize, customer: Customer) -> Route {
        let mut customers = Vec::with_capacity(self.customers.len() + 1);
        customers.extend_from_slice(&self.customers[..position]);
        customers.push(customer);
        customers.extend_from_slice(&self.customers[position..]);
        Route::new(self.vehicle, customers)
    }

    /// Returns a copy with the customer at `index` replaced by `customer`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn replaced(&self, index: usize, customer: Customer) -> Route {
        let mut customers = self.customers.clone();
        customers[index] = customer;
        Route::new(self.vehicle, customers)
    }
}

/// Length of `depot → customers[0] → ... → customers[n-1] → depot`.
fn tour_distance(customers: &[Customer]) -> f64 {
    let mut prev = DEPOT;
    let mut dist = 0.0;
    for c in customers {
        dist += prev.distance(&c.location());
        prev = c.location();
    }
    dist + prev.distance(&DEPOT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer(id: usize, demand: u32, x: f64, y: f64) -> Customer {
        Customer::new(id, demand, Location::new(x, y))
    }

    fn square_route() -> Route {
        Route::new(
            Vehicle::new(0, 100, 1000.0),
            vec![
                customer(1, 10, 0.0, 1.0),
                customer(2, 20, 1.0, 1.0),
                customer(3, 30, 1.0, 0.0),
                customer(4, 40, 2.0, 0.0),
            ],
        )
    }

    #[test]
    fn test_route_empty() {
        let r = Route::empty(Vehicle::new(0, 10, 10.0));
        assert!(r.is_empty());
        assert_eq!(r.len(), 0);
        assert_eq!(r.load(), 0);
        assert_eq!(r.distance(), 0.0);
        assert!(r.is_feasible());
    }

    #[test]
    fn test_route_single_round_trip() {
        let r = Route::new(Vehicle::new(0, 10, 10.0), vec![customer(1, 3, 3.0, 4.0)]);
        assert!((r.distance() - 10.0).abs() < 1e-10);
        assert_eq!(r.load(), 3);
    }

    #[test]
    fn test_route_derived_fields() {
        let r = square_route();
        assert_eq!(r.load(), 100);
        // 1 + 1 + 1 + 1 + 2
        assert!((r.distance() - 6.0).abs() < 1e-10);
        assert_eq!(r.customer_ids(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_feasibility_capacity() {
        let customers = vec![customer(1, 6, 1.0, 0.0), customer(2, 5, 2.0, 0.0)];
        let r = Route::new(Vehicle::new(0, 10, 100.0), customers.clone());
        assert!(!r.is_feasible());
        assert_eq!(
            r.violations(),
            vec![RouteViolation::CapacityExceeded {
                load: 11,
                capacity: 10
            }]
        );

        let r = Route::new(Vehicle::new(0, 11, 100.0), customers);
        assert!(r.is_feasible());
        assert!(r.violations().is_empty());
    }

    #[test]
    fn test_feasibility_distance() {
        let r = Route::new(Vehicle::new(0, 10, 3.9), vec![customer(1, 1, 2.0, 0.0)]);
        assert!(!r.is_feasible());
        assert!(matches!(
            r.violations().as_slice(),
            [RouteViolation::MaxDistanceExceeded { .. }]
        ));

        // Limit is inclusive.
        let r = Route::new(Vehicle::new(0, 10, 4.0), vec![customer(1, 1, 2.0, 0.0)]);
        assert!(r.is_feasible());
    }

    #[test]
    fn test_load_does_not_overflow_u32() {
        let r = Route::new(
            Vehicle::new(0, 10, 100.0),
            vec![customer(1, u32::MAX, 1.0, 0.0), customer(2, 1, 2.0, 0.0)],
        );
        assert_eq!(r.load(), u64::from(u32::MAX) + 1);
        assert!(!r.is_feasible());
        assert_eq!(
            r.violations(),
            vec![RouteViolation::CapacityExceeded {
                load: 4_294_967_296,
                capacity: 10
            }]
        );

        // Still over a full-width capacity.
        let r = Route::new(
            Vehicle::new(0, u32::MAX, 100.0),
            vec![customer(1, u32::MAX, 1.0, 0.0), customer(2, 1, 2.0, 0.0)],
        );
        assert!(!r.is_feasible());
        assert!(r.removed(1).is_feasible());
    }

    #[test]
    #[should_panic]
    fn test_two_opt_swap_rejects_reversed_bounds() {
        square_route().two_opt_swap(3, 1);
    }

    #[test]
    fn test_two_opt_swap_reverses_segment() {
        let r = square_route();
        let swapped = r.two_opt_swap(1, 3);
        assert_eq!(swapped.customer_ids(), vec![1, 4, 3, 2]);
        assert_eq!(swapped.vehicle(), r.vehicle());
        assert_eq!(swapped.load(), r.load());
        // Original is untouched.
        assert_eq!(r.customer_ids(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_two_opt_swap_involution() {
        let r = square_route();
        assert_eq!(r.two_opt_swap(0, 2).two_opt_swap(0, 2), r);
        assert_eq!(r.two_opt_swap(1, 2).two_opt_swap(1, 2), r);
    }

    #[test]
    fn test_appended_removed_inserted_replaced() {
        let r = square_route();

        let appended = r.appended(customer(5, 1, 3.0, 0.0));
        assert_eq!(appended.customer_ids(), vec![1, 2, 3, 4, 5]);
        assert_eq!(appended.load(), 101);

        let removed = r.removed(1);
        assert_eq!(removed.customer_ids(), vec![1, 3, 4]);
        assert_eq!(removed.load(), 80);

        let inserted = r.inserted(0, customer(9, 1, 5.0, 5.0));
        assert_eq!(inserted.customer_ids(), vec![9, 1, 2, 3, 4]);
        let inserted = r.inserted(4, customer(9, 1, 5.0, 5.0));
        assert_eq!(inserted.customer_ids(), vec![1, 2, 3, 4, 9]);

        let replaced = r.replaced(3, customer(8, 1, 0.0, 2.0));
        assert_eq!(replaced.customer_ids(), vec![1, 2, 3, 8]);
        assert_eq!(replaced.load(), 61);
    }
}
