//! Solution and violation types.

use serde::Serialize;

use super::{Route, RouteViolation};

/// A constraint violation located in a solution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Violation {
    /// Index of the offending route in the solution.
    pub route_index: usize,
    /// What the route breaks.
    pub kind: RouteViolation,
}

/// An ordered collection of routes.
///
/// The total distance is summed in route order when the solution is built.
///
/// # Examples
///
/// ```
/// use u_tabu_routing::models::{Customer, Location, Route, Solution, Vehicle};
///
/// let vehicle = Vehicle::new(0, 10, 100.0);
/// let sol = Solution::new(vec![
///     Route::new(vehicle, vec![Customer::new(1, 1, Location::new(1.0, 0.0))]),
///     Route::new(vehicle, vec![Customer::new(2, 1, Location::new(0.0, 3.0))]),
/// ]);
/// assert_eq!(sol.num_routes(), 2);
/// assert!((sol.total_distance() - 8.0).abs() < 1e-10);
/// assert!(sol.is_feasible());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Solution {
    routes: Vec<Route>,
    total_distance: f64,
}

impl Solution {
    /// Creates a solution from its routes.
    pub fn new(routes: Vec<Route>) -> Self {
        let total_distance = routes.iter().map(Route::distance).sum();
        Self {
            routes,
            total_distance,
        }
    }

    /// Returns the routes in this solution.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Returns the number of routes.
    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    /// Total distance across all routes.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Returns `true` if every route is feasible.
    pub fn is_feasible(&self) -> bool {
        self.routes.iter().all(Route::is_feasible)
    }

    /// Total number of customers served (across all routes).
    pub fn num_served(&self) -> usize {
        self.routes.iter().map(Route::len).sum()
    }

    /// All customer IDs, route by route in visit order.
    pub fn customer_ids(&self) -> Vec<usize> {
        self.routes
            .iter()
            .flat_map(|r| r.customers().iter().map(|c| c.id()))
            .collect()
    }

    /// Lists every violated constraint, tagged with its route index.
    pub fn violations(&self) -> Vec<Violation> {
        self.routes
            .iter()
            .enumerate()
            .flat_map(|(route_index, route)| {
                route
                    .violations()
                    .into_iter()
                    .map(move |kind| Violation { route_index, kind })
            })
            .collect()
    }
}

impl Default for Solution {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
