//! Greedy first-fit insertion.
//!
//! Customers are taken in input order. Each one is appended to the first
//! existing route that stays feasible with it; when none does, a new route is
//! opened with the next vehicle of the fleet, cycling back to the first
//! vehicle once every vehicle has been used.
//!
//! A customer that no vehicle can serve alone is still placed on its own
//! route. The resulting solution is then infeasible, which callers observe
//! through [`Solution::is_feasible`].
//!
//! # Complexity
//!
//! O(n × R × L) where n = customers, R = routes opened, L = route length
//! (each trial append rebuilds the route).

use tracing::debug;

use crate::error::VrpError;
use crate::models::{Customer, Route, Solution, Vehicle};

/// Constructs a solution by greedy first-fit insertion.
///
/// # Errors
///
/// Returns [`VrpError::EmptyVehicleFleet`] if `vehicles` is empty.
///
/// # Examples
///
/// ```
/// use u_tabu_routing::models::{Customer, Location, Vehicle};
/// use u_tabu_routing::constructive::greedy_insertion;
///
/// let customers = vec![
///     Customer::new(1, 1, Location::new(1.0, 0.0)),
///     Customer::new(2, 1, Location::new(2.0, 0.0)),
///     Customer::new(3, 1, Location::new(0.0, 1.0)),
/// ];
/// let vehicles = vec![Vehicle::new(1, 2, 100.0), Vehicle::new(2, 2, 100.0)];
///
/// let solution = greedy_insertion(&customers, &vehicles).unwrap();
/// assert_eq!(solution.num_routes(), 2);
/// assert_eq!(solution.routes()[0].customer_ids(), vec![1, 2]);
/// assert_eq!(solution.routes()[1].customer_ids(), vec![3]);
/// ```
pub fn greedy_insertion(customers: &[Customer], vehicles: &[Vehicle]) -> Result<Solution, VrpError> {
    if vehicles.is_empty() {
        return Err(VrpError::EmptyVehicleFleet);
    }

    let mut routes: Vec<Route> = Vec::new();

    for &customer in customers {
        let fit = routes.iter().enumerate().find_map(|(idx, route)| {
            let candidate = route.appended(customer);
            candidate.is_feasible().then_some((idx, candidate))
        });

        match fit {
            Some((idx, candidate)) => routes[idx] = candidate,
            None => {
                let vehicle = vehicles[routes.len() % vehicles.len()];
                let route = Route::new(vehicle, vec![customer]);
                if !route.is_feasible() {
                    debug!(
                        customer = customer.id(),
                        vehicle = vehicle.id(),
                        "customer cannot be served within vehicle limits"
                    );
                }
                routes.push(route);
            }
        }
    }

    Ok(Solution::new(routes))
}
