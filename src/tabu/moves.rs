//! Inter-route moves explored by the tabu search.

use serde::{Deserialize, Serialize};

use crate::error::VrpError;
use crate::models::{Route, Solution};

/// A neighborhood move between two distinct routes.
///
/// Moves are plain values: two moves are the same move when all their
/// indices match, which is what the tabu list compares.
///
/// # Examples
///
/// ```
/// use u_tabu_routing::models::{Customer, Location, Route, Solution, Vehicle};
/// use u_tabu_routing::tabu::Move;
///
/// let v = Vehicle::new(0, 10, 100.0);
/// let sol = Solution::new(vec![
///     Route::new(v, vec![
///         Customer::new(1, 1, Location::new(1.0, 0.0)),
///         Customer::new(2, 1, Location::new(2.0, 0.0)),
///     ]),
///     Route::new(v, vec![Customer::new(3, 1, Location::new(0.0, 1.0))]),
/// ]);
///
/// let mv = Move::Relocate { from_route: 0, customer_index: 1, to_route: 1, position: 0 };
/// let next = mv.apply(&sol).unwrap();
/// assert_eq!(next.routes()[0].customer_ids(), vec![1]);
/// assert_eq!(next.routes()[1].customer_ids(), vec![2, 3]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Take the customer at `customer_index` out of `from_route` and insert
    /// it before `position` in `to_route`.
    Relocate {
        /// Source route index.
        from_route: usize,
        /// Position of the moved customer in the source route.
        customer_index: usize,
        /// Target route index.
        to_route: usize,
        /// Insertion position in the target route (`0..=len`).
        position: usize,
    },
    /// Exchange the customer at `index_a` in `route_a` with the customer at
    /// `index_b` in `route_b`.
    Swap {
        /// First route index.
        route_a: usize,
        /// Customer position in the first route.
        index_a: usize,
        /// Second route index.
        route_b: usize,
        /// Customer position in the second route.
        index_b: usize,
    },
}

impl Move {
    /// The two route indices this move touches, in `(first, second)` order.
    pub fn routes(&self) -> (usize, usize) {
        match *self {
            Move::Relocate {
                from_route,
                to_route,
                ..
            } => (from_route, to_route),
            Move::Swap {
                route_a, route_b, ..
            } => (route_a, route_b),
        }
    }

    /// Returns the solution obtained by applying this move.
    ///
    /// # Errors
    ///
    /// Returns [`VrpError::InvalidMoveIndex`] if a route index is out of range,
    /// both route indices are equal, or a customer or insertion index falls
    /// outside its route.
    pub fn apply(&self, solution: &Solution) -> Result<Solution, VrpError> {
        let (first, second) = self.touched_routes(solution.routes())?;
        let mut routes = solution.routes().to_vec();
        let (a, b) = self.routes();
        routes[a] = first;
        routes[b] = second;
        Ok(Solution::new(routes))
    }

    /// Rebuilds the two routes this move touches, after checking every index.
    fn touched_routes(&self, routes: &[Route]) -> Result<(Route, Route), VrpError> {
        let invalid = VrpError::InvalidMoveIndex { mv: *self };
        let (a, b) = self.routes();
        if a == b || a >= routes.len() || b >= routes.len() {
            return Err(invalid);
        }

        match *self {
            Move::Relocate {
                customer_index,
                position,
                ..
            } => {
                if customer_index >= routes[a].len() || position > routes[b].len() {
                    return Err(invalid);
                }
                Ok(relocate(&routes[a], customer_index, &routes[b], position))
            }
            Move::Swap {
                index_a, index_b, ..
            } => {
                if index_a >= routes[a].len() || index_b >= routes[b].len() {
                    return Err(invalid);
                }
                Ok(swap(&routes[a], index_a, &routes[b], index_b))
            }
        }
    }
}

/// Relocates `from[customer_index]` to `to[position]`. Indices must be in range.
fn relocate(from: &Route, customer_index: usize, to: &Route, position: usize) -> (Route, Route) {
    let customer = from.customers()[customer_index];
    (from.removed(customer_index), to.inserted(position, customer))
}

/// Exchanges `a[index_a]` and `b[index_b]`. Indices must be in range.
pub(crate) fn swap(a: &Route, index_a: usize, b: &Route, index_b: usize) -> (Route, Route) {
    let ca = a.customers()[index_a];
    let cb = b.customers()[index_b];
    (a.replaced(index_a, cb), b.replaced(index_b, ca))
}
