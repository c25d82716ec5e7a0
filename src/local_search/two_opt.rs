//! Intra-route 2-opt improvement.
//!
//! # Algorithm
//!
//! For every pair of positions `0 <= i < j < n`, reverse the customers at
//! `i..=j` and keep the feasible candidate with the shortest closed tour.
//! Pairs are scanned row by row (`i`, then `j`); the first candidate reaching
//! the minimum wins. The candidate replaces the route only if it is shorter
//! by more than [`IMPROVEMENT_EPS`]; a tie keeps the original visit order.
//! Reversing a segment reorders the floating-point additions, so a
//! mathematically equal tour can come out one ulp shorter; the tolerance
//! keeps such reversals out.
//!
//! This is a single best-improvement pass, not an iterate-to-convergence loop.
//!
//! # Complexity
//!
//! O(n²) candidates, each rebuilt in O(n): O(n³) per route.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use crate::models::{Route, Solution};

/// Minimum distance gain for a reversal to count as an improvement.
pub const IMPROVEMENT_EPS: f64 = 1e-10;

/// Returns the best feasible 2-opt reversal of `route`, or `route` itself.
///
/// The result is never longer than the input, and equals it unless a
/// feasible reversal is shorter by more than [`IMPROVEMENT_EPS`].
///
/// # Examples
///
/// ```
/// use u_tabu_routing::models::{Customer, Location, Route, Vehicle};
/// use u_tabu_routing::local_search::two_opt_improve;
///
/// // Crossing tour: (1,1) → (1,-1) → (2,0)
/// let route = Route::new(
///     Vehicle::new(0, 100, 100.0),
///     vec![
///         Customer::new(1, 1, Location::new(1.0, 1.0)),
///         Customer::new(2, 1, Location::new(1.0, -1.0)),
///         Customer::new(3, 1, Location::new(2.0, 0.0)),
///     ],
/// );
/// let improved = two_opt_improve(&route);
/// assert!(improved.distance() < route.distance());
/// assert_eq!(improved.customer_ids(), vec![1, 3, 2]);
/// ```
pub fn two_opt_improve(route: &Route) -> Route {
    let n = route.len();
    let mut best: Option<Route> = None;

    for i in 0..n.saturating_sub(1) {
        for j in i + 1..n {
            let candidate = route.two_opt_swap(i, j);
            if !candidate.is_feasible() {
                continue;
            }
            let is_better = best
                .as_ref()
                .is_none_or(|b| candidate.distance() < b.distance() - IMPROVEMENT_EPS);
            if is_better {
                best = Some(candidate);
            }
        }
    }

    match best {
        Some(candidate) if candidate.distance() < route.distance() - IMPROVEMENT_EPS => candidate,
        _ => route.clone(),
    }
}

/// Applies [`two_opt_improve`] once to every route of `solution`.
pub fn two_opt_solution(solution: &Solution) -> Solution {
    Solution::new(solution.routes().iter().map(two_opt_improve).collect())
}
