//! Error type for routing operations.

use thiserror::Error;

use crate::tabu::Move;

/// Errors raised at the boundaries of the routing engine.
///
/// Infeasibility is not an error: it is reported through
/// [`Route::is_feasible`](crate::models::Route::is_feasible) and
/// [`Solution::is_feasible`](crate::models::Solution::is_feasible).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VrpError {
    /// Construction was asked to route customers without any vehicle.
    #[error("vehicle fleet is empty")]
    EmptyVehicleFleet,
    /// A move refers to a route, customer, or position the solution does not have.
    #[error("move {mv:?} does not fit the solution")]
    InvalidMoveIndex {
        /// The rejected move.
        mv: Move,
    },
}
