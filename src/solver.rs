//! End-to-end pipeline: greedy construction, 2-opt, tabu search.

use serde::Serialize;
use tracing::{info, instrument};

use crate::constructive::greedy_insertion;
use crate::error::VrpError;
use crate::local_search::two_opt_solution;
use crate::models::{Customer, Solution, Vehicle};
use crate::tabu::{TabuConfig, TabuSearch};

/// The solution produced by each stage of [`solve`].
#[derive(Debug, Clone, Serialize)]
pub struct SolveReport {
    /// Output of greedy insertion.
    pub initial: Solution,
    /// After one 2-opt pass over every route.
    pub two_opt: Solution,
    /// Best solution found by the tabu search.
    pub best: Solution,
}

impl SolveReport {
    /// Distance saved between the initial and the best solution.
    pub fn improvement(&self) -> f64 {
        self.initial.total_distance() - self.best.total_distance()
    }
}

/// Routes `customers` with `vehicles`.
///
/// Runs greedy insertion, then 2-opt on each route, then the tabu search
/// configured by `config`. Stage totals are logged at `info` level.
///
/// # Errors
///
/// Returns [`VrpError::EmptyVehicleFleet`] if `vehicles` is empty.
#[instrument(
    skip_all,
    fields(customers = customers.len(), vehicles = vehicles.len())
)]
pub fn solve(
    customers: &[Customer],
    vehicles: &[Vehicle],
    config: &TabuConfig,
) -> Result<SolveReport, VrpError> {
    let initial = greedy_insertion(customers, vehicles)?;
    info!(
        total_distance = initial.total_distance(),
        routes = initial.num_routes(),
        feasible = initial.is_feasible(),
        "initial solution"
    );

    let two_opt = two_opt_solution(&initial);
    info!(total_distance = two_opt.total_distance(), "after 2-opt");

    let best = TabuSearch::new(config.clone()).search(&two_opt);
    info!(
        total_distance = best.total_distance(),
        feasible = best.is_feasible(),
        "after tabu search"
    );

    Ok(SolveReport {
        initial,
        two_opt,
        best,
    })
}
