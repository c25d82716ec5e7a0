//! Tabu search over inter-route relocate and swap moves.
//!
//! # Algorithm
//!
//! Each iteration enumerates every ordered pair of distinct routes `(i, j)`.
//! For every customer of route `i` it generates the relocations into every
//! position of route `j`, then the swaps with every customer of route `j`.
//! Infeasible neighbors and moves held in the tabu list are discarded; the
//! admissible neighbor with the smallest total distance (first generated on
//! ties) becomes the current solution even when it is worse, and its move
//! becomes tabu. The best solution seen is kept separately.
//!
//! The search always runs for exactly `max_iterations` iterations. An
//! iteration with no admissible neighbor changes nothing.
//!
//! # Complexity
//!
//! O(R² × L² × (L + R)) per iteration where R = routes and L = route length.
//! Only the two touched routes are rebuilt per neighbor; the selected
//! neighbor is the only solution materialized.
//!
//! # Reference
//!
//! Glover, F. (1989). "Tabu Search, Part I", *ORSA Journal on Computing*
//! 1(3), 190-206.

use tracing::{debug, instrument, trace, warn};

use crate::local_search::two_opt_solution;
use crate::models::{Route, Solution};

use super::moves::swap;
use super::{Move, TabuConfig, TabuList};

/// Result of a tabu search run.
#[derive(Debug, Clone)]
pub struct TabuOutcome {
    /// Best solution seen (the initial one if nothing beat it).
    pub best: Solution,
    /// Solution the search stood on after the last iteration.
    pub current: Solution,
    /// Best total distance after each iteration.
    pub history: Vec<f64>,
    /// Moves accepted, in order. One per non-idle iteration.
    pub moves: Vec<Move>,
    /// Iterations that found no admissible neighbor.
    pub idle_iterations: usize,
    /// Tabu list as it stood after the last iteration.
    pub tabu: TabuList,
}

/// Tabu search driver.
///
/// # Examples
///
/// ```
/// use u_tabu_routing::models::{Customer, Location, Route, Solution, Vehicle};
/// use u_tabu_routing::tabu::{TabuConfig, TabuSearch};
///
/// let v = Vehicle::new(0, 2, 100.0);
/// let c = |id, x, y| Customer::new(id, 1, Location::new(x, y));
/// // Each vehicle visits one near and one far customer.
/// let initial = Solution::new(vec![
///     Route::new(v, vec![c(1, 10.0, 0.0), c(2, 0.0, 10.0)]),
///     Route::new(v, vec![c(3, 10.0, 1.0), c(4, 0.0, 11.0)]),
/// ]);
///
/// let search = TabuSearch::new(TabuConfig::default().with_max_iterations(10));
/// let best = search.search(&initial);
/// assert!(best.total_distance() < initial.total_distance());
/// assert!(best.is_feasible());
/// ```
#[derive(Debug, Clone, Default)]
pub struct TabuSearch {
    config: TabuConfig,
}

impl TabuSearch {
    /// Creates a search with the given configuration.
    pub fn new(config: TabuConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &TabuConfig {
        &self.config
    }

    /// Runs the search from `initial` and returns the best solution found.
    pub fn search(&self, initial: &Solution) -> Solution {
        self.run(initial).best
    }

    /// Runs the search from `initial`, returning the full outcome.
    #[instrument(
        level = "debug",
        skip_all,
        fields(
            max_iterations = self.config.max_iterations,
            tenure = self.config.tenure,
            routes = initial.num_routes(),
        )
    )]
    pub fn run(&self, initial: &Solution) -> TabuOutcome {
        let mut current = initial.clone();
        let mut best = initial.clone();
        let mut tabu = TabuList::new(self.config.tenure);
        let mut history = Vec::with_capacity(self.config.max_iterations);
        let mut moves = Vec::new();
        let mut idle_iterations = 0;

        for iteration in 0..self.config.max_iterations {
            match best_admissible(&current, &tabu) {
                Some((mv, neighbor)) => {
                    let neighbor = if self.config.reoptimize_routes {
                        two_opt_solution(&neighbor)
                    } else {
                        neighbor
                    };

                    tabu.push(mv);
                    moves.push(mv);

                    if neighbor.total_distance() < best.total_distance() {
                        debug!(
                            iteration,
                            total_distance = neighbor.total_distance(),
                            "new best solution"
                        );
                        best = neighbor.clone();
                    }
                    trace!(
                        iteration,
                        ?mv,
                        current = neighbor.total_distance(),
                        best = best.total_distance(),
                        "accepted move"
                    );
                    current = neighbor;
                }
                None => {
                    idle_iterations += 1;
                    trace!(iteration, "no admissible neighbor");
                }
            }
            history.push(best.total_distance());
        }

        TabuOutcome {
            best,
            current,
            history,
            moves,
            idle_iterations,
            tabu,
        }
    }
}

/// Finds the admissible neighbor of `current` with the smallest total distance.
fn best_admissible(current: &Solution, tabu: &TabuList) -> Option<(Move, Solution)> {
    let routes = current.routes();
    let infeasible: Vec<bool> = routes.iter().map(|r| !r.is_feasible()).collect();
    let infeasible_count = infeasible.iter().filter(|&&bad| bad).count();

    let mut best: Option<(Move, f64)> = None;
    let mut consider = |mv: Move, i: usize, a: &Route, j: usize, b: &Route| {
        if !a.is_feasible() || !b.is_feasible() {
            return;
        }
        let total = total_with(routes, i, a, j, b);
        if best.is_none_or(|(_, t)| total < t) {
            best = Some((mv, total));
        }
    };

    for i in 0..routes.len() {
        for j in 0..routes.len() {
            if i == j {
                continue;
            }
            // A route outside the pair that is already infeasible stays so.
            let untouched_infeasible =
                infeasible_count - usize::from(infeasible[i]) - usize::from(infeasible[j]);
            if untouched_infeasible > 0 {
                continue;
            }

            for customer_index in 0..routes[i].len() {
                let customer = routes[i].customers()[customer_index];
                let shrunk = routes[i].removed(customer_index);

                for position in 0..=routes[j].len() {
                    let mv = Move::Relocate {
                        from_route: i,
                        customer_index,
                        to_route: j,
                        position,
                    };
                    if tabu.contains(&mv) {
                        continue;
                    }
                    let grown = routes[j].inserted(position, customer);
                    consider(mv, i, &shrunk, j, &grown);
                }

                for index_b in 0..routes[j].len() {
                    let mv = Move::Swap {
                        route_a: i,
                        index_a: customer_index,
                        route_b: j,
                        index_b,
                    };
                    if tabu.contains(&mv) {
                        continue;
                    }
                    let (a, b) = swap(&routes[i], customer_index, &routes[j], index_b);
                    consider(mv, i, &a, j, &b);
                }
            }
        }
    }

    let (mv, _) = best?;
    materialize(current, mv)
}

/// Applies a selected move. Generated moves always index into `current`, so
/// an error here is a bug: it panics in debug builds and is logged otherwise.
fn materialize(current: &Solution, mv: Move) -> Option<(Move, Solution)> {
    match mv.apply(current) {
        Ok(neighbor) => Some((mv, neighbor)),
        Err(err) => {
            debug_assert!(false, "generated move rejected: {err}");
            warn!(%err, "generated move rejected, iteration left idle");
            None
        }
    }
}

/// Total distance of `routes` with routes `i` and `j` replaced, summed in
/// route order so it matches [`Solution::total_distance`] bit for bit.
fn total_with(routes: &[Route], i: usize, a: &Route, j: usize, b: &Route) -> f64 {
    routes
        .iter()
        .enumerate()
        .map(|(k, r)| {
            if k == i {
                a.distance()
            } else if k == j {
                b.distance()
            } else {
                r.distance()
            }
        })
        .sum()
}
