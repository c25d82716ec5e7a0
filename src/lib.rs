//! # u-tabu-routing
//!
//! Capacitated, distance-constrained vehicle routing from a single depot.
//! Builds a first solution by greedy insertion, polishes each route with
//! 2-opt, then runs a tabu search over inter-route relocate and swap moves.
//!
//! ## Modules
//!
//! - [`models`]: Value types (Location, Customer, Vehicle, Route, Solution)
//! - [`constructive`]: Greedy first-fit insertion
//! - [`local_search`]: Intra-route 2-opt
//! - [`tabu`]: Moves, tabu list, and the tabu search loop
//! - [`solver`]: End-to-end pipeline (construction → 2-opt → tabu search)
//! - [`generator`]: Seeded random instances for demos and benchmarks
//!
//! ## Example
//!
//! ```
//! use u_tabu_routing::models::{Customer, Location, Vehicle};
//! use u_tabu_routing::solver::solve;
//! use u_tabu_routing::tabu::TabuConfig;
//!
//! let customers = vec![
//!     Customer::new(1, 1, Location::new(1.0, 0.0)),
//!     Customer::new(2, 1, Location::new(2.0, 0.0)),
//!     Customer::new(3, 1, Location::new(0.0, 1.0)),
//!     Customer::new(4, 1, Location::new(0.0, 2.0)),
//! ];
//! let vehicles = vec![Vehicle::new(1, 2, 100.0), Vehicle::new(2, 2, 100.0)];
//!
//! let report = solve(&customers, &vehicles, &TabuConfig::default()).unwrap();
//! assert!(report.best.is_feasible());
//! assert!(report.best.total_distance() <= report.initial.total_distance() + 1e-10);
//! ```

pub mod constructive;
pub mod error;
pub mod generator;
pub mod local_search;
pub mod models;
pub mod solver;
pub mod tabu;

pub use error::VrpError;
