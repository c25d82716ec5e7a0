//! Local search operators for improving routes.
//!
//! - [`two_opt_improve`]: Best feasible segment reversal within one route
//! - [`two_opt_solution`]: The same, applied once to every route of a solution

mod two_opt;

pub use two_opt::{two_opt_improve, two_opt_solution, IMPROVEMENT_EPS};
