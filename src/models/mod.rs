//! Domain model types for the capacitated, distance-constrained VRP.
//!
//! All types are immutable values: a route or solution is never edited in
//! place, every transformation produces a fresh value with its derived
//! load and distance recomputed on construction.

mod customer;
mod location;
mod route;
mod solution;
mod vehicle;

pub use customer::Customer;
pub use location::Location;
pub use route::{Route, RouteViolation, DEPOT};
pub use solution::{Solution, Violation};
pub use vehicle::Vehicle;
