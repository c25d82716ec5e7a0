//! Tabu search metaheuristic.
//!
//! - [`Move`]: Inter-route relocate / swap moves
//! - [`TabuList`]: Bounded recency list of forbidden moves
//! - [`TabuConfig`]: Iteration budget and tenure
//! - [`TabuSearch`]: The search loop

mod config;
mod moves;
mod search;
mod tabu_list;

pub use config::TabuConfig;
pub use moves::Move;
pub use search::{TabuOutcome, TabuSearch};
pub use tabu_list::TabuList;
