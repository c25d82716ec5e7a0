//! Constructive heuristics for building initial VRP solutions.
//!
//! - [`greedy_insertion`]: First-fit insertion in input order, O(n × R × L)

mod greedy;

pub use greedy::greedy_insertion;
