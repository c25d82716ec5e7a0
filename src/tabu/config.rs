//! Tabu search configuration.

use serde::{Deserialize, Serialize};

/// Configuration parameters for [`TabuSearch`](super::TabuSearch).
///
/// # Examples
///
/// ```
/// use u_tabu_routing::tabu::TabuConfig;
///
/// let config = TabuConfig::default()
///     .with_max_iterations(500)
///     .with_tenure(15);
/// assert_eq!(config.max_iterations, 500);
/// assert_eq!(config.tenure, 15);
/// assert!(!config.reoptimize_routes);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabuConfig {
    /// Number of iterations to run. There is no early stop.
    pub max_iterations: usize,
    /// Maximum number of recent moves kept tabu.
    pub tenure: usize,
    /// Reapply 2-opt to every route of each accepted neighbor.
    pub reoptimize_routes: bool,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            tenure: 10,
            reoptimize_routes: false,
        }
    }
}

impl TabuConfig {
    /// Sets the number of iterations.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the tabu tenure.
    pub fn with_tenure(mut self, tenure: usize) -> Self {
        self.tenure = tenure;
        self
    }

    /// Enables or disables 2-opt after each accepted move.
    pub fn with_reoptimize_routes(mut self, enabled: bool) -> Self {
        self.reoptimize_routes = enabled;
        self
    }
}
