use std::time::Duration;

use crate::{config::Config, generic::geometric::Geometric};

/// Counts for various things which count, roughly.
pub struct Counters {
    /// A count of every conflict seen during a solve.
    pub total_conflicts: usize,

    /// A count of all decisions made.
    pub total_decisions: usize,

    /// A count of all values derived through propagation.
    pub total_propagations: usize,

    /// The total number of iterations through a solve.
    pub total_iterations: usize,

    /// The number of restarts through a solve.
    pub restarts: usize,

    /// The number of solves begun.
    pub solves: usize,

    /// The time taken during a solve.
    pub time: Duration,

    /// The schedule of restarts.
    pub restart_schedule: Geometric,
}

impl Counters {
    pub fn from_config(config: &Config) -> Self {
        Counters {
            total_conflicts: 0,
            total_decisions: 0,
            total_propagations: 0,
            total_iterations: 0,

            restarts: 0,
            solves: 0,
            time: Duration::from_secs(0),

            restart_schedule: Geometric::new(
                config.restart_goal.value,
                config.restart_growth.value,
            ),
        }
    }
}
