use std::time::Duration;

use optispace::fsize;
use serde::{Deserialize, Serialize};

use crate::individual::Individual;

/// Summary of the population right after a generation was evaluated
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct GenerationReport {
    pub generation: usize,
    /// Lowest fitness within this generation
    pub best_fitness: fsize,
    pub average_fitness: fsize,
    /// Container dimensions of this generation's best individual
    pub container_width: fsize,
    pub container_height: fsize,
}

/// Outcome of a full run of [`GAOptimizer`](crate::opt::ga_optimizer::GAOptimizer)
#[derive(Clone, Debug)]
pub struct GASolution {
    /// Individual with the lowest fitness seen over all generations
    pub best: Individual,
    /// Number of generations actually bred
    pub generations: usize,
    /// One report per evaluated generation, in order
    pub history: Vec<GenerationReport>,
    pub run_time: Duration,
}
