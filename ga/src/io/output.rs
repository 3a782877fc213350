use optispace::fsize;
use optispace::io::export::export_layout;
use optispace::io::ext_repr::{ExtInstance, ExtLayout};
use serde::{Deserialize, Serialize};

use crate::config::GAConfig;
use crate::opt::report::{GASolution, GenerationReport};

/// External representation of a [`GASolution`].
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtGASolution {
    /// Layout of the best individual
    pub layout: ExtLayout,
    /// Wasted area of the best layout
    pub fitness: fsize,
    pub generations: usize,
    pub history: Vec<GenerationReport>,
    /// Run time in seconds
    pub run_time_sec: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct GAOutput {
    #[serde(flatten)]
    pub instance: ExtInstance,
    pub solution: ExtGASolution,
    pub config: GAConfig,
}

pub fn export_solution(solution: &GASolution) -> ExtGASolution {
    ExtGASolution {
        layout: export_layout(solution.best.genes()),
        fitness: solution.best.fitness(),
        generations: solution.generations,
        history: solution.history.clone(),
        run_time_sec: solution.run_time.as_secs_f64(),
    }
}
