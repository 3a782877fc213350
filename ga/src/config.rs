use anyhow::{Result, ensure};
use optispace::io::svg::SvgDrawOptions;
use serde::{Deserialize, Serialize};

/// Configuration for the genetic optimizer
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct GAConfig {
    /// Seed for the PRNG. If undefined, the algorithm will run in non-deterministic mode using entropy
    pub prng_seed: Option<u64>,
    /// Probability with which every gene of a newborn child is considered for mutation
    pub mutation_rate: f64,
    /// Number of individuals, constant across generations
    pub population_size: usize,
    /// Number of selection, reproduction and evaluation rounds
    pub n_generations: usize,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

impl Default for GAConfig {
    fn default() -> Self {
        Self {
            prng_seed: Some(0),
            mutation_rate: 0.01,
            population_size: 1500,
            n_generations: 500,
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}

impl GAConfig {
    /// Rejects configurations the optimizer cannot run with.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.population_size > 0,
            "population_size must be positive, got {}",
            self.population_size
        );
        ensure!(
            (0.0..=1.0).contains(&self.mutation_rate),
            "mutation_rate must lie within [0, 1], got {}",
            self.mutation_rate
        );
        Ok(())
    }
}
