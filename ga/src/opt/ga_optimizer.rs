use std::time::Instant;

use log::{debug, info, warn};
use optispace::entities::Rectangle;
use rand::prelude::SmallRng;
use thousands::Separable;

use crate::config::GAConfig;
use crate::individual::Individual;
use crate::opt::report::{GASolution, GenerationReport};
use crate::population::Population;

/// Drives a [`Population`] through a fixed budget of generations.
pub struct GAOptimizer {
    pub rects: Vec<Rectangle>,
    pub config: GAConfig,
    /// SmallRng is a fast, non-cryptographic PRNG <https://rust-random.github.io/book/guide-rngs.html>
    pub rng: SmallRng,
    pub population: Population,
}

impl GAOptimizer {
    pub fn new(rects: Vec<Rectangle>, config: GAConfig, mut rng: SmallRng) -> Self {
        assert!(config.population_size > 0);
        let population = Population::new(
            config.mutation_rate,
            config.population_size,
            &rects,
            &mut rng,
        );
        info!(
            "[GA] initialized population of {} individuals for {} rectangles (avg fitness: {:.3})",
            config.population_size.separate_with_commas(),
            rects.len(),
            population.average_fitness()
        );
        Self {
            rects,
            config,
            rng,
            population,
        }
    }

    pub fn solve(&mut self) -> GASolution {
        let start = Instant::now();

        //the initial population competes for the best individual as well
        self.population.evaluate();
        let mut history = Vec::with_capacity(self.config.n_generations);

        for _ in 0..self.config.n_generations {
            if let Err(e) = self.population.natural_selection() {
                warn!("[GA] {e}");
            }
            let best_before = self.population.best().map(|b| b.fitness());
            let bred = self.population.generate(&mut self.rng);
            self.population.evaluate();

            if let Some(fittest) = self.population.fittest() {
                let report = GenerationReport {
                    generation: self.population.generation(),
                    best_fitness: fittest.fitness(),
                    average_fitness: self.population.average_fitness(),
                    container_width: fittest.genes().container_width,
                    container_height: fittest.genes().container_height,
                };
                debug!("[GA] {report:?}");
                history.push(report);
            }

            if let Some(best) = self.population.best() {
                if best_before.is_none_or(|f| best.fitness() < f) {
                    info!(
                        "[GA] gen {}: improved best fitness to {:.3} ({} rects, container {:.3}x{:.3})",
                        self.population.generation(),
                        best.fitness(),
                        best.genes().len(),
                        best.genes().container_width,
                        best.genes().container_height
                    );
                }
            }

            if let Err(e) = bred {
                //the population did not change, every following generation would fail the same way
                warn!("[GA] {e}, stopping after {} generations", self.population.generation());
                break;
            }
        }

        let best: Individual = self
            .population
            .best()
            .cloned()
            .expect("population contains at least one individual");
        let run_time = start.elapsed();

        info!(
            "[GA] optimization finished in {:.3}ms ({} generations, {} individuals bred)",
            run_time.as_secs_f64() * 1000.0,
            self.population.generation(),
            (self.population.generation() * self.config.population_size).separate_with_commas()
        );
        info!(
            "[GA] best layout contains {} rectangles with a wasted area of {:.3} (container density {:.3}%)",
            best.genes().len(),
            best.fitness(),
            best.genes().density() * 100.0
        );

        GASolution {
            best,
            generations: self.population.generation(),
            history,
            run_time,
        }
    }
}
