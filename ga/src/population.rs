use anyhow::{Result, ensure};
use optispace::entities::Rectangle;
use optispace::fsize;
use rand::Rng;

use crate::individual::Individual;
use crate::mating_pool::MatingPool;

/// A fixed-size collection of [`Individual`]s evolving over generations.
///
/// Every generation consists of [`natural_selection`](Population::natural_selection),
/// [`generate`](Population::generate) and [`evaluate`](Population::evaluate), called in that order.
///
/// Selection hands out mating pool copies proportional to fitness, so individuals with more wasted area
/// reproduce more often, while `evaluate` considers the lowest fitness to be the best.
pub struct Population {
    individuals: Vec<Individual>,
    mating_pool: MatingPool,
    mutation_rate: f64,
    generation: usize,
    finished: bool,
    best: Option<Individual>,
}

impl Population {
    /// Creates `size` individuals, each with an independent random layout of all `rects`, and scores them.
    pub fn new(mutation_rate: f64, size: usize, rects: &[Rectangle], rng: &mut impl Rng) -> Self {
        let individuals = (0..size).map(|_| Individual::new(rects, rng)).collect();
        let mut population = Self {
            individuals,
            mating_pool: MatingPool::default(),
            mutation_rate,
            generation: 0,
            finished: false,
            best: None,
        };
        population.calc_fitness();
        population
    }

    /// Scores every individual
    pub fn calc_fitness(&mut self) {
        self.individuals.iter_mut().for_each(|ind| {
            ind.calc_fitness();
        });
    }

    /// Rebuilds the mating pool from the current fitness values.
    /// Returns an error if no individual received a single copy.
    pub fn natural_selection(&mut self) -> Result<()> {
        let fitnesses = self.individuals.iter().map(|ind| ind.fitness()).collect::<Vec<_>>();
        self.mating_pool = MatingPool::from_fitnesses(&fitnesses);

        ensure!(
            !self.mating_pool.is_empty(),
            "mating pool is empty, no individual has a fitness above zero relative to the maximum"
        );
        Ok(())
    }

    /// Replaces the entire population with children bred from the mating pool.
    /// Every child is the crossover of two parents drawn from the pool, followed by mutation.
    ///
    /// Returns an error, leaving the population untouched, if the pool holds fewer than two entries.
    pub fn generate(&mut self, rng: &mut impl Rng) -> Result<()> {
        ensure!(
            self.mating_pool.len() >= 2,
            "not enough members in mating pool to generate a new population ({} < 2)",
            self.mating_pool.len()
        );

        let next_generation: Vec<Individual> = (0..self.individuals.len())
            .map(|_| {
                let parent_a = &self.individuals[self.mating_pool.draw(rng)];
                let parent_b = &self.individuals[self.mating_pool.draw(rng)];
                let mut child = parent_a.crossover(parent_b, rng);
                child.mutate(self.mutation_rate, rng);
                child
            })
            .collect();

        self.individuals = next_generation;
        self.generation += 1;
        Ok(())
    }

    /// Finds the individual with the lowest fitness of the current generation and keeps it as the
    /// best one if it beats every individual evaluated before.
    pub fn evaluate(&mut self) {
        if let Some(fittest) = first_minimum(&self.individuals) {
            if self.best.as_ref().is_none_or(|b| fittest.fitness() < b.fitness()) {
                self.best = Some(fittest.clone());
            }
        }
    }

    /// The individual with the lowest fitness in the current generation.
    /// Ties are resolved in favor of the first one encountered.
    pub fn fittest(&self) -> Option<&Individual> {
        first_minimum(&self.individuals)
    }

    /// Nothing within the population ends the evolution, the caller decides when to stop.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    pub fn mating_pool(&self) -> &MatingPool {
        &self.mating_pool
    }

    /// The best individual over all [`evaluate`](Population::evaluate) calls so far,
    /// only replaced by one with a strictly lower fitness
    pub fn best(&self) -> Option<&Individual> {
        self.best.as_ref()
    }

    /// Mean fitness over all individuals, zero for an empty population
    pub fn average_fitness(&self) -> fsize {
        match self.individuals.len() {
            0 => 0.0,
            n => self.individuals.iter().map(|ind| ind.fitness()).sum::<fsize>() / n as fsize,
        }
    }
}

fn first_minimum(individuals: &[Individual]) -> Option<&Individual> {
    let mut min: Option<&Individual> = None;
    for ind in individuals {
        if min.is_none_or(|m| ind.fitness() < m.fitness()) {
            min = Some(ind);
        }
    }
    min
}
