use optispace::fsize;
use rand::Rng;

/// Number of copies an individual with the maximum fitness receives
pub const MAX_COPIES: fsize = 100.0;

/// Multiset of individuals eligible for reproduction, stored as a flat list of population indices
/// with repeats. The more often an index occurs, the more likely that individual becomes a parent.
#[derive(Clone, Debug, Default)]
pub struct MatingPool {
    entries: Vec<usize>,
}

impl MatingPool {
    /// Builds a pool in which every individual receives a number of copies proportional to its
    /// fitness, relative to the maximum fitness in `fitnesses`.
    pub fn from_fitnesses(fitnesses: &[fsize]) -> Self {
        let max_fitness = fitnesses
            .iter()
            .copied()
            .fold(fsize::NEG_INFINITY, fsize::max);

        let entries = fitnesses
            .iter()
            .enumerate()
            .flat_map(|(i, &fitness)| std::iter::repeat_n(i, n_copies(fitness, max_fitness)))
            .collect();

        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[usize] {
        &self.entries
    }

    /// Draws a population index uniformly from all but the last entry of the pool.
    /// The pool must contain at least two entries.
    pub fn draw(&self, rng: &mut impl Rng) -> usize {
        debug_assert!(self.entries.len() >= 2);
        self.entries[rng.random_range(0..self.entries.len() - 1)]
    }
}

/// Linearly maps `fitness` from `[0, max_fitness]` onto `[0, MAX_COPIES]` and floors the result.
/// Undefined mappings (a maximum of zero) and negative results yield no copies.
pub fn n_copies(fitness: fsize, max_fitness: fsize) -> usize {
    let n = (map_range(fitness, 0.0, max_fitness, 0.0, 1.0) * MAX_COPIES).floor();
    match n.is_finite() && n > 0.0 {
        true => n as usize,
        false => 0,
    }
}

/// Re-maps `value` from the range `[in_min, in_max]` onto `[out_min, out_max]`.
pub fn map_range(value: fsize, in_min: fsize, in_max: fsize, out_min: fsize, out_max: fsize) -> fsize {
    out_min + (out_max - out_min) * ((value - in_min) / (in_max - in_min))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::prelude::SmallRng;

    #[test]
    fn copies_are_proportional_to_fitness() {
        assert_eq!(n_copies(50.0, 50.0), 100);
        assert_eq!(n_copies(25.0, 50.0), 50);
        assert_eq!(n_copies(0.2, 50.0), 0);
        assert_eq!(n_copies(0.0, 50.0), 0);
    }

    #[test]
    fn zero_maximum_yields_no_copies() {
        assert_eq!(n_copies(0.0, 0.0), 0);
    }

    #[test]
    fn pool_repeats_indices() {
        let pool = MatingPool::from_fitnesses(&[10.0, 5.0, 0.0]);
        assert_eq!(pool.len(), 150);
        assert_eq!(pool.entries().iter().filter(|&&i| i == 0).count(), 100);
        assert_eq!(pool.entries().iter().filter(|&&i| i == 1).count(), 50);
        assert!(!pool.entries().contains(&2));
    }

    #[test]
    fn all_zero_fitness_yields_empty_pool() {
        assert!(MatingPool::from_fitnesses(&[0.0, 0.0, 0.0]).is_empty());
        assert!(MatingPool::from_fitnesses(&[]).is_empty());
    }

    #[test]
    fn draw_never_returns_last_entry() {
        let pool = MatingPool {
            entries: vec![0, 1],
        };
        let mut rng = SmallRng::seed_from_u64(0);
        assert!((0..100).all(|_| pool.draw(&mut rng) == 0));
    }
}
