use std::collections::HashSet;

use optispace::entities::{DimKey, LayoutResult, PositionedRect, Rectangle};
use optispace::fsize;
use optispace::layout;
use optispace::util::round_to;
use rand::Rng;

/// A candidate arrangement. Its genome is a [`LayoutResult`]: the placement order and orientation
/// of the rectangles, together with the positions the layout engine derived from them.
///
/// Fitness is the wasted area of the layout, lower is better.
#[derive(Clone, Debug)]
pub struct Individual {
    genes: LayoutResult,
    fitness: fsize,
}

impl Individual {
    /// Creates an individual with a fresh random layout (random rotations) of `rects`.
    /// Its fitness is zero until [`Individual::calc_fitness`] is called.
    pub fn new(rects: &[Rectangle], rng: &mut impl Rng) -> Self {
        Self::from_layout(layout::arrange(rects, rng))
    }

    pub fn empty() -> Self {
        Self::from_layout(LayoutResult::empty())
    }

    pub fn from_layout(genes: LayoutResult) -> Self {
        Self {
            genes,
            fitness: 0.0,
        }
    }

    pub fn genes(&self) -> &LayoutResult {
        &self.genes
    }

    pub fn fitness(&self) -> fsize {
        self.fitness
    }

    /// Computes the wasted area: the area of the tight bounding box around the placed rectangles
    /// minus the area of the rectangles themselves, both rounded to two decimals.
    pub fn calc_fitness(&mut self) -> fsize {
        let total_area = round_to(self.genes.total_area(), 2);
        let bbox_area = match self.genes.bbox() {
            Some(bbox) => round_to(bbox.area(), 2),
            None => 0.0,
        };
        self.fitness = bbox_area - total_area;
        self.fitness
    }

    /// Single-point crossover.
    ///
    /// Genes up to and including a random midpoint come from `partner`, the rest from `self`.
    /// A gene is skipped if the child already carries a gene with the same dimensions,
    /// so the child can end up with fewer genes than either parent.
    /// The child is laid out from scratch and scored before it is returned.
    pub fn crossover(&self, partner: &Individual, rng: &mut impl Rng) -> Individual {
        let own_genes = &self.genes.positioned_rects;
        let partner_genes = &partner.genes.positioned_rects;

        let min_len = usize::min(own_genes.len(), partner_genes.len());
        let midpoint = match min_len {
            0 => 0,
            _ => rng.random_range(0..min_len),
        };

        let mut child_genes: Vec<Rectangle> = Vec::with_capacity(own_genes.len());
        let mut child_dims: HashSet<DimKey> = HashSet::with_capacity(own_genes.len());

        for i in 0..own_genes.len() {
            let candidate = match i > midpoint {
                true => Some(&own_genes[i]),
                //`None` only when the partner is empty, see `min_len`
                false => partner_genes.get(i),
            };
            if let Some(gene) = candidate {
                if child_dims.insert(gene.dim_key()) {
                    child_genes.push(gene.dims());
                }
            }
        }

        let mut child = Individual::new(&child_genes, rng);
        child.calc_fitness();
        child
    }

    /// Every gene is, with probability `mutation_rate`, a candidate to be overwritten by another
    /// gene drawn from this individual's own genome. The overwrite only happens when the drawn
    /// dimensions are not already present in the genome. As the drawn gene is itself part of the
    /// genome, no dimensions are ever added or removed and only the orientations change.
    ///
    /// The genome is laid out again afterwards (re-rolling all rotations), but the fitness is
    /// left untouched: call [`Individual::calc_fitness`] if an up-to-date score is needed.
    pub fn mutate(&mut self, mutation_rate: f64, rng: &mut impl Rng) {
        let genes = &mut self.genes.positioned_rects;
        let mut present: HashSet<DimKey> = genes.iter().map(|g| g.dim_key()).collect();

        for i in 0..genes.len() {
            if rng.random::<f64>() < mutation_rate {
                let picked: PositionedRect = genes[rng.random_range(0..genes.len())];
                if !present.contains(&picked.dim_key()) {
                    present.insert(picked.dim_key());
                    genes[i] = picked;
                }
            }
        }

        self.genes = layout::arrange(&self.genes.rectangles(), rng);
    }
}
