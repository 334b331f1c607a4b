//! Carpool chromosome: passenger permutation plus per-driver segment lengths.
//!
//! The permutation lists every passenger exactly once. Driver 0 picks up
//! the first `lengths[0]` passengers in order, driver 1 the next
//! `lengths[1]`, and so on. A driver with length zero drives straight to
//! the goal.
//!
//! The flat encoding places the lengths after the genes, so a chromosome
//! for `p` passengers and `d` drivers is a `p + d` element vector.
//!
//! # Reference
//!
//! Yuan, S., Skinner, B., Huang, S., Liu, D. (2013). "A new crossover
//! approach for solving the multiple travelling salesmen problem using
//! genetic algorithms", *European Journal of Operational Research* 228(1),
//! 72-82.

use serde::{Deserialize, Serialize};
use u_metaheur::ga::Individual;

/// A candidate carpool plan in two-part encoding.
///
/// # Examples
///
/// ```
/// use u_carpool::ga::CarpoolChromosome;
///
/// let c = CarpoolChromosome::new(vec![5, 2, 3], vec![2, 0, 1]);
/// let segments: Vec<&[usize]> = c.segments().collect();
/// assert_eq!(segments, vec![&[5, 2][..], &[][..], &[3][..]]);
/// assert_eq!(c.encoded(), vec![5, 2, 3, 2, 0, 1]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarpoolChromosome {
    genes: Vec<usize>,
    lengths: Vec<usize>,
    #[serde(skip, default = "unevaluated")]
    fitness: f64,
}

fn unevaluated() -> f64 {
    f64::INFINITY
}

impl CarpoolChromosome {
    /// Creates a chromosome from a passenger permutation and segment lengths.
    pub fn new(genes: Vec<usize>, lengths: Vec<usize>) -> Self {
        Self {
            genes,
            lengths,
            fitness: unevaluated(),
        }
    }

    /// Splits a flat encoding (genes followed by `driver_count` lengths).
    ///
    /// Returns `None` if the encoding is shorter than `driver_count`.
    pub fn from_encoded(encoded: &[usize], driver_count: usize) -> Option<Self> {
        let split = encoded.len().checked_sub(driver_count)?;
        let (genes, lengths) = encoded.split_at(split);
        Some(Self::new(genes.to_vec(), lengths.to_vec()))
    }

    /// Flat encoding: genes followed by lengths.
    pub fn encoded(&self) -> Vec<usize> {
        let mut flat = Vec::with_capacity(self.genes.len() + self.lengths.len());
        flat.extend_from_slice(&self.genes);
        flat.extend_from_slice(&self.lengths);
        flat
    }

    /// The passenger permutation.
    pub fn genes(&self) -> &[usize] {
        &self.genes
    }

    /// Mutable access to the passenger permutation.
    pub fn genes_mut(&mut self) -> &mut Vec<usize> {
        &mut self.genes
    }

    /// Passenger count per driver.
    pub fn lengths(&self) -> &[usize] {
        &self.lengths
    }

    /// Mutable access to the segment lengths.
    pub fn lengths_mut(&mut self) -> &mut Vec<usize> {
        &mut self.lengths
    }

    /// Number of drivers encoded.
    pub fn driver_count(&self) -> usize {
        self.lengths.len()
    }

    /// Per-driver passenger slices.
    ///
    /// Segments past the end of the permutation are truncated; use the
    /// evaluator to detect inconsistent lengths.
    pub fn segments(&self) -> impl Iterator<Item = &[usize]> + '_ {
        let mut start = 0;
        self.lengths.iter().map(move |&len| {
            let from = start.min(self.genes.len());
            let to = (start + len).min(self.genes.len());
            start += len;
            &self.genes[from..to]
        })
    }

    /// Returns `true` if every segment fits its driver's capacity.
    pub fn within_capacity(&self, capacities: &[usize]) -> bool {
        self.lengths.len() == capacities.len()
            && self.lengths.iter().zip(capacities).all(|(l, c)| l <= c)
    }
}

impl Individual for CarpoolChromosome {
    type Fitness = f64;

    fn fitness(&self) -> f64 {
        self.fitness
    }

    fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }
}
