//! Random initial population under capacity constraints.

use rand::Rng;

use crate::error::ConfigError;
use crate::models::CarpoolProblem;

use super::chromosome::CarpoolChromosome;
use super::redistribute::redistribute_lengths;

/// Uniform draw from `[0, upper)`, or 0 when the range is empty.
pub(crate) fn random_below<R: Rng>(rng: &mut R, upper: usize) -> usize {
    if upper == 0 {
        0
    } else {
        rng.random_range(0..upper)
    }
}

/// Creates one random chromosome.
///
/// The passengers are shuffled (Fisher-Yates). Drivers `0..d-1` each get a
/// uniform share in `[0, min(remaining, capacity + 1))`, the last driver
/// takes the rest, and the lengths are then repaired to fit capacities.
///
/// # Errors
///
/// Only fails if total capacity is below the passenger count, which a
/// validated [`CarpoolProblem`] rules out.
pub fn random_chromosome<R: Rng>(
    problem: &CarpoolProblem,
    rng: &mut R,
) -> Result<CarpoolChromosome, ConfigError> {
    let mut genes = problem.passengers().to_vec();

    // Fisher-Yates shuffle
    for i in (1..genes.len()).rev() {
        let j = rng.random_range(0..=i);
        genes.swap(i, j);
    }

    let capacities = problem.capacities();
    let mut remaining = problem.passenger_count();
    let mut lengths = Vec::with_capacity(capacities.len());
    for &capacity in &capacities[..capacities.len() - 1] {
        let amount = random_below(rng, remaining.min(capacity + 1));
        lengths.push(amount);
        remaining -= amount;
    }
    lengths.push(remaining);
    redistribute_lengths(&mut lengths, &capacities)?;

    Ok(CarpoolChromosome::new(genes, lengths))
}

/// Creates `size` random chromosomes.
///
/// # Examples
///
/// ```
/// use u_carpool::models::CarpoolProblem;
/// use u_carpool::ga::initial_population;
///
/// let rows = vec![vec![1.0; 6]; 6];
/// let problem = CarpoolProblem::from_parts(rows, vec![0, 1], vec![2, 2], 5).unwrap();
/// let mut rng = u_numflow::random::create_rng(7);
/// let population = initial_population(&problem, 10, &mut rng).unwrap();
/// assert_eq!(population.len(), 10);
/// assert!(population.iter().all(|c| c.within_capacity(&[2, 2])));
/// ```
pub fn initial_population<R: Rng>(
    problem: &CarpoolProblem,
    size: usize,
    rng: &mut R,
) -> Result<Vec<CarpoolChromosome>, ConfigError> {
    (0..size).map(|_| random_chromosome(problem, rng)).collect()
}
