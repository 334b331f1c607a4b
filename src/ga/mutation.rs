//! Swap mutation on both chromosome parts.

use rand::Rng;
use serde::{Deserialize, Serialize};
use u_metaheur::ga::operators::swap_mutation;

use crate::error::ConfigError;

use super::chromosome::CarpoolChromosome;
use super::redistribute::redistribute_lengths;

/// What to do with segment lengths after a mutation swapped two of them.
///
/// Swapping lengths keeps their sum but can hand a driver more passengers
/// than they have seats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthRepair {
    /// Re-run [`redistribute_lengths`] so every driver fits capacity.
    #[default]
    Redistribute,
    /// Leave the swapped lengths as they are; a chromosome may exceed a
    /// driver's capacity until the next crossover repairs its offspring.
    Keep,
}

/// Mutates `child` in place with two independent swaps: two random gene
/// positions, then two random segment lengths.
///
/// # Errors
///
/// With [`LengthRepair::Redistribute`], fails only if total capacity is
/// below the passenger count.
///
/// # Examples
///
/// ```
/// use u_carpool::ga::{mutate, CarpoolChromosome, LengthRepair};
///
/// let mut child = CarpoolChromosome::new(vec![4, 5, 6], vec![3, 0]);
/// let mut rng = u_numflow::random::create_rng(3);
/// mutate(&mut child, &[3, 3], LengthRepair::Redistribute, &mut rng).unwrap();
/// assert_eq!(child.lengths().iter().sum::<usize>(), 3);
/// assert!(child.within_capacity(&[3, 3]));
/// ```
pub fn mutate<R: Rng>(
    child: &mut CarpoolChromosome,
    capacities: &[usize],
    repair: LengthRepair,
    rng: &mut R,
) -> Result<(), ConfigError> {
    swap_mutation(child.genes_mut(), rng);
    swap_mutation(child.lengths_mut(), rng);
    if repair == LengthRepair::Redistribute {
        redistribute_lengths(child.lengths_mut(), capacities)?;
    }
    Ok(())
}
