//! Two-part chromosome crossover (TCX).
//!
//! # Algorithm
//!
//! 1. In every driver segment of `mom`, pick a random contiguous window.
//!    Non-empty segments always yield at least one gene; empty segments
//!    yield an empty window.
//! 2. Walk `dad`'s permutation and collect, in dad's order, every gene not
//!    in any of mom's windows (the unselected pool).
//! 3. For each driver but the last, emit mom's window followed by a random
//!    prefix of the remaining pool, sized so the driver stays within
//!    capacity. The last driver gets its window plus whatever is left.
//! 4. Repair the resulting lengths with
//!    [`redistribute_lengths`](super::redistribute_lengths).
//!
//! Mom's windows carry partial sub-tours into the child intact, while the
//! pool keeps dad's relative ordering of everything else.
//!
//! # Reference
//!
//! Yuan, S., Skinner, B., Huang, S., Liu, D. (2013). "A new crossover
//! approach for solving the multiple travelling salesmen problem using
//! genetic algorithms", *European Journal of Operational Research* 228(1),
//! 72-82.

use std::ops::Range;

use rand::Rng;

use crate::error::ConfigError;
use crate::models::CarpoolProblem;

use super::chromosome::CarpoolChromosome;
use super::init::random_below;
use super::redistribute::redistribute_lengths;

/// Picks one window per mom segment, as gene position ranges.
fn select_windows<R: Rng>(mom: &CarpoolChromosome, rng: &mut R) -> Vec<Range<usize>> {
    let mut start = 0;
    mom.lengths()
        .iter()
        .map(|&len| {
            let window = if len == 0 {
                start..start
            } else {
                let point2 = rng.random_range(start..start + len);
                let point1 = rng.random_range(start..=point2);
                point1..point2 + 1
            };
            start += len;
            window
        })
        .collect()
}

/// Produces one child from `mom` and `dad`.
///
/// The child holds exactly the passengers of its parents and, after
/// repair, respects every driver's capacity.
///
/// # Errors
///
/// Only fails if total capacity is below the passenger count, which a
/// validated [`CarpoolProblem`] rules out.
///
/// # Examples
///
/// ```
/// use u_carpool::models::CarpoolProblem;
/// use u_carpool::ga::{tcx_crossover, CarpoolChromosome};
///
/// let rows = vec![vec![1.0; 7]; 7];
/// let problem = CarpoolProblem::from_parts(rows, vec![0, 1], vec![3, 3], 6).unwrap();
/// let mom = CarpoolChromosome::new(vec![2, 3, 4, 5], vec![2, 2]);
/// let dad = CarpoolChromosome::new(vec![5, 4, 3, 2], vec![1, 3]);
/// let mut rng = u_numflow::random::create_rng(11);
///
/// let child = tcx_crossover(&problem, &mom, &dad, &mut rng).unwrap();
/// let mut genes = child.genes().to_vec();
/// genes.sort();
/// assert_eq!(genes, vec![2, 3, 4, 5]);
/// assert!(child.within_capacity(&[3, 3]));
/// ```
pub fn tcx_crossover<R: Rng>(
    problem: &CarpoolProblem,
    mom: &CarpoolChromosome,
    dad: &CarpoolChromosome,
    rng: &mut R,
) -> Result<CarpoolChromosome, ConfigError> {
    let windows = select_windows(mom, rng);

    let mut selected = vec![false; problem.node_count()];
    for window in &windows {
        for &gene in &mom.genes()[window.clone()] {
            selected[gene] = true;
        }
    }
    let pool: Vec<usize> = dad
        .genes()
        .iter()
        .copied()
        .filter(|&gene| !selected[gene])
        .collect();

    let capacities = problem.capacities();
    let last = windows.len() - 1;
    let mut genes = Vec::with_capacity(mom.genes().len());
    let mut lengths = Vec::with_capacity(windows.len());
    let mut taken = 0;

    for (driver, window) in windows.into_iter().enumerate() {
        let mom_amount = window.len();
        genes.extend_from_slice(&mom.genes()[window]);
        let dad_amount = if driver == last {
            pool.len() - taken
        } else {
            let room = (capacities[driver] + 1).saturating_sub(mom_amount);
            random_below(rng, (pool.len() - taken).min(room))
        };
        genes.extend_from_slice(&pool[taken..taken + dad_amount]);
        taken += dad_amount;
        lengths.push(mom_amount + dad_amount);
    }

    redistribute_lengths(&mut lengths, &capacities)?;
    Ok(CarpoolChromosome::new(genes, lengths))
}
