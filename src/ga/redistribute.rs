//! Capacity repair for segment-length vectors.
//!
//! # Algorithm
//!
//! Random construction (initialization, crossover) draws each driver's
//! share independently and hands the remainder to the last driver, which
//! can leave that slot over capacity. Repair moves single units from an
//! overbooked slot to the next slot with headroom, in round-robin order,
//! until the overbooked slot fits.
//!
//! Slots are checked from the last index backwards so the common case
//! (only the last driver overbooked) hands its surplus to drivers
//! `0, 1, 2, ...` in turn. Any other overbooked slot is repaired the same
//! way. A slot that receives units never exceeds its own capacity, so one
//! pass suffices.
//!
//! # Complexity
//!
//! O(e · d) where e is the total excess and d the number of drivers.

use tracing::trace;

use crate::error::ConfigError;

/// Repairs `lengths` in place so that `lengths[i] <= capacities[i]` for
/// every driver, preserving `lengths.iter().sum()`.
///
/// # Errors
///
/// Returns [`ConfigError::InsufficientCapacity`] (leaving `lengths`
/// partially repaired) when the total load exceeds the total capacity.
/// A validated [`CarpoolProblem`](crate::models::CarpoolProblem) never
/// triggers this.
///
/// # Panics
///
/// Panics if `lengths` and `capacities` differ in length.
///
/// # Examples
///
/// ```
/// use u_carpool::ga::redistribute_lengths;
///
/// let mut lengths = vec![0, 1, 5];
/// redistribute_lengths(&mut lengths, &[2, 2, 2]).expect("enough seats");
/// assert_eq!(lengths, vec![2, 2, 2]);
/// ```
pub fn redistribute_lengths(
    lengths: &mut [usize],
    capacities: &[usize],
) -> Result<(), ConfigError> {
    assert_eq!(
        lengths.len(),
        capacities.len(),
        "one segment length per driver"
    );
    let n = lengths.len();
    let mut cursor = 0;

    for over in (0..n).rev() {
        while lengths[over] > capacities[over] {
            let recipient = (0..n)
                .map(|k| (cursor + k) % n)
                .find(|&i| i != over && lengths[i] < capacities[i])
                .ok_or_else(|| ConfigError::InsufficientCapacity {
                    capacity: capacities.iter().sum(),
                    passengers: lengths.iter().sum(),
                })?;
            lengths[recipient] += 1;
            lengths[over] -= 1;
            trace!(from = over, to = recipient, "moved one passenger slot");
            cursor = (recipient + 1) % n;
        }
    }
    Ok(())
}
