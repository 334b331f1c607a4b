//! Carpool problem instance.

use crate::distance::DistanceMatrix;
use crate::error::{CarpoolError, ConfigError};

use super::Driver;

/// An immutable, validated carpool instance.
///
/// Every node of the distance matrix is either a driver start, a passenger
/// pickup or the shared goal. Passengers are derived: all nodes that are
/// neither a driver start nor the goal, in ascending order.
///
/// Construction checks feasibility up front, so the genetic operators can
/// rely on `total_capacity() >= passenger_count()`.
///
/// # Examples
///
/// ```
/// use u_carpool::models::CarpoolProblem;
///
/// // Drivers at 0 and 1, passengers 2 and 3, goal 4.
/// let rows = vec![vec![1.0; 5]; 5];
/// let problem = CarpoolProblem::from_parts(rows, vec![0, 1], vec![1, 1], 4)
///     .expect("feasible");
/// assert_eq!(problem.passengers(), &[2, 3]);
/// assert_eq!(problem.passenger_count(), 2);
/// assert_eq!(problem.capacities(), vec![1, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct CarpoolProblem {
    distances: DistanceMatrix,
    drivers: Vec<Driver>,
    goal: usize,
    passengers: Vec<usize>,
}

impl CarpoolProblem {
    /// Creates and validates a problem instance.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when there are no drivers, a cost is negative
    /// or not finite, a driver or the goal lies outside the matrix, a driver
    /// starts at the goal, two drivers share a node, or the drivers' total
    /// capacity cannot seat every passenger.
    pub fn new(
        distances: DistanceMatrix,
        drivers: Vec<Driver>,
        goal: usize,
    ) -> Result<Self, CarpoolError> {
        let size = distances.size();
        if drivers.is_empty() {
            return Err(ConfigError::NoDrivers.into());
        }
        distances.check_costs()?;
        if goal >= size {
            return Err(ConfigError::NodeOutOfRange { node: goal, size }.into());
        }

        let mut is_driver = vec![false; size];
        for (idx, driver) in drivers.iter().enumerate() {
            let node = driver.node();
            if node >= size {
                return Err(ConfigError::NodeOutOfRange { node, size }.into());
            }
            if node == goal {
                return Err(ConfigError::DriverAtGoal { driver: idx, node }.into());
            }
            if is_driver[node] {
                return Err(ConfigError::DuplicateDriverNode { node }.into());
            }
            is_driver[node] = true;
        }

        let passengers: Vec<usize> = (0..size)
            .filter(|&node| node != goal && !is_driver[node])
            .collect();

        let capacity: usize = drivers.iter().map(Driver::capacity).sum();
        if capacity < passengers.len() {
            return Err(ConfigError::InsufficientCapacity {
                capacity,
                passengers: passengers.len(),
            }
            .into());
        }

        Ok(Self {
            distances,
            drivers,
            goal,
            passengers,
        })
    }

    /// Creates a problem from nested distance rows, driver start nodes and
    /// their capacities (driver `d` is `driver_nodes[d]` with
    /// `capacities[d]` seats).
    pub fn from_parts(
        rows: Vec<Vec<f64>>,
        driver_nodes: Vec<usize>,
        capacities: Vec<usize>,
        goal: usize,
    ) -> Result<Self, CarpoolError> {
        if driver_nodes.len() != capacities.len() {
            return Err(ConfigError::CapacityCountMismatch {
                drivers: driver_nodes.len(),
                capacities: capacities.len(),
            }
            .into());
        }
        let distances = DistanceMatrix::from_rows(rows).ok_or(ConfigError::NonSquareMatrix)?;
        let drivers = driver_nodes
            .into_iter()
            .zip(capacities)
            .map(|(node, capacity)| Driver::new(node, capacity))
            .collect();
        Self::new(distances, drivers, goal)
    }

    /// The distance matrix.
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// Drivers in identity order.
    pub fn drivers(&self) -> &[Driver] {
        &self.drivers
    }

    /// Number of drivers.
    pub fn driver_count(&self) -> usize {
        self.drivers.len()
    }

    /// Shared destination node.
    pub fn goal(&self) -> usize {
        self.goal
    }

    /// Passenger nodes in ascending order.
    pub fn passengers(&self) -> &[usize] {
        &self.passengers
    }

    /// Number of passengers.
    pub fn passenger_count(&self) -> usize {
        self.passengers.len()
    }

    /// Seat capacity per driver, in driver order.
    pub fn capacities(&self) -> Vec<usize> {
        self.drivers.iter().map(Driver::capacity).collect()
    }

    /// Sum of all driver capacities.
    pub fn total_capacity(&self) -> usize {
        self.drivers.iter().map(Driver::capacity).sum()
    }

    /// Total number of nodes (drivers, passengers and goal).
    pub fn node_count(&self) -> usize {
        self.distances.size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(n: usize) -> Vec<Vec<f64>> {
        vec![vec![1.0; n]; n]
    }

    #[test]
    fn test_passengers_derived() {
        let p = CarpoolProblem::from_parts(rows(6), vec![4, 1], vec![2, 2], 2).expect("valid");
        assert_eq!(p.passengers(), &[0, 3, 5]);
        assert_eq!(p.driver_count(), 2);
        assert_eq!(p.total_capacity(), 4);
        assert_eq!(p.node_count(), 6);
        assert_eq!(p.goal(), 2);
    }

    #[test]
    fn test_no_drivers() {
        let err = CarpoolProblem::from_parts(rows(3), vec![], vec![], 2).unwrap_err();
        assert_eq!(err, CarpoolError::Config(ConfigError::NoDrivers));
    }

    #[test]
    fn test_capacity_count_mismatch() {
        let err = CarpoolProblem::from_parts(rows(4), vec![0, 1], vec![2], 3).unwrap_err();
        assert!(matches!(
            err,
            CarpoolError::Config(ConfigError::CapacityCountMismatch { .. })
        ));
    }

    #[test]
    fn test_non_square() {
        let err =
            CarpoolProblem::from_parts(vec![vec![0.0, 1.0]], vec![0], vec![1], 1).unwrap_err();
        assert_eq!(err, CarpoolError::Config(ConfigError::NonSquareMatrix));
    }

    #[test]
    fn test_driver_at_goal() {
        let err = CarpoolProblem::from_parts(rows(4), vec![0, 3], vec![2, 2], 3).unwrap_err();
        assert_eq!(
            err,
            CarpoolError::Config(ConfigError::DriverAtGoal { driver: 1, node: 3 })
        );
    }

    #[test]
    fn test_duplicate_driver() {
        let err = CarpoolProblem::from_parts(rows(4), vec![1, 1], vec![2, 2], 3).unwrap_err();
        assert_eq!(
            err,
            CarpoolError::Config(ConfigError::DuplicateDriverNode { node: 1 })
        );
    }

    #[test]
    fn test_goal_out_of_range() {
        let err = CarpoolProblem::from_parts(rows(3), vec![0], vec![1], 7).unwrap_err();
        assert_eq!(
            err,
            CarpoolError::Config(ConfigError::NodeOutOfRange { node: 7, size: 3 })
        );
    }

    #[test]
    fn test_insufficient_capacity() {
        // 2 drivers, goal, 3 passengers but only 2 seats.
        let err = CarpoolProblem::from_parts(rows(6), vec![0, 1], vec![1, 1], 5).unwrap_err();
        assert_eq!(
            err,
            CarpoolError::Config(ConfigError::InsufficientCapacity {
                capacity: 2,
                passengers: 3
            })
        );
    }

    #[test]
    fn test_no_passengers() {
        let p = CarpoolProblem::from_parts(rows(3), vec![0, 1], vec![0, 0], 2).expect("valid");
        assert_eq!(p.passenger_count(), 0);
    }
}
