//! Decoded per-driver route.

use serde::{Deserialize, Serialize};

/// The path one driver takes: start node, pickups in order, then the goal.
///
/// # Examples
///
/// ```
/// use u_carpool::models::DriverRoute;
///
/// let route = DriverRoute::new(0, 0, vec![2, 3], 4, 7.5);
/// assert_eq!(route.stops(), vec![0, 2, 3, 4]);
/// assert_eq!(route.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverRoute {
    driver: usize,
    start: usize,
    passengers: Vec<usize>,
    goal: usize,
    distance: f64,
}

impl DriverRoute {
    /// Creates a route for driver index `driver`.
    pub fn new(
        driver: usize,
        start: usize,
        passengers: Vec<usize>,
        goal: usize,
        distance: f64,
    ) -> Self {
        Self {
            driver,
            start,
            passengers,
            goal,
            distance,
        }
    }

    /// Driver index (position in the problem's driver list).
    pub fn driver(&self) -> usize {
        self.driver
    }

    /// Start node.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Passenger nodes in pickup order.
    pub fn passengers(&self) -> &[usize] {
        &self.passengers
    }

    /// Number of passengers picked up.
    pub fn len(&self) -> usize {
        self.passengers.len()
    }

    /// Returns `true` if the driver goes straight to the goal.
    pub fn is_empty(&self) -> bool {
        self.passengers.is_empty()
    }

    /// Every node visited, from start to goal.
    pub fn stops(&self) -> Vec<usize> {
        let mut stops = Vec::with_capacity(self.passengers.len() + 2);
        stops.push(self.start);
        stops.extend_from_slice(&self.passengers);
        stops.push(self.goal);
        stops
    }

    /// Travel distance of this route.
    pub fn distance(&self) -> f64 {
        self.distance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_route() {
        let r = DriverRoute::new(1, 1, vec![], 4, 3.0);
        assert!(r.is_empty());
        assert_eq!(r.stops(), vec![1, 4]);
        assert_eq!(r.driver(), 1);
        assert_eq!(r.distance(), 3.0);
    }
}
