//! Decoded carpool solution.

use serde::{Deserialize, Serialize};

use super::DriverRoute;

/// A full carpool plan: one route per driver, in driver order.
///
/// # Examples
///
/// ```
/// use u_carpool::models::{CarpoolSolution, DriverRoute};
///
/// let sol = CarpoolSolution::new(vec![
///     DriverRoute::new(0, 0, vec![2], 4, 2.0),
///     DriverRoute::new(1, 1, vec![3], 4, 4.0),
/// ]);
/// assert_eq!(sol.total_distance(), 6.0);
/// assert_eq!(sol.num_routes(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarpoolSolution {
    routes: Vec<DriverRoute>,
    total_distance: f64,
}

impl CarpoolSolution {
    /// Creates a solution, summing the route distances.
    pub fn new(routes: Vec<DriverRoute>) -> Self {
        let total_distance = routes.iter().map(DriverRoute::distance).sum();
        Self {
            routes,
            total_distance,
        }
    }

    /// Routes in driver order.
    pub fn routes(&self) -> &[DriverRoute] {
        &self.routes
    }

    /// Number of routes (one per driver).
    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    /// Route of driver `driver`, if it exists.
    pub fn route(&self, driver: usize) -> Option<&DriverRoute> {
        self.routes.get(driver)
    }

    /// Sum of all route distances.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Number of passengers picked up across all routes.
    pub fn num_passengers(&self) -> usize {
        self.routes.iter().map(DriverRoute::len).sum()
    }
}
