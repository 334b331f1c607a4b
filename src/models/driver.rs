//! Driver type with start node and seat capacity.

use serde::{Deserialize, Serialize};

/// A driver who starts at their own node and ends at the shared goal.
///
/// # Examples
///
/// ```
/// use u_carpool::models::Driver;
///
/// let d = Driver::new(3, 4);
/// assert_eq!(d.node(), 3);
/// assert_eq!(d.capacity(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Driver {
    node: usize,
    capacity: usize,
}

impl Driver {
    /// Creates a driver starting at `node` with room for `capacity` passengers.
    pub fn new(node: usize, capacity: usize) -> Self {
        Self { node, capacity }
    }

    /// Start node in the distance matrix.
    pub fn node(&self) -> usize {
        self.node
    }

    /// Maximum number of passengers this driver may pick up.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_driver_new() {
        let d = Driver::new(0, 2);
        assert_eq!(d.node(), 0);
        assert_eq!(d.capacity(), 2);
    }

    #[test]
    fn test_driver_zero_capacity() {
        let d = Driver::new(5, 0);
        assert_eq!(d.capacity(), 0);
    }
}
