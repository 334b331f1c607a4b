//! Dense distance matrix.

use crate::error::ConfigError;

/// A dense n×n distance matrix stored in row-major order.
///
/// Node indices cover every driver start, every passenger pickup and the
/// shared goal. Costs may be asymmetric.
///
/// # Examples
///
/// ```
/// use u_carpool::distance::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 4.0],
///     vec![6.0, 0.0],
/// ])
/// .expect("square");
/// assert_eq!(dm.get(0, 1), 4.0);
/// assert_eq!(dm.get(1, 0), 6.0);
/// assert_eq!(dm.size(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Creates a distance matrix from an explicit row-major n×n grid.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Creates a distance matrix from nested rows.
    ///
    /// Returns `None` unless every row has exactly `rows.len()` entries.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Option<Self> {
        let size = rows.len();
        if rows.iter().any(|row| row.len() != size) {
            return None;
        }
        Self::from_data(size, rows.into_iter().flatten().collect())
    }

    /// Returns the distance from node `from` to node `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Returns the distance from `from` to `to`, or `None` when either
    /// node lies outside the matrix.
    pub fn try_get(&self, from: usize, to: usize) -> Option<f64> {
        if from >= self.size || to >= self.size {
            return None;
        }
        Some(self.get(from, to))
    }

    /// Sets the distance from node `from` to node `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of nodes in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Checks that every entry is a finite, non-negative cost.
    pub fn check_costs(&self) -> Result<(), ConfigError> {
        match self
            .data
            .iter()
            .position(|d| !d.is_finite() || *d < 0.0)
        {
            Some(idx) => Err(ConfigError::InvalidDistance {
                from: idx / self.size,
                to: idx % self.size,
                value: self.data[idx],
            }),
            None => Ok(()),
        }
    }
}
