//! Error types.
//!
//! Configuration problems are detected before a run starts. Decode errors
//! mean a chromosome lost its internal consistency, which only a defect in
//! the genetic operators can cause; a run that hits one aborts.

use thiserror::Error;

/// An infeasible problem instance or invalid simulation tunable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// At least one driver is required.
    #[error("problem has no drivers")]
    NoDrivers,

    /// Driver nodes and capacities have different lengths.
    #[error("{drivers} driver nodes but {capacities} capacities")]
    CapacityCountMismatch {
        /// Number of driver nodes.
        drivers: usize,
        /// Number of capacities.
        capacities: usize,
    },

    /// The distance rows do not form a square matrix.
    #[error("distance matrix is not square")]
    NonSquareMatrix,

    /// A distance is negative, NaN or infinite.
    #[error("invalid distance {value} from node {from} to node {to}")]
    InvalidDistance {
        /// Origin node.
        from: usize,
        /// Destination node.
        to: usize,
        /// Offending value.
        value: f64,
    },

    /// A driver or goal node is not covered by the distance matrix.
    #[error("node {node} is outside the {size}x{size} distance matrix")]
    NodeOutOfRange {
        /// Offending node.
        node: usize,
        /// Matrix dimension.
        size: usize,
    },

    /// A driver starts at the goal.
    #[error("driver {driver} starts at the goal node {node}")]
    DriverAtGoal {
        /// Driver index.
        driver: usize,
        /// Shared node.
        node: usize,
    },

    /// Two drivers share a start node.
    #[error("node {node} is used by more than one driver")]
    DuplicateDriverNode {
        /// Shared node.
        node: usize,
    },

    /// Seats cannot cover every passenger.
    #[error("total capacity {capacity} is less than {passengers} passengers")]
    InsufficientCapacity {
        /// Sum of driver capacities.
        capacity: usize,
        /// Passengers to place.
        passengers: usize,
    },

    /// Population or elite sizes are unusable.
    #[error("population size {population} must be at least elite count {elite}, which must be at least 1")]
    InvalidPopulation {
        /// Configured population size.
        population: usize,
        /// Configured elite count.
        elite: usize,
    },

    /// Elite pairs cannot refill the population.
    #[error("{elite} elites yield {pairs} children, {needed} needed to refill the population")]
    NotEnoughElitePairs {
        /// Configured elite count.
        elite: usize,
        /// Number of unordered elite pairs.
        pairs: usize,
        /// Children required per generation.
        needed: usize,
    },

    /// Mutation probability outside `[0, 1]`.
    #[error("mutation probability {0} is outside [0, 1]")]
    InvalidMutationProbability(f64),

    /// Zero generations requested.
    #[error("at least one generation is required")]
    NoGenerations,
}

/// A chromosome whose segment lengths or genes cannot be decoded.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("cannot decode chromosome {encoded:?} at position {position}: {reason}")]
pub struct DecodeError {
    /// Flat encoding of the offending chromosome (genes then lengths).
    pub encoded: Vec<usize>,
    /// Gene or length position where decoding failed.
    pub position: usize,
    /// What was inconsistent.
    pub reason: String,
}

/// Any error surfaced by the carpool engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CarpoolError {
    /// Invalid instance or tunables.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Internally inconsistent chromosome.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Malformed JSON request.
    #[cfg(feature = "json")]
    #[error("json error: {0}")]
    Json(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_message() {
        let err = ConfigError::InsufficientCapacity {
            capacity: 3,
            passengers: 5,
        };
        assert_eq!(
            err.to_string(),
            "total capacity 3 is less than 5 passengers"
        );
    }

    #[test]
    fn test_carpool_error_from_decode() {
        let err: CarpoolError = DecodeError {
            encoded: vec![2, 3, 1, 2],
            position: 2,
            reason: "lengths sum to 3, expected 2".into(),
        }
        .into();
        assert!(matches!(err, CarpoolError::Decode(_)));
        assert!(err.to_string().contains("position 2"));
    }
}
