//! JSON entry point.
//!
//! Accepts the raw instance as nested arrays (distance rows, driver nodes,
//! capacities, goal) plus optional tunables, and answers with the
//! per-generation history in flat chromosome encoding and the decoded
//! final routes.
//!
//! ```text
//! {
//!   "distance_matrix": [[0, 1, 4], [1, 0, 2], [4, 2, 0]],
//!   "drivers": [0],
//!   "capacities": [1],
//!   "goal": 2,
//!   "config": { "generations": 50, "seed": 7 }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::CarpoolError;
use crate::ga::{run_simulation, SimulationConfig};
use crate::models::{CarpoolProblem, CarpoolSolution};

/// A simulation request.
#[derive(Debug, Clone, Deserialize)]
pub struct SimulationRequest {
    /// n×n travel costs.
    pub distance_matrix: Vec<Vec<f64>>,
    /// Driver start nodes, in driver order.
    pub drivers: Vec<usize>,
    /// Seats per driver.
    pub capacities: Vec<usize>,
    /// Shared destination.
    pub goal: usize,
    /// Tunables; defaults apply to missing fields.
    #[serde(default)]
    pub config: SimulationConfig,
}

/// One history entry in flat encoding.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryEntry {
    /// Best cost of the generation.
    pub cost: f64,
    /// Genes followed by segment lengths.
    pub chromosome: Vec<usize>,
}

/// A simulation response.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationResponse {
    /// Best chromosome per generation.
    pub history: Vec<HistoryEntry>,
    /// Decoded routes of the final best chromosome.
    pub best: Option<CarpoolSolution>,
}

/// Runs a simulation for a parsed request.
pub fn simulate(request: SimulationRequest) -> Result<SimulationResponse, CarpoolError> {
    let problem = CarpoolProblem::from_parts(
        request.distance_matrix,
        request.drivers,
        request.capacities,
        request.goal,
    )?;
    let result = run_simulation(&problem, &request.config)?;
    let best = result.best_solution(&problem)?;
    let history = result
        .into_history()
        .into_iter()
        .map(|g| HistoryEntry {
            cost: g.cost,
            chromosome: g.chromosome.encoded(),
        })
        .collect();
    Ok(SimulationResponse { history, best })
}

/// Parses a JSON request, runs it and serializes the response.
pub fn run_simulation_json(input: &str) -> Result<String, CarpoolError> {
    let request: SimulationRequest =
        serde_json::from_str(input).map_err(|e| CarpoolError::Json(e.to_string()))?;
    let response = simulate(request)?;
    serde_json::to_string(&response).map_err(|e| CarpoolError::Json(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;

    #[test]
    fn test_round_trip_json() {
        let input = r#"{
            "distance_matrix": [[0, 1, 4], [1, 0, 2], [4, 2, 0]],
            "drivers": [0],
            "capacities": [1],
            "goal": 2,
            "config": {"generations": 5, "population_size": 3, "elite_count": 3, "seed": 7}
        }"#;
        let output = run_simulation_json(input).expect("runs");
        let value: serde_json::Value = serde_json::from_str(&output).expect("json");
        let history = value["history"].as_array().expect("array");
        assert_eq!(history.len(), 5);
        assert_eq!(history[0]["cost"], 3.0);
        assert_eq!(history[0]["chromosome"], serde_json::json!([1, 1]));
        assert_eq!(value["best"]["total_distance"], 3.0);
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            run_simulation_json("{"),
            Err(CarpoolError::Json(_))
        ));
    }

    #[test]
    fn test_infeasible_request() {
        let request = SimulationRequest {
            distance_matrix: vec![vec![0.0; 4]; 4],
            drivers: vec![0],
            capacities: vec![1],
            goal: 3,
            config: SimulationConfig::default(),
        };
        assert!(matches!(
            simulate(request),
            Err(CarpoolError::Config(ConfigError::InsufficientCapacity { .. }))
        ));
    }
}
