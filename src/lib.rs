//! # u-carpool
//!
//! Multi-driver carpool routing. Drivers start at distinct nodes with a
//! limited number of seats; every passenger must be picked up by exactly
//! one driver, and all drivers end at a shared goal. The crate searches
//! for the assignment and pickup order with the lowest total distance
//! using a genetic algorithm with two-part chromosome crossover (TCX).
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Driver, CarpoolProblem, DriverRoute, CarpoolSolution)
//! - [`distance`] — Distance matrix
//! - [`evaluation`] — Chromosome decoding and cost evaluation
//! - [`ga`] — Genetic algorithm: encoding, operators, generation loop
//! - [`error`] — Configuration and decode errors
//! - `io` — JSON entry point (feature `json`)
//!
//! ## Quick start
//!
//! ```
//! use u_carpool::models::CarpoolProblem;
//! use u_carpool::ga::{run_simulation, SimulationConfig};
//!
//! // Drivers at 0 and 6, goal 3, passengers 1, 2, 4, 5 on a line.
//! let rows: Vec<Vec<f64>> = (0..7)
//!     .map(|i| (0..7).map(|j| (i as f64 - j as f64).abs()).collect())
//!     .collect();
//! let problem = CarpoolProblem::from_parts(rows, vec![0, 6], vec![2, 2], 3)?;
//!
//! let config = SimulationConfig::default().with_generations(50).with_seed(1);
//! let result = run_simulation(&problem, &config)?;
//! let best = result.best_solution(&problem)?.expect("one entry per generation");
//! assert_eq!(best.num_routes(), 2);
//! # Ok::<(), u_carpool::error::CarpoolError>(())
//! ```

pub mod distance;
pub mod error;
pub mod evaluation;
pub mod ga;
#[cfg(feature = "json")]
pub mod io;
pub mod models;

pub use error::CarpoolError;
