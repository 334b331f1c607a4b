//! Genetic algorithm components for carpool routing.
//!
//! - [`CarpoolChromosome`] — Passenger permutation + per-driver segment lengths
//! - [`initial_population`] — Random capacity-respecting population
//! - [`redistribute_lengths`] — Capacity repair for segment lengths
//! - [`tcx_crossover`] — Two-part chromosome crossover
//! - [`mutate`] — Gene and length swap mutation
//! - [`rank`] / [`reproduce`] — Ranking and elitist reproduction
//! - [`run_simulation`] — Generation loop with per-generation best history
//! - [`CarpoolGaProblem`] — [`GaProblem`](u_metaheur::ga::GaProblem) implementation

mod chromosome;
mod config;
mod crossover;
mod init;
mod mutation;
mod problem;
mod redistribute;
mod selection;
mod simulation;

pub use chromosome::CarpoolChromosome;
pub use config::SimulationConfig;
pub use crossover::tcx_crossover;
pub use init::{initial_population, random_chromosome};
pub use mutation::{mutate, LengthRepair};
pub use problem::CarpoolGaProblem;
pub use redistribute::redistribute_lengths;
pub use selection::{rank, reproduce, Ranked, Ranking};
pub use simulation::{run_simulation, run_simulation_with_rng, GenerationBest, SimulationResult};
