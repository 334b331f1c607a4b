//! Generation loop.
//!
//! # Algorithm
//!
//! 1. Build a random population of `population_size` chromosomes.
//! 2. For each of `generations` iterations: rank the population, record
//!    its best chromosome, and replace it with the elites plus their
//!    crossover children.
//!
//! There is no convergence-based stop; a run always performs exactly
//! `generations` iterations. Because elites survive unchanged, the
//! recorded best cost never increases from one generation to the next.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{CarpoolError, DecodeError};
use crate::evaluation::RouteEvaluator;
use crate::models::{CarpoolProblem, CarpoolSolution};

use super::chromosome::CarpoolChromosome;
use super::config::SimulationConfig;
use super::init::initial_population;
use super::selection::{rank, reproduce};

/// The best chromosome of one generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationBest {
    /// Zero-based generation index.
    pub generation: usize,
    /// Total travel distance of `chromosome`.
    pub cost: f64,
    /// Lowest-cost chromosome of the generation.
    pub chromosome: CarpoolChromosome,
}

/// Per-generation best chromosomes of a finished run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationResult {
    history: Vec<GenerationBest>,
}

impl SimulationResult {
    /// One entry per generation, in order.
    pub fn history(&self) -> &[GenerationBest] {
        &self.history
    }

    /// Consumes the result, returning the history.
    pub fn into_history(self) -> Vec<GenerationBest> {
        self.history
    }

    /// Best chromosome of the final generation.
    pub fn best(&self) -> Option<&GenerationBest> {
        self.history.last()
    }

    /// Best cost per generation.
    pub fn costs(&self) -> Vec<f64> {
        self.history.iter().map(|g| g.cost).collect()
    }

    /// Decodes the final best chromosome into driver routes.
    ///
    /// Returns `Ok(None)` for an empty history.
    pub fn best_solution(
        &self,
        problem: &CarpoolProblem,
    ) -> Result<Option<CarpoolSolution>, DecodeError> {
        self.best()
            .map(|b| RouteEvaluator::new(problem).decode(&b.chromosome))
            .transpose()
    }
}

/// Runs the genetic algorithm, seeding from `config.seed` when set.
///
/// # Errors
///
/// Returns a configuration error for invalid tunables, or a decode error
/// if a chromosome becomes inconsistent mid-run.
///
/// # Examples
///
/// ```
/// use u_carpool::models::CarpoolProblem;
/// use u_carpool::ga::{run_simulation, SimulationConfig};
///
/// // Drivers at 0 and 1, passengers 2..=5, goal 6 on a line.
/// let rows: Vec<Vec<f64>> = (0..7)
///     .map(|i| (0..7).map(|j| (i as f64 - j as f64).abs()).collect())
///     .collect();
/// let problem = CarpoolProblem::from_parts(rows, vec![0, 1], vec![2, 2], 6).unwrap();
/// let config = SimulationConfig::default().with_generations(30).with_seed(42);
///
/// let result = run_simulation(&problem, &config).unwrap();
/// assert_eq!(result.history().len(), 30);
/// let solution = result.best_solution(&problem).unwrap().unwrap();
/// assert_eq!(solution.num_passengers(), 4);
/// ```
pub fn run_simulation(
    problem: &CarpoolProblem,
    config: &SimulationConfig,
) -> Result<SimulationResult, CarpoolError> {
    match config.seed {
        Some(seed) => {
            let mut rng = u_numflow::random::create_rng(seed);
            run_simulation_with_rng(problem, config, &mut rng)
        }
        None => run_simulation_with_rng(problem, config, &mut rand::rng()),
    }
}

/// Runs the genetic algorithm with a caller-supplied RNG.
pub fn run_simulation_with_rng<R: Rng>(
    problem: &CarpoolProblem,
    config: &SimulationConfig,
    rng: &mut R,
) -> Result<SimulationResult, CarpoolError> {
    config.validate()?;
    info!(
        drivers = problem.driver_count(),
        passengers = problem.passenger_count(),
        generations = config.generations,
        population = config.population_size,
        "starting carpool simulation"
    );

    let mut population = initial_population(problem, config.population_size, rng)?;
    let mut history = Vec::with_capacity(config.generations);

    for generation in 0..config.generations {
        let ranking = rank(problem, population)?;
        if let Some(best) = ranking.best() {
            debug!(generation, cost = best.cost, "generation best");
            history.push(GenerationBest {
                generation,
                cost: best.cost,
                chromosome: best.chromosome.clone(),
            });
        }
        population = reproduce(problem, &ranking, config, rng)?;
    }

    if let Some(best) = history.last() {
        info!(cost = best.cost, "carpool simulation finished");
    }
    Ok(SimulationResult { history })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DistanceMatrix;
    use crate::ga::mutation::LengthRepair;
    use crate::models::Driver;

    fn line_problem(
        n: usize,
        drivers: Vec<usize>,
        capacities: Vec<usize>,
        goal: usize,
    ) -> CarpoolProblem {
        let rows = (0..n)
            .map(|i| (0..n).map(|j| (i as f64 - j as f64).abs()).collect())
            .collect();
        CarpoolProblem::from_parts(rows, drivers, capacities, goal).expect("feasible")
    }

    fn small_config() -> SimulationConfig {
        SimulationConfig::default()
            .with_population_size(30)
            .with_elite_count(8)
            .with_generations(40)
            .with_seed(42)
    }

    #[test]
    fn test_history_length() {
        let p = line_problem(8, vec![0, 1], vec![3, 3], 7);
        let result = run_simulation(&p, &small_config()).expect("runs");
        assert_eq!(result.history().len(), 40);
        for (i, g) in result.history().iter().enumerate() {
            assert_eq!(g.generation, i);
        }
    }

    #[test]
    fn test_best_cost_never_increases() {
        let p = line_problem(10, vec![0, 5], vec![4, 4], 9);
        let result = run_simulation(&p, &small_config()).expect("runs");
        for w in result.costs().windows(2) {
            assert!(w[1] <= w[0], "best cost rose from {} to {}", w[0], w[1]);
        }
    }

    #[test]
    fn test_every_best_is_valid() {
        let p = line_problem(10, vec![0, 5], vec![4, 4], 9);
        let result = run_simulation(&p, &small_config()).expect("runs");
        let eval = RouteEvaluator::new(&p);
        for g in result.history() {
            assert_eq!(g.chromosome.lengths().iter().sum::<usize>(), 7);
            assert!(g.chromosome.within_capacity(&[4, 4]));
            assert_eq!(eval.evaluate(&g.chromosome).expect("valid"), g.cost);
        }
    }

    #[test]
    fn test_zero_passengers_cost_is_direct() {
        // Drivers 0 and 1, goal 2, no passengers.
        let mut dm = DistanceMatrix::new(3);
        dm.set(0, 2, 5.0);
        dm.set(1, 2, 7.0);
        let p = CarpoolProblem::new(dm, vec![Driver::new(0, 0), Driver::new(1, 0)], 2)
            .expect("feasible");
        let result = run_simulation(&p, &small_config()).expect("runs");
        assert_eq!(result.history().len(), 40);
        for g in result.history() {
            assert_eq!(g.cost, 12.0);
            assert!(g.chromosome.genes().is_empty());
        }
    }

    #[test]
    fn test_finds_optimum_on_line() {
        // Driver 0 at 0, driver 1 at 6, goal 3. Passengers 1, 2 sit between
        // driver 0 and the goal, 4, 5 between driver 1 and the goal.
        // Optimal: each driver sweeps their own side in order, cost 6.
        let p = line_problem(7, vec![0, 6], vec![2, 2], 3);
        let config = SimulationConfig::default().with_seed(7);
        let result = run_simulation(&p, &config).expect("runs");
        let best = result.best().expect("non-empty");
        assert_eq!(best.cost, 6.0);
        let sol = result.best_solution(&p).expect("valid").expect("non-empty");
        assert_eq!(sol.routes()[0].passengers(), &[1, 2]);
        assert_eq!(sol.routes()[1].passengers(), &[5, 4]);
    }

    #[test]
    fn test_seed_is_reproducible() {
        let p = line_problem(9, vec![0, 1, 2], vec![2, 2, 2], 8);
        let a = run_simulation(&p, &small_config()).expect("runs");
        let b = run_simulation(&p, &small_config()).expect("runs");
        assert_eq!(a.history(), b.history());
    }

    #[test]
    fn test_keep_policy_runs() {
        let p = line_problem(9, vec![0, 1, 2], vec![2, 2, 2], 8);
        let config = small_config().with_length_repair(LengthRepair::Keep);
        let result = run_simulation(&p, &config).expect("runs");
        for g in result.history() {
            assert_eq!(g.chromosome.lengths().iter().sum::<usize>(), 5);
        }
    }

    #[test]
    fn test_invalid_config_rejected() {
        let p = line_problem(4, vec![0], vec![2], 3);
        let config = SimulationConfig::default().with_generations(0);
        assert!(matches!(
            run_simulation(&p, &config),
            Err(CarpoolError::Config(_))
        ));
    }

    #[test]
    fn test_unseeded_run() {
        let p = line_problem(5, vec![0], vec![3], 4);
        let config = SimulationConfig::default().with_generations(5);
        let result = run_simulation(&p, &config).expect("runs");
        assert_eq!(result.history().len(), 5);
        assert!(result.best().is_some());
    }
}
