//! GA problem definition for the generic `u-metaheur` runner.
//!
//! Implements the [`GaProblem`](u_metaheur::ga::GaProblem) trait with the
//! same operators the built-in elitist loop uses, so carpool chromosomes
//! can also be evolved by [`GaRunner`](u_metaheur::ga::GaRunner) and its
//! selection schemes.
//!
//! # Operators
//!
//! - **Initialization**: shuffled passengers + random capacity-repaired lengths
//! - **Crossover**: TCX, one child per parent pair
//! - **Mutation**: gene swap + length swap, then length repair
//! - **Evaluation**: total travel distance

use rand::Rng;
use u_metaheur::ga::GaProblem;

use crate::evaluation::RouteEvaluator;
use crate::models::CarpoolProblem;

use super::chromosome::CarpoolChromosome;
use super::crossover::tcx_crossover;
use super::init::random_chromosome;
use super::mutation::{mutate, LengthRepair};

/// Adapter exposing a [`CarpoolProblem`] to the generic GA runner.
///
/// The wrapped instance is validated, so total capacity always covers the
/// passengers and the operators cannot fail.
///
/// # Panics
///
/// [`GaProblem`] methods are infallible, so a chromosome that cannot be
/// decoded aborts the run with a panic instead of being ranked.
///
/// # Examples
///
/// ```
/// use u_carpool::models::CarpoolProblem;
/// use u_carpool::ga::CarpoolGaProblem;
/// use u_metaheur::ga::{GaConfig, GaRunner};
///
/// let rows: Vec<Vec<f64>> = (0..6)
///     .map(|i| (0..6).map(|j| (i as f64 - j as f64).abs()).collect())
///     .collect();
/// let problem = CarpoolProblem::from_parts(rows, vec![0, 1], vec![2, 2], 5).unwrap();
///
/// let ga = CarpoolGaProblem::new(problem);
/// let config = GaConfig::default()
///     .with_population_size(20)
///     .with_max_generations(30);
///
/// let result = GaRunner::run(&ga, &config).expect("GA run failed");
/// assert!(result.best_fitness < f64::INFINITY);
/// ```
pub struct CarpoolGaProblem {
    problem: CarpoolProblem,
    capacities: Vec<usize>,
    length_repair: LengthRepair,
}

impl CarpoolGaProblem {
    /// Wraps a validated problem instance.
    pub fn new(problem: CarpoolProblem) -> Self {
        let capacities = problem.capacities();
        Self {
            problem,
            capacities,
            length_repair: LengthRepair::Redistribute,
        }
    }

    /// Sets the post-mutation length policy.
    pub fn with_length_repair(mut self, repair: LengthRepair) -> Self {
        self.length_repair = repair;
        self
    }

    /// The wrapped problem instance.
    pub fn problem(&self) -> &CarpoolProblem {
        &self.problem
    }
}

impl GaProblem for CarpoolGaProblem {
    type Individual = CarpoolChromosome;

    fn create_individual<R: Rng>(&self, rng: &mut R) -> CarpoolChromosome {
        random_chromosome(&self.problem, rng)
            .expect("validated problem has enough seats for every passenger")
    }

    fn evaluate(&self, individual: &CarpoolChromosome) -> f64 {
        RouteEvaluator::new(&self.problem)
            .evaluate(individual)
            .unwrap_or_else(|err| panic!("corrupted chromosome: {err}"))
    }

    fn crossover<R: Rng>(
        &self,
        parent1: &CarpoolChromosome,
        parent2: &CarpoolChromosome,
        rng: &mut R,
    ) -> Vec<CarpoolChromosome> {
        let child = tcx_crossover(&self.problem, parent1, parent2, rng)
            .expect("validated problem has enough seats for every passenger");
        vec![child]
    }

    fn mutate<R: Rng>(&self, individual: &mut CarpoolChromosome, rng: &mut R) {
        mutate(individual, &self.capacities, self.length_repair, rng)
            .expect("validated problem has enough seats for every passenger");
    }
}
