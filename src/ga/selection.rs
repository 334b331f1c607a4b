//! Ranking and elitist reproduction.
//!
//! A generation is ranked by ascending cost. The top `elite_count`
//! chromosomes survive unchanged; the rest of the next population is
//! filled with one crossover child per unordered elite pair `(p1, p2)`,
//! `p1 < p2`, taken in lexicographic order.

use rand::Rng;

use crate::error::CarpoolError;
use crate::evaluation::RouteEvaluator;
use crate::models::CarpoolProblem;

use super::chromosome::CarpoolChromosome;
use super::config::SimulationConfig;
use super::crossover::tcx_crossover;
use super::mutation::mutate;

/// A chromosome together with its evaluated cost.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranked {
    /// Total travel distance.
    pub cost: f64,
    /// The ranked chromosome.
    pub chromosome: CarpoolChromosome,
}

/// A population sorted by ascending cost (best first).
#[derive(Debug, Clone)]
pub struct Ranking {
    members: Vec<Ranked>,
}

impl Ranking {
    /// Best-first members.
    pub fn members(&self) -> &[Ranked] {
        &self.members
    }

    /// The lowest-cost member, if any.
    pub fn best(&self) -> Option<&Ranked> {
        self.members.first()
    }

    /// Number of ranked chromosomes.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if nothing was ranked.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Evaluates and sorts a population, best first. Ties keep their
/// population order.
///
/// # Errors
///
/// Returns the first [`DecodeError`](crate::error::DecodeError) met.
pub fn rank(
    problem: &CarpoolProblem,
    population: Vec<CarpoolChromosome>,
) -> Result<Ranking, CarpoolError> {
    let evaluator = RouteEvaluator::new(problem);
    let mut members = population
        .into_iter()
        .map(|chromosome| -> Result<Ranked, CarpoolError> {
            let cost = evaluator.evaluate(&chromosome)?;
            Ok(Ranked { cost, chromosome })
        })
        .collect::<Result<Vec<_>, _>>()?;
    members.sort_by(|a, b| a.cost.total_cmp(&b.cost));
    Ok(Ranking { members })
}

/// Builds the next population from a ranking: elites first, in rank
/// order, then crossover children of elite pairs.
///
/// Each child is mutated with probability `config.mutation_probability`.
/// Elites are never mutated.
///
/// # Errors
///
/// Returns a [`ConfigError`](crate::error::ConfigError) if `config` does
/// not pass [`SimulationConfig::validate`].
pub fn reproduce<R: Rng>(
    problem: &CarpoolProblem,
    ranking: &Ranking,
    config: &SimulationConfig,
    rng: &mut R,
) -> Result<Vec<CarpoolChromosome>, CarpoolError> {
    config.validate()?;
    let capacities = problem.capacities();
    let elites: Vec<&CarpoolChromosome> = ranking
        .members()
        .iter()
        .take(config.elite_count)
        .map(|r| &r.chromosome)
        .collect();

    let mut next: Vec<CarpoolChromosome> = elites.iter().map(|&c| c.clone()).collect();
    'pairs: for p1 in 0..elites.len() {
        for p2 in p1 + 1..elites.len() {
            if next.len() >= config.population_size {
                break 'pairs;
            }
            let mut child = tcx_crossover(problem, elites[p1], elites[p2], rng)?;
            if rng.random_bool(config.mutation_probability) {
                mutate(&mut child, &capacities, config.length_repair, rng)?;
            }
            next.push(child);
        }
    }
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use crate::ga::init::initial_population;
    use crate::ga::mutation::LengthRepair;

    fn problem() -> CarpoolProblem {
        // Drivers 0, 1; passengers 3..=6; goal 2. Costs grow with index gap.
        let n = 7;
        let rows = (0..n)
            .map(|i| (0..n).map(|j| (i as f64 - j as f64).abs()).collect())
            .collect();
        CarpoolProblem::from_parts(rows, vec![0, 1], vec![3, 3], 2).expect("feasible")
    }

    #[test]
    fn test_rank_sorts_ascending() {
        let p = problem();
        let mut rng = u_numflow::random::create_rng(42);
        let pop = initial_population(&p, 20, &mut rng).expect("feasible");
        let ranking = rank(&p, pop).expect("valid");
        assert_eq!(ranking.len(), 20);
        for w in ranking.members().windows(2) {
            assert!(w[0].cost <= w[1].cost);
        }
        let best = ranking.best().expect("non-empty");
        let eval = RouteEvaluator::new(&p);
        assert_eq!(best.cost, eval.evaluate(&best.chromosome).expect("valid"));
    }

    #[test]
    fn test_rank_propagates_decode_error() {
        let p = problem();
        let bad = CarpoolChromosome::new(vec![3, 4, 5, 6], vec![4, 1]);
        assert!(matches!(rank(&p, vec![bad]), Err(CarpoolError::Decode(_))));
    }

    #[test]
    fn test_reproduce_keeps_elites_and_fills() {
        let p = problem();
        let config = SimulationConfig::default()
            .with_population_size(12)
            .with_elite_count(5);
        let mut rng = u_numflow::random::create_rng(42);
        let pop = initial_population(&p, 12, &mut rng).expect("feasible");
        let ranking = rank(&p, pop).expect("valid");
        let next = reproduce(&p, &ranking, &config, &mut rng).expect("feasible");

        assert_eq!(next.len(), 12);
        for (i, elite) in ranking.members().iter().take(5).enumerate() {
            assert_eq!(next[i], elite.chromosome);
        }
        for c in &next {
            assert_eq!(c.lengths().iter().sum::<usize>(), 4);
            assert!(c.within_capacity(&[3, 3]));
        }
    }

    #[test]
    fn test_reproduce_rejects_too_few_pairs() {
        let p = problem();
        let config = SimulationConfig::default()
            .with_population_size(10)
            .with_elite_count(3);
        let mut rng = u_numflow::random::create_rng(1);
        let pop = initial_population(&p, 10, &mut rng).expect("feasible");
        let ranking = rank(&p, pop).expect("valid");
        assert_eq!(
            reproduce(&p, &ranking, &config, &mut rng),
            Err(CarpoolError::Config(ConfigError::NotEnoughElitePairs {
                elite: 3,
                pairs: 3,
                needed: 7
            }))
        );
    }

    #[test]
    fn test_reproduce_rejects_invalid_probability() {
        let p = problem();
        let config = SimulationConfig::default()
            .with_population_size(12)
            .with_elite_count(5)
            .with_mutation_probability(1.5);
        let mut rng = u_numflow::random::create_rng(1);
        let pop = initial_population(&p, 12, &mut rng).expect("feasible");
        let ranking = rank(&p, pop).expect("valid");
        assert_eq!(
            reproduce(&p, &ranking, &config, &mut rng),
            Err(CarpoolError::Config(ConfigError::InvalidMutationProbability(1.5)))
        );
    }

    fn assert_population_holds(p: &CarpoolProblem, repair: LengthRepair, seed: u64) {
        let config = SimulationConfig::default()
            .with_population_size(30)
            .with_elite_count(8)
            .with_mutation_probability(0.9)
            .with_length_repair(repair);
        let mut rng = u_numflow::random::create_rng(seed);
        let mut pop = initial_population(p, config.population_size, &mut rng).expect("feasible");
        let mut previous_best = f64::INFINITY;

        for _ in 0..150 {
            assert_eq!(pop.len(), config.population_size);
            for c in &pop {
                assert_eq!(c.lengths().iter().sum::<usize>(), p.passenger_count());
                let mut genes = c.genes().to_vec();
                genes.sort_unstable();
                assert_eq!(genes, p.passengers());
                if repair == LengthRepair::Redistribute {
                    assert!(c.within_capacity(&p.capacities()));
                }
            }
            let ranking = rank(p, pop).expect("valid");
            let best = ranking.best().expect("non-empty").cost;
            assert!(best <= previous_best);
            previous_best = best;
            pop = reproduce(p, &ranking, &config, &mut rng).expect("feasible");
        }
    }

    #[test]
    fn test_population_invariants_across_generations() {
        let p = problem();
        for seed in [3, 17, 42] {
            assert_population_holds(&p, LengthRepair::Redistribute, seed);
            assert_population_holds(&p, LengthRepair::Keep, seed);
        }
    }
}
