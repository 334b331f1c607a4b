//! Route evaluator: decodes chromosomes and computes travel cost.

use tracing::error;

use crate::error::DecodeError;
use crate::ga::CarpoolChromosome;
use crate::models::{CarpoolProblem, CarpoolSolution, DriverRoute};

/// Computes the total travel distance of a chromosome and decodes it into
/// per-driver routes.
///
/// Each driver travels from their start node through their segment of the
/// permutation to the goal, or straight to the goal when the segment is
/// empty.
///
/// # Examples
///
/// ```
/// use u_carpool::distance::DistanceMatrix;
/// use u_carpool::evaluation::RouteEvaluator;
/// use u_carpool::ga::CarpoolChromosome;
/// use u_carpool::models::{CarpoolProblem, Driver};
///
/// // Drivers at 0 and 1, passengers 2 and 3, goal 4.
/// let mut dm = DistanceMatrix::new(5);
/// for (a, b, d) in [(0, 2, 1.0), (2, 4, 1.0), (1, 3, 2.0), (3, 4, 2.0)] {
///     dm.set(a, b, d);
///     dm.set(b, a, d);
/// }
/// let problem = CarpoolProblem::new(dm, vec![Driver::new(0, 1), Driver::new(1, 1)], 4).unwrap();
///
/// let evaluator = RouteEvaluator::new(&problem);
/// let chromosome = CarpoolChromosome::new(vec![2, 3], vec![1, 1]);
/// assert_eq!(evaluator.evaluate(&chromosome).unwrap(), 6.0);
/// ```
pub struct RouteEvaluator<'a> {
    problem: &'a CarpoolProblem,
}

impl<'a> RouteEvaluator<'a> {
    /// Creates an evaluator for the given problem.
    pub fn new(problem: &'a CarpoolProblem) -> Self {
        Self { problem }
    }

    /// Total travel distance over all drivers.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] if the chromosome does not carry one length
    /// per driver, the lengths do not sum to the passenger count, or a gene
    /// is not a node of the distance matrix.
    pub fn evaluate(&self, chromosome: &CarpoolChromosome) -> Result<f64, DecodeError> {
        self.check_lengths(chromosome)?;
        let mut total = 0.0;
        let mut offset = 0;
        for (driver, segment) in chromosome.segments().enumerate() {
            total += self.route_distance(chromosome, driver, segment, offset)?;
            offset += segment.len();
        }
        Ok(total)
    }

    /// Decodes a chromosome into per-driver routes.
    ///
    /// # Errors
    ///
    /// Same conditions as [`evaluate`](Self::evaluate).
    pub fn decode(&self, chromosome: &CarpoolChromosome) -> Result<CarpoolSolution, DecodeError> {
        self.check_lengths(chromosome)?;
        let mut routes = Vec::with_capacity(chromosome.driver_count());
        let mut offset = 0;
        for (driver, segment) in chromosome.segments().enumerate() {
            let distance = self.route_distance(chromosome, driver, segment, offset)?;
            routes.push(DriverRoute::new(
                driver,
                self.problem.drivers()[driver].node(),
                segment.to_vec(),
                self.problem.goal(),
                distance,
            ));
            offset += segment.len();
        }
        Ok(CarpoolSolution::new(routes))
    }

    fn check_lengths(&self, chromosome: &CarpoolChromosome) -> Result<(), DecodeError> {
        let genes = chromosome.genes().len();
        if chromosome.driver_count() != self.problem.driver_count() {
            return Err(self.fail(
                chromosome,
                genes,
                format!(
                    "{} segment lengths for {} drivers",
                    chromosome.driver_count(),
                    self.problem.driver_count()
                ),
            ));
        }
        let sum: usize = chromosome.lengths().iter().sum();
        if sum != self.problem.passenger_count() || genes != sum {
            return Err(self.fail(
                chromosome,
                genes,
                format!(
                    "lengths sum to {sum} over {genes} genes, expected {}",
                    self.problem.passenger_count()
                ),
            ));
        }
        Ok(())
    }

    /// Distance for one driver; `offset` is the segment's gene position.
    fn route_distance(
        &self,
        chromosome: &CarpoolChromosome,
        driver: usize,
        segment: &[usize],
        offset: usize,
    ) -> Result<f64, DecodeError> {
        let dm = self.problem.distances();
        let start = self.problem.drivers()[driver].node();
        let goal = self.problem.goal();

        let mut distance = 0.0;
        let mut prev = start;
        for (i, &node) in segment.iter().enumerate() {
            distance += dm.try_get(prev, node).ok_or_else(|| {
                self.fail(
                    chromosome,
                    offset + i,
                    format!("gene {node} is outside the distance matrix"),
                )
            })?;
            prev = node;
        }
        // Every hop above was checked, so prev and goal are in bounds.
        distance += dm.get(prev, goal);
        Ok(distance)
    }

    fn fail(&self, chromosome: &CarpoolChromosome, position: usize, reason: String) -> DecodeError {
        let err = DecodeError {
            encoded: chromosome.encoded(),
            position,
            reason,
        };
        error!(%err, "corrupted chromosome");
        err
    }
}
