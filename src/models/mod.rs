//! Domain model types for carpool routing.
//!
//! Drivers with start nodes and seat limits, the validated problem
//! instance, and the decoded per-driver routes that make up a solution.

mod driver;
mod problem;
mod route;
mod solution;

pub use driver::Driver;
pub use problem::CarpoolProblem;
pub use route::DriverRoute;
pub use solution::CarpoolSolution;
