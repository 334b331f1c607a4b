//! Fitness evaluation and chromosome decoding.

mod evaluator;

pub use evaluator::RouteEvaluator;
