//! Distance matrix.
//!
//! Travel costs are precomputed by the caller and supplied as a dense
//! matrix; the engine only reads them.

mod matrix;

pub use matrix::DistanceMatrix;
