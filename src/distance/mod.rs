//! Distance matrices.
//!
//! Provides a dense Euclidean distance matrix shared by route construction
//! and route evaluation.

mod matrix;

pub use matrix::DistanceMatrix;
