//! Route evaluation.
//!
//! Recomputes a route's score and distance from node coordinates and checks
//! it against the depot and budget constraints.

mod evaluator;

pub use evaluator::{RouteEvaluation, RouteEvaluator, Violation, ViolationType};
