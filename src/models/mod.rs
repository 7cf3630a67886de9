//! Domain model types for team orienteering problems.
//!
//! Provides the scored nodes, the problem instance that ties them to a
//! vehicle count and a distance budget, and the closed route records that
//! solvers hand back.

mod instance;
mod node;
mod route;

pub use instance::ProblemInstance;
pub use node::Node;
pub use route::{compare_quality, RouteResult};
