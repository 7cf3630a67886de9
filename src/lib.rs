//! # u-orienteering
//!
//! Team orienteering optimization: several vehicles leave a depot, collect
//! rewards from the nodes they visit, and must each return within a travel
//! budget. Routes are built with Ant Colony Optimization.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Node, ProblemInstance, RouteResult)
//! - [`distance`] — Precomputed Euclidean distance matrix
//! - [`aco`] — Pheromone matrix, ants, colony loop and batch runner
//! - [`evaluation`] — Route recomputation and constraint checking
//! - [`parser`] — Keyed text problem-file reader
//! - [`error`] — Error type shared by the above

pub mod aco;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod models;
pub mod parser;

pub use error::{OrienteeringError, Result};
