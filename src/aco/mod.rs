//! Ant Colony Optimization (ACO) for team orienteering.
//!
//! A population-based metaheuristic: in every iteration one ant per vehicle
//! builds a budget-feasible route from the depot, guided by a shared
//! pheromone matrix and a greedy score-per-distance heuristic. After all
//! ants have finished, the matrix evaporates and the completed routes
//! reinforce their edges with `q / route_distance`.
//!
//! Randomness flows through a single generator, consumed by vehicle 0, 1,
//! ... in order, so a fixed seed reproduces every route exactly.
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
//!   Colony of Cooperating Agents"
//! - Ke, Archetti & Feng (2008), "Ants can solve the team orienteering
//!   problem"

mod ant;
mod colony;
mod config;
mod pheromone;
mod runner;

pub use ant::{roulette_select, Ant, AntContext};
pub use colony::Colony;
pub use config::{AcoConfig, BestTracking};
pub use pheromone::PheromoneMatrix;
pub use runner::{AcoResult, AcoRunner, BatchResult, RunSummary};
