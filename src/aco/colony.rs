//! Iteration loop of the colony.

use std::cmp::Ordering;

use rand::Rng;

use crate::distance::DistanceMatrix;
use crate::error::{OrienteeringError, Result};
use crate::models::{compare_quality, ProblemInstance, RouteResult};

use super::ant::{Ant, AntContext};
use super::config::{AcoConfig, BestTracking};
use super::pheromone::PheromoneMatrix;

/// State of one ACO run over a problem instance.
///
/// Each iteration has two phases. In the read phase one ant per vehicle
/// (slot 0, 1, ... in order) builds a route against the current pheromone
/// matrix. In the write phase the colony evaporates the matrix once,
/// reinforces the edges of every route with positive length, and updates
/// the best-known routes. Ants never write to the matrix.
///
/// With [`BestTracking::PerVehicle`] and shared node exclusion, the
/// per-vehicle bests are replaced together by the routes of a single
/// iteration, ranked by total score and then total distance. The best
/// routes therefore never share a node.
///
/// # Examples
///
/// ```
/// use u_orienteering::aco::{AcoConfig, Colony};
/// use u_orienteering::models::{Node, ProblemInstance};
/// use rand::SeedableRng;
///
/// let instance = ProblemInstance::new(
///     vec![Node::depot(0.0, 0.0), Node::new(1.0, 0.0, 5), Node::new(0.0, 1.0, 7)],
///     1,
///     10.0,
/// );
/// let config = AcoConfig::default().with_max_iterations(20);
/// let mut colony = Colony::new(&instance, &config).unwrap();
/// let mut rng = rand::rngs::StdRng::seed_from_u64(42);
/// let history = colony.run(&mut rng);
/// assert_eq!(history.len(), 20);
/// assert_eq!(colony.best_routes()[0].score, 12);
/// ```
#[derive(Debug, Clone)]
pub struct Colony<'a> {
    instance: &'a ProblemInstance,
    config: &'a AcoConfig,
    distances: DistanceMatrix,
    pheromones: PheromoneMatrix,
    best: Vec<Option<RouteResult>>,
    iterations: usize,
}

impl<'a> Colony<'a> {
    /// Prepares a run: validates the configuration, precomputes distances and
    /// initializes the pheromone matrix.
    pub fn new(instance: &'a ProblemInstance, config: &'a AcoConfig) -> Result<Self> {
        config.validate().map_err(OrienteeringError::InvalidConfig)?;
        if instance.num_nodes() == 0 {
            return Err(OrienteeringError::EmptyInstance);
        }

        let n = instance.num_nodes();
        let mut pheromones = PheromoneMatrix::new(n, config.initial_pheromone);
        if let Some(floor) = config.min_pheromone {
            pheromones = pheromones.with_floor(floor);
        }
        let slots = match config.best_tracking {
            BestTracking::PerVehicle => instance.vehicle_count(),
            BestTracking::Global => 1,
        };

        Ok(Self {
            instance,
            config,
            distances: DistanceMatrix::from_nodes(instance.nodes()),
            pheromones,
            best: vec![None; slots],
            iterations: 0,
        })
    }

    /// Runs `max_iterations` iterations and returns the aggregate best score
    /// recorded after each one.
    pub fn run<R: Rng>(&mut self, rng: &mut R) -> Vec<u64> {
        let mut history = Vec::with_capacity(self.config.max_iterations);
        for _ in 0..self.config.max_iterations {
            self.iterate(rng);
            history.push(self.best_score());
        }
        history
    }

    /// Performs a single iteration and returns the routes its ants built,
    /// in vehicle order.
    pub fn iterate<R: Rng>(&mut self, rng: &mut R) -> Vec<RouteResult> {
        let routes = self.construct_routes(rng);

        self.pheromones.evaporate(self.config.evaporation_rate);
        for r in &routes {
            self.pheromones
                .reinforce_route(&r.route, r.distance, self.config.q);
        }

        match self.config.best_tracking {
            BestTracking::PerVehicle if self.config.shared_node_exclusion => {
                self.record_team(&routes);
            }
            _ => routes.iter().for_each(|r| self.record(r)),
        }
        self.iterations += 1;
        routes
    }

    /// Read phase: every ant sees the same pheromone snapshot.
    fn construct_routes<R: Rng>(&self, rng: &mut R) -> Vec<RouteResult> {
        let n = self.instance.num_nodes();
        let ctx = AntContext {
            instance: self.instance,
            distances: &self.distances,
            pheromones: &self.pheromones,
            alpha: self.config.alpha,
            beta: self.config.beta,
        };

        let mut claimed = vec![false; n];
        let mut routes = Vec::with_capacity(self.instance.vehicle_count());
        for v in 0..self.instance.vehicle_count() {
            let mut ant = Ant::new(v, n);
            let shared = if self.config.shared_node_exclusion {
                Some(claimed.as_mut_slice())
            } else {
                None
            };
            ant.construct(&ctx, shared, rng);
            routes.push(ant.into_result());
        }
        routes
    }

    /// Replaces the best route of the matching slot on strict improvement.
    fn record(&mut self, candidate: &RouteResult) {
        let slot = match self.config.best_tracking {
            BestTracking::PerVehicle => candidate.vehicle_index,
            BestTracking::Global => 0,
        };
        let Some(entry) = self.best.get_mut(slot) else {
            return;
        };
        let improves = entry
            .as_ref()
            .is_none_or(|current| candidate.is_better_than(current));
        if improves {
            *entry = Some(candidate.clone());
        }
    }

    /// Replaces every per-vehicle best at once if `routes`, taken as a team,
    /// strictly improves on the current bests.
    fn record_team(&mut self, routes: &[RouteResult]) {
        let score: u64 = routes.iter().map(|r| r.score).sum();
        let distance: f64 = routes.iter().map(|r| r.distance).sum();
        let best_distance: f64 = self.best.iter().flatten().map(|r| r.distance).sum();

        let improves = self.best.iter().any(Option::is_none)
            || compare_quality(score, distance, self.best_score(), best_distance)
                == Ordering::Greater;
        if improves {
            for r in routes {
                if let Some(entry) = self.best.get_mut(r.vehicle_index) {
                    *entry = Some(r.clone());
                }
            }
        }
    }

    /// Best routes found so far: one per vehicle, or a single one in
    /// [`BestTracking::Global`] mode. Empty before the first iteration.
    pub fn best_routes(&self) -> Vec<RouteResult> {
        self.best.iter().flatten().cloned().collect()
    }

    /// Sum of the best routes' scores.
    pub fn best_score(&self) -> u64 {
        self.best.iter().flatten().map(|r| r.score).sum()
    }

    /// Current pheromone matrix.
    pub fn pheromones(&self) -> &PheromoneMatrix {
        &self.pheromones
    }

    /// Iterations performed so far.
    pub fn iterations(&self) -> usize {
        self.iterations
    }
}
