//! Stochastic route construction for a single vehicle.
//!
//! An ant starts at the depot and repeatedly samples the next node with
//! probability proportional to `tau(i, j)^alpha * eta(i, j)^beta`, where
//! `eta(i, j) = score(j) / distance(i, j)`. Only the sampled node is
//! checked against the distance budget; if going there and then home would
//! exceed `tmax`, the ant stops and returns to the depot.
//!
//! # Reference
//!
//! Dorigo, M., Maniezzo, V. & Colorni, A. (1996). "Ant system: optimization
//! by a colony of cooperating agents", *IEEE Trans. SMC-B* 26(1), 29-41.

use rand::Rng;

use crate::distance::DistanceMatrix;
use crate::models::{ProblemInstance, RouteResult};

use super::pheromone::PheromoneMatrix;

/// Smallest edge length used by the heuristic, so coincident nodes do not
/// divide by zero.
const MIN_HEURISTIC_DISTANCE: f64 = 1e-9;

/// Read-only data shared by every ant of an iteration.
#[derive(Debug, Clone, Copy)]
pub struct AntContext<'a> {
    pub instance: &'a ProblemInstance,
    pub distances: &'a DistanceMatrix,
    pub pheromones: &'a PheromoneMatrix,
    pub alpha: f64,
    pub beta: f64,
}

impl AntContext<'_> {
    /// Greedy desirability of moving to `to`: reward per unit of travel.
    pub fn heuristic(&self, from: usize, to: usize) -> f64 {
        let d = self.distances.get(from, to).max(MIN_HEURISTIC_DISTANCE);
        f64::from(self.instance.score(to)) / d
    }

    /// Selection weight `tau^alpha * eta^beta` of edge `(from, to)`.
    pub fn weight(&self, from: usize, to: usize) -> f64 {
        let tau = self.pheromones.get(from, to).powf(self.alpha);
        let eta = self.heuristic(from, to).powf(self.beta);
        tau * eta
    }
}

/// Route builder for one vehicle in one iteration.
///
/// # Examples
///
/// ```
/// use u_orienteering::aco::{Ant, AntContext, PheromoneMatrix};
/// use u_orienteering::distance::DistanceMatrix;
/// use u_orienteering::models::{Node, ProblemInstance};
/// use rand::SeedableRng;
///
/// let instance = ProblemInstance::new(
///     vec![Node::depot(0.0, 0.0), Node::new(3.0, 4.0, 10)],
///     1,
///     20.0,
/// );
/// let distances = DistanceMatrix::from_nodes(instance.nodes());
/// let pheromones = PheromoneMatrix::new(instance.num_nodes(), 0.1);
/// let ctx = AntContext { instance: &instance, distances: &distances, pheromones: &pheromones, alpha: 1.0, beta: 5.0 };
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(42);
/// let mut ant = Ant::new(0, instance.num_nodes());
/// ant.construct(&ctx, None, &mut rng);
/// assert_eq!(ant.route(), &[0, 1, 0]);
/// assert_eq!(ant.score(), 10);
/// ```
#[derive(Debug, Clone)]
pub struct Ant {
    vehicle_index: usize,
    route: Vec<usize>,
    visited: Vec<bool>,
    distance: f64,
    score: u64,
}

impl Ant {
    /// Creates an ant for the given vehicle slot on an instance of `num_nodes` nodes.
    pub fn new(vehicle_index: usize, num_nodes: usize) -> Self {
        Self {
            vehicle_index,
            route: Vec::with_capacity(num_nodes + 1),
            visited: vec![false; num_nodes],
            distance: 0.0,
            score: 0,
        }
    }

    /// Builds a closed route from the depot.
    ///
    /// `shared_visited`, when given, holds nodes already claimed by other
    /// vehicles this iteration. Those nodes are not candidates, and every
    /// node this ant visits is added to it.
    ///
    /// Consumes exactly one random draw per sampling step whose candidate
    /// weights sum to a positive finite value.
    ///
    /// # Panics
    ///
    /// Panics if the instance has no nodes or does not match the size the
    /// ant was created for.
    pub fn construct<R: Rng>(
        &mut self,
        ctx: &AntContext<'_>,
        mut shared_visited: Option<&mut [bool]>,
        rng: &mut R,
    ) {
        let n = ctx.instance.num_nodes();
        let tmax = ctx.instance.tmax();
        let depot = 0;

        self.route.push(depot);
        self.visited[depot] = true;
        let mut current = depot;

        let mut candidates: Vec<usize> = Vec::with_capacity(n);
        let mut weights: Vec<f64> = Vec::with_capacity(n);

        loop {
            candidates.clear();
            weights.clear();
            let claimed = shared_visited.as_deref();
            for j in 1..n {
                if self.visited[j] || claimed.is_some_and(|s| s[j]) {
                    continue;
                }
                candidates.push(j);
                weights.push(ctx.weight(current, j));
            }
            if candidates.is_empty() {
                break;
            }

            let next = candidates[roulette_select(&weights, rng)];
            let step = ctx.distances.get(current, next);
            let total = self.distance + step + ctx.distances.get(next, depot);
            if tmax.is_nan() || total > tmax {
                break;
            }

            self.distance += step;
            self.score += u64::from(ctx.instance.score(next));
            self.route.push(next);
            self.visited[next] = true;
            if let Some(shared) = shared_visited.as_deref_mut() {
                shared[next] = true;
            }
            current = next;
        }

        self.distance += ctx.distances.get(current, depot);
        self.route.push(depot);
    }

    /// Vehicle slot this ant builds for.
    pub fn vehicle_index(&self) -> usize {
        self.vehicle_index
    }

    /// Node sequence, depot at both ends once construction finished.
    pub fn route(&self) -> &[usize] {
        &self.route
    }

    /// Total distance including the return leg.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Sum of collected scores.
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Converts the finished ant into a route record.
    pub fn into_result(self) -> RouteResult {
        RouteResult::new(self.vehicle_index, self.route, self.score, self.distance)
    }
}

/// Roulette-wheel selection over non-negative weights.
///
/// Returns the first index whose cumulative weight exceeds a uniform draw
/// in `[0, total)`. When the total is zero or not finite, the last index is
/// returned and no random value is drawn.
///
/// # Panics
///
/// Panics if `weights` is empty.
pub fn roulette_select<R: Rng>(weights: &[f64], rng: &mut R) -> usize {
    let last = weights.len() - 1;
    let total: f64 = weights.iter().sum();
    if !(total.is_finite() && total > 0.0) {
        return last;
    }

    let threshold = rng.random::<f64>() * total;
    let mut cumulative = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        cumulative += w;
        if cumulative > threshold {
            return i;
        }
    }

    last // floating-point fallback
}
