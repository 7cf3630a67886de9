//! ACO execution: single runs and best-of-N batches.

use std::cmp::Ordering;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::error::{OrienteeringError, Result};
use crate::models::{compare_quality, ProblemInstance, RouteResult};

use super::colony::Colony;
use super::config::AcoConfig;

/// Result of a single ACO run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AcoResult {
    /// Best routes: one per vehicle, or a single global best.
    pub routes: Vec<RouteResult>,

    /// Iterations performed.
    pub iterations: usize,

    /// Aggregate best score after each iteration (non-decreasing).
    pub score_history: Vec<u64>,

    /// Seed the run's generator was created from.
    pub seed: u64,
}

impl AcoResult {
    /// Sum of the best routes' scores.
    pub fn total_score(&self) -> u64 {
        self.routes.iter().map(|r| r.score).sum()
    }

    /// Sum of the best routes' distances.
    pub fn total_distance(&self) -> f64 {
        self.routes.iter().map(|r| r.distance).sum()
    }

    /// Compares runs by total score, then total distance. `Greater` = better.
    pub fn quality_cmp(&self, other: &Self) -> Ordering {
        compare_quality(
            self.total_score(),
            self.total_distance(),
            other.total_score(),
            other.total_distance(),
        )
    }

    /// Returns `true` if `self` strictly improves on `other`.
    pub fn is_better_than(&self, other: &Self) -> bool {
        self.quality_cmp(other) == Ordering::Greater
    }
}

/// Totals of one run inside a batch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RunSummary {
    pub seed: u64,
    pub score: u64,
    pub distance: f64,
}

/// Result of a best-of-N batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchResult {
    /// Best run of the batch.
    pub best: AcoResult,

    /// Index of the best run (first one on exact ties).
    pub best_run: usize,

    /// Totals of every run, in execution order.
    pub runs: Vec<RunSummary>,
}

/// Executes the Ant Colony Optimization algorithm.
///
/// # Examples
///
/// ```
/// use u_orienteering::aco::{AcoConfig, AcoRunner};
/// use u_orienteering::models::{Node, ProblemInstance};
///
/// let instance = ProblemInstance::new(
///     vec![Node::depot(0.0, 0.0), Node::new(1.0, 0.0, 5), Node::new(0.0, 1.0, 7)],
///     1,
///     10.0,
/// );
/// let config = AcoConfig::default()
///     .with_max_iterations(20)
///     .with_runs_per_instance(3)
///     .with_seed(42);
///
/// let batch = AcoRunner::run_batch(&instance, &config).unwrap();
/// assert_eq!(batch.runs.len(), 3);
/// assert_eq!(batch.best.total_score(), 12);
/// ```
pub struct AcoRunner;

impl AcoRunner {
    /// Runs ACO once, seeded from `config.seed` (or a random seed).
    pub fn run(instance: &ProblemInstance, config: &AcoConfig) -> Result<AcoResult> {
        let seed = config.seed.unwrap_or_else(rand::random);
        Self::run_seeded(instance, config, seed)
    }

    /// Runs ACO once with an explicit seed, ignoring `config.seed`.
    pub fn run_seeded(
        instance: &ProblemInstance,
        config: &AcoConfig,
        seed: u64,
    ) -> Result<AcoResult> {
        let mut colony = Colony::new(instance, config)?;
        let mut rng = StdRng::seed_from_u64(seed);
        let score_history = colony.run(&mut rng);

        Ok(AcoResult {
            routes: colony.best_routes(),
            iterations: colony.iterations(),
            score_history,
            seed,
        })
    }

    /// Performs `runs_per_instance` independent runs and keeps the best.
    ///
    /// Run `k` is seeded with `base.wrapping_add(k)`, where `base` is
    /// `config.seed` or one random value per batch.
    pub fn run_batch(instance: &ProblemInstance, config: &AcoConfig) -> Result<BatchResult> {
        config.validate().map_err(OrienteeringError::InvalidConfig)?;
        let base = config.seed.unwrap_or_else(rand::random);
        let mut runs = Vec::with_capacity(config.runs_per_instance);
        let mut best: Option<(usize, AcoResult)> = None;

        for k in 0..config.runs_per_instance {
            let result = Self::run_seeded(instance, config, base.wrapping_add(k as u64))?;
            runs.push(RunSummary {
                seed: result.seed,
                score: result.total_score(),
                distance: result.total_distance(),
            });

            let improves = best
                .as_ref()
                .is_none_or(|(_, current)| result.is_better_than(current));
            if improves {
                best = Some((k, result));
            }
        }

        match best {
            Some((best_run, best)) => Ok(BatchResult {
                best,
                best_run,
                runs,
            }),
            None => Err(OrienteeringError::InvalidConfig(
                "runs_per_instance must be positive".into(),
            )),
        }
    }
}
