//! ACO configuration.

use serde::{Deserialize, Serialize};

/// How best-known routes are tracked across iterations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BestTracking {
    /// One best route per vehicle slot, each compared only against routes
    /// built for the same slot.
    #[default]
    PerVehicle,

    /// A single best route over all vehicles and iterations.
    Global,
}

/// Configuration for the Ant Colony Optimization solver.
///
/// # Examples
///
/// ```
/// use u_orienteering::aco::{AcoConfig, BestTracking};
///
/// let config = AcoConfig::default()
///     .with_alpha(1.0)
///     .with_beta(5.0)
///     .with_evaporation_rate(0.5)
///     .with_max_iterations(200)
///     .with_best_tracking(BestTracking::Global)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AcoConfig {
    /// Pheromone influence exponent. Typical range 0–5.
    pub alpha: f64,

    /// Heuristic (score per distance) influence exponent. Typical range 0–10.
    pub beta: f64,

    /// Fraction of pheromone removed each iteration, in `[0, 1]`.
    pub evaporation_rate: f64,

    /// Reinforcement scale: each edge of a route of length `d` receives `q / d`.
    pub q: f64,

    /// Value every pheromone entry starts from.
    pub initial_pheromone: f64,

    /// Optional lower bound applied after evaporation. `None` = no clamping.
    pub min_pheromone: Option<f64>,

    /// Iterations per run.
    pub max_iterations: usize,

    /// Independent runs in a batch (best-of-N).
    pub runs_per_instance: usize,

    /// Random seed for reproducibility. `None` draws a fresh seed.
    pub seed: Option<u64>,

    /// When `true`, a node visited by one vehicle in an iteration is
    /// unavailable to the vehicles that build after it in that iteration,
    /// and per-vehicle bests are kept as one node-disjoint team.
    pub shared_node_exclusion: bool,

    /// Best-route bookkeeping mode.
    pub best_tracking: BestTracking,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            beta: 5.0,
            evaporation_rate: 0.5,
            q: 100.0,
            initial_pheromone: 0.1,
            min_pheromone: None,
            max_iterations: 100,
            runs_per_instance: 10,
            seed: None,
            shared_node_exclusion: true,
            best_tracking: BestTracking::PerVehicle,
        }
    }
}

impl AcoConfig {
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    pub fn with_evaporation_rate(mut self, rate: f64) -> Self {
        self.evaporation_rate = rate;
        self
    }

    pub fn with_q(mut self, q: f64) -> Self {
        self.q = q;
        self
    }

    pub fn with_initial_pheromone(mut self, tau0: f64) -> Self {
        self.initial_pheromone = tau0;
        self
    }

    pub fn with_min_pheromone(mut self, floor: f64) -> Self {
        self.min_pheromone = Some(floor);
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_runs_per_instance(mut self, n: usize) -> Self {
        self.runs_per_instance = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_shared_node_exclusion(mut self, enabled: bool) -> Self {
        self.shared_node_exclusion = enabled;
        self
    }

    pub fn with_best_tracking(mut self, tracking: BestTracking) -> Self {
        self.best_tracking = tracking;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !self.alpha.is_finite() || self.alpha < 0.0 {
            return Err(format!("alpha must be finite and >= 0, got {}", self.alpha));
        }
        if !self.beta.is_finite() || self.beta < 0.0 {
            return Err(format!("beta must be finite and >= 0, got {}", self.beta));
        }
        if !(0.0..=1.0).contains(&self.evaporation_rate) {
            return Err(format!(
                "evaporation_rate must be in [0, 1], got {}",
                self.evaporation_rate
            ));
        }
        if !self.q.is_finite() || self.q <= 0.0 {
            return Err(format!("q must be finite and positive, got {}", self.q));
        }
        if !self.initial_pheromone.is_finite() || self.initial_pheromone <= 0.0 {
            return Err(format!(
                "initial_pheromone must be finite and positive, got {}",
                self.initial_pheromone
            ));
        }
        if let Some(floor) = self.min_pheromone {
            if !floor.is_finite() || floor < 0.0 {
                return Err(format!("min_pheromone must be finite and >= 0, got {floor}"));
            }
            if floor > self.initial_pheromone {
                return Err("min_pheromone must not exceed initial_pheromone".into());
            }
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be positive".into());
        }
        if self.runs_per_instance == 0 {
            return Err("runs_per_instance must be positive".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AcoConfig::default();
        assert!((config.alpha - 1.0).abs() < 1e-10);
        assert!((config.beta - 5.0).abs() < 1e-10);
        assert!((config.evaporation_rate - 0.5).abs() < 1e-10);
        assert!((config.q - 100.0).abs() < 1e-10);
        assert!((config.initial_pheromone - 0.1).abs() < 1e-10);
        assert_eq!(config.max_iterations, 100);
        assert_eq!(config.runs_per_instance, 10);
        assert!(config.shared_node_exclusion);
        assert_eq!(config.best_tracking, BestTracking::PerVehicle);
        assert!(config.min_pheromone.is_none());
    }

    #[test]
    fn test_validate_ok() {
        assert!(AcoConfig::default().validate().is_ok());
        assert!(AcoConfig::default()
            .with_evaporation_rate(1.0)
            .with_alpha(0.0)
            .with_beta(0.0)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_validate_bad_evaporation() {
        assert!(AcoConfig::default().with_evaporation_rate(1.5).validate().is_err());
        assert!(AcoConfig::default().with_evaporation_rate(-0.1).validate().is_err());
        assert!(AcoConfig::default()
            .with_evaporation_rate(f64::NAN)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_bad_exponents() {
        assert!(AcoConfig::default().with_alpha(-1.0).validate().is_err());
        assert!(AcoConfig::default().with_beta(f64::INFINITY).validate().is_err());
    }

    #[test]
    fn test_validate_bad_q() {
        assert!(AcoConfig::default().with_q(0.0).validate().is_err());
    }

    #[test]
    fn test_validate_floor_above_initial() {
        let config = AcoConfig::default()
            .with_initial_pheromone(0.1)
            .with_min_pheromone(0.5);
        assert!(config.validate().is_err());
        assert!(AcoConfig::default().with_min_pheromone(0.01).validate().is_ok());
    }

    #[test]
    fn test_validate_zero_counts() {
        assert!(AcoConfig::default().with_max_iterations(0).validate().is_err());
        assert!(AcoConfig::default().with_runs_per_instance(0).validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: AcoConfig =
            serde_json::from_str(r#"{"beta": 2.0, "best_tracking": "global"}"#).expect("valid");
        assert!((config.beta - 2.0).abs() < 1e-10);
        assert_eq!(config.best_tracking, BestTracking::Global);
        assert_eq!(config.max_iterations, 100);
    }
}
