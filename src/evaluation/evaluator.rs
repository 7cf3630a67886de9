//! Route evaluator that recomputes score, distance and feasibility.

use serde::Serialize;

use crate::distance::DistanceMatrix;
use crate::models::{ProblemInstance, RouteResult};

/// A type of constraint violation in a route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ViolationType {
    /// The route is empty or its first node is not the depot.
    NotStartingAtDepot,
    /// The route is empty or its last node is not the depot.
    NotEndingAtDepot,
    /// A node index outside the instance.
    UnknownNode {
        /// Offending index.
        node: usize,
    },
    /// A non-depot node appears more than once.
    DuplicateVisit {
        /// Node visited again.
        node: usize,
    },
    /// Route distance exceeds the instance budget.
    BudgetExceeded {
        /// Actual distance.
        distance: f64,
        /// Distance budget `tmax`.
        tmax: f64,
    },
}

/// A constraint violation in a route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Violation {
    /// The type of violation.
    pub kind: ViolationType,
}

impl Violation {
    /// Creates a new violation.
    pub fn new(kind: ViolationType) -> Self {
        Self { kind }
    }
}

/// Metrics recomputed for one route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteEvaluation {
    /// Sum of visited scores, depot excluded, each node counted once.
    pub score: u64,
    /// Sum of consecutive edge lengths.
    pub distance: f64,
    /// Constraint violations found.
    pub violations: Vec<Violation>,
}

impl RouteEvaluation {
    /// Returns `true` if no violations were found.
    pub fn is_feasible(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Evaluates routes against an instance.
///
/// # Examples
///
/// ```
/// use u_orienteering::models::{Node, ProblemInstance};
/// use u_orienteering::distance::DistanceMatrix;
/// use u_orienteering::evaluation::RouteEvaluator;
///
/// let instance = ProblemInstance::new(
///     vec![Node::depot(0.0, 0.0), Node::new(3.0, 4.0, 10), Node::new(6.0, 8.0, 20)],
///     1,
///     25.0,
/// );
/// let dm = DistanceMatrix::from_nodes(instance.nodes());
///
/// let evaluator = RouteEvaluator::new(&instance, &dm);
/// let eval = evaluator.evaluate(&[0, 1, 2, 0]);
/// assert_eq!(eval.score, 30);
/// assert!((eval.distance - 20.0).abs() < 1e-10);
/// assert!(eval.is_feasible());
/// ```
pub struct RouteEvaluator<'a> {
    instance: &'a ProblemInstance,
    distances: &'a DistanceMatrix,
}

impl<'a> RouteEvaluator<'a> {
    /// Creates a new evaluator for the given problem data.
    pub fn new(instance: &'a ProblemInstance, distances: &'a DistanceMatrix) -> Self {
        Self {
            instance,
            distances,
        }
    }

    /// Recomputes score and distance of a node sequence and checks it.
    pub fn evaluate(&self, route: &[usize]) -> RouteEvaluation {
        let n = self.instance.num_nodes();
        let mut violations = Vec::new();

        if route.first() != Some(&0) {
            violations.push(Violation::new(ViolationType::NotStartingAtDepot));
        }
        if route.last() != Some(&0) {
            violations.push(Violation::new(ViolationType::NotEndingAtDepot));
        }

        let mut seen = vec![false; n];
        let mut score = 0u64;
        for &node in route {
            if node >= n {
                violations.push(Violation::new(ViolationType::UnknownNode { node }));
                continue;
            }
            if node == 0 {
                continue;
            }
            if seen[node] {
                violations.push(Violation::new(ViolationType::DuplicateVisit { node }));
                continue;
            }
            seen[node] = true;
            score += u64::from(self.instance.score(node));
        }

        // Distance is only meaningful when every index exists.
        let distance = if route.iter().all(|&node| node < n) {
            self.distances.path_length(route)
        } else {
            f64::NAN
        };

        let tmax = self.instance.tmax();
        if distance > tmax || (tmax.is_nan() && !distance.is_nan()) {
            violations.push(Violation::new(ViolationType::BudgetExceeded { distance, tmax }));
        }

        RouteEvaluation {
            score,
            distance,
            violations,
        }
    }

    /// Evaluates a solver result and additionally checks that its reported
    /// totals match the recomputed ones within `tol`.
    pub fn verify(&self, result: &RouteResult, tol: f64) -> (RouteEvaluation, bool) {
        let eval = self.evaluate(&result.route);
        let totals_match =
            eval.score == result.score && (eval.distance - result.distance).abs() <= tol;
        (eval, totals_match)
    }
}
