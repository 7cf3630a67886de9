//! Problem instance.

use serde::{Deserialize, Serialize};

use super::Node;

/// A team orienteering problem instance.
///
/// Holds the nodes (index 0 = depot), the number of vehicles, and the
/// distance budget `tmax` that each single route must respect, return leg
/// included. The instance is not validated on construction: a file whose
/// header disagrees with its body still produces a usable instance, and the
/// solver decides what it can do with it.
///
/// # Examples
///
/// ```
/// use u_orienteering::models::{Node, ProblemInstance};
///
/// let instance = ProblemInstance::new(
///     vec![Node::depot(0.0, 0.0), Node::new(3.0, 4.0, 10)],
///     2,
///     20.0,
/// );
/// assert_eq!(instance.num_nodes(), 2);
/// assert_eq!(instance.vehicle_count(), 2);
/// assert_eq!(instance.score(1), 10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemInstance {
    nodes: Vec<Node>,
    vehicle_count: usize,
    tmax: f64,
}

impl ProblemInstance {
    /// Creates a new instance.
    pub fn new(nodes: Vec<Node>, vehicle_count: usize, tmax: f64) -> Self {
        Self {
            nodes,
            vehicle_count,
            tmax,
        }
    }

    /// All nodes in index order (index 0 = depot).
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Returns the node at `index`.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of bounds.
    pub fn node(&self, index: usize) -> &Node {
        &self.nodes[index]
    }

    /// Score of the node at `index`.
    pub fn score(&self, index: usize) -> u32 {
        self.nodes[index].score()
    }

    /// Number of nodes, depot included.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Number of vehicles (one route each).
    pub fn vehicle_count(&self) -> usize {
        self.vehicle_count
    }

    /// Distance budget of a single route.
    pub fn tmax(&self) -> f64 {
        self.tmax
    }

    /// Sum of all node scores, the upper bound of any solution.
    pub fn total_score(&self) -> u64 {
        self.nodes.iter().map(|n| u64::from(n.score())).sum()
    }
}
