//! Node type.

use serde::{Deserialize, Serialize};

/// A location in an orienteering problem.
///
/// Node 0 is conventionally the depot and carries a score of zero. Every
/// other node rewards the first vehicle that visits it with its score.
///
/// # Examples
///
/// ```
/// use u_orienteering::models::Node;
///
/// let depot = Node::depot(35.0, 35.0);
/// assert_eq!(depot.score(), 0);
///
/// let n = Node::new(41.0, 49.0, 10);
/// assert_eq!(n.score(), 10);
/// assert!((Node::new(0.0, 0.0, 0).distance_to(&Node::new(3.0, 4.0, 0)) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Node {
    x: f64,
    y: f64,
    score: u32,
}

impl Node {
    /// Creates a new node.
    pub fn new(x: f64, y: f64, score: u32) -> Self {
        Self { x, y, score }
    }

    /// Creates a depot at the given coordinates (score=0).
    pub fn depot(x: f64, y: f64) -> Self {
        Self::new(x, y, 0)
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Reward collected when this node is visited.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Euclidean distance to another node.
    pub fn distance_to(&self, other: &Node) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}
