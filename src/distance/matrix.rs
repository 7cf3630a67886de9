//! Dense distance matrix.

use crate::models::Node;

/// A dense n×n Euclidean distance matrix stored in row-major order.
///
/// Computed once per instance so route construction and evaluation read
/// identical edge lengths, which keeps accumulated and recomputed route
/// distances bit-for-bit equal.
///
/// # Examples
///
/// ```
/// use u_orienteering::models::Node;
/// use u_orienteering::distance::DistanceMatrix;
///
/// let nodes = vec![
///     Node::depot(0.0, 0.0),
///     Node::new(3.0, 4.0, 10),
///     Node::new(6.0, 8.0, 20),
/// ];
/// let dm = DistanceMatrix::from_nodes(&nodes);
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Computes a Euclidean distance matrix from node coordinates.
    ///
    /// The diagonal is zero and `get(i, j) == get(j, i)` holds exactly.
    pub fn from_nodes(nodes: &[Node]) -> Self {
        let size = nodes.len();
        let mut data = vec![0.0; size * size];
        for (i, a) in nodes.iter().enumerate() {
            for (j, b) in nodes.iter().enumerate().skip(i + 1) {
                let d = a.distance_to(b);
                data[i * size + j] = d;
                data[j * size + i] = d;
            }
        }
        Self { data, size }
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Length of a node sequence: the sum of its consecutive edges.
    pub fn path_length(&self, path: &[usize]) -> f64 {
        path.windows(2).map(|w| self.get(w[0], w[1])).sum()
    }
}
