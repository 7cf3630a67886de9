//! Pheromone matrix.

/// Dense symmetric matrix of edge desirabilities.
///
/// Every entry starts at the same positive value. The matrix is only ever
/// changed by [`evaporate`](Self::evaporate), which scales all entries
/// uniformly, and [`add_pheromone`](Self::add_pheromone), which writes both
/// `(i, j)` and `(j, i)`, so it stays symmetric.
///
/// # Examples
///
/// ```
/// use u_orienteering::aco::PheromoneMatrix;
///
/// let mut tau = PheromoneMatrix::new(3, 0.1);
/// tau.evaporate(0.5);
/// tau.add_pheromone(0, 2, 1.0);
/// assert!((tau.get(2, 0) - 1.05).abs() < 1e-10);
/// assert!((tau.get(0, 1) - 0.05).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct PheromoneMatrix {
    data: Vec<f64>,
    size: usize,
    floor: Option<f64>,
}

impl PheromoneMatrix {
    /// Creates a `size`×`size` matrix filled with `initial`.
    pub fn new(size: usize, initial: f64) -> Self {
        Self {
            data: vec![initial; size * size],
            size,
            floor: None,
        }
    }

    /// Sets a lower bound that [`evaporate`](Self::evaporate) never goes below.
    pub fn with_floor(mut self, floor: f64) -> Self {
        self.floor = Some(floor);
        self
    }

    /// Pheromone on edge `(from, to)`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Number of nodes covered by this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Multiplies every entry by `1 - rate`, then applies the floor if set.
    pub fn evaporate(&mut self, rate: f64) {
        let keep = 1.0 - rate;
        match self.floor {
            Some(floor) => self.data.iter_mut().for_each(|t| *t = (*t * keep).max(floor)),
            None => self.data.iter_mut().for_each(|t| *t *= keep),
        }
    }

    /// Adds `amount` to both `(i, j)` and `(j, i)`.
    pub fn add_pheromone(&mut self, i: usize, j: usize, amount: f64) {
        self.data[i * self.size + j] += amount;
        if i != j {
            self.data[j * self.size + i] += amount;
        }
    }

    /// Deposits `q / distance` on every consecutive edge of `route`.
    ///
    /// Routes with non-positive (or non-finite) distance deposit nothing.
    /// Returns `true` if a deposit happened.
    pub fn reinforce_route(&mut self, route: &[usize], distance: f64, q: f64) -> bool {
        if !(distance.is_finite() && distance > 0.0) {
            return false;
        }
        let amount = q / distance;
        for edge in route.windows(2) {
            self.add_pheromone(edge[0], edge[1], amount);
        }
        true
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }
}
