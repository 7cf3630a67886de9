//! Completed route type.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// A closed route assigned to a single vehicle, with its aggregate score and
/// travel distance.
///
/// The node sequence starts and ends at the depot (index 0); a vehicle that
/// never leaves the depot has the route `[0, 0]`.
///
/// Routes are ranked by a single total order: higher score is better, and
/// among equal scores the shorter distance is better.
///
/// # Examples
///
/// ```
/// use u_orienteering::models::RouteResult;
///
/// let a = RouteResult::new(0, vec![0, 1, 0], 10, 8.0);
/// let b = RouteResult::new(0, vec![0, 2, 0], 10, 6.0);
/// assert!(b.is_better_than(&a));
/// assert_eq!(a.num_visits(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteResult {
    /// Vehicle (ant slot) that produced this route.
    pub vehicle_index: usize,
    /// Node indices in visit order, depot at both ends.
    pub route: Vec<usize>,
    /// Sum of the visited nodes' scores (depot excluded).
    pub score: u64,
    /// Sum of consecutive Euclidean edge lengths.
    pub distance: f64,
}

impl RouteResult {
    /// Creates a new route result.
    pub fn new(vehicle_index: usize, route: Vec<usize>, score: u64, distance: f64) -> Self {
        Self {
            vehicle_index,
            route,
            score,
            distance,
        }
    }

    /// The route of a vehicle that stays at the depot.
    pub fn depot_only(vehicle_index: usize) -> Self {
        Self::new(vehicle_index, vec![0, 0], 0, 0.0)
    }

    /// Number of non-depot visits.
    pub fn num_visits(&self) -> usize {
        self.route.iter().filter(|&&n| n != 0).count()
    }

    /// Compares route quality: `Greater` means `self` is the better route.
    pub fn quality_cmp(&self, other: &Self) -> Ordering {
        compare_quality(self.score, self.distance, other.score, other.distance)
    }

    /// Returns `true` if `self` strictly improves on `other`.
    pub fn is_better_than(&self, other: &Self) -> bool {
        self.quality_cmp(other) == Ordering::Greater
    }
}

/// Total order on `(score, distance)` pairs: score descending, then distance
/// ascending. `Greater` means the left pair is better.
pub fn compare_quality(score: u64, distance: f64, other_score: u64, other_distance: f64) -> Ordering {
    score
        .cmp(&other_score)
        .then_with(|| other_distance.total_cmp(&distance))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depot_only() {
        let r = RouteResult::depot_only(3);
        assert_eq!(r.route, vec![0, 0]);
        assert_eq!(r.score, 0);
        assert_eq!(r.distance, 0.0);
        assert_eq!(r.vehicle_index, 3);
        assert_eq!(r.num_visits(), 0);
    }

    #[test]
    fn test_higher_score_wins() {
        let a = RouteResult::new(0, vec![0, 1, 0], 20, 50.0);
        let b = RouteResult::new(0, vec![0, 2, 0], 10, 5.0);
        assert!(a.is_better_than(&b));
        assert!(!b.is_better_than(&a));
    }

    #[test]
    fn test_equal_score_shorter_wins() {
        let a = RouteResult::new(0, vec![0, 1, 0], 10, 5.0);
        let b = RouteResult::new(0, vec![0, 2, 0], 10, 6.0);
        assert!(a.is_better_than(&b));
        assert_eq!(b.quality_cmp(&a), Ordering::Less);
    }

    #[test]
    fn test_exact_tie_is_not_improvement() {
        let a = RouteResult::new(0, vec![0, 1, 0], 10, 5.0);
        let b = RouteResult::new(1, vec![0, 1, 0], 10, 5.0);
        assert_eq!(a.quality_cmp(&b), Ordering::Equal);
        assert!(!a.is_better_than(&b));
    }

    #[test]
    fn test_compare_quality_pairs() {
        assert_eq!(compare_quality(5, 1.0, 4, 0.5), Ordering::Greater);
        assert_eq!(compare_quality(5, 1.0, 5, 0.5), Ordering::Less);
        assert_eq!(compare_quality(0, 0.0, 0, 0.0), Ordering::Equal);
    }
}
