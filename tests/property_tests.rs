//! Property-based tests for u-orienteering.
//!
//! Uses proptest to verify route and pheromone invariants across many
//! random instances.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use u_orienteering::aco::{AcoConfig, AcoRunner, BestTracking, Colony, PheromoneMatrix};
use u_orienteering::distance::DistanceMatrix;
use u_orienteering::evaluation::RouteEvaluator;
use u_orienteering::models::{Node, ProblemInstance};

// ============================================================================
// Instance Generation Strategies
// ============================================================================

/// Random scored nodes; the first one becomes the depot.
fn random_nodes(n: usize) -> impl Strategy<Value = Vec<Node>> {
    prop::collection::vec((0.0..100.0f64, 0.0..100.0f64, 0u32..50), n).prop_map(|raw| {
        raw.into_iter()
            .enumerate()
            .map(|(i, (x, y, s))| if i == 0 { Node::depot(x, y) } else { Node::new(x, y, s) })
            .collect()
    })
}

/// Random instance with 1-15 nodes, 1-4 vehicles and a budget of 0-300.
fn random_instance() -> impl Strategy<Value = ProblemInstance> {
    (1usize..15, 1usize..5, 0.0..300.0f64).prop_flat_map(|(n, m, tmax)| {
        random_nodes(n).prop_map(move |nodes| ProblemInstance::new(nodes, m, tmax))
    })
}

fn small_config(seed: u64, exclusion: bool) -> AcoConfig {
    AcoConfig::default()
        .with_max_iterations(8)
        .with_seed(seed)
        .with_shared_node_exclusion(exclusion)
}

// ============================================================================
// Route Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(40))]

    #[test]
    fn prop_iteration_routes_are_closed_feasible_and_consistent(
        instance in random_instance(),
        seed in any::<u64>(),
        exclusion in any::<bool>()
    ) {
        let config = small_config(seed, exclusion);
        let mut colony = Colony::new(&instance, &config).unwrap();
        let distances = DistanceMatrix::from_nodes(instance.nodes());
        let evaluator = RouteEvaluator::new(&instance, &distances);
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..config.max_iterations {
            let routes = colony.iterate(&mut rng);
            prop_assert_eq!(routes.len(), instance.vehicle_count());
            for r in &routes {
                prop_assert_eq!(r.route.first(), Some(&0));
                prop_assert_eq!(r.route.last(), Some(&0));
                prop_assert!(r.route.len() >= 2);
                prop_assert!(r.distance <= instance.tmax());

                let (eval, totals_match) = evaluator.verify(r, 1e-9);
                prop_assert!(totals_match, "reported {:?}, recomputed {:?}", r, eval);
                prop_assert!(eval.is_feasible(), "violations: {:?}", eval.violations);
            }
        }
    }

    #[test]
    fn prop_best_routes_within_budget(
        instance in random_instance(),
        seed in any::<u64>()
    ) {
        let result = AcoRunner::run(&instance, &small_config(seed, true)).unwrap();
        for r in &result.routes {
            prop_assert!(r.distance <= instance.tmax());
            prop_assert!(r.score <= instance.total_score());
        }
    }

    #[test]
    fn prop_best_routes_disjoint_with_exclusion(
        instance in random_instance(),
        seed in any::<u64>(),
        global in any::<bool>()
    ) {
        let tracking = if global { BestTracking::Global } else { BestTracking::PerVehicle };
        let config = small_config(seed, true).with_best_tracking(tracking);
        let result = AcoRunner::run(&instance, &config).unwrap();

        let mut seen = vec![false; instance.num_nodes()];
        for r in &result.routes {
            for &j in r.route.iter().filter(|&&j| j != 0) {
                prop_assert!(!seen[j], "node {} in more than one best route: {:?}", j, result.routes);
                seen[j] = true;
            }
        }
        let collectable: u64 = (1..instance.num_nodes()).map(|j| u64::from(instance.score(j))).sum();
        prop_assert!(result.total_score() <= collectable);
    }

    #[test]
    fn prop_same_seed_same_routes(
        instance in random_instance(),
        seed in any::<u64>(),
        global in any::<bool>()
    ) {
        let tracking = if global { BestTracking::Global } else { BestTracking::PerVehicle };
        let config = small_config(seed, true).with_best_tracking(tracking);
        let a = AcoRunner::run(&instance, &config).unwrap();
        let b = AcoRunner::run(&instance, &config).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_score_history_non_decreasing(
        instance in random_instance(),
        seed in any::<u64>()
    ) {
        let result = AcoRunner::run(&instance, &small_config(seed, true)).unwrap();
        for w in result.score_history.windows(2) {
            prop_assert!(w[1] >= w[0]);
        }
    }
}

// ============================================================================
// Pheromone Properties
// ============================================================================

#[derive(Debug, Clone)]
enum PheromoneOp {
    Evaporate(f64),
    Add(usize, usize, f64),
}

fn pheromone_ops(size: usize) -> impl Strategy<Value = Vec<PheromoneOp>> {
    let op = prop_oneof![
        (0.0..=1.0f64).prop_map(PheromoneOp::Evaporate),
        (0..size, 0..size, 0.0..50.0f64).prop_map(|(i, j, a)| PheromoneOp::Add(i, j, a)),
    ];
    prop::collection::vec(op, 0..40)
}

fn non_negative(tau: &PheromoneMatrix) -> bool {
    (0..tau.size()).all(|i| (0..tau.size()).all(|j| tau.get(i, j) >= 0.0))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_pheromones_symmetric_and_non_negative(
        (size, ops) in (1usize..10).prop_flat_map(|n| (Just(n), pheromone_ops(n)))
    ) {
        let mut tau = PheromoneMatrix::new(size, 0.1);
        for op in ops {
            match op {
                PheromoneOp::Evaporate(rate) => tau.evaporate(rate),
                PheromoneOp::Add(i, j, amount) => tau.add_pheromone(i, j, amount),
            }
            prop_assert!(tau.is_symmetric(0.0));
            prop_assert!(non_negative(&tau));
        }
    }

    #[test]
    fn prop_colony_pheromones_stay_symmetric(
        instance in random_instance(),
        seed in any::<u64>()
    ) {
        let config = small_config(seed, true);
        let mut colony = Colony::new(&instance, &config).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        colony.run(&mut rng);
        prop_assert!(colony.pheromones().is_symmetric(0.0));
        prop_assert!(non_negative(colony.pheromones()));
    }
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_depot_only_instance_scenario() {
    let instance = ProblemInstance::new(vec![Node::depot(0.0, 0.0)], 1, 50.0);
    let result = AcoRunner::run(&instance, &small_config(42, true)).unwrap();
    assert_eq!(result.routes.len(), 1);
    assert_eq!(result.routes[0].route, vec![0, 0]);
    assert_eq!(result.total_score(), 0);
    assert_eq!(result.total_distance(), 0.0);
}

#[test]
fn test_two_reward_nodes_scenario() {
    let instance = ProblemInstance::new(
        vec![
            Node::depot(0.0, 0.0),
            Node::new(10.0, 0.0, 7),
            Node::new(10.0, 10.0, 9),
        ],
        1,
        50.0,
    );
    let config = AcoConfig::default().with_max_iterations(30).with_seed(42);
    let result = AcoRunner::run(&instance, &config).unwrap();
    assert_eq!(result.total_score(), 16);
    let route = &result.routes[0].route;
    assert!(route.contains(&1) && route.contains(&2));
    assert_eq!(route.len(), 4);
}

#[test]
fn test_tight_budget_scenario() {
    let instance = ProblemInstance::new(
        vec![
            Node::depot(0.0, 0.0),
            Node::new(10.0, 0.0, 7),
            Node::new(0.0, 12.0, 9),
        ],
        2,
        19.0,
    );
    let batch = AcoRunner::run_batch(
        &instance,
        &AcoConfig::default()
            .with_max_iterations(20)
            .with_runs_per_instance(3)
            .with_seed(1),
    )
    .unwrap();
    assert_eq!(batch.best.total_score(), 0);
    assert!(batch.best.routes.iter().all(|r| r.route == vec![0, 0]));
}

#[test]
fn test_full_evaporation_scenario() {
    let mut tau = PheromoneMatrix::new(5, 0.1);
    tau.add_pheromone(1, 3, 2.5);
    tau.evaporate(1.0);
    for i in 0..5 {
        for j in 0..5 {
            assert_eq!(tau.get(i, j), 0.0);
        }
    }
}

#[test]
fn test_multi_vehicle_exclusion_collects_more() {
    // Two distant clusters; one vehicle can only serve one of them.
    let instance = ProblemInstance::new(
        vec![
            Node::depot(0.0, 0.0),
            Node::new(10.0, 0.0, 10),
            Node::new(11.0, 0.0, 10),
            Node::new(-10.0, 0.0, 10),
            Node::new(-11.0, 0.0, 10),
        ],
        2,
        23.0,
    );
    let config = AcoConfig::default()
        .with_max_iterations(40)
        .with_seed(5)
        .with_best_tracking(BestTracking::PerVehicle);
    let result = AcoRunner::run(&instance, &config).unwrap();
    for r in &result.routes {
        assert!(r.distance <= 23.0);
    }
    assert!(result.total_score() >= 20);
}
