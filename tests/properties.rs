//! Property-based tests for the routing engine.
//!
//! # Invariants tested
//!
//! - **Involution:** reversing the same segment twice restores the route.
//! - **Feasibility:** a route is feasible iff load and distance fit the vehicle.
//! - **2-opt monotonicity:** 2-opt never lengthens a route.
//! - **Conservation:** every stage keeps each customer exactly once.
//! - **Tabu list bound:** the list never exceeds its tenure.
//! - **Best monotonicity:** the best distance never increases.
//! - **Determinism:** identical inputs give identical outputs.

use proptest::prelude::*;
use u_tabu_routing::constructive::greedy_insertion;
use u_tabu_routing::local_search::{two_opt_improve, two_opt_solution};
use u_tabu_routing::models::{Customer, Location, Route, Solution, Vehicle};
use u_tabu_routing::tabu::{Move, TabuConfig, TabuList, TabuSearch};

/// Customers with unique ids `1..=n`.
fn customers_strategy(max: usize) -> impl Strategy<Value = Vec<Customer>> {
    prop::collection::vec((0u32..6, -20.0f64..20.0, -20.0f64..20.0), 0..max).prop_map(|raw| {
        raw.into_iter()
            .enumerate()
            .map(|(i, (demand, x, y))| Customer::new(i + 1, demand, Location::new(x, y)))
            .collect()
    })
}

fn vehicles_strategy() -> impl Strategy<Value = Vec<Vehicle>> {
    prop::collection::vec((1u32..15, 20.0f64..200.0), 1..4).prop_map(|raw| {
        raw.into_iter()
            .enumerate()
            .map(|(i, (capacity, max_distance))| Vehicle::new(i + 1, capacity, max_distance))
            .collect()
    })
}

fn route_strategy() -> impl Strategy<Value = Route> {
    (customers_strategy(9), vehicles_strategy())
        .prop_map(|(customers, vehicles)| Route::new(vehicles[0], customers))
}

fn sorted_ids(solution: &Solution) -> Vec<usize> {
    let mut ids = solution.customer_ids();
    ids.sort_unstable();
    ids
}

fn input_ids(customers: &[Customer]) -> Vec<usize> {
    customers.iter().map(Customer::id).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn two_opt_swap_is_involutive(route in route_strategy(), a in 0usize..16, b in 0usize..16) {
        prop_assume!(route.len() >= 2);
        let i = a % route.len();
        let j = b % route.len();
        prop_assume!(i < j);
        prop_assert_eq!(route.two_opt_swap(i, j).two_opt_swap(i, j), route);
    }

    #[test]
    fn feasibility_matches_limits(route in route_strategy()) {
        let expected = route.load() <= u64::from(route.vehicle().capacity())
            && route.distance() <= route.vehicle().max_distance();
        prop_assert_eq!(route.is_feasible(), expected);
        prop_assert_eq!(route.violations().is_empty(), expected);
    }

    #[test]
    fn two_opt_never_lengthens(route in route_strategy()) {
        let improved = two_opt_improve(&route);
        prop_assert!(improved.distance() <= route.distance());
        prop_assert_eq!(improved.load(), route.load());
        prop_assert_eq!(improved.vehicle(), route.vehicle());
    }

    #[test]
    fn every_stage_conserves_customers(
        customers in customers_strategy(9),
        vehicles in vehicles_strategy(),
        iterations in 0usize..8,
        tenure in 0usize..5,
    ) {
        let expected = input_ids(&customers);

        let initial = greedy_insertion(&customers, &vehicles).expect("fleet present");
        prop_assert_eq!(sorted_ids(&initial), expected.clone());

        let polished = two_opt_solution(&initial);
        prop_assert_eq!(sorted_ids(&polished), expected.clone());

        // `current` after k iterations covers each accepted move in turn.
        let config = TabuConfig::default().with_max_iterations(iterations).with_tenure(tenure);
        let outcome = TabuSearch::new(config).run(&polished);
        prop_assert_eq!(sorted_ids(&outcome.current), expected.clone());
        prop_assert_eq!(sorted_ids(&outcome.best), expected);
    }

    #[test]
    fn best_is_monotone(
        customers in customers_strategy(8),
        vehicles in vehicles_strategy(),
        tenure in 0usize..5,
    ) {
        let initial = two_opt_solution(&greedy_insertion(&customers, &vehicles).expect("fleet present"));
        let outcome = TabuSearch::new(TabuConfig::default().with_max_iterations(8).with_tenure(tenure))
            .run(&initial);

        prop_assert!(outcome.best.total_distance() <= initial.total_distance());
        let mut previous = initial.total_distance();
        for &best in &outcome.history {
            prop_assert!(best <= previous);
            previous = best;
        }
        prop_assert_eq!(outcome.moves.len() + outcome.idle_iterations, 8);
        prop_assert!(outcome.tabu.len() <= tenure);
    }

    #[test]
    fn search_is_deterministic(
        customers in customers_strategy(8),
        vehicles in vehicles_strategy(),
    ) {
        let initial = greedy_insertion(&customers, &vehicles).expect("fleet present");
        let search = TabuSearch::new(TabuConfig::default().with_max_iterations(6).with_tenure(2));
        prop_assert_eq!(search.search(&initial), search.search(&initial));
    }

    #[test]
    fn accepted_solutions_stay_feasible(
        customers in customers_strategy(8),
        vehicles in vehicles_strategy(),
    ) {
        let initial = greedy_insertion(&customers, &vehicles).expect("fleet present");
        prop_assume!(initial.is_feasible());
        let outcome = TabuSearch::new(TabuConfig::default().with_max_iterations(6)).run(&initial);
        prop_assert!(outcome.current.is_feasible());
        prop_assert!(outcome.best.is_feasible());
    }

    #[test]
    fn search_tabu_list_bounded(
        customers in customers_strategy(8),
        vehicles in vehicles_strategy(),
        tenure in 0usize..5,
    ) {
        let initial = greedy_insertion(&customers, &vehicles).expect("fleet present");
        // Runs are deterministic, so stopping after k iterations shows the
        // list as it stood at iteration k of a longer run.
        for k in 0..=8 {
            let config = TabuConfig::default().with_max_iterations(k).with_tenure(tenure);
            let outcome = TabuSearch::new(config).run(&initial);
            prop_assert!(outcome.tabu.len() <= tenure);
            let recent: Vec<Move> = outcome.moves.iter().rev().take(tenure).copied().collect();
            let held: Vec<Move> = outcome.tabu.iter().copied().collect();
            prop_assert_eq!(held, recent);
        }
    }

    #[test]
    fn tabu_list_bounded(tenure in 0usize..6, positions in prop::collection::vec(0usize..4, 0..20)) {
        let mut list = TabuList::new(tenure);
        for position in positions {
            list.push(Move::Relocate { from_route: 0, customer_index: 0, to_route: 1, position });
            prop_assert!(list.len() <= tenure);
        }
    }
}

#[test]
fn empty_fleet_is_rejected() {
    let customers = vec![Customer::new(1, 1, Location::new(1.0, 0.0))];
    assert!(greedy_insertion(&customers, &[]).is_err());
}
