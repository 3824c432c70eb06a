//! Tests for candidate construction.

use antforge_core::KnapsackProblem;
use antforge_test::instances::{demo_problem, zero_capacity_problem};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::*;
use crate::pheromone::PheromoneTrail;
use crate::test_utils::ScriptedRandom;

#[test]
fn test_argmax_prefers_first_on_tie() {
    assert_eq!(argmax(&[1.0, 3.0, 3.0, 2.0]), 1);
    assert_eq!(argmax(&[4.0]), 0);
    assert_eq!(argmax(&[0.0, 0.0]), 0);
}

#[test]
fn test_choose_exploits_with_q0_one() {
    let scores = [2.0, 7.0, 7.0, 1.0];
    for draw in [0.0, 0.5, 0.999] {
        let mut rng = ScriptedRandom::floats(&[draw]);
        assert_eq!(choose(&scores, 1.0, &mut rng), 1);
        assert!(rng.is_exhausted());
    }
}

#[test]
fn test_choose_without_q0_spends_one_draw_on_roulette() {
    let scores = [1.0, 3.0];

    let mut rng = ScriptedRandom::floats(&[0.5]);
    assert_eq!(choose(&scores, 0.0, &mut rng), 1);
    assert!(rng.is_exhausted());

    let mut rng = ScriptedRandom::floats(&[0.2]);
    assert_eq!(choose(&scores, 0.0, &mut rng), 0);
}

#[test]
fn test_choose_samples_when_exploitation_draw_fails() {
    let scores = [5.0, 1.0];
    // 0.9 >= q0 so the roulette runs; 0.95 * 6 lands on the second slot.
    let mut rng = ScriptedRandom::floats(&[0.9, 0.95]);
    assert_eq!(choose(&scores, 0.3, &mut rng), 1);
    assert!(rng.is_exhausted());
}

#[test]
fn test_choose_uniform_when_scores_are_zero() {
    let mut rng = ScriptedRandom::new(&[], &[2]);
    assert_eq!(choose(&[0.0, 0.0, 0.0], 0.0, &mut rng), 2);
    assert!(rng.is_exhausted());
}

#[test]
fn test_roulette_skips_zero_scores() {
    let mut rng = ScriptedRandom::floats(&[0.0]);
    assert_eq!(roulette(&[0.0, 2.0, 0.0], 2.0, &mut rng), 1);
}

#[test]
fn test_roulette_falls_back_to_last_positive() {
    let mut rng = ScriptedRandom::floats(&[0.99]);
    assert_eq!(roulette(&[1.0, 1.0, 0.0], 2.5, &mut rng), 1);
}

#[test]
fn test_score_is_zero_for_zero_heuristic() {
    let problem = KnapsackProblem::new(vec![0.0, 4.0, 3.0], vec![1.0, 2.0, 0.0], 5.0).unwrap();
    let trail = PheromoneTrail::new(3);
    let ant = Ant::new(&problem, trail.view(), ConstructionParams::new(1.0, 0.0, 0.0));

    assert_eq!(ant.score(0), 0.0);
    assert_eq!(ant.score(1), 1.0);
    assert_eq!(ant.score(2), 0.0);
}

#[test]
fn test_score_combines_trail_and_heuristic() {
    let problem = demo_problem();
    let mut trail = PheromoneTrail::new(problem.len());
    trail.deposit(0, 1.0);
    let ant = Ant::new(&problem, trail.view(), ConstructionParams::new(2.0, 2.0, 0.0));

    // tau = 2, eta = 10 / 2
    assert_eq!(ant.score(0), 4.0 * 25.0);
}

#[test]
fn test_zero_capacity_builds_empty_selection() {
    let problem = zero_capacity_problem();
    let trail = PheromoneTrail::new(problem.len());
    let ant = Ant::new(&problem, trail.view(), ConstructionParams::default());

    let mut rng = ScriptedRandom::default();
    let candidate = ant.construct(&mut rng);

    assert_eq!(candidate.selection().count(), 0);
    assert_eq!(candidate.value(), 0.0);
    assert!(candidate.is_valid());
}

#[test]
fn test_full_exploitation_is_greedy_by_score() {
    let problem = demo_problem();
    let trail = PheromoneTrail::new(problem.len());
    let ant = Ant::new(&problem, trail.view(), ConstructionParams::new(1.0, 2.0, 1.0));

    let mut rng = ScriptedRandom::floats(&[0.5; 7]);
    let candidate = ant.construct(&mut rng);

    // Ratios 6, 5, 4.5, 3 (index 2 before 6), 3, 2.67, then only item 1 still fits.
    assert_eq!(
        candidate.selection().selected_indices().collect::<Vec<_>>(),
        vec![0, 1, 2, 4, 5, 6, 8]
    );
    assert_eq!(candidate.value(), 65.0);
    assert_eq!(candidate.weight(), 19.0);
    assert!(rng.is_exhausted());
}

#[test]
fn test_all_zero_scores_fall_back_to_uniform() {
    let problem = KnapsackProblem::new(vec![0.0, 0.0, 0.0], vec![1.0, 1.0, 5.0], 2.0).unwrap();
    let trail = PheromoneTrail::new(problem.len());
    let ant = Ant::new(&problem, trail.view(), ConstructionParams::default());

    // First pick among {0, 1}, second among the one left.
    let mut rng = ScriptedRandom::new(&[], &[1, 0]);
    let candidate = ant.construct(&mut rng);

    assert_eq!(
        candidate.selection().selected_indices().collect::<Vec<_>>(),
        vec![0, 1]
    );
    assert!(rng.is_exhausted());
}

#[test]
fn test_constructed_candidates_never_exceed_capacity() {
    let problem = demo_problem();
    let mut trail = PheromoneTrail::new(problem.len());
    trail.deposit(9, 15.0);
    let ant = Ant::new(&problem, trail.view(), ConstructionParams::new(1.0, 2.0, 0.05));

    for seed in 0..200 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let candidate = ant.construct(&mut rng);
        assert!(candidate.is_valid());
        assert!(candidate.weight() <= problem.capacity());
    }
}

#[test]
fn test_construction_stops_only_when_nothing_fits() {
    let problem = demo_problem();
    let trail = PheromoneTrail::new(problem.len());
    let ant = Ant::new(&problem, trail.view(), ConstructionParams::default());

    for seed in 0..50 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let candidate = ant.construct(&mut rng);
        let slack = problem.capacity() - candidate.weight();
        let fits_more = (0..problem.len())
            .filter(|&i| !candidate.selection().is_selected(i))
            .any(|i| problem.weight(i) <= slack);
        assert!(!fits_more, "seed {} stopped early", seed);
    }
}
