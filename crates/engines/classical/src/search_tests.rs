use super::*;
use crate::eval::{Heuristic, Material};
use othello_core::{apply_move, perft};

const OPENINGS: [Move; 4] = [
    Move { row: 2, col: 3 },
    Move { row: 3, col: 2 },
    Move { row: 4, col: 5 },
    Move { row: 5, col: 4 },
];

fn run(board: &Board, color: Color, config: SearchConfig) -> SearchOutcome {
    let mut cache = TranspositionCache::new();
    select_move(board, color, &config, &Heuristic::default(), &mut cache)
}

#[test]
fn test_minimax_start_position_depth_4() {
    let config = SearchConfig::minimax(DepthLimit::Plies(4));
    let outcome = run(&Board::standard(), Color::Dark, config);

    let mv = outcome.best_move.expect("dark has moves at the start");
    assert!(OPENINGS.contains(&mv));
    // all four openings are symmetric, so the first one generated wins the tie
    assert_eq!(mv, Move::new(2, 3));
    assert!((outcome.value - -0.2).abs() < 1e-9);
}

#[test]
fn test_depth_zero_evaluates_root() {
    let board = apply_move(&Board::standard(), Color::Dark, Move::new(2, 3)).unwrap();
    for config in [
        SearchConfig::minimax(DepthLimit::Plies(0)),
        SearchConfig::alpha_beta(DepthLimit::Plies(0)).with_caching(true),
    ] {
        let outcome = run(&board, Color::Light, config);
        assert_eq!(outcome.best_move, None);
        assert_eq!(
            outcome.value,
            Heuristic::default().evaluate(&board, Color::Light)
        );
        assert_eq!(outcome.stats.nodes, 1);
        assert_eq!(outcome.stats.leaf_evals, 1);
    }
}

#[test]
fn test_no_legal_moves_at_root() {
    // Dark has nothing to flip; light does
    let board = Board::from_rows(vec![
        vec![2, 1, 0, 0],
        vec![0, 0, 0, 0],
        vec![0, 0, 0, 0],
        vec![0, 0, 0, 0],
    ])
    .unwrap();
    let outcome = run(&board, Color::Dark, SearchConfig::alpha_beta(DepthLimit::Plies(3)));
    assert_eq!(outcome.best_move, None);
    assert_eq!(
        outcome.value,
        Heuristic::default().evaluate(&board, Color::Dark)
    );
}

#[test]
fn test_minimax_without_cache_visits_every_leaf() {
    // No passes happen in the first plies, so leaves match perft counts
    let board = Board::standard();
    for depth in 1..=4u8 {
        let outcome = run(
            &board,
            Color::Dark,
            SearchConfig::minimax(DepthLimit::Plies(u32::from(depth))),
        );
        assert_eq!(outcome.stats.leaf_evals, perft(&board, Color::Dark, depth));
        assert_eq!(outcome.stats.cutoffs, 0);
        assert_eq!(outcome.stats.cache_hits, 0);
    }
}

#[test]
fn test_alpha_beta_prunes_and_agrees_with_minimax() {
    let board = Board::standard();
    let minimax = run(&board, Color::Dark, SearchConfig::minimax(DepthLimit::Plies(4)));
    let alpha_beta = run(&board, Color::Dark, SearchConfig::alpha_beta(DepthLimit::Plies(4)));

    assert_eq!(alpha_beta.best_move, minimax.best_move);
    assert_eq!(alpha_beta.value, minimax.value);
    assert!(alpha_beta.stats.cutoffs > 0);
    assert_eq!(minimax.stats.leaf_evals, 244);
    assert_eq!(alpha_beta.stats.leaf_evals, 73);
}

#[test]
fn test_cache_splits_leaf_visits_into_evals_and_hits() {
    let board = Board::standard();
    for base in [
        SearchConfig::minimax(DepthLimit::Plies(4)),
        SearchConfig::alpha_beta(DepthLimit::Plies(5)),
    ] {
        let plain = run(&board, Color::Dark, base);
        let cached = run(&board, Color::Dark, base.with_caching(true));

        assert_eq!(cached.best_move, plain.best_move);
        assert_eq!(cached.value, plain.value);
        assert!(cached.stats.cache_hits > 0);
        assert_eq!(
            cached.stats.leaf_evals + cached.stats.cache_hits,
            plain.stats.leaf_evals
        );
    }
}

#[test]
fn test_cache_is_empty_after_search() {
    let mut cache = TranspositionCache::new();
    let config = SearchConfig::alpha_beta(DepthLimit::Plies(3)).with_caching(true);
    select_move(
        &Board::standard(),
        Color::Dark,
        &config,
        &Heuristic::default(),
        &mut cache,
    );
    assert!(cache.is_empty());

    // reuse for the other color straight away
    let board = apply_move(&Board::standard(), Color::Dark, Move::new(2, 3)).unwrap();
    let outcome = select_move(&board, Color::Light, &config, &Heuristic::default(), &mut cache);
    assert!(outcome.best_move.is_some());
    assert!(cache.is_empty());
}

#[test]
fn test_ordering_reduces_leaves_from_start() {
    let board = Board::standard();
    for (depth, unordered_leaves, ordered_leaves) in [(4, 73, 63), (5, 428, 300)] {
        let config = SearchConfig::alpha_beta(DepthLimit::Plies(depth));
        let plain = run(&board, Color::Dark, config);
        let ordered = run(&board, Color::Dark, config.with_ordering(true));

        assert_eq!(plain.stats.leaf_evals, unordered_leaves);
        assert_eq!(ordered.stats.leaf_evals, ordered_leaves);
        assert_eq!(ordered.value, plain.value);
        assert!(ordered.stats.ordering_evals > 0);
        assert_eq!(plain.stats.ordering_evals, 0);
    }
}

#[test]
fn test_ordering_is_ignored_by_minimax() {
    let board = Board::standard();
    let config = SearchConfig::minimax(DepthLimit::Plies(3));
    let plain = run(&board, Color::Dark, config);
    let ordered = run(&board, Color::Dark, config.with_ordering(true));
    assert_eq!(ordered.stats, plain.stats);
}

#[test]
fn test_min_node_ordering_keeps_value() {
    // Min-node ordering is opt-in; Max-only ordering is the default shape
    let board = Board::standard();
    let config = SearchConfig::alpha_beta(DepthLimit::Plies(5)).with_ordering(true);
    let max_only = run(&board, Color::Dark, config);
    let both = run(&board, Color::Dark, config.with_min_node_ordering(true));

    assert_eq!(both.value, max_only.value);
    assert!(both.stats.ordering_evals > max_only.stats.ordering_evals);
}

#[test]
fn test_unbounded_depth_runs_to_the_end() {
    let board = Board::initial(4).unwrap();
    let unbounded = run(&board, Color::Dark, SearchConfig::minimax(DepthLimit::Unbounded));
    // 12 empty squares: 20 plies is more than the game can last
    let deep = run(&board, Color::Dark, SearchConfig::minimax(DepthLimit::Plies(20)));
    let pruned = run(&board, Color::Dark, SearchConfig::alpha_beta(DepthLimit::Unbounded));

    assert_eq!(unbounded.best_move, Some(Move::new(0, 1)));
    assert!((unbounded.value - -1.0).abs() < 1e-9);
    assert_eq!(deep.best_move, unbounded.best_move);
    assert_eq!(deep.value, unbounded.value);
    assert_eq!(pruned.best_move, unbounded.best_move);
    assert_eq!(pruned.value, unbounded.value);
    assert!(pruned.stats.leaf_evals < unbounded.stats.leaf_evals);
}

#[test]
fn test_material_leaves() {
    // Disk difference alone: after one ply every opening is worth +3
    let mut cache = TranspositionCache::new();
    let config = SearchConfig::minimax(DepthLimit::Plies(1));
    let outcome = select_move(&Board::standard(), Color::Dark, &config, &Material, &mut cache);
    assert_eq!(outcome.best_move, Some(Move::new(2, 3)));
    assert_eq!(outcome.value, 3.0);
}
