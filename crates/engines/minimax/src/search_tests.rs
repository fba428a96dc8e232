use std::cell::RefCell;

use chess_core::{Color, Position};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::*;
use crate::error::RulesError;
use crate::eval::{Evaluator, evaluate};
use crate::rules::StandardRules;

// =============================================================================
// Scripted tree: nodes are indices, a move is the index of the child it
// leads to. Leaves carry their static score.
// =============================================================================

#[derive(Default)]
struct Tree {
    children: Vec<Vec<usize>>,
    scores: Vec<i32>,
    in_check: Vec<bool>,
}

impl Tree {
    fn add(&mut self, score: i32) -> usize {
        self.children.push(Vec::new());
        self.scores.push(score);
        self.in_check.push(false);
        self.children.len() - 1
    }

    fn link(&mut self, parent: usize, child: usize) {
        self.children[parent].push(child);
    }

    /// Random tree where every node at `depth > 0` has 0..=4 children;
    /// childless interior nodes are mates or stalemates.
    fn random(rng: &mut StdRng, depth: u32) -> Tree {
        let mut tree = Tree::default();
        let root = tree.add(rng.gen_range(-50..=50));
        tree.grow(rng, root, depth);
        tree
    }

    fn grow(&mut self, rng: &mut StdRng, node: usize, depth: u32) {
        if depth == 0 {
            return;
        }
        let width = rng.gen_range(0..=4);
        if width == 0 {
            self.in_check[node] = rng.gen_bool(0.5);
        }
        for _ in 0..width {
            let child = self.add(rng.gen_range(-50..=50));
            self.link(node, child);
            self.grow(rng, child, depth - 1);
        }
    }
}

impl RulesEngine for Tree {
    type Position = usize;
    type Move = usize;

    fn legal_moves(&self, pos: &usize) -> Vec<usize> {
        self.children[*pos].clone()
    }

    fn apply(&self, pos: &usize, mv: &usize) -> Result<usize, RulesError> {
        if self.children[*pos].contains(mv) {
            Ok(*mv)
        } else {
            Err(RulesError::IllegalMove {
                mv: mv.to_string(),
            })
        }
    }

    fn in_check(&self, pos: &usize) -> bool {
        self.in_check[*pos]
    }

    fn side_to_move(&self, _pos: &usize) -> Color {
        Color::White
    }
}

/// Plain minimax without pruning, same terminal rules as the searcher.
fn full_minimax<R, E>(
    rules: &R,
    eval: &E,
    pos: &R::Position,
    depth: u32,
    maximizing: bool,
) -> (i32, Option<R::Move>)
where
    R: RulesEngine,
    E: Evaluate<R::Position>,
{
    if depth == 0 {
        return (eval.evaluate(pos), None);
    }
    let moves = rules.legal_moves(pos);
    if moves.is_empty() {
        return match rules.in_check(pos) {
            true if maximizing => (-MATE_SCORE, None),
            true => (MATE_SCORE, None),
            false => (0, None),
        };
    }

    let mut best = if maximizing { -INFINITY } else { INFINITY };
    let mut best_move = None;
    for mv in moves {
        let child = rules.apply(pos, &mv).unwrap();
        let (score, _) = full_minimax(rules, eval, &child, depth - 1, !maximizing);
        let better = if maximizing { score > best } else { score < best };
        if best_move.is_none() || better {
            best = score;
            best_move = Some(mv);
        }
    }
    (best, best_move)
}

// =============================================================================
// Scripted-tree tests
// =============================================================================

#[test]
fn test_negative_depth_fails_fast() {
    let tree = Tree::random(&mut StdRng::seed_from_u64(1), 2);
    let eval = |n: &usize| tree.scores[*n];
    assert_eq!(
        search(&tree, &eval, &0, -1, true),
        Err(SearchError::InvalidDepth { depth: -1 })
    );
}

#[test]
fn test_depth_zero_scores_root_only() {
    let mut tree = Tree::default();
    let root = tree.add(17);
    let child = tree.add(99);
    tree.link(root, child);
    let eval = |n: &usize| tree.scores[*n];

    for maximizing in [true, false] {
        let outcome = search(&tree, &eval, &root, 0, maximizing).unwrap();
        assert_eq!(outcome.score, 17);
        assert_eq!(outcome.best_move, None);
        assert_eq!(outcome.stats.nodes, 1);
    }
}

#[test]
fn test_beta_cutoff_skips_late_sibling() {
    //         root (max)
    //        /          \
    //     a (min)      b (min)
    //     /   \        /    \
    //    3     5      2      9   <- never evaluated
    let mut tree = Tree::default();
    let root = tree.add(0);
    let a = tree.add(0);
    let b = tree.add(0);
    let a1 = tree.add(3);
    let a2 = tree.add(5);
    let b1 = tree.add(2);
    let b2 = tree.add(9);
    tree.link(root, a);
    tree.link(root, b);
    tree.link(a, a1);
    tree.link(a, a2);
    tree.link(b, b1);
    tree.link(b, b2);

    let seen = RefCell::new(Vec::new());
    let eval = |n: &usize| {
        seen.borrow_mut().push(*n);
        tree.scores[*n]
    };

    let outcome = search(&tree, &eval, &root, 2, true).unwrap();
    assert_eq!(outcome.score, 3);
    assert_eq!(outcome.best_move, Some(a));
    assert_eq!(*seen.borrow(), vec![a1, a2, b1]);
    assert_eq!(outcome.stats.leaves, 3);
    assert_eq!(outcome.stats.cutoffs, 1);
}

#[test]
fn test_bounds_thread_into_deeper_calls() {
    // Minimizer at the root; the second max child is cut after its first
    // grandchild already beats the minimizer's bound.
    let mut tree = Tree::default();
    let root = tree.add(0);
    let a = tree.add(0);
    let b = tree.add(0);
    let a1 = tree.add(-4);
    let b1 = tree.add(1);
    let b2 = tree.add(-100);
    tree.link(root, a);
    tree.link(root, b);
    tree.link(a, a1);
    tree.link(b, b1);
    tree.link(b, b2);

    let seen = RefCell::new(Vec::new());
    let eval = |n: &usize| {
        seen.borrow_mut().push(*n);
        tree.scores[*n]
    };

    let outcome = search(&tree, &eval, &root, 2, false).unwrap();
    assert_eq!(outcome.score, -4);
    assert_eq!(outcome.best_move, Some(a));
    assert!(!seen.borrow().contains(&b2));
}

#[test]
fn test_tie_break_keeps_first_move() {
    let mut tree = Tree::default();
    let root = tree.add(0);
    let kids: Vec<usize> = [4, 7, 7, 2].iter().map(|&s| tree.add(s)).collect();
    for &k in &kids {
        tree.link(root, k);
    }
    let eval = |n: &usize| tree.scores[*n];

    let max = search(&tree, &eval, &root, 1, true).unwrap();
    assert_eq!((max.score, max.best_move), (7, Some(kids[1])));

    let mut tree_min = Tree::default();
    let root = tree_min.add(0);
    let kids: Vec<usize> = [4, 2, 7, 2].iter().map(|&s| tree_min.add(s)).collect();
    for &k in &kids {
        tree_min.link(root, k);
    }
    let eval = |n: &usize| tree_min.scores[*n];

    let min = search(&tree_min, &eval, &root, 1, false).unwrap();
    assert_eq!((min.score, min.best_move), (2, Some(kids[1])));
}

#[test]
fn test_terminal_scores() {
    let mut tree = Tree::default();
    let mated = tree.add(123);
    tree.in_check[mated] = true;
    let stalemated = tree.add(123);
    let eval = |n: &usize| tree.scores[*n];

    let r = search(&tree, &eval, &mated, 3, true).unwrap();
    assert_eq!((r.score, r.best_move), (-MATE_SCORE, None));
    let r = search(&tree, &eval, &mated, 3, false).unwrap();
    assert_eq!((r.score, r.best_move), (MATE_SCORE, None));

    for maximizing in [true, false] {
        let r = search(&tree, &eval, &stalemated, 3, maximizing).unwrap();
        assert_eq!((r.score, r.best_move), (0, None));
    }
}

#[test]
fn test_child_move_does_not_leak_upward() {
    // root -> a -> a1; the root must report `a`, not the grandchild move
    let mut tree = Tree::default();
    let root = tree.add(0);
    let a = tree.add(0);
    let a1 = tree.add(8);
    tree.link(root, a);
    tree.link(a, a1);
    let eval = |n: &usize| tree.scores[*n];

    let outcome = search(&tree, &eval, &root, 2, true).unwrap();
    assert_eq!(outcome.best_move, Some(a));
    assert_eq!(outcome.score, 8);
}

#[test]
fn test_extreme_leaf_scores_still_yield_a_move() {
    let mut tree = Tree::default();
    let root = tree.add(0);
    let a = tree.add(-INFINITY);
    let b = tree.add(-INFINITY);
    tree.link(root, a);
    tree.link(root, b);
    let eval = |n: &usize| tree.scores[*n];

    let max = search(&tree, &eval, &root, 1, true).unwrap();
    assert_eq!((max.score, max.best_move), (-INFINITY, Some(a)));

    // Beyond the window on the minimizer's side
    let beyond = |n: &usize| if *n == root { 0 } else { i32::MAX };
    let min = search(&tree, &beyond, &root, 1, false).unwrap();
    assert_eq!((min.score, min.best_move), (i32::MAX, Some(a)));
}

#[test]
fn test_illegal_move_error_propagates() {
    struct Broken;

    impl RulesEngine for Broken {
        type Position = u8;
        type Move = u8;

        fn legal_moves(&self, _pos: &u8) -> Vec<u8> {
            vec![1]
        }
        fn apply(&self, _pos: &u8, mv: &u8) -> Result<u8, RulesError> {
            Err(RulesError::IllegalMove {
                mv: mv.to_string(),
            })
        }
        fn in_check(&self, _pos: &u8) -> bool {
            false
        }
        fn side_to_move(&self, _pos: &u8) -> Color {
            Color::White
        }
    }

    let eval = |_: &u8| 0;
    let err = search(&Broken, &eval, &0, 2, true).unwrap_err();
    assert_eq!(
        err,
        SearchError::Rules(RulesError::IllegalMove { mv: "1".into() })
    );
}

#[test]
fn test_pruning_matches_full_minimax_on_random_trees() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for case in 0..300 {
        let depth = rng.gen_range(1..=5);
        let tree = Tree::random(&mut rng, depth);
        let eval = |n: &usize| tree.scores[*n];
        let maximizing = rng.gen_bool(0.5);

        let pruned = search(&tree, &eval, &0, depth as i32, maximizing).unwrap();
        let (score, best_move) = full_minimax(&tree, &eval, &0, depth, maximizing);

        assert_eq!(pruned.score, score, "score mismatch in case {case}");
        assert_eq!(pruned.best_move, best_move, "move mismatch in case {case}");
    }
}

#[test]
fn test_searcher_is_deterministic() {
    let tree = Tree::random(&mut StdRng::seed_from_u64(42), 5);
    let eval = |n: &usize| tree.scores[*n];
    let mut searcher = Searcher::new(&tree, &eval);

    let first = searcher.search(&0, 5, true).unwrap();
    let second = searcher.search(&0, 5, true).unwrap();
    assert_eq!(first, second);
}

// =============================================================================
// Chess positions
// =============================================================================

fn fen(s: &str) -> Position {
    Position::from_fen(s).unwrap()
}

const CHESS_CASES: &[(&str, u32)] = &[
    ("6k1/8/4P3/8/8/8/8/6K1 w - - 0 1", 3),
    ("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1", 3),
    ("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1", 3),
    ("r1bqkbnr/pppp1ppp/2n5/4p3/2B1P3/5Q2/PPPP1PPP/RNB1K1NR w KQkq - 2 3", 2),
    ("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1", 2),
];

#[test]
fn test_depth_zero_identity_on_chess() {
    for &(f, _) in CHESS_CASES {
        let pos = fen(f);
        for maximizing in [true, false] {
            let outcome = search(&StandardRules, &Evaluator::default(), &pos, 0, maximizing).unwrap();
            assert_eq!(outcome.score, evaluate(&pos));
            assert_eq!(outcome.best_move, None);
        }
    }
}

#[test]
fn test_pruning_matches_full_minimax_on_chess() {
    let eval = Evaluator::default();
    for &(f, depth) in CHESS_CASES {
        let pos = fen(f);
        let maximizing = pos.side_to_move == Color::White;

        let pruned = search(&StandardRules, &eval, &pos, depth as i32, maximizing).unwrap();
        let (score, best_move) = full_minimax(&StandardRules, &eval, &pos, depth, maximizing);

        assert_eq!(pruned.score, score, "score mismatch for {f}");
        assert_eq!(pruned.best_move, best_move, "move mismatch for {f}");
    }
}

#[test]
fn test_captures_first_keeps_score() {
    let eval = Evaluator::default();
    for &(f, depth) in CHESS_CASES {
        let pos = fen(f);
        let maximizing = pos.side_to_move == Color::White;

        let plain = search(&StandardRules, &eval, &pos, depth as i32, maximizing).unwrap();
        let ordered = Searcher::new(&StandardRules, &eval)
            .with_move_order(MoveOrder::CapturesFirst)
            .search(&pos, depth as i32, maximizing)
            .unwrap();

        assert_eq!(plain.score, ordered.score, "ordering changed score for {f}");
    }
}

#[test]
fn test_chess_checkmate_and_stalemate_at_root() {
    let eval = Evaluator::default();

    let mated_black = fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1");
    let r = search(&StandardRules, &eval, &mated_black, 2, false).unwrap();
    assert_eq!((r.score, r.best_move), (MATE_SCORE, None));

    let mated_white = mated_black.mirrored();
    let r = search(&StandardRules, &eval, &mated_white, 2, true).unwrap();
    assert_eq!((r.score, r.best_move), (-MATE_SCORE, None));

    let stalemate = fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1");
    let r = search(&StandardRules, &eval, &stalemate, 2, false).unwrap();
    assert_eq!((r.score, r.best_move), (0, None));
}

#[test]
fn test_move_order_parsing() {
    assert_eq!(
        "enumeration".parse::<MoveOrder>(),
        Ok(MoveOrder::Enumeration)
    );
    assert_eq!(
        "Captures-First".parse::<MoveOrder>(),
        Ok(MoveOrder::CapturesFirst)
    );
    assert!("random".parse::<MoveOrder>().is_err());
}
