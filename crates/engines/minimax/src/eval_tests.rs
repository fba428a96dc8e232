use super::*;

fn fen(s: &str) -> Position {
    Position::from_fen(s).unwrap()
}

#[test]
fn test_startpos_is_balanced() {
    assert_eq!(evaluate(&Position::startpos()), 0);
}

#[test]
fn test_empty_squares_contribute_nothing() {
    assert_eq!(evaluate(&Position::empty()), 0);
}

#[test]
fn test_score_ignores_side_to_move() {
    let white = fen("6k1/8/4P3/8/8/8/8/6K1 w - - 0 1");
    let black = fen("6k1/8/4P3/8/8/8/8/6K1 b - - 0 1");
    assert_eq!(evaluate(&white), evaluate(&black));
    assert!(evaluate(&white) > 0);
}

#[test]
fn test_lone_pawn_adds_material_and_bonus() {
    // Kings on g1 and g8 cancel; pawn on e6 is worth 1 + 1
    let pos = fen("6k1/8/4P3/8/8/8/8/6K1 w - - 0 1");
    assert_eq!(evaluate(&pos), 2);

    let pos = fen("6k1/4P3/8/8/8/8/8/6K1 w - - 0 1");
    assert_eq!(evaluate(&pos), 3);
}

#[test]
fn test_black_reads_mirrored_square() {
    let tables = EvalTables::DEFAULT;
    let e2 = 12;
    let e7 = 52;
    let white_pawn = Piece::new(Color::White, PieceKind::Pawn);
    let black_pawn = Piece::new(Color::Black, PieceKind::Pawn);

    assert_eq!(tables.piece_value(white_pawn, e2), 0);
    assert_eq!(tables.piece_value(black_pawn, e7), 0);
    assert_eq!(tables.piece_value(white_pawn, e7), 3);
    assert_eq!(tables.piece_value(black_pawn, e2), 3);
}

#[test]
fn test_black_extra_rook_is_negative() {
    // Rooks on d4/d5 carry no positional bonus for either side
    let pos = fen("6k1/8/8/3r4/8/8/8/6K1 w - - 0 1");
    assert_eq!(evaluate(&pos), -5);
}

#[test]
fn test_mirror_symmetry_negates_score() {
    let fens = [
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        "6k1/8/4P3/8/8/8/8/6K1 w - - 0 1",
        "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
    ];
    for f in fens {
        let pos = fen(f);
        assert_eq!(
            evaluate(&pos),
            -evaluate(&pos.mirrored()),
            "mirror symmetry broken for {f}"
        );
    }
}

#[test]
fn test_material_only_tables() {
    let eval = Evaluator::new(EvalTables::material_only());
    // White: Q + R + K, Black: R + K
    let pos = fen("r5k1/8/8/8/8/8/8/Q2R2K1 w - - 0 1");
    assert_eq!(eval.evaluate(&pos), 9);
    assert_eq!(eval.tables().material_value(PieceKind::King), 10);
}

#[test]
fn test_evaluator_default_matches_free_function() {
    let pos = fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1");
    let eval = Evaluator::default();
    assert_eq!(eval.evaluate(&pos), evaluate(&pos));
    assert_eq!(Evaluate::evaluate(&eval, &pos), evaluate(&pos));
}

#[test]
fn test_score_bound_of_default_tables() {
    // King: 10 material plus the worst square bonus of 2, times 32 pieces
    assert_eq!(EvalTables::DEFAULT.score_bound(), 32 * 12);
    assert_eq!(EvalTables::material_only().score_bound(), 32 * 10);
}
