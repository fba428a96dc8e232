use crate::{board::*, error::MoveError, types::*};

const PROMOTIONS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// Generate all legal moves, returning a freshly allocated vector.
/// Internally delegates to `legal_moves_into`, cloning the position only once.
pub fn legal_moves(pos: &Position) -> Vec<Move> {
    let mut tmp = pos.clone();
    let mut out = Vec::with_capacity(64);
    legal_moves_into(&mut tmp, &mut out);
    out
}

/// Generate all legal moves into the provided buffer, reusing it across calls.
///
/// The order is deterministic: squares a1..h8, and per piece the fixed
/// direction order of the generators below.
pub fn legal_moves_into(pos: &mut Position, out: &mut Vec<Move>) {
    out.clear();
    pseudo_moves(pos, out);

    let mover = pos.side_to_move;
    out.retain(|&mv| {
        let undo = pos.make_move(mv);
        let illegal = pos.in_check(mover);
        pos.unmake_move(mv, undo);
        !illegal
    });
}

/// Returns a copy of `pos` with `mv` played, leaving `pos` untouched.
///
/// Fails unless `mv` is exactly one of the moves `legal_moves` produces for
/// `pos`, flags included.
pub fn play(pos: &Position, mv: Move) -> Result<Position, MoveError> {
    let mut next = pos.clone();
    let mut moves = Vec::with_capacity(64);
    legal_moves_into(&mut next, &mut moves);
    if !moves.contains(&mv) {
        return Err(MoveError::Illegal {
            mv: mv.to_string(),
        });
    }
    next.make_move(mv);
    Ok(next)
}

/// True if `mv` removes an enemy piece, en passant included.
pub fn is_capture(pos: &Position, mv: Move) -> bool {
    mv.is_en_passant || pos.piece_at(mv.to).is_some()
}

fn pseudo_moves(pos: &Position, out: &mut Vec<Move>) {
    for from in 0..64u8 {
        let pc = match pos.piece_at(from) {
            Some(p) if p.color == pos.side_to_move => p,
            _ => continue,
        };
        match pc.kind {
            PieceKind::Pawn => gen_pawn(pos, from, pc.color, out),
            PieceKind::Knight => gen_steps(pos, from, pc.color, out, &KNIGHT_DELTAS),
            PieceKind::Bishop => gen_slider(pos, from, pc.color, out, &DIAGONALS),
            PieceKind::Rook => gen_slider(pos, from, pc.color, out, &ORTHOGONALS),
            PieceKind::Queen => {
                gen_slider(pos, from, pc.color, out, &DIAGONALS);
                gen_slider(pos, from, pc.color, out, &ORTHOGONALS);
            }
            PieceKind::King => {
                gen_steps(pos, from, pc.color, out, &KING_DELTAS);
                gen_castle(pos, from, pc.color, out);
            }
        }
    }
}

fn push_pawn_move(from: u8, to: u8, c: Color, out: &mut Vec<Move>) {
    let promo_rank = match c {
        Color::White => 7,
        Color::Black => 0,
    };
    if rank_of(to) == promo_rank {
        for pk in PROMOTIONS {
            let mut mv = Move::new(from, to);
            mv.promo = Some(pk);
            out.push(mv);
        }
    } else {
        out.push(Move::new(from, to));
    }
}

fn gen_pawn(pos: &Position, from: u8, c: Color, out: &mut Vec<Move>) {
    let f = file_of(from);
    let r = rank_of(from);
    let (dir, start_rank) = match c {
        Color::White => (1, 1),
        Color::Black => (-1, 6),
    };

    if let Some(to) = sq(f, r + dir)
        && pos.piece_at(to).is_none()
    {
        push_pawn_move(from, to, c, out);
        if r == start_rank
            && let Some(to2) = sq(f, r + 2 * dir)
            && pos.piece_at(to2).is_none()
        {
            out.push(Move::new(from, to2));
        }
    }

    for df in [-1, 1] {
        let Some(to) = sq(f + df, r + dir) else {
            continue;
        };
        match pos.piece_at(to) {
            Some(target) if target.color != c => push_pawn_move(from, to, c, out),
            None if pos.en_passant == Some(to) => {
                let mut mv = Move::new(from, to);
                mv.is_en_passant = true;
                out.push(mv);
            }
            _ => {}
        }
    }
}

fn gen_steps(pos: &Position, from: u8, c: Color, out: &mut Vec<Move>, deltas: &[(i8, i8)]) {
    let f = file_of(from);
    let r = rank_of(from);
    for (df, dr) in deltas {
        if let Some(to) = sq(f + df, r + dr) {
            match pos.piece_at(to) {
                Some(pc) if pc.color == c => {}
                _ => out.push(Move::new(from, to)),
            }
        }
    }
}

fn gen_slider(pos: &Position, from: u8, c: Color, out: &mut Vec<Move>, dirs: &[(i8, i8)]) {
    let f0 = file_of(from);
    let r0 = rank_of(from);
    for (df, dr) in dirs {
        let mut f = f0 + df;
        let mut r = r0 + dr;
        while let Some(to) = sq(f, r) {
            match pos.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(pc) => {
                    if pc.color != c {
                        out.push(Move::new(from, to));
                    }
                    break;
                }
            }
            f += df;
            r += dr;
        }
    }
}

struct CastleRule {
    king_from: u8,
    king_to: u8,
    must_be_empty: &'static [u8],
    must_be_safe: [u8; 2],
}

const CASTLE_RULES: [CastleRule; 4] = [
    CastleRule {
        king_from: 4,
        king_to: 6,
        must_be_empty: &[5, 6],
        must_be_safe: [5, 6],
    },
    CastleRule {
        king_from: 4,
        king_to: 2,
        must_be_empty: &[3, 2, 1],
        must_be_safe: [3, 2],
    },
    CastleRule {
        king_from: 60,
        king_to: 62,
        must_be_empty: &[61, 62],
        must_be_safe: [61, 62],
    },
    CastleRule {
        king_from: 60,
        king_to: 58,
        must_be_empty: &[59, 58, 57],
        must_be_safe: [59, 58],
    },
];

fn gen_castle(pos: &Position, from: u8, c: Color, out: &mut Vec<Move>) {
    let enemy = c.other();
    for rule in CASTLE_RULES.iter().filter(|rule| rule.king_from == from) {
        let allowed = match rule.king_to {
            6 => c == Color::White && pos.castling.wk,
            2 => c == Color::White && pos.castling.wq,
            62 => c == Color::Black && pos.castling.bk,
            58 => c == Color::Black && pos.castling.bq,
            _ => false,
        };
        // Can't castle out of or through check.
        if allowed
            && rule.must_be_empty.iter().all(|&s| pos.piece_at(s).is_none())
            && !pos.in_check(c)
            && rule.must_be_safe.iter().all(|&s| !pos.is_square_attacked(s, enemy))
        {
            let mut mv = Move::new(from, rule.king_to);
            mv.is_castle = true;
            out.push(mv);
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
