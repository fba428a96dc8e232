use crate::error::FenError;
use crate::types::*;

pub const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];
pub const KING_DELTAS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];
pub const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CastlingRights {
    pub wk: bool,
    pub wq: bool,
    pub bk: bool,
    pub bq: bool,
}

impl CastlingRights {
    pub const NONE: CastlingRights = CastlingRights {
        wk: false,
        wq: false,
        bk: false,
        bq: false,
    };

    /// Drops any right whose king or rook home square is `sq`.
    fn touch(&mut self, sq: u8) {
        match sq {
            0 => self.wq = false,
            4 => {
                self.wk = false;
                self.wq = false;
            }
            7 => self.wk = false,
            56 => self.bq = false,
            60 => {
                self.bk = false;
                self.bq = false;
            }
            63 => self.bk = false,
            _ => {}
        }
    }
}

/// A full chess position in mailbox form.
///
/// Positions are plain values: cloning yields an independent copy, which is
/// how the search hands a private board to every child node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub board: [Option<Piece>; 64],
    pub side_to_move: Color,
    pub castling: CastlingRights,
    pub en_passant: Option<u8>, // square behind a pawn that just advanced 2
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

#[derive(Clone, Debug)]
pub struct Undo {
    pub captured: Option<Piece>,
    pub castling: CastlingRights,
    pub en_passant: Option<u8>,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
    pub moved_piece: Piece,
    pub rook_move: Option<(u8, u8)>, // (rook_from, rook_to) for castling
    pub ep_captured_sq: Option<u8>,  // square actually captured in en-passant
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Position {
    /// An empty board with White to move and no castling rights.
    pub fn empty() -> Self {
        Position {
            board: [None; 64],
            side_to_move: Color::White,
            castling: CastlingRights::NONE,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    pub fn startpos() -> Self {
        let mut p = Position::empty();
        p.castling = CastlingRights {
            wk: true,
            wq: true,
            bk: true,
            bq: true,
        };

        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (f, &kind) in back.iter().enumerate() {
            p.board[f] = Some(Piece::new(Color::White, kind));
            p.board[8 + f] = Some(Piece::new(Color::White, PieceKind::Pawn));
            p.board[48 + f] = Some(Piece::new(Color::Black, PieceKind::Pawn));
            p.board[56 + f] = Some(Piece::new(Color::Black, kind));
        }
        p
    }

    /// Parses Forsyth-Edwards Notation. The clock fields are optional.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(FenError::MissingFields { found: parts.len() });
        }

        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::RankCount { found: ranks.len() });
        }

        let mut pos = Position::empty();
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - rank_idx as i8; // FEN lists rank 8 .. 1
            let mut file: i8 = 0;
            for ch in rank_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    file += d as i8;
                } else {
                    let kind = PieceKind::from_char(ch).ok_or(FenError::InvalidPiece { ch })?;
                    let color = if ch.is_ascii_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    let s = sq(file, rank).ok_or(FenError::FileCount { rank: rank_idx })?;
                    pos.board[s as usize] = Some(Piece::new(color, kind));
                    file += 1;
                }
                if file > 8 {
                    return Err(FenError::FileCount { rank: rank_idx });
                }
            }
            if file != 8 {
                return Err(FenError::FileCount { rank: rank_idx });
            }
        }

        pos.side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    field: other.to_string(),
                });
            }
        };

        if parts[2] != "-" {
            for ch in parts[2].chars() {
                match ch {
                    'K' => pos.castling.wk = true,
                    'Q' => pos.castling.wq = true,
                    'k' => pos.castling.bk = true,
                    'q' => pos.castling.bq = true,
                    _ => return Err(FenError::InvalidCastling { ch }),
                }
            }
        }

        if parts[3] != "-" {
            // The target sits behind a pawn that just moved two squares
            let ep_rank = match pos.side_to_move {
                Color::White => 5,
                Color::Black => 2,
            };
            let ep = coord_to_sq(parts[3])
                .filter(|&ep| rank_of(ep) == ep_rank)
                .ok_or_else(|| FenError::InvalidEnPassant {
                    field: parts[3].to_string(),
                })?;
            pos.en_passant = Some(ep);
        }

        let counter = |idx: usize, default: u32| -> Result<u32, FenError> {
            match parts.get(idx) {
                None => Ok(default),
                Some(field) => field.parse().map_err(|_| FenError::InvalidCounter {
                    field: field.to_string(),
                }),
            }
        };
        pos.halfmove_clock = counter(4, 0)?;
        pos.fullmove_number = counter(5, 1)?;

        Ok(pos)
    }

    /// The colour-swapped, rank-flipped twin of this position.
    ///
    /// Every piece changes colour and moves to `mirror_sq`, the side to move
    /// flips, and castling rights and the en-passant square follow along.
    pub fn mirrored(&self) -> Position {
        let mut out = Position::empty();
        for s in 0..64u8 {
            if let Some(pc) = self.piece_at(s) {
                out.set_piece(mirror_sq(s), Some(Piece::new(pc.color.other(), pc.kind)));
            }
        }
        out.side_to_move = self.side_to_move.other();
        out.castling = CastlingRights {
            wk: self.castling.bk,
            wq: self.castling.bq,
            bk: self.castling.wk,
            bq: self.castling.wq,
        };
        out.en_passant = self.en_passant.map(mirror_sq);
        out.halfmove_clock = self.halfmove_clock;
        out.fullmove_number = self.fullmove_number;
        out
    }

    pub fn king_sq(&self, c: Color) -> Option<u8> {
        (0..64u8).find(|&s| self.piece_at(s) == Some(Piece::new(c, PieceKind::King)))
    }

    pub fn piece_at(&self, sq: u8) -> Option<Piece> {
        self.board[sq as usize]
    }
    pub fn set_piece(&mut self, sq: u8, pc: Option<Piece>) {
        self.board[sq as usize] = pc;
    }

    fn has_piece(&self, s: u8, color: Color, kinds: &[PieceKind]) -> bool {
        matches!(self.piece_at(s), Some(pc) if pc.color == color && kinds.contains(&pc.kind))
    }

    pub fn in_check(&self, c: Color) -> bool {
        match self.king_sq(c) {
            Some(ksq) => self.is_square_attacked(ksq, c.other()),
            None => false,
        }
    }

    pub fn is_square_attacked(&self, target: u8, by: Color) -> bool {
        let tf = file_of(target);
        let tr = rank_of(target);

        // An attacking pawn sits one rank behind the target from its own side.
        let pawn_rank = match by {
            Color::White => -1,
            Color::Black => 1,
        };
        for df in [-1, 1] {
            if let Some(s) = sq(tf + df, tr + pawn_rank)
                && self.has_piece(s, by, &[PieceKind::Pawn])
            {
                return true;
            }
        }

        let leapers = [
            (&KNIGHT_DELTAS, PieceKind::Knight),
            (&KING_DELTAS, PieceKind::King),
        ];
        for (deltas, kind) in leapers {
            for (df, dr) in deltas {
                if let Some(s) = sq(tf + df, tr + dr)
                    && self.has_piece(s, by, &[kind])
                {
                    return true;
                }
            }
        }

        let sliders: [(&[(i8, i8)], [PieceKind; 2]); 2] = [
            (&DIAGONALS, [PieceKind::Bishop, PieceKind::Queen]),
            (&ORTHOGONALS, [PieceKind::Rook, PieceKind::Queen]),
        ];
        for (dirs, kinds) in sliders {
            for (df, dr) in dirs {
                let mut f = tf + df;
                let mut r = tr + dr;
                while let Some(s) = sq(f, r) {
                    if self.piece_at(s).is_some() {
                        if self.has_piece(s, by, &kinds) {
                            return true;
                        }
                        break;
                    }
                    f += df;
                    r += dr;
                }
            }
        }

        false
    }

    /// Plays `mv` in place and returns what `unmake_move` needs to revert it.
    ///
    /// The move must come from move generation for this position; use
    /// `movegen::play` for a checked, copying variant.
    pub fn make_move(&mut self, mv: Move) -> Undo {
        let from = mv.from;
        let to = mv.to;
        let moved = self
            .piece_at(from)
            .expect("make_move requires a piece on the from-square");
        let mut captured = self.piece_at(to);
        let undo_castling = self.castling.clone();
        let undo_ep = self.en_passant;
        let undo_hmc = self.halfmove_clock;
        let undo_fmn = self.fullmove_number;

        self.en_passant = None;

        let mut ep_captured_sq = None;
        if mv.is_en_passant {
            let behind = match moved.color {
                Color::White => -1,
                Color::Black => 1,
            };
            if let Some(cs) = sq(file_of(to), rank_of(to) + behind) {
                captured = self.piece_at(cs);
                self.set_piece(cs, None);
                ep_captured_sq = Some(cs);
            }
        }

        let mut landed = moved;
        if moved.kind == PieceKind::Pawn && is_promotion_rank(moved.color, to) {
            landed.kind = mv.promo.unwrap_or(PieceKind::Queen);
        }
        self.set_piece(from, None);
        self.set_piece(to, Some(landed));

        let mut rook_move = None;
        if mv.is_castle && moved.kind == PieceKind::King {
            if let Some((rf, rt)) = castle_rook_squares(from, to) {
                let rook = self.piece_at(rf);
                self.set_piece(rf, None);
                self.set_piece(rt, rook);
                rook_move = Some((rf, rt));
            }
        }

        self.castling.touch(from);
        self.castling.touch(to);

        if moved.kind == PieceKind::Pawn && (rank_of(from) - rank_of(to)).abs() == 2 {
            self.en_passant = sq(file_of(from), (rank_of(from) + rank_of(to)) / 2);
        }

        self.halfmove_clock = if moved.kind == PieceKind::Pawn || captured.is_some() {
            0
        } else {
            self.halfmove_clock + 1
        };
        if self.side_to_move == Color::Black {
            self.fullmove_number += 1;
        }
        self.side_to_move = self.side_to_move.other();

        Undo {
            captured,
            castling: undo_castling,
            en_passant: undo_ep,
            halfmove_clock: undo_hmc,
            fullmove_number: undo_fmn,
            moved_piece: moved,
            rook_move,
            ep_captured_sq,
        }
    }

    pub fn unmake_move(&mut self, mv: Move, undo: Undo) {
        self.side_to_move = self.side_to_move.other();
        self.castling = undo.castling;
        self.en_passant = undo.en_passant;
        self.halfmove_clock = undo.halfmove_clock;
        self.fullmove_number = undo.fullmove_number;

        if let Some((rf, rt)) = undo.rook_move {
            let rook = self.piece_at(rt);
            self.set_piece(rt, None);
            self.set_piece(rf, rook);
        }

        // Restoring the recorded piece also reverts any promotion.
        self.set_piece(mv.from, Some(undo.moved_piece));
        match undo.ep_captured_sq {
            Some(cs) => {
                self.set_piece(mv.to, None);
                self.set_piece(cs, undo.captured);
            }
            None => self.set_piece(mv.to, undo.captured),
        }
    }
}

fn is_promotion_rank(color: Color, to: u8) -> bool {
    match color {
        Color::White => rank_of(to) == 7,
        Color::Black => rank_of(to) == 0,
    }
}

/// Rook (from, to) squares for a castling king move.
fn castle_rook_squares(king_from: u8, king_to: u8) -> Option<(u8, u8)> {
    match (king_from, king_to) {
        (4, 6) => Some((7, 5)),
        (4, 2) => Some((0, 3)),
        (60, 62) => Some((63, 61)),
        (60, 58) => Some((56, 59)),
        _ => None,
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
