//! Long algebraic (UCI) move notation, e.g. `e2e4` or `e7e8q`.

use crate::{board::Position, movegen::legal_moves, types::*};

pub fn move_to_uci(mv: Move) -> String {
    let mut s = sq_to_coord(mv.from);
    s.push_str(&sq_to_coord(mv.to));
    if let Some(p) = mv.promo {
        s.push(match p {
            PieceKind::Rook => 'r',
            PieceKind::Bishop => 'b',
            PieceKind::Knight => 'n',
            _ => 'q',
        });
    }
    s
}

/// Resolves `txt` against the legal moves of `pos`, so castle and
/// en-passant flags come out right. Returns `None` if no legal move matches.
pub fn parse_uci_move(pos: &Position, txt: &str) -> Option<Move> {
    if !(4..=5).contains(&txt.len()) || !txt.is_ascii() {
        return None;
    }
    let from = coord_to_sq(&txt[0..2])?;
    let to = coord_to_sq(&txt[2..4])?;
    let promo = match txt[4..].chars().next() {
        Some(ch) => Some(PieceKind::from_char(ch)?),
        None => None,
    };

    legal_moves(pos)
        .into_iter()
        .find(|m| m.from == from && m.to == to && m.promo == promo)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uci_roundtrip_special_moves() {
        let pos = Position::from_fen("r3k3/1P6/8/8/8/8/8/4K2R w K - 0 1").unwrap();

        let castle = parse_uci_move(&pos, "e1g1").unwrap();
        assert!(castle.is_castle);

        let promo = parse_uci_move(&pos, "b7a8n").unwrap();
        assert_eq!(promo.promo, Some(PieceKind::Knight));
        assert_eq!(move_to_uci(promo), "b7a8n");

        // Promotion without a piece letter is not a legal move
        assert_eq!(parse_uci_move(&pos, "b7b8"), None);
        assert_eq!(parse_uci_move(&pos, "e1e3"), None);
        assert_eq!(parse_uci_move(&pos, "zz"), None);
    }
}
