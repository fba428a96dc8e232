//! Built-in evaluation tables.
//!
//! Positional tables are written from White's point of view with a1 as the
//! first entry, then b1, c1 and so on up to h8. Black reads them through
//! `mirror_sq`.

use crate::eval::{MaterialTable, PositionalTable};

/// Order: Pawn, Knight, Bishop, Rook, Queen, King.
///
/// The king carries a finite value so every occupied square is scored the
/// same way; a legal game never removes it.
pub const MATERIAL: MaterialTable = [1, 3, 3, 5, 9, 10];

pub const POSITIONAL: PositionalTable = [
    [
        // pawns. ranks 1 and 8 are never occupied
        0, 0, 0, 0, 0, 0, 0, 0, // rank 1
        0, 0, 0, -1, -1, 0, 0, 0, // rank 2
        0, 0, 0, 0, 0, 0, 0, 0, // rank 3
        0, 0, 0, 1, 1, 0, 0, 0, // rank 4
        0, 0, 1, 1, 1, 1, 0, 0, // rank 5
        1, 1, 1, 1, 1, 1, 1, 1, // rank 6
        2, 2, 2, 2, 2, 2, 2, 2, // rank 7
        0, 0, 0, 0, 0, 0, 0, 0, // rank 8
    ],
    [
        // knights
        -2, -1, -1, -1, -1, -1, -1, -2, // rank 1
        -1, 0, 0, 0, 0, 0, 0, -1, // rank 2
        -1, 0, 1, 1, 1, 1, 0, -1, // rank 3
        -1, 0, 1, 1, 1, 1, 0, -1, // rank 4
        -1, 0, 1, 1, 1, 1, 0, -1, // rank 5
        -1, 0, 1, 1, 1, 1, 0, -1, // rank 6
        -1, 0, 0, 0, 0, 0, 0, -1, // rank 7
        -2, -1, -1, -1, -1, -1, -1, -2, // rank 8
    ],
    [
        // bishops
        -1, 0, 0, 0, 0, 0, 0, -1, // rank 1
        0, 1, 0, 0, 0, 0, 1, 0, // rank 2
        0, 0, 0, 0, 0, 0, 0, 0, // rank 3
        0, 0, 1, 1, 1, 1, 0, 0, // rank 4
        0, 0, 1, 1, 1, 1, 0, 0, // rank 5
        0, 0, 0, 0, 0, 0, 0, 0, // rank 6
        0, 0, 0, 0, 0, 0, 0, 0, // rank 7
        -1, 0, 0, 0, 0, 0, 0, -1, // rank 8
    ],
    [
        // rooks
        0, 0, 0, 1, 1, 0, 0, 0, // rank 1
        0, 0, 0, 0, 0, 0, 0, 0, // rank 2
        0, 0, 0, 0, 0, 0, 0, 0, // rank 3
        0, 0, 0, 0, 0, 0, 0, 0, // rank 4
        0, 0, 0, 0, 0, 0, 0, 0, // rank 5
        0, 0, 0, 0, 0, 0, 0, 0, // rank 6
        1, 1, 1, 1, 1, 1, 1, 1, // rank 7
        0, 0, 0, 0, 0, 0, 0, 0, // rank 8
    ],
    [
        // queens
        -1, 0, 0, 0, 0, 0, 0, -1, // rank 1
        0, 0, 0, 0, 0, 0, 0, 0, // rank 2
        0, 0, 0, 0, 0, 0, 0, 0, // rank 3
        0, 0, 0, 1, 1, 0, 0, 0, // rank 4
        0, 0, 0, 1, 1, 0, 0, 0, // rank 5
        0, 0, 0, 0, 0, 0, 0, 0, // rank 6
        0, 0, 0, 0, 0, 0, 0, 0, // rank 7
        -1, 0, 0, 0, 0, 0, 0, -1, // rank 8
    ],
    [
        // kings. stay home behind the pawns
        0, 1, 1, 0, 0, 0, 1, 0, // rank 1
        0, 0, 0, -1, -1, 0, 0, 0, // rank 2
        -1, -1, -1, -1, -1, -1, -1, -1, // rank 3
        -2, -2, -2, -2, -2, -2, -2, -2, // rank 4
        -2, -2, -2, -2, -2, -2, -2, -2, // rank 5
        -2, -2, -2, -2, -2, -2, -2, -2, // rank 6
        -2, -2, -2, -2, -2, -2, -2, -2, // rank 7
        -2, -2, -2, -2, -2, -2, -2, -2, // rank 8
    ],
];
