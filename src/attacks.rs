//! Line of sight between squares.
//!
//! These checks are purely geometric. They answer whether a piece of some
//! type could reach a square on the current board, ignoring pins, checks
//! and every other rule a game service enforces.
//!
//! # Examples
//!
//! ```
//! use sanbridge::{attacks, Board, Role, Square};
//!
//! let board = Board::new();
//!
//! // The rook on a1 looks at a3 through its own pawn.
//! assert!(attacks::is_blocked(&board, Square::A1, Square::A3));
//! assert!(!attacks::has_access(&board, Square::A1, Square::A3, Role::Rook));
//!
//! // Knights jump.
//! assert!(attacks::has_access(&board, Square::G1, Square::F3, Role::Knight));
//! ```

use tracing::trace;

use crate::{bitboard::Bitboard, board::Board, role::Role, square::Square};

fn deltas(a: Square, b: Square) -> (i32, i32) {
    (
        b.file().index() - a.file().index(),
        b.rank().index() - a.rank().index(),
    )
}

/// Unit step from `a` towards `b`, if they are distinct squares on a shared
/// file, rank or diagonal.
fn direction(a: Square, b: Square) -> Option<(i32, i32)> {
    let (df, dr) = deltas(a, b);
    if (df, dr) == (0, 0) {
        None
    } else if df == 0 || dr == 0 || df.abs() == dr.abs() {
        Some((df.signum(), dr.signum()))
    } else {
        None
    }
}

/// Tests if two distinct squares share a file, rank or diagonal.
pub fn aligned(a: Square, b: Square) -> bool {
    direction(a, b).is_some()
}

/// Tests if two squares share a file or rank.
pub fn orthogonal(a: Square, b: Square) -> bool {
    a != b && (a.file() == b.file() || a.rank() == b.rank())
}

/// Tests if two squares share a diagonal.
pub fn diagonal(a: Square, b: Square) -> bool {
    let (df, dr) = deltas(a, b);
    df != 0 && df.abs() == dr.abs()
}

/// Tests if `b` is in knight range of `a`: the file and rank distances
/// differ by exactly one.
///
/// This is wider than a knight's hop. Besides (1, 2) and (2, 1) it also
/// covers (2, 3), (0, 1) and similar, so two knights are more often both in
/// range and the user has to name the origin.
///
/// ```
/// use sanbridge::{attacks, Square};
///
/// assert!(attacks::in_knight_range(Square::G1, Square::F3));
/// assert!(attacks::in_knight_range(Square::B1, Square::D4));
/// assert!(!attacks::in_knight_range(Square::B1, Square::D3));
/// ```
pub fn in_knight_range(a: Square, b: Square) -> bool {
    let (df, dr) = deltas(a, b);
    (df.abs() - dr.abs()).abs() == 1
}

/// The squares strictly between `a` and `b`.
///
/// ```
/// use sanbridge::{attacks, Square};
///
/// let between = attacks::between(Square::E2, Square::H5);
/// assert_eq!(between.collect::<Vec<_>>(), vec![Square::F3, Square::G4]);
/// ```
///
/// # Panics
///
/// Panics if the squares are not [`aligned()`].
pub fn between(a: Square, b: Square) -> Bitboard {
    let (df, dr) = direction(a, b)
        .unwrap_or_else(|| panic!("{a} and {b} are not on the same file, rank or diagonal"));

    let mut result = Bitboard::EMPTY;
    let mut sq = a;
    while let Some(next) = sq.offset(df, dr) {
        if next == b {
            break;
        }
        result.add(next);
        sq = next;
    }
    result
}

/// Tests if any piece of either color stands strictly between `a` and `b`.
///
/// # Panics
///
/// Panics if the squares are not [`aligned()`]. Callers confirm a shared
/// line first.
pub fn is_blocked(board: &Board, a: Square, b: Square) -> bool {
    for sq in between(a, b) {
        trace!(from = %a, to = %b, square = %sq, "checking line of sight");
        if board.occupied().contains(sq) {
            trace!(from = %a, to = %b, blocker = %sq, "line of sight blocked");
            return true;
        }
    }
    false
}

/// Tests if a piece of type `role` on `from` could move to `to`, looking
/// only at geometry and blocking pieces.
///
/// Knights need to be in range, rooks need a clear file or rank, bishops a
/// clear diagonal, queens either. Pawns and kings are never resolved this
/// way and always yield `false`.
pub fn has_access(board: &Board, from: Square, to: Square, role: Role) -> bool {
    match role {
        Role::Knight => in_knight_range(from, to),
        Role::Bishop | Role::Rook | Role::Queen => {
            let on_line = (role.is_orthogonal_slider() && orthogonal(from, to))
                || (role.is_diagonal_slider() && diagonal(from, to));
            on_line && !is_blocked(board, from, to)
        }
        Role::Pawn | Role::King => false,
    }
}
