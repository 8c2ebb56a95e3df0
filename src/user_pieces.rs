//! Index of the user's own pieces.

use std::collections::{hash_map, HashMap};

use arrayvec::ArrayVec;
use tracing::debug;

use crate::{
    board::Board,
    color::Color,
    errors::{InvalidStateError, InvalidStateKind},
    role::Role,
    square::{File, Square},
    types::Piece,
};

/// Most pieces of one type a side can have: two plus eight promoted pawns.
pub const MAX_CANDIDATES: usize = 10;

/// Squares of candidate pieces for a move, in ascending order.
pub type Candidates = ArrayVec<Square, MAX_CANDIDATES>;

/// Where the pieces of the user's color stand.
///
/// Kept in lockstep with the [`Board`]: every entry matches the piece on
/// the board, and every piece of the user's color on the board has an
/// entry.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UserPieces {
    color: Color,
    pieces: HashMap<Square, Piece>,
}

impl UserPieces {
    /// The 16 pieces of `color` on their starting squares.
    pub fn new(color: Color) -> UserPieces {
        const BACKRANK: [Role; 8] = [
            Role::Rook,
            Role::Knight,
            Role::Bishop,
            Role::Queen,
            Role::King,
            Role::Bishop,
            Role::Knight,
            Role::Rook,
        ];

        let mut pieces = HashMap::with_capacity(16);
        for (file, role) in File::ALL.into_iter().zip(BACKRANK) {
            pieces.insert(Square::from_coords(file, color.pawn_rank()), color.pawn());
            pieces.insert(Square::from_coords(file, color.backrank()), role.of(color));
        }

        UserPieces { color, pieces }
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.pieces.get(&sq).copied()
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Iterates over all entries, in no particular order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.pieces.iter(),
        }
    }

    /// The squares holding a user piece of type `role`, in ascending order.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidStateError`] (`TooManyPieces`) if there are more than
    /// [`MAX_CANDIDATES`] such pieces, which only a desynchronized history
    /// can produce.
    pub fn squares_of(&self, role: Role) -> Result<Candidates, InvalidStateError> {
        let piece = role.of(self.color);
        let mut squares = Candidates::new();
        for (&sq, _) in self.pieces.iter().filter(|&(_, &p)| p == piece) {
            squares
                .try_push(sq)
                .map_err(|_| InvalidStateError::new(sq, InvalidStateKind::TooManyPieces))?;
        }
        squares.sort_unstable();
        Ok(squares)
    }

    /// Changes the type of the piece on `sq`.
    pub(crate) fn promote(&mut self, sq: Square, role: Role) -> Result<(), InvalidStateError> {
        let piece = self
            .pieces
            .get_mut(&sq)
            .ok_or_else(|| InvalidStateError::new(sq, InvalidStateKind::MissingUserPiece))?;
        *piece = piece.with_role(role);
        debug!(square = %sq, ?role, "promoted user pawn");
        Ok(())
    }

    /// Drops the entry of a captured piece.
    pub(crate) fn remove(&mut self, sq: Square) -> Result<Piece, InvalidStateError> {
        let piece = self
            .pieces
            .remove(&sq)
            .ok_or_else(|| InvalidStateError::new(sq, InvalidStateKind::MissingUserPiece))?;
        debug!(square = %sq, ?piece, "user piece captured");
        Ok(piece)
    }

    /// Moves the entry on `from` to `to`.
    pub(crate) fn relocate(&mut self, from: Square, to: Square) -> Result<(), InvalidStateError> {
        let piece = self
            .pieces
            .remove(&from)
            .ok_or_else(|| InvalidStateError::new(from, InvalidStateKind::MissingUserPiece))?;
        self.pieces.insert(to, piece);
        Ok(())
    }

    /// Tests the lockstep invariant against `board`.
    pub fn is_consistent_with(&self, board: &Board) -> bool {
        self.pieces
            .iter()
            .all(|(&sq, &piece)| board.piece_at(sq) == Some(piece))
            && board.by_color(self.color).count() == self.pieces.len()
    }
}

/// Iterator over the entries of [`UserPieces`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: hash_map::Iter<'a, Square, Piece>,
}

impl Iterator for Iter<'_> {
    type Item = (Square, Piece);

    fn next(&mut self) -> Option<(Square, Piece)> {
        self.inner.next().map(|(&sq, &piece)| (sq, piece))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a UserPieces {
    type Item = (Square, Piece);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::square::Rank;

    #[test]
    fn test_starting_pieces() {
        for color in Color::ALL {
            let pieces = UserPieces::new(color);
            assert_eq!(pieces.len(), 16);
            assert!(pieces.is_consistent_with(&Board::new()));
            assert!(pieces.iter().all(|(_, piece)| piece.color == color));
        }

        let white = UserPieces::new(Color::White);
        assert_eq!(
            white.squares_of(Role::Knight).expect("two knights").as_slice(),
            &[Square::B1, Square::G1]
        );
        assert_eq!(white.squares_of(Role::King).expect("one king").as_slice(), &[Square::E1]);
        assert_eq!(white.squares_of(Role::Pawn).map(|squares| squares.len()), Ok(8));

        let black = UserPieces::new(Color::Black);
        assert_eq!(black.get(Square::D8), Some(Color::Black.queen()));
        assert_eq!(black.get(Square::D1), None);
    }

    #[test]
    fn test_mutations() {
        let mut pieces = UserPieces::new(Color::White);

        pieces.relocate(Square::G1, Square::F3).expect("knight on g1");
        assert_eq!(pieces.get(Square::F3), Some(Color::White.knight()));
        assert_eq!(pieces.get(Square::G1), None);

        pieces.promote(Square::A2, Role::Queen).expect("pawn on a2");
        assert_eq!(
            pieces.squares_of(Role::Queen).expect("two queens").as_slice(),
            &[Square::D1, Square::A2]
        );

        assert_eq!(pieces.remove(Square::F3), Ok(Color::White.knight()));
        assert_eq!(pieces.len(), 15);

        let err = pieces.relocate(Square::E4, Square::E5).unwrap_err();
        assert_eq!(err.square(), Square::E4);
        assert_eq!(err.kind(), InvalidStateKind::MissingUserPiece);
        assert!(pieces.remove(Square::H5).is_err());
        assert!(pieces.promote(Square::H5, Role::Queen).is_err());
    }

    #[test]
    fn test_too_many_pieces_of_one_type() {
        let mut pieces = UserPieces::new(Color::White);
        for file in File::ALL {
            let sq = Square::from_coords(file, Rank::Second);
            pieces.promote(sq, Role::Knight).expect("pawn on second rank");
        }
        assert_eq!(
            pieces.squares_of(Role::Knight).map(|squares| squares.len()),
            Ok(MAX_CANDIDATES)
        );

        pieces.promote(Square::A1, Role::Knight).expect("rook on a1");
        let err = pieces.squares_of(Role::Knight).unwrap_err();
        assert_eq!(err.kind(), InvalidStateKind::TooManyPieces);
        assert_eq!(pieces.get(err.square()), Some(Color::White.knight()));
    }
}
