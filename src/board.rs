//! Piece positions on the board.

use std::fmt;

use crate::{
    bitboard::Bitboard,
    color::Color,
    role::Role,
    square::{File, Rank, Square},
    types::Piece,
};

/// Piece positions of both colors.
///
/// This is the source of truth for occupancy. Only the move applier of a
/// [`Session`](crate::Session) changes it during a game.
///
/// # Examples
///
/// ```
/// use sanbridge::{Board, Color, Square};
///
/// let board = Board::new();
/// assert_eq!(board.piece_at(Square::E1), Some(Color::White.king()));
/// assert_eq!(board.piece_at(Square::E4), None);
/// ```
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Board {
    occupied: Bitboard,

    white: Bitboard,
    black: Bitboard,

    pawns: Bitboard,
    knights: Bitboard,
    bishops: Bitboard,
    rooks: Bitboard,
    queens: Bitboard,
    kings: Bitboard,
}

impl Board {
    /// The standard starting position.
    pub const fn new() -> Board {
        Board {
            occupied: Bitboard(0xffff_0000_0000_ffff),

            white: Bitboard(0xffff),
            black: Bitboard(0xffff_0000_0000_0000),

            pawns: Bitboard(0x00ff_0000_0000_ff00),
            knights: Bitboard(0x4200_0000_0000_0042),
            bishops: Bitboard(0x2400_0000_0000_0024),
            rooks: Bitboard(0x8100_0000_0000_0081),
            queens: Bitboard(0x0800_0000_0000_0008),
            kings: Bitboard(0x1000_0000_0000_0010),
        }
    }

    pub const fn empty() -> Board {
        Board {
            occupied: Bitboard::EMPTY,
            white: Bitboard::EMPTY,
            black: Bitboard::EMPTY,
            pawns: Bitboard::EMPTY,
            knights: Bitboard::EMPTY,
            bishops: Bitboard::EMPTY,
            rooks: Bitboard::EMPTY,
            queens: Bitboard::EMPTY,
            kings: Bitboard::EMPTY,
        }
    }

    #[inline]
    pub const fn occupied(&self) -> Bitboard {
        self.occupied
    }

    #[inline]
    pub fn by_color(&self, color: Color) -> Bitboard {
        color.fold(self.white, self.black)
    }

    fn by_color_mut(&mut self, color: Color) -> &mut Bitboard {
        color.fold(&mut self.white, &mut self.black)
    }

    #[inline]
    pub const fn by_role(&self, role: Role) -> Bitboard {
        match role {
            Role::Pawn => self.pawns,
            Role::Knight => self.knights,
            Role::Bishop => self.bishops,
            Role::Rook => self.rooks,
            Role::Queen => self.queens,
            Role::King => self.kings,
        }
    }

    fn by_role_mut(&mut self, role: Role) -> &mut Bitboard {
        match role {
            Role::Pawn => &mut self.pawns,
            Role::Knight => &mut self.knights,
            Role::Bishop => &mut self.bishops,
            Role::Rook => &mut self.rooks,
            Role::Queen => &mut self.queens,
            Role::King => &mut self.kings,
        }
    }

    #[inline]
    pub fn by_piece(&self, piece: Piece) -> Bitboard {
        self.by_color(piece.color) & self.by_role(piece.role)
    }

    pub fn color_at(&self, sq: Square) -> Option<Color> {
        if self.white.contains(sq) {
            Some(Color::White)
        } else if self.black.contains(sq) {
            Some(Color::Black)
        } else {
            None
        }
    }

    pub fn role_at(&self, sq: Square) -> Option<Role> {
        if !self.occupied.contains(sq) {
            None
        } else if self.pawns.contains(sq) {
            Some(Role::Pawn)
        } else if self.knights.contains(sq) {
            Some(Role::Knight)
        } else if self.bishops.contains(sq) {
            Some(Role::Bishop)
        } else if self.rooks.contains(sq) {
            Some(Role::Rook)
        } else if self.queens.contains(sq) {
            Some(Role::Queen)
        } else {
            Some(Role::King)
        }
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.color_at(sq)
            .and_then(|color| self.role_at(sq).map(|role| role.of(color)))
    }

    /// Clears the square, returning what was on it.
    pub fn remove_piece_at(&mut self, sq: Square) -> Option<Piece> {
        let piece = self.piece_at(sq)?;
        self.occupied.discard(sq);
        self.by_color_mut(piece.color).discard(sq);
        self.by_role_mut(piece.role).discard(sq);
        Some(piece)
    }

    /// Puts `piece` on the square, replacing whatever was there.
    pub fn set_piece_at(&mut self, sq: Square, piece: Piece) {
        self.remove_piece_at(sq);
        self.occupied.add(sq);
        self.by_color_mut(piece.color).add(sq);
        self.by_role_mut(piece.role).add(sq);
    }

    /// Iterates over all pieces, from `a1` to `h8`.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupied
            .filter_map(move |sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    /// The piece placement field of a FEN.
    ///
    /// # Examples
    ///
    /// ```
    /// use sanbridge::Board;
    ///
    /// assert_eq!(
    ///     Board::new().board_fen(),
    ///     "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"
    /// );
    /// ```
    pub fn board_fen(&self) -> String {
        let mut fen = String::with_capacity(64);

        for rank in Rank::ALL.into_iter().rev() {
            let mut empty = 0u8;

            for file in File::ALL {
                match self.piece_at(Square::from_coords(file, rank)) {
                    Some(piece) => {
                        if empty > 0 {
                            fen.push(char::from(b'0' + empty));
                            empty = 0;
                        }
                        fen.push(piece.char());
                    }
                    None => empty += 1,
                }
            }

            if empty > 0 {
                fen.push(char::from(b'0' + empty));
            }

            if rank > Rank::First {
                fen.push('/');
            }
        }

        fen
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.board_fen())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in Rank::ALL.into_iter().rev() {
            for file in File::ALL {
                let piece = self.piece_at(Square::from_coords(file, rank));
                write!(f, "{}", piece.map_or('.', Piece::char))?;
                f.write_str(if file < File::H { " " } else { "\n" })?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_position() {
        let board = Board::new();
        assert_eq!(board.occupied().count(), 32);
        assert_eq!(board.by_piece(Color::White.pawn()), Bitboard::rank(Rank::Second));
        assert_eq!(board.piece_at(Square::D8), Some(Color::Black.queen()));
        assert_eq!(board.piece_at(Square::G1), Some(Color::White.knight()));
        assert_eq!(board.pieces().count(), 32);
    }

    #[test]
    fn test_set_and_remove() {
        let mut board = Board::new();
        let pawn = board.remove_piece_at(Square::E2);
        assert_eq!(pawn, Some(Color::White.pawn()));
        assert_eq!(board.piece_at(Square::E2), None);
        assert_eq!(board.remove_piece_at(Square::E2), None);

        board.set_piece_at(Square::D8, Color::White.queen());
        assert_eq!(board.piece_at(Square::D8), Some(Color::White.queen()));
        assert!(!board.by_color(Color::Black).contains(Square::D8));
        assert_eq!(board.occupied().count(), 31);
    }

    #[test]
    fn test_board_fen() {
        let mut board = Board::empty();
        assert_eq!(board.board_fen(), "8/8/8/8/8/8/8/8");
        board.set_piece_at(Square::E4, Color::White.pawn());
        board.set_piece_at(Square::H8, Color::Black.king());
        assert_eq!(board.board_fen(), "7k/8/8/8/4P3/8/8/8");
        assert_eq!(board.to_string(), board.board_fen());
    }
}
