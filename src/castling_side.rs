use crate::{
    color::Color,
    square::{File, Square},
    uci::Uci,
};

/// `KingSide` (O-O) or `QueenSide` (O-O-O).
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum CastlingSide {
    KingSide,
    QueenSide,
}

impl CastlingSide {
    pub const fn king_to_file(self) -> File {
        match self {
            CastlingSide::KingSide => File::G,
            CastlingSide::QueenSide => File::C,
        }
    }

    pub const fn rook_from_file(self) -> File {
        match self {
            CastlingSide::KingSide => File::H,
            CastlingSide::QueenSide => File::A,
        }
    }

    pub const fn rook_to_file(self) -> File {
        match self {
            CastlingSide::KingSide => File::F,
            CastlingSide::QueenSide => File::D,
        }
    }

    pub fn king_to(self, color: Color) -> Square {
        Square::from_coords(self.king_to_file(), color.backrank())
    }

    pub fn rook_from(self, color: Color) -> Square {
        Square::from_coords(self.rook_from_file(), color.backrank())
    }

    pub fn rook_to(self, color: Color) -> Square {
        Square::from_coords(self.rook_to_file(), color.backrank())
    }

    /// The coordinate move of the king, e.g. `e1g1`.
    pub fn king_move(self, color: Color) -> Uci {
        Uci::new(
            Square::from_coords(File::E, color.backrank()),
            self.king_to(color),
        )
    }

    /// The coordinate move of the rook that accompanies the king, e.g. `h1f1`.
    pub fn rook_move(self, color: Color) -> Uci {
        Uci::new(self.rook_from(color), self.rook_to(color))
    }

    /// Looks up the side a king move castles to, if it is one of the four
    /// castling moves of standard chess.
    pub fn from_king_move(uci: &Uci) -> Option<(Color, CastlingSide)> {
        Color::ALL.into_iter().find_map(|color| {
            CastlingSide::ALL
                .into_iter()
                .find(|side| side.king_move(color) == *uci)
                .map(|side| (color, side))
        })
    }

    /// `KingSide` and `QueenSide`, in this order.
    pub const ALL: [CastlingSide; 2] = [CastlingSide::KingSide, CastlingSide::QueenSide];
}

/// The rook move paired with a king's castling move.
///
/// # Examples
///
/// ```
/// use sanbridge::{rook_move_for, uci::Uci};
///
/// let king: Uci = "e8c8".parse()?;
/// assert_eq!(rook_move_for(&king).map(|m| m.to_string()), Some("a8d8".to_owned()));
///
/// let other: Uci = "e1f1".parse()?;
/// assert_eq!(rook_move_for(&other), None);
/// # Ok::<_, sanbridge::uci::ParseUciError>(())
/// ```
pub fn rook_move_for(king_move: &Uci) -> Option<Uci> {
    CastlingSide::from_king_move(king_move).map(|(color, side)| side.rook_move(color))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairings() {
        let pairs = [
            ("e1g1", "h1f1"),
            ("e1c1", "a1d1"),
            ("e8g8", "h8f8"),
            ("e8c8", "a8d8"),
        ];
        for (king, rook) in pairs {
            let king: Uci = king.parse().expect("valid uci");
            assert_eq!(
                rook_move_for(&king).map(|m| m.to_string()).as_deref(),
                Some(rook)
            );
        }
    }

    #[test]
    fn test_castle_targets() {
        assert_eq!(CastlingSide::KingSide.king_move(Color::White).to_string(), "e1g1");
        assert_eq!(CastlingSide::QueenSide.king_move(Color::Black).to_string(), "e8c8");
        assert_eq!(CastlingSide::KingSide.rook_from(Color::Black), Square::H8);
        assert_eq!(CastlingSide::QueenSide.rook_from(Color::White), Square::A1);
    }
}
