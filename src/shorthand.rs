// This file is part of the sanbridge library.
// Copyright (C) 2026 The sanbridge developers
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.

//! Read shorthand move notation and resolve it against a tracked game.
//!
//! Shorthand is Standard Algebraic Notation as a person would type or say it:
//! the origin square is left out unless it is needed to tell two pieces
//! apart. Parsing classifies the text into one of a few shapes, and
//! resolution picks the origin square from the user's pieces in a
//! [`Session`].
//!
//! # Examples
//!
//! ```
//! use sanbridge::{shorthand::Shorthand, Square};
//!
//! let shorthand: Shorthand = "exd5".parse()?;
//! assert!(matches!(shorthand, Shorthand::PawnCapture { to: Square::D5, .. }));
//! # Ok::<_, sanbridge::shorthand::ParseShorthandError>(())
//! ```
//!
//! Resolving ambiguous piece moves:
//!
//! ```
//! use sanbridge::{shorthand::TranslateError, Color, Session};
//!
//! let mut session = Session::new(Color::White);
//! session.reconcile(&["e2e4", "e7e5", "b1c3", "b8c6"])?;
//!
//! // Both knights can reach e2 ...
//! assert!(matches!(session.translate("Ne2"), Err(TranslateError::AmbiguousMove { .. })));
//! // ... unless the origin is given.
//! assert_eq!(session.translate("Nge2")?.to_string(), "g1e2");
//! // Only one of them is in range of a4.
//! assert_eq!(session.translate("Na4")?.to_string(), "c3a4");
//! # Ok::<_, Box<dyn std::error::Error>>(())
//! ```

use std::{error::Error, fmt, str::FromStr};

use arrayvec::ArrayVec;
use tracing::trace;

use crate::{
    attacks,
    castling_side::CastlingSide,
    errors::InvalidStateError,
    role::Role,
    session::Session,
    square::{File, Rank, Square},
    uci::Uci,
    user_pieces::Candidates,
};

/// Longest shorthand accepted once markers are stripped, e.g. `Qh4e1`.
const MAX_LEN: usize = 5;

/// Error when text is not valid shorthand notation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseShorthandError;

impl fmt::Display for ParseShorthandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("move does not follow any expected notation")
    }
}

impl Error for ParseShorthandError {}

/// Error when shorthand cannot be resolved to a single move.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TranslateError {
    /// The text matches neither pawn, piece nor castling notation.
    MalformedNotation(ParseShorthandError),
    /// The user has no piece of the requested type.
    PieceNotFound {
        #[allow(missing_docs)]
        role: Role,
    },
    /// No piece, or more than one piece, of the requested type qualifies.
    AmbiguousMove {
        #[allow(missing_docs)]
        role: Role,
        #[allow(missing_docs)]
        to: Square,
        /// Squares of the pieces that qualified.
        candidates: Candidates,
    },
    /// The tracked position cannot be right.
    InvalidState(InvalidStateError),
}

impl TranslateError {
    /// What to tell the user.
    pub fn advice(&self) -> &'static str {
        match self {
            TranslateError::MalformedNotation(_) => {
                "use notation like e4, exd5, e8=Q, Nf3, Nbd7 or 0-0"
            }
            TranslateError::PieceNotFound { .. } => {
                "the tracked position may be out of date; refresh the page if a move was taken back"
            }
            TranslateError::AmbiguousMove { .. } => {
                "name the origin file or rank of the piece, and check that the move is valid"
            }
            TranslateError::InvalidState(_) => {
                "the tracked position is out of date; refresh the page to start over"
            }
        }
    }
}

impl fmt::Display for TranslateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslateError::MalformedNotation(error) => error.fmt(f),
            TranslateError::PieceNotFound { role } => {
                write!(f, "no {} of yours found on the board", role.upper_char())
            }
            TranslateError::AmbiguousMove {
                role,
                to,
                candidates,
            } if candidates.is_empty() => {
                write!(f, "no {} of yours can move to {to}", role.upper_char())
            }
            TranslateError::AmbiguousMove { role, to, .. } => {
                write!(f, "more than one {} of yours can move to {to}", role.upper_char())
            }
            TranslateError::InvalidState(error) => error.fmt(f),
        }
    }
}

impl Error for TranslateError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            TranslateError::MalformedNotation(error) => Some(error),
            TranslateError::InvalidState(error) => Some(error),
            _ => None,
        }
    }
}

impl From<ParseShorthandError> for TranslateError {
    fn from(error: ParseShorthandError) -> TranslateError {
        TranslateError::MalformedNotation(error)
    }
}

impl From<InvalidStateError> for TranslateError {
    fn from(error: InvalidStateError) -> TranslateError {
        TranslateError::InvalidState(error)
    }
}

/// A move in shorthand notation, classified by shape.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Shorthand {
    /// `e4`
    PawnAdvance { to: Square },
    /// `exd5`
    PawnCapture { file: File, to: Square },
    /// `e8=Q`
    PawnPromotion { to: Square, promotion: Role },
    /// `dxe8=Q`
    PawnCapturePromotion {
        file: File,
        to: Square,
        promotion: Role,
    },
    /// `Nf3`, `Nbd7`, `R1e2`, `Qh4e1`
    Piece {
        role: Role,
        file: Option<File>,
        rank: Option<Rank>,
        to: Square,
    },
    /// `0-0` or `0-0-0`
    Castle(CastlingSide),
}

impl Shorthand {
    /// Parses shorthand notation. Capture markers (`x`), the promotion
    /// marker (`=`) and a check or checkmate suffix are ignored. Castling
    /// may be written with zeros or with the letter `O`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseShorthandError`] if `text` is not shorthand notation.
    pub fn from_ascii(mut text: &[u8]) -> Result<Shorthand, ParseShorthandError> {
        if let [rest @ .., b'+' | b'#'] = text {
            text = rest;
        }

        match text {
            b"0-0" | b"O-O" => return Ok(Shorthand::Castle(CastlingSide::KingSide)),
            b"0-0-0" | b"O-O-O" => return Ok(Shorthand::Castle(CastlingSide::QueenSide)),
            _ => (),
        }

        let mut stripped = ArrayVec::<u8, MAX_LEN>::new();
        for (i, &ch) in text.iter().enumerate() {
            let promotion_marker = ch == b'=' && i + 2 == text.len();
            if ch != b'x' && !promotion_marker {
                stripped.try_push(ch).map_err(|_| ParseShorthandError)?;
            }
        }

        match *stripped.as_slice() {
            [first, ..] if File::from_char(char::from(first)).is_some() => {
                Shorthand::parse_pawn(&stripped)
            }
            [first, ..] => match Role::from_piece_letter(first) {
                Some(role) => Shorthand::parse_piece(role, &stripped[1..]),
                None => Err(ParseShorthandError),
            },
            [] => Err(ParseShorthandError),
        }
    }

    fn parse_pawn(text: &[u8]) -> Result<Shorthand, ParseShorthandError> {
        let file = |ch: u8| File::from_char(char::from(ch)).ok_or(ParseShorthandError);
        let square = |s: &[u8]| Square::from_ascii(s).map_err(|_| ParseShorthandError);
        let promotion = |ch: u8| Role::from_promotion_letter(ch).ok_or(ParseShorthandError);

        match *text {
            [_, _] => Ok(Shorthand::PawnAdvance { to: square(text)? }),
            [from, to_file, _] if File::from_char(char::from(to_file)).is_some() => {
                Ok(Shorthand::PawnCapture {
                    file: file(from)?,
                    to: square(&text[1..])?,
                })
            }
            [_, _, promoted] => Ok(Shorthand::PawnPromotion {
                to: square(&text[..2])?,
                promotion: promotion(promoted)?,
            }),
            [from, _, _, promoted] => Ok(Shorthand::PawnCapturePromotion {
                file: file(from)?,
                to: square(&text[1..3])?,
                promotion: promotion(promoted)?,
            }),
            _ => Err(ParseShorthandError),
        }
    }

    fn parse_piece(role: Role, text: &[u8]) -> Result<Shorthand, ParseShorthandError> {
        if text.len() < 2 {
            return Err(ParseShorthandError);
        }

        let (fragment, to) = text.split_at(text.len() - 2);
        let to = Square::from_ascii(to).map_err(|_| ParseShorthandError)?;

        let file = |ch: u8| File::from_char(char::from(ch));
        let rank = |ch: u8| Rank::from_char(char::from(ch));

        let (file, rank) = match *fragment {
            [] => (None, None),
            [ch] => match (file(ch), rank(ch)) {
                (Some(file), _) => (Some(file), None),
                (_, Some(rank)) => (None, Some(rank)),
                _ => return Err(ParseShorthandError),
            },
            [f, r] => (
                Some(file(f).ok_or(ParseShorthandError)?),
                Some(rank(r).ok_or(ParseShorthandError)?),
            ),
            _ => return Err(ParseShorthandError),
        };

        Ok(Shorthand::Piece {
            role,
            file,
            rank,
            to,
        })
    }

    /// Resolves the shorthand into a coordinate move of the user, in the
    /// tracked position of `session`.
    ///
    /// Pawn origins are inferred from the destination. A pawn reaching the
    /// fourth rank (fifth for black) is assumed to come from its starting
    /// square, unless one of the user's pawns stands right behind the
    /// destination. Nothing checks that the path is free: the game service
    /// rejects impossible moves.
    ///
    /// Piece origins are chosen from the user's pieces of the named type,
    /// narrowing in stages:
    ///
    /// 1. A single piece of that type is chosen without further checks.
    /// 2. An origin file or rank in the notation must single out one piece.
    /// 3. Otherwise exactly one piece must have a line of sight to the
    ///    destination (knights: be in range).
    ///
    /// Pins are deliberately not considered. If two pieces see the
    /// destination and one of them is pinned, the user has to name the
    /// origin.
    ///
    /// # Errors
    ///
    /// Returns [`TranslateError`] if no unique origin is found, or if the
    /// tracked pieces cannot belong to a real game.
    pub fn to_uci(&self, session: &Session) -> Result<Uci, TranslateError> {
        let color = session.color();
        let behind = |to: Square| to.rank().offset(-color.pawn_direction()).ok_or(ParseShorthandError);

        match *self {
            Shorthand::PawnAdvance { to } => {
                let one_behind = to.with_rank(behind(to)?);
                let from = if to.rank() == color.double_step_rank()
                    && session.board().piece_at(one_behind) != Some(color.pawn())
                {
                    to.with_rank(color.pawn_rank())
                } else {
                    one_behind
                };
                trace!(%to, %from, "pawn advance");
                Ok(Uci::new(from, to))
            }
            Shorthand::PawnCapture { file, to } => {
                Ok(Uci::new(Square::from_coords(file, behind(to)?), to))
            }
            Shorthand::PawnPromotion { to, promotion } => Ok(Uci {
                from: to.with_rank(behind(to)?),
                to,
                promotion: Some(promotion),
            }),
            Shorthand::PawnCapturePromotion {
                file,
                to,
                promotion,
            } => Ok(Uci {
                from: Square::from_coords(file, behind(to)?),
                to,
                promotion: Some(promotion),
            }),
            Shorthand::Piece {
                role,
                file,
                rank,
                to,
            } => resolve_piece(session, role, file, rank, to).map(|from| Uci::new(from, to)),
            Shorthand::Castle(side) => Ok(session.castle(side)),
        }
    }
}

fn resolve_piece(
    session: &Session,
    role: Role,
    file: Option<File>,
    rank: Option<Rank>,
    to: Square,
) -> Result<Square, TranslateError> {
    let mut candidates = session.user_pieces().squares_of(role)?;
    trace!(?role, %to, ?candidates, "candidate pieces");

    match *candidates.as_slice() {
        [] => return Err(TranslateError::PieceNotFound { role }),
        [single] => return Ok(single),
        _ => (),
    }

    if file.is_some() || rank.is_some() {
        candidates.retain(|sq| sq.contains(file, rank));
        trace!(?file, ?rank, ?candidates, "narrowed by origin hint");
    } else {
        candidates.retain(|sq| attacks::has_access(session.board(), *sq, to, role));
        trace!(?candidates, "narrowed by line of sight");
    }

    match *candidates.as_slice() {
        [single] => Ok(single),
        _ => Err(TranslateError::AmbiguousMove {
            role,
            to,
            candidates,
        }),
    }
}

impl FromStr for Shorthand {
    type Err = ParseShorthandError;

    fn from_str(text: &str) -> Result<Shorthand, ParseShorthandError> {
        Shorthand::from_ascii(text.as_bytes())
    }
}

impl fmt::Display for Shorthand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Shorthand::PawnAdvance { to } => write!(f, "{to}"),
            Shorthand::PawnCapture { file, to } => write!(f, "{}x{to}", file.char()),
            Shorthand::PawnPromotion { to, promotion } => {
                write!(f, "{to}={}", promotion.upper_char())
            }
            Shorthand::PawnCapturePromotion {
                file,
                to,
                promotion,
            } => write!(f, "{}x{to}={}", file.char(), promotion.upper_char()),
            Shorthand::Piece {
                role,
                file,
                rank,
                to,
            } => {
                write!(f, "{}", role.upper_char())?;
                if let Some(file) = file {
                    write!(f, "{}", file.char())?;
                }
                if let Some(rank) = rank {
                    write!(f, "{}", rank.char())?;
                }
                write!(f, "{to}")
            }
            Shorthand::Castle(CastlingSide::KingSide) => write!(f, "0-0"),
            Shorthand::Castle(CastlingSide::QueenSide) => write!(f, "0-0-0"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{color::Color, errors::InvalidStateKind};

    fn parse(text: &str) -> Shorthand {
        text.parse().expect("valid shorthand")
    }

    fn session(color: Color, moves: &[&str]) -> Session {
        let mut session = Session::new(color);
        session.reconcile(moves).expect("consistent history");
        session
    }

    #[test]
    fn test_parse_shapes() {
        assert_eq!(parse("e4"), Shorthand::PawnAdvance { to: Square::E4 });
        assert_eq!(
            parse("exd5"),
            Shorthand::PawnCapture {
                file: File::E,
                to: Square::D5
            }
        );
        assert_eq!(parse("ed5"), parse("exd5"));
        assert_eq!(
            parse("e8=Q"),
            Shorthand::PawnPromotion {
                to: Square::E8,
                promotion: Role::Queen
            }
        );
        assert_eq!(parse("e8Q"), parse("e8=Q"));
        assert_eq!(
            parse("dxe8=N+"),
            Shorthand::PawnCapturePromotion {
                file: File::D,
                to: Square::E8,
                promotion: Role::Knight
            }
        );
        assert_eq!(
            parse("Nbd7"),
            Shorthand::Piece {
                role: Role::Knight,
                file: Some(File::B),
                rank: None,
                to: Square::D7
            }
        );
        assert_eq!(
            parse("R1xe2"),
            Shorthand::Piece {
                role: Role::Rook,
                file: None,
                rank: Some(Rank::First),
                to: Square::E2
            }
        );
        assert_eq!(
            parse("Qh4e1#"),
            Shorthand::Piece {
                role: Role::Queen,
                file: Some(File::H),
                rank: Some(Rank::Fourth),
                to: Square::E1
            }
        );
        assert_eq!(parse("0-0"), Shorthand::Castle(CastlingSide::KingSide));
        assert_eq!(parse("O-O-O"), Shorthand::Castle(CastlingSide::QueenSide));
    }

    #[test]
    fn test_parse_malformed() {
        for text in [
            "", "x", "e", "e9", "i4", "e4e5", "exd", "e8=K", "e8P", "Pe4", "N", "Nf", "Nf9",
            "Nzf3", "N88f3", "Qh4e1e1", "nf3", "0-0-0-0", "o-o", "hello",
        ] {
            assert_eq!(
                text.parse::<Shorthand>(),
                Err(ParseShorthandError),
                "{text:?} should not parse"
            );
        }
    }

    #[test]
    fn test_display() {
        for text in ["e4", "exd5", "e8=Q", "dxe8=N", "Nf3", "Nbd7", "R1e2", "Qh4e1", "0-0", "0-0-0"] {
            assert_eq!(parse(text).to_string(), text);
        }
    }

    #[test]
    fn test_pawn_double_step() {
        let session = Session::new(Color::White);
        assert_eq!(session.translate("d4").map(|m| m.to_string()), Ok("d2d4".to_owned()));
        assert_eq!(session.translate("d3").map(|m| m.to_string()), Ok("d2d3".to_owned()));

        let session = self::session(Color::White, &["d2d3", "e7e5"]);
        assert_eq!(session.translate("d4").map(|m| m.to_string()), Ok("d3d4".to_owned()));

        let session = Session::new(Color::Black);
        assert_eq!(session.translate("c5").map(|m| m.to_string()), Ok("c7c5".to_owned()));
        assert_eq!(session.translate("c6").map(|m| m.to_string()), Ok("c7c6".to_owned()));

        let session = self::session(Color::Black, &["e2e4", "c7c6"]);
        assert_eq!(session.translate("c5").map(|m| m.to_string()), Ok("c6c5".to_owned()));
    }

    #[test]
    fn test_pawn_captures_and_promotions() {
        let session = Session::new(Color::White);
        assert_eq!(session.translate("exd5").map(|m| m.to_string()), Ok("e4d5".to_owned()));
        assert_eq!(session.translate("e8=Q").map(|m| m.to_string()), Ok("e7e8q".to_owned()));
        assert_eq!(session.translate("gxh8=R").map(|m| m.to_string()), Ok("g7h8r".to_owned()));

        let session = Session::new(Color::Black);
        assert_eq!(session.translate("dxe4").map(|m| m.to_string()), Ok("d5e4".to_owned()));
        assert_eq!(session.translate("a1=N").map(|m| m.to_string()), Ok("a2a1n".to_owned()));
        assert_eq!(session.translate("bxa1Q").map(|m| m.to_string()), Ok("b2a1q".to_owned()));
    }

    #[test]
    fn test_pawn_origin_off_board() {
        let session = Session::new(Color::White);
        assert_eq!(
            session.translate("e1"),
            Err(TranslateError::MalformedNotation(ParseShorthandError))
        );
        let session = Session::new(Color::Black);
        assert!(session.translate("dxe8").is_err());
    }

    #[test]
    fn test_castle() {
        let session = Session::new(Color::White);
        assert_eq!(session.translate("0-0").map(|m| m.to_string()), Ok("e1g1".to_owned()));
        assert_eq!(session.translate("0-0-0").map(|m| m.to_string()), Ok("e1c1".to_owned()));
        let session = Session::new(Color::Black);
        assert_eq!(session.translate("O-O").map(|m| m.to_string()), Ok("e8g8".to_owned()));
        assert_eq!(session.translate("O-O-O+").map(|m| m.to_string()), Ok("e8c8".to_owned()));
    }

    #[test]
    fn test_single_candidate_is_never_second_guessed() {
        // The king cannot reach h5, but it is the only king.
        let session = Session::new(Color::White);
        assert_eq!(session.translate("Kh5").map(|m| m.to_string()), Ok("e1h5".to_owned()));

        // One rook left, blocked by its own pieces.
        let session = self::session(
            Color::White,
            &["a2a4", "b7b5", "a4b5", "a7a6", "a1a6", "c8a6"],
        );
        assert_eq!(
            session.user_pieces().squares_of(Role::Rook).expect("one rook").as_slice(),
            &[Square::H1]
        );
        assert_eq!(session.translate("Re1").map(|m| m.to_string()), Ok("h1e1".to_owned()));
    }

    #[test]
    fn test_origin_hint() {
        let session = Session::new(Color::White);
        assert_eq!(session.translate("Nbd2").map(|m| m.to_string()), Ok("b1d2".to_owned()));
        assert_eq!(session.translate("Ngxe2").map(|m| m.to_string()), Ok("g1e2".to_owned()));
        assert_eq!(session.translate("Ra1a5").map(|m| m.to_string()), Ok("a1a5".to_owned()));
        assert_eq!(
            session.translate("R1a5"),
            Err(TranslateError::AmbiguousMove {
                role: Role::Rook,
                to: Square::A5,
                candidates: [Square::A1, Square::H1].into_iter().collect(),
            })
        );
        assert!(matches!(
            session.translate("Ncd2"),
            Err(TranslateError::AmbiguousMove { ref candidates, .. }) if candidates.is_empty()
        ));
    }

    #[test]
    fn test_knights_on_b8_and_f6() {
        let session = self::session(Color::Black, &["e2e4", "g8f6", "d2d4", "d7d6"]);
        assert_eq!(session.translate("Nbd7").map(|m| m.to_string()), Ok("b8d7".to_owned()));
        assert_eq!(session.translate("N8d7").map(|m| m.to_string()), Ok("b8d7".to_owned()));
        assert_eq!(session.translate("Nc6").map(|m| m.to_string()), Ok("b8c6".to_owned()));
        assert!(matches!(
            session.translate("Nd7"),
            Err(TranslateError::AmbiguousMove { ref candidates, .. }) if candidates.len() == 2
        ));
    }

    #[test]
    fn test_knight_range_is_wider_than_a_hop() {
        // b1 to d4 is two files and three ranks away, which is in range.
        let session = Session::new(Color::White);
        assert_eq!(session.translate("Nd4").map(|m| m.to_string()), Ok("b1d4".to_owned()));

        let session = self::session(Color::White, &["g1f3", "e7e5"]);
        assert_eq!(
            session.translate("Nd4"),
            Err(TranslateError::AmbiguousMove {
                role: Role::Knight,
                to: Square::D4,
                candidates: [Square::B1, Square::F3].into_iter().collect(),
            })
        );
        assert_eq!(session.translate("Nfd4").map(|m| m.to_string()), Ok("f3d4".to_owned()));
    }

    #[test]
    fn test_line_of_sight() {
        let session = self::session(Color::White, &["e2e4", "e7e5", "b1c3", "b8c6"]);
        assert_eq!(session.translate("Nf3").map(|m| m.to_string()), Ok("g1f3".to_owned()));
        assert_eq!(session.translate("Na4").map(|m| m.to_string()), Ok("c3a4".to_owned()));
        assert_eq!(
            session.translate("Ne2"),
            Err(TranslateError::AmbiguousMove {
                role: Role::Knight,
                to: Square::E2,
                candidates: [Square::G1, Square::C3].into_iter().collect(),
            })
        );

        // The a-pawn blocks one rook, the other is not aligned.
        assert!(matches!(
            session.translate("Ra3"),
            Err(TranslateError::AmbiguousMove { ref candidates, .. }) if candidates.is_empty()
        ));
    }

    #[test]
    fn test_blocked_rook_is_not_a_candidate() {
        let rook_lift = [
            "a2a4", "a7a6", "h2h4", "h7h6", "a1a3", "b7b6", "h1h3", "c7c6",
        ];
        let session = self::session(Color::White, &rook_lift);
        assert_eq!(
            session.translate("Rd3"),
            Err(TranslateError::AmbiguousMove {
                role: Role::Rook,
                to: Square::D3,
                candidates: [Square::A3, Square::H3].into_iter().collect(),
            })
        );

        let mut history = rook_lift.to_vec();
        history.extend(["g2g3", "d7d6"]);
        let session = self::session(Color::White, &history);
        assert_eq!(session.translate("Rd3").map(|m| m.to_string()), Ok("a3d3".to_owned()));
        assert_eq!(session.translate("Rxb3").map(|m| m.to_string()), Ok("a3b3".to_owned()));
    }

    #[test]
    fn test_too_many_knights_is_reported() {
        // Reported moves may turn any piece into a knight. Eleven of them
        // cannot happen in a real game.
        let session = self::session(
            Color::White,
            &[
                "a2a3n", "b2b3n", "c2c3n", "d2d3n", "e2e3n", "f2f3n", "g2g3n", "h2h3n", "a1a2n",
            ],
        );
        let err = session.translate("Nd4").unwrap_err();
        assert!(matches!(
            err,
            TranslateError::InvalidState(ref error) if error.kind() == InvalidStateKind::TooManyPieces
        ));
        assert!(err.source().is_some());

        // Other piece types still resolve.
        assert_eq!(session.translate("Qd2").map(|m| m.to_string()), Ok("d1d2".to_owned()));
    }

    #[test]
    fn test_not_found() {
        let session = self::session(
            Color::Black,
            &["e2e4", "d7d5", "e4d5", "d8d5", "b1c3", "d5a2", "a1a2"],
        );
        assert_eq!(
            session.translate("Qd4"),
            Err(TranslateError::PieceNotFound { role: Role::Queen })
        );
        assert_eq!(
            session.translate("Qd4").map_err(|err| err.to_string()),
            Err("no Q of yours found on the board".to_owned())
        );
    }
}
