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

use tracing::{debug, warn};

use crate::{
    board::Board,
    castling_side::{rook_move_for, CastlingSide},
    color::Color,
    errors::{InvalidStateError, InvalidStateKind, SyncError},
    role::Role,
    shorthand::{Shorthand, TranslateError},
    square::Rank,
    uci::Uci,
    user_pieces::UserPieces,
};

/// Tracked state of one game, seen from the user's side.
///
/// The game service reports moves, not positions. A `Session` replays the
/// reported moves onto a [`Board`] holding every piece, and keeps an index
/// of where the user's own pieces are, so that shorthand notation can be
/// resolved into coordinate moves.
///
/// A session lives for one game. Start a new one (or [`Session::reset()`])
/// when the next game starts, or after any reported error that leaves the
/// tracked state in doubt.
///
/// Calls must be serialized. A session is never shared between threads of
/// control while one of its operations runs.
///
/// # Examples
///
/// ```
/// use sanbridge::{Color, Session};
///
/// let mut session = Session::new(Color::White);
/// session.reconcile(&["e2e4", "e7e5"])?;
///
/// let m = session.translate("Nf3")?;
/// assert_eq!(m.to_string(), "g1f3");
///
/// // The service reports the move back once it is played.
/// session.reconcile(&["e2e4", "e7e5", "g1f3"])?;
/// # Ok::<_, Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug)]
pub struct Session {
    color: Color,
    board: Board,
    user_pieces: UserPieces,
    history: Vec<Uci>,
}

impl Session {
    /// Starts tracking a new game from the standard starting position, with
    /// the user playing `color`.
    pub fn new(color: Color) -> Session {
        debug!(%color, "session initialized");
        Session {
            color,
            board: Board::new(),
            user_pieces: UserPieces::new(color),
            history: Vec::new(),
        }
    }

    /// Discards all tracked state and starts over.
    pub fn reset(&mut self, color: Color) {
        *self = Session::new(color);
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn user_pieces(&self) -> &UserPieces {
        &self.user_pieces
    }

    /// Moves applied so far, oldest first.
    #[inline]
    pub fn history(&self) -> &[Uci] {
        &self.history
    }

    /// Rank the user's pieces start on.
    pub fn piece_rank(&self) -> Rank {
        self.color.backrank()
    }

    /// Rank the user's pawns start on.
    pub fn pawn_rank(&self) -> Rank {
        self.color.pawn_rank()
    }

    /// The king move for castling to `side`.
    pub fn castle(&self, side: CastlingSide) -> Uci {
        side.king_move(self.color)
    }

    pub fn king_side_castle(&self) -> Uci {
        self.castle(CastlingSide::KingSide)
    }

    pub fn queen_side_castle(&self) -> Uci {
        self.castle(CastlingSide::QueenSide)
    }

    /// Applies a move of either side to the tracked position. When a king
    /// castles, the paired rook move is applied as well.
    ///
    /// The move history is not touched: that is the job of
    /// [`Session::reconcile()`].
    ///
    /// # Errors
    ///
    /// Returns [`InvalidStateError`] if the move starts on an empty square
    /// or involves a user piece the index does not know about. The tracked
    /// position is left unchanged, but it no longer matches the game.
    pub fn apply_move(&mut self, uci: &Uci) -> Result<(), InvalidStateError> {
        let mut board = self.board.clone();
        let mut user_pieces = self.user_pieces.clone();
        play(&mut board, &mut user_pieces, uci)?;
        self.board = board;
        self.user_pieces = user_pieces;
        Ok(())
    }

    /// Brings the tracked state up to date with the move history reported by
    /// the game service.
    ///
    /// * Same length as the tracked history: nothing to do.
    /// * Nothing tracked yet: every reported move is replayed (joining a game
    ///   in progress).
    /// * Exactly one more move, and the rest matches the tracked history:
    ///   the new move is applied.
    ///
    /// # Errors
    ///
    /// Anything else is a [`SyncError`], most likely caused by a take-back.
    /// The session is left exactly as it was, but should be discarded.
    pub fn reconcile<S: AsRef<str>>(&mut self, reported: &[S]) -> Result<(), SyncError> {
        let local = self.history.len();

        if reported.len() == local {
            return Ok(());
        }

        if local != 0 && reported.len() != local + 1 {
            warn!(local, reported = reported.len(), "reported history length diverged");
            return Err(SyncError::InconsistentHistory {
                local,
                reported: reported.len(),
            });
        }

        let reported = reported
            .iter()
            .enumerate()
            .map(|(index, uci)| {
                uci.as_ref()
                    .parse::<Uci>()
                    .map_err(|error| SyncError::InvalidUci { index, error })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if reported[..local] != self.history[..] {
            warn!(local, "reported history diverged from tracked moves");
            return Err(SyncError::InconsistentHistory {
                local,
                reported: reported.len(),
            });
        }

        let mut board = self.board.clone();
        let mut user_pieces = self.user_pieces.clone();
        for uci in &reported[local..] {
            play(&mut board, &mut user_pieces, uci)?;
        }

        self.board = board;
        self.user_pieces = user_pieces;
        self.history = reported;
        Ok(())
    }

    /// Resolves shorthand notation like `Nbd7`, `exd5` or `0-0` into a
    /// coordinate move of the user, in the current tracked position.
    ///
    /// # Errors
    ///
    /// Returns [`TranslateError`] if the notation is malformed, names a piece
    /// type the user no longer has, or does not single out one piece.
    pub fn translate(&self, text: &str) -> Result<Uci, TranslateError> {
        let shorthand = Shorthand::from_ascii(text.trim().as_bytes())?;
        shorthand.to_uci(self)
    }
}

/// Applies one move and, for castling, the paired rook move.
fn play(board: &mut Board, user_pieces: &mut UserPieces, uci: &Uci) -> Result<(), InvalidStateError> {
    let role = play_one(board, user_pieces, uci)?;

    if role == Role::King {
        if let Some(rook_move) = rook_move_for(uci) {
            debug!(%uci, %rook_move, "castling");
            play_one(board, user_pieces, &rook_move)?;
        }
    }

    Ok(())
}

/// Moves a single piece, returning its (possibly promoted) role.
fn play_one(
    board: &mut Board,
    user_pieces: &mut UserPieces,
    uci: &Uci,
) -> Result<Role, InvalidStateError> {
    let color = user_pieces.color();

    let mut piece = board
        .piece_at(uci.from)
        .ok_or_else(|| InvalidStateError::new(uci.from, InvalidStateKind::EmptyOrigin))?;

    if let Some(promotion) = uci.promotion {
        piece = piece.with_role(promotion);
        if piece.color == color {
            user_pieces.promote(uci.from, promotion)?;
        }
        debug!(%uci, ?piece, "promotion");
    }

    if board.color_at(uci.to) == Some(color) {
        user_pieces.remove(uci.to)?;
    }

    if piece.color == color {
        user_pieces.relocate(uci.from, uci.to)?;
    }

    board.set_piece_at(uci.to, piece);
    board.remove_piece_at(uci.from);

    debug!(%uci, ?piece, "applied move");
    Ok(piece.role)
}
