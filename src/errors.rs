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

use std::{error::Error, fmt};

use crate::{square::Square, uci::ParseUciError};

/// What was wrong with the tracked position.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum InvalidStateKind {
    /// A move starts on a square the board has as empty.
    EmptyOrigin,
    /// The board has a piece of the user on the square, but the index of
    /// the user's pieces has no entry for it.
    MissingUserPiece,
    /// The user has more pieces of one type than promotions allow. The
    /// square holds one of them.
    TooManyPieces,
}

/// Error when an operation assumes something about the tracked position
/// that does not hold.
///
/// The tracked position has diverged from the real game. The session
/// cannot recover and has to be reinitialized.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InvalidStateError {
    square: Square,
    kind: InvalidStateKind,
}

impl InvalidStateError {
    pub(crate) fn new(square: Square, kind: InvalidStateKind) -> InvalidStateError {
        InvalidStateError { square, kind }
    }

    /// The square the failed assumption was about.
    pub fn square(&self) -> Square {
        self.square
    }

    pub fn kind(&self) -> InvalidStateKind {
        self.kind
    }
}

impl fmt::Display for InvalidStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            InvalidStateKind::EmptyOrigin => {
                write!(f, "no piece on the origin square {}", self.square)
            }
            InvalidStateKind::MissingUserPiece => {
                write!(f, "no tracked user piece on {}", self.square)
            }
            InvalidStateKind::TooManyPieces => write!(
                f,
                "too many tracked user pieces of the type on {}",
                self.square
            ),
        }
    }
}

impl Error for InvalidStateError {}

/// Error when reconciling a reported move history with the tracked one.
///
/// Every variant means the tracked position can no longer be trusted, most
/// likely because of a take-back. Reinitialize the session and advise the
/// user to double-check the board.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SyncError {
    /// The reported history is not the tracked history plus at most one
    /// move.
    InconsistentHistory {
        /// Number of moves tracked locally.
        local: usize,
        /// Number of moves reported.
        reported: usize,
    },
    /// A reported move could not be parsed.
    InvalidUci {
        /// Position of the move in the reported history.
        index: usize,
        #[allow(missing_docs)]
        error: ParseUciError,
    },
    /// A reported move could not be applied to the tracked position.
    InvalidState(InvalidStateError),
}

impl SyncError {
    /// What to tell the user.
    pub fn advice(&self) -> &'static str {
        "take-backs are not tracked; refresh the page to restore the board state and double-check the position"
    }
}

impl fmt::Display for SyncError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncError::InconsistentHistory { local, reported } => write!(
                f,
                "reported history of {reported} moves is inconsistent with {local} tracked moves"
            ),
            SyncError::InvalidUci { index, error } => {
                write!(f, "reported move {} is invalid: {error}", index + 1)
            }
            SyncError::InvalidState(error) => write!(f, "invalid tracked state: {error}"),
        }
    }
}

impl Error for SyncError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SyncError::InconsistentHistory { .. } => None,
            SyncError::InvalidUci { error, .. } => Some(error),
            SyncError::InvalidState(error) => Some(error),
        }
    }
}

impl From<InvalidStateError> for SyncError {
    fn from(error: InvalidStateError) -> SyncError {
        SyncError::InvalidState(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let error = InvalidStateError::new(Square::E4, InvalidStateKind::EmptyOrigin);
        assert_eq!(error.to_string(), "no piece on the origin square e4");

        let error = SyncError::from(error);
        assert!(error.source().is_some());
        assert_eq!(error.to_string(), "invalid tracked state: no piece on the origin square e4");

        let error = SyncError::InconsistentHistory { local: 4, reported: 2 };
        assert_eq!(
            error.to_string(),
            "reported history of 2 moves is inconsistent with 4 tracked moves"
        );
    }
}
