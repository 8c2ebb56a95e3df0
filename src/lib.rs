//! A library for turning chess shorthand into coordinate moves.
//!
//! People type (or say) moves in shorthand: `e4`, `Nf3`, `exd5`, `0-0`.
//! Game services accept coordinate moves: `e2e4`, `g1f3`, `e4d5`, `e1g1`.
//! Bridging the two requires knowing where the user's pieces are, so a
//! [`Session`] tracks the board from the move list the service reports.
//!
//! # Examples
//!
//! Follow a game and translate the user's moves:
//!
//! ```
//! use sanbridge::{Color, Session};
//!
//! let mut session = Session::new(Color::White);
//! assert_eq!(session.translate("e4")?.to_string(), "e2e4");
//!
//! session.reconcile(&["e2e4", "d7d5"])?;
//! assert_eq!(session.translate("exd5")?.to_string(), "e4d5");
//! assert_eq!(session.translate("Nf3")?.to_string(), "g1f3");
//! # Ok::<_, Box<dyn std::error::Error>>(())
//! ```
//!
//! Errors come with advice for the user:
//!
//! ```
//! # use sanbridge::{Color, Session};
//! let session = Session::new(Color::White);
//! let err = session.translate("Nh5").unwrap_err();
//! assert!(!err.advice().is_empty());
//! ```
//!
//! Also supports [shorthand](shorthand) and [UCI](uci) formats for moves
//! on their own.
//!
//! # Logging
//!
//! Diagnostics are emitted with [`tracing`](https://docs.rs/tracing/0.1):
//! session creation at `debug`, rejected histories at `warn`, and the
//! candidate narrowing of every translation at `trace`.
//!
//! # Feature flags
//!
//! * `serde`: Implements [`serde::Serialize`](https://docs.rs/serde/1/serde/trait.Serialize.html)
//!   and [`serde::Deserialize`](https://docs.rs/serde/1/serde/trait.Deserialize.html) for
//!   types with unique natural representations.
//! * `nohash-hasher`: Implements
//!   [`nohash_hasher::IsEnabled`](https://docs.rs/nohash-hasher/0.2/nohash_hasher/trait.IsEnabled.html)
//!   for sensible types.
//! * `arbitrary`: Implements
//!   [`arbitrary::Arbitrary`](https://docs.rs/arbitrary/1/arbitrary/trait.Arbitrary.html)
//!   for enums, for fuzzing.

#![doc(html_root_url = "https://docs.rs/sanbridge/0.1.0")]
#![forbid(unsafe_code)]
#![warn(missing_debug_implementations)]
#![cfg_attr(docs_rs, feature(doc_auto_cfg))]

mod castling_side;
mod color;
mod errors;
mod role;
mod session;
mod square;
mod types;

pub mod attacks;
pub mod bitboard;
pub mod board;
pub mod shorthand;
pub mod uci;
pub mod user_pieces;

pub use bitboard::Bitboard;
pub use board::Board;
pub use castling_side::{rook_move_for, CastlingSide};
pub use color::{Color, ParseColorError};
pub use errors::{InvalidStateError, InvalidStateKind, SyncError};
pub use role::Role;
pub use session::Session;
pub use shorthand::{ParseShorthandError, Shorthand, TranslateError};
pub use square::{File, ParseSquareError, Rank, Square};
pub use types::Piece;
pub use uci::{ParseUciError, Uci};
pub use user_pieces::UserPieces;

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for File {}

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Rank {}

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Square {}

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Role {}

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Color {}
