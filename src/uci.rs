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

//! Parse and write coordinate moves.
//!
//! A coordinate move names the origin square, the destination square and,
//! for promotions, the new piece type: `e2e4`, `g8f6`, `e7e8q`. This is the
//! form game services report their move lists in and accept submissions in.
//!
//! # Examples
//!
//! ```
//! use sanbridge::{uci::Uci, Role, Square};
//!
//! let uci: Uci = "e7e8q".parse()?;
//! assert_eq!(uci, Uci {
//!     from: Square::E7,
//!     to: Square::E8,
//!     promotion: Some(Role::Queen),
//! });
//! assert_eq!(uci.to_string(), "e7e8q");
//! # Ok::<_, sanbridge::uci::ParseUciError>(())
//! ```

use std::{error::Error, fmt, str::FromStr};

use crate::{role::Role, square::Square};

/// Error when parsing an invalid coordinate move.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseUciError;

impl fmt::Display for ParseUciError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid coordinate move")
    }
}

impl Error for ParseUciError {}

/// A move given by its origin and destination squares.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Uci {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<Role>,
}

impl Uci {
    pub const fn new(from: Square, to: Square) -> Uci {
        Uci {
            from,
            to,
            promotion: None,
        }
    }

    /// Parses a coordinate move. The promotion letter may be given in either
    /// case.
    ///
    /// # Errors
    ///
    /// Returns [`ParseUciError`] if the input is not two square names,
    /// optionally followed by the letter of a knight, bishop, rook or queen.
    pub fn from_ascii(uci: &[u8]) -> Result<Uci, ParseUciError> {
        if uci.len() != 4 && uci.len() != 5 {
            return Err(ParseUciError);
        }

        let from = Square::from_ascii(&uci[0..2]).map_err(|_| ParseUciError)?;
        let to = Square::from_ascii(&uci[2..4]).map_err(|_| ParseUciError)?;

        let promotion = match uci.get(4) {
            Some(&ch) => match Role::from_char(char::from(ch)) {
                Some(role @ (Role::Knight | Role::Bishop | Role::Rook | Role::Queen)) => {
                    Some(role)
                }
                _ => return Err(ParseUciError),
            },
            None => None,
        };

        Ok(Uci {
            from,
            to,
            promotion,
        })
    }
}

impl FromStr for Uci {
    type Err = ParseUciError;

    fn from_str(uci: &str) -> Result<Uci, ParseUciError> {
        Uci::from_ascii(uci.as_bytes())
    }
}

impl fmt::Display for Uci {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.promotion {
            Some(promotion) => write!(f, "{}{}{}", self.from, self.to, promotion.char()),
            None => write!(f, "{}{}", self.from, self.to),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Uci {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Uci {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct UciVisitor;

        impl serde::de::Visitor<'_> for UciVisitor {
            type Value = Uci;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("coordinate move")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                value.parse().map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_str(UciVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("g1f3".parse(), Ok(Uci::new(Square::G1, Square::F3)));
        assert_eq!(
            "a2a1N".parse(),
            Ok(Uci {
                from: Square::A2,
                to: Square::A1,
                promotion: Some(Role::Knight),
            })
        );
        for invalid in ["", "e2", "e2e", "e2e4qq", "e2e4k", "e2e4p", "i2e4", "e0e4", "E2E4"] {
            assert_eq!(invalid.parse::<Uci>(), Err(ParseUciError), "{invalid}");
        }
    }

    #[test]
    fn test_write() {
        for uci in ["e2e4", "e1g1", "h7h8r", "b2a1n"] {
            assert_eq!(uci.parse::<Uci>().expect("valid uci").to_string(), uci);
        }
        assert_eq!("d7d8Q".parse::<Uci>().expect("valid uci").to_string(), "d7d8q");
    }
}
