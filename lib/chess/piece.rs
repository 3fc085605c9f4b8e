use crate::chess::{Color, ParseColorError, ParseRoleError, Role};
use crate::util::Integer;
use derive_more::{Display, Error, From};
use serde::Deserialize;
use std::{fmt, str::FromStr};

/// A chess [piece][`Role`] of a certain [`Color`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Deserialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[serde(try_from = "String")]
#[repr(u8)]
pub enum Piece {
    WhitePawn,
    BlackPawn,
    WhiteKnight,
    BlackKnight,
    WhiteBishop,
    BlackBishop,
    WhiteRook,
    BlackRook,
    WhiteQueen,
    BlackQueen,
    WhiteKing,
    BlackKing,
}

impl Piece {
    /// Constructs [`Piece`] from a pair of [`Role`] and [`Color`].
    #[inline(always)]
    pub fn new(r: Role, c: Color) -> Self {
        <Self as Integer>::new(r.get() * 2 + c.get())
    }

    /// This piece's [`Role`].
    #[inline(always)]
    pub fn role(&self) -> Role {
        Role::new(self.get() / 2)
    }

    /// This piece's [`Color`].
    #[inline(always)]
    pub fn color(&self) -> Color {
        Color::new(self.get() % 2)
    }
}

unsafe impl Integer for Piece {
    type Repr = u8;
    const MIN: Self::Repr = Piece::WhitePawn as _;
    const MAX: Self::Repr = Piece::BlackKing as _;
}

/// Prints the two character label of this piece, e.g. `wP` or `bK`.
impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.color().prefix(), self.role())
    }
}

/// The reason why parsing [`Piece`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
#[display(fmt = "failed to parse piece; {}")]
pub enum ParsePieceError {
    #[display(fmt = "invalid color")]
    InvalidColor(ParseColorError),
    #[display(fmt = "invalid role")]
    InvalidRole(ParseRoleError),
}

impl FromStr for Piece {
    type Err = ParsePieceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let i = s.char_indices().nth(1).map_or_else(|| s.len(), |(i, _)| i);
        let color = s[..i].parse()?;
        let role = s[i..].parse()?;
        Ok(Piece::new(role, color))
    }
}

impl TryFrom<String> for Piece {
    type Error = ParsePieceError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
