use crate::chess::Perspective;
use crate::util::Integer;
use derive_more::{Display, Error};
use std::{fmt, ops::Sub, str::FromStr};

/// A row on the chess board, numbered from White's side.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(i8)]
pub enum Rank {
    First,
    Second,
    Third,
    Fourth,
    Fifth,
    Sixth,
    Seventh,
    Eighth,
}

impl Rank {
    /// The grid row this rank occupies, counting from the top of the board.
    ///
    /// The eighth rank is row `0` and the first rank is row `7`.
    #[inline(always)]
    pub fn row(&self) -> u8 {
        self.flip().get() as u8
    }

    /// The rank that occupies a grid row, if any.
    #[inline(always)]
    pub fn from_row(y: u8) -> Option<Self> {
        y.convert().map(|r: Rank| r.flip())
    }

    /// The digit that names this rank.
    #[inline(always)]
    pub fn digit(&self) -> char {
        char::from(b'1' + self.get() as u8)
    }
}

unsafe impl Integer for Rank {
    type Repr = i8;
    const MIN: Self::Repr = Rank::First as _;
    const MAX: Self::Repr = Rank::Eighth as _;
}

impl Perspective for Rank {
    /// The rank as numbered from Black's side.
    #[inline(always)]
    fn flip(&self) -> Self {
        Self::new(Self::MAX - self.get())
    }
}

impl Sub for Rank {
    type Output = i8;

    /// The signed number of ranks between two ranks.
    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        self.get() - rhs.get()
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Write::write_char(f, self.digit())
    }
}

/// The reason why parsing [`Rank`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "expected a single digit between `1` and `8`")]
pub struct ParseRankError;

impl FromStr for Rank {
    type Err = ParseRankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c @ '1'..='8'), None) => (c as u8 - b'1').convert().ok_or(ParseRankError),
            _ => Err(ParseRankError),
        }
    }
}
