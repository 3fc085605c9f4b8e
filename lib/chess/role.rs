use crate::util::Integer;
use derive_more::{Display, Error};
use std::str::FromStr;

const CARDINAL: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const DIAGONAL: [(i8, i8); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

#[rustfmt::skip]
const ROYAL: [(i8, i8); 8] = [
    (1, 0), (-1, 0), (0, 1), (0, -1),
    (1, 1), (-1, 1), (1, -1), (-1, -1),
];

#[rustfmt::skip]
const KNIGHT: [(i8, i8); 8] = [
    (1, -2), (2, -1), (2, 1), (1, 2),
    (-1, 2), (-2, 1), (-2, -1), (-1, -2),
];

const PAWN: [(i8, i8); 2] = [(0, 1), (0, 2)];

/// The type of a chess [`Piece`][`crate::chess::Piece`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(u8)]
pub enum Role {
    #[display(fmt = "P")]
    Pawn,
    #[display(fmt = "N")]
    Knight,
    #[display(fmt = "B")]
    Bishop,
    #[display(fmt = "R")]
    Rook,
    #[display(fmt = "Q")]
    Queen,
    #[display(fmt = "K")]
    King,
}

impl Role {
    /// The letter that denotes this role in move notation.
    ///
    /// Pawns are denoted by the empty string.
    pub fn letter(&self) -> &'static str {
        match self {
            Role::Pawn => "",
            Role::Knight => "N",
            Role::Bishop => "B",
            Role::Rook => "R",
            Role::Queen => "Q",
            Role::King => "K",
        }
    }

    /// The declared movement offsets, in the order moves are generated.
    ///
    /// A [`Figure`][`crate::chess::Figure`] orients them by its color.
    pub fn offsets(&self) -> &'static [(i8, i8)] {
        match self {
            Role::Pawn => &PAWN,
            Role::Knight => &KNIGHT,
            Role::Bishop => &DIAGONAL,
            Role::Rook => &CARDINAL,
            Role::Queen | Role::King => &ROYAL,
        }
    }

    /// Whether pieces of this role slide any distance along their offsets.
    pub fn is_slider(&self) -> bool {
        matches!(self, Role::Bishop | Role::Rook | Role::Queen)
    }
}

unsafe impl Integer for Role {
    type Repr = u8;
    const MIN: Self::Repr = Role::Pawn as _;
    const MAX: Self::Repr = Role::King as _;
}

/// The reason why parsing [`Role`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "failed to parse role, expected one of `P`, `N`, `B`, `R`, `Q` or `K`")]
pub struct ParseRoleError;

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "P" => Ok(Role::Pawn),
            "N" => Ok(Role::Knight),
            "B" => Ok(Role::Bishop),
            "R" => Ok(Role::Rook),
            "Q" => Ok(Role::Queen),
            "K" => Ok(Role::King),
            _ => Err(ParseRoleError),
        }
    }
}
