use crate::chess::{Color, File, Perspective, Piece, Rank, Role, Square};
use crate::util::Integer;
use derive_more::{Display, Error, From};
use serde::Deserialize;
use std::{collections::BTreeMap, str::FromStr};

const BACK_RANK: [Role; 8] = [
    Role::Rook,
    Role::Knight,
    Role::Bishop,
    Role::Queen,
    Role::King,
    Role::Bishop,
    Role::Knight,
    Role::Rook,
];

/// An arrangement of pieces on the board and the side to move.
///
/// Any field left out when deserializing takes its value from the standard starting position.
///
/// ```ron
/// (pieces: {"e1": "wK", "a1": "wR", "e8": "bK"}, turn: black)
/// ```
#[derive(Debug, Clone, Eq, PartialEq, Hash, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct Setup {
    /// The piece on each occupied square.
    pub pieces: BTreeMap<Square, Piece>,

    /// The side to move.
    pub turn: Color,
}

impl Default for Setup {
    fn default() -> Self {
        let mut pieces = BTreeMap::new();

        for c in Color::iter() {
            for (f, &r) in File::iter().zip(&BACK_RANK) {
                let back = Square::new(f, Rank::First.relative_to(c));
                let front = Square::new(f, Rank::Second.relative_to(c));
                pieces.insert(back, Piece::new(r, c));
                pieces.insert(front, Piece::new(Role::Pawn, c));
            }
        }

        Setup {
            pieces,
            turn: Color::White,
        }
    }
}

/// The reason why parsing [`Setup`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
#[display(fmt = "failed to parse setup")]
pub struct ParseSetupError(ron::de::SpannedError);

impl FromStr for Setup {
    type Err = ParseSetupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ron::de::from_str(s)?)
    }
}
