use crate::chess::{Castling, Color, FigureId, ParseSquareError, Piece, San, Square};
use derive_more::{Display, Error, From};
use std::str::FromStr;

/// A [`Figure`][`crate::chess::Figure`] taken off the board by a [`Move`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Capture {
    pub figure: FigureId,
    pub piece: Piece,
    pub square: Square,
}

/// A move recorded in the history of a [`Board`][`crate::chess::Board`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[display(fmt = "{}{}", whence, whither)]
pub struct Move {
    pub(crate) figure: FigureId,
    pub(crate) piece: Piece,
    pub(crate) whence: Square,
    pub(crate) whither: Square,
    pub(crate) capture: Option<Capture>,
    pub(crate) castling: Option<Castling>,
}

impl Move {
    /// The [`FigureId`] of the figure that moved.
    #[inline(always)]
    pub fn figure(&self) -> FigureId {
        self.figure
    }

    /// The [`Piece`] that moved.
    #[inline(always)]
    pub fn piece(&self) -> Piece {
        self.piece
    }

    /// The source [`Square`].
    #[inline(always)]
    pub fn whence(&self) -> Square {
        self.whence
    }

    /// The destination [`Square`].
    #[inline(always)]
    pub fn whither(&self) -> Square {
        self.whither
    }

    /// The figure captured by this move, if any.
    #[inline(always)]
    pub fn capture(&self) -> Option<Capture> {
        self.capture
    }

    /// The castling side, if this move castles.
    #[inline(always)]
    pub fn castling(&self) -> Option<Castling> {
        self.castling
    }

    /// Whether this move captures a pawn en passant.
    #[inline(always)]
    pub fn is_en_passant(&self) -> bool {
        matches!(self.capture, Some(c) if c.square != self.whither)
    }

    /// This move as a [`Step`].
    #[inline(always)]
    pub fn step(&self) -> Step {
        Step::new(self.whence, self.whither)
    }

    /// This move in short algebraic notation.
    pub fn san(&self) -> San {
        let san = San::new(self.piece.role(), self.whither);

        if let Some(side) = self.castling {
            san.castling(side)
        } else if self.is_en_passant() {
            san.en_passant()
        } else if self.capture.is_some() {
            san.capture()
        } else {
            san
        }
    }
}

/// A pair of origin and destination squares, as given by a player.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "{}{}", whence, whither)]
pub struct Step {
    pub whence: Square,
    pub whither: Square,
}

impl Step {
    /// Constructs [`Step`] from a pair of squares.
    #[inline(always)]
    pub fn new(whence: Square, whither: Square) -> Self {
        Step { whence, whither }
    }
}

/// The reason why parsing [`Step`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
#[display(fmt = "failed to parse step; {}", _0)]
pub struct ParseStepError(ParseSquareError);

impl FromStr for Step {
    type Err = ParseStepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let i = s.char_indices().nth(2).map_or_else(|| s.len(), |(i, _)| i);
        Ok(Step::new(s[..i].parse()?, s[i..].parse()?))
    }
}

/// The reason why a move was rejected.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
pub enum IllegalMove {
    #[display(fmt = "there is no piece on square `{}`", _0)]
    Vacant(#[error(not(source))] Square),
    #[display(fmt = "square `{}` is occupied by an allied piece", _0)]
    Obstructed(#[error(not(source))] Square),
    #[display(fmt = "it is not {}'s turn to move", _0)]
    OutOfTurn(#[error(not(source))] Color),
    #[display(fmt = "square `{}` is unreachable from `{}`", _1, _0)]
    Unreachable(Square, Square),
}
