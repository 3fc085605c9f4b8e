use crate::chess::{File, ParseFileError, ParseRankError, Perspective, Rank};
use crate::util::Integer;
use derive_more::{Display, Error, From};
use serde::Deserialize;
use std::{fmt, str::FromStr};

/// A square on the chess board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Deserialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[serde(try_from = "String")]
#[repr(i8)]
#[rustfmt::skip]
pub enum Square {
    A1, B1, C1, D1, E1, F1, G1, H1,
    A2, B2, C2, D2, E2, F2, G2, H2,
    A3, B3, C3, D3, E3, F3, G3, H3,
    A4, B4, C4, D4, E4, F4, G4, H4,
    A5, B5, C5, D5, E5, F5, G5, H5,
    A6, B6, C6, D6, E6, F6, G6, H6,
    A7, B7, C7, D7, E7, F7, G7, H7,
    A8, B8, C8, D8, E8, F8, G8, H8,
}

impl Square {
    /// Constructs [`Square`] from a pair of [`File`] and [`Rank`].
    #[inline(always)]
    pub fn new(f: File, r: Rank) -> Self {
        <Self as Integer>::new(f.get() | r.get() << 3)
    }

    /// This square's [`File`].
    #[inline(always)]
    pub fn file(&self) -> File {
        File::new(self.get() & 0b111)
    }

    /// This square's [`Rank`].
    #[inline(always)]
    pub fn rank(&self) -> Rank {
        Rank::new(self.get() >> 3)
    }

    /// The square `df` files and `dr` ranks away, if it is on the board.
    #[inline(always)]
    pub fn shift(&self, df: i8, dr: i8) -> Option<Self> {
        let f = self.file().get().checked_add(df)?;
        let r = self.rank().get().checked_add(dr)?;
        Some(Square::new(f.convert()?, r.convert()?))
    }

    /// This square's grid coordinates `(x, y)`.
    ///
    /// `x` counts files from `a` and `y` counts rows from the top of the board,
    /// so `(0, 0)` is `a8` and `(7, 7)` is `h1`.
    #[inline(always)]
    pub fn coordinates(&self) -> (u8, u8) {
        (self.file().column(), self.rank().row())
    }
}

unsafe impl Integer for Square {
    type Repr = i8;
    const MIN: Self::Repr = Square::A1 as _;
    const MAX: Self::Repr = Square::H8 as _;
}

impl Perspective for Square {
    /// Flips this square's [`Rank`].
    #[inline(always)]
    fn flip(&self) -> Self {
        <Self as Integer>::new(self.get() ^ Square::A8.get())
    }
}

/// The reason why converting grid coordinates to a [`Square`] failed.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[display(fmt = "coordinates `({}, {})` are out of bounds", _0, _1)]
pub struct OutOfBounds(pub u8, pub u8);

impl TryFrom<(u8, u8)> for Square {
    type Error = OutOfBounds;

    fn try_from((x, y): (u8, u8)) -> Result<Self, Self::Error> {
        match Option::zip(File::from_column(x), Rank::from_row(y)) {
            Some((f, r)) => Ok(Square::new(f, r)),
            None => Err(OutOfBounds(x, y)),
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.file(), f)?;
        fmt::Display::fmt(&self.rank(), f)?;
        Ok(())
    }
}

/// The reason why parsing [`Square`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
#[display(fmt = "failed to parse square; {}")]
pub enum ParseSquareError {
    #[display(fmt = "invalid file")]
    InvalidFile(ParseFileError),
    #[display(fmt = "invalid rank")]
    InvalidRank(ParseRankError),
}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let i = s.char_indices().nth(1).map_or_else(|| s.len(), |(i, _)| i);
        Ok(Square::new(s[..i].parse()?, s[i..].parse()?))
    }
}

impl TryFrom<String> for Square {
    type Error = ParseSquareError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;
    use test_strategy::proptest;

    #[test]
    fn square_guarantees_zero_value_optimization() {
        assert_eq!(size_of::<Option<Square>>(), size_of::<Square>());
    }

    #[proptest]
    fn new_constructs_square_from_pair_of_file_and_rank(sq: Square) {
        assert_eq!(Square::new(sq.file(), sq.rank()), sq);
    }

    #[proptest]
    fn flipping_square_preserves_file_and_flips_rank(sq: Square) {
        assert_eq!(sq.flip(), Square::new(sq.file(), sq.rank().flip()));
    }

    #[proptest]
    fn shifting_square_moves_file_and_rank(
        sq: Square,
        #[strategy(-7i8..=7)] df: i8,
        #[strategy(-7i8..=7)] dr: i8,
    ) {
        match sq.shift(df, dr) {
            Some(to) => {
                assert_eq!(to.file() - sq.file(), df);
                assert_eq!(to.rank() - sq.rank(), dr);
            }

            None => {
                let f = sq.file().get() + df;
                let r = sq.rank().get() + dr;
                assert!(!(0..8).contains(&f) || !(0..8).contains(&r));
            }
        }
    }

    #[proptest]
    fn shifting_square_by_nothing_is_an_identity(sq: Square) {
        assert_eq!(sq.shift(0, 0), Some(sq));
    }

    #[test]
    fn grid_coordinates_count_rows_from_the_top() {
        assert_eq!(Square::A8.coordinates(), (0, 0));
        assert_eq!(Square::H1.coordinates(), (7, 7));
        assert_eq!(Square::B2.coordinates(), (1, 6));
        assert_eq!(Square::try_from((0, 3)), Ok(Square::A5));
    }

    #[proptest]
    fn converting_coordinates_of_square_is_an_identity(sq: Square) {
        assert_eq!(Square::try_from(sq.coordinates()), Ok(sq));
    }

    #[proptest]
    fn converting_coordinates_fails_if_out_of_bounds(
        #[strategy(8u8..)] x: u8,
        #[strategy(..8u8)] y: u8,
    ) {
        assert_eq!(Square::try_from((x, y)), Err(OutOfBounds(x, y)));
        assert_eq!(Square::try_from((y, x)), Err(OutOfBounds(y, x)));
    }

    #[proptest]
    fn parsing_printed_square_is_an_identity(sq: Square) {
        assert_eq!(sq.to_string().parse(), Ok(sq));
    }

    #[proptest]
    fn parsing_square_fails_if_file_invalid(
        #[filter(!('a'..='h').contains(&#c))] c: char,
        r: Rank,
    ) {
        assert_eq!(
            [c.to_string(), r.to_string()].concat().parse::<Square>(),
            Err(ParseSquareError::InvalidFile(ParseFileError))
        );
    }

    #[proptest]
    fn parsing_square_fails_if_rank_invalid(
        f: File,
        #[filter(!('1'..='8').contains(&#c))] c: char,
    ) {
        assert_eq!(
            [f.to_string(), c.to_string()].concat().parse::<Square>(),
            Err(ParseSquareError::InvalidRank(ParseRankError))
        );
    }

    #[proptest]
    fn parsing_square_fails_if_length_not_two(#[filter(#s.chars().count() != 2)] s: String) {
        assert_eq!(s.parse::<Square>().ok(), None);
    }
}
