use crate::chess::{Color, File, Perspective, Square};
use crate::util::Integer;
use bitflags::bitflags;
use derive_more::Display;

/// The side of the board towards which a king castles.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(u8)]
pub enum Castling {
    #[display(fmt = "O-O")]
    Kingside,
    #[display(fmt = "O-O-O")]
    Queenside,
}

impl Castling {
    /// The home square of the king of a given side.
    #[inline(always)]
    pub fn king_home(side: Color) -> Square {
        Square::E1.relative_to(side)
    }

    /// The home square of the rook of a given side that castles towards this side.
    #[inline(always)]
    pub fn rook_home(&self, side: Color) -> Square {
        match self {
            Castling::Kingside => Square::H1.relative_to(side),
            Castling::Queenside => Square::A1.relative_to(side),
        }
    }

    /// The square the king of a given side lands on when castling towards this side.
    #[inline(always)]
    pub fn king_whither(&self, side: Color) -> Square {
        match self {
            Castling::Kingside => Square::G1.relative_to(side),
            Castling::Queenside => Square::C1.relative_to(side),
        }
    }

    /// The square the rook of a given side lands on when castling towards this side.
    #[inline(always)]
    pub fn rook_whither(&self, side: Color) -> Square {
        match self {
            Castling::Kingside => Square::F1.relative_to(side),
            Castling::Queenside => Square::D1.relative_to(side),
        }
    }

    /// How many files the king travels when castling.
    #[inline(always)]
    pub fn king_offset(&self) -> i8 {
        match self {
            Castling::Kingside => 2,
            Castling::Queenside => -2,
        }
    }

    /// How many files the rook travels when castling.
    #[inline(always)]
    pub fn rook_offset(&self) -> i8 {
        match self {
            Castling::Kingside => -2,
            Castling::Queenside => 3,
        }
    }

    /// The castling side whose rook starts on a given file, if any.
    #[inline(always)]
    pub fn from_rook_file(f: File) -> Option<Self> {
        match f {
            File::H => Some(Castling::Kingside),
            File::A => Some(Castling::Queenside),
            _ => None,
        }
    }
}

unsafe impl Integer for Castling {
    type Repr = u8;
    const MIN: Self::Repr = Castling::Kingside as _;
    const MAX: Self::Repr = Castling::Queenside as _;
}

bitflags! {
    /// The castling sides available to a king or rook.
    #[derive(Default)]
    pub struct Castles: u8 {
        const KINGSIDE =    0b01;
        const QUEENSIDE =   0b10;
    }
}

impl Castles {
    /// An iterator over the [`Castling`] sides in this set, kingside first.
    #[inline(always)]
    pub fn sides(self) -> impl Iterator<Item = Castling> {
        Castling::iter().filter(move |&c| self.contains(c.into()))
    }
}

impl From<Castling> for Castles {
    #[inline(always)]
    fn from(c: Castling) -> Self {
        match c {
            Castling::Kingside => Castles::KINGSIDE,
            Castling::Queenside => Castles::QUEENSIDE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn king_travels_its_offset_towards_the_rook(c: Castling, side: Color) {
        let king = Castling::king_home(side);
        assert_eq!(king.shift(c.king_offset(), 0), Some(c.king_whither(side)));
        assert_eq!(
            (c.king_whither(side).file() - king.file()).signum(),
            (c.rook_home(side).file() - king.file()).signum()
        );
    }

    #[proptest]
    fn rook_travels_its_offset_to_land_next_to_the_king(c: Castling, side: Color) {
        let rook = c.rook_home(side);
        assert_eq!(rook.shift(c.rook_offset(), 0), Some(c.rook_whither(side)));
        assert_eq!((c.rook_whither(side).file() - c.king_whither(side).file()).abs(), 1);
        assert_eq!(c.rook_whither(side).rank(), c.king_whither(side).rank());
    }

    #[proptest]
    fn castling_sides_are_found_from_rook_home(c: Castling, side: Color) {
        assert_eq!(Castling::from_rook_file(c.rook_home(side).file()), Some(c));
    }

    #[test]
    fn castling_is_printed_in_notation() {
        assert_eq!(Castling::Kingside.to_string(), "O-O");
        assert_eq!(Castling::Queenside.to_string(), "O-O-O");
    }

    #[test]
    fn castles_iterates_over_sides_in_order() {
        assert_eq!(Castles::empty().sides().next(), None);
        assert_eq!(
            Vec::from_iter(Castles::all().sides()),
            vec![Castling::Kingside, Castling::Queenside]
        );
        assert_eq!(
            Vec::from_iter(Castles::QUEENSIDE.sides()),
            vec![Castling::Queenside]
        );
    }

    #[proptest]
    fn castles_contains_side_it_was_converted_from(c: Castling) {
        assert!(Castles::from(c).contains(c.into()));
        assert_eq!(Vec::from_iter(Castles::from(c).sides()), vec![c]);
    }
}
