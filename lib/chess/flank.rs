use crate::util::Integer;
use bitflags::bitflags;
use derive_more::Display;

/// A horizontal direction relative to a square.
///
/// [`Flank::Left`] points towards the `a` file and [`Flank::Right`] towards the `h` file.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(u8)]
pub enum Flank {
    #[display(fmt = "left")]
    Left,
    #[display(fmt = "right")]
    Right,
}

impl Flank {
    /// The file delta towards this flank.
    #[inline(always)]
    pub fn offset(&self) -> i8 {
        match self {
            Flank::Left => -1,
            Flank::Right => 1,
        }
    }
}

unsafe impl Integer for Flank {
    type Repr = u8;
    const MIN: Self::Repr = Flank::Left as _;
    const MAX: Self::Repr = Flank::Right as _;
}

bitflags! {
    /// A set of [`Flank`]s.
    #[derive(Default)]
    pub struct Flanks: u8 {
        const LEFT =    0b01;
        const RIGHT =   0b10;
        const BOTH =    Self::LEFT.bits | Self::RIGHT.bits;
    }
}

impl Flanks {
    /// An iterator over the [`Flank`]s in this set, left first.
    #[inline(always)]
    pub fn flanks(self) -> impl Iterator<Item = Flank> {
        Flank::iter().filter(move |&f| self.contains(f.into()))
    }
}

impl From<Flank> for Flanks {
    #[inline(always)]
    fn from(f: Flank) -> Self {
        match f {
            Flank::Left => Flanks::LEFT,
            Flank::Right => Flanks::RIGHT,
        }
    }
}

impl From<Option<Flank>> for Flanks {
    #[inline(always)]
    fn from(f: Option<Flank>) -> Self {
        f.map_or_else(Flanks::empty, Flanks::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[test]
    fn both_is_left_and_right() {
        assert_eq!(Flanks::BOTH, Flanks::LEFT | Flanks::RIGHT);
        assert_eq!(Flanks::BOTH, Flanks::all());
    }

    #[test]
    fn flanks_iterates_left_to_right() {
        assert_eq!(
            Vec::from_iter(Flanks::BOTH.flanks()),
            vec![Flank::Left, Flank::Right]
        );

        assert_eq!(Flanks::empty().flanks().next(), None);
    }

    #[proptest]
    fn opposite_flanks_have_opposite_offsets(f: Flank) {
        let g = Flank::iter().find(|&g| g != f);
        assert_eq!(g.map(|g| g.offset()), Some(-f.offset()));
    }

    #[proptest]
    fn converting_optional_flank_yields_at_most_one_flank(f: Option<Flank>) {
        assert_eq!(Vec::from_iter(Flanks::from(f).flanks()), Vec::from_iter(f));
    }
}
