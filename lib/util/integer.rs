use std::fmt::Debug;
use std::mem::{size_of, transmute_copy};
use std::{iter::Map, ops::RangeInclusive};

/// Trait for types that can be represented by a contiguous range of primitive integers.
///
/// # Safety
///
/// Must only be implemented for types that can be safely transmuted to and from [`Integer::Repr`].
pub unsafe trait Integer: Copy {
    /// The equivalent primitive integer type.
    type Repr: Primitive;

    /// The minimum repr.
    const MIN: Self::Repr;

    /// The maximum repr.
    const MAX: Self::Repr;

    /// The minimum value.
    #[inline(always)]
    fn lower() -> Self {
        Self::new(Self::MIN)
    }

    /// The maximum value.
    #[inline(always)]
    fn upper() -> Self {
        Self::new(Self::MAX)
    }

    /// Casts from [`Integer::Repr`].
    #[inline(always)]
    fn new(i: Self::Repr) -> Self {
        debug_assert!(Self::in_range(i));
        debug_assert_eq!(size_of::<Self>(), size_of::<Self::Repr>());
        unsafe { transmute_copy(&i) }
    }

    /// Casts to [`Integer::Repr`].
    #[inline(always)]
    fn get(self) -> Self::Repr {
        unsafe { transmute_copy(&self) }
    }

    /// Converts to another [`Integer`] if possible without data loss.
    #[inline(always)]
    fn convert<I: Integer>(self) -> Option<I> {
        let i: i64 = self.get().into();
        let r = I::Repr::try_from(i).ok()?;
        I::in_range(r).then(|| I::new(r))
    }

    /// Whether a value is in the range `(Self::MIN..=Self::MAX)`.
    #[inline(always)]
    fn in_range(i: Self::Repr) -> bool {
        Self::MIN <= i && i <= Self::MAX
    }

    /// An iterator over all values in the range [`Integer::MIN`]..=[`Integer::MAX`].
    #[inline(always)]
    #[allow(clippy::type_complexity)]
    fn iter() -> Map<RangeInclusive<Self::Repr>, fn(Self::Repr) -> Self>
    where
        RangeInclusive<Self::Repr>: Iterator<Item = Self::Repr>,
    {
        (Self::MIN..=Self::MAX).map(Self::new)
    }
}

/// Trait for primitive integer types.
pub trait Primitive: Integer<Repr = Self> + Debug + Ord + Into<i64> + TryFrom<i64> {}

macro_rules! impl_primitive_for {
    ($($i: ty),*) => {
        $(
            impl Primitive for $i {}

            unsafe impl Integer for $i {
                type Repr = $i;
                const MIN: Self::Repr = <$i>::MIN;
                const MAX: Self::Repr = <$i>::MAX;
            }
        )*
    };
}

impl_primitive_for!(i8, u8, i16, u16, i32, u32, i64);
