use core::num::NonZero;

/// A permanent insertion identifier. Ids start at 1 and are never reused.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub(crate) struct Id(NonZero<usize>);

impl Id {
    pub(crate) const FIRST: Self = Self::from_usize(1);

    #[inline]
    pub(crate) const fn from_usize(id: usize) -> Self {
        match NonZero::new(id) {
            Some(id) => Self(id),
            None => panic!("`Id::from_usize()` - `id` is zero!"),
        }
    }

    #[inline]
    pub(crate) const fn to_usize(self) -> usize {
        self.0.get()
    }

    /// Returns the id assigned after `self`.
    #[inline]
    pub(crate) const fn successor(self) -> Self {
        match self.0.checked_add(1) {
            Some(next) => Self(next),
            None => panic!("`Id::successor()` - id space exhausted!"),
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use static_assertions::assert_eq_size;

    // Verify our assumptions about `Id` and the niche optimization.
    assert_eq_size!(Id, Option<Id>);
    assert_eq_size!(Id, usize);

    #[test]
    #[should_panic(expected = "`Id::from_usize()` - `id` is zero!")]
    fn zero_id() {
        let _ = Id::from_usize(0);
    }

    #[test]
    #[should_panic(expected = "`Id::successor()` - id space exhausted!")]
    fn exhausted_id_space() {
        let _ = Id::from_usize(usize::MAX).successor();
    }

    #[test]
    fn first_id_is_one() {
        assert_eq!(Id::FIRST.to_usize(), 1);
        assert_eq!(Id::FIRST.successor().to_usize(), 2);
    }

    proptest! {
        #[test]
        fn id_round_trip(id in 1..usize::MAX) {
            let value = Id::from_usize(id);
            prop_assert_eq!(value.to_usize(), id);
            prop_assert!(value.successor() > value);
        }
    }
}
