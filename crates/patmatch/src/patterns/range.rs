use crate::predicate::{Eval, Order, Predicate};
use std::cmp::Ordering;

/// Inclusive bounds, see [`range`].
#[derive(Debug, Clone, Copy)]
pub struct Within<T> {
    lo: T,
    hi: T,
}

/// Matches subjects in `lo..=hi`.
///
/// `lo < hi` is checked in debug builds only.
///
/// ```
/// use patmatch::{range, Term};
///
/// assert!(range(1, 11).test(&11));
/// assert!(!range(1, 11).test(&12));
/// ```
pub fn range<T: PartialOrd>(lo: T, hi: T) -> Predicate<Within<T>> {
    debug_assert!(lo < hi, "range requires lo < hi");
    Predicate(Within { lo, hi })
}

impl<S, T> Eval<S> for Within<T>
where
    S: ?Sized + Order<T>,
{
    type Value = bool;
    type Output<'a> = bool
    where
        Self: 'a,
        S: 'a;

    fn eval<'a>(&'a self, subject: &'a S) -> bool {
        matches!(subject.order(&self.lo), Some(Ordering::Greater | Ordering::Equal))
            && matches!(subject.order(&self.hi), Some(Ordering::Less | Ordering::Equal))
    }
}
