use crate::predicate::{Eval, Predicate};
use crate::term::Terms;

/// Structural destructuring, see [`ds`].
#[derive(Debug, Clone, Copy)]
pub struct Ds<P>(P);

/// Matches a product type field by field.
///
/// `terms` is a tuple holding one term per leading field. Tuples destructure
/// directly; structs need `#[derive(Destructure)]`. Fields are tested left
/// to right and testing stops at the first mismatch. Terms may themselves
/// be `ds` patterns.
///
/// ```
/// use patmatch::{ds, Term, __, _x};
///
/// let pair = (1337, "123");
/// assert!(ds((_x.le(1338), "123")).test(&pair));
/// assert!(ds((__, "123")).test(&pair));
/// assert!(ds((1337,)).test(&pair));
/// assert!(!ds((1338, __)).test(&pair));
/// ```
pub fn ds<P>(terms: P) -> Predicate<Ds<P>> {
    Predicate(Ds(terms))
}

impl<S, P> Eval<S> for Ds<P>
where
    S: ?Sized,
    P: Terms<S>,
{
    type Value = bool;
    type Output<'a> = bool
    where
        Self: 'a,
        S: 'a;

    fn eval<'a>(&'a self, subject: &'a S) -> bool {
        self.0.test_fields(subject)
    }
}
