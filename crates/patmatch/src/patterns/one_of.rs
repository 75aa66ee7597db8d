use crate::predicate::{Eval, Predicate};
use crate::term::Term;

/// A collection of alternative terms.
///
/// Implemented for tuples of up to twelve terms of mixed types, arrays,
/// vectors and slices.
pub trait Alternatives<S: ?Sized> {
    /// Tests the alternatives in order, stopping at the first match.
    fn any_match(&self, subject: &S) -> bool;
}

macro_rules! alternatives {
    ($($term:ident $idx:tt),+) => {
        impl<S: ?Sized, $($term: Term<S>),+> Alternatives<S> for ($($term,)+) {
            fn any_match(&self, subject: &S) -> bool {
                false $(|| self.$idx.test(subject))+
            }
        }
    };
}

alternatives!(T0 0);
alternatives!(T0 0, T1 1);
alternatives!(T0 0, T1 1, T2 2);
alternatives!(T0 0, T1 1, T2 2, T3 3);
alternatives!(T0 0, T1 1, T2 2, T3 3, T4 4);
alternatives!(T0 0, T1 1, T2 2, T3 3, T4 4, T5 5);
alternatives!(T0 0, T1 1, T2 2, T3 3, T4 4, T5 5, T6 6);
alternatives!(T0 0, T1 1, T2 2, T3 3, T4 4, T5 5, T6 6, T7 7);
alternatives!(T0 0, T1 1, T2 2, T3 3, T4 4, T5 5, T6 6, T7 7, T8 8);
alternatives!(T0 0, T1 1, T2 2, T3 3, T4 4, T5 5, T6 6, T7 7, T8 8, T9 9);
alternatives!(T0 0, T1 1, T2 2, T3 3, T4 4, T5 5, T6 6, T7 7, T8 8, T9 9, T10 10);
alternatives!(T0 0, T1 1, T2 2, T3 3, T4 4, T5 5, T6 6, T7 7, T8 8, T9 9, T10 10, T11 11);

impl<S: ?Sized, T: Term<S>, const N: usize> Alternatives<S> for [T; N] {
    fn any_match(&self, subject: &S) -> bool {
        self.iter().any(|term| term.test(subject))
    }
}

impl<S: ?Sized, T: Term<S>> Alternatives<S> for Vec<T> {
    fn any_match(&self, subject: &S) -> bool {
        self.iter().any(|term| term.test(subject))
    }
}

impl<S: ?Sized, T: Term<S>> Alternatives<S> for &[T] {
    fn any_match(&self, subject: &S) -> bool {
        self.iter().any(|term| term.test(subject))
    }
}

/// Membership in a set of alternatives, see [`one_of`].
#[derive(Debug, Clone)]
pub struct OneOf<A>(A);

/// Matches when the subject matches any of `alternatives`.
///
/// ```
/// use patmatch::{one_of, Term};
///
/// assert!(one_of((1, 2, 3)).test(&2));
/// assert!(one_of(["GET", "HEAD"]).test(&"HEAD"));
/// assert!(!one_of(vec!['a', 'b']).test(&'c'));
/// ```
pub fn one_of<A>(alternatives: A) -> Predicate<OneOf<A>> {
    Predicate(OneOf(alternatives))
}

impl<S, A> Eval<S> for OneOf<A>
where
    S: ?Sized,
    A: Alternatives<S>,
{
    type Value = bool;
    type Output<'a> = bool
    where
        Self: 'a,
        S: 'a;

    fn eval<'a>(&'a self, subject: &'a S) -> bool {
        self.0.any_match(subject)
    }
}
