use crate::predicate::{Eval, Predicate};
use crate::relation::Optional;
use crate::term::Term;

/// Presence with a matching payload, see [`some`].
#[derive(Debug, Clone, Copy)]
pub struct SomeOf<T>(T);

/// Presence of any payload, see [`is_some`].
#[derive(Debug, Clone, Copy, Default)]
pub struct IsSome;

/// Absence, see [`none`].
#[derive(Debug, Clone, Copy, Default)]
pub struct IsNone;

/// Matches a present value whose payload matches `term`.
///
/// Literal and comparison terms look through a `Box`, `Rc` or `Arc`
/// payload, so `some(42)` matches `Some(Box::new(42))`.
///
/// ```
/// use patmatch::{some, Term, _x};
///
/// assert!(some(42).test(&Some(42)));
/// assert!(some(_x.gt(40)).test(&Some(42)));
/// assert!(!some(42).test(&None::<i32>));
/// ```
pub fn some<T>(term: T) -> Predicate<SomeOf<T>> {
    Predicate(SomeOf(term))
}

/// Matches any present value.
pub fn is_some() -> Predicate<IsSome> {
    Predicate(IsSome)
}

/// Matches an absent value.
pub fn none() -> Predicate<IsNone> {
    Predicate(IsNone)
}

impl<S, T> Eval<S> for SomeOf<T>
where
    S: ?Sized + Optional,
    T: Term<S::Target>,
{
    type Value = bool;
    type Output<'a> = bool
    where
        Self: 'a,
        S: 'a;

    fn eval<'a>(&'a self, subject: &'a S) -> bool {
        subject.present().is_some_and(|held| self.0.test(held))
    }
}

impl<S: ?Sized + Optional> Eval<S> for IsSome {
    type Value = bool;
    type Output<'a> = bool
    where
        Self: 'a,
        S: 'a;

    fn eval<'a>(&'a self, subject: &'a S) -> bool {
        subject.present().is_some()
    }
}

impl<S: ?Sized + Optional> Eval<S> for IsNone {
    type Value = bool;
    type Output<'a> = bool
    where
        Self: 'a,
        S: 'a;

    fn eval<'a>(&'a self, subject: &'a S) -> bool {
        subject.present().is_none()
    }
}
