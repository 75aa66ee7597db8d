use crate::predicate::{Eval, Predicate};
use crate::relation::Variant;
use std::any::type_name;
use std::marker::PhantomData;

/// Active alternative with a given value, see [`valued`].
#[derive(Debug, Clone, Copy)]
pub struct ValuedAs<T>(T);

/// Active alternative of a given type, see [`typed`].
pub struct Typed<T>(PhantomData<fn() -> T>);

/// Static type test, see [`is`].
pub struct Is<T: ?Sized>(PhantomData<fn() -> Box<T>>);

impl<T> Clone for Typed<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Typed<T> {}

impl<T: ?Sized> Clone for Is<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Is<T> {}

/// Matches a tagged union currently holding `value`.
///
/// The union must admit `T` as one of its alternatives, which is what
/// `#[derive(Variants)]` provides.
pub fn valued<T: PartialEq>(value: T) -> Predicate<ValuedAs<T>> {
    Predicate(ValuedAs(value))
}

/// Matches a tagged union whose active alternative holds a `T`.
pub fn typed<T>() -> Predicate<Typed<T>> {
    Predicate(Typed(PhantomData))
}

/// Matches when the subject's type is `T` or `&T`.
///
/// Decided per instantiation from the static type with lifetimes erased, so
/// borrowed subjects qualify; no value is inspected.
///
/// ```
/// use patmatch::{is, Term};
///
/// let n = 7;
/// assert!(is::<i32>().test(&n));
/// assert!(is::<i32>().test(&&n));
/// assert!(is::<str>().test("text"));
/// assert!(!is::<u8>().test(&7i32));
/// ```
pub fn is<T: ?Sized>() -> Predicate<Is<T>> {
    Predicate(Is(PhantomData))
}

impl<S, T> Eval<S> for ValuedAs<T>
where
    S: ?Sized + Variant<T>,
    T: PartialEq,
{
    type Value = bool;
    type Output<'a> = bool
    where
        Self: 'a,
        S: 'a;

    fn eval<'a>(&'a self, subject: &'a S) -> bool {
        subject.variant().is_some_and(|held| *held == self.0)
    }
}

impl<S, T> Eval<S> for Typed<T>
where
    S: ?Sized + Variant<T>,
{
    type Value = bool;
    type Output<'a> = bool
    where
        Self: 'a,
        S: 'a;

    fn eval<'a>(&'a self, subject: &'a S) -> bool {
        subject.variant().is_some()
    }
}

impl<S, T> Eval<S> for Is<T>
where
    S: ?Sized,
    T: ?Sized,
{
    type Value = bool;
    type Output<'a> = bool
    where
        Self: 'a,
        S: 'a;

    fn eval<'a>(&'a self, _subject: &'a S) -> bool {
        let subject = type_name::<S>();
        let wanted = type_name::<T>();
        subject == wanted || subject.strip_prefix('&') == Some(wanted)
    }
}
