use crate::predicate::{Compare, Const, Equal, Eval, Operand, Predicate, Var, _x};
use std::borrow::Borrow;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};

/// Anything with an element count.
pub trait Length {
    fn length(&self) -> usize;
}

impl Length for str {
    fn length(&self) -> usize {
        self.len()
    }
}

impl Length for String {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> Length for [T] {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> Length for [T; N] {
    fn length(&self) -> usize {
        N
    }
}

macro_rules! collection_length {
    ($([$($g:ident),+] $ty:ty;)+) => {
        $(
            impl<$($g),+> Length for $ty {
                fn length(&self) -> usize {
                    self.len()
                }
            }
        )+
    };
}

collection_length! {
    [T] Vec<T>;
    [T] VecDeque<T>;
    [T] LinkedList<T>;
    [T] BinaryHeap<T>;
    [T, H] HashSet<T, H>;
    [T] BTreeSet<T>;
    [K, V, H] HashMap<K, V, H>;
    [K, V] BTreeMap<K, V>;
}

impl<L: Length + ?Sized> Length for &L {
    fn length(&self) -> usize {
        (**self).length()
    }
}

/// Length of an inner value, see [`size`].
#[derive(Debug, Clone, Copy)]
pub struct Len<E>(E);

/// Signed length of an inner value, see [`ssize`].
#[derive(Debug, Clone, Copy)]
pub struct SignedLen<E>(E);

/// The length of what `inner` evaluates to, for use in comparisons.
///
/// ```
/// use patmatch::{size, Term, _x};
///
/// assert!(size(_x).eq(3).test(&vec![1, 2, 3]));
/// assert!(size(_x).gt(2).test("abc"));
/// ```
pub fn size<P: Operand>(inner: P) -> Predicate<Len<P::Expr>> {
    Predicate(Len(inner.into_operand()))
}

/// Signed counterpart of [`size`].
pub fn ssize<P: Operand>(inner: P) -> Predicate<SignedLen<P::Expr>> {
    Predicate(SignedLen(inner.into_operand()))
}

/// Matches subjects holding exactly `count` elements.
pub fn sized(count: usize) -> Predicate<Compare<Len<Var>, Const<usize>, Equal>> {
    size(_x).eq(count)
}

/// Signed counterpart of [`sized`].
pub fn ssized(count: isize) -> Predicate<Compare<SignedLen<Var>, Const<isize>, Equal>> {
    ssize(_x).eq(count)
}

impl<S, E> Eval<S> for Len<E>
where
    S: ?Sized,
    E: Eval<S>,
    E::Value: Length,
{
    type Value = usize;
    type Output<'a> = usize
    where
        Self: 'a,
        S: 'a;

    fn eval<'a>(&'a self, subject: &'a S) -> usize {
        let out = self.0.eval(subject);
        Borrow::<E::Value>::borrow(&out).length()
    }
}

impl<S, E> Eval<S> for SignedLen<E>
where
    S: ?Sized,
    E: Eval<S>,
    E::Value: Length,
{
    type Value = isize;
    type Output<'a> = isize
    where
        Self: 'a,
        S: 'a;

    fn eval<'a>(&'a self, subject: &'a S) -> isize {
        let out = self.0.eval(subject);
        isize::try_from(Borrow::<E::Value>::borrow(&out).length()).unwrap_or(isize::MAX)
    }
}
