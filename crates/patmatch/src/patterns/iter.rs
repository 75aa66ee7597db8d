//! Positions inside sequences.
//!
//! A [`Position`] is an index in `0..=len`, where `len` is the past-the-end
//! position. Positions are values, so they compare with `.eq(..)` and
//! friends like any other predicate output.

use crate::patterns::size::Length;
use crate::predicate::{Eval, Operand, Predicate};
use crate::term::{Literal, Term};
use std::borrow::Borrow;
use std::collections::VecDeque;

/// An index into a sequence; `len` is the end position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position(pub usize);

impl Literal for Position {}

/// An ordered, finite sequence of items.
pub trait Sequence: Length {
    type Item;

    fn items(&self) -> impl Iterator<Item = &Self::Item>;
}

impl<T> Sequence for [T] {
    type Item = T;

    fn items(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

impl<T, const N: usize> Sequence for [T; N] {
    type Item = T;

    fn items(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

impl<T> Sequence for Vec<T> {
    type Item = T;

    fn items(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

impl<T> Sequence for VecDeque<T> {
    type Item = T;

    fn items(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

impl<Q: Sequence + ?Sized> Sequence for &Q {
    type Item = Q::Item;

    fn items(&self) -> impl Iterator<Item = &Q::Item> {
        (**self).items()
    }
}

// ============ Endpoints ============

#[derive(Debug, Clone, Copy, Default)]
pub struct Begin;

#[derive(Debug, Clone, Copy, Default)]
pub struct End;

/// The first position of the subject.
pub fn begin() -> Predicate<Begin> {
    Predicate(Begin)
}

/// The past-the-end position of the subject.
pub fn end() -> Predicate<End> {
    Predicate(End)
}

impl<S: ?Sized + Sequence> Eval<S> for Begin {
    type Value = Position;
    type Output<'a> = Position
    where
        Self: 'a,
        S: 'a;

    fn eval<'a>(&'a self, _subject: &'a S) -> Position {
        Position(0)
    }
}

impl<S: ?Sized + Sequence> Eval<S> for End {
    type Value = Position;
    type Output<'a> = Position
    where
        Self: 'a,
        S: 'a;

    fn eval<'a>(&'a self, subject: &'a S) -> Position {
        Position(subject.length())
    }
}

// ============ Movement ============

#[derive(Debug, Clone, Copy)]
pub struct Advance<E> {
    from: E,
    count: usize,
}

#[derive(Debug, Clone, Copy)]
pub struct Retreat<E> {
    from: E,
    count: usize,
}

/// `from` moved `count` steps forward, stopping at the end.
pub fn next<P: Operand>(from: P, count: usize) -> Predicate<Advance<P::Expr>> {
    Predicate(Advance {
        from: from.into_operand(),
        count,
    })
}

/// `from` moved `count` steps back, stopping at the beginning.
pub fn prev<P: Operand>(from: P, count: usize) -> Predicate<Retreat<P::Expr>> {
    Predicate(Retreat {
        from: from.into_operand(),
        count,
    })
}

impl<S, E> Eval<S> for Advance<E>
where
    S: ?Sized + Sequence,
    E: Eval<S, Value = Position>,
{
    type Value = Position;
    type Output<'a> = Position
    where
        Self: 'a,
        S: 'a;

    fn eval<'a>(&'a self, subject: &'a S) -> Position {
        let Position(at) = *Borrow::<Position>::borrow(&self.from.eval(subject));
        Position(at.saturating_add(self.count).min(subject.length()))
    }
}

impl<S, E> Eval<S> for Retreat<E>
where
    S: ?Sized + Sequence,
    E: Eval<S, Value = Position>,
{
    type Value = Position;
    type Output<'a> = Position
    where
        Self: 'a,
        S: 'a;

    fn eval<'a>(&'a self, subject: &'a S) -> Position {
        let Position(at) = *Borrow::<Position>::borrow(&self.from.eval(subject));
        Position(at.saturating_sub(self.count))
    }
}

// ============ Search ============

#[derive(Debug, Clone, Copy)]
pub struct Find<T>(T);

#[derive(Debug, Clone, Copy)]
pub struct FindBy<T, F> {
    term: T,
    projection: F,
}

/// Position of the first item matching `term`, or [`end`] when none does.
///
/// ```
/// use patmatch::{end, find, Term};
///
/// let digits = vec![1, 2, 3, 0];
/// assert!(find(0).ne(end()).test(&digits));
/// assert!(find(10).eq(end()).test(&digits));
/// ```
pub fn find<T>(term: T) -> Predicate<Find<T>> {
    Predicate(Find(term))
}

/// Like [`find`], testing `projection(item)` instead of the item itself.
pub fn find_by<T, F>(term: T, projection: F) -> Predicate<FindBy<T, F>> {
    Predicate(FindBy { term, projection })
}

impl<S, T> Eval<S> for Find<T>
where
    S: ?Sized + Sequence,
    T: Term<S::Item>,
{
    type Value = Position;
    type Output<'a> = Position
    where
        Self: 'a,
        S: 'a;

    fn eval<'a>(&'a self, subject: &'a S) -> Position {
        let found = subject.items().position(|item| self.0.test(item));
        Position(found.unwrap_or_else(|| subject.length()))
    }
}

impl<S, T, F, R> Eval<S> for FindBy<T, F>
where
    S: ?Sized + Sequence,
    F: Fn(&S::Item) -> R,
    T: Term<R>,
{
    type Value = Position;
    type Output<'a> = Position
    where
        Self: 'a,
        S: 'a;

    fn eval<'a>(&'a self, subject: &'a S) -> Position {
        let found = subject
            .items()
            .position(|item| self.term.test(&(self.projection)(item)));
        Position(found.unwrap_or_else(|| subject.length()))
    }
}
