//! Patterns bound to results.
//!
//! A [`Pattern`] is a tuple of terms, one per subject. Binding it to a
//! result with [`Pattern::to`], [`Pattern::then`], [`Pattern::with`],
//! [`Pattern::run`] or [`Pattern::run_with`] yields a [`Matcher`], which a
//! [`Session`](crate::Session) uses as one arm of a match.

use crate::relation::{Mode, Valued, Void};
use crate::term::Term;

// ============ Arity ============

/// A tuple of a statically known length.
pub trait Arity {
    const ARITY: usize;
}

/// A term tuple checked position by position against a subject tuple of
/// the same length.
pub trait Positional<S>: Arity {
    /// Tests every position from left to right, stopping at the first
    /// mismatch.
    fn check(&self, subjects: &S) -> bool;
}

macro_rules! positional {
    ($arity:expr; $($term:ident $subject:ident $idx:tt),+) => {
        impl<$($term),+> Arity for ($($term,)+) {
            const ARITY: usize = $arity;
        }

        impl<$($term,)+ $($subject),+> Positional<($($subject,)+)> for ($($term,)+)
        where
            $($term: Term<$subject>,)+
        {
            fn check(&self, subjects: &($($subject,)+)) -> bool {
                true $(&& self.$idx.test(&subjects.$idx))+
            }
        }
    };
}

positional!(1; T0 S0 0);
positional!(2; T0 S0 0, T1 S1 1);
positional!(3; T0 S0 0, T1 S1 1, T2 S2 2);
positional!(4; T0 S0 0, T1 S1 1, T2 S2 2, T3 S3 3);
positional!(5; T0 S0 0, T1 S1 1, T2 S2 2, T3 S3 3, T4 S4 4);
positional!(6; T0 S0 0, T1 S1 1, T2 S2 2, T3 S3 3, T4 S4 4, T5 S5 5);
positional!(7; T0 S0 0, T1 S1 1, T2 S2 2, T3 S3 3, T4 S4 4, T5 S5 5, T6 S6 6);
positional!(8; T0 S0 0, T1 S1 1, T2 S2 2, T3 S3 3, T4 S4 4, T5 S5 5, T6 S6 6, T7 S7 7);
positional!(9; T0 S0 0, T1 S1 1, T2 S2 2, T3 S3 3, T4 S4 4, T5 S5 5, T6 S6 6, T7 S7 7, T8 S8 8);
positional!(10; T0 S0 0, T1 S1 1, T2 S2 2, T3 S3 3, T4 S4 4, T5 S5 5, T6 S6 6, T7 S7 7, T8 S8 8, T9 S9 9);
positional!(11; T0 S0 0, T1 S1 1, T2 S2 2, T3 S3 3, T4 S4 4, T5 S5 5, T6 S6 6, T7 S7 7, T8 S8 8, T9 S9 9, T10 S10 10);
positional!(12; T0 S0 0, T1 S1 1, T2 S2 2, T3 S3 3, T4 S4 4, T5 S5 5, T6 S6 6, T7 S7 7, T8 S8 8, T9 S9 9, T10 S10 10, T11 S11 11);

// ============ Result kinds ============

/// How a matcher produces its result from the subjects.
pub trait Kind<S> {
    type Mode: Mode;

    fn produce(self, subjects: &S) -> <Self::Mode as Mode>::Output;
}

/// A callable taking a reference to each subject.
pub trait Call<S> {
    type Output;

    fn call(self, subjects: &S) -> Self::Output;
}

macro_rules! call {
    ($($subject:ident $idx:tt),+) => {
        impl<F, R, $($subject),+> Call<($($subject,)+)> for F
        where
            F: FnOnce($(&$subject),+) -> R,
        {
            type Output = R;

            fn call(self, subjects: &($($subject,)+)) -> R {
                self($(&subjects.$idx),+)
            }
        }
    };
}

call!(S0 0);
call!(S0 0, S1 1);
call!(S0 0, S1 1, S2 2);
call!(S0 0, S1 1, S2 2, S3 3);
call!(S0 0, S1 1, S2 2, S3 3, S4 4);
call!(S0 0, S1 1, S2 2, S3 3, S4 4, S5 5);
call!(S0 0, S1 1, S2 2, S3 3, S4 4, S5 5, S6 6);
call!(S0 0, S1 1, S2 2, S3 3, S4 4, S5 5, S6 6, S7 7);
call!(S0 0, S1 1, S2 2, S3 3, S4 4, S5 5, S6 6, S7 7, S8 8);
call!(S0 0, S1 1, S2 2, S3 3, S4 4, S5 5, S6 6, S7 7, S8 8, S9 9);
call!(S0 0, S1 1, S2 2, S3 3, S4 4, S5 5, S6 6, S7 7, S8 8, S9 9, S10 10);
call!(S0 0, S1 1, S2 2, S3 3, S4 4, S5 5, S6 6, S7 7, S8 8, S9 9, S10 10, S11 11);

/// A plain value, moved out when the arm wins.
#[derive(Debug, Clone)]
pub struct Value<T>(T);

/// A zero-argument callable producing a value.
#[derive(Debug, Clone, Copy)]
pub struct Then<F>(F);

/// A callable receiving the subjects and producing a value.
#[derive(Debug, Clone, Copy)]
pub struct With<F>(F);

/// A zero-argument callable run for its effect.
#[derive(Debug, Clone, Copy)]
pub struct Run<F>(F);

/// A callable receiving the subjects, run for its effect.
#[derive(Debug, Clone, Copy)]
pub struct RunWith<F>(F);

impl<S, T> Kind<S> for Value<T> {
    type Mode = Valued<T>;

    fn produce(self, _subjects: &S) -> T {
        self.0
    }
}

impl<S, F, R> Kind<S> for Then<F>
where
    F: FnOnce() -> R,
{
    type Mode = Valued<R>;

    fn produce(self, _subjects: &S) -> R {
        (self.0)()
    }
}

impl<S, F> Kind<S> for With<F>
where
    F: Call<S>,
{
    type Mode = Valued<F::Output>;

    fn produce(self, subjects: &S) -> F::Output {
        self.0.call(subjects)
    }
}

impl<S, F> Kind<S> for Run<F>
where
    F: FnOnce(),
{
    type Mode = Void;

    fn produce(self, _subjects: &S) {
        (self.0)()
    }
}

impl<S, F> Kind<S> for RunWith<F>
where
    F: Call<S, Output = ()>,
{
    type Mode = Void;

    fn produce(self, subjects: &S) {
        self.0.call(subjects)
    }
}

// ============ Pattern & Matcher ============

/// A tuple of terms awaiting a result.
#[derive(Debug, Clone, Copy)]
pub struct Pattern<P>(P);

/// Packages one term per subject. `pattern![..]` does the same and also
/// accepts a bare `_`.
///
/// ```
/// use patmatch::{pattern, __};
///
/// let arm = pattern((1, __)).to("first is one");
/// assert_eq!(arm.arity(), 2);
/// assert!(arm.check(&(1, "anything")));
/// ```
pub fn pattern<P: Arity>(terms: P) -> Pattern<P> {
    Pattern(terms)
}

impl<P> Pattern<P> {
    pub fn terms(&self) -> &P {
        &self.0
    }

    /// Produces `value` when the pattern matches.
    pub fn to<T>(self, value: T) -> Matcher<P, Value<T>> {
        Matcher::new(self.0, Value(value))
    }

    /// Produces the result of `f()` when the pattern matches. `f` is only
    /// called for the winning arm.
    pub fn then<F>(self, f: F) -> Matcher<P, Then<F>> {
        Matcher::new(self.0, Then(f))
    }

    /// Produces `f(&s0, .., &sk)` when the pattern matches.
    pub fn with<F>(self, f: F) -> Matcher<P, With<F>> {
        Matcher::new(self.0, With(f))
    }

    /// Runs `f()` for its effect when the pattern matches.
    pub fn run<F>(self, f: F) -> Matcher<P, Run<F>> {
        Matcher::new(self.0, Run(f))
    }

    /// Runs `f(&s0, .., &sk)` for its effect when the pattern matches.
    pub fn run_with<F>(self, f: F) -> Matcher<P, RunWith<F>> {
        Matcher::new(self.0, RunWith(f))
    }
}

/// A pattern bound to a result: one arm of a match.
#[derive(Debug, Clone)]
pub struct Matcher<P, K> {
    terms: P,
    kind: K,
}

impl<P, K> Matcher<P, K> {
    fn new(terms: P, kind: K) -> Self {
        Self { terms, kind }
    }

    /// Number of subjects this matcher expects.
    pub fn arity(&self) -> usize
    where
        P: Arity,
    {
        P::ARITY
    }

    /// Whether every term matches its subject.
    pub fn check<S>(&self, subjects: &S) -> bool
    where
        P: Positional<S>,
    {
        self.terms.check(subjects)
    }

    /// Produces the bound result, consuming the matcher so a held value is
    /// moved out exactly once.
    pub fn get<S>(self, subjects: &S) -> <K::Mode as Mode>::Output
    where
        K: Kind<S>,
    {
        self.kind.produce(subjects)
    }
}

/// What a session needs from each arm.
pub trait Arm<S> {
    type Mode: Mode;
    const ARITY: usize;

    fn check(&self, subjects: &S) -> bool;

    fn get(self, subjects: &S) -> <Self::Mode as Mode>::Output;
}

impl<S, P, K> Arm<S> for Matcher<P, K>
where
    P: Positional<S>,
    K: Kind<S>,
{
    type Mode = K::Mode;
    const ARITY: usize = P::ARITY;

    fn check(&self, subjects: &S) -> bool {
        Matcher::check(self, subjects)
    }

    fn get(self, subjects: &S) -> <Self::Mode as Mode>::Output {
        Matcher::get(self, subjects)
    }
}
