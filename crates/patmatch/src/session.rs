//! Match sessions and first-match-wins resolution.
//!
//! A [`Session`] owns the subjects. Arms are supplied either all at once as
//! a tuple ([`Session::arms`]) or one by one through a [`Resolver`]. In both
//! cases arms are checked in declaration order and the first one whose
//! pattern matches produces the result; later arms are neither checked nor
//! run.
//!
//! The result type is decided at compile time from the arms' kinds: all
//! side-effect arms give `()`, otherwise `Option<R>` where `R` is the common
//! type of every value-producing arm.

use crate::matcher::{Arity, Arm};
use crate::relation::{Join, Lift, Mode};
use tracing::trace;

/// The subjects of a match, captured once and matchable any number of times.
#[derive(Debug, Clone)]
pub struct Session<S> {
    subjects: S,
}

/// Starts a match over a tuple of subjects.
///
/// ```
/// use patmatch::{matching, pattern};
///
/// let session = matching((5,));
/// let hit = session.arms((
///     pattern![10].to(1),
///     pattern![5].to(2),
///     pattern![_].to(4),
/// ));
/// assert_eq!(hit, Some(2));
/// ```
pub fn matching<S: Arity>(subjects: S) -> Session<S> {
    Session { subjects }
}

impl<S: Arity> Session<S> {
    pub fn subjects(&self) -> &S {
        &self.subjects
    }

    pub fn into_subjects(self) -> S {
        self.subjects
    }

    /// Begins a chain of arms; finish it with [`Resolver::resolve`].
    pub fn arm<A: Arm<S>>(&self, arm: A) -> Resolver<'_, S, First<A>> {
        Resolver {
            session: self,
            arms: First(arm),
        }
    }

    /// Resolves a tuple of one to sixteen arms.
    pub fn arms<T>(&self, arms: T) -> <<T::List as ArmList<S>>::Mode as Mode>::Return
    where
        T: IntoArmList,
        T::List: ArmList<S> + Dispatch<S, <T::List as ArmList<S>>::Mode>,
    {
        resolve(&self.subjects, arms.into_list())
    }
}

/// An arm chain under construction.
#[must_use = "arms are only evaluated by `resolve`"]
pub struct Resolver<'s, S, L> {
    session: &'s Session<S>,
    arms: L,
}

impl<'s, S: Arity, L> Resolver<'s, S, L> {
    /// Appends an arm after all arms added so far.
    pub fn arm<A: Arm<S>>(self, arm: A) -> Resolver<'s, S, Chain<L, A>> {
        Resolver {
            session: self.session,
            arms: Chain(self.arms, arm),
        }
    }

    /// Evaluates the arms in order and returns the winner's result.
    pub fn resolve(self) -> <L::Mode as Mode>::Return
    where
        L: ArmList<S> + Dispatch<S, <L as ArmList<S>>::Mode>,
    {
        resolve(&self.session.subjects, self.arms)
    }
}

fn resolve<S, L>(subjects: &S, arms: L) -> <L::Mode as Mode>::Return
where
    S: Arity,
    L: ArmList<S> + Dispatch<S, <L as ArmList<S>>::Mode>,
{
    let mut checked = 0;
    match arms.dispatch(subjects, &mut checked) {
        Some(result) => {
            trace!(arity = S::ARITY, arms = L::LEN, arm = checked - 1, "arm matched");
            result
        }
        None => {
            trace!(arity = S::ARITY, arms = L::LEN, "no arm matched");
            <L::Mode as Mode>::unmatched()
        }
    }
}

// ============ Arm lists ============

/// The first arm of a list.
#[derive(Debug, Clone)]
pub struct First<A>(A);

/// All earlier arms `L`, followed by `A`.
#[derive(Debug, Clone)]
pub struct Chain<L, A>(L, A);

/// An ordered, non-empty list of arms and the result mode they unify to.
pub trait ArmList<S> {
    type Mode: Mode;
    const LEN: usize;
}

impl<S, A: Arm<S>> ArmList<S> for First<A> {
    type Mode = A::Mode;
    const LEN: usize = 1;
}

impl<S, L, A> ArmList<S> for Chain<L, A>
where
    L: ArmList<S>,
    A: Arm<S>,
    L::Mode: Join<A::Mode>,
{
    type Mode = <L::Mode as Join<A::Mode>>::Out;
    const LEN: usize = L::LEN + 1;
}

/// Checks arms in order, producing the first winner's result in mode `M`.
pub trait Dispatch<S, M: Mode> {
    /// `None` when no arm matched. `checked` counts the arms tested.
    fn dispatch(self, subjects: &S, checked: &mut usize) -> Option<M::Return>;
}

fn try_arm<S, M, A>(arm: A, subjects: &S, checked: &mut usize) -> Option<M::Return>
where
    M: Mode,
    A: Arm<S>,
    A::Mode: Lift<M>,
{
    *checked += 1;
    if arm.check(subjects) {
        Some(<A::Mode as Lift<M>>::lift(arm.get(subjects)))
    } else {
        None
    }
}

impl<S, M, A> Dispatch<S, M> for First<A>
where
    M: Mode,
    A: Arm<S>,
    A::Mode: Lift<M>,
{
    fn dispatch(self, subjects: &S, checked: &mut usize) -> Option<M::Return> {
        try_arm(self.0, subjects, checked)
    }
}

impl<S, M, L, A> Dispatch<S, M> for Chain<L, A>
where
    M: Mode,
    L: Dispatch<S, M>,
    A: Arm<S>,
    A::Mode: Lift<M>,
{
    fn dispatch(self, subjects: &S, checked: &mut usize) -> Option<M::Return> {
        let Chain(earlier, arm) = self;
        match earlier.dispatch(subjects, checked) {
            Some(result) => Some(result),
            None => try_arm(arm, subjects, checked),
        }
    }
}

// ============ Tuple form ============

/// A tuple of arms that converts into an arm list.
pub trait IntoArmList {
    type List;

    fn into_list(self) -> Self::List;
}

macro_rules! arm_tuple {
    (@ty [$acc:ty]) => { $acc };
    (@ty [$acc:ty] $head:ident $($rest:ident)*) => {
        arm_tuple!(@ty [Chain<$acc, $head>] $($rest)*)
    };
    (@ex [$acc:expr]) => { $acc };
    (@ex [$acc:expr] $head:ident $($rest:ident)*) => {
        arm_tuple!(@ex [Chain($acc, $head)] $($rest)*)
    };
    ($first:ident $(, $rest:ident)*) => {
        impl<$first $(, $rest)*> IntoArmList for ($first, $($rest,)*) {
            type List = arm_tuple!(@ty [First<$first>] $($rest)*);

            #[allow(non_snake_case)]
            fn into_list(self) -> Self::List {
                let ($first, $($rest,)*) = self;
                arm_tuple!(@ex [First($first)] $($rest)*)
            }
        }
    };
}

arm_tuple!(A0);
arm_tuple!(A0, A1);
arm_tuple!(A0, A1, A2);
arm_tuple!(A0, A1, A2, A3);
arm_tuple!(A0, A1, A2, A3, A4);
arm_tuple!(A0, A1, A2, A3, A4, A5);
arm_tuple!(A0, A1, A2, A3, A4, A5, A6);
arm_tuple!(A0, A1, A2, A3, A4, A5, A6, A7);
arm_tuple!(A0, A1, A2, A3, A4, A5, A6, A7, A8);
arm_tuple!(A0, A1, A2, A3, A4, A5, A6, A7, A8, A9);
arm_tuple!(A0, A1, A2, A3, A4, A5, A6, A7, A8, A9, A10);
arm_tuple!(A0, A1, A2, A3, A4, A5, A6, A7, A8, A9, A10, A11);
arm_tuple!(A0, A1, A2, A3, A4, A5, A6, A7, A8, A9, A10, A11, A12);
arm_tuple!(A0, A1, A2, A3, A4, A5, A6, A7, A8, A9, A10, A11, A12, A13);
arm_tuple!(A0, A1, A2, A3, A4, A5, A6, A7, A8, A9, A10, A11, A12, A13, A14);
arm_tuple!(A0, A1, A2, A3, A4, A5, A6, A7, A8, A9, A10, A11, A12, A13, A14, A15);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::pattern;
    use crate::patterns::{one_of, range};
    use crate::predicate::_x;
    use crate::wildcard::__;
    use std::cell::Cell;

    #[test]
    fn test_first_match_wins() {
        let session = matching((5,));
        let hit = session.arms((
            pattern((10,)).to(1),
            pattern((5,)).to(2),
            pattern((3,)).to(3),
            pattern((__,)).to(4),
        ));
        assert_eq!(hit, Some(2));
    }

    #[test]
    fn test_no_match_is_none() {
        let hit = matching((15,)).arms((
            pattern((10,)).to(1),
            pattern((5,)).to(2),
            pattern((3,)).to(3),
        ));
        assert_eq!(hit, None);
    }

    #[test]
    fn test_builder_chain() {
        let session = matching((12,));
        let hit = session
            .arm(pattern((range(1, 11),)).to(1))
            .arm(pattern((__,)).to(2))
            .resolve();
        assert_eq!(hit, Some(2));

        let hit = session
            .arm(pattern((range(1, 124),)).to(1))
            .arm(pattern((__,)).to(2))
            .resolve();
        assert_eq!(hit, Some(1));
    }

    #[test]
    fn test_later_arms_are_not_evaluated() {
        let checks = Cell::new(0);
        let counted = crate::Predicate::new(|_: &i32| {
            checks.set(checks.get() + 1);
            true
        });
        let ran = Cell::new(false);

        matching((4,)).arms((
            pattern((one_of((1, 2, 3, 4)),)).run(|| {}),
            pattern((counted,)).run(|| ran.set(true)),
        ));
        assert_eq!(checks.get(), 0);
        assert!(!ran.get());
    }

    #[test]
    fn test_void_mode_runs_winner_only() {
        let matched = Cell::new(0);
        let () = matching((1337, 42)).arms((
            pattern((_x.lt(0), __)).run(|| matched.set(1)),
            pattern((__, 42)).run(|| matched.set(2)),
            pattern((__, __)).run(|| matched.set(3)),
        ));
        assert_eq!(matched.get(), 2);
    }

    #[test]
    fn test_void_arm_winning_in_value_mode_yields_none() {
        let ran = Cell::new(false);
        let hit = matching(("x",)).arms((
            pattern(("x",)).run(|| ran.set(true)),
            pattern((__,)).to(1),
        ));
        assert_eq!(hit, None);
        assert!(ran.get());
    }

    #[test]
    fn test_results_widen_to_common_type() {
        let session = matching((3,));
        let hit = session.arms((
            pattern((1,)).to('a'),
            pattern((2,)).to(2i32),
            pattern((3,)).to(u64::MAX),
        ));
        assert_eq!(hit.unwrap_or(0), u64::MAX);

        let hit = matching((1,)).arms((
            pattern((1,)).to('a'),
            pattern((2,)).to(2u32),
            pattern((3,)).to(3u64),
        ));
        assert_eq!(hit, Some('a' as u64));
    }

    #[test]
    fn test_negative_result_wraps_into_unsigned_common_type() {
        let hit = matching((2,)).arms((pattern((1,)).to(1u64), pattern((2,)).to(-1i32)));
        assert_eq!(hit, Some(u64::MAX));
    }

    #[test]
    fn test_borrowed_subjects() {
        let n = 5;
        let name = String::from("abc");
        let session = matching((&n, &name));
        let hit = session.arms((
            pattern((_x.gt(10), __)).to(1),
            pattern((range(1, 9), "abd")).to(2),
            pattern((_x.eq(5), "abc")).to(3),
        ));
        assert_eq!(hit, Some(3));
        assert_eq!(*session.subjects().0, 5);
    }

    #[test]
    fn test_session_is_reusable() {
        let session = matching((String::from("abc"), 3));
        for _ in 0..3 {
            let hit = session.arms((
                pattern(("abc", _x.gt(5))).to(1),
                pattern(("abc", __)).with(|s: &String, n: &i32| s.len() as i32 + n),
            ));
            assert_eq!(hit, Some(6));
        }
        assert_eq!(session.subjects().1, 3);
    }

    #[test]
    fn test_lazy_results() {
        let made = Cell::new(0);
        let hit = matching((2,)).arms((
            pattern((1,)).then(|| {
                made.set(made.get() + 1);
                "one"
            }),
            pattern((2,)).then(|| {
                made.set(made.get() + 1);
                "two"
            }),
        ));
        assert_eq!(hit, Some("two"));
        assert_eq!(made.get(), 1);
    }

    #[test]
    fn test_sixteen_arms() {
        let hit = matching((15,)).arms((
            pattern((0,)).to(0),
            pattern((1,)).to(1),
            pattern((2,)).to(2),
            pattern((3,)).to(3),
            pattern((4,)).to(4),
            pattern((5,)).to(5),
            pattern((6,)).to(6),
            pattern((7,)).to(7),
            pattern((8,)).to(8),
            pattern((9,)).to(9),
            pattern((10,)).to(10),
            pattern((11,)).to(11),
            pattern((12,)).to(12),
            pattern((13,)).to(13),
            pattern((14,)).to(14),
            pattern((15,)).to(15),
        ));
        assert_eq!(hit, Some(15));
    }
}
