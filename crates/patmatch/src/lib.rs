//! Pattern matching over one or more values with composable predicates.
//!
//! A match has three parts: a [`Session`] holding the subjects, a list of
//! arms built from [`pattern`]s, and a resolution step that runs the first
//! arm whose pattern matches. Arms are checked strictly in order, and each
//! pattern tests its positions left to right, stopping at the first
//! mismatch.
//!
//! # Example
//!
//! ```
//! use patmatch::{matching, one_of, pattern, range, _x};
//!
//! let classify = |n: i32| {
//!     matching((n,)).arms((
//!         pattern![0].to("zero"),
//!         pattern![one_of((1, 2, 3))].to("small"),
//!         pattern![range(4, 99)].to("medium"),
//!         pattern![_x.lt(0)].to("negative"),
//!         pattern![_].to("large"),
//!     ))
//! };
//!
//! assert_eq!(classify(0), Some("zero"));
//! assert_eq!(classify(2), Some("small"));
//! assert_eq!(classify(-7), Some("negative"));
//! assert_eq!(classify(1000), Some("large"));
//! ```
//!
//! Several subjects are matched together, and structs destructure with
//! `ds![..]` once they derive [`Destructure`](derive@Destructure):
//!
//! ```
//! use patmatch::{ds, matching, pattern, Destructure, _x, _y};
//!
//! #[derive(Destructure)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! let p = Point { x: 3, y: -1 };
//! let quadrant = matching((p,)).arms((
//!     pattern![ds![0, 0]].to(0),
//!     pattern![ds![_x.gt(0), _y.gt(0)]].to(1),
//!     pattern![ds![_x.gt(0), _]].to(4),
//!     pattern![_].to(2),
//! ));
//! assert_eq!(quadrant, Some(4));
//! ```
//!
//! # Results
//!
//! Arms bound with [`Pattern::run`] or [`Pattern::run_with`] only have side
//! effects; a match made of such arms returns `()`. As soon as one arm
//! produces a value (with [`Pattern::to`], [`Pattern::then`] or
//! [`Pattern::with`]), the match returns `Option<R>`, `None` meaning that no
//! arm matched or that a side-effect arm won. Numeric value arms of
//! different types meet at their common type under the usual arithmetic
//! conversions (see [`Common`]):
//!
//! ```
//! use patmatch::{matching, pattern};
//!
//! let hit = matching((3,)).arms((
//!     pattern![1].to('a'),
//!     pattern![2].to(2i32),
//!     pattern![3].to(u64::MAX),
//! ));
//! assert_eq!(hit.unwrap_or(0), u64::MAX);
//! ```
//!
//! Subjects may be borrowed; predicates see through the reference:
//!
//! ```
//! use patmatch::{matching, pattern, range, _x};
//!
//! let n = 5;
//! let hit = matching((&n,)).arms((
//!     pattern![_x.gt(10)].to(1),
//!     pattern![range(1, 9)].to(2),
//! ));
//! assert_eq!(hit, Some(2));
//! ```
//!
//! # Contract violations
//!
//! Mistakes in how a match is put together are compile errors. A pattern
//! whose arity differs from the number of subjects is rejected:
//!
//! ```compile_fail
//! use patmatch::{matching, pattern};
//!
//! matching((1, 2)).arms((pattern![1].to(0),));
//! ```
//!
//! as is a match without arms:
//!
//! ```compile_fail
//! use patmatch::matching;
//!
//! matching((1,)).arms(());
//! ```
//!
//! as are value arms that share no common type:
//!
//! ```compile_fail
//! use patmatch::{matching, pattern};
//!
//! matching((1,)).arms((pattern![1].to("one"), pattern![_].to(2.5)));
//! ```
//!
//! and terms that cannot be compared with their subject:
//!
//! ```compile_fail
//! use patmatch::{matching, pattern};
//!
//! matching((1u8,)).arms((pattern!["one"].to(1),));
//! ```
//!
//! # Features
//!
//! - `derive` (default): re-exports `#[derive(Destructure)]` and
//!   `#[derive(Variants)]`.
//! - `dfa`: [`regex()`](fn@regex) compiles patterns to a DFA with `regex-automata`.

extern crate self as patmatch;

mod error;
mod matcher;
mod patterns;
mod predicate;
mod regex;
mod relation;
mod session;
mod term;
mod wildcard;

pub use self::regex::{Engine, FullMatch, RegexOptions};
pub use error::{Error, Result};
pub use matcher::{
    pattern, Arity, Arm, Call, Kind, Matcher, Pattern, Positional, Run, RunWith, Then, Value, With,
};
pub use patterns::*;
pub use predicate::{
    val, Always, And, Binary, BitwiseAnd, BitwiseOr, BitwiseXor, Comparand, Compare, Complement,
    Const, Equal, Equate, Eval, Func, Greater, GreaterEqual, Less, LessEqual, Map, Minus,
    Negative, NotEqual, Operand, Operator, Or, Order, Plus, Predicate, Quotient, Relation,
    Remainder, ShiftLeft, ShiftRight, Times, Unary, UnaryOperator, Var, _u, _v, _w, _x, _y, _z,
};
pub use relation::{
    Common, Destructure, Field, Join, Lift, Mode, Optional, Promote, Truthy, Valued, Variant, Void,
};
pub use session::{matching, ArmList, Chain, Dispatch, First, IntoArmList, Resolver, Session};
pub use term::{eq, Equals, Literal, Term, Terms};
pub use wildcard::{Wildcard, __};

#[cfg(feature = "derive")]
pub use patmatch_derive::{Destructure, Variants};

/// Builds a [`Pattern`] from a comma-separated list of terms, accepting a
/// bare `_` for the wildcard.
///
/// `pattern![a, _, c]` is `pattern((a, __, c))`. Only a top-level `_` is
/// rewritten; inside nested expressions write [`__`].
///
/// ```
/// use patmatch::{matching, pattern, _x};
///
/// let hit = matching((1337, "123")).arms((
///     pattern![_x.gt(2000), _].to(1),
///     pattern![_, "123"].to(2),
/// ));
/// assert_eq!(hit, Some(2));
/// ```
#[macro_export]
macro_rules! pattern {
    ($($terms:tt)+) => {
        $crate::pattern($crate::__terms!([] $($terms)+))
    };
}

/// Builds a destructuring term from a comma-separated list of field terms,
/// accepting a bare `_` for the wildcard. See [`ds()`](fn@ds).
#[macro_export]
macro_rules! ds {
    ($($terms:tt)+) => {
        $crate::ds($crate::__terms!([] $($terms)+))
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __terms {
    ([$($done:expr,)*]) => {
        ($($done,)*)
    };
    ([$($done:expr,)*] _ , $($rest:tt)*) => {
        $crate::__terms!([$($done,)* $crate::Wildcard,] $($rest)*)
    };
    ([$($done:expr,)*] _) => {
        $crate::__terms!([$($done,)* $crate::Wildcard,])
    };
    ([$($done:expr,)*] $term:expr , $($rest:tt)*) => {
        $crate::__terms!([$($done,)* $term,] $($rest)*)
    };
    ([$($done:expr,)*] $term:expr) => {
        $crate::__terms!([$($done,)* $term,])
    };
}
