//! The pattern library: ready-made predicates used as pattern terms.
//!
//! Every constructor returns a [`Predicate`](crate::Predicate), so the
//! results compose with `!`, `.and(..)` and `.or(..)` like any other
//! predicate.

mod ds;
mod iter;
mod one_of;
mod optional;
mod range;
mod size;
mod text;
mod variant;

pub use ds::{ds, Ds};
pub use iter::{
    begin, end, find, find_by, next, prev, Advance, Begin, End, Find, FindBy, Position, Retreat,
    Sequence,
};
pub use one_of::{one_of, Alternatives, OneOf};
pub use optional::{is_some, none, some, IsNone, IsSome, SomeOf};
pub use range::{range, Within};
pub use size::{size, sized, ssize, ssized, Len, Length, SignedLen};
pub use text::{regex, regex_with, sregex, try_regex, try_sregex, Matches};
pub use variant::{is, typed, valued, Is, Typed, ValuedAs};
