//! Derive macros for `patmatch`.
//!
//! - `#[derive(Destructure)]` exposes the fields of a struct positionally,
//!   so `ds(..)` patterns can match them.
//! - `#[derive(Variants)]` lets `valued(..)` and `typed::<T>()` look inside
//!   an enum whose variants each carry one payload.
//!
//! Generated code refers to the `patmatch` crate by its absolute path.

mod destructure;
mod variants;

use proc_macro::TokenStream;

/// Implements `patmatch::Field<I>` for every field, in declaration order,
/// and `patmatch::Destructure`.
///
/// # Example
///
/// ```
/// use patmatch::{ds, Destructure, Term, _x};
///
/// #[derive(Destructure)]
/// struct Aggregate {
///     x: i32,
///     y: f32,
///     z: char,
/// }
///
/// let a = Aggregate { x: 1337, y: 42.0, z: 'b' };
/// assert!(ds![_x.le(1338), _, 'b'].test(&a));
/// assert_eq!(<Aggregate as patmatch::Destructure>::FIELD_COUNT, 3);
/// ```
#[proc_macro_derive(Destructure)]
pub fn derive_destructure(input: TokenStream) -> TokenStream {
    destructure::derive_destructure(input)
}

/// Implements `patmatch::Variant<T>` for the payload type `T` of every
/// single-field variant.
///
/// Two variants carrying the same payload type are rejected, since the
/// payload type alone must identify the alternative.
///
/// # Example
///
/// ```
/// use patmatch::{typed, valued, Term, Variants};
///
/// #[derive(Variants)]
/// enum Token {
///     Number(i64),
///     Word(String),
///     End,
/// }
///
/// assert!(valued(7i64).test(&Token::Number(7)));
/// assert!(typed::<String>().test(&Token::Word("w".into())));
/// assert!(!typed::<i64>().test(&Token::End));
/// ```
#[proc_macro_derive(Variants)]
pub fn derive_variants(input: TokenStream) -> TokenStream {
    variants::derive_variants(input)
}
