//! Pattern terms: the things a pattern tests one subject with.

use crate::predicate::{Eval, Predicate, Var};
use crate::relation::{Field, Truthy};
use std::borrow::Cow;
use std::rc::Rc;
use std::sync::Arc;

/// A single position of a pattern.
///
/// `test` is pure with respect to the pattern; it may be called any number
/// of times against any number of subjects.
pub trait Term<S: ?Sized> {
    fn test(&self, subject: &S) -> bool;
}

impl<S, E> Term<S> for Predicate<E>
where
    S: ?Sized,
    E: Eval<S>,
    E::Value: Truthy,
{
    fn test(&self, subject: &S) -> bool {
        let out = self.expr().eval(subject);
        std::borrow::Borrow::<E::Value>::borrow(&out).truthy()
    }
}

/// A bare variable always matches.
impl<S: ?Sized> Term<S> for Var {
    fn test(&self, _subject: &S) -> bool {
        true
    }
}

// ============ Literals ============

/// A value usable directly as a constant operand in predicates.
///
/// Implement it for your own `PartialEq` types to write
/// `_x.eq(MyType::A)`; ordering comparisons also need `PartialOrd`. Such
/// types compare by value, without looking through references.
pub trait Literal {}

macro_rules! literals {
    (@owner $ty:ty; $($owner:ty),+) => {
        $(
            impl Term<$owner> for $ty {
                fn test(&self, subject: &$owner) -> bool {
                    **subject == *self
                }
            }
        )+
    };
    ($($ty:ty),+) => {
        $(
            impl Literal for $ty {}

            impl Term<$ty> for $ty {
                fn test(&self, subject: &$ty) -> bool {
                    subject == self
                }
            }

            impl<'r> Term<&'r $ty> for $ty {
                fn test(&self, subject: &&'r $ty) -> bool {
                    **subject == *self
                }
            }

            literals!(@owner $ty; Box<$ty>, Rc<$ty>, Arc<$ty>);
        )+
    };
}

literals!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char);

impl Literal for &str {}
impl Literal for String {}
impl Literal for Cow<'_, str> {}

macro_rules! string_terms {
    ($(impl<$($lt:lifetime),*> $term:ty => $subject:ty;)+) => {
        $(
            impl<$($lt),*> Term<$subject> for $term {
                fn test(&self, subject: &$subject) -> bool {
                    AsRef::<str>::as_ref(subject) == AsRef::<str>::as_ref(self)
                }
            }
        )+
    };
}

string_terms! {
    impl<'t, 's> &'t str => &'s str;
    impl<'t, 's> &'t str => Cow<'s, str>;
    impl<'t, 's> &'t str => &'s String;
    impl<'t> &'t str => String;
    impl<'t> &'t str => str;
    impl<'s> String => &'s str;
    impl<'s> String => Cow<'s, str>;
    impl<'s> String => &'s String;
    impl<> String => String;
    impl<> String => str;
}

/// Equality against an arbitrary `PartialEq` value.
#[derive(Debug, Clone, Copy)]
pub struct Equals<T>(T);

/// A term matching subjects equal to `value`, for types that have no
/// literal term of their own.
///
/// ```
/// use patmatch::{eq, Term};
///
/// #[derive(PartialEq)]
/// enum Color { Red, Green }
///
/// assert!(eq(Color::Red).test(&Color::Red));
/// assert!(!eq(Color::Red).test(&Color::Green));
/// ```
pub fn eq<T>(value: T) -> Equals<T> {
    Equals(value)
}

impl<S, T> Term<S> for Equals<T>
where
    S: ?Sized + PartialEq<T>,
{
    fn test(&self, subject: &S) -> bool {
        subject.eq(&self.0)
    }
}

// ============ Positional terms ============

/// A tuple of terms tested position by position against the fields of a
/// product type. The tuple may be shorter than the product; extra fields
/// are not inspected.
pub trait Terms<S: ?Sized> {
    const LEN: usize;

    fn test_fields(&self, subject: &S) -> bool;
}

macro_rules! terms {
    ($len:expr; $($term:ident $idx:tt),+) => {
        impl<S, $($term),+> Terms<S> for ($($term,)+)
        where
            S: ?Sized $(+ Field<$idx>)+,
            $($term: Term< <S as Field<$idx>>::Type>,)+
        {
            const LEN: usize = $len;

            fn test_fields(&self, subject: &S) -> bool {
                true $(&& self.$idx.test(<S as Field<$idx>>::field(subject)))+
            }
        }
    };
}

terms!(1; T0 0);
terms!(2; T0 0, T1 1);
terms!(3; T0 0, T1 1, T2 2);
terms!(4; T0 0, T1 1, T2 2, T3 3);
terms!(5; T0 0, T1 1, T2 2, T3 3, T4 4);
terms!(6; T0 0, T1 1, T2 2, T3 3, T4 4, T5 5);
terms!(7; T0 0, T1 1, T2 2, T3 3, T4 4, T5 5, T6 6);
terms!(8; T0 0, T1 1, T2 2, T3 3, T4 4, T5 5, T6 6, T7 7);
terms!(9; T0 0, T1 1, T2 2, T3 3, T4 4, T5 5, T6 6, T7 7, T8 8);
terms!(10; T0 0, T1 1, T2 2, T3 3, T4 4, T5 5, T6 6, T7 7, T8 8, T9 9);
terms!(11; T0 0, T1 1, T2 2, T3 3, T4 4, T5 5, T6 6, T7 7, T8 8, T9 9, T10 10);
terms!(12; T0 0, T1 1, T2 2, T3 3, T4 4, T5 5, T6 6, T7 7, T8 8, T9 9, T10 10, T11 11);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::_x;
    use crate::wildcard::__;

    #[test]
    fn test_numeric_literals() {
        assert!(1337i32.test(&1337));
        assert!(!1337i32.test(&1338));
        assert!(7u64.test(&7u64));
        assert!(1.5f64.test(&1.5));
        assert!('a'.test(&'a'));
        assert!(true.test(&true));
    }

    #[test]
    fn test_literal_against_reference() {
        let n = 1337;
        assert!(1337i32.test(&&n));
    }

    #[test]
    fn test_literal_against_owning_pointer() {
        assert!(42i32.test(&Box::new(42)));
        assert!('x'.test(&Rc::new('x')));
        assert!(!1.5f64.test(&Arc::new(2.5)));
    }

    #[test]
    fn test_string_likes_compare_by_content() {
        let owned = String::from("123");
        assert!("123".test(&"123"));
        assert!("123".test(&owned));
        assert!("123".test(&&owned));
        assert!("123".test("123"));
        assert!("123".test(&Cow::Borrowed("123")));
        assert!(owned.test(&"123"));
        assert!(!"123".test(&"1234"));
    }

    #[test]
    fn test_predicate_term() {
        assert!(_x.lt(10).test(&3));
        assert!(!_x.lt(10).test(&30));
    }

    #[test]
    fn test_bare_variable_always_matches() {
        assert!(_x.test(&0));
        assert!(_x.test("anything"));
    }

    #[test]
    fn test_terms_match_a_prefix() {
        let subject = (1, "two", 3.0);
        assert!((1,).test_fields(&subject));
        assert!((1, "two").test_fields(&subject));
        assert!((__, __, _x.gt(2.5)).test_fields(&subject));
        assert!(!(2, __).test_fields(&subject));
        assert_eq!(<(i32, i32) as Terms<(i32, i32, i32)>>::LEN, 2);
    }
}
