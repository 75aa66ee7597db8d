//! Type-level relations used by patterns and by match resolution.
//!
//! Nothing in here has runtime state. These traits answer questions such as
//! "which result does a list of arms produce", "does this tagged union admit
//! `T`" and "what is field `I` of this product type".

use std::marker::PhantomData;

// ============ Result modes ============

/// Shape of what an arm, or a whole match, produces.
///
/// [`Void`] arms only run for their side effects; [`Valued`] arms produce a
/// value. A match in valued mode returns `Option<T>`, in void mode `()`.
pub trait Mode {
    /// What a single arm of this mode hands back.
    type Output;
    /// What a whole match in this mode returns.
    type Return;

    /// The return value when no arm matched.
    fn unmatched() -> Self::Return;
}

/// Side-effect-only mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct Void;

/// Value-producing mode.
#[derive(Debug)]
pub struct Valued<T>(PhantomData<T>);

impl Mode for Void {
    type Output = ();
    type Return = ();

    fn unmatched() -> Self::Return {}
}

impl<T> Mode for Valued<T> {
    type Output = T;
    type Return = Option<T>;

    fn unmatched() -> Self::Return {
        None
    }
}

/// Unification of two modes. Void arms drop out; two valued arms meet at
/// their [`Common`] type.
pub trait Join<Rhs: Mode>: Mode {
    type Out: Mode;
}

impl Join<Void> for Void {
    type Out = Void;
}

impl<T> Join<Valued<T>> for Void {
    type Out = Valued<T>;
}

impl<T> Join<Void> for Valued<T> {
    type Out = Valued<T>;
}

impl<T, U> Join<Valued<U>> for Valued<T>
where
    T: Common<U>,
{
    type Out = Valued<<T as Common<U>>::Out>;
}

/// Carries an arm's output into the mode of the whole match.
pub trait Lift<M: Mode>: Mode {
    fn lift(output: Self::Output) -> M::Return;
}

impl Lift<Void> for Void {
    fn lift(_output: ()) {}
}

impl<U> Lift<Valued<U>> for Void {
    fn lift(_output: ()) -> Option<U> {
        None
    }
}

impl<T, U> Lift<Valued<U>> for Valued<T>
where
    T: Promote<U>,
{
    fn lift(output: T) -> Option<U> {
        Some(output.promote())
    }
}

// ============ Common types ============

/// The type two arm results meet at.
///
/// Every type is its own common type. Numeric types follow the usual
/// arithmetic conversions: `char` and integers narrower than `i32` count as
/// `i32`, floats win over integers, two integers of the same signedness
/// meet at the wider one, and a signed integer meets an unsigned one at
/// the signed type only when it is strictly wider, otherwise at the
/// unsigned type. `isize` and `usize` rank as 64 bits and give way to
/// `i64` and `u64`.
pub trait Common<Rhs> {
    type Out;
}

impl<T> Common<T> for T {
    type Out = T;
}

macro_rules! joins {
    ($($a:ty: $($b:ty => $out:ty),+;)+) => {
        $($(
            impl Common<$b> for $a {
                type Out = $out;
            }

            impl Common<$a> for $b {
                type Out = $out;
            }
        )+)+
    };
}

joins! {
    i8: i16 => i16, i32 => i32, i64 => i64, i128 => i128, isize => isize, u8 => u8, u16 => u16,
        u32 => u32, u64 => u64, u128 => u128, usize => usize, char => i32, f32 => f32, f64 => f64;
    i16: i32 => i32, i64 => i64, i128 => i128, isize => isize, u8 => i16, u16 => u16, u32 => u32,
        u64 => u64, u128 => u128, usize => usize, char => i32, f32 => f32, f64 => f64;
    i32: i64 => i64, i128 => i128, isize => isize, u8 => i32, u16 => i32, u32 => u32, u64 => u64,
        u128 => u128, usize => usize, char => i32, f32 => f32, f64 => f64;
    i64: i128 => i128, isize => i64, u8 => i64, u16 => i64, u32 => i64, u64 => u64, u128 => u128,
        usize => usize, char => i64, f32 => f32, f64 => f64;
    i128: isize => i128, u8 => i128, u16 => i128, u32 => i128, u64 => i128, u128 => u128,
        usize => i128, char => i128, f32 => f32, f64 => f64;
    isize: u8 => isize, u16 => isize, u32 => isize, u64 => u64, u128 => u128, usize => usize,
        char => isize, f32 => f32, f64 => f64;
    u8: u16 => u16, u32 => u32, u64 => u64, u128 => u128, usize => usize, char => i32, f32 => f32,
        f64 => f64;
    u16: u32 => u32, u64 => u64, u128 => u128, usize => usize, char => i32, f32 => f32, f64 => f64;
    u32: u64 => u64, u128 => u128, usize => usize, char => u32, f32 => f32, f64 => f64;
    u64: u128 => u128, usize => u64, char => u64, f32 => f32, f64 => f64;
    u128: usize => u128, char => u128, f32 => f32, f64 => f64;
    usize: char => usize, f32 => f32, f64 => f64;
    f32: f64 => f64;
}

/// Converts an arm result into the common type of the match.
///
/// The identity for every type. Between numeric types it converts the way
/// `as` does, so a negative value promoted to an unsigned type wraps.
pub trait Promote<U> {
    fn promote(self) -> U;
}

impl<T> Promote<T> for T {
    fn promote(self) -> T {
        self
    }
}

macro_rules! promote {
    ($($from:ty => $($to:ty),+;)+) => {
        $($(
            impl Promote<$to> for $from {
                fn promote(self) -> $to {
                    self as $to
                }
            }
        )+)+
    };
}

promote! {
    i8 => i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64;
    i16 => i8, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64;
    i32 => i8, i16, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64;
    i64 => i8, i16, i32, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64;
    i128 => i8, i16, i32, i64, isize, u8, u16, u32, u64, u128, usize, f32, f64;
    isize => i8, i16, i32, i64, i128, u8, u16, u32, u64, u128, usize, f32, f64;
    u8 => i8, i16, i32, i64, i128, isize, u16, u32, u64, u128, usize, f32, f64;
    u16 => i8, i16, i32, i64, i128, isize, u8, u32, u64, u128, usize, f32, f64;
    u32 => i8, i16, i32, i64, i128, isize, u8, u16, u64, u128, usize, f32, f64;
    u64 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u128, usize, f32, f64;
    u128 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize, f32, f64;
    usize => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, f32, f64;
    char => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize;
    f32 => f64;
}

// ============ Tagged unions ============

/// A tagged union that can hold a `T` as one of its alternatives.
///
/// Usually derived with `#[derive(Variants)]`, which implements this once
/// per single-field variant.
pub trait Variant<T> {
    /// The payload if the active alternative holds a `T`.
    fn variant(&self) -> Option<&T>;
}

impl<V: Variant<T> + ?Sized, T> Variant<T> for &V {
    fn variant(&self) -> Option<&T> {
        (**self).variant()
    }
}

// ============ Presence ============

/// Something that may or may not hold a value, like a nullable pointer.
pub trait Optional {
    type Target: ?Sized;

    /// The held value, if any.
    fn present(&self) -> Option<&Self::Target>;
}

impl<T> Optional for Option<T> {
    type Target = T;

    fn present(&self) -> Option<&T> {
        self.as_ref()
    }
}

impl<T, E> Optional for Result<T, E> {
    type Target = T;

    fn present(&self) -> Option<&T> {
        self.as_ref().ok()
    }
}

impl<O: Optional + ?Sized> Optional for &O {
    type Target = O::Target;

    fn present(&self) -> Option<&Self::Target> {
        (**self).present()
    }
}

// ============ Product types ============

/// Positional access to field `I` of a product type.
///
/// Implemented for tuples up to twelve elements and generated for structs
/// by `#[derive(Destructure)]`.
pub trait Field<const I: usize> {
    type Type: ?Sized;

    fn field(&self) -> &Self::Type;
}

/// A product type with a known number of positional fields.
pub trait Destructure {
    const FIELD_COUNT: usize;
}

impl<D: Destructure + ?Sized> Destructure for &D {
    const FIELD_COUNT: usize = D::FIELD_COUNT;
}

impl<D, const I: usize> Field<I> for &D
where
    D: Field<I> + ?Sized,
{
    type Type = D::Type;

    fn field(&self) -> &Self::Type {
        (**self).field()
    }
}

macro_rules! tuple_field {
    (($($name:ident),+) $idx:tt $ty:ident) => {
        impl<$($name),+> Field<$idx> for ($($name,)+) {
            type Type = $ty;

            fn field(&self) -> &$ty {
                &self.$idx
            }
        }
    };
}

macro_rules! tuple_fields {
    ($count:expr; $names:tt; $($idx:tt $ty:ident)+) => {
        impl_destructure!($count; $names);
        $(tuple_field!($names $idx $ty);)+
    };
}

macro_rules! impl_destructure {
    ($count:expr; ($($name:ident),+)) => {
        impl<$($name),+> Destructure for ($($name,)+) {
            const FIELD_COUNT: usize = $count;
        }
    };
}

tuple_fields!(1; (A); 0 A);
tuple_fields!(2; (A, B); 0 A 1 B);
tuple_fields!(3; (A, B, C); 0 A 1 B 2 C);
tuple_fields!(4; (A, B, C, D); 0 A 1 B 2 C 3 D);
tuple_fields!(5; (A, B, C, D, E); 0 A 1 B 2 C 3 D 4 E);
tuple_fields!(6; (A, B, C, D, E, F); 0 A 1 B 2 C 3 D 4 E 5 F);
tuple_fields!(7; (A, B, C, D, E, F, G); 0 A 1 B 2 C 3 D 4 E 5 F 6 G);
tuple_fields!(8; (A, B, C, D, E, F, G, H); 0 A 1 B 2 C 3 D 4 E 5 F 6 G 7 H);
tuple_fields!(9; (A, B, C, D, E, F, G, H, I); 0 A 1 B 2 C 3 D 4 E 5 F 6 G 7 H 8 I);
tuple_fields!(10; (A, B, C, D, E, F, G, H, I, J); 0 A 1 B 2 C 3 D 4 E 5 F 6 G 7 H 8 I 9 J);
tuple_fields!(11; (A, B, C, D, E, F, G, H, I, J, K); 0 A 1 B 2 C 3 D 4 E 5 F 6 G 7 H 8 I 9 J 10 K);
tuple_fields!(12; (A, B, C, D, E, F, G, H, I, J, K, L); 0 A 1 B 2 C 3 D 4 E 5 F 6 G 7 H 8 I 9 J 10 K 11 L);

// ============ Truthiness ============

/// A value a pattern position can be decided on.
pub trait Truthy {
    fn truthy(&self) -> bool;
}

impl Truthy for bool {
    fn truthy(&self) -> bool {
        *self
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn truthy(&self) -> bool {
        (**self).truthy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mode_of<M: Mode>(_: PhantomData<M>) -> &'static str {
        std::any::type_name::<M::Return>()
    }

    fn join<A: Join<B>, B: Mode>() -> PhantomData<A::Out> {
        PhantomData
    }

    #[test]
    fn test_void_joins_void() {
        assert_eq!(mode_of(join::<Void, Void>()), "()");
    }

    #[test]
    fn test_void_drops_out_of_valued() {
        assert_eq!(
            mode_of(join::<Void, Valued<i32>>()),
            std::any::type_name::<Option<i32>>()
        );
        assert_eq!(
            mode_of(join::<Valued<&str>, Void>()),
            std::any::type_name::<Option<&str>>()
        );
    }

    #[test]
    fn test_widening_common_type() {
        let joined = join::<<Valued<char> as Join<Valued<u32>>>::Out, Valued<u64>>();
        assert_eq!(mode_of(joined), std::any::type_name::<Option<u64>>());
    }

    #[test]
    fn test_char_int_and_unsigned_meet_at_unsigned() {
        let joined = join::<<Valued<char> as Join<Valued<i32>>>::Out, Valued<u64>>();
        assert_eq!(mode_of(joined), std::any::type_name::<Option<u64>>());
        assert_eq!(
            mode_of(join::<Valued<char>, Valued<i32>>()),
            std::any::type_name::<Option<i32>>()
        );
    }

    #[test]
    fn test_mixed_signedness() {
        assert_eq!(
            mode_of(join::<Valued<i64>, Valued<u32>>()),
            std::any::type_name::<Option<i64>>()
        );
        assert_eq!(
            mode_of(join::<Valued<i32>, Valued<u32>>()),
            std::any::type_name::<Option<u32>>()
        );
        assert_eq!(
            mode_of(join::<Valued<u8>, Valued<f32>>()),
            std::any::type_name::<Option<f32>>()
        );
    }

    #[test]
    fn test_lift_into_wider_mode() {
        assert_eq!(<Valued<u8> as Lift<Valued<u64>>>::lift(7), Some(7u64));
        assert_eq!(<Valued<char> as Lift<Valued<u64>>>::lift('a'), Some(97u64));
        assert_eq!(<Valued<i32> as Lift<Valued<u64>>>::lift(-1), Some(u64::MAX));
        assert_eq!(<Void as Lift<Valued<u64>>>::lift(()), None);
    }

    #[test]
    fn test_optional_presence() {
        assert_eq!(Some(3).present(), Some(&3));
        assert_eq!(None::<i32>.present(), None);
        assert_eq!(Ok::<_, ()>("x").present(), Some(&"x"));
        assert_eq!(Err::<i32, _>("boom").present(), None);
    }

    #[test]
    fn test_tuple_fields() {
        let t = (1, "two", 3.0);
        assert_eq!(<(i32, &str, f64) as Destructure>::FIELD_COUNT, 3);
        assert_eq!(*Field::<0>::field(&t), 1);
        assert_eq!(*Field::<1>::field(&t), "two");
        assert_eq!(*Field::<2>::field(&&t), 3.0);
    }
}
