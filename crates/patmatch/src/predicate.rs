//! Composable, deferred tests over a subject.
//!
//! A [`Predicate`] wraps an expression tree. Nothing is evaluated when
//! predicates are combined: `_x.le(1338)` builds a [`Compare`] node holding
//! the variable and the constant, and only [`Eval::eval`] against a subject
//! walks the tree. Every combinator takes its operands by value, so a
//! predicate never borrows from the expression that built it.

use crate::relation::Truthy;
use crate::term::Literal;
use crate::wildcard::Wildcard;
use std::borrow::{Borrow, Cow};
use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;
use std::sync::Arc;

// ============ Evaluation ============

/// An expression that can be evaluated against a subject of type `S`.
///
/// `Output` borrows as `Value`, which lets the identity expression hand back
/// the subject itself without cloning while computed nodes return owned
/// values.
pub trait Eval<S: ?Sized> {
    type Value: ?Sized;
    type Output<'a>: Borrow<Self::Value>
    where
        Self: 'a,
        S: 'a;

    fn eval<'a>(&'a self, subject: &'a S) -> Self::Output<'a>;
}

/// Evaluates `expr` and clones the value out of its output.
fn owned<S, E>(expr: &E, subject: &S) -> E::Value
where
    S: ?Sized,
    E: Eval<S>,
    E::Value: Clone,
{
    let out = expr.eval(subject);
    <E::Value as Clone>::clone(Borrow::<E::Value>::borrow(&out))
}

fn truthy<S, E>(expr: &E, subject: &S) -> bool
where
    S: ?Sized,
    E: Eval<S>,
    E::Value: Truthy,
{
    let out = expr.eval(subject);
    Borrow::<E::Value>::borrow(&out).truthy()
}

// ============ Predicate ============

/// A deferred test over a subject.
///
/// Used as a pattern term it matches when its value is `true`. Predicates
/// compose with comparison methods (`eq`, `lt`, ...), the short-circuiting
/// `and`/`or`, and the std operators `! - + * / % & | ^ << >>`.
///
/// ```
/// use patmatch::{Predicate, _x};
///
/// let small_even = (_x % 2).eq(0).and(_x.lt(10));
/// assert!(small_even.apply(&4));
/// assert!(!small_even.apply(&12));
///
/// let custom = Predicate::new(|s: &str| s.starts_with('#'));
/// assert!(custom.apply("#tag"));
/// ```
#[derive(Clone, Copy)]
pub struct Predicate<E>(pub(crate) E);

impl<E> Predicate<E> {
    /// Wraps an already built expression.
    pub fn from_expr(expr: E) -> Self {
        Predicate(expr)
    }

    pub fn expr(&self) -> &E {
        &self.0
    }

    pub fn into_expr(self) -> E {
        self.0
    }

    /// Evaluates the predicate against `subject`.
    pub fn apply<'a, S>(&'a self, subject: &'a S) -> E::Output<'a>
    where
        S: ?Sized,
        E: Eval<S>,
    {
        self.0.eval(subject)
    }
}

impl<F> Predicate<Func<F>> {
    /// A predicate from any closure over the subject.
    pub fn new(f: F) -> Self {
        Predicate(Func(f))
    }
}

impl<E> fmt::Debug for Predicate<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Predicate<{}>", std::any::type_name::<E>())
    }
}

/// The placeholder variable: evaluates to the subject itself.
///
/// Used alone as a pattern term it always matches; combined with a
/// comparison it constrains the position.
#[derive(Debug, Clone, Copy, Default)]
pub struct Var;

#[allow(non_upper_case_globals)]
pub const _u: Var = Var;
#[allow(non_upper_case_globals)]
pub const _v: Var = Var;
#[allow(non_upper_case_globals)]
pub const _w: Var = Var;
#[allow(non_upper_case_globals)]
pub const _x: Var = Var;
#[allow(non_upper_case_globals)]
pub const _y: Var = Var;
#[allow(non_upper_case_globals)]
pub const _z: Var = Var;

impl<S: ?Sized> Eval<S> for Var {
    type Value = S;
    type Output<'a> = &'a S
    where
        Self: 'a,
        S: 'a;

    fn eval<'a>(&'a self, subject: &'a S) -> &'a S {
        subject
    }
}

/// Lifts a constant into a predicate, e.g. for `val(2000).gt(_x)`.
///
/// Also the way to put an untyped integer on the left of an operator:
/// `10 - _x` does not infer, `val(10) - _x` does.
///
/// ```
/// use patmatch::{val, _x};
///
/// assert!((val(10) - _x).eq(6).apply(&4));
/// assert!((10i32 - _x).eq(6).apply(&4));
/// ```
pub fn val<T>(value: T) -> Predicate<Const<T>> {
    Predicate(Const(value))
}

// ============ Leaf nodes ============

/// A constant operand.
#[derive(Debug, Clone, Copy)]
pub struct Const<T>(pub T);

impl<S: ?Sized, T> Eval<S> for Const<T> {
    type Value = T;
    type Output<'a> = &'a T
    where
        Self: 'a,
        S: 'a;

    fn eval<'a>(&'a self, _subject: &'a S) -> &'a T {
        &self.0
    }
}

/// A closure over the subject.
#[derive(Clone, Copy)]
pub struct Func<F>(F);

impl<S, F, R> Eval<S> for Func<F>
where
    S: ?Sized,
    F: Fn(&S) -> R,
{
    type Value = R;
    type Output<'a> = R
    where
        Self: 'a,
        S: 'a;

    fn eval<'a>(&'a self, subject: &'a S) -> R {
        (self.0)(subject)
    }
}

/// Always `true`; what any comparison against a wildcard collapses to.
#[derive(Debug, Clone, Copy, Default)]
pub struct Always;

impl<S: ?Sized> Eval<S> for Always {
    type Value = bool;
    type Output<'a> = bool
    where
        Self: 'a,
        S: 'a;

    fn eval<'a>(&'a self, _subject: &'a S) -> bool {
        true
    }
}

/// Applies a closure to the value of an inner expression.
#[derive(Clone, Copy)]
pub struct Map<E, F> {
    expr: E,
    f: F,
}

impl<S, E, F, R> Eval<S> for Map<E, F>
where
    S: ?Sized,
    E: Eval<S>,
    F: Fn(&E::Value) -> R,
{
    type Value = R;
    type Output<'a> = R
    where
        Self: 'a,
        S: 'a;

    fn eval<'a>(&'a self, subject: &'a S) -> R {
        let out = self.expr.eval(subject);
        (self.f)(Borrow::<E::Value>::borrow(&out))
    }
}

// ============ Operands ============

/// Anything that can stand on the right-hand side of a combinator.
pub trait Operand {
    type Expr;

    fn into_operand(self) -> Self::Expr;
}

impl<E> Operand for Predicate<E> {
    type Expr = E;

    fn into_operand(self) -> E {
        self.0
    }
}

impl Operand for Var {
    type Expr = Var;

    fn into_operand(self) -> Var {
        self
    }
}

impl<T: Literal> Operand for T {
    type Expr = Const<T>;

    fn into_operand(self) -> Const<T> {
        Const(self)
    }
}

/// Right-hand side of a comparison. A wildcard turns the whole comparison
/// into [`Always`]; every other operand builds a [`Compare`] node.
pub trait Comparand<L, O> {
    type Node;

    fn compare(self, lhs: L) -> Self::Node;
}

impl<L, O, R: Operand> Comparand<L, O> for R {
    type Node = Compare<L, R::Expr, O>;

    fn compare(self, lhs: L) -> Self::Node {
        Compare::new(lhs, self.into_operand())
    }
}

impl<L, O> Comparand<L, O> for Wildcard {
    type Node = Always;

    fn compare(self, _lhs: L) -> Always {
        Always
    }
}

// ============ Comparisons ============

/// Equality that looks through references and owning pointers, so a
/// borrowed or boxed subject compares with a plain constant.
///
/// Every [`Literal`] equates with itself. Primitives also equate across
/// `&`, `Box`, `Rc` and `Arc`, and the string types with one another.
pub trait Equate<Rhs: ?Sized> {
    fn equate(&self, other: &Rhs) -> bool;
}

/// Ordering with the same reach as [`Equate`].
pub trait Order<Rhs: ?Sized>: Equate<Rhs> {
    fn order(&self, other: &Rhs) -> Option<Ordering>;
}

impl<T: Literal + PartialEq> Equate<T> for T {
    fn equate(&self, other: &T) -> bool {
        self == other
    }
}

impl<T: Literal + PartialOrd> Order<T> for T {
    fn order(&self, other: &T) -> Option<Ordering> {
        self.partial_cmp(other)
    }
}

macro_rules! look_through {
    ($($base:ty),+) => {
        $(
            look_through!(@pair $base; &$base => $base);
            look_through!(@pair $base; $base => &$base);
            look_through!(@pair $base; &$base => &$base);
            look_through!(@pair $base; Box<$base> => $base);
            look_through!(@pair $base; Rc<$base> => $base);
            look_through!(@pair $base; Arc<$base> => $base);
        )+
    };
    (@pair $base:ty; $lhs:ty => $rhs:ty) => {
        impl Equate<$rhs> for $lhs {
            fn equate(&self, other: &$rhs) -> bool {
                <$lhs as Borrow<$base>>::borrow(self) == <$rhs as Borrow<$base>>::borrow(other)
            }
        }

        impl Order<$rhs> for $lhs {
            fn order(&self, other: &$rhs) -> Option<Ordering> {
                <$lhs as Borrow<$base>>::borrow(self)
                    .partial_cmp(<$rhs as Borrow<$base>>::borrow(other))
            }
        }
    };
}

look_through!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char);

macro_rules! text_comparisons {
    ($($lhs:ty => $($rhs:ty),+;)+) => {
        $($(
            impl Equate<$rhs> for $lhs {
                fn equate(&self, other: &$rhs) -> bool {
                    AsRef::<str>::as_ref(self) == AsRef::<str>::as_ref(other)
                }
            }

            impl Order<$rhs> for $lhs {
                fn order(&self, other: &$rhs) -> Option<Ordering> {
                    AsRef::<str>::as_ref(self).partial_cmp(AsRef::<str>::as_ref(other))
                }
            }
        )+)+
    };
}

text_comparisons! {
    str => str, &str, String, &String, Cow<'_, str>;
    &str => str, String, &String, Cow<'_, str>;
    String => str, &str, &String, Cow<'_, str>;
    &String => str, &str, String, &String, Cow<'_, str>;
    Cow<'_, str> => str, &str, String, &String;
    Box<str> => str, &str, String;
}

/// A relational operator between two values.
pub trait Relation<A: ?Sized, B: ?Sized> {
    fn holds(a: &A, b: &B) -> bool;
}

macro_rules! relation {
    ($($(#[$doc:meta])* $name:ident: $bound:ident => |$a:ident, $b:ident| $holds:expr;)+) => {
        $(
            $(#[$doc])*
            #[derive(Debug, Clone, Copy, Default)]
            pub struct $name;

            impl<A, B> Relation<A, B> for $name
            where
                A: ?Sized + $bound<B>,
                B: ?Sized,
            {
                fn holds($a: &A, $b: &B) -> bool {
                    $holds
                }
            }
        )+
    };
}

relation! {
    /// `==`
    Equal: Equate => |a, b| a.equate(b);
    /// `!=`
    NotEqual: Equate => |a, b| !a.equate(b);
    /// `<`
    Less: Order => |a, b| matches!(a.order(b), Some(Ordering::Less));
    /// `<=`
    LessEqual: Order => |a, b| matches!(a.order(b), Some(Ordering::Less | Ordering::Equal));
    /// `>`
    Greater: Order => |a, b| matches!(a.order(b), Some(Ordering::Greater));
    /// `>=`
    GreaterEqual: Order => |a, b| matches!(a.order(b), Some(Ordering::Greater | Ordering::Equal));
}

/// `lhs <op> rhs`, both sides evaluated against the same subject.
pub struct Compare<L, R, O> {
    lhs: L,
    rhs: R,
    op: PhantomData<fn() -> O>,
}

impl<L, R, O> Compare<L, R, O> {
    pub fn new(lhs: L, rhs: R) -> Self {
        Self {
            lhs,
            rhs,
            op: PhantomData,
        }
    }
}

impl<L: Clone, R: Clone, O> Clone for Compare<L, R, O> {
    fn clone(&self) -> Self {
        Self::new(self.lhs.clone(), self.rhs.clone())
    }
}

impl<S, L, R, O> Eval<S> for Compare<L, R, O>
where
    S: ?Sized,
    L: Eval<S>,
    R: Eval<S>,
    O: Relation<L::Value, R::Value>,
{
    type Value = bool;
    type Output<'a> = bool
    where
        Self: 'a,
        S: 'a;

    fn eval<'a>(&'a self, subject: &'a S) -> bool {
        let lhs = self.lhs.eval(subject);
        let rhs = self.rhs.eval(subject);
        O::holds(
            Borrow::<L::Value>::borrow(&lhs),
            Borrow::<R::Value>::borrow(&rhs),
        )
    }
}

// ============ Logic ============

/// Short-circuiting conjunction; `rhs` is not evaluated when `lhs` fails.
#[derive(Debug, Clone, Copy)]
pub struct And<L, R> {
    lhs: L,
    rhs: R,
}

/// Short-circuiting disjunction; `rhs` is not evaluated when `lhs` holds.
#[derive(Debug, Clone, Copy)]
pub struct Or<L, R> {
    lhs: L,
    rhs: R,
}

impl<S, L, R> Eval<S> for And<L, R>
where
    S: ?Sized,
    L: Eval<S>,
    R: Eval<S>,
    L::Value: Truthy,
    R::Value: Truthy,
{
    type Value = bool;
    type Output<'a> = bool
    where
        Self: 'a,
        S: 'a;

    fn eval<'a>(&'a self, subject: &'a S) -> bool {
        truthy(&self.lhs, subject) && truthy(&self.rhs, subject)
    }
}

impl<S, L, R> Eval<S> for Or<L, R>
where
    S: ?Sized,
    L: Eval<S>,
    R: Eval<S>,
    L::Value: Truthy,
    R::Value: Truthy,
{
    type Value = bool;
    type Output<'a> = bool
    where
        Self: 'a,
        S: 'a;

    fn eval<'a>(&'a self, subject: &'a S) -> bool {
        truthy(&self.lhs, subject) || truthy(&self.rhs, subject)
    }
}

// ============ Arithmetic ============

/// A binary operator over owned values.
pub trait Operator<A, B> {
    type Output;

    fn apply(a: A, b: B) -> Self::Output;
}

/// A unary operator over an owned value.
pub trait UnaryOperator<A> {
    type Output;

    fn apply(a: A) -> Self::Output;
}

macro_rules! operator {
    ($($name:ident: $trait:ident => $method:ident;)+) => {
        $(
            #[derive(Debug, Clone, Copy, Default)]
            pub struct $name;

            impl<A: std::ops::$trait<B>, B> Operator<A, B> for $name {
                type Output = A::Output;

                fn apply(a: A, b: B) -> Self::Output {
                    std::ops::$trait::$method(a, b)
                }
            }
        )+
    };
}

operator! {
    Plus: Add => add;
    Minus: Sub => sub;
    Times: Mul => mul;
    Quotient: Div => div;
    Remainder: Rem => rem;
    BitwiseAnd: BitAnd => bitand;
    BitwiseOr: BitOr => bitor;
    BitwiseXor: BitXor => bitxor;
    ShiftLeft: Shl => shl;
    ShiftRight: Shr => shr;
}

/// Unary `!`: logical on `bool`, bitwise on integers.
#[derive(Debug, Clone, Copy, Default)]
pub struct Complement;

/// Unary `-`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Negative;

impl<A: std::ops::Not> UnaryOperator<A> for Complement {
    type Output = A::Output;

    fn apply(a: A) -> A::Output {
        !a
    }
}

impl<A: std::ops::Neg> UnaryOperator<A> for Negative {
    type Output = A::Output;

    fn apply(a: A) -> A::Output {
        -a
    }
}

/// `lhs <op> rhs` over cloned operand values.
pub struct Binary<L, R, O> {
    lhs: L,
    rhs: R,
    op: PhantomData<fn() -> O>,
}

impl<L, R, O> Binary<L, R, O> {
    pub fn new(lhs: L, rhs: R) -> Self {
        Self {
            lhs,
            rhs,
            op: PhantomData,
        }
    }
}

impl<L: Clone, R: Clone, O> Clone for Binary<L, R, O> {
    fn clone(&self) -> Self {
        Self::new(self.lhs.clone(), self.rhs.clone())
    }
}

impl<S, L, R, O> Eval<S> for Binary<L, R, O>
where
    S: ?Sized,
    L: Eval<S>,
    R: Eval<S>,
    L::Value: Clone,
    R::Value: Clone,
    O: Operator<L::Value, R::Value>,
{
    type Value = O::Output;
    type Output<'a> = O::Output
    where
        Self: 'a,
        S: 'a;

    fn eval<'a>(&'a self, subject: &'a S) -> O::Output {
        O::apply(owned(&self.lhs, subject), owned(&self.rhs, subject))
    }
}

/// `<op> expr` over a cloned operand value.
pub struct Unary<E, O> {
    expr: E,
    op: PhantomData<fn() -> O>,
}

impl<E, O> Unary<E, O> {
    pub fn new(expr: E) -> Self {
        Self {
            expr,
            op: PhantomData,
        }
    }
}

impl<E: Clone, O> Clone for Unary<E, O> {
    fn clone(&self) -> Self {
        Self::new(self.expr.clone())
    }
}

impl<S, E, O> Eval<S> for Unary<E, O>
where
    S: ?Sized,
    E: Eval<S>,
    E::Value: Clone,
    O: UnaryOperator<E::Value>,
{
    type Value = O::Output;
    type Output<'a> = O::Output
    where
        Self: 'a,
        S: 'a;

    fn eval<'a>(&'a self, subject: &'a S) -> O::Output {
        O::apply(owned(&self.expr, subject))
    }
}

// ============ Combinator surface ============

macro_rules! composable {
    ([$($g:ident),*] $ty:ty) => {
        #[allow(clippy::should_implement_trait)]
        impl<$($g),*> $ty {
            pub fn eq<R>(self, rhs: R) -> Predicate<R::Node>
            where
                R: Comparand<<Self as Operand>::Expr, Equal>,
            {
                Predicate(rhs.compare(self.into_operand()))
            }

            pub fn ne<R>(self, rhs: R) -> Predicate<R::Node>
            where
                R: Comparand<<Self as Operand>::Expr, NotEqual>,
            {
                Predicate(rhs.compare(self.into_operand()))
            }

            pub fn lt<R>(self, rhs: R) -> Predicate<R::Node>
            where
                R: Comparand<<Self as Operand>::Expr, Less>,
            {
                Predicate(rhs.compare(self.into_operand()))
            }

            pub fn le<R>(self, rhs: R) -> Predicate<R::Node>
            where
                R: Comparand<<Self as Operand>::Expr, LessEqual>,
            {
                Predicate(rhs.compare(self.into_operand()))
            }

            pub fn gt<R>(self, rhs: R) -> Predicate<R::Node>
            where
                R: Comparand<<Self as Operand>::Expr, Greater>,
            {
                Predicate(rhs.compare(self.into_operand()))
            }

            pub fn ge<R>(self, rhs: R) -> Predicate<R::Node>
            where
                R: Comparand<<Self as Operand>::Expr, GreaterEqual>,
            {
                Predicate(rhs.compare(self.into_operand()))
            }

            /// Both must hold; `rhs` is skipped once `self` fails.
            pub fn and<R>(self, rhs: R) -> Predicate<And<<Self as Operand>::Expr, R::Expr>>
            where
                R: Operand,
            {
                Predicate(And {
                    lhs: self.into_operand(),
                    rhs: rhs.into_operand(),
                })
            }

            /// Either must hold; `rhs` is skipped once `self` holds.
            pub fn or<R>(self, rhs: R) -> Predicate<Or<<Self as Operand>::Expr, R::Expr>>
            where
                R: Operand,
            {
                Predicate(Or {
                    lhs: self.into_operand(),
                    rhs: rhs.into_operand(),
                })
            }

            /// Post-processes the value, e.g. `_x.map(|n: &i32| n % 2 == 0)`.
            pub fn map<F>(self, f: F) -> Predicate<Map<<Self as Operand>::Expr, F>> {
                Predicate(Map {
                    expr: self.into_operand(),
                    f,
                })
            }
        }

        impl<$($g),*> std::ops::Not for $ty {
            type Output = Predicate<Unary<<Self as Operand>::Expr, Complement>>;

            fn not(self) -> Self::Output {
                Predicate(Unary::new(self.into_operand()))
            }
        }

        impl<$($g),*> std::ops::Neg for $ty {
            type Output = Predicate<Unary<<Self as Operand>::Expr, Negative>>;

            fn neg(self) -> Self::Output {
                Predicate(Unary::new(self.into_operand()))
            }
        }

        composable!(@binary [$($g),*] $ty; Add add Plus);
        composable!(@binary [$($g),*] $ty; Sub sub Minus);
        composable!(@binary [$($g),*] $ty; Mul mul Times);
        composable!(@binary [$($g),*] $ty; Div div Quotient);
        composable!(@binary [$($g),*] $ty; Rem rem Remainder);
        composable!(@binary [$($g),*] $ty; BitAnd bitand BitwiseAnd);
        composable!(@binary [$($g),*] $ty; BitOr bitor BitwiseOr);
        composable!(@binary [$($g),*] $ty; BitXor bitxor BitwiseXor);
        composable!(@binary [$($g),*] $ty; Shl shl ShiftLeft);
        composable!(@binary [$($g),*] $ty; Shr shr ShiftRight);
    };
    (@binary [$($g:ident),*] $ty:ty; $trait:ident $method:ident $op:ident) => {
        impl<$($g,)* Rhs: Operand> std::ops::$trait<Rhs> for $ty {
            type Output = Predicate<Binary<<Self as Operand>::Expr, Rhs::Expr, $op>>;

            fn $method(self, rhs: Rhs) -> Self::Output {
                Predicate(Binary::new(self.into_operand(), rhs.into_operand()))
            }
        }
    };
}

composable!([] Var);
composable!([E] Predicate<E>);

/// Constant on the left of an operator: `2000i32 - _x`.
///
/// Implemented for every integer type, so an unsuffixed literal on the left
/// is ambiguous. Suffix it or wrap it in [`val`].
macro_rules! constant_lhs {
    ($($lit:ty),+) => {
        $(
            constant_lhs!(@ops $lit;
                Add add Plus,
                Sub sub Minus,
                Mul mul Times,
                Div div Quotient,
                Rem rem Remainder,
                BitAnd bitand BitwiseAnd,
                BitOr bitor BitwiseOr,
                BitXor bitxor BitwiseXor,
                Shl shl ShiftLeft,
                Shr shr ShiftRight
            );
        )+
    };
    (@ops $lit:ty; $($trait:ident $method:ident $op:ident),+) => {
        $(
            impl<E> std::ops::$trait<Predicate<E>> for $lit {
                type Output = Predicate<Binary<Const<$lit>, E, $op>>;

                fn $method(self, rhs: Predicate<E>) -> Self::Output {
                    Predicate(Binary::new(Const(self), rhs.0))
                }
            }

            impl std::ops::$trait<Var> for $lit {
                type Output = Predicate<Binary<Const<$lit>, Var, $op>>;

                fn $method(self, rhs: Var) -> Self::Output {
                    Predicate(Binary::new(Const(self), rhs))
                }
            }
        )+
    };
}

constant_lhs!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
