//! The wildcard term.

use crate::predicate::{Always, Predicate};
use crate::term::Term;

/// Matches any value of any type.
///
/// Relational comparisons against a wildcard, on either side, always hold:
/// `__.lt(x)` and `_x.lt(__)` both collapse to [`Always`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Wildcard;

/// The wildcard. Inside `pattern![..]` and `ds![..]` a bare `_` means the
/// same thing.
pub const __: Wildcard = Wildcard;

macro_rules! always {
    ($($method:ident),+) => {
        #[allow(clippy::should_implement_trait)]
        impl Wildcard {
            $(
                pub fn $method<R>(self, _rhs: R) -> Predicate<Always> {
                    Predicate(Always)
                }
            )+
        }
    };
}

always!(eq, ne, lt, le, gt, ge);

impl<S: ?Sized> Term<S> for Wildcard {
    fn test(&self, _subject: &S) -> bool {
        true
    }
}
