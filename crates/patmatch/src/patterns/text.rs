use crate::error::Result;
use crate::predicate::{Eval, Predicate};
use crate::regex::{Engine, FullMatch, RegexOptions};

/// A compiled full-match test, see [`regex`].
#[derive(Debug, Clone)]
pub struct Matches(Engine);

impl Matches {
    pub fn engine(&self) -> &Engine {
        &self.0
    }
}

/// Matches string-like subjects that match `pattern` in full.
///
/// Uses the DFA engine when the `dfa` feature is enabled.
///
/// # Panics
///
/// Panics if `pattern` is not a valid regular expression. Use
/// [`try_regex`] for patterns that are not known up front.
///
/// ```
/// use patmatch::{regex, Term};
///
/// assert!(regex("[0-9]+_.*").test("12345689_abcdefgh"));
/// assert!(!regex("zzz").test("12345689_abcdefgh"));
/// ```
pub fn regex(pattern: &str) -> Predicate<Matches> {
    match try_regex(pattern) {
        Ok(p) => p,
        Err(err) => panic!("{err}"),
    }
}

/// Like [`regex`], always using the built-in engine.
///
/// # Panics
///
/// Panics if `pattern` is not a valid regular expression.
pub fn sregex(pattern: &str) -> Predicate<Matches> {
    match try_sregex(pattern) {
        Ok(p) => p,
        Err(err) => panic!("{err}"),
    }
}

pub fn try_regex(pattern: &str) -> Result<Predicate<Matches>> {
    regex_with(pattern, &RegexOptions::new())
}

pub fn try_sregex(pattern: &str) -> Result<Predicate<Matches>> {
    Ok(Predicate(Matches(Engine::standard(pattern, &RegexOptions::new())?)))
}

/// Compiles `pattern` with explicit options.
pub fn regex_with(pattern: &str, options: &RegexOptions) -> Result<Predicate<Matches>> {
    Ok(Predicate(Matches(Engine::fast(pattern, options)?)))
}

impl<S> Eval<S> for Matches
where
    S: ?Sized + AsRef<str>,
{
    type Value = bool;
    type Output<'a> = bool
    where
        Self: 'a,
        S: 'a;

    fn eval<'a>(&'a self, subject: &'a S) -> bool {
        self.0.full_match(subject.as_ref())
    }
}
