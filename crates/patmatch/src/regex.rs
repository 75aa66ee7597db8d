//! Full-match regular expression engines.
//!
//! Patterns only ever ask one question: does the *whole* candidate match.
//! The built-in engine is the `regex` crate. With the `dfa` feature enabled,
//! [`Engine::fast`] compiles a fully materialized DFA through
//! `regex-automata` instead, and quietly falls back to the built-in engine
//! for patterns a DFA cannot express.

use crate::error::{Error, Result};
use tracing::debug;

/// Answers whether an entire string matches.
pub trait FullMatch {
    fn full_match(&self, candidate: &str) -> bool;
}

/// Knobs for compiling a pattern.
///
/// # Example
///
/// ```
/// use patmatch::RegexOptions;
///
/// let options = RegexOptions::new()
///     .case_insensitive(true)
///     .size_limit(1 << 20);
/// assert!(options.is_case_insensitive());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegexOptions {
    case_insensitive: bool,
    dot_matches_new_line: bool,
    size_limit: Option<usize>,
}

impl Default for RegexOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl RegexOptions {
    pub fn new() -> Self {
        Self {
            case_insensitive: false,
            dot_matches_new_line: false,
            size_limit: None,
        }
    }

    pub fn case_insensitive(mut self, yes: bool) -> Self {
        self.case_insensitive = yes;
        self
    }

    /// Lets `.` match `\n` as well.
    pub fn dot_matches_new_line(mut self, yes: bool) -> Self {
        self.dot_matches_new_line = yes;
        self
    }

    /// Upper bound, in bytes, on the compiled program.
    pub fn size_limit(mut self, bytes: usize) -> Self {
        self.size_limit = Some(bytes);
        self
    }

    pub fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    pub fn is_dot_matches_new_line(&self) -> bool {
        self.dot_matches_new_line
    }
}

/// A compiled full-match pattern.
#[derive(Debug, Clone)]
pub enum Engine {
    Std(::regex::Regex),
    #[cfg(feature = "dfa")]
    Dfa(Box<regex_automata::dfa::regex::Regex>),
}

impl Engine {
    /// Compiles with the built-in engine.
    pub fn standard(pattern: &str, options: &RegexOptions) -> Result<Self> {
        let mut builder = ::regex::RegexBuilder::new(&anchored(pattern));
        builder
            .case_insensitive(options.case_insensitive)
            .dot_matches_new_line(options.dot_matches_new_line);
        if let Some(limit) = options.size_limit {
            builder.size_limit(limit);
        }
        let regex = builder.build().map_err(|source| Error::InvalidRegex {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Engine::Std(regex))
    }

    /// Compiles with the fastest engine this build carries.
    #[cfg(feature = "dfa")]
    pub fn fast(pattern: &str, options: &RegexOptions) -> Result<Self> {
        use regex_automata::dfa::{dense, regex::Regex};
        use regex_automata::util::syntax;

        let built = Regex::builder()
            .syntax(
                syntax::Config::new()
                    .case_insensitive(options.case_insensitive)
                    .dot_matches_new_line(options.dot_matches_new_line),
            )
            .dense(dense::Config::new().dfa_size_limit(options.size_limit))
            .build(&anchored(pattern));

        match built {
            Ok(dfa) => Ok(Engine::Dfa(Box::new(dfa))),
            Err(err) => {
                debug!(pattern, error = %err, "dfa engine declined pattern, using built-in engine");
                Self::standard(pattern, options)
            }
        }
    }

    /// Compiles with the fastest engine this build carries.
    #[cfg(not(feature = "dfa"))]
    pub fn fast(pattern: &str, options: &RegexOptions) -> Result<Self> {
        debug!(pattern, "dfa feature disabled, using built-in engine");
        Self::standard(pattern, options)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Engine::Std(_) => "regex",
            #[cfg(feature = "dfa")]
            Engine::Dfa(_) => "dfa",
        }
    }
}

impl FullMatch for Engine {
    fn full_match(&self, candidate: &str) -> bool {
        match self {
            Engine::Std(regex) => regex.is_match(candidate),
            #[cfg(feature = "dfa")]
            Engine::Dfa(dfa) => dfa.is_match(candidate),
        }
    }
}

/// Anchors `pattern` at both ends so only whole-string matches count.
fn anchored(pattern: &str) -> String {
    format!(r"\A(?:{})\z", pattern)
}
