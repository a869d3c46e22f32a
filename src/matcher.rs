//! Value matchers that gate attribute values.
//!
//! A policy never compiles patterns itself. Callers hand it something that
//! already knows how to accept or reject a value: normally a compiled
//! [`regex::Regex`], or any predicate wrapped in [`MatchFn`].

use std::fmt;

use regex::Regex;

use crate::error::Error;

/// Decides whether an attribute value is acceptable.
///
/// Matchers are shared between every element an attribute rule is bound to
/// and queried concurrently once the policy is frozen, so they must be
/// `Send + Sync`.
pub trait ValueMatcher: Send + Sync + fmt::Debug {
    /// Returns `true` if `value` is acceptable.
    fn accepts(&self, value: &str) -> bool;
}

/// Unanchored search, the same as `Regex::is_match`.
///
/// Anchor the pattern (`^[0-9]+$`) to require the whole value to match.
impl ValueMatcher for Regex {
    fn accepts(&self, value: &str) -> bool {
        self.is_match(value)
    }
}

/// Adapts a plain predicate into a [`ValueMatcher`].
///
/// # Examples
///
/// ```
/// use html_policy::{MatchFn, ValueMatcher};
///
/// let short = MatchFn(|v: &str| v.len() <= 8);
/// assert!(short.accepts("_blank"));
/// assert!(!short.accepts("a-very-long-value"));
/// ```
#[derive(Clone, Copy)]
pub struct MatchFn<F>(pub F);

impl<F> ValueMatcher for MatchFn<F>
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn accepts(&self, value: &str) -> bool {
        (self.0)(value)
    }
}

impl<F> fmt::Debug for MatchFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MatchFn(..)")
    }
}

/// Compiles `source` into a regex suitable for [`matching`](crate::AttrPolicyBuilder::matching).
///
/// This runs on the caller side before the policy sees the matcher.
///
/// # Errors
///
/// Returns [`Error::InvalidPattern`] if `source` is not a valid regex.
///
/// # Examples
///
/// ```
/// let digits = html_policy::pattern("^[0-9]+$").expect("valid pattern");
/// assert!(digits.is_match("42"));
///
/// assert!(html_policy::pattern("[0-9").is_err());
/// ```
pub fn pattern(source: &str) -> Result<Regex, Error> {
    Regex::new(source).map_err(|err| Error::InvalidPattern {
        pattern: source.to_string(),
        message: err.to_string(),
    })
}
