use std::fmt;
use std::sync::Arc;

use crate::matcher::ValueMatcher;

/// The constraint an attribute policy places on values.
#[derive(Clone)]
pub enum ValueConstraint {
    /// Any value is accepted
    Any,
    /// A value is accepted iff the matcher accepts it
    Matching(Arc<dyn ValueMatcher>),
}

impl ValueConstraint {
    /// Returns the matcher, if there is one.
    pub fn matcher(&self) -> Option<&dyn ValueMatcher> {
        match self {
            ValueConstraint::Any => None,
            ValueConstraint::Matching(m) => Some(m.as_ref()),
        }
    }
}

impl fmt::Debug for ValueConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueConstraint::Any => f.write_str("Any"),
            ValueConstraint::Matching(m) => f.debug_tuple("Matching").field(m).finish(),
        }
    }
}

/// One permitted attribute, in either element or global scope.
///
/// Immutable once created. Cloning shares the matcher.
#[derive(Debug, Clone)]
pub struct AttrPolicy {
    constraint: ValueConstraint,
}

impl AttrPolicy {
    /// An attribute policy that accepts any value.
    pub fn any() -> Self {
        Self {
            constraint: ValueConstraint::Any,
        }
    }

    /// An attribute policy gated by `matcher`.
    pub fn matching(matcher: Arc<dyn ValueMatcher>) -> Self {
        Self {
            constraint: ValueConstraint::Matching(matcher),
        }
    }

    pub(crate) fn from_constraint(constraint: ValueConstraint) -> Self {
        Self { constraint }
    }

    /// Returns the value constraint.
    pub fn constraint(&self) -> &ValueConstraint {
        &self.constraint
    }

    /// Returns `true` if `value` satisfies this policy.
    ///
    /// Without a matcher every value is accepted, the empty string included.
    pub fn accepts(&self, value: &str) -> bool {
        match &self.constraint {
            ValueConstraint::Any => true,
            ValueConstraint::Matching(m) => m.accepts(value),
        }
    }
}

impl Default for AttrPolicy {
    fn default() -> Self {
        Self::any()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::MatchFn;

    #[test]
    fn unconstrained_policy_accepts_everything() {
        let policy = AttrPolicy::any();

        assert!(policy.accepts("anything at all"));
        assert!(policy.accepts(""));
        assert!(policy.constraint().matcher().is_none());
    }

    #[test]
    fn matcher_is_the_sole_test() {
        let policy = AttrPolicy::matching(Arc::new(MatchFn(|v: &str| v == "ok")));

        assert!(policy.accepts("ok"));
        assert!(!policy.accepts("not ok"));
        assert!(!policy.accepts(""));
    }

    #[test]
    fn clones_share_the_matcher() {
        let matcher: Arc<dyn ValueMatcher> = Arc::new(MatchFn(|_: &str| true));
        let policy = AttrPolicy::matching(Arc::clone(&matcher));
        let copy = policy.clone();

        match (policy.constraint(), copy.constraint()) {
            (ValueConstraint::Matching(a), ValueConstraint::Matching(b)) => {
                assert!(Arc::ptr_eq(a, b));
                assert_eq!(Arc::strong_count(&matcher), 3);
            }
            _ => panic!("expected matching constraints"),
        }
    }

    #[test]
    fn debug_shows_constraint() {
        assert_eq!(format!("{:?}", ValueConstraint::Any), "Any");

        let re = regex::Regex::new("^[a-z]+$").unwrap();
        let debug = format!("{:?}", AttrPolicy::matching(Arc::new(re)));
        assert!(debug.contains("Matching"));
        assert!(debug.contains("^[a-z]+$"));
    }
}
