use std::fmt;

/// Errors that can occur while preparing inputs for a policy.
///
/// Building and querying a policy never fails. The only fallible step is
/// compiling a value pattern on the caller side with [`pattern`](crate::pattern).
#[derive(Debug)]
pub enum Error {
    /// A value pattern could not be compiled
    InvalidPattern {
        /// The pattern source as supplied by the caller
        pattern: String,
        /// The compiler's description of the problem
        message: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidPattern { pattern, message } => {
                write!(f, "invalid value pattern '{}': {}", pattern, message)
            }
        }
    }
}

impl std::error::Error for Error {}

/// The reason an attribute was refused by a policy.
///
/// Returned by [`Policy::check_attribute`](crate::Policy::check_attribute).
/// A rejection is an ordinary query outcome telling the sanitizer to strip
/// the attribute, not a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    /// What kind of rule refused the attribute
    pub kind: RejectionKind,
    /// Normalized element name the query was made for
    pub element: String,
    /// Normalized attribute name the query was made for
    pub attribute: String,
}

impl Rejection {
    /// Creates a new rejection.
    pub fn new(
        kind: RejectionKind,
        element: impl Into<String>,
        attribute: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            element: element.into(),
            attribute: attribute.into(),
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}[{}]", self.kind, self.element, self.attribute)
    }
}

impl std::error::Error for Rejection {}

/// The kind of rule that refused an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionKind {
    /// The element itself is not permitted
    ElementNotAllowed,
    /// Neither the element nor the global map permits the attribute
    AttributeNotAllowed,
    /// The attribute is permitted but its value failed the matcher
    ValueRejected,
}

impl fmt::Display for RejectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectionKind::ElementNotAllowed => write!(f, "element not allowed"),
            RejectionKind::AttributeNotAllowed => write!(f, "attribute not allowed"),
            RejectionKind::ValueRejected => write!(f, "value rejected"),
        }
    }
}
