use std::borrow::Cow;
use std::collections::{HashMap, HashSet};

use crate::attribute::AttrPolicy;
use crate::elements;
use crate::error::{Rejection, RejectionKind};
use crate::query::PolicyQuery;

/// A frozen whitelist policy.
///
/// `Policy` is produced by [`PolicyBuilder`](crate::PolicyBuilder) and has no
/// mutating methods. It is `Send + Sync`, so one policy can be shared by
/// reference or `Arc` across any number of concurrent sanitizations.
///
/// All element, attribute and scheme names are compared case-insensitively.
///
/// # Examples
///
/// ```
/// use html_policy::{PolicyBuilder, PolicyQuery};
///
/// let policy = PolicyBuilder::new()
///     .allow_attrs(["href"])
///     .on_elements(["a"])
///     .allow_url_schemes(["https"])
///     .build();
///
/// assert!(policy.is_element_allowed("A"));
/// assert!(policy.is_attribute_allowed("a", "HREF"));
/// assert!(policy.is_url_scheme_allowed("HTTPS"));
/// assert!(!policy.is_url_scheme_allowed("javascript"));
/// ```
#[derive(Debug, Clone)]
pub struct Policy {
    pub(crate) allow_doc_type: bool,
    pub(crate) require_no_follow: bool,
    pub(crate) require_parseable_urls: bool,
    pub(crate) allow_relative_urls: bool,
    pub(crate) url_schemes: HashSet<String>,
    pub(crate) elements: HashMap<String, HashMap<String, AttrPolicy>>,
    pub(crate) global_attrs: HashMap<String, AttrPolicy>,
}

impl Policy {
    /// An empty policy. Only the default element table applies.
    pub(crate) fn empty() -> Self {
        Self {
            allow_doc_type: false,
            require_no_follow: false,
            require_parseable_urls: false,
            allow_relative_urls: false,
            url_schemes: HashSet::new(),
            elements: HashMap::new(),
            global_attrs: HashMap::new(),
        }
    }

    /// Checks an attribute value and reports why it was refused.
    ///
    /// Returns the governing [`AttrPolicy`] when the value is acceptable.
    ///
    /// # Errors
    ///
    /// Returns a [`Rejection`] naming the rule that refused the attribute.
    /// This is a normal negative answer: the sanitizer should strip it.
    ///
    /// # Examples
    ///
    /// ```
    /// use html_policy::{PolicyBuilder, RejectionKind};
    ///
    /// let digits = html_policy::pattern("^[0-9]+$").unwrap();
    /// let policy = PolicyBuilder::new()
    ///     .allow_attrs(["colspan"])
    ///     .matching(digits)
    ///     .on_elements(["td"])
    ///     .build();
    ///
    /// assert!(policy.check_attribute("td", "colspan", "3").is_ok());
    ///
    /// let rejection = policy.check_attribute("td", "colspan", "abc").unwrap_err();
    /// assert_eq!(rejection.kind, RejectionKind::ValueRejected);
    /// ```
    pub fn check_attribute(
        &self,
        element: &str,
        attribute: &str,
        value: &str,
    ) -> Result<&AttrPolicy, Rejection> {
        let element = normalize(element);
        let attribute = normalize(attribute);

        let kind = if !self.element_allowed(&element) {
            RejectionKind::ElementNotAllowed
        } else {
            match self.lookup_attr(&element, &attribute) {
                Some(policy) if policy.accepts(value) => return Ok(policy),
                Some(_) => RejectionKind::ValueRejected,
                None => RejectionKind::AttributeNotAllowed,
            }
        };

        tracing::trace!(
            element = %element,
            attribute = %attribute,
            reason = %kind,
            "attribute rejected"
        );
        Err(Rejection::new(kind, element, attribute))
    }

    /// Returns the element-specific attribute map for `element`, if it has
    /// an explicit entry.
    ///
    /// An explicit entry may be empty: the element is permitted but carries
    /// no element-specific attributes.
    pub fn element_attrs(&self, element: &str) -> Option<&HashMap<String, AttrPolicy>> {
        self.elements.get(normalize(element).as_ref())
    }

    /// Returns the global attribute map.
    pub fn global_attrs(&self) -> &HashMap<String, AttrPolicy> {
        &self.global_attrs
    }

    /// Returns the permitted URL schemes, lowercase.
    pub fn url_schemes(&self) -> impl Iterator<Item = &str> {
        self.url_schemes.iter().map(String::as_str)
    }

    /// Returns `true` if `element` is in the default table of elements that
    /// are valid without attributes.
    pub fn is_default_element(&self, element: &str) -> bool {
        elements::is_valid_without_attrs(&normalize(element))
    }

    fn element_allowed(&self, element: &str) -> bool {
        self.elements.contains_key(element) || elements::is_valid_without_attrs(element)
    }

    fn lookup_attr(&self, element: &str, attribute: &str) -> Option<&AttrPolicy> {
        self.elements
            .get(element)
            .and_then(|attrs| attrs.get(attribute))
            .or_else(|| self.global_attrs.get(attribute))
    }
}

impl PolicyQuery for Policy {
    fn is_element_allowed(&self, element: &str) -> bool {
        self.element_allowed(&normalize(element))
    }

    fn attr_policy(&self, element: &str, attribute: &str) -> Option<&AttrPolicy> {
        let element = normalize(element);
        if !self.element_allowed(&element) {
            return None;
        }
        self.lookup_attr(&element, &normalize(attribute))
    }

    fn is_url_scheme_allowed(&self, scheme: &str) -> bool {
        self.url_schemes.contains(normalize(scheme).as_ref())
    }

    fn allow_doc_type(&self) -> bool {
        self.allow_doc_type
    }

    fn require_no_follow(&self) -> bool {
        self.require_no_follow
    }

    fn require_parseable_urls(&self) -> bool {
        // Relative URLs are only meaningful once parsed.
        self.require_parseable_urls || self.allow_relative_urls
    }

    fn allow_relative_urls(&self) -> bool {
        self.allow_relative_urls
    }
}

/// Lowercases `name`, borrowing when it is already lowercase.
pub(crate) fn normalize(name: &str) -> Cow<'_, str> {
    let is_lower = name.chars().all(|c| {
        let mut lower = c.to_lowercase();
        lower.next() == Some(c) && lower.next().is_none()
    });
    if is_lower {
        Cow::Borrowed(name)
    } else {
        Cow::Owned(name.to_lowercase())
    }
}
