use crate::attribute::AttrPolicy;

/// The read-only interface a sanitizer consults while walking a document.
///
/// Every method is a bounded in-memory lookup: nothing here blocks, fails or
/// mutates state. Name arguments are matched case-insensitively.
///
/// An unpermitted element, attribute or scheme yields a negative answer,
/// which the sanitizer treats as "strip this".
pub trait PolicyQuery {
    /// Returns `true` if `element` is permitted.
    ///
    /// An element is permitted if it has an explicit entry (from
    /// `allow_elements` or an attribute rule bound to it) or appears in the
    /// default table of elements valid without attributes.
    fn is_element_allowed(&self, element: &str) -> bool;

    /// Returns the policy governing `attribute` on `element`.
    ///
    /// The element-specific map is consulted first, then the global map.
    /// Returns `None` if the element is not permitted or neither map has the
    /// attribute.
    fn attr_policy(&self, element: &str, attribute: &str) -> Option<&AttrPolicy>;

    /// Returns `true` if `attribute` may appear on `element` at all.
    fn is_attribute_allowed(&self, element: &str, attribute: &str) -> bool {
        self.attr_policy(element, attribute).is_some()
    }

    /// Returns `true` if `value` is acceptable for `attribute` on `element`.
    fn is_attribute_value_allowed(&self, element: &str, attribute: &str, value: &str) -> bool {
        self.attr_policy(element, attribute)
            .is_some_and(|policy| policy.accepts(value))
    }

    /// Returns `true` if URLs with `scheme` are permitted in URL-bearing
    /// attributes.
    fn is_url_scheme_allowed(&self, scheme: &str) -> bool;

    /// Whether a `<!DOCTYPE>` may be kept.
    fn allow_doc_type(&self) -> bool;

    /// Whether anchors must carry `rel="nofollow"`.
    fn require_no_follow(&self) -> bool;

    /// Whether URL-bearing attributes must hold parseable URLs.
    ///
    /// Always `true` while relative URLs are allowed.
    fn require_parseable_urls(&self) -> bool;

    /// Whether parseable URLs without a scheme or host are permitted.
    fn allow_relative_urls(&self) -> bool;
}
