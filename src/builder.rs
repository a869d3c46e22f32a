use std::sync::Arc;

use crate::attribute::{AttrPolicy, ValueConstraint};
use crate::matcher::ValueMatcher;
use crate::policy::{normalize, Policy};

/// Declares a whitelist policy.
///
/// `PolicyBuilder` is the only mutable side of a policy. Configure it once,
/// then freeze it with [`build`](Self::build) (or `Policy::from`) and share
/// the resulting [`Policy`]. Every call is total: unknown names are simply
/// registered and repeated registrations overwrite earlier ones.
///
/// A fresh builder permits nothing beyond the default table of elements that
/// are valid without attributes.
///
/// # Examples
///
/// ```
/// use html_policy::{PolicyBuilder, PolicyQuery};
///
/// let mut builder = PolicyBuilder::new();
/// builder.allow_attrs(["title"]).globally();
/// builder
///     .allow_attrs(["abbr"])
///     .on_elements(["td", "th"]);
/// builder.allow_elements(["b", "i"]);
///
/// let policy = builder.build();
/// assert!(policy.is_attribute_allowed("span", "title"));
/// assert!(policy.is_attribute_allowed("th", "abbr"));
/// assert!(!policy.is_attribute_allowed("b", "abbr"));
/// ```
#[derive(Debug, Clone)]
pub struct PolicyBuilder {
    policy: Policy,
}

impl PolicyBuilder {
    /// Creates a builder with nothing whitelisted.
    pub fn new() -> Self {
        Self {
            policy: Policy::empty(),
        }
    }

    /// Starts an attribute rule for `names`.
    ///
    /// The rule takes effect only when it is committed with
    /// [`AttrPolicyBuilder::on_elements`] or [`AttrPolicyBuilder::globally`].
    pub fn allow_attrs<I, S>(&mut self, names: I) -> AttrPolicyBuilder<'_>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        AttrPolicyBuilder {
            attr_names: names
                .into_iter()
                .map(|name| normalize(name.as_ref()).into_owned())
                .collect(),
            constraint: ValueConstraint::Any,
            builder: self,
        }
    }

    /// Permits `names` as elements without binding any attributes to them.
    ///
    /// Elements that already have attribute rules keep them.
    pub fn allow_elements<I, S>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            let name = normalize(name.as_ref()).into_owned();
            tracing::debug!(element = %name, "element allowed");
            self.policy.elements.entry(name).or_default();
        }
        self
    }

    /// Permits URLs with the given schemes, e.g. `["mailto", "http", "https"]`.
    pub fn allow_url_schemes<I, S>(&mut self, schemes: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for scheme in schemes {
            let scheme = normalize(scheme.as_ref()).into_owned();
            tracing::debug!(scheme = %scheme, "url scheme allowed");
            self.policy.url_schemes.insert(scheme);
        }
        self
    }

    /// Requires `rel="nofollow"` on every anchor.
    pub fn require_no_follow_on_links(&mut self, require: bool) -> &mut Self {
        self.policy.require_no_follow = require;
        self
    }

    /// Requires URL-bearing attributes (`a.href`, `area.href`,
    /// `blockquote.cite`, `img.src`, `link.href`, `script.src`) to hold
    /// parseable URLs.
    pub fn require_parseable_urls(&mut self, require: bool) -> &mut Self {
        self.policy.require_parseable_urls = require;
        self
    }

    /// Sets whether relative URLs are permitted.
    ///
    /// Always turns parseable-URL checking on, whatever `allow` is. Calling
    /// this never turns parseable-URL checking off.
    pub fn allow_relative_urls(&mut self, allow: bool) -> &mut Self {
        self.require_parseable_urls(true);
        self.policy.allow_relative_urls = allow;
        self
    }

    /// Sets whether a `<!DOCTYPE>` may be kept.
    ///
    /// Leave this off (the default) when sanitizing fragments.
    pub fn allow_doc_type(&mut self, allow: bool) -> &mut Self {
        self.policy.allow_doc_type = allow;
        self
    }

    /// Freezes a copy of the current declarations into a [`Policy`].
    ///
    /// The builder stays usable; later changes do not affect the returned
    /// policy.
    pub fn build(&self) -> Policy {
        let policy = self.policy.clone();
        tracing::debug!(
            elements = policy.elements.len(),
            global_attrs = policy.global_attrs.len(),
            url_schemes = policy.url_schemes.len(),
            "policy built"
        );
        policy
    }
}

impl Default for PolicyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl From<PolicyBuilder> for Policy {
    fn from(builder: PolicyBuilder) -> Self {
        builder.policy
    }
}

/// A pending attribute rule.
///
/// Produced by [`PolicyBuilder::allow_attrs`]. Dropping it without calling
/// [`on_elements`](Self::on_elements) or [`globally`](Self::globally) leaves
/// the policy untouched.
#[must_use = "an attribute rule has no effect until `on_elements` or `globally` is called"]
#[derive(Debug)]
pub struct AttrPolicyBuilder<'a> {
    builder: &'a mut PolicyBuilder,
    attr_names: Vec<String>,
    constraint: ValueConstraint,
}

impl<'a> AttrPolicyBuilder<'a> {
    /// Gates the attribute values with `matcher`.
    ///
    /// Calling this again replaces the previous matcher.
    ///
    /// # Examples
    ///
    /// ```
    /// use html_policy::{PolicyBuilder, PolicyQuery};
    ///
    /// let span = html_policy::pattern("^[0-9]+$").unwrap();
    /// let policy = PolicyBuilder::new()
    ///     .allow_attrs(["colspan", "rowspan"])
    ///     .matching(span)
    ///     .on_elements(["td", "th"])
    ///     .build();
    ///
    /// assert!(policy.is_attribute_value_allowed("td", "colspan", "3"));
    /// assert!(!policy.is_attribute_value_allowed("th", "rowspan", "abc"));
    /// ```
    pub fn matching<M>(self, matcher: M) -> Self
    where
        M: ValueMatcher + 'static,
    {
        self.matching_shared(Arc::new(matcher))
    }

    /// Like [`matching`](Self::matching), reusing a matcher already shared
    /// with other rules.
    pub fn matching_shared(mut self, matcher: Arc<dyn ValueMatcher>) -> Self {
        self.constraint = ValueConstraint::Matching(matcher);
        self
    }

    /// Binds the rule to each of `elements`.
    ///
    /// Overwrites any earlier rule for the same (element, attribute) pair.
    /// A rule with no attribute names writes nothing and permits no element.
    pub fn on_elements<I, S>(self, elements: I) -> &'a mut PolicyBuilder
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let Self {
            builder,
            attr_names,
            constraint,
        } = self;

        if attr_names.is_empty() {
            return builder;
        }

        for element in elements {
            let element = normalize(element.as_ref()).into_owned();
            tracing::debug!(
                element = %element,
                attrs = ?attr_names,
                constraint = ?constraint,
                "attribute rule bound to element"
            );

            let attrs = builder.policy.elements.entry(element).or_default();
            for attr in &attr_names {
                attrs.insert(
                    attr.clone(),
                    AttrPolicy::from_constraint(constraint.clone()),
                );
            }
        }
        builder
    }

    /// Binds the rule to every permitted element.
    ///
    /// Overwrites any earlier global rule for the same attribute.
    pub fn globally(self) -> &'a mut PolicyBuilder {
        let Self {
            builder,
            attr_names,
            constraint,
        } = self;

        tracing::debug!(
            attrs = ?attr_names,
            constraint = ?constraint,
            "attribute rule bound globally"
        );
        for attr in attr_names {
            builder
                .policy
                .global_attrs
                .insert(attr, AttrPolicy::from_constraint(constraint.clone()));
        }
        builder
    }
}
