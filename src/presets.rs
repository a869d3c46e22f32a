//! Ready-made policies and the building blocks they are assembled from.
//!
//! The helpers are ordinary [`PolicyBuilder`] methods, so callers can start
//! from a preset's ingredients and add their own rules on top.

use crate::builder::PolicyBuilder;
use crate::patterns;
use crate::policy::Policy;

impl PolicyBuilder {
    /// Permits the usual link schemes (`mailto`, `http`, `https`), relative
    /// URLs, parseable-URL checking and `rel="nofollow"` on anchors.
    pub fn allow_standard_urls(&mut self) -> &mut Self {
        self.require_parseable_urls(true)
            .allow_relative_urls(true)
            .allow_url_schemes(["mailto", "http", "https"])
            .require_no_follow_on_links(true)
    }

    /// Permits `dir`, `lang`, `id` and `title` on every permitted element,
    /// each gated by a conservative pattern.
    pub fn allow_standard_attributes(&mut self) -> &mut Self {
        self.allow_attrs(["dir"])
            .matching(patterns::DIRECTION.clone())
            .globally();
        self.allow_attrs(["lang"])
            .matching(patterns::LANGUAGE.clone())
            .globally();
        self.allow_attrs(["id"])
            .matching(patterns::ID.clone())
            .globally();
        self.allow_attrs(["title"])
            .matching(patterns::PARAGRAPH.clone())
            .globally()
    }

    /// Permits `<img>` with `src`, `alt`, `align`, `width` and `height`.
    ///
    /// Whether `src` is acceptable as a URL is decided by the URL settings.
    pub fn allow_images(&mut self) -> &mut Self {
        self.allow_attrs(["align"])
            .matching(patterns::IMAGE_ALIGN.clone())
            .on_elements(["img"]);
        self.allow_attrs(["alt"])
            .matching(patterns::PARAGRAPH.clone())
            .on_elements(["img"]);
        self.allow_attrs(["height", "width"])
            .matching(patterns::NUMBER_OR_PERCENT.clone())
            .on_elements(["img"]);
        self.allow_attrs(["src"]).on_elements(["img"])
    }

    /// Permits ordered, unordered and definition lists.
    pub fn allow_lists(&mut self) -> &mut Self {
        self.allow_attrs(["type"])
            .matching(patterns::LIST_TYPE.clone())
            .on_elements(["ol", "ul", "li"]);
        self.allow_attrs(["start"])
            .matching(patterns::INTEGER.clone())
            .on_elements(["ol"]);
        self.allow_attrs(["value"])
            .matching(patterns::INTEGER.clone())
            .on_elements(["li"]);
        self.allow_elements(["dl", "dt", "dd"])
    }

    /// Permits tables with their structural and layout attributes.
    pub fn allow_tables(&mut self) -> &mut Self {
        self.allow_attrs(["height", "width"])
            .matching(patterns::NUMBER_OR_PERCENT.clone())
            .on_elements(["table"]);
        self.allow_attrs(["summary"])
            .matching(patterns::PARAGRAPH.clone())
            .on_elements(["table"]);
        self.allow_elements(["caption"]);

        self.allow_attrs(["align"])
            .matching(patterns::CELL_ALIGN.clone())
            .on_elements(["col", "colgroup", "thead", "tbody", "tfoot", "tr", "td", "th"]);
        self.allow_attrs(["valign"])
            .matching(patterns::CELL_VERTICAL_ALIGN.clone())
            .on_elements(["col", "colgroup", "thead", "tbody", "tfoot", "tr", "td", "th"]);
        self.allow_attrs(["height", "width"])
            .matching(patterns::NUMBER_OR_PERCENT.clone())
            .on_elements(["col", "colgroup", "td", "th"]);
        self.allow_attrs(["span"])
            .matching(patterns::INTEGER.clone())
            .on_elements(["col", "colgroup"]);

        self.allow_attrs(["abbr"])
            .matching(patterns::PARAGRAPH.clone())
            .on_elements(["td", "th"]);
        self.allow_attrs(["colspan", "rowspan"])
            .matching(patterns::INTEGER.clone())
            .on_elements(["td", "th"]);
        self.allow_attrs(["headers"])
            .matching(patterns::SPACE_SEPARATED_TOKENS.clone())
            .on_elements(["td", "th"]);
        self.allow_attrs(["nowrap"])
            .matching(patterns::NOWRAP.clone())
            .on_elements(["td", "th"]);
        self.allow_attrs(["scope"])
            .matching(patterns::TABLE_SCOPE.clone())
            .on_elements(["th"])
    }
}

/// A policy that strips every attribute and every element outside the
/// default table of elements valid without attributes.
///
/// Use it to reduce untrusted markup to plain structure and text.
///
/// # Examples
///
/// ```
/// use html_policy::{presets, PolicyQuery};
///
/// let policy = presets::strict_policy();
/// assert!(policy.is_element_allowed("p"));
/// assert!(!policy.is_element_allowed("a"));
/// assert!(!policy.is_attribute_allowed("p", "class"));
/// ```
pub fn strict_policy() -> Policy {
    PolicyBuilder::new().build()
}

/// A policy for user-generated content such as comments and posts.
///
/// Permits text formatting, headings, quotes, lists, tables, images and
/// links with `mailto`/`http`/`https` or relative URLs. Anchors get
/// `rel="nofollow"`. Scripts, `<form>`, `<input>`, event handlers, inline
/// `style` attributes and embedded content are not permitted.
///
/// Elements in the default table still pass through without attributes,
/// including form controls such as `<button>`, `<select>` and `<textarea>`
/// and the `<style>` element. A sanitizer that must drop those needs to do
/// so on its own.
///
/// # Examples
///
/// ```
/// use html_policy::{presets, PolicyQuery};
///
/// let policy = presets::ugc_policy();
/// assert!(policy.is_attribute_allowed("a", "href"));
/// assert!(policy.is_attribute_value_allowed("td", "colspan", "2"));
/// assert!(!policy.is_element_allowed("script"));
/// assert!(policy.require_no_follow());
/// ```
pub fn ugc_policy() -> Policy {
    let mut builder = PolicyBuilder::new();
    builder.allow_standard_attributes().allow_standard_urls();

    // Sectioning
    builder.allow_elements(["article", "aside", "section", "hgroup"]);
    builder
        .allow_attrs(["open"])
        .matching(patterns::OPEN.clone())
        .on_elements(["details"]);
    builder.allow_elements(["summary"]);
    builder.allow_elements(["h1", "h2", "h3", "h4", "h5", "h6"]);

    // Grouping
    builder.allow_elements(["br", "div", "hr", "p", "span", "wbr"]);
    builder.allow_attrs(["cite"]).on_elements(["blockquote", "q"]);
    builder.allow_elements(["figure", "figcaption"]);

    // Links
    builder.allow_attrs(["href"]).on_elements(["a"]);

    // Text semantics
    builder.allow_elements([
        "abbr", "acronym", "cite", "code", "dfn", "em", "mark", "s", "samp", "strong", "sub",
        "sup", "var", "b", "i", "pre", "small", "strike", "tt", "u", "rp", "rt", "ruby",
    ]);
    builder
        .allow_attrs(["datetime"])
        .matching(patterns::ISO8601.clone())
        .on_elements(["time", "del", "ins"]);
    builder.allow_attrs(["cite"]).on_elements(["del", "ins"]);

    builder.allow_lists().allow_tables().allow_images();

    Policy::from(builder)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::PolicyQuery;

    #[test]
    fn strict_policy_keeps_only_the_default_floor() {
        let policy = strict_policy();

        assert!(policy.is_element_allowed("strong"));
        assert!(!policy.is_element_allowed("img"));
        assert!(!policy.is_attribute_allowed("div", "id"));
        assert!(!policy.is_url_scheme_allowed("https"));
        assert!(!policy.require_parseable_urls());
    }

    #[test]
    fn standard_urls() {
        let policy = PolicyBuilder::new().allow_standard_urls().build();

        assert!(policy.require_parseable_urls());
        assert!(policy.allow_relative_urls());
        assert!(policy.require_no_follow());
        for scheme in ["mailto", "http", "https"] {
            assert!(policy.is_url_scheme_allowed(scheme));
        }
        assert!(!policy.is_url_scheme_allowed("javascript"));
        assert!(!policy.is_url_scheme_allowed("data"));
    }

    #[test]
    fn standard_attributes_apply_to_every_permitted_element() {
        let policy = PolicyBuilder::new().allow_standard_attributes().build();

        assert!(policy.is_attribute_value_allowed("p", "dir", "rtl"));
        assert!(policy.is_attribute_value_allowed("span", "lang", "en"));
        assert!(policy.is_attribute_value_allowed("div", "id", "main-content"));
        assert!(!policy.is_attribute_value_allowed("div", "id", "a b"));
        assert!(!policy.is_attribute_value_allowed("p", "title", "<b>hi</b>"));
        assert!(!policy.is_attribute_allowed("p", "onclick"));
    }

    #[test]
    fn images() {
        let policy = PolicyBuilder::new().allow_images().build();

        assert!(policy.is_element_allowed("img"));
        assert!(policy.is_attribute_value_allowed("img", "width", "100%"));
        assert!(!policy.is_attribute_value_allowed("img", "width", "100px"));
        assert!(policy.is_attribute_value_allowed("img", "src", "/a.png"));
        assert!(!policy.is_attribute_allowed("img", "onerror"));
    }

    #[test]
    fn lists() {
        let policy = PolicyBuilder::new().allow_lists().build();

        assert!(policy.is_attribute_value_allowed("ol", "start", "3"));
        assert!(policy.is_attribute_value_allowed("ul", "type", "square"));
        assert!(!policy.is_attribute_value_allowed("li", "value", "x"));
        assert!(policy.element_attrs("dl").is_some());
    }

    #[test]
    fn tables() {
        let policy = PolicyBuilder::new().allow_tables().build();

        assert!(policy.is_attribute_value_allowed("td", "colspan", "2"));
        assert!(policy.is_attribute_value_allowed("th", "scope", "colgroup"));
        assert!(!policy.is_attribute_value_allowed("td", "scope", "row"));
        assert!(policy.is_attribute_value_allowed("td", "nowrap", ""));
        assert!(policy.is_attribute_value_allowed("tr", "valign", "middle"));
        assert!(!policy.is_attribute_value_allowed("tr", "colspan", "2"));
    }

    #[test]
    fn ugc_policy_permits_content_and_strips_active_markup() {
        let policy = ugc_policy();

        for element in ["a", "blockquote", "img", "table", "details", "time", "ol"] {
            assert!(policy.is_element_allowed(element), "{} should be allowed", element);
        }
        for element in ["script", "iframe", "object", "form", "input", "link", "meta"] {
            assert!(!policy.is_element_allowed(element), "{} should be stripped", element);
        }

        assert!(policy.is_attribute_value_allowed("time", "datetime", "2024-01-31"));
        assert!(!policy.is_attribute_value_allowed("time", "datetime", "tomorrow"));
        assert!(policy.is_attribute_value_allowed("details", "open", ""));
        assert!(!policy.is_attribute_allowed("a", "onclick"));
        assert!(!policy.is_attribute_allowed("a", "style"));
    }

    #[test]
    fn ugc_policy_keeps_default_table_controls_without_attributes() {
        let policy = ugc_policy();

        for element in ["button", "select", "option", "textarea", "fieldset", "style"] {
            assert!(policy.is_element_allowed(element), "{} is in the default table", element);
            assert!(policy.element_attrs(element).is_none());
            assert!(!policy.is_attribute_allowed(element, "name"));
            assert!(!policy.is_attribute_allowed(element, "onclick"));
        }
        assert!(!policy.is_element_allowed("form"));
        assert!(!policy.is_element_allowed("input"));
    }
}
