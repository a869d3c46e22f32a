//! Elements that are meaningful with no attributes at all.
//!
//! `<table>` is complete on its own, `<bdo>` is not (it needs `dir`), so
//! only the former is listed. The table is a presence floor for the query
//! interface and never a source of attribute permissions.

/// Element names known to be valid without attributes, sorted.
pub const DEFAULT_ELEMENTS_WITHOUT_ATTRS: &[&str] = &[
    "abbr",
    "acronym",
    "article",
    "aside",
    "audio",
    "b",
    "bdi",
    "blockquote",
    "body",
    "br",
    "button",
    "canvas",
    "caption",
    "cite",
    "code",
    "col",
    "colgroup",
    "datalist",
    "dd",
    "del",
    "details",
    "dfn",
    "div",
    "dl",
    "dt",
    "em",
    "fieldset",
    "figcaption",
    "figure",
    "footer",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "head",
    "header",
    "hgroup",
    "hr",
    "html",
    "i",
    "ins",
    "kbd",
    "li",
    "mark",
    "nav",
    "ol",
    "optgroup",
    "option",
    "p",
    "pre",
    "q",
    "rp",
    "rt",
    "ruby",
    "s",
    "samp",
    "section",
    "select",
    "small",
    "span",
    "strike",
    "strong",
    "style",
    "sub",
    "summary",
    "sup",
    "svg",
    "table",
    "tbody",
    "td",
    "textarea",
    "tfoot",
    "th",
    "thead",
    "time",
    "tr",
    "tt",
    "u",
    "ul",
    "var",
    "video",
    "wbr",
];

/// Returns `true` if `name` (already lowercase) is in the default table.
pub(crate) fn is_valid_without_attrs(name: &str) -> bool {
    DEFAULT_ELEMENTS_WITHOUT_ATTRS.binary_search(&name).is_ok()
}
