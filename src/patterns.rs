//! Value patterns for common attribute values.
//!
//! Compiled on first use and shared by the presets. Pass them to
//! [`matching`](crate::AttrPolicyBuilder::matching) with `.clone()`; cloning
//! a `Regex` does not recompile it.

use std::sync::LazyLock;

use regex::Regex;

fn compile(source: &'static str) -> Regex {
    // Sources are literals below; `every_pattern_compiles` covers them.
    Regex::new(source).expect("built-in value pattern is valid")
}

/// `ltr` or `rtl`, for `dir`.
pub static DIRECTION: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)^(rtl|ltr)$"));

/// Free text without markup-significant characters, for `title`, `alt` and
/// similar.
pub static PARAGRAPH: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^[\p{L}\p{N}\s\-_',:\[\]!\./\\\(\)&]*$"));

/// A language tag, for `lang`.
pub static LANGUAGE: LazyLock<Regex> = LazyLock::new(|| compile(r"^[a-zA-Z]{2,20}$"));

/// An element id.
pub static ID: LazyLock<Regex> = LazyLock::new(|| compile(r"^[a-zA-Z0-9:\-_\.]+$"));

/// A non-negative integer.
pub static INTEGER: LazyLock<Regex> = LazyLock::new(|| compile(r"^[0-9]+$"));

/// A non-negative integer, optionally followed by `%`.
pub static NUMBER_OR_PERCENT: LazyLock<Regex> = LazyLock::new(|| compile(r"^[0-9]+%?$"));

/// A signed decimal number with optional exponent.
pub static NUMBER: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^[-+]?[0-9]*\.?[0-9]+([eE][-+]?[0-9]+)?$"));

/// An ISO 8601 date, time or date-time, for `datetime`.
pub static ISO8601: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"^[0-9]{4}(-[0-9]{2}(-[0-9]{2}([ T][0-9]{2}(:[0-9]{2}){1,2}(\.[0-9]+)?(Z|[+-][0-9]{2}(:?[0-9]{2})?)?)?)?)?$",
    )
});

/// Whitespace separated word tokens, for `headers` and `class`.
pub static SPACE_SEPARATED_TOKENS: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^[\s\p{L}\p{N}_-]+$"));

/// Horizontal alignment of a table cell.
pub static CELL_ALIGN: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)^(center|justify|left|right|char)$"));

/// Vertical alignment of a table cell.
pub static CELL_VERTICAL_ALIGN: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)^(baseline|bottom|middle|top)$"));

/// Alignment of an image.
pub static IMAGE_ALIGN: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)^(left|right|top|texttop|middle|absmiddle|baseline|bottom|absbottom)$")
});

/// Marker style of a list.
pub static LIST_TYPE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)^(circle|disc|square|a|i|1)$"));

/// Empty or `nowrap`, for the boolean `nowrap` cell attribute.
pub static NOWRAP: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)^(nowrap)?$"));

/// Empty or `open`, for the boolean `open` attribute of `<details>`.
pub static OPEN: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)^(open)?$"));

/// The `scope` of a header cell.
pub static TABLE_SCOPE: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)^(row|col)(group)?$"));
