//! Whitelist policies for HTML sanitizers.
//!
//! This crate decides, element by element and attribute by attribute, what
//! an HTML sanitizer may keep. It does no parsing itself: a sanitizer walks
//! the untrusted document and asks a [`Policy`] at every step.
//!
//! - **Elements** are permitted explicitly, by binding attributes to them, or
//!   by appearing in the [default table](DEFAULT_ELEMENTS_WITHOUT_ATTRS) of
//!   elements that are valid without attributes
//! - **Attributes** are permitted per element or globally, optionally gated
//!   by a [`ValueMatcher`] such as a compiled [`regex::Regex`]
//! - **URL schemes** and a few flags (`<!DOCTYPE>`, `rel="nofollow"`,
//!   parseable and relative URLs) steer URL handling
//!
//! Names are case-insensitive throughout.
//!
//! # Lifecycle
//!
//! A [`PolicyBuilder`] is configured once, then frozen into a [`Policy`].
//! `Policy` has no mutating methods and is `Send + Sync`, so a single policy
//! can serve any number of concurrent sanitizations without locking.
//!
//! # Examples
//!
//! ```
//! use html_policy::{PolicyBuilder, PolicyQuery};
//!
//! let digits = html_policy::pattern("^[0-9]+$").expect("valid pattern");
//!
//! let mut builder = PolicyBuilder::new();
//! builder.allow_attrs(["title"]).globally();
//! builder
//!     .allow_attrs(["colspan", "rowspan"])
//!     .matching(digits)
//!     .on_elements(["td", "th"]);
//! builder
//!     .allow_attrs(["href"])
//!     .on_elements(["a"])
//!     .allow_url_schemes(["mailto", "http", "https"])
//!     .require_no_follow_on_links(true);
//!
//! let policy = builder.build();
//!
//! assert!(policy.is_element_allowed("P")); // default table
//! assert!(policy.is_attribute_allowed("span", "title"));
//! assert!(policy.is_attribute_value_allowed("td", "colspan", "3"));
//! assert!(!policy.is_attribute_value_allowed("td", "colspan", "abc"));
//! assert!(policy.is_url_scheme_allowed("Http"));
//! assert!(!policy.is_url_scheme_allowed("javascript"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod attribute;
mod builder;
mod elements;
mod error;
mod matcher;
pub mod patterns;
mod policy;
pub mod presets;
mod query;

pub use attribute::{AttrPolicy, ValueConstraint};
pub use builder::{AttrPolicyBuilder, PolicyBuilder};
pub use elements::DEFAULT_ELEMENTS_WITHOUT_ATTRS;
pub use error::{Error, Rejection, RejectionKind};
pub use matcher::{pattern, MatchFn, ValueMatcher};
pub use policy::Policy;
pub use query::PolicyQuery;
