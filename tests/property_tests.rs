//! Property tests for the policy builder and query interface.
//!
//! These check invariants that must hold for any names and values, not
//! just the handful exercised by the unit tests.

use html_policy::{MatchFn, PolicyBuilder, PolicyQuery, DEFAULT_ELEMENTS_WITHOUT_ATTRS};
use proptest::prelude::*;

// Strategy: ASCII element or attribute names in mixed case
fn arb_name() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z][a-zA-Z0-9-]{0,11}").unwrap()
}

// Strategy: the same name with random per-character casing
fn recase(name: &str, flips: &[bool]) -> String {
    name.chars()
        .zip(flips.iter().cycle())
        .map(|(c, upper)| {
            if *upper {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect()
}

proptest! {
    /// Property: element lookups ignore case
    #[test]
    fn proptest_element_lookup_ignores_case(
        name in arb_name(),
        flips in prop::collection::vec(any::<bool>(), 1..12)
    ) {
        let policy = PolicyBuilder::new().allow_elements([name.as_str()]).build();

        prop_assert!(policy.is_element_allowed(&recase(&name, &flips)));
        prop_assert!(policy.is_element_allowed(&name.to_uppercase()));
    }

    /// Property: attribute and scheme lookups ignore case
    #[test]
    fn proptest_attribute_and_scheme_lookup_ignore_case(
        element in arb_name(),
        attr in arb_name(),
        scheme in prop::string::string_regex("[a-zA-Z][a-zA-Z0-9+.-]{0,9}").unwrap(),
        flips in prop::collection::vec(any::<bool>(), 1..12)
    ) {
        let policy = PolicyBuilder::new()
            .allow_attrs([attr.as_str()])
            .on_elements([element.as_str()])
            .allow_url_schemes([scheme.as_str()])
            .build();

        prop_assert!(policy.is_attribute_allowed(
            &recase(&element, &flips),
            &recase(&attr, &flips)
        ));
        prop_assert!(policy.is_url_scheme_allowed(&recase(&scheme, &flips)));
    }

    /// Property: allowing an element twice is the same as allowing it once
    #[test]
    fn proptest_allow_elements_is_idempotent(
        names in prop::collection::vec(arb_name(), 1..8),
        other in arb_name()
    ) {
        let once = PolicyBuilder::new().allow_elements(&names).build();
        let twice = PolicyBuilder::new()
            .allow_elements(&names)
            .allow_elements(&names)
            .build();

        prop_assert_eq!(once.is_element_allowed(&other), twice.is_element_allowed(&other));
        for name in &names {
            prop_assert!(twice.is_element_allowed(name));
            prop_assert_eq!(twice.element_attrs(name).map(|a| a.len()), Some(0));
        }
    }

    /// Property: the last registration for an (element, attribute) pair wins
    #[test]
    fn proptest_last_registration_wins(
        element in arb_name(),
        attr in arb_name(),
        first_limit in 0usize..10,
        second_limit in 0usize..10,
        value in prop::string::string_regex("[a-z]{0,12}").unwrap()
    ) {
        let mut builder = PolicyBuilder::new();
        builder
            .allow_attrs([attr.as_str()])
            .matching(MatchFn(move |v: &str| v.len() <= first_limit))
            .on_elements([element.as_str()]);
        builder
            .allow_attrs([attr.as_str()])
            .matching(MatchFn(move |v: &str| v.len() <= second_limit))
            .on_elements([element.as_str()]);
        let policy = builder.build();

        prop_assert_eq!(
            policy.is_attribute_value_allowed(&element, &attr, &value),
            value.len() <= second_limit
        );
    }

    /// Property: a rule with no attribute names permits nothing new
    #[test]
    fn proptest_empty_attribute_rule_permits_nothing(
        elements in prop::collection::vec(arb_name(), 1..6)
    ) {
        let mut builder = PolicyBuilder::new();
        builder.allow_attrs(Vec::<&str>::new()).on_elements(&elements);
        let policy = builder.build();
        let baseline = PolicyBuilder::new().build();

        for element in &elements {
            prop_assert_eq!(
                policy.is_element_allowed(element),
                baseline.is_element_allowed(element)
            );
            prop_assert!(policy.element_attrs(element).is_none());
        }
    }

    /// Property: any sequence of URL flag calls leaves parseable URLs on
    /// whenever relative URLs are allowed
    #[test]
    fn proptest_relative_urls_imply_parseable_urls(
        calls in prop::collection::vec((any::<bool>(), any::<bool>()), 0..10)
    ) {
        let mut builder = PolicyBuilder::new();
        for (relative, value) in calls {
            if relative {
                builder.allow_relative_urls(value);
            } else {
                builder.require_parseable_urls(value);
            }
        }
        let policy = builder.build();

        if policy.allow_relative_urls() {
            prop_assert!(policy.require_parseable_urls());
        }
    }

    /// Property: the default element table never grants attributes
    #[test]
    fn proptest_default_elements_grant_no_attributes(
        index in 0..DEFAULT_ELEMENTS_WITHOUT_ATTRS.len(),
        attr in arb_name()
    ) {
        let policy = PolicyBuilder::new().build();
        let element = DEFAULT_ELEMENTS_WITHOUT_ATTRS[index];

        prop_assert!(policy.is_element_allowed(element));
        prop_assert!(!policy.is_attribute_allowed(element, &attr));
    }
}
