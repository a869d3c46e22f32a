//! Walks a hand-built element list through the user-generated-content
//! policy, the way a sanitizer would.
//!
//! This example shows:
//! 1. Element decisions, including the default element floor
//! 2. Attribute decisions with the reason for each rejection
//! 3. URL scheme and flag queries
//!
//! Run with: `cargo run --example ugc_policy`

use html_policy::{presets, PolicyQuery};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== UGC Policy Walkthrough ===\n");
    let policy = presets::ugc_policy();

    let document: &[(&str, &[(&str, &str)])] = &[
        ("p", &[("title", "Intro"), ("style", "color: red")]),
        ("a", &[("href", "https://example.com"), ("onclick", "steal()")]),
        ("TD", &[("colspan", "2"), ("rowspan", "all")]),
        ("img", &[("src", "/cat.png"), ("width", "100px")]),
        ("script", &[("src", "https://evil.example/x.js")]),
    ];

    for (element, attrs) in document {
        if !policy.is_element_allowed(element) {
            println!("<{}> stripped", element);
            continue;
        }
        println!("<{}> kept", element);

        for (name, value) in attrs.iter() {
            match policy.check_attribute(element, name, value) {
                Ok(_) => println!("    {}=\"{}\" kept", name, value),
                Err(rejection) => println!("    {}=\"{}\" stripped ({})", name, value, rejection.kind),
            }
        }
    }

    println!("\n--- URL handling ---");
    for scheme in ["https", "MAILTO", "javascript", "data"] {
        println!("  {:<10} allowed: {}", scheme, policy.is_url_scheme_allowed(scheme));
    }
    println!("  parseable URLs required: {}", policy.require_parseable_urls());
    println!("  relative URLs allowed:   {}", policy.allow_relative_urls());
    println!("  rel=\"nofollow\" required: {}", policy.require_no_follow());
}
