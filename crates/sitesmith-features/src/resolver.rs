//! Feature token resolver
//!
//! Resolution is pure and never fails: the same token list always yields the
//! same page and component sets, in the same order. Unrecognized tokens are
//! dropped silently; callers select features from an open vocabulary and
//! stale or misspelled tokens must not break generation.

use tracing::debug;

/// Pages every project gets, before any feature rule runs
const BASE_PAGES: &[&str] = &["home", "about", "services"];

/// Components every project gets, before any feature rule runs
const BASE_COMPONENTS: &[&str] = &["Navigation", "Footer", "LoadingSpinner", "ErrorFallback"];

/// One expansion rule for a recognized feature token
struct FeatureRule {
    token: &'static str,
    pages: &'static [&'static str],
    components: &'static [&'static str],
    /// Skip this rule entirely when the named token was also selected.
    /// Used where another feature already contributes a superset.
    unless: Option<&'static str>,
}

/// Expansion rules in fixed priority order. Resolution walks this table top
/// to bottom exactly once; table order IS the documented priority order.
///
/// Note the asymmetry: `testimonials`, `newsletter`, `notifications` and
/// `social` contribute components but no pages. They are cross-cutting UI
/// rendered inside existing pages rather than destinations of their own.
const FEATURE_RULES: &[FeatureRule] = &[
    FeatureRule {
        token: "auth",
        pages: &["login", "register", "profile"],
        components: &["AuthForm", "UserProfile"],
        unless: None,
    },
    FeatureRule {
        token: "chat",
        pages: &["chat"],
        components: &["LiveChat", "ChatWidget", "ChatMessage"],
        unless: None,
    },
    FeatureRule {
        token: "contact-form",
        pages: &["contact"],
        components: &["ContactForm"],
        unless: None,
    },
    // Maps to a "locations" page, not a literal "geolocation" page.
    FeatureRule {
        token: "geolocation",
        pages: &["locations"],
        components: &["LocationMap"],
        unless: None,
    },
    // "auth" already contributes the profile page/component group.
    FeatureRule {
        token: "profile",
        pages: &["profile"],
        components: &["UserProfile"],
        unless: Some("auth"),
    },
    FeatureRule {
        token: "gallery",
        pages: &["gallery"],
        components: &["ImageGallery"],
        unless: None,
    },
    FeatureRule {
        token: "blog",
        pages: &["blog"],
        components: &["BlogCard"],
        unless: None,
    },
    FeatureRule {
        token: "booking",
        pages: &["booking"],
        components: &["BookingForm"],
        unless: None,
    },
    FeatureRule {
        token: "testimonials",
        pages: &[],
        components: &["TestimonialCarousel"],
        unless: None,
    },
    FeatureRule {
        token: "newsletter",
        pages: &[],
        components: &["NewsletterSignup"],
        unless: None,
    },
    FeatureRule {
        token: "notifications",
        pages: &[],
        components: &["NotificationBell"],
        unless: None,
    },
    FeatureRule {
        token: "social",
        pages: &[],
        components: &["SocialLinks"],
        unless: None,
    },
];

/// Ordered, deduplicated page and component sets for one configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFeatures {
    pub pages: Vec<String>,
    pub components: Vec<String>,
}

/// Expand raw feature tokens into page and component sets.
///
/// Duplicate tokens resolve the same as a single occurrence and a token that
/// would re-add an existing page or component is skipped, so every entry
/// appears exactly once.
pub fn resolve<S: AsRef<str>>(tokens: &[S]) -> ResolvedFeatures {
    let selected: Vec<&str> = tokens.iter().map(AsRef::as_ref).collect();

    let mut pages: Vec<String> = BASE_PAGES.iter().map(|p| p.to_string()).collect();
    let mut components: Vec<String> = BASE_COMPONENTS.iter().map(|c| c.to_string()).collect();

    for rule in FEATURE_RULES {
        if !selected.contains(&rule.token) {
            continue;
        }
        if let Some(other) = rule.unless {
            if selected.contains(&other) {
                debug!(token = rule.token, superseded_by = other, "rule skipped");
                continue;
            }
        }
        for page in rule.pages {
            push_unique(&mut pages, page);
        }
        for component in rule.components {
            push_unique(&mut components, component);
        }
    }

    for token in &selected {
        if !FEATURE_RULES.iter().any(|rule| rule.token == *token) {
            debug!(token = *token, "unrecognized feature token dropped");
        }
    }

    ResolvedFeatures { pages, components }
}

fn push_unique(set: &mut Vec<String>, value: &str) {
    if !set.iter().any(|existing| existing == value) {
        set.push(value.to_string());
    }
}
