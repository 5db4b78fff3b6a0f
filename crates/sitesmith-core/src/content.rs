//! Resolved content model

use serde::{Deserialize, Serialize};

/// Normalized textual content used to populate generated page artifacts.
///
/// Invariant: `services` and `testimonials` are never empty, regardless of
/// input. Page generators emit repeated blocks and assume at least one entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentBundle {
    pub hero_title: String,
    pub hero_subtitle: String,
    pub services: Vec<ServiceEntry>,
    pub testimonials: Vec<TestimonialEntry>,
    pub about_text: String,
    pub cta_primary: String,
    pub cta_secondary: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceEntry {
    pub title: String,
    pub description: String,
}

impl ServiceEntry {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialEntry {
    pub name: String,
    pub text: String,
    pub rating: u8,
}

impl TestimonialEntry {
    pub fn new(name: impl Into<String>, text: impl Into<String>, rating: u8) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
            rating,
        }
    }
}
