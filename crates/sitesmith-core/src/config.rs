//! Generation request model
//!
//! A [`Configuration`] is created once per generation request and never
//! mutated. Every business field is optional; missing values are filled with
//! deterministic defaults downstream rather than rejected.

use serde::{Deserialize, Serialize};

/// Declarative input for one generation request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    pub project_name: String,

    pub business_name: String,

    #[serde(default = "default_industry")]
    pub industry_code: String,

    /// Raw feature tokens as selected by the caller. May contain duplicates
    /// and unrecognized values; unrecognized tokens are silently ignored.
    #[serde(default)]
    pub feature_tokens: Vec<String>,

    #[serde(default, alias = "businessData")]
    pub business: BusinessData,

    /// Externally supplied content. When present it takes priority over the
    /// per-industry fallback table.
    #[serde(default)]
    pub external_content: Option<ExternalContent>,
}

impl Configuration {
    pub fn new(project_name: impl Into<String>, business_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            business_name: business_name.into(),
            industry_code: default_industry(),
            feature_tokens: Vec::new(),
            business: BusinessData::default(),
            external_content: None,
        }
    }

    pub fn with_features<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.feature_tokens = tokens.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_industry(mut self, code: impl Into<String>) -> Self {
        self.industry_code = code.into();
        self
    }
}

/// Business metadata. All fields optional by design.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessData {
    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub phone: Option<String>,

    #[serde(default)]
    pub address: Option<String>,
}

/// Caller-supplied content bundle. Every field is optional; missing fields
/// fall back to synthesized defaults during content resolution.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalContent {
    #[serde(default)]
    pub hero_title: Option<String>,

    #[serde(default)]
    pub hero_subtitle: Option<String>,

    #[serde(default)]
    pub services: Vec<ExternalServiceEntry>,

    #[serde(default)]
    pub testimonials: Vec<ExternalTestimonialEntry>,

    #[serde(default)]
    pub about_text: Option<String>,

    #[serde(default)]
    pub cta_primary: Option<String>,

    #[serde(default)]
    pub cta_secondary: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalServiceEntry {
    pub title: String,

    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalTestimonialEntry {
    pub name: String,

    pub text: String,

    #[serde(default = "default_rating")]
    pub rating: u8,
}

fn default_industry() -> String {
    "general".to_string()
}

fn default_rating() -> u8 {
    5
}
