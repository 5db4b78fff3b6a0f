//! External validator contract
//!
//! The downstream validation/auto-repair engine is an external collaborator;
//! only its boundary is modeled here. It may run against a value copy of the
//! manifest on its own schedule. The generation core supplies inputs and
//! consumes the outcome; it performs no repair of its own.

use serde::{Deserialize, Serialize};
use sitesmith_core::{ArtifactManifest, Configuration};

/// Downstream validation/auto-repair collaborator
pub trait SiteValidator {
    fn validate(&self, manifest: &ArtifactManifest, config: &Configuration) -> ValidationOutcome;
}

/// One detected issue and what became of it. Every issue has exactly one
/// disposition by construction; there are no separate counters to drift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "disposition", rename_all = "snake_case")]
pub enum IssueDisposition {
    /// Repaired in `fixed_manifest` without intervention
    AutoFixed { description: String },
    /// Would have occurred downstream; blocked before it surfaced
    Prevented { description: String },
    /// Requires a human decision
    Manual { description: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FinalStatus {
    ReadyToUse,
    NeedsReview,
    /// Fault within the validator itself, never the generation core
    Error,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationOutcome {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub suggestions: Vec<String>,
    pub fixed_manifest: ArtifactManifest,
    pub dispositions: Vec<IssueDisposition>,
    pub final_status: FinalStatus,
}

impl ValidationOutcome {
    pub fn auto_fixed_count(&self) -> usize {
        self.dispositions
            .iter()
            .filter(|d| matches!(d, IssueDisposition::AutoFixed { .. }))
            .count()
    }

    pub fn prevented_count(&self) -> usize {
        self.dispositions
            .iter()
            .filter(|d| matches!(d, IssueDisposition::Prevented { .. }))
            .count()
    }

    pub fn manual_issue_count(&self) -> usize {
        self.dispositions
            .iter()
            .filter(|d| matches!(d, IssueDisposition::Manual { .. }))
            .count()
    }
}
