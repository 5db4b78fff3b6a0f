//! Generation pipeline facade
//!
//! Wires the pipeline end to end: resolve features, resolve content,
//! assemble artifacts, check consistency, hash the manifest. The whole run
//! is synchronous pure computation over in-memory values and is total: any
//! well-formed configuration produces a manifest and a report, never an
//! error.

pub mod validator;

use sitesmith_check::ConsistencyReport;
use sitesmith_core::{ArtifactManifest, Configuration};
use sitesmith_features::ResolvedFeatures;
use tracing::info;

pub use validator::{FinalStatus, IssueDisposition, SiteValidator, ValidationOutcome};

/// Everything produced for one configuration
#[derive(Debug, Clone)]
pub struct GenerationOutput {
    pub manifest: ArtifactManifest,
    pub resolved: ResolvedFeatures,
    pub report: ConsistencyReport,
    /// blake3 over the canonical manifest serialization; identical
    /// configurations must yield identical hashes
    pub manifest_hash: String,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Generator;

impl Generator {
    pub fn new() -> Self {
        Self
    }

    /// Run the full pipeline for one configuration.
    pub fn generate(&self, config: &Configuration) -> GenerationOutput {
        let resolved = sitesmith_features::resolve(&config.feature_tokens);
        let content = sitesmith_content::resolve(config);
        let manifest = sitesmith_assemble::assemble(config, &resolved, &content);
        let report = sitesmith_check::check(&manifest, &resolved);
        let manifest_hash = manifest
            .manifest_hash()
            .expect("manifest of owned strings serializes infallibly");

        info!(
            project = %config.project_name,
            artifacts = manifest.len(),
            passed = report.passed,
            hash = %manifest_hash,
            "generation complete"
        );

        GenerationOutput {
            manifest,
            resolved,
            report,
            manifest_hash,
        }
    }
}
