//! Manifest consistency checking
//!
//! Re-derives the artifact and style paths every resolved token is expected
//! to have — using the same layout functions and shared-group table the
//! assembler uses — and verifies the assembled manifest against them. This
//! is the system's one real correctness guarantee: a module the resolver
//! decided should exist must have exactly the companion artifacts it
//! expects, most critically its stylesheet.
//!
//! Checks never short-circuit and violations are returned as data; callers
//! decide what is fatal.

use serde::Serialize;
use sitesmith_core::layout::{
    GLOBAL_STYLE_PATH, component_module_path, component_style_path, page_module_path,
    page_style_path, shared_style_path,
};
use sitesmith_core::{ArtifactKind, ArtifactManifest};
use sitesmith_features::{ResolvedFeatures, shared_style_group};
use thiserror::Error;
use tracing::debug;

/// Minimum byte size for a style artifact. Guards against an accidentally
/// emitted empty placeholder masquerading as real styling.
pub const MIN_STYLE_BYTES: usize = 64;

/// One rule violation, naming the offending path or token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum Violation {
    #[error("duplicate artifact path: {path} appears {count} times")]
    DuplicatePath { path: String, count: usize },

    #[error("page '{token}' has {count} page artifacts at {path}, expected exactly one")]
    PageArtifactCount {
        token: String,
        path: String,
        count: usize,
    },

    #[error("page '{token}' is missing its companion style artifact at {expected_path}")]
    MissingPageStyle {
        token: String,
        expected_path: String,
    },

    #[error("component '{token}' has {count} component artifacts at {path}, expected exactly one")]
    ComponentArtifactCount {
        token: String,
        path: String,
        count: usize,
    },

    #[error("component '{token}' is missing its companion style artifact at {expected_path}")]
    MissingComponentStyle {
        token: String,
        expected_path: String,
    },

    #[error("style artifact {path} is degenerate: {size} bytes, minimum is {minimum}")]
    DegenerateStyle {
        path: String,
        size: usize,
        minimum: usize,
    },

    #[error("style artifact {path} matches no resolved page or component")]
    OrphanStyle { path: String },
}

/// Result of checking one manifest. `passed` reflects hard violations only;
/// warnings (orphan styles) never fail a manifest.
#[derive(Debug, Clone, Serialize)]
pub struct ConsistencyReport {
    pub passed: bool,
    pub violations: Vec<Violation>,
    pub warnings: Vec<Violation>,
}

impl ConsistencyReport {
    pub fn is_clean(&self) -> bool {
        self.passed && self.warnings.is_empty()
    }
}

/// Check a manifest against the page and component sets resolved for the
/// same configuration. All rules run; nothing short-circuits.
pub fn check(manifest: &ArtifactManifest, resolved: &ResolvedFeatures) -> ConsistencyReport {
    let mut violations = Vec::new();
    let mut warnings = Vec::new();

    check_path_uniqueness(manifest, &mut violations);
    check_page_coverage(manifest, resolved, &mut violations);
    check_component_coverage(manifest, resolved, &mut violations);
    check_style_sizes(manifest, &mut violations);
    check_orphan_styles(manifest, resolved, &mut warnings);

    debug!(
        violations = violations.len(),
        warnings = warnings.len(),
        "consistency check complete"
    );

    ConsistencyReport {
        passed: violations.is_empty(),
        violations,
        warnings,
    }
}

fn check_path_uniqueness(manifest: &ArtifactManifest, violations: &mut Vec<Violation>) {
    let mut seen: Vec<(&str, usize)> = Vec::new();
    for artifact in manifest {
        match seen.iter_mut().find(|(path, _)| *path == artifact.path) {
            Some((_, count)) => *count += 1,
            None => seen.push((&artifact.path, 1)),
        }
    }
    for (path, count) in seen {
        if count > 1 {
            violations.push(Violation::DuplicatePath {
                path: path.to_string(),
                count,
            });
        }
    }
}

fn check_page_coverage(
    manifest: &ArtifactManifest,
    resolved: &ResolvedFeatures,
    violations: &mut Vec<Violation>,
) {
    for token in &resolved.pages {
        let module_path = page_module_path(token);
        let count = manifest
            .of_kind(ArtifactKind::Page)
            .filter(|a| a.path == module_path)
            .count();
        if count != 1 {
            violations.push(Violation::PageArtifactCount {
                token: token.clone(),
                path: module_path,
                count,
            });
        }

        let style_path = page_style_path(token);
        let has_style = manifest
            .of_kind(ArtifactKind::Style)
            .any(|a| a.path == style_path);
        if !has_style {
            violations.push(Violation::MissingPageStyle {
                token: token.clone(),
                expected_path: style_path,
            });
        }
    }
}

fn check_component_coverage(
    manifest: &ArtifactManifest,
    resolved: &ResolvedFeatures,
    violations: &mut Vec<Violation>,
) {
    for token in &resolved.components {
        let module_path = component_module_path(token);
        let count = manifest
            .of_kind(ArtifactKind::Component)
            .filter(|a| a.path == module_path)
            .count();
        if count != 1 {
            violations.push(Violation::ComponentArtifactCount {
                token: token.clone(),
                path: module_path,
                count,
            });
        }

        // Same exemption table the assembler consults: a grouped component
        // expects the group stylesheet, everything else a private one.
        let style_path = expected_component_style(token);
        let has_style = manifest
            .of_kind(ArtifactKind::Style)
            .any(|a| a.path == style_path);
        if !has_style {
            violations.push(Violation::MissingComponentStyle {
                token: token.clone(),
                expected_path: style_path,
            });
        }
    }
}

fn check_style_sizes(manifest: &ArtifactManifest, violations: &mut Vec<Violation>) {
    for artifact in manifest.of_kind(ArtifactKind::Style) {
        if artifact.content.len() < MIN_STYLE_BYTES {
            violations.push(Violation::DegenerateStyle {
                path: artifact.path.clone(),
                size: artifact.content.len(),
                minimum: MIN_STYLE_BYTES,
            });
        }
    }
}

/// A style with no matching token is suspicious but harmless: soft warning
fn check_orphan_styles(
    manifest: &ArtifactManifest,
    resolved: &ResolvedFeatures,
    warnings: &mut Vec<Violation>,
) {
    let mut expected: Vec<String> = vec![GLOBAL_STYLE_PATH.to_string()];
    for token in &resolved.pages {
        expected.push(page_style_path(token));
    }
    for token in &resolved.components {
        expected.push(expected_component_style(token));
    }

    for artifact in manifest.of_kind(ArtifactKind::Style) {
        if !expected.iter().any(|path| *path == artifact.path) {
            warnings.push(Violation::OrphanStyle {
                path: artifact.path.clone(),
            });
        }
    }
}

fn expected_component_style(token: &str) -> String {
    match shared_style_group(token) {
        Some(group) => shared_style_path(group),
        None => component_style_path(token),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitesmith_core::Artifact;

    fn manifest_for(tokens: &[&str]) -> (ArtifactManifest, ResolvedFeatures) {
        let config =
            sitesmith_core::Configuration::new("demo", "Acme").with_features(tokens.iter().copied());
        let resolved = sitesmith_features::resolve(&config.feature_tokens);
        let content = sitesmith_content::resolve(&config);
        let manifest = sitesmith_assemble::assemble(&config, &resolved, &content);
        (manifest, resolved)
    }

    #[test]
    fn test_assembled_manifest_passes() {
        let (manifest, resolved) = manifest_for(&["auth", "chat", "contact-form", "geolocation"]);
        let report = check(&manifest, &resolved);
        assert!(report.passed, "violations: {:?}", report.violations);
        assert!(report.warnings.is_empty(), "warnings: {:?}", report.warnings);
    }

    #[test]
    fn test_missing_component_style_detected() {
        let (manifest, resolved) = manifest_for(&["contact-form"]);
        let dropped = component_style_path("ContactForm");
        let mutated: ArtifactManifest = manifest
            .into_iter()
            .filter(|a| a.path != dropped)
            .collect();
        let report = check(&mutated, &resolved);
        assert!(!report.passed);
        assert!(report.violations.iter().any(|v| matches!(
            v,
            Violation::MissingComponentStyle { token, .. } if token == "ContactForm"
        )));
    }

    #[test]
    fn test_missing_shared_group_style_reported_per_member() {
        let (manifest, resolved) = manifest_for(&["chat"]);
        let dropped = shared_style_path("chat");
        let mutated: ArtifactManifest = manifest
            .into_iter()
            .filter(|a| a.path != dropped)
            .collect();
        let report = check(&mutated, &resolved);
        let missing: Vec<_> = report
            .violations
            .iter()
            .filter(|v| matches!(v, Violation::MissingComponentStyle { .. }))
            .collect();
        // LiveChat, ChatWidget, ChatMessage all expect the same group sheet
        assert_eq!(missing.len(), 3);
    }

    #[test]
    fn test_duplicate_path_detected() {
        let (mut manifest, resolved) = manifest_for(&[]);
        manifest.push(Artifact::new(
            "package.json",
            "{}",
            sitesmith_core::ArtifactKind::Config,
        ));
        let report = check(&manifest, &resolved);
        assert!(report.violations.iter().any(|v| matches!(
            v,
            Violation::DuplicatePath { path, count: 2 } if path == "package.json"
        )));
    }

    #[test]
    fn test_degenerate_style_detected() {
        let (manifest, resolved) = manifest_for(&[]);
        let mutated: ArtifactManifest = manifest
            .into_iter()
            .map(|mut a| {
                if a.path == page_style_path("about") {
                    a.content = ".a{}".to_string();
                }
                a
            })
            .collect();
        let report = check(&mutated, &resolved);
        assert!(report.violations.iter().any(|v| matches!(
            v,
            Violation::DegenerateStyle { size: 4, .. }
        )));
    }

    #[test]
    fn test_orphan_style_is_warning_not_failure() {
        let (mut manifest, resolved) = manifest_for(&[]);
        manifest.push(Artifact::new(
            "src/styles/components/widget.css",
            ".widget { display: block; margin: 0; padding: 1rem; border-radius: 8px; }\n",
            sitesmith_core::ArtifactKind::Style,
        ));
        let report = check(&manifest, &resolved);
        assert!(report.passed);
        assert!(!report.is_clean());
        assert!(report.warnings.iter().any(|v| matches!(
            v,
            Violation::OrphanStyle { path } if path == "src/styles/components/widget.css"
        )));
    }

    #[test]
    fn test_checks_do_not_short_circuit() {
        let (manifest, resolved) = manifest_for(&["contact-form"]);
        let dropped_style = component_style_path("ContactForm");
        let mut mutated: ArtifactManifest = manifest
            .into_iter()
            .filter(|a| a.path != dropped_style)
            .collect();
        mutated.push(Artifact::new(
            "package.json",
            "{}",
            sitesmith_core::ArtifactKind::Config,
        ));
        let report = check(&mutated, &resolved);
        // Both the duplicate and the missing style must be reported together
        assert!(report.violations.len() >= 2);
    }
}
