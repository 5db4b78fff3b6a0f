//! Artifact assembly
//!
//! One pure generator routine per artifact kind, plus the merge step that
//! fixes final manifest order. Reproducibility depends on this merge point:
//! the routines themselves are independent and order-free, but the sequence
//! in which their outputs are concatenated here is the single serialization
//! point, and it never changes. Identical configuration in, byte-identical
//! manifest out.

pub mod assets;
pub mod components;
pub mod config_files;
pub mod entry;
pub mod pages;
pub mod styles;

use sitesmith_core::{ArtifactManifest, Configuration, ContentBundle};
use sitesmith_features::ResolvedFeatures;
use tracing::debug;

/// Run every per-kind generator and merge the outputs into one manifest.
///
/// Merge order is fixed: config, entry, pages, components, styles, assets.
/// Within each kind the generator's own output order is preserved.
pub fn assemble(
    config: &Configuration,
    resolved: &ResolvedFeatures,
    content: &ContentBundle,
) -> ArtifactManifest {
    let mut manifest = ArtifactManifest::new();

    manifest.extend(config_files::generate(config, resolved));
    manifest.extend(entry::generate(config, resolved));
    manifest.extend(pages::generate(config, resolved, content));
    manifest.extend(components::generate(config, resolved));
    manifest.extend(styles::generate(resolved));
    manifest.extend(assets::generate(config));

    debug!(
        artifacts = manifest.len(),
        pages = resolved.pages.len(),
        components = resolved.components.len(),
        "manifest assembled"
    );

    manifest
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitesmith_core::ArtifactKind;

    fn generate(tokens: &[&str]) -> (ArtifactManifest, ResolvedFeatures) {
        let config = Configuration::new("demo", "Acme").with_features(tokens.iter().copied());
        let resolved = sitesmith_features::resolve(&config.feature_tokens);
        let content = sitesmith_content_stub(&config);
        (assemble(&config, &resolved, &content), resolved)
    }

    // Assembly is content-agnostic; a fixed bundle keeps these tests local.
    fn sitesmith_content_stub(config: &Configuration) -> ContentBundle {
        use sitesmith_core::{ServiceEntry, TestimonialEntry};
        ContentBundle {
            hero_title: format!("Welcome to {}", config.business_name),
            hero_subtitle: "subtitle".to_string(),
            services: vec![ServiceEntry::new("One", "First service.")],
            testimonials: vec![TestimonialEntry::new("A.", "Great.", 5)],
            about_text: "About us.".to_string(),
            cta_primary: "Go".to_string(),
            cta_secondary: "More".to_string(),
        }
    }

    #[test]
    fn test_assemble_is_deterministic() {
        let (first, _) = generate(&["auth", "chat", "geolocation"]);
        let (second, _) = generate(&["auth", "chat", "geolocation"]);
        assert_eq!(first, second);
        assert_eq!(
            first.manifest_hash().unwrap(),
            second.manifest_hash().unwrap()
        );
    }

    #[test]
    fn test_no_duplicate_paths_for_typical_configs() {
        for tokens in [
            &[][..],
            &["auth"][..],
            &["auth", "chat", "contact-form", "geolocation"][..],
            &["profile", "gallery", "blog", "booking", "social"][..],
        ] {
            let (manifest, _) = generate(tokens);
            let mut paths: Vec<_> = manifest.iter().map(|a| a.path.clone()).collect();
            let total = paths.len();
            paths.sort();
            paths.dedup();
            assert_eq!(paths.len(), total, "duplicates for {tokens:?}");
        }
    }

    #[test]
    fn test_every_page_token_has_page_artifact() {
        let (manifest, resolved) = generate(&["auth", "chat", "contact-form"]);
        for token in &resolved.pages {
            let path = sitesmith_core::layout::page_module_path(token);
            let found = manifest
                .of_kind(ArtifactKind::Page)
                .any(|a| a.path == path);
            assert!(found, "no page artifact for {token}");
        }
    }

    #[test]
    fn test_every_component_token_has_component_artifact() {
        let (manifest, resolved) = generate(&["auth", "chat", "contact-form"]);
        for component in &resolved.components {
            let path = sitesmith_core::layout::component_module_path(component);
            let found = manifest
                .of_kind(ArtifactKind::Component)
                .any(|a| a.path == path);
            assert!(found, "no component artifact for {component}");
        }
    }

    #[test]
    fn test_merge_order_is_kind_grouped() {
        let (manifest, _) = generate(&["chat"]);
        let kinds: Vec<_> = manifest.iter().map(|a| a.kind).collect();
        let mut sorted_by_first_appearance = kinds.clone();
        sorted_by_first_appearance.dedup();
        assert_eq!(
            sorted_by_first_appearance,
            vec![
                ArtifactKind::Config,
                ArtifactKind::Entry,
                ArtifactKind::Page,
                ArtifactKind::Component,
                ArtifactKind::Style,
                ArtifactKind::Asset,
            ]
        );
    }
}
