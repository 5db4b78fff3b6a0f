//! Style artifacts
//!
//! Emits the global stylesheet, one stylesheet per page token, and one per
//! component token — except components declared in a shared style group,
//! which get exactly one stylesheet per group. The grouping decision comes
//! from the declarative table in `sitesmith_features::styles`; this module
//! must never special-case a component on its own.

use sitesmith_core::layout::{
    GLOBAL_STYLE_PATH, kebab_case, page_style_path, shared_style_path,
};
use sitesmith_core::{Artifact, ArtifactKind};
use sitesmith_features::{ResolvedFeatures, shared_style_group, style_groups};

pub fn generate(resolved: &ResolvedFeatures) -> Vec<Artifact> {
    let mut artifacts = vec![Artifact::new(
        GLOBAL_STYLE_PATH,
        global_stylesheet(),
        ArtifactKind::Style,
    )];

    for token in &resolved.pages {
        artifacts.push(Artifact::new(
            page_style_path(token),
            page_stylesheet(token),
            ArtifactKind::Style,
        ));
    }

    // Private component stylesheets first, in component order, then one
    // stylesheet per shared group in first-appearance order.
    for component in &resolved.components {
        if shared_style_group(component).is_some() {
            continue;
        }
        artifacts.push(Artifact::new(
            sitesmith_core::layout::component_style_path(component),
            component_stylesheet(component),
            ArtifactKind::Style,
        ));
    }

    for group in style_groups(&resolved.components) {
        let members: Vec<&String> = resolved
            .components
            .iter()
            .filter(|c| shared_style_group(c) == Some(group))
            .collect();
        artifacts.push(Artifact::new(
            shared_style_path(group),
            group_stylesheet(group, &members),
            ArtifactKind::Style,
        ));
    }

    artifacts
}

fn global_stylesheet() -> String {
    "\
:root {
  --color-primary: #2563eb;
  --color-surface: #ffffff;
  --color-text: #1f2937;
  --spacing: 1rem;
  --radius: 8px;
}

* {
  box-sizing: border-box;
  margin: 0;
}

body {
  font-family: system-ui, -apple-system, sans-serif;
  color: var(--color-text);
  background: var(--color-surface);
  line-height: 1.6;
}

main {
  max-width: 72rem;
  margin: 0 auto;
  padding: calc(var(--spacing) * 2);
}

a {
  color: var(--color-primary);
}
"
    .to_string()
}

fn page_stylesheet(token: &str) -> String {
    let extra = match token {
        "home" => "\n.hero {\n  text-align: center;\n  padding: calc(var(--spacing) * 4) 0;\n}\n\n.cta-primary {\n  display: inline-block;\n  background: var(--color-primary);\n  color: var(--color-surface);\n  padding: 0.75rem 1.5rem;\n  border-radius: var(--radius);\n}\n\n.services-preview {\n  display: grid;\n  grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));\n  gap: var(--spacing);\n}\n",
        "services" => "\n.service-list {\n  list-style: none;\n  padding: 0;\n  display: grid;\n  gap: var(--spacing);\n}\n",
        _ => "",
    };
    format!(
        ".{token}-page {{\n  display: flex;\n  flex-direction: column;\n  gap: var(--spacing);\n}}\n{extra}"
    )
}

fn component_stylesheet(component: &str) -> String {
    let class = kebab_case(component);
    let extra = match component {
        "Navigation" => "\n.navigation a {\n  margin-right: var(--spacing);\n}\n\n.navigation .brand {\n  font-weight: 700;\n}\n",
        "ContactForm" | "AuthForm" | "BookingForm" => "\nform input,\nform textarea {\n  width: 100%;\n  padding: 0.5rem;\n  border: 1px solid #d1d5db;\n  border-radius: var(--radius);\n}\n",
        _ => "",
    };
    format!(
        ".{class} {{\n  display: block;\n  padding: var(--spacing);\n  border-radius: var(--radius);\n}}\n{extra}"
    )
}

/// One stylesheet covering every member of a shared group
fn group_stylesheet(group: &str, members: &[&String]) -> String {
    let mut sheet = format!("/* Shared styles for the {group} component family */\n");
    for member in members {
        let class = kebab_case(member);
        sheet.push_str(&format!(
            "\n.{class} {{\n  display: block;\n  padding: var(--spacing);\n  border-radius: var(--radius);\n}}\n"
        ));
    }
    sheet
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_style_always_emitted() {
        let resolved = sitesmith_features::resolve::<&str>(&[]);
        let artifacts = generate(&resolved);
        assert!(artifacts.iter().any(|a| a.path == GLOBAL_STYLE_PATH));
    }

    #[test]
    fn test_one_style_per_page_token() {
        let resolved = sitesmith_features::resolve(&["auth", "geolocation"]);
        let artifacts = generate(&resolved);
        for token in &resolved.pages {
            let path = page_style_path(token);
            assert_eq!(
                artifacts.iter().filter(|a| a.path == path).count(),
                1,
                "expected one stylesheet for page {token}"
            );
        }
    }

    #[test]
    fn test_chat_family_shares_one_stylesheet() {
        let resolved = sitesmith_features::resolve(&["chat"]);
        let artifacts = generate(&resolved);
        let chat_styles: Vec<_> = artifacts
            .iter()
            .filter(|a| a.path == shared_style_path("chat"))
            .collect();
        assert_eq!(chat_styles.len(), 1);
        // No private stylesheets for the grouped members
        for member in ["LiveChat", "ChatWidget", "ChatMessage"] {
            let private = sitesmith_core::layout::component_style_path(member);
            assert!(!artifacts.iter().any(|a| a.path == private));
        }
        // The shared sheet styles every member
        assert!(chat_styles[0].content.contains(".live-chat"));
        assert!(chat_styles[0].content.contains(".chat-widget"));
        assert!(chat_styles[0].content.contains(".chat-message"));
    }

    #[test]
    fn test_ungrouped_component_gets_private_stylesheet() {
        let resolved = sitesmith_features::resolve(&["contact-form"]);
        let artifacts = generate(&resolved);
        let path = sitesmith_core::layout::component_style_path("ContactForm");
        assert_eq!(artifacts.iter().filter(|a| a.path == path).count(), 1);
    }

    #[test]
    fn test_stylesheets_are_not_degenerate() {
        let resolved = sitesmith_features::resolve(&["auth", "chat", "blog"]);
        for artifact in generate(&resolved) {
            assert!(
                artifact.content.len() >= 64,
                "{} is only {} bytes",
                artifact.path,
                artifact.content.len()
            );
        }
    }
}
