//! Configuration and manifest artifacts

use serde_json::json;
use sitesmith_core::{Artifact, ArtifactKind, Configuration};
use sitesmith_features::ResolvedFeatures;

pub fn generate(config: &Configuration, resolved: &ResolvedFeatures) -> Vec<Artifact> {
    vec![
        Artifact::new("package.json", package_json(config), ArtifactKind::Config),
        Artifact::new(
            "site.config.json",
            site_config(config, resolved),
            ArtifactKind::Config,
        ),
        Artifact::new("README.md", readme(config, resolved), ArtifactKind::Config),
    ]
}

fn package_json(config: &Configuration) -> String {
    let manifest = json!({
        "name": sanitize_package_name(&config.project_name),
        "private": true,
        "version": "0.1.0",
        "type": "module",
        "scripts": {
            "dev": "vite",
            "build": "vite build",
            "preview": "vite preview"
        },
        "dependencies": {
            "react": "^18.3.0",
            "react-dom": "^18.3.0",
            "react-router-dom": "^6.26.0"
        },
        "devDependencies": {
            "@vitejs/plugin-react": "^4.3.0",
            "vite": "^5.4.0"
        }
    });
    // to_string_pretty on a Value is deterministic: keys serialize sorted
    serde_json::to_string_pretty(&manifest).expect("static JSON value")
}

fn site_config(config: &Configuration, resolved: &ResolvedFeatures) -> String {
    let site = json!({
        "businessName": config.business_name,
        "industryCode": config.industry_code,
        "pages": resolved.pages,
        "components": resolved.components,
        "contact": {
            "email": config.business.email,
            "phone": config.business.phone,
            "address": config.business.address
        }
    });
    serde_json::to_string_pretty(&site).expect("static JSON value")
}

fn readme(config: &Configuration, resolved: &ResolvedFeatures) -> String {
    let mut pages_list = String::new();
    for page in &resolved.pages {
        pages_list.push_str(&format!("- `/{page}`\n"));
    }
    format!(
        "# {project}\n\n\
         Website for {business}, generated from a declarative configuration.\n\n\
         ## Pages\n\n{pages_list}\n\
         ## Getting started\n\n\
         ```sh\nnpm install\nnpm run dev\n```\n",
        project = config.project_name,
        business = config.business_name,
    )
}

/// npm package names must be lowercase and free of spaces
fn sanitize_package_name(name: &str) -> String {
    let sanitized: String = name
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '-'
            }
        })
        .collect();
    if sanitized.is_empty() {
        "generated-site".to_string()
    } else {
        sanitized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_name_sanitized() {
        assert_eq!(sanitize_package_name("My Site!"), "my-site-");
        assert_eq!(sanitize_package_name(""), "generated-site");
    }

    #[test]
    fn test_generates_three_config_artifacts() {
        let config = Configuration::new("demo", "Acme");
        let resolved = sitesmith_features::resolve(&config.feature_tokens);
        let artifacts = generate(&config, &resolved);
        assert_eq!(artifacts.len(), 3);
        assert!(artifacts.iter().all(|a| a.kind == ArtifactKind::Config));
    }

    #[test]
    fn test_site_config_lists_resolved_sets() {
        let config = Configuration::new("demo", "Acme").with_features(["chat"]);
        let resolved = sitesmith_features::resolve(&config.feature_tokens);
        let artifacts = generate(&config, &resolved);
        let site = artifacts.iter().find(|a| a.path == "site.config.json").unwrap();
        assert!(site.content.contains("\"chat\""));
        assert!(site.content.contains("LiveChat"));
    }
}
