//! Static asset artifacts

use serde_json::json;
use sitesmith_core::{Artifact, ArtifactKind, Configuration};

pub fn generate(config: &Configuration) -> Vec<Artifact> {
    vec![
        Artifact::new("public/favicon.svg", favicon(config), ArtifactKind::Asset),
        Artifact::new("public/robots.txt", robots(), ArtifactKind::Asset),
        Artifact::new(
            "public/manifest.webmanifest",
            webmanifest(config),
            ArtifactKind::Asset,
        ),
    ]
}

/// Monogram favicon from the first character of the business name
fn favicon(config: &Configuration) -> String {
    let initial = config
        .business_name
        .chars()
        .next()
        .unwrap_or('S')
        .to_uppercase()
        .to_string();
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 32 32\">\n\
         \x20 <rect width=\"32\" height=\"32\" rx=\"6\" fill=\"#2563eb\"/>\n\
         \x20 <text x=\"16\" y=\"22\" text-anchor=\"middle\" font-family=\"sans-serif\" font-size=\"18\" fill=\"#ffffff\">{initial}</text>\n\
         </svg>\n"
    )
}

fn robots() -> String {
    "User-agent: *\nAllow: /\n".to_string()
}

fn webmanifest(config: &Configuration) -> String {
    let manifest = json!({
        "name": config.business_name,
        "short_name": config.project_name,
        "start_url": "/",
        "display": "standalone",
        "icons": [{
            "src": "/favicon.svg",
            "sizes": "any",
            "type": "image/svg+xml"
        }]
    });
    serde_json::to_string_pretty(&manifest).expect("static JSON value")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_assets_generated() {
        let config = Configuration::new("demo", "Acme");
        let artifacts = generate(&config);
        assert_eq!(artifacts.len(), 3);
        assert!(artifacts.iter().all(|a| a.kind == ArtifactKind::Asset));
    }

    #[test]
    fn test_favicon_uses_business_initial() {
        let config = Configuration::new("demo", "acme");
        let artifacts = generate(&config);
        let favicon = artifacts.iter().find(|a| a.path == "public/favicon.svg").unwrap();
        assert!(favicon.content.contains(">A</text>"));
    }

    #[test]
    fn test_favicon_handles_empty_business_name() {
        let config = Configuration::new("demo", "");
        let artifacts = generate(&config);
        let favicon = artifacts.iter().find(|a| a.path == "public/favicon.svg").unwrap();
        assert!(favicon.content.contains(">S</text>"));
    }
}
