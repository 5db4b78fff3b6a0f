//! Project configuration loading

use std::path::Path;

use anyhow::{Context, Result, bail};
use sitesmith_core::Configuration;

/// Load a [`Configuration`] from a TOML or JSON file, by extension.
pub fn load(path: &Path) -> Result<Configuration> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;

    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    let config = match extension {
        "toml" => toml::from_str(&content)
            .with_context(|| format!("invalid TOML in {}", path.display()))?,
        "json" => serde_json::from_str(&content)
            .with_context(|| format!("invalid JSON in {}", path.display()))?,
        other => bail!("unsupported config format '{other}', expected .toml or .json"),
    };

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(name: &str, content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        (dir, path)
    }

    #[test]
    fn test_load_toml_config() {
        let (_dir, path) = write_temp(
            "site.toml",
            r#"
projectName = "my-site"
businessName = "Acme"
industryCode = "restaurant"
featureTokens = ["auth", "chat"]
"#,
        );
        let config = load(&path).unwrap();
        assert_eq!(config.project_name, "my-site");
        assert_eq!(config.feature_tokens, vec!["auth", "chat"]);
    }

    #[test]
    fn test_load_json_config() {
        let (_dir, path) = write_temp(
            "site.json",
            r#"{"projectName": "my-site", "businessName": "Acme"}"#,
        );
        let config = load(&path).unwrap();
        assert_eq!(config.business_name, "Acme");
        assert_eq!(config.industry_code, "general");
    }

    #[test]
    fn test_unsupported_extension_rejected() {
        let (_dir, path) = write_temp("site.yaml", "projectName: my-site");
        assert!(load(&path).is_err());
    }
}
