use std::path::Path;

use anyhow::{Context, Result, bail};
use sitesmith_core::ArtifactManifest;
use sitesmith_engine::Generator;
use tracing::info;

use crate::config;

pub fn handle(config_path: &Path, out: &Path, strict: bool) -> Result<()> {
    let configuration = config::load(config_path)?;
    let output = Generator::new().generate(&configuration);

    if !output.report.passed {
        for violation in &output.report.violations {
            eprintln!("violation: {violation}");
        }
        if strict {
            bail!(
                "manifest failed consistency check with {} violation(s)",
                output.report.violations.len()
            );
        }
    }
    for warning in &output.report.warnings {
        eprintln!("warning: {warning}");
    }

    write_manifest(&output.manifest, out)?;

    info!(
        out = %out.display(),
        artifacts = output.manifest.len(),
        hash = %output.manifest_hash,
        "site generated"
    );
    println!(
        "Generated {} artifacts into {} (manifest hash {})",
        output.manifest.len(),
        out.display(),
        output.manifest_hash
    );

    Ok(())
}

fn write_manifest(manifest: &ArtifactManifest, out: &Path) -> Result<()> {
    for artifact in manifest {
        let target = out.join(&artifact.path);
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        std::fs::write(&target, &artifact.content)
            .with_context(|| format!("failed to write {}", target.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitesmith_core::Configuration;

    #[test]
    fn test_write_manifest_creates_nested_paths() {
        let config = Configuration::new("demo", "Acme").with_features(["chat"]);
        let output = Generator::new().generate(&config);
        let dir = tempfile::tempdir().unwrap();

        write_manifest(&output.manifest, dir.path()).unwrap();

        assert!(dir.path().join("package.json").is_file());
        assert!(dir.path().join("src/pages/Home.jsx").is_file());
        assert!(dir.path().join("src/styles/components/chat.css").is_file());
    }
}
