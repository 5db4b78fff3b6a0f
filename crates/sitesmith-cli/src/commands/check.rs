use std::path::Path;

use anyhow::{Result, bail};
use sitesmith_engine::Generator;

use crate::config;

pub fn handle(config_path: &Path, json: bool) -> Result<()> {
    let configuration = config::load(config_path)?;
    let output = Generator::new().generate(&configuration);

    if json {
        println!("{}", serde_json::to_string_pretty(&output.report)?);
    } else {
        println!("manifest hash: {}", output.manifest_hash);
        println!("artifacts:     {}", output.manifest.len());
        println!("pages:         {}", output.resolved.pages.join(", "));
        println!("components:    {}", output.resolved.components.join(", "));
        for violation in &output.report.violations {
            println!("violation: {violation}");
        }
        for warning in &output.report.warnings {
            println!("warning: {warning}");
        }
        println!("result: {}", if output.report.passed { "PASS" } else { "FAIL" });
    }

    if !output.report.passed {
        bail!("consistency check failed");
    }
    Ok(())
}
