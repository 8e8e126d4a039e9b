use std::process::Command;

use anyhow::{Context, Result};

const CRATE: &str = "mergington-common";

const FEATURE_COMBINATIONS: &[&[&str]] = &[
    &[], // default
    &["foundation"],
    &["test-utils"],
];

/// Check that every supported feature combination of the shared crate compiles.
pub fn check_feature_matrix() -> Result<()> {
    println!("Testing {} {CRATE} feature combinations...", FEATURE_COMBINATIONS.len());

    for (index, features) in FEATURE_COMBINATIONS.iter().enumerate() {
        let joined = features.join(",");
        let label = if features.is_empty() { "default" } else { joined.as_str() };

        let mut command = Command::new("cargo");
        command.args(["check", "-p", CRATE, "--no-default-features"]);
        if !features.is_empty() {
            command.args(["--features", joined.as_str()]);
        }

        println!("\n[{}/{}] {label}", index + 1, FEATURE_COMBINATIONS.len());

        let status = command
            .status()
            .with_context(|| format!("Failed to run cargo check for '{label}'"))?;

        if !status.success() {
            anyhow::bail!("Feature combination '{label}' failed to compile");
        }

        println!("✅ Features '{label}' compiled successfully");
    }

    println!("\n✅ All {} feature combinations compile successfully!", FEATURE_COMBINATIONS.len());

    Ok(())
}
