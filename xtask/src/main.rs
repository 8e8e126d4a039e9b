//! Development automation tasks for the Mergington workspace.
//!
//! Run with: `cargo xtask <command>`
//!
//! Output goes to stdout/stderr directly; this is a developer CLI.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::env;
use std::path::Path;
use std::process::{Command, ExitCode};

use anyhow::{bail, Context};

mod features;

fn main() -> ExitCode {
    let task = env::args().nth(1);

    let result = match task.as_deref() {
        Some("ci") => run_ci(),
        Some("fmt") => run_fmt(),
        Some("clippy") => run_clippy(),
        Some("test") => run_test(),
        Some("features") => features::check_feature_matrix(),
        Some("assets") => check_static_assets(Path::new("static")),
        Some("deny") => run_tool("deny", &["check"]),
        Some("audit") => run_tool("audit", &[]),
        Some("help") | None => {
            print_help();
            Ok(())
        }
        Some(unknown) => {
            eprintln!("Unknown task: {unknown}");
            eprintln!();
            print_help();
            Err(anyhow::anyhow!("Unknown task"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Task failed: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn print_help() {
    println!("Mergington Development Tasks");
    println!();
    println!("USAGE:");
    println!("    cargo xtask <TASK>");
    println!();
    println!("TASKS:");
    println!("    ci        Run fmt, clippy, features, assets, test, deny and audit");
    println!("    fmt       Check Rust code formatting");
    println!("    clippy    Run Clippy lints");
    println!("    test      Run all tests");
    println!("    features  Verify mergington-common feature combinations compile");
    println!("    assets    Verify the front-end files under static/ exist");
    println!("    deny      Check dependencies with cargo-deny");
    println!("    audit     Audit dependencies for security vulnerabilities");
    println!("    help      Show this help message");
}

fn run_ci() -> anyhow::Result<()> {
    type Step = (&'static str, fn() -> anyhow::Result<()>);
    let steps: [Step; 7] = [
        ("Checking Rust format", run_fmt),
        ("Running Clippy", run_clippy),
        ("Checking feature combinations", features::check_feature_matrix),
        ("Checking static assets", || check_static_assets(Path::new("static"))),
        ("Running tests", run_test),
        ("Checking dependencies", || run_tool("deny", &["check"])),
        ("Auditing dependencies", || run_tool("audit", &[])),
    ];

    for (index, (label, step)) in steps.iter().enumerate() {
        println!("\n==> Step {}/{}: {label}...", index + 1, steps.len());
        step()?;
    }

    println!("\n✓ All CI checks passed!");
    Ok(())
}

fn run_fmt() -> anyhow::Result<()> {
    cargo(&["fmt", "--all", "--", "--check"], "Format check failed. Run 'cargo fmt --all' to fix.")
}

fn run_clippy() -> anyhow::Result<()> {
    cargo(
        &["clippy", "--workspace", "--all-targets", "--all-features", "--", "-D", "warnings"],
        "Clippy run failed. See output above.",
    )
}

fn run_test() -> anyhow::Result<()> {
    cargo(&["test", "--workspace", "--all-features"], "Tests failed")
}

/// The server redirects `/` to `static/index.html`, which loads the other two.
fn check_static_assets(dir: &Path) -> anyhow::Result<()> {
    let missing: Vec<&str> = ["index.html", "app.js", "styles.css"]
        .into_iter()
        .filter(|name| !dir.join(name).is_file())
        .collect();

    if !missing.is_empty() {
        bail!("missing static assets in {}: {}", dir.display(), missing.join(", "));
    }

    println!("✓ static assets present in {}", dir.display());
    Ok(())
}

/// Run a cargo subcommand that ships as a separate binary (`cargo-deny`, `cargo-audit`).
fn run_tool(tool: &str, args: &[&str]) -> anyhow::Result<()> {
    let installed = Command::new("cargo").args([tool, "--version"]).output();

    if !installed.as_ref().is_ok_and(|o| o.status.success()) {
        eprintln!("cargo-{tool} is not installed.");
        eprintln!("Install it with: cargo install cargo-{tool}");
        bail!("cargo-{tool} not found");
    }

    let mut full = vec![tool];
    full.extend_from_slice(args);
    cargo(&full, &format!("cargo-{tool} found issues"))
}

fn cargo(args: &[&str], failure: &str) -> anyhow::Result<()> {
    let status = Command::new("cargo")
        .args(args)
        .status()
        .with_context(|| format!("Failed to run cargo {}", args.join(" ")))?;

    if !status.success() {
        bail!("{failure}");
    }

    Ok(())
}
